//! # Store Task
//!
//! This module defines the `StoreActor`, the task that owns one piece of
//! state. It applies actions sequentially and publishes each resulting
//! snapshot to subscribers.

use crate::client::StoreClient;
use crate::message::StoreRequest;
use crate::reducer::{Reducer, Snapshot};
use std::sync::Arc;
use tokio::sync::{mpsc, watch};
use tracing::{debug, info};

/// The task that owns a [`Reducer`] state.
///
/// # Architecture Note
/// This struct is the "Server" half of the store. It owns the current
/// snapshot and the receiver end of the request channel. Because only this
/// task ever replaces the snapshot, no locking is involved; concurrent
/// dispatches from several clients are simply queued and applied in arrival
/// order.
///
/// # Usage Pattern
///
/// 1.  **Create**: call `StoreActor::new()` to get the `actor` and its `client`.
/// 2.  **Run**: spawn `actor.run()` in a background task.
/// 3.  **Use**: dispatch actions or read snapshots through the client.
///
/// # Operations
///
/// * **Dispatch**:
///     1. Calls [`Reducer::reduce`] on the current snapshot.
///     2. Wraps the result in a new `Arc` and bumps the version counter.
///     3. Publishes the snapshot on the `watch` channel.
///     4. Answers the caller with the same snapshot.
///
/// * **Snapshot**:
///     1. Answers with a clone of the current `Arc`.
pub struct StoreActor<S: Reducer> {
    receiver: mpsc::Receiver<StoreRequest<S>>,
    state: Snapshot<S>,
    version: u64,
    publisher: watch::Sender<Snapshot<S>>,
}

impl<S: Reducer> StoreActor<S> {
    /// Creates a new `StoreActor` holding `initial` and its `StoreClient`.
    ///
    /// `buffer_size` is the capacity of the request channel. When it is full,
    /// client calls wait until the task catches up.
    pub fn new(initial: S, buffer_size: usize) -> (Self, StoreClient<S>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let state = Arc::new(initial);
        let (publisher, subscriber) = watch::channel(state.clone());
        let actor = Self {
            receiver,
            state,
            version: 0,
            publisher,
        };
        let client = StoreClient::new(sender, subscriber);
        (actor, client)
    }

    /// Runs the store's event loop until every client has been dropped.
    pub async fn run(mut self) {
        // Extract just the type name (e.g., "Cart" instead of "coffee_order::cart::state::Cart")
        let state_type = std::any::type_name::<S>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(state_type, "Store started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                StoreRequest::Dispatch { action, respond_to } => {
                    debug!(state_type, ?action, "Dispatch");
                    let next = Arc::new(self.state.reduce(action));
                    self.state = next.clone();
                    self.version += 1;
                    self.publisher.send_replace(next.clone());
                    debug!(state_type, version = self.version, "Applied");
                    let _ = respond_to.send(Ok(next));
                }
                StoreRequest::Snapshot { respond_to } => {
                    debug!(state_type, version = self.version, "Snapshot");
                    let _ = respond_to.send(Ok(self.state.clone()));
                }
            }
        }

        info!(state_type, version = self.version, "Shutdown");
    }
}
