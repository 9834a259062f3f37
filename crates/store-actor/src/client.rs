//! # Store Client
//!
//! The generic handle used to talk to a [`StoreActor`](crate::StoreActor).

use crate::error::StoreError;
use crate::message::StoreRequest;
use crate::reducer::{Reducer, Snapshot};
use tokio::sync::{mpsc, oneshot, watch};

/// A type-safe handle for a store task.
///
/// Holds the request sender and a `watch` receiver for published snapshots,
/// so cloning is inexpensive and clones can be moved into any task.
pub struct StoreClient<S: Reducer> {
    sender: mpsc::Sender<StoreRequest<S>>,
    subscriber: watch::Receiver<Snapshot<S>>,
}

impl<S: Reducer> Clone for StoreClient<S> {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
            subscriber: self.subscriber.clone(),
        }
    }
}

impl<S: Reducer> StoreClient<S> {
    pub fn new(
        sender: mpsc::Sender<StoreRequest<S>>,
        subscriber: watch::Receiver<Snapshot<S>>,
    ) -> Self {
        Self { sender, subscriber }
    }

    /// Apply `action` and wait for the resulting snapshot.
    pub async fn dispatch(&self, action: S::Action) -> Result<Snapshot<S>, StoreError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(StoreRequest::Dispatch { action, respond_to })
            .await
            .map_err(|_| StoreError::StoreClosed)?;
        response.await.map_err(|_| StoreError::StoreDropped)?
    }

    /// Read the current snapshot through the store task.
    pub async fn snapshot(&self) -> Result<Snapshot<S>, StoreError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(StoreRequest::Snapshot { respond_to })
            .await
            .map_err(|_| StoreError::StoreClosed)?;
        response.await.map_err(|_| StoreError::StoreDropped)?
    }

    /// A receiver that is notified every time the store publishes.
    pub fn subscribe(&self) -> watch::Receiver<Snapshot<S>> {
        self.subscriber.clone()
    }
}
