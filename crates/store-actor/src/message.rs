//! # Store Messages
//!
//! The request type carried from a [`StoreClient`](crate::StoreClient) to its
//! [`StoreActor`](crate::StoreActor).

use crate::error::StoreError;
use crate::reducer::{Reducer, Snapshot};
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by stores.
pub type Response<T> = oneshot::Sender<Result<T, StoreError>>;

/// Internal message type sent to the store task.
///
/// - **Dispatch**: apply one [`Reducer::Action`] and answer with the new snapshot.
/// - **Snapshot**: answer with the current snapshot without changing anything.
#[derive(Debug)]
pub enum StoreRequest<S: Reducer> {
    Dispatch {
        action: S::Action,
        respond_to: Response<Snapshot<S>>,
    },
    Snapshot {
        respond_to: Response<Snapshot<S>>,
    },
}
