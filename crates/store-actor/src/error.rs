//! # Store Errors
//!
//! Errors raised by the plumbing between a [`StoreClient`](crate::StoreClient)
//! and its [`StoreActor`](crate::StoreActor). Reducers themselves cannot fail.

/// Errors that can occur while talking to a store task.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("Store closed")]
    StoreClosed,
    #[error("Store dropped response channel")]
    StoreDropped,
}
