//! # StoreHandle Trait
//!
//! Common interface for domain-specific store clients, adding default
//! `snapshot` and `subscribe` methods on top of a generic [`StoreClient`].
use crate::{Reducer, Snapshot, StoreClient, StoreError};
use async_trait::async_trait;
use tokio::sync::watch;

/// Trait for domain clients that wrap a [`StoreClient`].
///
/// # Example
///
/// ```rust
/// use store_actor::{Reducer, StoreActor, StoreClient, StoreError, StoreHandle};
/// use async_trait::async_trait;
///
/// #[derive(Clone, Debug, Default)]
/// struct Visits(u32);
///
/// #[derive(Clone, Debug)]
/// struct Visit;
///
/// impl Reducer for Visits {
///     type Action = Visit;
///     fn reduce(&self, _: Visit) -> Self { Visits(self.0 + 1) }
/// }
///
/// #[derive(Debug, thiserror::Error)]
/// #[error("visits unavailable: {0}")]
/// struct VisitError(String);
///
/// struct VisitClient {
///     inner: StoreClient<Visits>,
/// }
///
/// #[async_trait]
/// impl StoreHandle<Visits> for VisitClient {
///     type Error = VisitError;
///
///     fn inner(&self) -> &StoreClient<Visits> {
///         &self.inner
///     }
///
///     fn map_error(e: StoreError) -> VisitError {
///         VisitError(e.to_string())
///     }
/// }
///
/// #[tokio::main]
/// async fn main() {
///     let (actor, inner) = StoreActor::new(Visits::default(), 4);
///     tokio::spawn(actor.run());
///     let client = VisitClient { inner };
///
///     client.inner().dispatch(Visit).await.unwrap();
///     // snapshot() is provided by the trait
///     assert_eq!(client.snapshot().await.unwrap().0, 1);
/// }
/// ```
#[async_trait]
pub trait StoreHandle<S: Reducer>: Send + Sync {
    /// The domain-specific error type.
    type Error: Send + Sync;

    /// Access the inner generic StoreClient.
    fn inner(&self) -> &StoreClient<S>;

    /// Map store errors to the domain error type.
    fn map_error(e: StoreError) -> Self::Error;

    /// Fetch the current state through the store task.
    #[tracing::instrument(skip(self))]
    async fn snapshot(&self) -> Result<Snapshot<S>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().snapshot().await.map_err(Self::map_error)
    }

    /// Subscribe to every snapshot the store publishes.
    fn subscribe(&self) -> watch::Receiver<Snapshot<S>> {
        self.inner().subscribe()
    }
}
