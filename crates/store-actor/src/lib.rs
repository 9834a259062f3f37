//! # Store Actor
//!
//! Building blocks for single-owner application state. A piece of state that
//! implements [`Reducer`] is owned by exactly one [`StoreActor`] task. Every
//! change is an explicit transition `(state, action) -> new state`, and the
//! result is published as an immutable [`Snapshot`].
//!
//! ## Why a store task?
//!
//! - **One writer**: the task applies actions one at a time, so the state never
//!   needs a `Mutex` or `RwLock`.
//! - **No partial updates**: readers only ever see whole snapshots (`Arc<S>`),
//!   never a half-applied action.
//! - **Cheap handles**: [`StoreClient`] is a cloneable sender plus a
//!   `watch` receiver, so views can be handed to any task.
//!
//! The crate separates concerns into three layers:
//!
//! 1. **State Layer** ([`Reducer`]) - your state and its transition function
//! 2. **Runtime Layer** ([`StoreActor`]) - the task that owns and publishes the state
//! 3. **Interface Layer** ([`StoreClient`], [`StoreHandle`]) - typed access from the rest of the app
//!
//! ## Example
//!
//! ```rust
//! use store_actor::{Reducer, StoreActor};
//!
//! #[derive(Clone, Debug, Default)]
//! struct Counter {
//!     value: i64,
//! }
//!
//! #[derive(Clone, Debug)]
//! enum CounterAction {
//!     Add(i64),
//!     Reset,
//! }
//!
//! impl Reducer for Counter {
//!     type Action = CounterAction;
//!
//!     fn reduce(&self, action: CounterAction) -> Self {
//!         match action {
//!             CounterAction::Add(n) => Self { value: self.value + n },
//!             CounterAction::Reset => Self::default(),
//!         }
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let (actor, client) = StoreActor::new(Counter::default(), 8);
//!     tokio::spawn(actor.run());
//!
//!     let snapshot = client.dispatch(CounterAction::Add(2)).await.unwrap();
//!     assert_eq!(snapshot.value, 2);
//!
//!     client.dispatch(CounterAction::Reset).await.unwrap();
//!     assert_eq!(client.snapshot().await.unwrap().value, 0);
//! }
//! ```
//!
//! ## Shutdown
//!
//! A store task stops when every [`StoreClient`] clone has been dropped. The
//! receiver returns `None`, the loop ends, and the final state is logged.
//!
//! ## Testing
//!
//! [`mock::MockStore`] answers requests from a script of expectations instead of
//! a real reducer, which lets client wrappers be tested on their own.

pub mod actor;
pub mod client;
pub mod error;
pub mod handle;
pub mod message;
pub mod mock;
pub mod reducer;
pub mod tracing;

pub use actor::StoreActor;
pub use client::StoreClient;
pub use error::StoreError;
pub use handle::StoreHandle;
pub use message::{Response, StoreRequest};
pub use reducer::{Reducer, Snapshot};
