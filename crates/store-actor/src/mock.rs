//! # Mock Store & Testing Guide
//!
//! [`MockStore<S>`] hands out a real [`StoreClient<S>`] whose requests are
//! answered from a queue of expectations instead of a reducer. Use it to test
//! wrapper clients (argument mapping, error mapping) without running the real
//! transition function.
//!
//! ## When to use Mocks vs Real Stores
//!
//! | Feature | MockStore | Real StoreActor |
//! |---------|-----------|-----------------|
//! | **State** | Scripted responses | Real reducer |
//! | **Use Case** | Testing code *around* the client | Testing the reducer or full flows |
//! | **Error Injection** | Easy (`return_err`) | Not possible (reducers never fail) |
//!
//! ## Example
//!
//! ```rust
//! use store_actor::mock::MockStore;
//! use store_actor::{Reducer, StoreError};
//! use std::sync::Arc;
//!
//! #[derive(Clone, Debug, Default, PartialEq)]
//! struct Lamp { on: bool }
//!
//! #[derive(Clone, Debug, PartialEq)]
//! enum LampAction { Toggle }
//!
//! impl Reducer for Lamp {
//!     type Action = LampAction;
//!     fn reduce(&self, _: LampAction) -> Self { Lamp { on: !self.on } }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut mock = MockStore::new(Lamp::default());
//!     mock.expect_dispatch().return_ok(Lamp { on: true });
//!     mock.expect_snapshot().return_err(StoreError::StoreClosed);
//!
//!     let client = mock.client();
//!     let lit = client.dispatch(LampAction::Toggle).await.unwrap();
//!     assert_eq!(*lit, Lamp { on: true });
//!     assert!(client.snapshot().await.is_err());
//!
//!     assert_eq!(mock.dispatched(), vec![LampAction::Toggle]);
//!     mock.verify();
//! }
//! ```
//!
//! ## Channel-level helpers
//!
//! [`create_mock_store`] returns a client plus the raw request receiver, and
//! [`expect_dispatch`] / [`expect_snapshot`] pull the next request off it so a
//! test can inspect the action and answer by hand.

use crate::client::StoreClient;
use crate::error::StoreError;
use crate::message::StoreRequest;
use crate::reducer::{Reducer, Snapshot};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::{mpsc, oneshot, watch};

// =============================================================================
// EXPECTATION BUILDER API
// =============================================================================

/// Represents an expected request to the mock store.
enum Expectation<S: Reducer> {
    Dispatch {
        response: Result<Snapshot<S>, StoreError>,
    },
    Snapshot {
        response: Result<Snapshot<S>, StoreError>,
    },
}

type Expectations<S> = Arc<Mutex<VecDeque<Expectation<S>>>>;

/// A mock store with expectation tracking for fluent testing.
pub struct MockStore<S: Reducer> {
    client: StoreClient<S>,
    expectations: Expectations<S>,
    dispatched: Arc<Mutex<Vec<S::Action>>>,
    _publisher: watch::Sender<Snapshot<S>>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<S: Reducer> MockStore<S> {
    /// Creates a mock whose subscribers start at `initial`.
    pub fn new(initial: S) -> Self {
        let (sender, mut receiver) = mpsc::channel::<StoreRequest<S>>(100);
        let (publisher, subscriber) = watch::channel(Arc::new(initial));
        let expectations: Expectations<S> = Arc::new(Mutex::new(VecDeque::new()));
        let dispatched = Arc::new(Mutex::new(Vec::new()));

        let expectations_clone = expectations.clone();
        let dispatched_clone = dispatched.clone();
        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let expectation = expectations_clone
                    .lock()
                    .expect("mock expectations poisoned")
                    .pop_front();

                match (request, expectation) {
                    (
                        StoreRequest::Dispatch { action, respond_to },
                        Some(Expectation::Dispatch { response }),
                    ) => {
                        dispatched_clone
                            .lock()
                            .expect("mock dispatch log poisoned")
                            .push(action);
                        let _ = respond_to.send(response);
                    }
                    (
                        StoreRequest::Snapshot { respond_to },
                        Some(Expectation::Snapshot { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    _ => {
                        panic!("Unexpected request or expectation mismatch");
                    }
                }
            }
        });

        Self {
            client: StoreClient::new(sender, subscriber),
            expectations,
            dispatched,
            _publisher: publisher,
            _handle: handle,
        }
    }

    /// Returns a client wired to this mock.
    pub fn client(&self) -> StoreClient<S> {
        self.client.clone()
    }

    /// Expects a `dispatch` request.
    pub fn expect_dispatch(&mut self) -> ExpectationBuilder<S> {
        ExpectationBuilder {
            kind: ExpectationKind::Dispatch,
            expectations: self.expectations.clone(),
        }
    }

    /// Expects a `snapshot` request.
    pub fn expect_snapshot(&mut self) -> ExpectationBuilder<S> {
        ExpectationBuilder {
            kind: ExpectationKind::Snapshot,
            expectations: self.expectations.clone(),
        }
    }

    /// Actions received so far, in arrival order.
    pub fn dispatched(&self) -> Vec<S::Action> {
        self.dispatched
            .lock()
            .expect("mock dispatch log poisoned")
            .clone()
    }

    /// Verifies that all expectations were met.
    pub fn verify(&self) {
        let exps = self.expectations.lock().expect("mock expectations poisoned");
        if !exps.is_empty() {
            panic!("Not all expectations were met. {} remaining", exps.len());
        }
    }
}

enum ExpectationKind {
    Dispatch,
    Snapshot,
}

/// Builder returned by [`MockStore::expect_dispatch`] and [`MockStore::expect_snapshot`].
pub struct ExpectationBuilder<S: Reducer> {
    kind: ExpectationKind,
    expectations: Expectations<S>,
}

impl<S: Reducer> ExpectationBuilder<S> {
    /// Answer the request with `state`.
    pub fn return_ok(self, state: S) {
        self.push(Ok(Arc::new(state)));
    }

    /// Answer the request with an error.
    pub fn return_err(self, error: StoreError) {
        self.push(Err(error));
    }

    fn push(self, response: Result<Snapshot<S>, StoreError>) {
        let expectation = match self.kind {
            ExpectationKind::Dispatch => Expectation::Dispatch { response },
            ExpectationKind::Snapshot => Expectation::Snapshot { response },
        };
        self.expectations
            .lock()
            .expect("mock expectations poisoned")
            .push_back(expectation);
    }
}

// =============================================================================
// CHANNEL-LEVEL HELPERS
// =============================================================================

/// Creates a client and the raw receiver for asserting requests by hand.
pub fn create_mock_store<S: Reducer>(
    initial: S,
    buffer_size: usize,
) -> (StoreClient<S>, mpsc::Receiver<StoreRequest<S>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    let (_publisher, subscriber) = watch::channel(Arc::new(initial));
    (StoreClient::new(sender, subscriber), receiver)
}

/// Helper to verify that the next message is a Dispatch request.
pub async fn expect_dispatch<S: Reducer>(
    receiver: &mut mpsc::Receiver<StoreRequest<S>>,
) -> Option<(
    S::Action,
    oneshot::Sender<Result<Snapshot<S>, StoreError>>,
)> {
    match receiver.recv().await {
        Some(StoreRequest::Dispatch { action, respond_to }) => Some((action, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a Snapshot request.
pub async fn expect_snapshot<S: Reducer>(
    receiver: &mut mpsc::Receiver<StoreRequest<S>>,
) -> Option<oneshot::Sender<Result<Snapshot<S>, StoreError>>> {
    match receiver.recv().await {
        Some(StoreRequest::Snapshot { respond_to }) => Some(respond_to),
        _ => None,
    }
}
