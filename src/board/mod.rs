//! # Order Board
//!
//! The admin dashboard's local view of the order list. Like the cart it is
//! owned by a single store task; the dashboard replaces it wholesale on every
//! refresh and patches single records after a status change.
//!
//! - [`state`] - [`OrderBoard`] and its [`BoardAction`] transitions
//! - [`new()`] - Factory function that creates the store and its client

pub mod state;

pub use state::*;

use store_actor::{StoreActor, StoreClient};

/// Creates a new, not-yet-loaded board store and its client.
pub fn new() -> (StoreActor<OrderBoard>, StoreClient<OrderBoard>) {
    StoreActor::new(OrderBoard::default(), 32)
}
