//! # Cart Store
//!
//! The shopping cart is the only piece of business state the ordering client
//! owns. It lives in a single [`StoreActor`] task and changes only through
//! [`CartAction`]s, each producing a fresh immutable [`Cart`] snapshot.
//!
//! ## Structure
//!
//! - [`state`] - [`Cart`] and [`LineItem`] with the derived totals
//! - [`actions`] - [`CartAction`] and the [`Reducer`](store_actor::Reducer) implementation
//! - [`error`] - [`CartError`] returned by the cart client
//! - [`new()`] - Factory function that creates the store and its client
//!
//! ## Usage
//!
//! ```rust
//! use coffee_order::cart;
//! use coffee_order::clients::CartClient;
//! use coffee_order::model::MenuItemId;
//! use rust_decimal::Decimal;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (actor, inner) = cart::new();
//!     tokio::spawn(actor.run());
//!     let cart = CartClient::new(inner);
//!
//!     let id = MenuItemId::from("arabic-coffee");
//!     cart.add_line(id.clone(), "Arabic Coffee", Decimal::new(15, 0)).await?;
//!     cart.add_line(id.clone(), "Arabic Coffee", Decimal::new(15, 0)).await?;
//!
//!     let snapshot = cart.update_quantity(id, 1).await?;
//!     assert_eq!(snapshot.total_price(), Decimal::new(15, 0));
//!     Ok(())
//! }
//! ```

pub mod actions;
pub mod error;
pub mod state;

pub use actions::*;
pub use error::*;
pub use state::*;

use store_actor::{StoreActor, StoreClient};

/// Creates a new, empty cart store and its client.
pub fn new() -> (StoreActor<Cart>, StoreClient<Cart>) {
    StoreActor::new(Cart::default(), 32)
}
