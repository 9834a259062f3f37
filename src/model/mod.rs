//! Wire-level data structures shared with the ordering API.
//!
//! Menu items and orders are owned by the remote service; these types only
//! mirror its JSON shapes. Prices are exact decimals throughout.

pub mod menu;
pub mod money;
pub mod order;

pub use menu::*;
pub use money::*;
pub use order::*;

use thiserror::Error;

/// Errors raised when parsing model values from user input.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ParseModelError {
    /// The text does not name a menu category.
    #[error("unknown category: {0}")]
    UnknownCategory(String),

    /// The text does not name an order status.
    #[error("unknown order status: {0}")]
    UnknownStatus(String),
}
