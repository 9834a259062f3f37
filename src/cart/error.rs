use crate::model::MenuItemId;
use store_actor::StoreError;
use thiserror::Error;

/// Errors surfaced by [`CartClient`](crate::clients::CartClient).
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CartError {
    /// Unit prices must be zero or more.
    #[error("Item {0} has a negative price")]
    NegativePrice(MenuItemId),

    #[error("Cart unavailable: {0}")]
    Store(#[from] StoreError),
}
