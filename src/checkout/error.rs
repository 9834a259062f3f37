use crate::api::ApiError;
use crate::cart::CartError;
use thiserror::Error;

/// Why an order could not be placed. Messages are shown to the customer.
#[derive(Debug, Error)]
pub enum CheckoutError {
    #[error("Please enter your name")]
    MissingName,

    #[error("Your cart is empty")]
    EmptyCart,

    #[error("Failed to place order: {0}")]
    Submit(#[from] ApiError),

    #[error("Cart unavailable: {0}")]
    Cart(#[from] CartError),
}
