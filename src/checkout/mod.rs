//! # Checkout Flow
//!
//! Turns the current cart plus the customer's contact details into an order
//! on the service.
//!
//! 1. The trimmed name must be non-empty, then the cart must be non-empty.
//! 2. Each cart line becomes `{menu_item_id, quantity, price, name}`.
//! 3. On success the cart is cleared; on failure it is left as it was.

pub mod error;

pub use error::*;

use crate::api::CafeApi;
use crate::cart::Cart;
use crate::clients::CartClient;
use crate::model::{OrderCreate, OrderId, OrderItem, OrderStatus};
use rust_decimal::Decimal;
use std::sync::Arc;
use store_actor::StoreHandle;
use tracing::{error, info, instrument};

/// Contact fields collected at checkout. Phone and notes are optional.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CustomerInfo {
    pub name: String,
    pub phone: String,
    pub notes: String,
}

impl CustomerInfo {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = phone.into();
        self
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = notes.into();
        self
    }
}

/// What the customer sees after a successful submission.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderConfirmation {
    pub order_id: OrderId,
    pub total: Decimal,
    pub status: OrderStatus,
}

fn non_empty(text: &str) -> Option<String> {
    let trimmed = text.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Validate and build the order payload for a cart snapshot.
pub fn build_order(cart: &Cart, customer: &CustomerInfo) -> Result<OrderCreate, CheckoutError> {
    let customer_name = non_empty(&customer.name).ok_or(CheckoutError::MissingName)?;
    if cart.is_empty() {
        return Err(CheckoutError::EmptyCart);
    }

    let items = cart
        .items()
        .iter()
        .map(|line| OrderItem {
            menu_item_id: line.id.clone(),
            quantity: line.quantity,
            price: line.price,
            name: line.name.clone(),
        })
        .collect();

    Ok(OrderCreate {
        customer_name,
        customer_phone: non_empty(&customer.phone),
        items,
        notes: non_empty(&customer.notes),
    })
}

#[derive(Clone)]
pub struct Checkout {
    api: Arc<dyn CafeApi>,
    cart: CartClient,
}

impl Checkout {
    pub fn new(api: Arc<dyn CafeApi>, cart: CartClient) -> Self {
        Self { api, cart }
    }

    /// Submit the current cart as a new order.
    #[instrument(skip(self, customer), fields(customer = %customer.name.trim()))]
    pub async fn submit(&self, customer: &CustomerInfo) -> Result<OrderConfirmation, CheckoutError> {
        let cart = self.cart.snapshot().await?;
        let payload = build_order(&cart, customer)?;

        let order = match self.api.create_order(&payload).await {
            Ok(order) => order,
            Err(e) => {
                error!(error = %e, "Error placing order");
                return Err(e.into());
            }
        };

        // Order is already placed; a failed clear must not hide its id
        if let Err(e) = self.cart.clear().await {
            error!(error = %e, order_id = %order.id, "Order placed but cart not cleared");
        }

        info!(order_id = %order.id, total = %order.total_amount, "Order placed");
        Ok(OrderConfirmation {
            order_id: order.id,
            total: order.total_amount,
            status: order.status,
        })
    }
}
