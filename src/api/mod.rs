//! # Ordering API
//!
//! Every piece of shared data (menu, orders) is owned by the remote service.
//! [`CafeApi`] is the seam between the local stores and that service:
//!
//! - [`HttpApi`] talks JSON over HTTP to `{base_url}/api/...`
//! - [`InMemoryApi`] keeps everything in process, for tests and demos
//!
//! Calls are never retried. A failure is logged where it happens and returned
//! as an [`ApiError`].

pub mod error;
pub mod http;
pub mod memory;

pub use error::ApiError;
pub use http::HttpApi;
pub use memory::InMemoryApi;

use crate::model::{
    Category, MenuItem, MenuItemCreate, MenuItemId, Order, OrderCreate, OrderId, OrderStatus,
};
use async_trait::async_trait;

#[async_trait]
pub trait CafeApi: Send + Sync {
    /// Available menu items.
    async fn list_menu(&self) -> Result<Vec<MenuItem>, ApiError>;

    /// Available menu items in one category.
    async fn list_menu_by_category(&self, category: Category) -> Result<Vec<MenuItem>, ApiError>;

    async fn get_menu_item(&self, id: &MenuItemId) -> Result<MenuItem, ApiError>;

    async fn create_menu_item(&self, item: &MenuItemCreate) -> Result<MenuItem, ApiError>;

    async fn update_menu_item(
        &self,
        id: &MenuItemId,
        item: &MenuItemCreate,
    ) -> Result<MenuItem, ApiError>;

    /// Submit an order. The service assigns the id and computes the total.
    async fn create_order(&self, order: &OrderCreate) -> Result<Order, ApiError>;

    /// Every order, newest first.
    async fn list_orders(&self) -> Result<Vec<Order>, ApiError>;

    async fn get_order(&self, id: &OrderId) -> Result<Order, ApiError>;

    /// Set an order's status and return the updated record.
    async fn update_order_status(
        &self,
        id: &OrderId,
        status: OrderStatus,
    ) -> Result<Order, ApiError>;
}
