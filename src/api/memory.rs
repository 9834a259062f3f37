//! In-process [`CafeApi`] that behaves like the real service.
//!
//! Used by the tests in place of a running service. Failures can be queued
//! with [`InMemoryApi::fail_next`]; each queued error is returned by the next
//! call, whatever it is.

use super::{ApiError, CafeApi};
use crate::model::{
    Category, MenuItem, MenuItemCreate, MenuItemId, Order, OrderCreate, OrderId, OrderStatus,
};
use async_trait::async_trait;
use chrono::Utc;
use std::collections::VecDeque;
use std::sync::Mutex;
use tracing::{debug, instrument};

#[derive(Default)]
struct Tables {
    menu: Vec<MenuItem>,
    /// Newest first, matching the service's listing order.
    orders: Vec<Order>,
    next_id: u64,
    failures: VecDeque<ApiError>,
    calls: usize,
}

impl Tables {
    fn next_id(&mut self, prefix: &str) -> String {
        self.next_id += 1;
        format!("{prefix}-{}", self.next_id)
    }

    /// Count the call and pop a queued failure, if any.
    fn begin(&mut self) -> Result<(), ApiError> {
        self.calls += 1;
        match self.failures.pop_front() {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }
}

#[derive(Default)]
pub struct InMemoryApi {
    tables: Mutex<Tables>,
}

impl InMemoryApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with `items` already on the menu.
    pub fn with_menu(items: impl IntoIterator<Item = MenuItemCreate>) -> Self {
        let api = Self::new();
        {
            let mut tables = api.lock();
            for item in items {
                let id = MenuItemId::from(tables.next_id("menu"));
                tables.menu.push(to_menu_item(id, item));
            }
        }
        api
    }

    /// Make the next call fail with `error`.
    pub fn fail_next(&self, error: ApiError) {
        self.lock().failures.push_back(error);
    }

    /// Number of calls made so far, failed ones included.
    pub fn calls(&self) -> usize {
        self.lock().calls
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Tables> {
        // A poisoned lock only means a test panicked mid-call; the data is still usable.
        self.tables.lock().unwrap_or_else(|e| e.into_inner())
    }
}

fn to_menu_item(id: MenuItemId, item: MenuItemCreate) -> MenuItem {
    MenuItem {
        id,
        name: item.name,
        name_ar: item.name_ar,
        description: item.description,
        description_ar: item.description_ar,
        price: item.price,
        category: item.category,
        image_url: item.image_url,
        available: item.available,
        created_at: Some(Utc::now().naive_utc()),
    }
}

fn menu_not_found() -> ApiError {
    ApiError::NotFound("Menu item not found".to_string())
}

fn order_not_found() -> ApiError {
    ApiError::NotFound("Order not found".to_string())
}

#[async_trait]
impl CafeApi for InMemoryApi {
    async fn list_menu(&self) -> Result<Vec<MenuItem>, ApiError> {
        let mut tables = self.lock();
        tables.begin()?;
        Ok(tables.menu.iter().filter(|i| i.available).cloned().collect())
    }

    async fn list_menu_by_category(&self, category: Category) -> Result<Vec<MenuItem>, ApiError> {
        let mut tables = self.lock();
        tables.begin()?;
        Ok(tables
            .menu
            .iter()
            .filter(|i| i.available && i.category == category)
            .cloned()
            .collect())
    }

    async fn get_menu_item(&self, id: &MenuItemId) -> Result<MenuItem, ApiError> {
        let mut tables = self.lock();
        tables.begin()?;
        tables
            .menu
            .iter()
            .find(|i| &i.id == id)
            .cloned()
            .ok_or_else(menu_not_found)
    }

    #[instrument(skip(self, item), fields(name = %item.name))]
    async fn create_menu_item(&self, item: &MenuItemCreate) -> Result<MenuItem, ApiError> {
        let mut tables = self.lock();
        tables.begin()?;
        let id = MenuItemId::from(tables.next_id("menu"));
        let created = to_menu_item(id, item.clone());
        tables.menu.push(created.clone());
        debug!(id = %created.id, "Menu item stored");
        Ok(created)
    }

    async fn update_menu_item(
        &self,
        id: &MenuItemId,
        item: &MenuItemCreate,
    ) -> Result<MenuItem, ApiError> {
        let mut tables = self.lock();
        tables.begin()?;
        let existing = tables
            .menu
            .iter_mut()
            .find(|i| &i.id == id)
            .ok_or_else(menu_not_found)?;
        let created_at = existing.created_at;
        *existing = MenuItem {
            created_at,
            ..to_menu_item(id.clone(), item.clone())
        };
        Ok(existing.clone())
    }

    #[instrument(skip(self, order), fields(customer = %order.customer_name))]
    async fn create_order(&self, order: &OrderCreate) -> Result<Order, ApiError> {
        let mut tables = self.lock();
        tables.begin()?;
        let now = Utc::now().naive_utc();
        let created = Order {
            id: OrderId::from(tables.next_id("order")),
            customer_name: order.customer_name.clone(),
            customer_phone: order.customer_phone.clone(),
            items: order.items.clone(),
            total_amount: order.total(),
            status: OrderStatus::Pending,
            notes: order.notes.clone(),
            created_at: now,
            updated_at: now,
        };
        tables.orders.insert(0, created.clone());
        debug!(id = %created.id, "Order stored");
        Ok(created)
    }

    async fn list_orders(&self) -> Result<Vec<Order>, ApiError> {
        let mut tables = self.lock();
        tables.begin()?;
        Ok(tables.orders.clone())
    }

    async fn get_order(&self, id: &OrderId) -> Result<Order, ApiError> {
        let mut tables = self.lock();
        tables.begin()?;
        tables
            .orders
            .iter()
            .find(|o| &o.id == id)
            .cloned()
            .ok_or_else(order_not_found)
    }

    async fn update_order_status(
        &self,
        id: &OrderId,
        status: OrderStatus,
    ) -> Result<Order, ApiError> {
        let mut tables = self.lock();
        tables.begin()?;
        let order = tables
            .orders
            .iter_mut()
            .find(|o| &o.id == id)
            .ok_or_else(order_not_found)?;
        order.status = status;
        order.updated_at = Utc::now().naive_utc();
        Ok(order.clone())
    }
}
