//! # Menu Browser
//!
//! Fetches the catalog and groups it by category for display. The menu is
//! read-only here; items reach the cart through
//! [`CartClient::add_item`](crate::clients::CartClient::add_item).

pub mod catalog;

pub use catalog::*;

use crate::api::{ApiError, CafeApi};
use crate::model::{Category, MenuItem, MenuItemId};
use std::sync::Arc;
use tracing::{error, info, instrument};

#[derive(Clone)]
pub struct MenuBrowser {
    api: Arc<dyn CafeApi>,
}

impl MenuBrowser {
    pub fn new(api: Arc<dyn CafeApi>) -> Self {
        Self { api }
    }

    /// Fetch every available item.
    #[instrument(skip(self))]
    pub async fn load(&self) -> Result<MenuCatalog, ApiError> {
        match self.api.list_menu().await {
            Ok(items) => {
                info!(count = items.len(), "Menu loaded");
                Ok(MenuCatalog::new(items))
            }
            Err(e) => {
                error!(error = %e, "Error fetching menu");
                Err(e)
            }
        }
    }

    /// Fetch the available items of one category straight from the service.
    #[instrument(skip(self))]
    pub async fn load_category(&self, category: Category) -> Result<Vec<MenuItem>, ApiError> {
        self.api.list_menu_by_category(category).await.map_err(|e| {
            error!(error = %e, "Error fetching category");
            e
        })
    }

    /// Fetch one item, available or not.
    #[instrument(skip(self))]
    pub async fn item(&self, id: &MenuItemId) -> Result<MenuItem, ApiError> {
        self.api.get_menu_item(id).await.map_err(|e| {
            error!(error = %e, "Error fetching menu item");
            e
        })
    }
}
