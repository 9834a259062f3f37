//! # Admin Dashboard
//!
//! Keeps an [`OrderBoard`] in sync with the service and lets an operator move
//! orders between statuses.
//!
//! - [`AdminDashboard::refresh`] replaces the board with a fresh list
//! - [`AdminDashboard::set_status`] updates one order, then patches it locally
//! - [`spawn_poller`] refreshes on a fixed period and on demand
//!
//! A failed call never touches the board; the last good view stays until the
//! next successful refresh.

pub mod error;
pub mod poller;

pub use error::*;
pub use poller::*;

use crate::api::CafeApi;
use crate::board::OrderBoard;
use crate::clients::BoardClient;
use crate::model::{Order, OrderId, OrderStats, OrderStatus};
use std::sync::Arc;
use store_actor::{Snapshot, StoreHandle};
use tracing::{error, info, instrument};

#[derive(Clone)]
pub struct AdminDashboard {
    api: Arc<dyn CafeApi>,
    board: BoardClient,
}

impl AdminDashboard {
    pub fn new(api: Arc<dyn CafeApi>, board: BoardClient) -> Self {
        Self { api, board }
    }

    pub fn board(&self) -> &BoardClient {
        &self.board
    }

    /// Fetch every order and swap it in wholesale.
    #[instrument(skip(self))]
    pub async fn refresh(&self) -> Result<Snapshot<OrderBoard>, DashboardError> {
        let orders = self.api.list_orders().await.map_err(|e| {
            error!(error = %e, "Error fetching orders");
            DashboardError::Fetch(e)
        })?;
        info!(count = orders.len(), "Orders refreshed");
        self.board.replace(orders).await
    }

    /// Send one status update and return the service's updated record.
    /// The local record is patched from that reply.
    #[instrument(skip(self))]
    pub async fn set_status(
        &self,
        id: &OrderId,
        status: OrderStatus,
    ) -> Result<Order, DashboardError> {
        let order = self
            .api
            .update_order_status(id, status)
            .await
            .map_err(|source| {
                error!(error = %source, "Error updating order status");
                DashboardError::UpdateStatus {
                    id: id.clone(),
                    source,
                }
            })?;
        info!(%status, "Order status updated");
        self.board.patch_from(&order).await?;
        Ok(order)
    }

    /// Show one order's details. The id does not have to be loaded yet.
    pub async fn select(&self, id: OrderId) -> Result<Snapshot<OrderBoard>, DashboardError> {
        self.board.select(id).await
    }

    pub async fn deselect(&self) -> Result<Snapshot<OrderBoard>, DashboardError> {
        self.board.deselect().await
    }

    pub async fn stats(&self) -> Result<OrderStats, DashboardError> {
        Ok(self.board.snapshot().await?.stats())
    }
}
