//! # Board Client
//!
//! High-level API for the order board store used by the admin dashboard.
use crate::board::{BoardAction, OrderBoard};
use crate::dashboard::DashboardError;
use crate::model::{Order, OrderId};
use async_trait::async_trait;
use store_actor::{Snapshot, StoreClient, StoreError, StoreHandle};
use tracing::{debug, instrument};

#[derive(Clone)]
pub struct BoardClient {
    inner: StoreClient<OrderBoard>,
}

impl BoardClient {
    pub fn new(inner: StoreClient<OrderBoard>) -> Self {
        Self { inner }
    }

    /// Replace the whole list with a fresh fetch.
    #[instrument(skip(self, orders), fields(count = orders.len()))]
    pub async fn replace(&self, orders: Vec<Order>) -> Result<Snapshot<OrderBoard>, DashboardError> {
        debug!("Sending request");
        self.inner
            .dispatch(BoardAction::Replace(orders))
            .await
            .map_err(Self::map_error)
    }

    /// Copy status and `updated_at` from a record the service returned.
    #[instrument(skip(self, order), fields(id = %order.id, status = %order.status))]
    pub async fn patch_from(&self, order: &Order) -> Result<Snapshot<OrderBoard>, DashboardError> {
        debug!("Sending request");
        self.inner
            .dispatch(BoardAction::PatchStatus {
                id: order.id.clone(),
                status: order.status,
                updated_at: order.updated_at,
            })
            .await
            .map_err(Self::map_error)
    }
}

dispatch_method!(BoardClient, OrderBoard =>
    fn select(id: OrderId) => BoardAction::Select(id)
);

dispatch_method!(BoardClient, OrderBoard =>
    fn deselect() => BoardAction::Deselect
);

#[async_trait]
impl StoreHandle<OrderBoard> for BoardClient {
    type Error = DashboardError;

    fn inner(&self) -> &StoreClient<OrderBoard> {
        &self.inner
    }

    fn map_error(e: StoreError) -> Self::Error {
        DashboardError::Store(e)
    }
}
