use crate::api::ApiError;
use crate::model::OrderId;
use store_actor::StoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DashboardError {
    #[error("Failed to fetch orders: {0}")]
    Fetch(#[source] ApiError),

    #[error("Failed to update order {id}: {source}")]
    UpdateStatus {
        id: OrderId,
        #[source]
        source: ApiError,
    },

    #[error("Order board unavailable: {0}")]
    Store(#[from] StoreError),
}
