use crate::api::CafeApi;
use crate::checkout::Checkout;
use crate::clients::{BoardClient, CartClient};
use crate::dashboard::AdminDashboard;
use crate::menu::MenuBrowser;
use std::sync::Arc;
use tokio::task::{JoinError, JoinHandle};
use tracing::{error, info};

/// Running stores plus the API they talk to.
///
/// # Example
///
/// ```rust
/// use coffee_order::api::InMemoryApi;
/// use coffee_order::lifecycle::CafeSystem;
/// use std::sync::Arc;
///
/// #[tokio::main]
/// async fn main() {
///     let system = CafeSystem::new(Arc::new(InMemoryApi::new()));
///     let catalog = system.menu().load().await.unwrap();
///     assert!(catalog.is_empty());
///     system.shutdown().await.unwrap();
/// }
/// ```
pub struct CafeSystem {
    pub cart_client: CartClient,
    pub board_client: BoardClient,
    api: Arc<dyn CafeApi>,
    handles: Vec<JoinHandle<()>>,
}

impl CafeSystem {
    /// Spawn the cart and order board stores.
    pub fn new(api: Arc<dyn CafeApi>) -> Self {
        let (cart_actor, cart_client) = crate::cart::new();
        let (board_actor, board_client) = crate::board::new();

        let cart_handle = tokio::spawn(cart_actor.run());
        let board_handle = tokio::spawn(board_actor.run());

        Self {
            cart_client: CartClient::new(cart_client),
            board_client: BoardClient::new(board_client),
            api,
            handles: vec![cart_handle, board_handle],
        }
    }

    pub fn api(&self) -> Arc<dyn CafeApi> {
        self.api.clone()
    }

    pub fn menu(&self) -> MenuBrowser {
        MenuBrowser::new(self.api.clone())
    }

    pub fn checkout(&self) -> Checkout {
        Checkout::new(self.api.clone(), self.cart_client.clone())
    }

    pub fn dashboard(&self) -> AdminDashboard {
        AdminDashboard::new(self.api.clone(), self.board_client.clone())
    }

    /// Drop the system's clients and wait for both stores to stop.
    ///
    /// Fails if a store task panicked.
    pub async fn shutdown(self) -> Result<(), JoinError> {
        info!("Shutting down system...");

        drop(self.cart_client);
        drop(self.board_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!(error = %e, "Store task failed");
                return Err(e);
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}
