//! # Cart Client
//!
//! High-level API for the cart store. Mutations return the new cart snapshot
//! so callers can render it without a second round trip.
use crate::cart::{Cart, CartAction, CartError, LineItem};
use crate::model::{MenuItem, MenuItemId};
use async_trait::async_trait;
use rust_decimal::Decimal;
use store_actor::{Snapshot, StoreClient, StoreError, StoreHandle};
use tracing::{debug, instrument, warn};

#[derive(Clone)]
pub struct CartClient {
    inner: StoreClient<Cart>,
}

impl CartClient {
    pub fn new(inner: StoreClient<Cart>) -> Self {
        Self { inner }
    }

    /// Add one unit of a menu item.
    pub async fn add_item(&self, item: &MenuItem) -> Result<Snapshot<Cart>, CartError> {
        let line = LineItem::from(item);
        self.add_line(line.id, &line.name, line.price).await
    }

    /// Add `quantity` units of a menu item on top of what the cart already
    /// holds for it.
    pub async fn add_quantity(
        &self,
        item: &MenuItem,
        quantity: u32,
    ) -> Result<Snapshot<Cart>, CartError> {
        if quantity == 0 {
            return self.snapshot().await;
        }
        let cart = self.add_item(item).await?;
        if quantity == 1 {
            return Ok(cart);
        }
        let held = cart.get(&item.id).map_or(1, |line| line.quantity);
        let target = i64::from(held) + i64::from(quantity) - 1;
        self.update_quantity(item.id.clone(), target).await
    }

    /// Add one unit of an arbitrary line, e.g. one restored from an earlier order.
    ///
    /// The price is checked here, at the client boundary, before anything is
    /// dispatched: the cart's add action itself never fails, so a negative
    /// price is refused as bad input rather than as an add error.
    #[instrument(skip(self))]
    pub async fn add_line(
        &self,
        id: MenuItemId,
        name: &str,
        price: Decimal,
    ) -> Result<Snapshot<Cart>, CartError> {
        if price < Decimal::ZERO {
            warn!(%id, %price, "Rejected line with negative price");
            return Err(CartError::NegativePrice(id));
        }
        debug!("Sending request");
        self.inner
            .dispatch(CartAction::AddItem {
                id,
                name: name.to_string(),
                price,
            })
            .await
            .map_err(Self::map_error)
    }

    pub async fn total_items(&self) -> Result<u64, CartError> {
        Ok(self.snapshot().await?.total_items())
    }

    pub async fn total_price(&self) -> Result<Decimal, CartError> {
        Ok(self.snapshot().await?.total_price())
    }
}

dispatch_method!(CartClient, Cart =>
    /// Drop the line for `id`; unknown ids are ignored.
    fn remove_item(id: MenuItemId) => CartAction::RemoveItem(id)
);

dispatch_method!(CartClient, Cart =>
    /// Set a line's quantity. Zero or less removes the line.
    fn update_quantity(id: MenuItemId, quantity: i64) => CartAction::UpdateQuantity { id, quantity }
);

dispatch_method!(CartClient, Cart =>
    fn clear() => CartAction::Clear
);

#[async_trait]
impl StoreHandle<Cart> for CartClient {
    type Error = CartError;

    fn inner(&self) -> &StoreClient<Cart> {
        &self.inner
    }

    fn map_error(e: StoreError) -> Self::Error {
        CartError::Store(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use store_actor::mock::MockStore;

    fn line(id: &str, price: Decimal, quantity: u32) -> crate::cart::LineItem {
        crate::cart::LineItem {
            id: MenuItemId::from(id),
            name: id.to_string(),
            price,
            quantity,
        }
    }

    #[tokio::test]
    async fn test_client_sends_expected_actions() {
        let mut mock = MockStore::new(Cart::default());
        mock.expect_dispatch().return_ok(Cart {
            items: vec![line("a", Decimal::new(15, 0), 1)],
        });
        mock.expect_dispatch().return_ok(Cart {
            items: vec![line("a", Decimal::new(15, 0), 3)],
        });
        mock.expect_dispatch().return_ok(Cart::default());

        let client = CartClient::new(mock.client());
        client
            .add_line(MenuItemId::from("a"), "a", Decimal::new(15, 0))
            .await
            .unwrap();
        let cart = client
            .update_quantity(MenuItemId::from("a"), 3)
            .await
            .unwrap();
        assert_eq!(cart.total_price(), Decimal::new(45, 0));
        client.clear().await.unwrap();

        assert_eq!(
            mock.dispatched(),
            vec![
                CartAction::AddItem {
                    id: MenuItemId::from("a"),
                    name: "a".to_string(),
                    price: Decimal::new(15, 0),
                },
                CartAction::UpdateQuantity {
                    id: MenuItemId::from("a"),
                    quantity: 3,
                },
                CartAction::Clear,
            ]
        );
        mock.verify();
    }

    #[tokio::test]
    async fn test_add_quantity_tops_up_existing_line() {
        let mut mock = MockStore::new(Cart::default());
        mock.expect_dispatch().return_ok(Cart {
            items: vec![line("a", Decimal::ONE, 2)],
        });
        mock.expect_dispatch().return_ok(Cart {
            items: vec![line("a", Decimal::ONE, 4)],
        });

        let item = crate::model::MenuItem {
            id: MenuItemId::from("a"),
            name: "a".to_string(),
            name_ar: String::new(),
            description: String::new(),
            description_ar: String::new(),
            price: Decimal::ONE,
            category: crate::model::Category::Snacks,
            image_url: None,
            available: true,
            created_at: None,
        };
        let client = CartClient::new(mock.client());
        let cart = client.add_quantity(&item, 3).await.unwrap();
        assert_eq!(cart.total_items(), 4);

        assert_eq!(
            mock.dispatched()[1],
            CartAction::UpdateQuantity {
                id: MenuItemId::from("a"),
                quantity: 4,
            }
        );
        mock.verify();
    }

    #[tokio::test]
    async fn test_negative_price_never_reaches_store() {
        let mock = MockStore::new(Cart::default());
        let client = CartClient::new(mock.client());

        let err = client
            .add_line(MenuItemId::from("x"), "x", Decimal::new(-1, 2))
            .await
            .unwrap_err();
        assert_eq!(err, CartError::NegativePrice(MenuItemId::from("x")));
        assert!(mock.dispatched().is_empty());
    }

    #[tokio::test]
    async fn test_store_errors_are_mapped() {
        let mut mock = MockStore::new(Cart::default());
        mock.expect_snapshot().return_err(StoreError::StoreClosed);

        let client = CartClient::new(mock.client());
        let err = client.total_items().await.unwrap_err();
        assert_eq!(err, CartError::Store(StoreError::StoreClosed));
    }
}
