use coffee_order::cart;
use coffee_order::clients::CartClient;
use coffee_order::model::MenuItemId;
use rust_decimal::Decimal;
use store_actor::StoreHandle;

fn start_cart() -> (CartClient, tokio::task::JoinHandle<()>) {
    let (actor, inner) = cart::new();
    let handle = tokio::spawn(actor.run());
    (CartClient::new(inner), handle)
}

/// add A twice, shrink to one, then remove it.
#[tokio::test]
async fn test_cart_scenario() {
    let (cart, handle) = start_cart();
    let a = MenuItemId::from("A");
    let fifteen = Decimal::new(15, 0);

    cart.add_line(a.clone(), "Arabic Coffee", fifteen).await.unwrap();
    let snapshot = cart.add_line(a.clone(), "Arabic Coffee", fifteen).await.unwrap();
    assert_eq!(snapshot.items().len(), 1);
    assert_eq!(snapshot.items()[0].quantity, 2);
    assert_eq!(snapshot.total_price(), Decimal::new(30, 0));

    let snapshot = cart.update_quantity(a.clone(), 1).await.unwrap();
    assert_eq!(snapshot.total_price(), fifteen);

    let snapshot = cart.remove_item(a).await.unwrap();
    assert!(snapshot.is_empty());
    assert_eq!(snapshot.total_price(), Decimal::ZERO);

    drop(cart);
    handle.await.unwrap();
}

#[tokio::test]
async fn test_clear_and_missing_ids() {
    let (cart, handle) = start_cart();
    cart.add_line(MenuItemId::from("A"), "A", Decimal::new(1500, 2))
        .await
        .unwrap();
    cart.add_line(MenuItemId::from("B"), "B", Decimal::new(2850, 2))
        .await
        .unwrap();
    assert_eq!(cart.total_price().await.unwrap(), Decimal::new(4350, 2));

    let before = cart.snapshot().await.unwrap();
    let after = cart.remove_item(MenuItemId::from("nope")).await.unwrap();
    assert_eq!(*before, *after);

    cart.update_quantity(MenuItemId::from("B"), -3).await.unwrap();
    assert_eq!(cart.total_items().await.unwrap(), 1);

    cart.clear().await.unwrap();
    assert_eq!(cart.total_items().await.unwrap(), 0);

    drop(cart);
    handle.await.unwrap();
}

/// Subscribers observe every published cart.
#[tokio::test]
async fn test_subscribers_follow_cart() {
    let (cart, handle) = start_cart();
    let mut updates = cart.subscribe();

    cart.add_line(MenuItemId::from("A"), "A", Decimal::ONE).await.unwrap();
    updates.changed().await.unwrap();
    assert_eq!(updates.borrow().total_items(), 1);

    drop(cart);
    handle.await.unwrap();
}
