//! Cart transitions.
//!
//! Every action succeeds. Unknown ids leave the cart unchanged, and any
//! quantity at or below zero removes the line.

use super::state::{Cart, LineItem};
use crate::model::MenuItemId;
use rust_decimal::Decimal;
use store_actor::Reducer;

#[derive(Debug, Clone, PartialEq)]
pub enum CartAction {
    /// Add one unit, creating the line if the id is new.
    AddItem {
        id: MenuItemId,
        name: String,
        price: Decimal,
    },
    RemoveItem(MenuItemId),
    /// Set the quantity of an existing line.
    UpdateQuantity { id: MenuItemId, quantity: i64 },
    Clear,
}

impl Reducer for Cart {
    type Action = CartAction;

    fn reduce(&self, action: CartAction) -> Self {
        match action {
            CartAction::AddItem { id, name, price } => {
                let mut items = self.items.clone();
                match items.iter_mut().find(|line| line.id == id) {
                    Some(line) => line.quantity = line.quantity.saturating_add(1),
                    None => items.push(LineItem {
                        id,
                        name,
                        price,
                        quantity: 1,
                    }),
                }
                Cart { items }
            }
            CartAction::RemoveItem(id) => Cart {
                items: self
                    .items
                    .iter()
                    .filter(|line| line.id != id)
                    .cloned()
                    .collect(),
            },
            CartAction::UpdateQuantity { id, quantity } if quantity <= 0 => {
                self.reduce(CartAction::RemoveItem(id))
            }
            CartAction::UpdateQuantity { id, quantity } => {
                let quantity = u32::try_from(quantity).unwrap_or(u32::MAX);
                let mut items = self.items.clone();
                if let Some(line) = items.iter_mut().find(|line| line.id == id) {
                    line.quantity = quantity;
                }
                Cart { items }
            }
            CartAction::Clear => Cart::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn add(id: &str, price: Decimal) -> CartAction {
        CartAction::AddItem {
            id: MenuItemId::from(id),
            name: id.to_uppercase(),
            price,
        }
    }

    fn apply(actions: impl IntoIterator<Item = CartAction>) -> Cart {
        actions
            .into_iter()
            .fold(Cart::default(), |cart, action| cart.reduce(action))
    }

    #[test]
    fn test_totals_are_exact() {
        let cart = apply([
            add("a", Decimal::new(1500, 2)),
            add("a", Decimal::new(1500, 2)),
            add("b", Decimal::new(2850, 2)),
        ]);

        assert_eq!(cart.total_items(), 3);
        assert_eq!(cart.total_price(), Decimal::new(5850, 2));
        assert_eq!(cart.items().len(), 2);
    }

    #[test]
    fn test_lines_keep_insertion_order() {
        let cart = apply([
            add("b", Decimal::ONE),
            add("a", Decimal::ONE),
            add("b", Decimal::ONE),
        ]);

        let ids: Vec<_> = cart.items().iter().map(|l| l.id.0.as_str()).collect();
        assert_eq!(ids, vec!["b", "a"]);
    }

    #[test]
    fn test_add_keeps_first_name_and_price() {
        let cart = apply([
            add("a", Decimal::new(15, 0)),
            CartAction::AddItem {
                id: MenuItemId::from("a"),
                name: "renamed".to_string(),
                price: Decimal::new(99, 0),
            },
        ]);

        let line = cart.get(&MenuItemId::from("a")).unwrap();
        assert_eq!(line.name, "A");
        assert_eq!(line.price, Decimal::new(15, 0));
        assert_eq!(line.quantity, 2);
    }

    #[test]
    fn test_update_quantity_zero_or_negative_removes() {
        for quantity in [0, -1, -40] {
            let cart = apply([
                add("a", Decimal::ONE),
                CartAction::UpdateQuantity {
                    id: MenuItemId::from("a"),
                    quantity,
                },
            ]);
            assert!(cart.is_empty(), "quantity {quantity} should remove the line");
        }
    }

    #[test]
    fn test_unknown_ids_are_no_ops() {
        let before = apply([add("a", Decimal::new(15, 0))]);

        let removed = before.reduce(CartAction::RemoveItem(MenuItemId::from("zzz")));
        assert_eq!(removed, before);

        let updated = before.reduce(CartAction::UpdateQuantity {
            id: MenuItemId::from("zzz"),
            quantity: 4,
        });
        assert_eq!(updated, before);
    }

    #[test]
    fn test_clear_empties() {
        let cart = apply([add("a", Decimal::ONE), add("b", Decimal::TEN), CartAction::Clear]);
        assert_eq!(cart.total_items(), 0);
        assert_eq!(cart.total_price(), Decimal::ZERO);
    }

    #[test]
    fn test_reduce_leaves_previous_snapshot_alone() {
        let before = apply([add("a", Decimal::ONE)]);
        let _after = before.reduce(add("a", Decimal::ONE));
        assert_eq!(before.get(&MenuItemId::from("a")).unwrap().quantity, 1);
    }

    proptest! {
        #[test]
        fn prop_repeated_add_yields_one_line(count in 1usize..60) {
            let cart = apply((0..count).map(|_| add("a", Decimal::new(15, 0))));
            prop_assert_eq!(cart.items().len(), 1);
            prop_assert_eq!(cart.total_items(), count as u64);
        }

        #[test]
        fn prop_total_price_matches_lines(
            lines in proptest::collection::vec((0u8..8, 0i64..100_000, 1i64..20), 0..30)
        ) {
            let mut cart = Cart::default();
            for (id, cents, quantity) in &lines {
                let id = MenuItemId::from(format!("item-{id}"));
                cart = cart.reduce(CartAction::AddItem {
                    id: id.clone(),
                    name: id.0.clone(),
                    price: Decimal::new(*cents, 2),
                });
                cart = cart.reduce(CartAction::UpdateQuantity { id, quantity: *quantity });
            }

            let expected: Decimal = cart
                .items()
                .iter()
                .map(|line| line.price * Decimal::from(line.quantity))
                .sum();
            prop_assert_eq!(cart.total_price(), expected);
            prop_assert!(cart.items().iter().all(|line| line.quantity > 0));
            prop_assert!(cart.total_price() >= Decimal::ZERO);
        }

        #[test]
        fn prop_non_positive_update_removes(quantity in i64::MIN..=0) {
            let cart = apply([
                add("a", Decimal::ONE),
                add("b", Decimal::ONE),
                CartAction::UpdateQuantity { id: MenuItemId::from("a"), quantity },
            ]);
            prop_assert!(cart.get(&MenuItemId::from("a")).is_none());
            prop_assert_eq!(cart.total_items(), 1);
        }
    }
}
