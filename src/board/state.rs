use crate::model::{Order, OrderId, OrderStats, OrderStatus};
use chrono::NaiveDateTime;
use store_actor::Reducer;

/// Orders as last fetched, newest first, plus the operator's selection.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrderBoard {
    orders: Vec<Order>,
    loaded: bool,
    selected: Option<OrderId>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum BoardAction {
    /// Swap in a freshly fetched list. The last completed fetch wins.
    Replace(Vec<Order>),
    /// Apply a confirmed status change to one record.
    PatchStatus {
        id: OrderId,
        status: OrderStatus,
        updated_at: NaiveDateTime,
    },
    Select(OrderId),
    Deselect,
}

impl OrderBoard {
    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    /// False until the first successful refresh.
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub fn get(&self, id: &OrderId) -> Option<&Order> {
        self.orders.iter().find(|order| &order.id == id)
    }

    pub fn selected(&self) -> Option<&Order> {
        self.selected.as_ref().and_then(|id| self.get(id))
    }

    pub fn stats(&self) -> OrderStats {
        OrderStats::from_orders(&self.orders)
    }
}

impl Reducer for OrderBoard {
    type Action = BoardAction;

    fn reduce(&self, action: BoardAction) -> Self {
        match action {
            BoardAction::Replace(orders) => Self {
                orders,
                loaded: true,
                selected: self.selected.clone(),
            },
            BoardAction::PatchStatus {
                id,
                status,
                updated_at,
            } => {
                let mut orders = self.orders.clone();
                if let Some(order) = orders.iter_mut().find(|order| order.id == id) {
                    order.status = status;
                    order.updated_at = updated_at;
                }
                Self {
                    orders,
                    ..self.clone()
                }
            }
            BoardAction::Select(id) => Self {
                selected: Some(id),
                ..self.clone()
            },
            BoardAction::Deselect => Self {
                selected: None,
                ..self.clone()
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal::Decimal;

    fn at(minute: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 5, 1)
            .unwrap()
            .and_hms_opt(9, minute, 0)
            .unwrap()
    }

    fn order(id: &str, status: OrderStatus) -> Order {
        Order {
            id: OrderId::from(id),
            customer_name: format!("customer {id}"),
            customer_phone: None,
            items: vec![],
            total_amount: Decimal::new(20, 0),
            status,
            notes: None,
            created_at: at(0),
            updated_at: at(0),
        }
    }

    #[test]
    fn test_replace_marks_loaded() {
        let board = OrderBoard::default();
        assert!(!board.is_loaded());

        let board = board.reduce(BoardAction::Replace(vec![order("a", OrderStatus::Pending)]));
        assert!(board.is_loaded());
        assert_eq!(board.orders().len(), 1);

        let board = board.reduce(BoardAction::Replace(vec![]));
        assert!(board.is_loaded());
        assert!(board.orders().is_empty());
    }

    #[test]
    fn test_patch_touches_one_record() {
        let board = OrderBoard::default().reduce(BoardAction::Replace(vec![
            order("a", OrderStatus::Pending),
            order("b", OrderStatus::Pending),
        ]));

        let board = board.reduce(BoardAction::PatchStatus {
            id: OrderId::from("b"),
            status: OrderStatus::Ready,
            updated_at: at(7),
        });

        let b = board.get(&OrderId::from("b")).unwrap();
        assert_eq!(b.status, OrderStatus::Ready);
        assert_eq!(b.updated_at, at(7));
        assert_eq!(
            board.get(&OrderId::from("a")).unwrap().status,
            OrderStatus::Pending
        );
    }

    #[test]
    fn test_patch_unknown_id_is_no_op() {
        let board = OrderBoard::default().reduce(BoardAction::Replace(vec![order(
            "a",
            OrderStatus::Pending,
        )]));
        let patched = board.reduce(BoardAction::PatchStatus {
            id: OrderId::from("gone"),
            status: OrderStatus::Cancelled,
            updated_at: at(3),
        });
        assert_eq!(patched, board);
    }

    #[test]
    fn test_selection_follows_refreshes() {
        let board = OrderBoard::default()
            .reduce(BoardAction::Replace(vec![order("a", OrderStatus::Pending)]))
            .reduce(BoardAction::Select(OrderId::from("a")));
        assert_eq!(board.selected().unwrap().status, OrderStatus::Pending);

        let board = board.reduce(BoardAction::Replace(vec![order("a", OrderStatus::Completed)]));
        assert_eq!(board.selected().unwrap().status, OrderStatus::Completed);

        // Selected order vanished from the list
        let board = board.reduce(BoardAction::Replace(vec![]));
        assert!(board.selected().is_none());

        let board = board.reduce(BoardAction::Deselect);
        assert_eq!(board.selected, None);
    }
}
