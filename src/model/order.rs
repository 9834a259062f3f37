//! Order records as returned by `/api/orders`.

use super::{MenuItemId, ParseModelError};
use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;

/// Type-safe identifier for orders.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(pub String);

impl From<&str> for OrderId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for OrderId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Where an order is in the kitchen.
///
/// Any status may follow any other; the service does not enforce a workflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    #[default]
    Pending,
    Preparing,
    Ready,
    Completed,
    Cancelled,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 5] = [
        OrderStatus::Pending,
        OrderStatus::Preparing,
        OrderStatus::Ready,
        OrderStatus::Completed,
        OrderStatus::Cancelled,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Preparing => "preparing",
            OrderStatus::Ready => "ready",
            OrderStatus::Completed => "completed",
            OrderStatus::Cancelled => "cancelled",
        }
    }
}

impl Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderStatus {
    type Err = ParseModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        OrderStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == wanted)
            .ok_or_else(|| ParseModelError::UnknownStatus(s.to_string()))
    }
}

/// One submitted line. `price` is the unit price at the time of ordering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    pub menu_item_id: MenuItemId,
    pub quantity: u32,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    pub name: String,
}

impl OrderItem {
    pub fn line_total(&self) -> Decimal {
        self.price * Decimal::from(self.quantity)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub customer_name: String,
    #[serde(default)]
    pub customer_phone: Option<String>,
    pub items: Vec<OrderItem>,
    #[serde(with = "rust_decimal::serde::float")]
    pub total_amount: Decimal,
    #[serde(default)]
    pub status: OrderStatus,
    #[serde(default)]
    pub notes: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl Order {
    /// True once the order has been touched after creation.
    pub fn was_updated(&self) -> bool {
        self.updated_at > self.created_at
    }

    pub fn item_count(&self) -> u32 {
        self.items
            .iter()
            .fold(0u32, |acc, item| acc.saturating_add(item.quantity))
    }
}

/// Payload for `POST /api/orders`. The service computes the total itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderCreate {
    pub customer_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_phone: Option<String>,
    pub items: Vec<OrderItem>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl OrderCreate {
    pub fn total(&self) -> Decimal {
        self.items.iter().map(OrderItem::line_total).sum()
    }
}

/// Counts per status and revenue over a list of orders.
///
/// Revenue sums every listed order regardless of status.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderStats {
    pub total: usize,
    pub pending: usize,
    pub preparing: usize,
    pub ready: usize,
    pub completed: usize,
    pub cancelled: usize,
    pub revenue: Decimal,
}

impl OrderStats {
    pub fn from_orders<'a>(orders: impl IntoIterator<Item = &'a Order>) -> Self {
        let mut stats = Self::default();
        for order in orders {
            stats.total += 1;
            stats.revenue += order.total_amount;
            match order.status {
                OrderStatus::Pending => stats.pending += 1,
                OrderStatus::Preparing => stats.preparing += 1,
                OrderStatus::Ready => stats.ready += 1,
                OrderStatus::Completed => stats.completed += 1,
                OrderStatus::Cancelled => stats.cancelled += 1,
            }
        }
        stats
    }

    pub fn count(&self, status: OrderStatus) -> usize {
        match status {
            OrderStatus::Pending => self.pending,
            OrderStatus::Preparing => self.preparing,
            OrderStatus::Ready => self.ready,
            OrderStatus::Completed => self.completed,
            OrderStatus::Cancelled => self.cancelled,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(hour: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 5, 1)
            .unwrap()
            .and_hms_opt(hour, 0, 0)
            .unwrap()
    }

    fn order(id: &str, status: OrderStatus, total: Decimal) -> Order {
        Order {
            id: OrderId::from(id),
            customer_name: "Mariam".to_string(),
            customer_phone: None,
            items: vec![],
            total_amount: total,
            status,
            notes: None,
            created_at: at(8),
            updated_at: at(8),
        }
    }

    #[test]
    fn test_order_create_omits_empty_optionals() {
        let payload = OrderCreate {
            customer_name: "Omar".to_string(),
            customer_phone: None,
            items: vec![OrderItem {
                menu_item_id: MenuItemId::from("m-1"),
                quantity: 2,
                price: Decimal::new(1500, 2),
                name: "Arabic Coffee".to_string(),
            }],
            notes: None,
        };

        let json = serde_json::to_value(&payload).unwrap();
        assert!(json.get("customer_phone").is_none());
        assert!(json.get("notes").is_none());
        assert_eq!(json["items"][0]["price"], serde_json::json!(15.0));
        assert_eq!(payload.total(), Decimal::new(30, 0));
    }

    #[test]
    fn test_order_from_api_json() {
        let json = r#"{
            "id": "o-9",
            "customer_name": "Layla",
            "customer_phone": "+971500000000",
            "items": [{"menu_item_id": "m-2", "quantity": 1, "price": 28.5, "name": "Saffron Latte"}],
            "total_amount": 28.5,
            "status": "preparing",
            "notes": null,
            "created_at": "2024-05-01T08:00:00",
            "updated_at": "2024-05-01T08:05:00.250000"
        }"#;

        let order: Order = serde_json::from_str(json).unwrap();
        assert_eq!(order.status, OrderStatus::Preparing);
        assert_eq!(order.total_amount, Decimal::new(285, 1));
        assert_eq!(order.item_count(), 1);
        assert!(order.was_updated());
    }

    #[test]
    fn test_status_parse_is_case_insensitive() {
        assert_eq!("READY".parse::<OrderStatus>(), Ok(OrderStatus::Ready));
        assert!("shipped".parse::<OrderStatus>().is_err());
    }

    #[test]
    fn test_stats_count_every_status() {
        let orders = vec![
            order("a", OrderStatus::Pending, Decimal::new(15, 0)),
            order("b", OrderStatus::Pending, Decimal::new(2850, 2)),
            order("c", OrderStatus::Cancelled, Decimal::new(10, 0)),
            order("d", OrderStatus::Completed, Decimal::new(5, 0)),
        ];

        let stats = OrderStats::from_orders(&orders);
        assert_eq!(stats.total, 4);
        assert_eq!(stats.count(OrderStatus::Pending), 2);
        assert_eq!(stats.cancelled, 1);
        assert_eq!(stats.ready, 0);
        assert_eq!(stats.revenue, Decimal::new(5850, 2));
    }
}
