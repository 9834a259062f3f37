use crate::model::{MenuItem, MenuItemId};
use rust_decimal::Decimal;

/// One cart line. There is at most one line per menu item id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineItem {
    pub id: MenuItemId,
    pub name: String,
    pub price: Decimal,
    pub quantity: u32,
}

impl LineItem {
    /// Unit price times quantity.
    pub fn subtotal(&self) -> Decimal {
        self.price * Decimal::from(self.quantity)
    }
}

impl From<&MenuItem> for LineItem {
    fn from(item: &MenuItem) -> Self {
        Self {
            id: item.id.clone(),
            name: item.name.clone(),
            price: item.price,
            quantity: 1,
        }
    }
}

/// Cart contents, kept in the order items were first added.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cart {
    pub(crate) items: Vec<LineItem>,
}

impl Cart {
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: &MenuItemId) -> Option<&LineItem> {
        self.items.iter().find(|line| &line.id == id)
    }

    /// Sum of quantities across all lines.
    pub fn total_items(&self) -> u64 {
        self.items.iter().map(|line| u64::from(line.quantity)).sum()
    }

    /// Sum of unit price times quantity, exact.
    pub fn total_price(&self) -> Decimal {
        self.items.iter().map(LineItem::subtotal).sum()
    }
}
