//! Plain-text views for the terminal.
//!
//! Each view borrows the data it shows and implements [`Display`], so the
//! binary just prints it.

use crate::board::OrderBoard;
use crate::cart::Cart;
use crate::checkout::OrderConfirmation;
use crate::menu::{CategoryFilter, MenuCatalog};
use crate::model::{format_price, Locale, Order, OrderStats, OrderStatus};
use chrono::NaiveDateTime;
use std::fmt::{self, Display, Formatter};

/// Move the cursor to the top-left and clear the screen.
pub const CLEAR_SCREEN: &str = "\x1B[H\x1B[0J";

const TIME_FORMAT: &str = "%Y-%m-%d %H:%M";

fn time(at: &NaiveDateTime) -> String {
    at.format(TIME_FORMAT).to_string()
}

/// Menu grouped by category.
pub struct MenuView<'a> {
    pub catalog: &'a MenuCatalog,
    pub filter: CategoryFilter,
    pub locale: Locale,
}

impl Display for MenuView<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let all_items = match self.locale {
            Locale::English => "All Items",
            Locale::Arabic => "جميع العناصر",
        };
        let heading = match self.filter {
            CategoryFilter::All => all_items,
            CategoryFilter::Only(category) => category.label(self.locale),
        };
        writeln!(f, "== {heading} ==")?;

        let mut shown = 0;
        for (category, items) in self.catalog.by_category() {
            if !self.filter.matches(items[0]) {
                continue;
            }
            writeln!(f, "\n{}", category.label(self.locale))?;
            for item in items {
                shown += 1;
                writeln!(
                    f,
                    "  {:<12} {:<28} {:>12}",
                    item.id.0,
                    item.name_in(self.locale),
                    format_price(item.price)
                )?;
                let description = item.description_in(self.locale);
                if !description.is_empty() {
                    writeln!(f, "  {:<12} {description}", "")?;
                }
            }
        }

        if shown == 0 {
            writeln!(f, "No items available in this category")?;
        }
        Ok(())
    }
}

pub struct CartView<'a>(pub &'a Cart);

impl Display for CartView<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let cart = self.0;
        if cart.is_empty() {
            return writeln!(f, "Your cart is empty");
        }
        writeln!(f, "{:<28} {:>4} {:>12}", "Item", "Qty", "Subtotal")?;
        for line in cart.items() {
            writeln!(
                f,
                "{:<28} {:>4} {:>12}",
                line.name,
                line.quantity,
                format_price(line.subtotal())
            )?;
        }
        writeln!(
            f,
            "{:<28} {:>4} {:>12}",
            "Total",
            cart.total_items(),
            format_price(cart.total_price())
        )
    }
}

pub struct ConfirmationView<'a>(pub &'a OrderConfirmation);

impl Display for ConfirmationView<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let confirmation = self.0;
        writeln!(f, "Order placed successfully!")?;
        writeln!(f, "Order ID: {}", confirmation.order_id)?;
        writeln!(f, "Total:    {}", format_price(confirmation.total))?;
        writeln!(f, "Status:   {}", confirmation.status)
    }
}

pub struct StatsView<'a>(pub &'a OrderStats);

impl Display for StatsView<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let stats = self.0;
        write!(f, "Total orders: {}", stats.total)?;
        for status in OrderStatus::ALL {
            write!(f, " | {status}: {}", stats.count(status))?;
        }
        writeln!(f, " | Revenue: {}", format_price(stats.revenue))
    }
}

/// Orders table with statistics, as shown by `orders` and `watch`.
pub struct BoardView<'a>(pub &'a OrderBoard);

impl Display for BoardView<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let board = self.0;
        if !board.is_loaded() {
            return writeln!(f, "Loading orders...");
        }

        write!(f, "{}", StatsView(&board.stats()))?;
        if board.orders().is_empty() {
            return writeln!(f, "\nNo orders yet");
        }

        writeln!(
            f,
            "\n{:<38} | {:<20} | {:>5} | {:>12} | {:<10} | {:<16}",
            "Order", "Customer", "Items", "Total", "Status", "Created"
        )?;
        writeln!(f, "{}", "-".repeat(116))?;
        for order in board.orders() {
            writeln!(
                f,
                "{:<38} | {:<20} | {:>5} | {:>12} | {:<10} | {:<16}",
                order.id.0,
                order.customer_name,
                order.item_count(),
                format_price(order.total_amount),
                order.status,
                time(&order.created_at)
            )?;
        }

        if let Some(order) = board.selected() {
            write!(f, "\n{}", OrderView(order))?;
        }
        Ok(())
    }
}

/// Full details of one order.
pub struct OrderView<'a>(pub &'a Order);

impl Display for OrderView<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let order = self.0;
        writeln!(f, "Order {}", order.id)?;
        writeln!(f, "Customer: {}", order.customer_name)?;
        if let Some(phone) = &order.customer_phone {
            writeln!(f, "Phone:    {phone}")?;
        }
        writeln!(f, "Status:   {}", order.status)?;
        writeln!(f, "Created:  {}", time(&order.created_at))?;
        if order.was_updated() {
            writeln!(f, "Updated:  {}", time(&order.updated_at))?;
        }
        for item in &order.items {
            writeln!(
                f,
                "  {} x {:<24} {:>12}",
                item.quantity,
                item.name,
                format_price(item.line_total())
            )?;
        }
        writeln!(f, "Total:    {}", format_price(order.total_amount))?;
        if let Some(notes) = &order.notes {
            writeln!(f, "Notes:    {notes}")?;
        }
        Ok(())
    }
}
