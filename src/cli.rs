use crate::api::ApiError;
use crate::cart::{Cart, CartError};
use crate::clients::CartClient;
use crate::menu::{CategoryFilter, MenuBrowser};
use crate::model::{MenuItem, MenuItemId, OrderId, OrderStatus};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::str::FromStr;
use store_actor::{Snapshot, StoreHandle};
use thiserror::Error;
use tracing::{info, instrument};

#[derive(Parser, Debug)]
#[command(author, version, about = "Order coffee and manage orders from the terminal")]
pub struct Cli {
    /// Service root, e.g. http://localhost:8000 (overrides COFFEE_API_URL)
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Request timeout in seconds (overrides COFFEE_TIMEOUT_SECS)
    #[arg(long, global = true, value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout: Option<u64>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show the menu
    Menu {
        /// `all` or a category such as `cold_beverages`
        #[arg(long, default_value = "all")]
        category: CategoryFilter,

        /// Show Arabic names and labels
        #[arg(long)]
        arabic: bool,
    },

    /// Place an order, e.g. `order --name Sara latte:2 croissant`
    Order {
        #[arg(long)]
        name: String,

        #[arg(long, default_value = "")]
        phone: String,

        #[arg(long, default_value = "")]
        notes: String,

        /// Menu item ids, each optionally followed by `:QUANTITY`
        #[arg(required = true, num_args = 1..)]
        items: Vec<ItemSpec>,
    },

    /// List all orders with statistics
    Orders,

    /// Show one order in full
    Show { id: OrderId },

    /// Set an order's status (pending, preparing, ready, completed, cancelled)
    Status { id: OrderId, status: OrderStatus },

    /// Live admin view; reads `refresh`, `select ID`, `deselect`, `status ID STATUS`, `quit` from stdin
    Watch {
        /// Seconds between refreshes (overrides COFFEE_POLL_SECS)
        #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
        interval: Option<u64>,
    },

    /// Create menu items from a JSON array file
    Seed { file: PathBuf },

    /// Replace one menu item with the JSON object in a file
    Edit { id: MenuItemId, file: PathBuf },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ItemSpecError {
    #[error("missing menu item id")]
    MissingId,

    #[error("invalid quantity {0:?}: expected a whole number of at least 1")]
    InvalidQuantity(String),
}

/// One `ID[:QUANTITY]` argument of the `order` command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemSpec {
    pub id: MenuItemId,
    pub quantity: u32,
}

impl FromStr for ItemSpec {
    type Err = ItemSpecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (id, quantity) = match s.rsplit_once(':') {
            Some((id, quantity)) => {
                let parsed = quantity
                    .trim()
                    .parse::<u32>()
                    .ok()
                    .filter(|q| *q >= 1)
                    .ok_or_else(|| ItemSpecError::InvalidQuantity(quantity.to_string()))?;
                (id, parsed)
            }
            None => (s, 1),
        };

        let id = id.trim();
        if id.is_empty() {
            return Err(ItemSpecError::MissingId);
        }
        Ok(Self {
            id: MenuItemId::from(id),
            quantity,
        })
    }
}

impl ItemSpec {
    /// Fold repeated ids into one spec each, summing their quantities.
    /// First-seen order is kept.
    pub fn merge(specs: &[ItemSpec]) -> Vec<ItemSpec> {
        let mut merged: Vec<ItemSpec> = Vec::with_capacity(specs.len());
        for spec in specs {
            match merged.iter_mut().find(|m| m.id == spec.id) {
                Some(existing) => {
                    existing.quantity = existing.quantity.saturating_add(spec.quantity)
                }
                None => merged.push(spec.clone()),
            }
        }
        merged
    }
}

#[derive(Debug, Error)]
pub enum FillCartError {
    #[error("Menu item {0} is not on the menu")]
    UnknownItem(MenuItemId),

    #[error("{0} is not available right now")]
    Unavailable(String),

    #[error(transparent)]
    Menu(#[from] ApiError),

    #[error(transparent)]
    Cart(#[from] CartError),
}

/// Put the `order` command's items into the cart.
///
/// Every id is resolved against the current menu before anything is added,
/// so an unknown or unavailable item leaves the cart untouched.
#[instrument(skip_all, fields(specs = specs.len()))]
pub async fn fill_cart(
    menu: &MenuBrowser,
    cart: &CartClient,
    specs: &[ItemSpec],
) -> Result<Snapshot<Cart>, FillCartError> {
    let catalog = menu.load().await?;
    let mut wanted: Vec<(MenuItem, u32)> = Vec::new();
    for spec in ItemSpec::merge(specs) {
        let item = match catalog.find(&spec.id) {
            Some(item) => item.clone(),
            None => {
                return Err(match menu.item(&spec.id).await {
                    Ok(item) => FillCartError::Unavailable(item.name),
                    Err(e) if e.is_not_found() => FillCartError::UnknownItem(spec.id),
                    Err(e) => FillCartError::Menu(e),
                })
            }
        };
        wanted.push((item, spec.quantity));
    }

    for (item, quantity) in &wanted {
        cart.add_quantity(item, *quantity).await?;
    }
    let snapshot = cart.snapshot().await?;
    info!(items = snapshot.total_items(), "Cart filled");
    Ok(snapshot)
}

/// One line typed into `watch`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WatchInput {
    Refresh,
    Select(OrderId),
    Deselect,
    Status(OrderId, OrderStatus),
    Quit,
}

impl FromStr for WatchInput {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let words: Vec<&str> = s.split_whitespace().collect();
        match words.as_slice() {
            ["refresh"] | ["r"] => Ok(WatchInput::Refresh),
            ["quit"] | ["q"] => Ok(WatchInput::Quit),
            ["select", id] => Ok(WatchInput::Select(OrderId::from(*id))),
            ["deselect"] | ["back"] => Ok(WatchInput::Deselect),
            ["status", id, status] => status
                .parse()
                .map(|status| WatchInput::Status(OrderId::from(*id), status))
                .map_err(|e: crate::model::ParseModelError| e.to_string()),
            _ => Err(format!("unrecognized input: {s:?}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Category;

    #[test]
    fn test_item_spec_parsing() {
        assert_eq!(
            "latte".parse::<ItemSpec>(),
            Ok(ItemSpec {
                id: MenuItemId::from("latte"),
                quantity: 1
            })
        );
        assert_eq!("latte:3".parse::<ItemSpec>().unwrap().quantity, 3);
        assert_eq!(
            "latte:0".parse::<ItemSpec>(),
            Err(ItemSpecError::InvalidQuantity("0".to_string()))
        );
        assert_eq!(":2".parse::<ItemSpec>(), Err(ItemSpecError::MissingId));
    }

    #[test]
    fn test_item_spec_merge_sums_repeats() {
        let specs: Vec<ItemSpec> = ["latte:2", "cookie", "latte:3", "cookie"]
            .iter()
            .map(|s| s.parse().unwrap())
            .collect();

        let merged = ItemSpec::merge(&specs);
        assert_eq!(
            merged,
            vec![
                ItemSpec {
                    id: MenuItemId::from("latte"),
                    quantity: 5
                },
                ItemSpec {
                    id: MenuItemId::from("cookie"),
                    quantity: 2
                },
            ]
        );
    }

    #[test]
    fn test_cli_parses_order_command() {
        let cli = Cli::try_parse_from([
            "coffee-order",
            "--api-url",
            "http://cafe.local",
            "order",
            "--name",
            "Sara",
            "v60:2",
            "croissant",
        ])
        .unwrap();

        assert_eq!(cli.api_url.as_deref(), Some("http://cafe.local"));
        match cli.command {
            Command::Order { name, phone, items, .. } => {
                assert_eq!(name, "Sara");
                assert!(phone.is_empty());
                assert_eq!(items.len(), 2);
                assert_eq!(items[0].quantity, 2);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_cli_parses_menu_and_status() {
        let cli = Cli::try_parse_from(["coffee-order", "menu", "--category", "pastries"]).unwrap();
        assert!(matches!(
            cli.command,
            Command::Menu {
                category: CategoryFilter::Only(Category::Pastries),
                arabic: false
            }
        ));

        let cli = Cli::try_parse_from(["coffee-order", "status", "o-1", "ready"]).unwrap();
        assert!(matches!(
            cli.command,
            Command::Status {
                status: OrderStatus::Ready,
                ..
            }
        ));

        assert!(Cli::try_parse_from(["coffee-order", "status", "o-1", "lost"]).is_err());
        assert!(Cli::try_parse_from(["coffee-order", "watch", "--interval", "0"]).is_err());

        let cli = Cli::try_parse_from(["coffee-order", "edit", "m-3", "karak.json"]).unwrap();
        assert!(matches!(cli.command, Command::Edit { .. }));
    }

    #[test]
    fn test_watch_input() {
        assert_eq!("r".parse::<WatchInput>(), Ok(WatchInput::Refresh));
        assert_eq!("back".parse::<WatchInput>(), Ok(WatchInput::Deselect));
        assert_eq!(
            "status o-7 ready".parse::<WatchInput>(),
            Ok(WatchInput::Status(OrderId::from("o-7"), OrderStatus::Ready))
        );
        assert!("status o-7 lost".parse::<WatchInput>().is_err());
        assert!("dance".parse::<WatchInput>().is_err());
    }
}
