use anyhow::Context;
use clap::Parser;
use coffee_order::api::{CafeApi, HttpApi};
use coffee_order::checkout::CustomerInfo;
use coffee_order::cli::{fill_cart, Cli, Command, ItemSpec, WatchInput};
use coffee_order::config::Config;
use coffee_order::dashboard::{spawn_poller, AdminDashboard};
use coffee_order::lifecycle::CafeSystem;
use coffee_order::menu::{CategoryFilter, MenuCatalog};
use coffee_order::model::{Locale, MenuItemCreate, MenuItemId, OrderId, OrderStatus};
use coffee_order::render::{
    BoardView, CartView, ConfirmationView, MenuView, OrderView, CLEAR_SCREEN,
};
use std::io::Write;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;
use store_actor::tracing::setup_tracing;
use store_actor::StoreHandle;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    setup_tracing();

    let cli = Cli::parse();
    let mut config = Config::load()?;
    if let Some(url) = cli.api_url {
        config.api_url = url;
    }
    if let Some(secs) = cli.timeout {
        config.request_timeout = Duration::from_secs(secs);
    }

    let api = HttpApi::new(&config.api_url, config.request_timeout)
        .with_context(|| format!("Cannot use API URL {}", config.api_url))?;
    info!(api_url = %api.base_url(), "Starting coffee-order");
    let system = CafeSystem::new(Arc::new(api));

    let outcome = run(&system, cli.command, &config).await;
    system.shutdown().await?;
    outcome
}

async fn run(system: &CafeSystem, command: Command, config: &Config) -> anyhow::Result<()> {
    match command {
        Command::Menu { category, arabic } => show_menu(system, category, arabic).await,
        Command::Order {
            name,
            phone,
            notes,
            items,
        } => {
            let customer = CustomerInfo::new(name).with_phone(phone).with_notes(notes);
            place_order(system, customer, &items).await
        }
        Command::Orders => {
            let board = system.dashboard().refresh().await?;
            print!("{}", BoardView(&board));
            Ok(())
        }
        Command::Show { id } => {
            let order = system.api().get_order(&id).await?;
            print!("{}", OrderView(&order));
            Ok(())
        }
        Command::Status { id, status } => set_status(system, id, status).await,
        Command::Watch { interval } => {
            let period = interval
                .map(Duration::from_secs)
                .unwrap_or(config.poll_interval);
            watch(system.dashboard(), period).await
        }
        Command::Seed { file } => seed(system.api(), &file).await,
        Command::Edit { id, file } => edit(system.api(), &id, &file).await,
    }
}

async fn show_menu(system: &CafeSystem, filter: CategoryFilter, arabic: bool) -> anyhow::Result<()> {
    let menu = system.menu();
    let catalog = match filter {
        CategoryFilter::All => menu.load().await?,
        CategoryFilter::Only(category) => MenuCatalog::new(menu.load_category(category).await?),
    };
    let locale = if arabic { Locale::Arabic } else { Locale::English };
    print!(
        "{}",
        MenuView {
            catalog: &catalog,
            filter,
            locale,
        }
    );
    Ok(())
}

async fn place_order(
    system: &CafeSystem,
    customer: CustomerInfo,
    items: &[ItemSpec],
) -> anyhow::Result<()> {
    let snapshot = fill_cart(&system.menu(), &system.cart_client, items).await?;
    print!("{}", CartView(&snapshot));

    let confirmation = system.checkout().submit(&customer).await?;
    print!("\n{}", ConfirmationView(&confirmation));
    Ok(())
}

async fn set_status(system: &CafeSystem, id: OrderId, status: OrderStatus) -> anyhow::Result<()> {
    let order = system.dashboard().set_status(&id, status).await?;
    print!("{}", OrderView(&order));
    Ok(())
}

async fn seed(api: Arc<dyn CafeApi>, file: &Path) -> anyhow::Result<()> {
    let text = tokio::fs::read_to_string(file)
        .await
        .with_context(|| format!("Cannot read {}", file.display()))?;
    let items: Vec<MenuItemCreate> = serde_json::from_str(&text)
        .with_context(|| format!("{} is not a JSON array of menu items", file.display()))?;

    for item in &items {
        let created = api.create_menu_item(item).await?;
        println!("{:<38} {}", created.id.0, created.name);
    }
    info!(count = items.len(), "Menu seeded");
    Ok(())
}

async fn edit(api: Arc<dyn CafeApi>, id: &MenuItemId, file: &Path) -> anyhow::Result<()> {
    let text = tokio::fs::read_to_string(file)
        .await
        .with_context(|| format!("Cannot read {}", file.display()))?;
    let item: MenuItemCreate = serde_json::from_str(&text)
        .with_context(|| format!("{} is not a JSON menu item", file.display()))?;

    let updated = api.update_menu_item(id, &item).await?;
    println!("{:<38} {}", updated.id.0, updated.name);
    Ok(())
}

/// Redraw the board on every change until `quit` or Ctrl-C.
async fn watch(dashboard: AdminDashboard, period: Duration) -> anyhow::Result<()> {
    let poller = spawn_poller(dashboard.clone(), period);
    let mut updates = dashboard.board().subscribe();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdin_open = true;
    let mut notice = String::new();
    let ctrl_c = tokio::signal::ctrl_c();
    tokio::pin!(ctrl_c);

    loop {
        let board = updates.borrow_and_update().clone();
        redraw(&board, &notice);

        tokio::select! {
            changed = updates.changed() => {
                if changed.is_err() {
                    break;
                }
            }
            line = lines.next_line(), if stdin_open => {
                // Without input the view keeps refreshing until Ctrl-C
                let Some(line) = line? else {
                    stdin_open = false;
                    continue;
                };
                if line.trim().is_empty() {
                    continue;
                }
                notice.clear();
                match line.parse::<WatchInput>() {
                    Ok(WatchInput::Quit) => break,
                    Ok(WatchInput::Refresh) => poller.refresh_now(),
                    Ok(WatchInput::Select(id)) => {
                        if let Err(e) = dashboard.select(id).await {
                            notice = e.to_string();
                        }
                    }
                    Ok(WatchInput::Deselect) => {
                        if let Err(e) = dashboard.deselect().await {
                            notice = e.to_string();
                        }
                    }
                    Ok(WatchInput::Status(id, status)) => {
                        if let Err(e) = dashboard.set_status(&id, status).await {
                            notice = e.to_string();
                        }
                    }
                    Err(e) => notice = e,
                }
            }
            _ = &mut ctrl_c => break,
        }
    }

    poller.stop().await;
    Ok(())
}

fn redraw(board: &coffee_order::board::OrderBoard, notice: &str) {
    print!("{CLEAR_SCREEN}");
    print!("{}", BoardView(board));
    if !notice.is_empty() {
        println!("\n! {notice}");
    }
    println!("\n> refresh | select ID | deselect | status ID STATUS | quit");
    if let Err(e) = std::io::stdout().flush() {
        warn!(error = %e, "Failed to flush stdout");
    }
}
