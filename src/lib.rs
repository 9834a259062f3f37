//! # Coffee Order
//!
//! > **A terminal ordering client for a coffee shop.**
//!
//! Customers browse a bilingual menu, fill a cart and place an order; staff
//! watch incoming orders and move them between statuses. Menu items and
//! orders live on a remote HTTP service. The only state this crate owns is
//! the cart and the admin's view of the order list.
//!
//! ## 🏗️ Design
//!
//! ### State as reducers
//! The cart and the order board are plain values with a transition function
//! (`(state, action) -> new state`, see [`store_actor::Reducer`]). Each is
//! owned by one [`StoreActor`](store_actor::StoreActor) task that applies
//! actions in arrival order and publishes immutable snapshots. Nothing else
//! ever writes to them, so there are no locks.
//!
//! ### Exact money
//! Prices are [`rust_decimal::Decimal`] end to end. They are rounded to two
//! places only when shown, e.g. `AED 58.50`.
//!
//! ### Errors
//! Every failure happens at the API boundary. Each layer has its own
//! `thiserror` enum ([`api::ApiError`], [`checkout::CheckoutError`],
//! [`dashboard::DashboardError`], ...); failures are logged and returned,
//! never retried.
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. Data ([`model`])
//! Wire types shared with the service: [`MenuItem`](model::MenuItem),
//! [`Order`](model::Order), [`Category`](model::Category),
//! [`OrderStatus`](model::OrderStatus).
//!
//! ### 2. State ([`cart`], [`board`])
//! The two reducers and their actions.
//!
//! ### 3. The Interface ([`clients`])
//! [`CartClient`](clients::CartClient) and [`BoardClient`](clients::BoardClient)
//! wrap the generic store client with domain calls.
//!
//! ### 4. Services ([`api`], [`menu`], [`checkout`], [`dashboard`])
//! - [`api::CafeApi`] with an HTTP and an in-memory implementation
//! - [`menu::MenuBrowser`] loads and groups the catalog
//! - [`checkout::Checkout`] validates and submits the cart
//! - [`dashboard::AdminDashboard`] refreshes, polls and updates statuses
//!
//! ### 5. The Orchestrator ([`lifecycle`])
//! [`CafeSystem`](lifecycle::CafeSystem) starts the stores and hands out
//! services.
//!
//! ### 6. Terminal ([`cli`], [`config`], [`render`])
//! Argument parsing, environment configuration and text views for the
//! `coffee-order` binary.
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! # Point at a running service and browse
//! COFFEE_API_URL=http://localhost:8000 cargo run -- menu --arabic
//!
//! # Place an order
//! cargo run -- order --name Sara --notes "no sugar" <ITEM_ID>:2
//!
//! # Admin view, refreshed every 10 seconds
//! RUST_LOG=info cargo run -- watch --interval 10
//! ```
//!
//! ### Running Tests
//!
//! ```bash
//! cargo test --workspace
//! ```

pub mod api;
pub mod board;
pub mod cart;
pub mod checkout;
pub mod cli;
pub mod clients;
pub mod config;
pub mod dashboard;
pub mod lifecycle;
pub mod menu;
pub mod model;
pub mod render;
