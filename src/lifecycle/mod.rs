//! # System Lifecycle
//!
//! [`CafeSystem`] starts the two store tasks (cart and order board), holds
//! their clients and hands out the services built on top of them.
//!
//! ## Shutdown
//!
//! Store tasks stop when every client clone is gone:
//!
//! 1. **Drop services** - [`Checkout`](crate::checkout::Checkout) and
//!    [`AdminDashboard`](crate::dashboard::AdminDashboard) hold client clones,
//!    so drop them (and stop any poller) first
//! 2. **Call [`CafeSystem::shutdown`]** - drops the system's own clients
//! 3. **Await completion** - each store logs its final version and exits
//!
//! A service still alive at step 2 keeps its store running, and `shutdown`
//! waits for it.
//!
//! ## Observability
//!
//! Call [`setup_tracing`](store_actor::tracing::setup_tracing) once at
//! start-up; `RUST_LOG` selects the level.

pub mod system;

pub use system::*;
