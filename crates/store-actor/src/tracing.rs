//! # Observability & Tracing
//!
//! [`setup_tracing`] initializes structured logging for a binary built on
//! store tasks.
//!
//! The compact format hides the crate/module prefix (`with_target(false)`);
//! store tasks already tag every event with `state_type`.
//!
//! ```bash
//! # Store lifecycle and request outcomes
//! RUST_LOG=info cargo run -- menu
//!
//! # Every dispatched action, with its payload
//! RUST_LOG=debug cargo run -- menu
//! ```
//!
//! With `RUST_LOG=debug` a cart session reads like:
//!
//! ```text
//! INFO Store started state_type="Cart"
//! DEBUG Dispatch state_type="Cart" action=AddItem { id: MenuItemId("m-1"), name: "Karak", price: 8 }
//! DEBUG Applied state_type="Cart" version=1
//! INFO Shutdown state_type="Cart" version=1
//! ```

/// Install the global `tracing` subscriber, filtered by `RUST_LOG`.
///
/// Safe to call more than once; later calls are ignored.
pub fn setup_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false) // Don't show module paths - we use state_type instead
        .compact() // Compact format shows spans inline (e.g., "checkout:submit")
        .try_init();
}
