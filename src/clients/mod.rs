//! Type-safe wrappers around [`StoreClient`](store_actor::StoreClient).
//!
//! Each wrapper turns domain calls (`add_item`, `patch_status`, ...) into
//! store actions and maps store failures into the domain's error type.

#[macro_use]
mod macros;

pub mod board_client;
pub mod cart_client;

pub use board_client::*;
pub use cart_client::*;
