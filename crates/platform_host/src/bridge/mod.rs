//! Host bridge contracts, errors, and lightweight adapters.

mod error;
mod memory;
mod service;

pub use error::HostBridgeError;
pub use memory::MemoryHostBridge;
pub use service::{HostBridge, HostBridgeFuture, UnavailableHostBridge};
