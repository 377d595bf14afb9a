//! Browser (`wasm32`) implementations of [`platform_host`] service contracts.
//!
//! This crate is the concrete browser-side host wiring layer. The embedded browser runtime
//! exposes a callback-based `window.cefQuery` primitive; `bridge` turns it into a single-result
//! future and [`CefQueryHostBridge`] exposes that as a [`platform_host::HostBridge`].

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

/// Compile-time host-strategy selection and concrete adapter factories for shell wiring.
pub mod adapters;
mod bridge;
pub mod cef_query;

pub use adapters::{
    build_host_services, host_bridge, host_strategy_name, selected_host_strategy,
    HostBridgeAdapter,
};
pub use cef_query::CefQueryHostBridge;
