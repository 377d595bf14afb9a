//! Typed host-domain contracts and shared models used across the shell runtime and browser
//! adapters.
//!
//! This crate is the API-first boundary between the shell UI and the embedding host process. It
//! exposes the request/response [`HostBridge`] contract, the fixed window command vocabulary,
//! the host-reported [`WindowControlsInfo`] model, and in-memory adapters used by tests and the
//! stub desktop build. The concrete browser adapter lives in `platform_host_web`.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod bridge;
pub mod host;
pub mod window;

pub use bridge::{
    HostBridge, HostBridgeError, HostBridgeFuture, MemoryHostBridge, UnavailableHostBridge,
};
pub use host::{HostServices, HostStrategy};
pub use window::commands::{
    fetch_is_window_maximized, fetch_window_controls_info, send_window_command,
    UnknownWindowCommand, WindowCommand,
};
pub use window::controls::{ControlsPosition, Platform, WindowControlsInfo};
