//! Shared host-bundle models for browser and desktop shell composition.

use std::rc::Rc;

use crate::{HostBridge, MemoryHostBridge, UnavailableHostBridge};

/// Stable host strategy selected for the current build/runtime composition path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostStrategy {
    /// Embedded browser runtime exposing `window.cefQuery`.
    EmbeddedBrowser,
    /// Desktop composition backed by the in-process stub host.
    DesktopStub,
    /// No host bridge at all (plain browser tab or native test run).
    Detached,
}

impl HostStrategy {
    /// Returns a stable string token for diagnostics.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::EmbeddedBrowser => "embedded-browser",
            Self::DesktopStub => "desktop-stub",
            Self::Detached => "detached",
        }
    }
}

/// Runtime-selected host service bundle injected into the shell.
///
/// All environment-specific adapter selection happens before this bundle crosses into
/// `desktop_shell`, which keeps the shell decoupled from browser interop details.
#[derive(Clone)]
pub struct HostServices {
    /// Window-management request/response bridge.
    pub bridge: Rc<dyn HostBridge>,
    /// Stable strategy identifier for diagnostics.
    pub host_strategy: HostStrategy,
}

impl HostServices {
    /// Bundles an arbitrary bridge under `host_strategy`.
    pub fn new(bridge: Rc<dyn HostBridge>, host_strategy: HostStrategy) -> Self {
        Self {
            bridge,
            host_strategy,
        }
    }

    /// Bundle with no host; every window command is rejected as unavailable.
    pub fn detached() -> Self {
        Self::new(Rc::new(UnavailableHostBridge), HostStrategy::Detached)
    }

    /// Bundle backed by an in-process [`MemoryHostBridge`].
    pub fn stub(host: MemoryHostBridge) -> Self {
        Self::new(Rc::new(host), HostStrategy::DesktopStub)
    }
}

impl Default for HostServices {
    fn default() -> Self {
        Self::detached()
    }
}

impl std::fmt::Debug for HostServices {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HostServices")
            .field("host_strategy", &self.host_strategy)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;

    use super::*;
    use crate::{HostBridgeError, WindowCommand};

    #[test]
    fn detached_bundle_rejects_commands() {
        let services = HostServices::default();
        assert_eq!(services.host_strategy.as_str(), "detached");
        assert_eq!(
            block_on(services.bridge.send(WindowCommand::MinimizeWindow.as_str())),
            Err(HostBridgeError::Unavailable)
        );
    }

    #[test]
    fn stub_bundle_shares_host_state() {
        let host = MemoryHostBridge::default();
        let services = HostServices::stub(host.clone());
        block_on(services.bridge.send("maximize_window")).expect("maximize");
        assert!(host.is_maximized());
        assert_eq!(services.host_strategy, HostStrategy::DesktopStub);
    }
}
