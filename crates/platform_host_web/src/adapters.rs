use std::rc::Rc;

use platform_host::{
    HostBridge, HostBridgeError, HostBridgeFuture, HostServices, HostStrategy, MemoryHostBridge,
};

use crate::CefQueryHostBridge;

/// Returns the compile-time selected host strategy for the active build.
pub const fn selected_host_strategy() -> HostStrategy {
    #[cfg(feature = "desktop-host-stub")]
    {
        HostStrategy::DesktopStub
    }

    #[cfg(not(feature = "desktop-host-stub"))]
    {
        HostStrategy::EmbeddedBrowser
    }
}

/// Returns the selected host strategy as a stable string token.
pub fn host_strategy_name() -> &'static str {
    selected_host_strategy().as_str()
}

/// Adapter enum that erases the concrete bridge backend behind [`HostBridge`].
#[derive(Debug, Clone)]
pub enum HostBridgeAdapter {
    /// Embedded browser transport over `window.cefQuery`.
    EmbeddedBrowser(CefQueryHostBridge),
    /// In-process stub host used when no native host is attached.
    DesktopStub(MemoryHostBridge),
}

impl HostBridge for HostBridgeAdapter {
    fn send<'a>(
        &'a self,
        request: &'a str,
    ) -> HostBridgeFuture<'a, Result<String, HostBridgeError>> {
        match self {
            Self::EmbeddedBrowser(bridge) => bridge.send(request),
            Self::DesktopStub(bridge) => bridge.send(request),
        }
    }
}

/// Builds the host bridge adapter for the selected strategy.
pub fn host_bridge() -> HostBridgeAdapter {
    match selected_host_strategy() {
        HostStrategy::DesktopStub => HostBridgeAdapter::DesktopStub(MemoryHostBridge::default()),
        HostStrategy::EmbeddedBrowser | HostStrategy::Detached => {
            HostBridgeAdapter::EmbeddedBrowser(CefQueryHostBridge)
        }
    }
}

/// Builds the host service bundle injected into the shell at mount.
pub fn build_host_services() -> HostServices {
    HostServices::new(Rc::new(host_bridge()), selected_host_strategy())
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;
    use platform_host::{fetch_is_window_maximized, WindowCommand};

    use super::*;

    #[cfg(not(feature = "desktop-host-stub"))]
    #[test]
    fn default_build_selects_embedded_browser_bridge() {
        assert_eq!(host_strategy_name(), "embedded-browser");
        assert!(matches!(host_bridge(), HostBridgeAdapter::EmbeddedBrowser(_)));
        assert_eq!(
            build_host_services().host_strategy,
            HostStrategy::EmbeddedBrowser
        );
    }

    #[cfg(feature = "desktop-host-stub")]
    #[test]
    fn stub_build_selects_memory_host() {
        assert_eq!(host_strategy_name(), "desktop-stub");
        assert!(matches!(host_bridge(), HostBridgeAdapter::DesktopStub(_)));
    }

    #[test]
    fn stub_adapter_forwards_to_memory_host() {
        let host = MemoryHostBridge::default();
        let adapter = HostBridgeAdapter::DesktopStub(host.clone());

        block_on(adapter.send(WindowCommand::MaximizeWindow.as_str())).expect("maximize");
        assert!(block_on(fetch_is_window_maximized(&adapter)).expect("query"));
        assert_eq!(
            host.requests(),
            vec!["maximize_window", "is_window_maximized"]
        );
    }
}
