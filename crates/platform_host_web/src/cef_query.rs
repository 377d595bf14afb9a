//! `window.cefQuery`-backed host bridge adapter.

use platform_host::{HostBridge, HostBridgeError, HostBridgeFuture};

use crate::bridge;

#[derive(Debug, Clone, Copy, Default)]
/// Host bridge for pages loaded inside the embedded browser runtime.
///
/// Each request becomes one non-persistent `cefQuery` call resolved by the host's success or
/// failure callback.
pub struct CefQueryHostBridge;

impl HostBridge for CefQueryHostBridge {
    fn send<'a>(
        &'a self,
        request: &'a str,
    ) -> HostBridgeFuture<'a, Result<String, HostBridgeError>> {
        Box::pin(async move { bridge::cef_query(request).await })
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;
    use platform_host::{fetch_window_controls_info, WindowCommand};

    use super::*;

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn non_wasm_cef_query_adapter_matches_bridge_fallback_behavior() {
        let bridge = CefQueryHostBridge;
        let bridge_obj: &dyn HostBridge = &bridge;

        for command in WindowCommand::ALL {
            assert_eq!(
                block_on(bridge_obj.send(command.as_str())),
                Err(HostBridgeError::Unavailable)
            );
        }
        assert_eq!(
            block_on(fetch_window_controls_info(bridge_obj)),
            Err(HostBridgeError::Unavailable)
        );
    }
}
