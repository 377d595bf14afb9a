//! Host bridge service contract and the unavailable-host adapter.

use std::{future::Future, pin::Pin};

use super::HostBridgeError;

/// Object-safe boxed future used by [`HostBridge`].
pub type HostBridgeFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

/// One-shot, text-based request/response channel to the embedding host process.
///
/// Each call yields exactly one success-or-failure outcome. Implementations do not retry, time
/// out, or queue; callers own the handling of every rejection.
pub trait HostBridge {
    /// Sends one request string and resolves with the host's response string.
    fn send<'a>(
        &'a self,
        request: &'a str,
    ) -> HostBridgeFuture<'a, Result<String, HostBridgeError>>;
}

#[derive(Debug, Clone, Copy, Default)]
/// Bridge used when no host primitive exists; every request is rejected immediately.
pub struct UnavailableHostBridge;

impl HostBridge for UnavailableHostBridge {
    fn send<'a>(
        &'a self,
        _request: &'a str,
    ) -> HostBridgeFuture<'a, Result<String, HostBridgeError>> {
        Box::pin(async { Err(HostBridgeError::Unavailable) })
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;

    use super::*;

    #[test]
    fn unavailable_bridge_rejects_every_request() {
        let bridge = UnavailableHostBridge;
        let bridge_obj: &dyn HostBridge = &bridge;
        assert_eq!(
            block_on(bridge_obj.send("minimize_window")).expect_err("unavailable"),
            HostBridgeError::Unavailable
        );
        assert_eq!(
            block_on(bridge_obj.send("")).expect_err("unavailable"),
            HostBridgeError::Unavailable
        );
    }
}
