//! In-process scripted host used by tests and the stub desktop build.

use std::{cell::RefCell, collections::HashMap, rc::Rc};

use super::{HostBridge, HostBridgeError, HostBridgeFuture};
use crate::{WindowCommand, WindowControlsInfo};

/// Host error code returned for request strings outside the command vocabulary.
const UNKNOWN_REQUEST_CODE: i32 = -1;
/// Host error code returned when the window model cannot be encoded.
const ENCODE_FAILURE_CODE: i32 = -2;

#[derive(Debug, Default)]
struct MemoryHostState {
    controls_info: WindowControlsInfo,
    maximized: bool,
    minimized: bool,
    closed: bool,
    requests: Vec<String>,
    failures: HashMap<WindowCommand, (i32, String)>,
    raw_responses: HashMap<WindowCommand, String>,
}

#[derive(Debug, Clone, Default)]
/// In-memory host that answers the window command vocabulary from a simulated window.
///
/// Clones share state, so a test can keep one handle for inspection while the shell holds
/// another behind `Rc<dyn HostBridge>`.
pub struct MemoryHostBridge {
    inner: Rc<RefCell<MemoryHostState>>,
}

impl MemoryHostBridge {
    /// Creates a host reporting `info` for `get_window_controls_info`.
    pub fn with_controls_info(info: WindowControlsInfo) -> Self {
        let bridge = Self::default();
        bridge.inner.borrow_mut().controls_info = info;
        bridge
    }

    /// Sets the simulated maximized flag.
    pub fn set_maximized(&self, maximized: bool) {
        self.inner.borrow_mut().maximized = maximized;
    }

    /// Returns the simulated maximized flag.
    pub fn is_maximized(&self) -> bool {
        self.inner.borrow().maximized
    }

    /// Returns the simulated minimized flag.
    pub fn is_minimized(&self) -> bool {
        self.inner.borrow().minimized
    }

    /// Returns whether `close_window` has been accepted.
    pub fn is_closed(&self) -> bool {
        self.inner.borrow().closed
    }

    /// Makes every later `command` request fail with `code` and `message`.
    pub fn fail_command(&self, command: WindowCommand, code: i32, message: impl Into<String>) {
        self.inner
            .borrow_mut()
            .failures
            .insert(command, (code, message.into()));
    }

    /// Removes an injected failure for `command`.
    pub fn clear_failure(&self, command: WindowCommand) {
        self.inner.borrow_mut().failures.remove(&command);
    }

    /// Answers `command` with `raw` without touching the simulated window.
    pub fn set_raw_response(&self, command: WindowCommand, raw: impl Into<String>) {
        self.inner
            .borrow_mut()
            .raw_responses
            .insert(command, raw.into());
    }

    /// Returns every request string received so far, in arrival order.
    pub fn requests(&self) -> Vec<String> {
        self.inner.borrow().requests.clone()
    }

    fn respond(&self, request: &str) -> Result<String, HostBridgeError> {
        let mut state = self.inner.borrow_mut();
        state.requests.push(request.to_string());

        let Ok(command) = request.parse::<WindowCommand>() else {
            return Err(HostBridgeError::Failed {
                code: UNKNOWN_REQUEST_CODE,
                message: format!("unknown request `{request}`"),
            });
        };
        if let Some((code, message)) = state.failures.get(&command) {
            return Err(HostBridgeError::Failed {
                code: *code,
                message: message.clone(),
            });
        }
        if let Some(raw) = state.raw_responses.get(&command) {
            return Ok(raw.clone());
        }

        match command {
            WindowCommand::GetWindowControlsInfo => serde_json::to_string(&state.controls_info)
                .map_err(|e| HostBridgeError::Failed {
                    code: ENCODE_FAILURE_CODE,
                    message: e.to_string(),
                }),
            WindowCommand::IsWindowMaximized => Ok(state.maximized.to_string()),
            WindowCommand::MinimizeWindow => {
                state.minimized = true;
                Ok("ok".to_string())
            }
            WindowCommand::MaximizeWindow => {
                state.minimized = false;
                state.maximized = true;
                Ok("ok".to_string())
            }
            WindowCommand::RestoreWindow => {
                state.minimized = false;
                state.maximized = false;
                Ok("ok".to_string())
            }
            WindowCommand::CloseWindow => {
                state.closed = true;
                Ok("ok".to_string())
            }
        }
    }
}

impl HostBridge for MemoryHostBridge {
    fn send<'a>(
        &'a self,
        request: &'a str,
    ) -> HostBridgeFuture<'a, Result<String, HostBridgeError>> {
        Box::pin(async move { self.respond(request) })
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn memory_host_applies_window_commands() {
        let host = MemoryHostBridge::default();
        let bridge: &dyn HostBridge = &host;

        assert_eq!(block_on(bridge.send("is_window_maximized")).expect("query"), "false");
        block_on(bridge.send("maximize_window")).expect("maximize");
        assert!(host.is_maximized());
        assert_eq!(block_on(bridge.send("is_window_maximized")).expect("query"), "true");

        block_on(bridge.send("minimize_window")).expect("minimize");
        assert!(host.is_minimized());
        block_on(bridge.send("restore_window")).expect("restore");
        assert!(!host.is_maximized());
        assert!(!host.is_minimized());

        block_on(bridge.send("close_window")).expect("close");
        assert!(host.is_closed());
        assert_eq!(
            host.requests(),
            vec![
                "is_window_maximized",
                "maximize_window",
                "is_window_maximized",
                "minimize_window",
                "restore_window",
                "close_window",
            ]
        );
    }

    #[test]
    fn injected_failure_leaves_window_untouched() {
        let host = MemoryHostBridge::default();
        host.fail_command(WindowCommand::MaximizeWindow, 7, "denied");

        let err = block_on(host.send("maximize_window")).expect_err("fails");
        assert_eq!(
            err,
            HostBridgeError::Failed {
                code: 7,
                message: "denied".to_string()
            }
        );
        assert!(!host.is_maximized());

        host.clear_failure(WindowCommand::MaximizeWindow);
        block_on(host.send("maximize_window")).expect("maximize");
        assert!(host.is_maximized());
    }

    #[test]
    fn unknown_request_is_a_host_failure() {
        let host = MemoryHostBridge::default();
        let err = block_on(host.send("open_devtools")).expect_err("unknown");
        assert_eq!(err.code(), Some(UNKNOWN_REQUEST_CODE));
        assert_eq!(host.requests(), vec!["open_devtools"]);
    }

    #[test]
    fn raw_response_skips_the_window_model() {
        let host = MemoryHostBridge::default();
        host.set_raw_response(WindowCommand::MaximizeWindow, "ignored");
        assert_eq!(block_on(host.send("maximize_window")).expect("ok"), "ignored");
        assert!(!host.is_maximized());
    }
}
