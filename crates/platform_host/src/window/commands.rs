//! Fixed host-bridge command vocabulary and typed request helpers.

use std::{fmt, str::FromStr};

use thiserror::Error;

use crate::{HostBridge, HostBridgeError, WindowControlsInfo};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Request strings understood by the host window-management bridge.
pub enum WindowCommand {
    /// Query the window controls configuration (JSON response).
    GetWindowControlsInfo,
    /// Query whether the window is maximized (`"true"` literal response).
    IsWindowMaximized,
    /// Minimize the host window.
    MinimizeWindow,
    /// Maximize the host window.
    MaximizeWindow,
    /// Restore the host window from maximized state.
    RestoreWindow,
    /// Close the host window.
    CloseWindow,
}

impl WindowCommand {
    /// Every command in vocabulary order.
    pub const ALL: [Self; 6] = [
        Self::GetWindowControlsInfo,
        Self::IsWindowMaximized,
        Self::MinimizeWindow,
        Self::MaximizeWindow,
        Self::RestoreWindow,
        Self::CloseWindow,
    ];

    /// Returns the exact request string sent over the bridge.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::GetWindowControlsInfo => "get_window_controls_info",
            Self::IsWindowMaximized => "is_window_maximized",
            Self::MinimizeWindow => "minimize_window",
            Self::MaximizeWindow => "maximize_window",
            Self::RestoreWindow => "restore_window",
            Self::CloseWindow => "close_window",
        }
    }
}

impl fmt::Display for WindowCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown window command `{0}`")]
/// Error returned when a request string is outside the command vocabulary.
pub struct UnknownWindowCommand(pub String);

impl FromStr for WindowCommand {
    type Err = UnknownWindowCommand;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|command| command.as_str() == s)
            .ok_or_else(|| UnknownWindowCommand(s.to_string()))
    }
}

/// Sends a vocabulary command through `bridge` and returns the raw response string.
///
/// # Errors
///
/// Returns the bridge failure unchanged.
pub async fn send_window_command<B: HostBridge + ?Sized>(
    bridge: &B,
    command: WindowCommand,
) -> Result<String, HostBridgeError> {
    bridge.send(command.as_str()).await
}

/// Queries and decodes the host window controls configuration.
///
/// # Errors
///
/// Returns the bridge failure, or [`HostBridgeError::InvalidResponse`] when the payload is not a
/// valid [`WindowControlsInfo`] JSON document.
pub async fn fetch_window_controls_info<B: HostBridge + ?Sized>(
    bridge: &B,
) -> Result<WindowControlsInfo, HostBridgeError> {
    let command = WindowCommand::GetWindowControlsInfo;
    let raw = send_window_command(bridge, command).await?;
    serde_json::from_str(&raw).map_err(|e| HostBridgeError::InvalidResponse {
        command: command.as_str(),
        reason: e.to_string(),
    })
}

/// Queries whether the host window is maximized.
///
/// Only the exact literal `"true"` counts as maximized; any other successful response is treated
/// as not maximized.
///
/// # Errors
///
/// Returns the bridge failure unchanged.
pub async fn fetch_is_window_maximized<B: HostBridge + ?Sized>(
    bridge: &B,
) -> Result<bool, HostBridgeError> {
    let raw = send_window_command(bridge, WindowCommand::IsWindowMaximized).await?;
    Ok(raw == "true")
}
