//! Host-reported window controls configuration.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
/// Operating system family reported by the host.
pub enum Platform {
    /// Microsoft Windows.
    #[default]
    Windows,
    /// Apple macOS.
    Macos,
    /// Linux desktops.
    Linux,
}

impl Platform {
    /// Returns the stable wire token for this platform.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Windows => "windows",
            Self::Macos => "macos",
            Self::Linux => "linux",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
/// Title bar edge where the window controls live.
pub enum ControlsPosition {
    /// Leading edge (macOS convention).
    Left,
    /// Trailing edge (Windows/Linux convention).
    #[default]
    Right,
}

impl ControlsPosition {
    /// Returns the stable wire token for this position.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
        }
    }
}

fn default_use_web_controls() -> bool {
    true
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Window controls configuration delivered by the host in answer to
/// `get_window_controls_info`.
///
/// The value arrives once at startup and replaces the client default wholesale; the client never
/// mutates it.
pub struct WindowControlsInfo {
    /// Whether the host window draws native OS controls.
    pub has_native_controls: bool,
    /// Whether the UI should draw its own controls. Absent in the payload means `true`.
    #[serde(default = "default_use_web_controls")]
    pub use_web_controls: bool,
    /// Host operating system family.
    pub platform: Platform,
    /// Title bar edge hosting the controls.
    pub controls_position: ControlsPosition,
}

impl Default for WindowControlsInfo {
    fn default() -> Self {
        Self {
            has_native_controls: false,
            use_web_controls: true,
            platform: Platform::Windows,
            controls_position: ControlsPosition::Right,
        }
    }
}
