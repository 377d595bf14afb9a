//! Window control negotiation: title bar state, its reducer, and the render decision table.
//!
//! The host reports a [`WindowControlsInfo`] once at mount; [`controls_layout`] turns it into
//! what the title bar draws. Maximize/restore is tracked optimistically in [`MaximizedState`]
//! and is never re-confirmed with the host after a command succeeds.

use platform_host::{ControlsPosition, Platform, WindowCommand, WindowControlsInfo};
use system_ui::IconName;

/// Title bar height; the content area is offset by the same amount.
pub const TITLE_BAR_HEIGHT_PX: u32 = 40;
/// Width reserved for host-drawn controls on the leading edge.
pub const LEFT_NATIVE_SPACER_PX: u32 = 80;
/// Width reserved for host-drawn controls on the trailing edge.
pub const RIGHT_NATIVE_SPACER_PX: u32 = 140;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Client-side belief about whether the host window is maximized.
pub enum MaximizedState {
    /// Window is at its restored size.
    #[default]
    Restored,
    /// Window fills the screen.
    Maximized,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Icon and tooltip for the maximize/restore control.
pub struct MaximizeVisual {
    /// Glyph to draw.
    pub icon: IconName,
    /// Accessible label and tooltip text.
    pub label: &'static str,
}

impl MaximizedState {
    /// Maps the host's `is_window_maximized` answer.
    pub const fn from_host(maximized: bool) -> Self {
        if maximized {
            Self::Maximized
        } else {
            Self::Restored
        }
    }

    /// Returns whether the window is believed to be maximized.
    pub const fn is_maximized(self) -> bool {
        matches!(self, Self::Maximized)
    }

    /// Command the maximize/restore control sends from this state.
    pub const fn toggle_command(self) -> WindowCommand {
        match self {
            Self::Maximized => WindowCommand::RestoreWindow,
            Self::Restored => WindowCommand::MaximizeWindow,
        }
    }

    /// State after `command` succeeded on the host.
    pub const fn after_command(self, command: WindowCommand) -> Self {
        match command {
            WindowCommand::MaximizeWindow => Self::Maximized,
            WindowCommand::RestoreWindow => Self::Restored,
            _ => self,
        }
    }

    /// Icon and tooltip for the maximize/restore control in this state.
    pub const fn visual(self) -> MaximizeVisual {
        match self {
            Self::Restored => MaximizeVisual {
                icon: IconName::WindowMaximize,
                label: "Maximize",
            },
            Self::Maximized => MaximizeVisual {
                icon: IconName::WindowRestore,
                label: "Restore",
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// One window control button.
pub enum WindowControlKind {
    /// Minimize the window.
    Minimize,
    /// Maximize or restore, depending on [`MaximizedState`].
    MaximizeRestore,
    /// Close the window.
    Close,
}

impl WindowControlKind {
    /// Host command issued when the control is pressed in `maximized` state.
    pub const fn command(self, maximized: MaximizedState) -> WindowCommand {
        match self {
            Self::Minimize => WindowCommand::MinimizeWindow,
            Self::MaximizeRestore => maximized.toggle_command(),
            Self::Close => WindowCommand::CloseWindow,
        }
    }

    /// Stable DOM slot token.
    pub const fn slot(self) -> &'static str {
        match self {
            Self::Minimize => "minimize",
            Self::MaximizeRestore => "maximize",
            Self::Close => "close",
        }
    }

    /// Traffic-light color for the macOS-style layout.
    pub const fn traffic_light_color(self) -> &'static str {
        match self {
            Self::Close => "red",
            Self::Minimize => "yellow",
            Self::MaximizeRestore => "green",
        }
    }

    /// Icon and label for this control in `maximized` state.
    pub const fn visual(self, maximized: MaximizedState) -> MaximizeVisual {
        match self {
            Self::Minimize => MaximizeVisual {
                icon: IconName::WindowMinimize,
                label: "Minimize",
            },
            Self::MaximizeRestore => maximized.visual(),
            Self::Close => MaximizeVisual {
                icon: IconName::Dismiss,
                label: "Close",
            },
        }
    }
}

const TRAFFIC_LIGHT_ORDER: [WindowControlKind; 3] = [
    WindowControlKind::Close,
    WindowControlKind::Minimize,
    WindowControlKind::MaximizeRestore,
];

const CAPTION_ORDER: [WindowControlKind; 3] = [
    WindowControlKind::Minimize,
    WindowControlKind::MaximizeRestore,
    WindowControlKind::Close,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// What the title bar renders in the window-controls slot.
pub enum ControlsLayout {
    /// No controls and no reserved space.
    Hidden,
    /// Empty block reserving room for host-drawn controls.
    NativeSpacer {
        /// Reserved width in CSS pixels.
        width_px: u32,
    },
    /// Circular macOS-style buttons: close, minimize, maximize/restore.
    TrafficLights,
    /// Rectangular caption buttons: minimize, maximize/restore, close.
    Caption,
}

impl ControlsLayout {
    /// Buttons drawn for this layout, in visual order.
    pub fn buttons(self) -> &'static [WindowControlKind] {
        match self {
            Self::Hidden | Self::NativeSpacer { .. } => &[],
            Self::TrafficLights => &TRAFFIC_LIGHT_ORDER,
            Self::Caption => &CAPTION_ORDER,
        }
    }

    /// Stable DOM variant token.
    pub const fn token(self) -> &'static str {
        match self {
            Self::Hidden => "hidden",
            Self::NativeSpacer { .. } => "native-spacer",
            Self::TrafficLights => "traffic-lights",
            Self::Caption => "caption",
        }
    }
}

/// Chooses the window-controls rendering for a host configuration.
///
/// Drawing web controls and reserving native spacing never happen together: the spacer is only
/// reserved when web controls are off and the host draws its own.
pub fn controls_layout(info: &WindowControlsInfo) -> ControlsLayout {
    if !info.use_web_controls {
        if !info.has_native_controls {
            return ControlsLayout::Hidden;
        }
        let width_px = match info.controls_position {
            ControlsPosition::Left => LEFT_NATIVE_SPACER_PX,
            ControlsPosition::Right => RIGHT_NATIVE_SPACER_PX,
        };
        return ControlsLayout::NativeSpacer { width_px };
    }

    match (info.controls_position, info.platform) {
        (ControlsPosition::Left, Platform::Macos) => ControlsLayout::TrafficLights,
        _ => ControlsLayout::Caption,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Title bar state owned by one mounted title bar.
pub struct TitleBarState {
    /// Host configuration (default until the host answers).
    pub controls: WindowControlsInfo,
    /// Optimistic maximize toggle.
    pub maximized: MaximizedState,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Actions accepted by [`reduce_title_bar`].
pub enum TitleBarAction {
    /// The host answered `get_window_controls_info`.
    ControlsInfoLoaded(WindowControlsInfo),
    /// The host answered `is_window_maximized`.
    MaximizedStateLoaded(bool),
    /// A window command succeeded on the host.
    WindowCommandSucceeded(WindowCommand),
}

/// Applies a [`TitleBarAction`] to the title bar state.
pub fn reduce_title_bar(state: &mut TitleBarState, action: TitleBarAction) {
    match action {
        TitleBarAction::ControlsInfoLoaded(info) => state.controls = info,
        TitleBarAction::MaximizedStateLoaded(maximized) => {
            state.maximized = MaximizedState::from_host(maximized)
        }
        TitleBarAction::WindowCommandSucceeded(command) => {
            state.maximized = state.maximized.after_command(command)
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn info(position: ControlsPosition, platform: Platform) -> WindowControlsInfo {
        WindowControlsInfo {
            has_native_controls: false,
            use_web_controls: true,
            platform,
            controls_position: position,
        }
    }

    #[test]
    fn only_left_macos_selects_traffic_lights() {
        let platforms = [Platform::Windows, Platform::Macos, Platform::Linux];
        let positions = [ControlsPosition::Left, ControlsPosition::Right];
        for platform in platforms {
            for position in positions {
                let expected = if position == ControlsPosition::Left && platform == Platform::Macos
                {
                    ControlsLayout::TrafficLights
                } else {
                    ControlsLayout::Caption
                };
                assert_eq!(
                    controls_layout(&info(position, platform)),
                    expected,
                    "{position:?} {platform:?}"
                );
            }
        }
    }

    #[test]
    fn native_controls_reserve_spacer_by_position() {
        let mut left = info(ControlsPosition::Left, Platform::Macos);
        left.use_web_controls = false;
        left.has_native_controls = true;
        let mut right = info(ControlsPosition::Right, Platform::Windows);
        right.use_web_controls = false;
        right.has_native_controls = true;

        assert_eq!(
            controls_layout(&left),
            ControlsLayout::NativeSpacer { width_px: 80 }
        );
        assert_eq!(
            controls_layout(&right),
            ControlsLayout::NativeSpacer { width_px: 140 }
        );
        assert!(controls_layout(&left).buttons().is_empty());
        assert!(controls_layout(&right).buttons().is_empty());
    }

    #[test]
    fn web_controls_win_over_native_spacing() {
        let mut both = info(ControlsPosition::Right, Platform::Windows);
        both.has_native_controls = true;
        assert_eq!(controls_layout(&both), ControlsLayout::Caption);
    }

    #[test]
    fn no_web_and_no_native_controls_renders_nothing() {
        let mut bare = info(ControlsPosition::Left, Platform::Linux);
        bare.use_web_controls = false;
        assert_eq!(controls_layout(&bare), ControlsLayout::Hidden);
        assert!(ControlsLayout::Hidden.buttons().is_empty());
    }

    #[test]
    fn button_order_follows_platform_convention() {
        assert_eq!(
            ControlsLayout::TrafficLights.buttons(),
            &[
                WindowControlKind::Close,
                WindowControlKind::Minimize,
                WindowControlKind::MaximizeRestore
            ]
        );
        assert_eq!(
            ControlsLayout::Caption.buttons(),
            &[
                WindowControlKind::Minimize,
                WindowControlKind::MaximizeRestore,
                WindowControlKind::Close
            ]
        );
        let colors: Vec<_> = ControlsLayout::TrafficLights
            .buttons()
            .iter()
            .map(|kind| kind.traffic_light_color())
            .collect();
        assert_eq!(colors, vec!["red", "yellow", "green"]);
    }

    #[test]
    fn maximize_restore_control_tracks_toggle_state() {
        let restored = MaximizedState::Restored;
        let maximized = MaximizedState::Maximized;

        assert_eq!(
            WindowControlKind::MaximizeRestore.command(restored),
            WindowCommand::MaximizeWindow
        );
        assert_eq!(
            WindowControlKind::MaximizeRestore.command(maximized),
            WindowCommand::RestoreWindow
        );
        assert_eq!(restored.visual().icon, IconName::WindowMaximize);
        assert_eq!(restored.visual().label, "Maximize");
        assert_eq!(maximized.visual().icon, IconName::WindowRestore);
        assert_eq!(maximized.visual().label, "Restore");
    }

    #[test]
    fn reducer_applies_host_answers_and_successful_commands() {
        let mut state = TitleBarState::default();
        let host_info = WindowControlsInfo {
            has_native_controls: true,
            use_web_controls: false,
            platform: Platform::Macos,
            controls_position: ControlsPosition::Left,
        };

        reduce_title_bar(&mut state, TitleBarAction::ControlsInfoLoaded(host_info));
        assert_eq!(state.controls, host_info);

        reduce_title_bar(&mut state, TitleBarAction::MaximizedStateLoaded(true));
        assert_eq!(state.maximized, MaximizedState::Maximized);

        reduce_title_bar(
            &mut state,
            TitleBarAction::WindowCommandSucceeded(WindowCommand::MinimizeWindow),
        );
        assert_eq!(state.maximized, MaximizedState::Maximized);

        reduce_title_bar(
            &mut state,
            TitleBarAction::WindowCommandSucceeded(WindowCommand::RestoreWindow),
        );
        assert_eq!(state.maximized, MaximizedState::Restored);
    }

    #[test]
    fn default_state_renders_caption_with_maximize_icon() {
        let state = TitleBarState::default();
        assert_eq!(controls_layout(&state.controls), ControlsLayout::Caption);
        assert_eq!(state.maximized.visual().icon, IconName::WindowMaximize);
    }
}
