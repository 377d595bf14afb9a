//! Desktop shell for the embedded-browser host: a draggable title bar with negotiated window
//! controls, a collapsible navigation sidebar, and a static dashboard.

pub mod components;
pub mod dashboard;
pub mod host;
pub mod navigation;
mod runtime_context;
pub mod window_controls;

pub use components::{
    use_shell_runtime, AppSidebar, HomePage, ShellLayout, ShellProvider, ShellRuntimeContext,
    TitleBar,
};
pub use host::{boot_window_controls, run_window_command, toggle_maximize, ShellHostContext};
pub use navigation::{reduce_navigation, NavItemId, NavigationAction, NavigationState};
pub use window_controls::{
    controls_layout, reduce_title_bar, ControlsLayout, MaximizeVisual, MaximizedState,
    TitleBarAction, TitleBarState, WindowControlKind, TITLE_BAR_HEIGHT_PX,
};
