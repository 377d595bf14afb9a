use leptos::logging;
use platform_host::{
    fetch_is_window_maximized, fetch_window_controls_info, send_window_command, HostBridge,
    HostBridgeError, WindowCommand,
};

use crate::window_controls::{MaximizedState, TitleBarAction};

/// Queries the host configuration, then the maximized state, dispatching each answer.
///
/// The queries run one after the other. A failed configuration query skips the maximized query
/// and leaves the defaults in place; both failures are logged, never surfaced.
pub async fn boot_window_controls<B, F>(bridge: &B, dispatch: F)
where
    B: HostBridge + ?Sized,
    F: Fn(TitleBarAction),
{
    let info = match fetch_window_controls_info(bridge).await {
        Ok(info) => info,
        Err(err) => {
            logging::error!("failed to initialize window controls: {err}");
            return;
        }
    };
    dispatch(TitleBarAction::ControlsInfoLoaded(info));

    match fetch_is_window_maximized(bridge).await {
        Ok(maximized) => dispatch(TitleBarAction::MaximizedStateLoaded(maximized)),
        Err(err) => logging::error!("failed to initialize window controls: {err}"),
    }
}

/// Sends `command` to the host and records it as applied once the host acknowledges it.
///
/// On failure the error is logged and returned; no state changes.
pub async fn run_window_command<B, F>(
    bridge: &B,
    command: WindowCommand,
    dispatch: F,
) -> Result<(), HostBridgeError>
where
    B: HostBridge + ?Sized,
    F: Fn(TitleBarAction),
{
    match send_window_command(bridge, command).await {
        Ok(_) => {
            dispatch(TitleBarAction::WindowCommandSucceeded(command));
            Ok(())
        }
        Err(err) => {
            logging::error!("failed to {} window: {err}", command_verb(command));
            Err(err)
        }
    }
}

/// Sends maximize or restore depending on `current` and flips the optimistic state on success.
pub async fn toggle_maximize<B, F>(
    bridge: &B,
    current: MaximizedState,
    dispatch: F,
) -> Result<(), HostBridgeError>
where
    B: HostBridge + ?Sized,
    F: Fn(TitleBarAction),
{
    run_window_command(bridge, current.toggle_command(), dispatch).await
}

fn command_verb(command: WindowCommand) -> &'static str {
    match command {
        WindowCommand::MinimizeWindow => "minimize",
        WindowCommand::MaximizeWindow => "maximize",
        WindowCommand::RestoreWindow => "restore",
        WindowCommand::CloseWindow => "close",
        WindowCommand::IsWindowMaximized => "query",
        WindowCommand::GetWindowControlsInfo => "describe",
    }
}
