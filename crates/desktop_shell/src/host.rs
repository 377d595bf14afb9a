//! Host-side helpers that run window-control effects against the injected host bridge.
//!
//! Components never talk to the bridge directly; they hand their title bar state signal to
//! [`ShellHostContext`], which spawns the async request on the local executor and feeds the
//! answers back through the title bar reducer. Answers that arrive after the title bar has
//! unmounted are dropped.

mod window_effects;

use std::rc::Rc;

use leptos::{spawn_local, RwSignal, SignalUpdate};
use platform_host::{HostBridge, HostServices, HostStrategy, WindowCommand};

use crate::window_controls::{reduce_title_bar, TitleBarAction, TitleBarState};

pub use window_effects::{boot_window_controls, run_window_command, toggle_maximize};

#[derive(Clone)]
/// Host service bundle for shell side effects.
pub struct ShellHostContext {
    bridge: Rc<dyn HostBridge>,
    host_strategy: HostStrategy,
}

impl Default for ShellHostContext {
    fn default() -> Self {
        Self::new(HostServices::default())
    }
}

impl ShellHostContext {
    /// Builds a host context from an injected [`HostServices`] bundle.
    pub fn new(services: HostServices) -> Self {
        Self {
            bridge: services.bridge,
            host_strategy: services.host_strategy,
        }
    }

    /// Returns the configured host bridge.
    pub fn bridge(&self) -> Rc<dyn HostBridge> {
        self.bridge.clone()
    }

    /// Returns the selected host strategy.
    pub fn host_strategy(&self) -> HostStrategy {
        self.host_strategy
    }

    /// Returns the selected host strategy token for diagnostics.
    pub fn host_strategy_name(&self) -> &'static str {
        self.host_strategy.as_str()
    }

    /// Spawns the mount-time window-controls queries.
    pub fn install_window_controls_boot(&self, state: RwSignal<TitleBarState>) {
        let bridge = self.bridge();
        spawn_local(async move {
            boot_window_controls(bridge.as_ref(), move |action| {
                apply_title_bar_action(state, action)
            })
            .await;
        });
    }

    /// Spawns one window command; the failure is logged by [`run_window_command`].
    pub fn dispatch_window_command(&self, command: WindowCommand, state: RwSignal<TitleBarState>) {
        let bridge = self.bridge();
        spawn_local(async move {
            let _ = run_window_command(bridge.as_ref(), command, move |action| {
                apply_title_bar_action(state, action)
            })
            .await;
        });
    }
}

/// Reduces `action` into the title bar state; a no-op once the owning title bar is disposed.
pub(crate) fn apply_title_bar_action(state: RwSignal<TitleBarState>, action: TitleBarAction) {
    if state
        .try_update(|state| reduce_title_bar(state, action))
        .is_none()
    {
        leptos::logging::debug_warn!("title bar disposed before host answered: {action:?}");
    }
}

#[cfg(test)]
mod tests {
    use platform_host::MemoryHostBridge;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn default_context_is_detached() {
        let host = ShellHostContext::default();
        assert_eq!(host.host_strategy(), HostStrategy::Detached);
        assert_eq!(host.host_strategy_name(), "detached");
    }

    #[test]
    fn stub_context_shares_the_injected_bridge() {
        let stub = MemoryHostBridge::default();
        let host = ShellHostContext::new(HostServices::stub(stub.clone()));

        futures::executor::block_on(host.bridge().send("minimize_window")).expect("minimize");

        assert_eq!(host.host_strategy_name(), "desktop-stub");
        assert!(stub.is_minimized());
    }
}
