//! Provider and context wiring for the shell.
//!
//! The provider owns the injected host bundle. Title bar and sidebar state stay local to the
//! components that render them.

use leptos::*;
use platform_host::HostServices;

use crate::host::ShellHostContext;

#[derive(Clone, Copy)]
/// Leptos context giving shell components access to the host bridge.
pub struct ShellRuntimeContext {
    /// Host service bundle for window-control side effects.
    pub host: StoredValue<ShellHostContext>,
}

#[component]
/// Provides [`ShellRuntimeContext`] to descendant components.
pub fn ShellProvider(
    /// Injected host bundle assembled by the entry layer.
    host_services: HostServices,
    children: Children,
) -> impl IntoView {
    let host = ShellHostContext::new(host_services);
    logging::log!("desktop shell host strategy: {}", host.host_strategy_name());

    provide_context(ShellRuntimeContext {
        host: store_value(host),
    });

    children().into_view()
}

/// Returns the current [`ShellRuntimeContext`].
///
/// # Panics
///
/// Panics if called outside [`ShellProvider`].
pub fn use_shell_runtime() -> ShellRuntimeContext {
    use_context::<ShellRuntimeContext>().expect("ShellRuntimeContext not provided")
}
