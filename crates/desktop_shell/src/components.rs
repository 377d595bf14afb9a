//! Shell UI composition: title bar, navigation sidebar, and the home dashboard.

mod home;
mod sidebar;
mod title_bar;

use leptos::*;
use system_ui::{AppShell, SidebarInset};

pub use self::{home::HomePage, sidebar::AppSidebar, title_bar::TitleBar};
pub use crate::runtime_context::{use_shell_runtime, ShellProvider, ShellRuntimeContext};

use crate::window_controls::TITLE_BAR_HEIGHT_PX;

#[component]
/// Full window layout: fixed title bar over the sidebar and the home page.
pub fn ShellLayout() -> impl IntoView {
    view! {
        <AppShell layout_class="shell-root">
            <div class="shell-titlebar-layer">
                <TitleBar />
            </div>
            <div class="shell-body" style=format!("margin-top:{TITLE_BAR_HEIGHT_PX}px")>
                <AppSidebar />
                <SidebarInset layout_class="shell-content">
                    <HomePage />
                </SidebarInset>
            </div>
        </AppShell>
    }
}
