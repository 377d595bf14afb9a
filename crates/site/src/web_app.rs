use desktop_shell::{ShellLayout, ShellProvider};
use leptos::*;
use leptos_meta::*;
use platform_host_web::build_host_services;

#[component]
pub fn SiteApp() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Workspace" />
        <Meta name="color-scheme" content="dark" />
        <ShellEntry />
    }
}

#[component]
pub fn ShellEntry() -> impl IntoView {
    view! {
        <ShellProvider host_services=build_host_services()>
            <ShellLayout />
        </ShellProvider>
    }
}

/// Forces the dark palette on the document root regardless of the OS preference.
#[cfg(target_arch = "wasm32")]
pub(crate) fn force_dark_theme() {
    use wasm_bindgen::JsCast;

    let Some(root) = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.document_element())
    else {
        return;
    };
    if let Err(err) = root.class_list().add_1("dark") {
        logging::warn!("failed to apply dark theme class: {err:?}");
    }
    let Ok(root) = root.dyn_into::<web_sys::HtmlElement>() else {
        return;
    };
    if let Err(err) = root.style().set_property("color-scheme", "dark") {
        logging::warn!("failed to apply dark color scheme: {err:?}");
    }
}
