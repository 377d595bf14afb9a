use super::*;

#[component]
/// Collapsible navigation sidebar root.
pub fn Sidebar(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] collapsed: MaybeSignal<bool>,
    #[prop(optional, into)] aria_label: Option<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <aside
            class=merge_layout_class("ui-sidebar", layout_class)
            aria-label=aria_label
            data-ui-primitive="true"
            data-ui-kind="sidebar"
            data-ui-state=move || if collapsed.get() { "collapsed" } else { "expanded" }
            data-ui-collapsed=move || bool_token(collapsed.get())
        >
            {children()}
        </aside>
    }
}

#[component]
/// Sidebar header slot.
pub fn SidebarHeader(children: Children) -> impl IntoView {
    view! {
        <div class="ui-sidebar-header" data-ui-primitive="true" data-ui-kind="sidebar-header">
            {children()}
        </div>
    }
}

#[component]
/// Scrollable sidebar body.
pub fn SidebarContent(children: Children) -> impl IntoView {
    view! {
        <div class="ui-sidebar-content" data-ui-primitive="true" data-ui-kind="sidebar-content">
            {children()}
        </div>
    }
}

#[component]
/// Sidebar footer slot.
pub fn SidebarFooter(children: Children) -> impl IntoView {
    view! {
        <div class="ui-sidebar-footer" data-ui-primitive="true" data-ui-kind="sidebar-footer">
            {children()}
        </div>
    }
}

#[component]
/// Main content area next to the sidebar.
pub fn SidebarInset(
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <main
            class=merge_layout_class("ui-sidebar-inset", layout_class)
            data-ui-primitive="true"
            data-ui-kind="sidebar-inset"
        >
            {children()}
        </main>
    }
}

#[component]
/// Navigation menu list.
pub fn NavList(
    #[prop(optional, into)] aria_label: Option<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <nav class="ui-nav-list" aria-label=aria_label data-ui-primitive="true" data-ui-kind="nav-list">
            <ul role="list">{children()}</ul>
        </nav>
    }
}

#[component]
/// Navigation entry with icon, label, and optional count badge.
///
/// When `collapsed` is set only the icon is shown and the label moves into the tooltip.
pub fn NavItem(
    icon: IconName,
    label: &'static str,
    #[prop(optional, into)] active: MaybeSignal<bool>,
    #[prop(optional, into)] collapsed: MaybeSignal<bool>,
    #[prop(optional_no_strip)] badge: Option<u32>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
) -> impl IntoView {
    view! {
        <li class="ui-nav-item" data-ui-primitive="true" data-ui-kind="nav-item">
            <Button
                layout_class="ui-nav-item-button"
                ui_slot="nav-item"
                variant=ButtonVariant::Quiet
                selected=active
                aria_label=label.to_string()
                title=label.to_string()
                on_click=Callback::new(move |ev| {
                    if let Some(on_click) = on_click.as_ref() {
                        on_click.call(ev);
                    }
                })
            >
                <Icon icon size=IconSize::Sm />
                <Show when=move || !collapsed.get() fallback=|| ()>
                    <span data-ui-slot="label">{label}</span>
                    {badge.map(|count| view! { <Badge>{count}</Badge> })}
                </Show>
            </Button>
        </li>
    }
}
