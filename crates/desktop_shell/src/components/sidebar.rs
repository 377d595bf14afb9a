use leptos::*;
use system_ui::{
    Button, ButtonShape, ButtonSize, ButtonVariant, Cluster, Icon, IconName, IconSize, LayoutGap,
    NavItem, NavList, Sidebar, SidebarContent, SidebarFooter, SidebarHeader, Stack, Text,
    TextField, TextRole, TextTone,
};

use crate::navigation::{
    reduce_navigation, NavigationAction, NavigationState, BRAND_SUBTITLE, BRAND_TITLE,
    SETTINGS_LABEL,
};

#[component]
/// Collapsible navigation sidebar with search and the fixed item catalog.
pub fn AppSidebar() -> impl IntoView {
    let state = create_rw_signal(NavigationState::default());
    let dispatch = move |action: NavigationAction| {
        state.update(|state| reduce_navigation(state, action));
    };

    let collapsed = create_memo(move |_| state.with(|state| state.collapsed));
    let visible = create_memo(move |_| state.with(NavigationState::visible_items));
    let search = Signal::derive(move || state.with(|state| state.search.clone()));

    view! {
        <Sidebar layout_class="shell-sidebar" collapsed aria_label="Main navigation">
            <SidebarHeader>
                <Cluster gap=LayoutGap::Sm ui_slot="brand">
                    <span class="shell-brand-mark" aria-hidden="true">
                        <Icon icon=IconName::Folder size=IconSize::Sm />
                    </span>
                    <Show when=move || !collapsed.get() fallback=|| ()>
                        <Stack gap=LayoutGap::Sm>
                            <Text role=TextRole::Label>{BRAND_TITLE}</Text>
                            <Text role=TextRole::Caption tone=TextTone::Secondary>
                                {BRAND_SUBTITLE}
                            </Text>
                        </Stack>
                    </Show>
                    <Button
                        layout_class="shell-sidebar-toggle"
                        variant=ButtonVariant::Quiet
                        shape=ButtonShape::Rect
                        size=ButtonSize::Sm
                        ui_slot="sidebar-toggle"
                        aria_label="Toggle sidebar"
                        title="Toggle sidebar"
                        on_click=Callback::new(move |_| dispatch(NavigationAction::ToggleCollapsed))
                    >
                        <Icon icon=IconName::PanelLeft size=IconSize::Sm />
                    </Button>
                </Cluster>
            </SidebarHeader>

            <SidebarContent>
                <Show when=move || !collapsed.get() fallback=|| ()>
                    <TextField
                        ui_slot="sidebar-search"
                        placeholder="Search..."
                        aria_label="Search navigation"
                        input_type="search"
                        leading_icon=IconName::Search
                        value=search
                        on_input=Callback::new(move |ev: web_sys::Event| {
                            dispatch(NavigationAction::SetSearch(event_target_value(&ev)));
                        })
                    />
                </Show>
                <NavList aria_label="Sections">
                    <For each=move || visible.get() key=|item| *item let:item>
                        <NavItem
                            icon=item.icon()
                            label=item.title()
                            active=Signal::derive(move || state.with(|state| state.is_active(item)))
                            collapsed
                            badge=item.badge()
                            on_click=Callback::new(move |_| dispatch(NavigationAction::Select(item)))
                        />
                    </For>
                </NavList>
            </SidebarContent>

            <SidebarFooter>
                <NavList aria_label="Preferences">
                    <NavItem icon=IconName::Settings label=SETTINGS_LABEL collapsed />
                </NavList>
            </SidebarFooter>
        </Sidebar>
    }
}
