use super::*;

#[component]
/// Root application shell layout container.
pub fn AppShell(
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-app-shell", layout_class)
            data-ui-primitive="true"
            data-ui-kind="app-shell"
            data-ui-variant="standard"
        >
            {children()}
        </div>
    }
}

#[component]
/// Host window title bar; the whole bar is a drag handle for the embedding host.
pub fn WindowTitleBar(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(default = 40)] height_px: u32,
    children: Children,
) -> impl IntoView {
    view! {
        <header
            class=merge_layout_class("ui-window-titlebar", layout_class)
            style=format!("height:{height_px}px;{DRAG_REGION_STYLE}")
            data-ui-primitive="true"
            data-ui-kind="window-titlebar"
            data-ui-drag-region="true"
        >
            {children()}
        </header>
    }
}

#[component]
/// Window control group, excluded from the drag region.
pub fn WindowControls(
    #[prop(optional)] layout_class: Option<&'static str>,
    /// Layout token, for example `caption` or `traffic-lights`.
    variant: &'static str,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-window-controls", layout_class)
            style=NO_DRAG_REGION_STYLE
            role="group"
            aria-label="Window controls"
            data-ui-primitive="true"
            data-ui-kind="window-controls"
            data-ui-variant=variant
        >
            {children()}
        </div>
    }
}

#[component]
/// Titlebar control button, excluded from the drag region.
pub fn WindowControlButton(
    #[prop(optional)] layout_class: Option<&'static str>,
    /// Stable control slot (`minimize`, `maximize`, `close`).
    ui_slot: &'static str,
    #[prop(default = ButtonShape::Rect)] shape: ButtonShape,
    #[prop(default = ButtonVariant::Quiet)] variant: ButtonVariant,
    /// Traffic-light color token; unset for caption buttons.
    #[prop(optional_no_strip)]
    color: Option<&'static str>,
    #[prop(into)] label: Signal<String>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
    children: Children,
) -> impl IntoView {
    view! {
        <button
            type="button"
            class=merge_layout_class("ui-window-control", layout_class)
            style=NO_DRAG_REGION_STYLE
            aria-label=move || label.get()
            title=move || label.get()
            data-ui-primitive="true"
            data-ui-kind="window-control"
            data-ui-slot=ui_slot
            data-ui-shape=shape.token()
            data-ui-variant=variant.token()
            data-ui-color=color
            on:mousedown=move |ev: MouseEvent| ev.stop_propagation()
            on:click=move |ev| {
                if let Some(on_click) = on_click.as_ref() {
                    on_click.call(ev);
                }
            }
        >
            {children()}
        </button>
    }
}

#[component]
/// Empty block reserving room for host-drawn native window controls.
pub fn NativeControlsSpacer(width_px: u32) -> impl IntoView {
    view! {
        <div
            class="ui-native-controls-spacer"
            style=format!("width:{width_px}px;height:100%;{NO_DRAG_REGION_STYLE}")
            aria-hidden="true"
            data-ui-primitive="true"
            data-ui-kind="native-controls-spacer"
            data-ui-width=width_px
        ></div>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn window_control_button_tracks_label_signal() {
        let _ = create_runtime();
        let label = create_rw_signal("Maximize".to_string());

        let button = view! {
            <WindowControlButton ui_slot="maximize" label=Signal::from(label)>
                "+"
            </WindowControlButton>
        };
        label.set("Restore".to_string());

        let _ = button.into_view();
        assert_eq!(label.get_untracked(), "Restore");
    }
}
