use leptos::*;
use system_ui::{
    ButtonShape, ButtonVariant, Icon, IconSize, NativeControlsSpacer, WindowControlButton,
    WindowControls, WindowTitleBar,
};

use super::use_shell_runtime;
use crate::window_controls::{
    controls_layout, ControlsLayout, MaximizedState, TitleBarState, WindowControlKind,
    TITLE_BAR_HEIGHT_PX,
};

#[component]
/// Draggable title bar with host-negotiated window controls.
pub fn TitleBar() -> impl IntoView {
    let runtime = use_shell_runtime();
    let state = create_rw_signal(TitleBarState::default());

    runtime.host.get_value().install_window_controls_boot(state);

    let layout = create_memo(move |_| state.with(|state| controls_layout(&state.controls)));
    let position = create_memo(move |_| state.with(|state| state.controls.controls_position));
    let maximized = create_memo(move |_| state.with(|state| state.maximized));

    let press = Callback::new(move |kind: WindowControlKind| {
        let command = kind.command(maximized.get_untracked());
        runtime
            .host
            .get_value()
            .dispatch_window_command(command, state);
    });

    view! {
        <WindowTitleBar layout_class="shell-titlebar" height_px=TITLE_BAR_HEIGHT_PX>
            <div
                class="shell-titlebar-track"
                data-ui-controls-position=move || position.get().as_str()
            >
                {move || {
                    let layout = layout.get();
                    match layout {
                        ControlsLayout::Hidden => ().into_view(),
                        ControlsLayout::NativeSpacer { width_px } => {
                            view! { <NativeControlsSpacer width_px /> }.into_view()
                        }
                        ControlsLayout::TrafficLights | ControlsLayout::Caption => {
                            view! {
                                <WindowControls variant=layout.token()>
                                    {layout
                                        .buttons()
                                        .iter()
                                        .map(|kind| {
                                            view! {
                                                <ControlButton
                                                    kind=*kind
                                                    layout
                                                    maximized
                                                    on_press=press
                                                />
                                            }
                                        })
                                        .collect_view()}
                                </WindowControls>
                            }
                                .into_view()
                        }
                    }
                }}
            </div>
        </WindowTitleBar>
    }
}

#[component]
fn ControlButton(
    kind: WindowControlKind,
    layout: ControlsLayout,
    #[prop(into)] maximized: Signal<MaximizedState>,
    on_press: Callback<WindowControlKind>,
) -> impl IntoView {
    let traffic_lights = layout == ControlsLayout::TrafficLights;
    let shape = if traffic_lights {
        ButtonShape::Circle
    } else {
        ButtonShape::Rect
    };
    let variant = if kind == WindowControlKind::Close && !traffic_lights {
        ButtonVariant::Danger
    } else {
        ButtonVariant::Quiet
    };
    let color = traffic_lights.then(|| kind.traffic_light_color());
    let icon_size = if traffic_lights {
        IconSize::Xs
    } else {
        IconSize::Sm
    };
    let visual = Signal::derive(move || kind.visual(maximized.get()));

    view! {
        <WindowControlButton
            ui_slot=kind.slot()
            shape
            variant
            color
            label=Signal::derive(move || visual.get().label.to_string())
            on_click=Callback::new(move |_| on_press.call(kind))
        >
            <Icon icon=Signal::derive(move || visual.get().icon) size=icon_size />
        </WindowControlButton>
    }
}
