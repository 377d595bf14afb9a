//! Centralized icon API.
//!
//! Icons are single-path 24x24 stroke glyphs rendered inline so the shell carries no external
//! asset dependency.

use leptos::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Named icon glyphs available to shell surfaces.
pub enum IconName {
    /// House glyph.
    Home,
    /// Page glyph.
    Document,
    /// Folder glyph.
    Folder,
    /// Star glyph.
    Star,
    /// Clock glyph.
    Clock,
    /// Cloud glyph.
    Cloud,
    /// Trash can glyph.
    Delete,
    /// Gear glyph.
    Settings,
    /// Magnifier glyph.
    Search,
    /// Plus glyph.
    Add,
    /// Sidebar panel glyph.
    PanelLeft,
    /// Window minimize glyph.
    WindowMinimize,
    /// Window maximize glyph.
    WindowMaximize,
    /// Window restore glyph.
    WindowRestore,
    /// Close/dismiss glyph.
    Dismiss,
}

impl IconName {
    /// Stable token exposed through `data-ui-icon`.
    pub const fn token(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Document => "document",
            Self::Folder => "folder",
            Self::Star => "star",
            Self::Clock => "clock",
            Self::Cloud => "cloud",
            Self::Delete => "delete",
            Self::Settings => "settings",
            Self::Search => "search",
            Self::Add => "add",
            Self::PanelLeft => "panel-left",
            Self::WindowMinimize => "window-minimize",
            Self::WindowMaximize => "window-maximize",
            Self::WindowRestore => "window-restore",
            Self::Dismiss => "dismiss",
        }
    }

    fn path(self) -> &'static str {
        match self {
            Self::Home => "M3 10.5 12 3l9 7.5V21h-6v-6H9v6H3z",
            Self::Document => "M6 2h9l5 5v15H6zM14 2v6h6",
            Self::Folder => "M3 6h6l2 2h10v12H3z",
            Self::Star => "M12 3l2.9 6 6.6.9-4.8 4.6 1.2 6.5L12 18l-5.9 3 1.2-6.5L2.5 9.9 9.1 9z",
            Self::Clock => "M12 3a9 9 0 1 0 0 18 9 9 0 1 0 0-18zM12 7v5l3 3",
            Self::Cloud => "M7 18h10a4 4 0 0 0 .5-8 6 6 0 0 0-11.5 1.5A3.3 3.3 0 0 0 7 18z",
            Self::Delete => "M4 7h16M9 7V4h6v3M6 7l1 14h10l1-14",
            Self::Settings => {
                "M12 9a3 3 0 1 0 0 6 3 3 0 1 0 0-6zM12 2v3M12 19v3M2 12h3M19 12h3M4.9 4.9 7 7M17 17l2.1 2.1M4.9 19.1 7 17M17 7l2.1-2.1"
            }
            Self::Search => "M10.5 3a7.5 7.5 0 1 0 0 15 7.5 7.5 0 1 0 0-15zM16 16l5 5",
            Self::Add => "M12 5v14M5 12h14",
            Self::PanelLeft => "M3 4h18v16H3zM9 4v16",
            Self::WindowMinimize => "M5 12h14",
            Self::WindowMaximize => "M5 5h14v14H5z",
            Self::WindowRestore => "M8 8h11v11H8zM5 16V5h11",
            Self::Dismiss => "M6 6l12 12M18 6 6 18",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Icon sizing tokens.
pub enum IconSize {
    /// 10px glyph for dense window controls.
    Xs,
    /// 16px glyph.
    #[default]
    Sm,
    /// 20px glyph.
    Md,
    /// 32px glyph.
    Lg,
}

impl IconSize {
    /// Pixel edge length for the glyph.
    pub const fn px(self) -> u32 {
        match self {
            Self::Xs => 10,
            Self::Sm => 16,
            Self::Md => 20,
            Self::Lg => 32,
        }
    }

    fn token(self) -> &'static str {
        match self {
            Self::Xs => "xs",
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
        }
    }
}

#[component]
/// Inline icon glyph.
pub fn Icon(
    #[prop(into)] icon: MaybeSignal<IconName>,
    #[prop(default = IconSize::Sm)] size: IconSize,
) -> impl IntoView {
    view! {
        <span
            class="ui-icon"
            aria-hidden="true"
            data-ui-primitive="true"
            data-ui-kind="icon"
            data-ui-icon=move || icon.get().token()
            data-ui-size=size.token()
        >
            <svg
                width=size.px()
                height=size.px()
                viewBox="0 0 24 24"
                fill="none"
                stroke="currentColor"
                stroke-width="2"
                stroke-linecap="round"
                stroke-linejoin="round"
            >
                <path d=move || icon.get().path() />
            </svg>
        </span>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn window_control_glyphs_have_distinct_tokens() {
        let tokens = [
            IconName::WindowMinimize.token(),
            IconName::WindowMaximize.token(),
            IconName::WindowRestore.token(),
            IconName::Dismiss.token(),
        ];
        for (index, token) in tokens.iter().enumerate() {
            assert!(!tokens[index + 1..].contains(token), "duplicate token {token}");
        }
    }

    #[test]
    fn xs_icons_fit_window_controls() {
        assert_eq!(IconSize::Xs.px(), 10);
        assert_eq!(IconSize::default(), IconSize::Sm);
    }
}
