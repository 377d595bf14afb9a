//! Shared UI primitive library for the workspace shell.
//!
//! The crate owns reusable Leptos primitives, a centralized icon API, and the stable
//! `data-ui-*` DOM contract consumed by the shell CSS layer. Title bar primitives also carry the
//! host drag-region contract (`app-region: drag` on the bar, `no-drag` on every control).

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod icon;
mod primitives;

pub use icon::{Icon, IconName, IconSize};
pub use primitives::{
    AppShell, Badge, Button, ButtonShape, ButtonSize, ButtonVariant, Card, Cluster, Grid,
    Heading, LayoutAlign, LayoutGap, LayoutJustify, LayoutPadding, ListSurface,
    NativeControlsSpacer, NavItem, NavList, Sidebar, SidebarContent, SidebarFooter,
    SidebarHeader, SidebarInset, Stack, SurfaceVariant, Text, TextField, TextRole, TextTone,
    WindowControlButton, WindowControls, WindowTitleBar,
};

/// Convenience imports for crates consuming the shared primitive set.
pub mod prelude {
    pub use crate::{
        AppShell, Badge, Button, ButtonShape, ButtonSize, ButtonVariant, Card, Cluster, Grid,
        Heading, Icon, IconName, IconSize, LayoutAlign, LayoutGap, LayoutJustify, LayoutPadding,
        ListSurface, NativeControlsSpacer, NavItem, NavList, Sidebar, SidebarContent,
        SidebarFooter, SidebarHeader, SidebarInset, Stack, SurfaceVariant, Text, TextField,
        TextRole, TextTone, WindowControlButton, WindowControls, WindowTitleBar,
    };
}
