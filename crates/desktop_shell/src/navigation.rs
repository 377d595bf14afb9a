//! Sidebar navigation model: the fixed item catalog, selection, collapse, and search filter.

use system_ui::IconName;

/// Brand title shown in the sidebar header.
pub const BRAND_TITLE: &str = "Workspace";
/// Brand subtitle shown in the sidebar header.
pub const BRAND_SUBTITLE: &str = "My Files";
/// Footer entry label.
pub const SETTINGS_LABEL: &str = "Settings";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
/// Navigation entries, in display order.
pub enum NavItemId {
    /// Dashboard.
    #[default]
    Home,
    /// Documents.
    Documents,
    /// Projects.
    Projects,
    /// Favorites.
    Favorites,
    /// Recently opened.
    Recent,
    /// Cloud storage.
    CloudStorage,
    /// Trash.
    Trash,
}

impl NavItemId {
    /// Every entry in display order.
    pub const ALL: [Self; 7] = [
        Self::Home,
        Self::Documents,
        Self::Projects,
        Self::Favorites,
        Self::Recent,
        Self::CloudStorage,
        Self::Trash,
    ];

    /// Display title.
    pub const fn title(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Documents => "Documents",
            Self::Projects => "Projects",
            Self::Favorites => "Favorites",
            Self::Recent => "Recent",
            Self::CloudStorage => "Cloud Storage",
            Self::Trash => "Trash",
        }
    }

    /// Entry icon.
    pub const fn icon(self) -> IconName {
        match self {
            Self::Home => IconName::Home,
            Self::Documents => IconName::Document,
            Self::Projects => IconName::Folder,
            Self::Favorites => IconName::Star,
            Self::Recent => IconName::Clock,
            Self::CloudStorage => IconName::Cloud,
            Self::Trash => IconName::Delete,
        }
    }

    /// Count badge, if the entry has one.
    pub const fn badge(self) -> Option<u32> {
        match self {
            Self::Documents => Some(12),
            Self::Projects => Some(5),
            _ => None,
        }
    }

    fn matches(self, needle: &str) -> bool {
        needle.is_empty() || self.title().to_lowercase().contains(needle)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
/// Sidebar state: selection, collapse flag, and search text.
pub struct NavigationState {
    /// Highlighted entry.
    pub active: NavItemId,
    /// Icon-only mode.
    pub collapsed: bool,
    /// Current search text.
    pub search: String,
}

impl NavigationState {
    /// Entries whose title contains the search text, case-insensitively, in display order.
    ///
    /// The active entry stays active even when the filter hides it.
    pub fn visible_items(&self) -> Vec<NavItemId> {
        let needle = self.search.trim().to_lowercase();
        NavItemId::ALL
            .into_iter()
            .filter(|item| item.matches(&needle))
            .collect()
    }

    /// Returns whether `item` is the highlighted entry.
    pub fn is_active(&self, item: NavItemId) -> bool {
        self.active == item
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Actions accepted by [`reduce_navigation`].
pub enum NavigationAction {
    /// Highlight an entry.
    Select(NavItemId),
    /// Flip icon-only mode.
    ToggleCollapsed,
    /// Replace the search text.
    SetSearch(String),
}

/// Applies a [`NavigationAction`] to the sidebar state.
pub fn reduce_navigation(state: &mut NavigationState, action: NavigationAction) {
    match action {
        NavigationAction::Select(item) => state.active = item,
        NavigationAction::ToggleCollapsed => state.collapsed = !state.collapsed,
        NavigationAction::SetSearch(search) => state.search = search,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn catalog_order_and_badges() {
        let titles: Vec<_> = NavItemId::ALL.iter().map(|item| item.title()).collect();
        assert_eq!(
            titles,
            vec![
                "Home",
                "Documents",
                "Projects",
                "Favorites",
                "Recent",
                "Cloud Storage",
                "Trash"
            ]
        );
        assert_eq!(NavItemId::Documents.badge(), Some(12));
        assert_eq!(NavItemId::Projects.badge(), Some(5));
        assert_eq!(NavItemId::Home.badge(), None);
    }

    #[test]
    fn default_state_selects_home_expanded() {
        let state = NavigationState::default();
        assert!(state.is_active(NavItemId::Home));
        assert!(!state.collapsed);
        assert_eq!(state.visible_items().len(), NavItemId::ALL.len());
    }

    #[test]
    fn search_filters_titles_case_insensitively() {
        let mut state = NavigationState::default();
        reduce_navigation(&mut state, NavigationAction::SetSearch("  STor ".to_string()));
        assert_eq!(state.visible_items(), vec![NavItemId::CloudStorage]);

        reduce_navigation(&mut state, NavigationAction::SetSearch("EC".to_string()));
        assert_eq!(state.visible_items(), vec![NavItemId::Projects, NavItemId::Recent]);

        reduce_navigation(&mut state, NavigationAction::SetSearch("zzz".to_string()));
        assert!(state.visible_items().is_empty());
    }

    #[test]
    fn active_item_survives_being_filtered_out() {
        let mut state = NavigationState::default();
        reduce_navigation(&mut state, NavigationAction::Select(NavItemId::Trash));
        reduce_navigation(&mut state, NavigationAction::SetSearch("doc".to_string()));

        assert_eq!(state.visible_items(), vec![NavItemId::Documents]);
        assert_eq!(state.active, NavItemId::Trash);
    }

    #[test]
    fn collapse_toggles() {
        let mut state = NavigationState::default();
        reduce_navigation(&mut state, NavigationAction::ToggleCollapsed);
        assert!(state.collapsed);
        reduce_navigation(&mut state, NavigationAction::ToggleCollapsed);
        assert!(!state.collapsed);
    }
}
