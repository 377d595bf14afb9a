//! Static dashboard content rendered by the home page.

use system_ui::IconName;

/// Page heading.
pub const HEADING: &str = "Welcome back";
/// Line under the heading.
pub const SUBTITLE: &str = "Here's what's happening with your workspace";
/// Primary action label.
pub const NEW_PROJECT_LABEL: &str = "New Project";
/// Recent projects card title.
pub const RECENT_PROJECTS_TITLE: &str = "Recent Projects";
/// Recent projects card description.
pub const RECENT_PROJECTS_DESCRIPTION: &str = "Your most recently accessed projects";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// One summary card.
pub struct DashboardStat {
    /// Card title.
    pub title: &'static str,
    /// Headline number.
    pub value: u32,
    /// Secondary line.
    pub detail: &'static str,
    /// Card icon.
    pub icon: IconName,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// One recent-project row.
pub struct RecentProject {
    /// Project name.
    pub name: &'static str,
    /// Relative last-update time.
    pub updated: &'static str,
    /// File count.
    pub files: u32,
}

/// Summary cards, in display order.
pub const STATS: [DashboardStat; 3] = [
    DashboardStat {
        title: "Total Projects",
        value: 12,
        detail: "+2 from last month",
        icon: IconName::Folder,
    },
    DashboardStat {
        title: "Documents",
        value: 48,
        detail: "+8 from last week",
        icon: IconName::Document,
    },
    DashboardStat {
        title: "Recent Activity",
        value: 24,
        detail: "Actions today",
        icon: IconName::Clock,
    },
];

/// Recent projects, newest first.
pub const RECENT_PROJECTS: [RecentProject; 4] = [
    RecentProject {
        name: "Project Alpha",
        updated: "2 hours ago",
        files: 24,
    },
    RecentProject {
        name: "Design System",
        updated: "5 hours ago",
        files: 18,
    },
    RecentProject {
        name: "Documentation",
        updated: "1 day ago",
        files: 32,
    },
    RecentProject {
        name: "API Integration",
        updated: "2 days ago",
        files: 15,
    },
];

impl RecentProject {
    /// File count line, for example `24 files`.
    pub fn files_line(&self) -> String {
        format!("{} files", self.files)
    }
}
