use leptos::*;
use system_ui::{
    Button, ButtonSize, ButtonVariant, Card, Cluster, Grid, Heading, Icon, IconName, IconSize,
    LayoutAlign, LayoutGap, LayoutJustify, LayoutPadding, ListSurface, Stack, SurfaceVariant,
    Text, TextRole, TextTone,
};

use crate::dashboard::{
    DashboardStat, RecentProject, HEADING, NEW_PROJECT_LABEL, RECENT_PROJECTS,
    RECENT_PROJECTS_DESCRIPTION, RECENT_PROJECTS_TITLE, STATS, SUBTITLE,
};

#[component]
/// Static workspace dashboard.
pub fn HomePage() -> impl IntoView {
    view! {
        <Stack gap=LayoutGap::Lg padding=LayoutPadding::Lg layout_class="shell-home">
            <Cluster justify=LayoutJustify::Between ui_slot="home-header">
                <Stack gap=LayoutGap::Sm>
                    <Heading role=TextRole::Display>{HEADING}</Heading>
                    <Text tone=TextTone::Secondary>{SUBTITLE}</Text>
                </Stack>
                <Button
                    variant=ButtonVariant::Primary
                    size=ButtonSize::Lg
                    leading_icon=IconName::Add
                >
                    {NEW_PROJECT_LABEL}
                </Button>
            </Cluster>

            <Grid columns=3 ui_slot="home-stats">
                {STATS.into_iter().map(|stat| view! { <StatCard stat /> }).collect_view()}
            </Grid>

            <Card ui_slot="recent-projects">
                <Stack gap=LayoutGap::Md>
                    <Stack gap=LayoutGap::Sm>
                        <Heading>{RECENT_PROJECTS_TITLE}</Heading>
                        <Text role=TextRole::Caption tone=TextTone::Secondary>
                            {RECENT_PROJECTS_DESCRIPTION}
                        </Text>
                    </Stack>
                    <ListSurface role="list" aria_label=RECENT_PROJECTS_TITLE>
                        {RECENT_PROJECTS
                            .into_iter()
                            .map(|project| view! { <RecentProjectRow project /> })
                            .collect_view()}
                    </ListSurface>
                </Stack>
            </Card>
        </Stack>
    }
}

#[component]
fn StatCard(stat: DashboardStat) -> impl IntoView {
    view! {
        <Card ui_slot="stat">
            <Stack gap=LayoutGap::Sm>
                <Cluster justify=LayoutJustify::Between>
                    <Text role=TextRole::Label>{stat.title}</Text>
                    <Icon icon=stat.icon size=IconSize::Sm />
                </Cluster>
                <Heading role=TextRole::Display>{stat.value}</Heading>
                <Text role=TextRole::Caption tone=TextTone::Secondary>{stat.detail}</Text>
            </Stack>
        </Card>
    }
}

#[component]
fn RecentProjectRow(project: RecentProject) -> impl IntoView {
    view! {
        <div role="listitem" class="shell-recent-project" data-ui-slot="recent-project">
            <Card variant=SurfaceVariant::Muted padding=LayoutPadding::Sm>
                <Cluster justify=LayoutJustify::Between align=LayoutAlign::Center>
                    <Cluster gap=LayoutGap::Md>
                        <span class="shell-project-icon" aria-hidden="true">
                            <Icon icon=IconName::Folder size=IconSize::Md />
                        </span>
                        <Stack gap=LayoutGap::Sm>
                            <Text role=TextRole::Label>{project.name}</Text>
                            <Text role=TextRole::Caption tone=TextTone::Secondary>
                                {project.files_line()}
                            </Text>
                        </Stack>
                    </Cluster>
                    <Text role=TextRole::Caption tone=TextTone::Secondary>{project.updated}</Text>
                </Cluster>
            </Card>
        </div>
    }
}
