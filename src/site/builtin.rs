use once_cell::sync::Lazy;

use super::SiteConfig;
use crate::nav::NavItem;
use crate::route_config::{RouteConfig, RouteConfigMap};

static BUILTIN_SITE: Lazy<SiteConfig> = Lazy::new(|| {
    let nav = vec![
        NavItem::exact("Home", "/"),
        NavItem::prefix("Work", "/work"),
        NavItem::prefix("Lab", "/lab"),
        NavItem::exact("Stack", "/stack"),
        NavItem::prefix("Writing", "/writing"),
        NavItem::exact("Agent", "/agent"),
    ];

    // Case studies use a scrolling layout with a sticky rail, so no tab bar
    let routes: RouteConfigMap = [
        ("/", RouteConfig::new("Home")),
        ("/playground", RouteConfig::new("Playground")),
        ("/work", RouteConfig::new("Work")),
        ("/work/[slug]", RouteConfig::new("Case Study")),
        ("/lab", RouteConfig::new("Lab")),
        ("/lab/[slug]", RouteConfig::new("Experiment")),
        ("/stack", RouteConfig::new("Stack")),
        ("/writing", RouteConfig::new("Writing")),
        ("/writing/[slug]", RouteConfig::new("Article")),
        ("/agent", RouteConfig::new("Agent")),
    ]
    .into_iter()
    .collect();

    SiteConfig::new(nav, routes)
});

/// The portfolio's own dock and route table.
///
/// Built on first use and shared for the life of the process.
#[must_use]
pub fn builtin_site() -> &'static SiteConfig {
    &BUILTIN_SITE
}
