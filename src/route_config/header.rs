use super::resolver::{RouteConfigMap, TabConfig};

/// What the page header renders for a path.
///
/// Wraps [`resolve`](super::resolve) with the fallback rule: an unresolved path
/// gets `fallback_title` and no tab bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageHeader<'a> {
    /// Title to display
    pub title: &'a str,
    /// Tab bar, `None` when the page has none
    pub tabs: Option<&'a [TabConfig]>,
    /// Whether the title came from the route table rather than the fallback
    pub resolved: bool,
}

impl<'a> PageHeader<'a> {
    #[must_use]
    pub fn for_path(current_path: &str, routes: &'a RouteConfigMap, fallback_title: &'a str) -> Self {
        match routes.resolve(current_path) {
            Some(config) => PageHeader {
                title: &config.title,
                tabs: config.tabs.as_deref(),
                resolved: true,
            },
            None => PageHeader {
                title: fallback_title,
                tabs: None,
                resolved: false,
            },
        }
    }
}
