//! Navigation state carried in the page URL.

use crate::config::{DEFAULT_PAGE, DEFAULT_PAGE_SIZE};

/// Path segments from the root to the current folder.
///
/// The first segment is always the empty root segment, so a route path of
/// `a/b` is stored as `["", "a", "b"]`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Breadcrumb(Vec<String>);

impl Breadcrumb {
    /// Breadcrumb for the root folder.
    pub fn root() -> Self {
        Self(vec![String::new()])
    }

    /// Build from a slash-separated route path (no leading slash).
    pub fn from_route_path(route_path: &str) -> Self {
        let mut segments = vec![String::new()];
        segments.extend(
            route_path
                .split('/')
                .filter(|s| !s.is_empty())
                .map(String::from),
        );
        Self(segments)
    }

    /// Build from a crumb's `data-folder` value (root-prefixed, e.g. `/a/b`).
    pub fn from_folder(folder: &str) -> Self {
        Self::from_route_path(folder)
    }

    /// All segments, root first.
    pub fn segments(&self) -> &[String] {
        &self.0
    }

    /// Route path below the root (`segments[1..]` joined with `/`).
    pub fn route_path(&self) -> String {
        self.0[1..].join("/")
    }

    /// `data-folder` value of crumb `index` (`segments[..=index]` joined).
    pub fn folder_at(&self, index: usize) -> String {
        self.0[..=index].join("/")
    }

    /// Route path of crumb `index` (`segments[1..=index]` joined).
    pub fn route_path_at(&self, index: usize) -> String {
        self.0[1..=index].join("/")
    }
}

impl Default for Breadcrumb {
    fn default() -> Self {
        Self::root()
    }
}

/// View state that fully determines what the browser shows.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavigationState {
    /// 1-based page number
    pub page: u32,
    /// Entries per page
    pub page_size: u32,
    /// Current folder relative to the root
    pub route_path: String,
    /// Server-side search term
    pub search: String,
    /// Crumbs of the folder being browsed
    pub breadcrumb: Breadcrumb,
}

impl NavigationState {
    /// State for a folder, first page, no search.
    pub fn new(route_path: impl Into<String>, page_size: u32) -> Self {
        let route_path = route_path.into();
        Self {
            page: DEFAULT_PAGE,
            page_size,
            breadcrumb: Breadcrumb::from_route_path(&route_path),
            route_path,
            search: String::new(),
        }
    }

    /// Key/value pairs that describe this view in a URL.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        vec![
            ("page", self.page.to_string()),
            ("page_size", self.page_size.to_string()),
            ("route_path", self.route_path.clone()),
            ("search", self.search.clone()),
        ]
    }
}

impl Default for NavigationState {
    fn default() -> Self {
        Self::new("", DEFAULT_PAGE_SIZE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_breadcrumb_from_route_path() {
        let crumbs = Breadcrumb::from_route_path("a/b");
        assert_eq!(crumbs.segments(), ["", "a", "b"]);
        assert_eq!(crumbs.route_path(), "a/b");

        let root = Breadcrumb::from_route_path("");
        assert_eq!(root.segments(), [""]);
        assert_eq!(root.route_path(), "");
    }

    #[test]
    fn test_breadcrumb_from_folder() {
        let crumbs = Breadcrumb::from_folder("/survey/2024");
        assert_eq!(crumbs.segments(), ["", "survey", "2024"]);
        assert_eq!(crumbs.folder_at(1), "/survey");
        assert_eq!(crumbs.route_path_at(2), "survey/2024");
        assert_eq!(crumbs.route_path_at(0), "");
    }
}
