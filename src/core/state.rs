//! Browser view state.
//!
//! One value owns everything the listing side of the UI needs: the
//! URL-backed [`NavigationState`], the table's [`GridState`] and the draw
//! [`TableController`]. Handlers mutate it through the methods below and
//! then ask for the next draw.

use crate::core::client::ListFolder;
use crate::core::query::parse_state;
use crate::core::table::{GridState, TableController};
use crate::models::{Breadcrumb, NavigationState};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BrowserState {
    pub nav: NavigationState,
    pub grid: GridState,
    table: TableController,
}

impl BrowserState {
    /// Hydrate from the page URL.
    pub fn from_url(url: &str) -> Self {
        let nav = parse_state(url);
        Self {
            grid: GridState::from_navigation(&nav),
            nav,
            table: TableController::new(),
        }
    }

    /// Start a draw: bump the grid's counter and build the listing request.
    pub fn next_draw(&mut self) -> ListFolder {
        let grid = self.grid.next_request();
        self.table.prepare(&mut self.nav, &grid)
    }

    /// Breadcrumb click: switch to the crumb's folder with filters reset.
    pub fn open_folder(&mut self, folder: &str) {
        self.nav.breadcrumb = Breadcrumb::from_folder(folder);
        self.grid.reset_filters();
    }

    /// Folder link click: switch to a route path with filters reset.
    pub fn open_route(&mut self, route_path: &str) {
        self.nav.breadcrumb = Breadcrumb::from_route_path(route_path);
        self.grid.reset_filters();
    }

    pub fn goto_page(&mut self, page: u32) {
        self.grid.goto_page(page);
    }

    pub fn set_page_size(&mut self, page_size: u32) {
        self.grid.set_length(page_size);
    }

    pub fn set_search(&mut self, search: &str) {
        self.grid.set_search(search);
    }
}

impl Default for BrowserState {
    fn default() -> Self {
        Self::from_url("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deep_link_first_request() {
        let mut state = BrowserState::from_url("/thermal-files/?route_path=a/b&page=2&page_size=5");
        let request = state.next_draw();
        assert_eq!(
            request,
            ListFolder {
                page: 2,
                page_size: 5,
                route_path: "a/b".to_string(),
                search: String::new(),
                draw: Some(1),
            }
        );
    }

    #[test]
    fn test_open_folder_resets_filters() {
        let mut state = BrowserState::from_url("?route_path=a/b/c&page=4&search=ir");
        state.next_draw();

        state.open_folder("/a");
        let request = state.next_draw();
        assert_eq!(request.route_path, "a");
        assert_eq!(request.page, 1);
        assert_eq!(request.search, "");
        assert_eq!(state.nav.breadcrumb.segments(), ["", "a"]);

        state.open_folder("");
        assert_eq!(state.next_draw().route_path, "");
    }

    #[test]
    fn test_open_route_from_folder_link() {
        let mut state = BrowserState::default();
        state.next_draw();

        state.open_route("survey/day1");
        let request = state.next_draw();
        assert_eq!(request.route_path, "survey/day1");
        assert_eq!(state.nav.route_path, "survey/day1");
    }

    #[test]
    fn test_paging_and_search_after_first_draw() {
        let mut state = BrowserState::from_url("?page_size=25");
        state.next_draw();

        state.goto_page(3);
        let request = state.next_draw();
        assert_eq!((request.page, request.page_size), (3, 25));

        state.set_page_size(50);
        let request = state.next_draw();
        assert_eq!((request.page, request.page_size), (1, 50));

        state.goto_page(2);
        state.set_search("flight");
        let request = state.next_draw();
        assert_eq!(request.page, 1);
        assert_eq!(request.search, "flight");
        assert_eq!(state.nav.to_query(), "page=1&page_size=50&route_path=&search=flight");
    }
}
