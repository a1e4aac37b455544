//! Server-driven paginated table.
//!
//! [`GridState`] is the table's own paging/search state, [`TableController`]
//! turns each draw into a [`ListFolder`] request, and [`TableData`] is the
//! projection of a [`ListingPage`] into renderable rows.

use crate::config::{BrowserConfig, MAX_PAGE_BUTTONS};
use crate::core::client::{DirectoryClient, ListFolder};
use crate::core::error::FetchError;
use crate::core::query::encode_query;
use crate::models::{DirectoryEntry, DownloadTarget, ListingPage, NavigationState};
use crate::utils::format::format_file_size;

// =============================================================================
// Grid State
// =============================================================================

/// Paging and search state of the table widget.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GridState {
    /// Offset of the first row
    pub start: u32,
    /// Rows per page
    pub length: u32,
    /// Search box contents
    pub search: String,
    /// Draw counter (incremented per request)
    pub draw: u32,
}

/// Snapshot of the grid handed to the controller on each draw.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GridRequest {
    pub draw: u32,
    pub start: u32,
    pub length: u32,
    pub search: String,
}

impl GridState {
    /// Seed the grid from the URL-supplied navigation state.
    pub fn from_navigation(nav: &NavigationState) -> Self {
        Self {
            start: nav.page.saturating_sub(1).saturating_mul(nav.page_size),
            length: nav.page_size,
            search: nav.search.clone(),
            draw: 0,
        }
    }

    /// Begin a draw.
    pub fn next_request(&mut self) -> GridRequest {
        self.draw += 1;
        GridRequest {
            draw: self.draw,
            start: self.start,
            length: self.length,
            search: self.search.clone(),
        }
    }

    /// Jump to a 1-based page.
    pub fn goto_page(&mut self, page: u32) {
        self.start = page.saturating_sub(1).saturating_mul(self.length);
    }

    /// Change rows per page, back to the first page.
    pub fn set_length(&mut self, length: u32) {
        if length > 0 {
            self.length = length;
        }
        self.start = 0;
    }

    /// Change the search term, back to the first page.
    pub fn set_search(&mut self, search: impl Into<String>) {
        self.search = search.into();
        self.start = 0;
    }

    /// Clear search and paging (used when changing folder).
    pub fn reset_filters(&mut self) {
        self.search.clear();
        self.start = 0;
    }
}

/// Search box input, held back until typing pauses.
///
/// Every keystroke takes a new ticket; only the newest ticket settles, so a
/// burst of input produces a single search.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchDebounce {
    ticket: u64,
    pending: Option<String>,
}

impl SearchDebounce {
    /// Record typed text and return the ticket to settle after the delay.
    pub fn input(&mut self, text: &str) -> u64 {
        self.ticket += 1;
        self.pending = Some(text.to_string());
        self.ticket
    }

    /// Text to search for, unless newer input arrived after `ticket`.
    pub fn settle(&mut self, ticket: u64) -> Option<String> {
        if ticket != self.ticket {
            return None;
        }
        self.pending.take()
    }
}

// =============================================================================
// Draw Controller
// =============================================================================

/// Two-phase draw logic.
///
/// The first draw keeps the state parsed from the URL so a deep link like
/// `?route_path=a/b&page=3` is honored; later draws derive everything from
/// the grid and the breadcrumb.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TableController {
    initialized: bool,
}

impl TableController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Update `nav` for this draw and build the listing request.
    pub fn prepare(&mut self, nav: &mut NavigationState, grid: &GridRequest) -> ListFolder {
        if !self.initialized {
            self.initialized = true;
        } else {
            nav.page = if grid.start > 0 && grid.length > 0 {
                grid.start / grid.length + 1
            } else {
                1
            };
            nav.page_size = grid.length;
            nav.route_path = nav.breadcrumb.route_path();
            nav.search = grid.search.clone();
        }

        ListFolder {
            page: nav.page,
            page_size: nav.page_size,
            route_path: nav.route_path.clone(),
            search: nav.search.clone(),
            draw: Some(grid.draw),
        }
    }
}

// =============================================================================
// Rows
// =============================================================================

/// Name column contents.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NameCell {
    /// Folder: icon plus link into it
    Folder {
        label: String,
        route_path: String,
        href: String,
    },
    /// File: plain text
    File { label: String },
}

impl NameCell {
    pub fn label(&self) -> &str {
        match self {
            Self::Folder { label, .. } | Self::File { label } => label,
        }
    }
}

/// One rendered table row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Row {
    /// Stable key (server path)
    pub key: String,
    pub name: NameCell,
    pub created_at: String,
    /// Human-readable size
    pub size: String,
    pub download: DownloadTarget,
}

impl Row {
    pub fn from_entry(entry: &DirectoryEntry, config: &BrowserConfig) -> Self {
        let name = if entry.is_dir {
            let route_path = relative_route_path(&entry.path, &config.root);
            NameCell::Folder {
                label: entry.name.clone(),
                href: config.page_link(&encode_query([("route_path", route_path.as_str())])),
                route_path,
            }
        } else {
            NameCell::File {
                label: entry.name.clone(),
            }
        };

        Self {
            key: entry.path.clone(),
            name,
            created_at: entry.created_at.clone(),
            size: format_file_size(entry.size.unwrap_or(0)),
            download: DownloadTarget::new(entry.path.clone(), entry.is_dir),
        }
    }
}

/// Strip the configured root (and any leading slash) from a server path.
pub fn relative_route_path(path: &str, root: &str) -> String {
    let relative = if root.is_empty() {
        path
    } else {
        path.strip_prefix(root).unwrap_or(path)
    };
    relative.trim_start_matches('/').to_string()
}

/// Rows and counters for one completed draw.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TableData {
    pub draw: u32,
    pub records_total: u64,
    /// Search happens server-side, so this always equals `records_total`
    pub records_filtered: u64,
    pub rows: Vec<Row>,
}

impl TableData {
    pub fn from_listing(draw: u32, listing: &ListingPage, config: &BrowserConfig) -> Self {
        Self {
            draw,
            records_total: listing.count,
            records_filtered: listing.count,
            rows: listing
                .results
                .iter()
                .map(|entry| Row::from_entry(entry, config))
                .collect(),
        }
    }
}

/// Fetch a listing and project it into table data.
pub async fn run_draw<C: DirectoryClient>(
    client: &C,
    request: &ListFolder,
    config: &BrowserConfig,
) -> Result<TableData, FetchError> {
    let listing = client.list_folder(request).await?;
    Ok(TableData::from_listing(
        request.draw.unwrap_or_default(),
        &listing,
        config,
    ))
}

// =============================================================================
// Pagination
// =============================================================================

/// Footer information for the current page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageInfo {
    /// 1-based current page
    pub page: u32,
    /// Number of pages (at least 1)
    pub page_count: u32,
    /// 1-based index of the first row shown (0 when nothing is shown)
    pub first: u64,
    /// 1-based index of the last row shown (0 when nothing is shown)
    pub last: u64,
    pub total: u64,
}

impl PageInfo {
    pub fn new(start: u32, length: u32, total: u64) -> Self {
        let length = length.max(1);
        let page_count = total.div_ceil(u64::from(length)).max(1);
        let page_count = u32::try_from(page_count).unwrap_or(u32::MAX);
        let page = (start / length + 1).min(page_count);

        // Past the end (deep link to a page that no longer exists) nothing is shown
        let start = u64::from(start);
        let (first, last) = if start >= total {
            (0, 0)
        } else {
            (start + 1, (start + u64::from(length)).min(total))
        };

        Self {
            page,
            page_count,
            first,
            last,
            total,
        }
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.page_count
    }

    /// "Showing X to Y of Z entries"
    pub fn summary(&self) -> String {
        format!(
            "Showing {} to {} of {} entries",
            self.first, self.last, self.total
        )
    }
}

/// A numbered pagination control.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageButton {
    Page(u32),
    Ellipsis,
}

/// Page buttons around `current`, never more than [`MAX_PAGE_BUTTONS`].
pub fn page_buttons(current: u32, page_count: u32) -> Vec<PageButton> {
    let max = MAX_PAGE_BUTTONS as u32;
    if page_count <= max {
        return (1..=page_count).map(PageButton::Page).collect();
    }

    let half = max / 2;
    let mut buttons = Vec::with_capacity(MAX_PAGE_BUTTONS);
    if current <= half + 1 {
        buttons.extend((1..=max - 2).map(PageButton::Page));
        buttons.push(PageButton::Ellipsis);
        buttons.push(PageButton::Page(page_count));
    } else if current >= page_count - half {
        buttons.push(PageButton::Page(1));
        buttons.push(PageButton::Ellipsis);
        buttons.extend((page_count - (max - 3)..=page_count).map(PageButton::Page));
    } else {
        buttons.push(PageButton::Page(1));
        buttons.push(PageButton::Ellipsis);
        buttons.extend((current - 1..=current + 1).map(PageButton::Page));
        buttons.push(PageButton::Ellipsis);
        buttons.push(PageButton::Page(page_count));
    }
    buttons
}
