//! Breadcrumb projection.
//!
//! Turns the current [`Breadcrumb`] into the list of crumbs the path bar
//! renders. Only the last crumb is active; every other crumb links back to
//! its folder on the first page, keeping the page size.

use crate::config::BrowserConfig;
use crate::core::query::encode_query;
use crate::models::{Breadcrumb, DownloadTarget};

/// Label of the empty root segment.
pub const ROOT_LABEL: &str = "root";

/// A single rendered crumb.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Crumb {
    /// Display label
    pub label: String,
    /// `data-folder` value, root-prefixed (e.g. `/a/b`)
    pub folder: String,
    /// Link target (None = current folder)
    pub href: Option<String>,
    /// Folder download control (active, non-root crumb only)
    pub download: Option<DownloadTarget>,
}

impl Crumb {
    /// Whether this crumb is the current folder.
    pub fn is_active(&self) -> bool {
        self.href.is_none()
    }
}

/// Project a breadcrumb into renderable crumbs.
pub fn crumbs(breadcrumb: &Breadcrumb, page_size: u32, config: &BrowserConfig) -> Vec<Crumb> {
    let segments = breadcrumb.segments();
    let last = segments.len() - 1;

    segments
        .iter()
        .enumerate()
        .map(|(idx, segment)| {
            let is_active = idx == last;
            let route_path = breadcrumb.route_path_at(idx);

            let href = (!is_active).then(|| {
                config.page_link(&encode_query([
                    ("route_path", route_path.clone()),
                    ("page", "1".to_string()),
                    ("page_size", page_size.to_string()),
                ]))
            });

            let download =
                (is_active && !segment.is_empty()).then(|| DownloadTarget::new(route_path, true));

            Crumb {
                label: if segment.is_empty() {
                    ROOT_LABEL.to_string()
                } else {
                    segment.clone()
                },
                folder: breadcrumb.folder_at(idx),
                href,
                download,
            }
        })
        .collect()
}
