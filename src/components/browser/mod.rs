//! Thermal files browser UI components.
//!
//! Components:
//! - [`FileBrowser`] - Main browser view
//! - [`PathBar`] - Breadcrumb of the current folder
//! - [`FileTable`] - Paginated folder contents
//! - [`DownloadProgress`] - Progress panel and error banner

#[allow(clippy::module_inception)]
mod browser;
mod download_button;
mod file_table;
mod pagination;
mod pathbar;
mod progress;

pub use browser::FileBrowser;
pub use download_button::DownloadButton;
pub use file_table::FileTable;
pub use pathbar::PathBar;
pub use progress::DownloadProgress;
