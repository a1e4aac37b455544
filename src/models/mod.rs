//! Data models and types for the application.
//!
//! Contains domain types for:
//! - [`NavigationState`], [`Breadcrumb`] - URL-backed view state
//! - [`DirectoryEntry`], [`ListingPage`] - Folder listings from the server
//! - [`DownloadSession`], [`DownloadTarget`], [`Progress`] - Download tracking

mod download;
mod listing;
mod navigation;

pub use download::{DownloadSession, DownloadTarget, Progress};
pub use listing::{DirectoryEntry, ListingPage};
pub use navigation::{Breadcrumb, NavigationState};
