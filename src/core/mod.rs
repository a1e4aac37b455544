//! Core logic for the thermal files browser.
//!
//! This module provides:
//! - [`query`] - URL query-state codec
//! - [`breadcrumb`] - Breadcrumb projection
//! - [`client`] - Directory client contract ([`DirectoryClient`])
//! - [`table`] - Paginated table draws and row projection
//! - [`download`] - Download progress controller
//! - [`state`] - The [`BrowserState`] owned by the UI

pub mod breadcrumb;
pub mod client;
pub mod download;
pub mod error;
pub mod query;
pub mod state;
pub mod table;

pub use client::{DirectoryClient, DownloadFile, DownloadResponse, ListFolder};
pub use download::DownloadController;
pub use error::FetchError;
pub use state::BrowserState;
pub use table::TableData;
