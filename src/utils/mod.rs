//! Utility modules for web, DOM, and formatting operations.
//!
//! Provides:
//! - [`HttpDirectoryClient`] - Listing and download requests against the API
//! - [`dom`] - Address bar, alerts, blob saving, leave guard
//! - [`format`] - File size and percentage formatting

pub mod dom;
mod fetch;
pub mod format;

pub use fetch::HttpDirectoryClient;
