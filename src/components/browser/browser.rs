//! Main browser component.
//!
//! ## Layout
//!
//! - Path bar (breadcrumb with folder download)
//! - Download progress panel and error banner
//! - Table toolbar (page size, search), table, pagination footer

use leptos::prelude::*;

use super::pagination::{Pagination, TableToolbar};
use super::{DownloadProgress, FileTable, PathBar};
use crate::app::AppContext;

/// Thermal files browser view component.
#[component]
pub fn FileBrowser() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    // Initial draw, honoring the URL
    ctx.redraw();

    view! {
        <div id="tip_dashboard">
            <PathBar />
            <DownloadProgress />
            <TableToolbar />
            <FileTable />
            <Pagination />
        </div>
    }
}
