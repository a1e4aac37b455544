//! Root application module.
//!
//! Contains the main App component, AppContext definition, and the
//! handlers that drive listing draws and downloads.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::components::browser::FileBrowser;
use crate::config::{BrowserConfig, PROGRESS_FADE_DELAY_MS, SEARCH_DEBOUNCE_MS, messages};
use crate::core::table::{SearchDebounce, run_draw};
use crate::core::{BrowserState, DirectoryClient, DownloadController, TableData};
use crate::models::DownloadTarget;
use crate::utils::{HttpDirectoryClient, dom};

// ============================================================================
// AppContext
// ============================================================================

/// Application-wide reactive context.
///
/// This context is provided at the root of the component tree and can be
/// accessed from any child component using `use_context::<AppContext>()`.
///
/// # Architecture
///
/// - **Browser state**: URL-backed navigation, table paging and search
/// - **Table data**: Rows of the last completed draw
/// - **Downloads**: The single tracked download and its progress panel
///
/// # Note
///
/// This struct is `Copy` because all fields are Leptos signals or stored
/// values, which are cheap to copy.
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Host-page configuration (API base, root prefix, page location).
    pub config: StoredValue<BrowserConfig>,
    client: StoredValue<HttpDirectoryClient>,

    /// Navigation, grid and draw state.
    pub state: RwSignal<BrowserState>,
    /// Rows and counters of the last completed draw.
    pub table: RwSignal<TableData>,
    /// A listing request is in flight.
    pub loading: RwSignal<bool>,
    search_input: StoredValue<SearchDebounce>,

    /// Download panel state.
    pub download: RwSignal<DownloadController>,
}

impl AppContext {
    /// Creates the context from the host config and the current page URL.
    pub fn new(config: BrowserConfig, url: &str) -> Self {
        Self {
            client: StoredValue::new(HttpDirectoryClient::new(config.clone())),
            config: StoredValue::new(config),
            state: RwSignal::new(BrowserState::from_url(url)),
            table: RwSignal::new(TableData::default()),
            loading: RwSignal::new(false),
            search_input: StoredValue::new(SearchDebounce::default()),
            download: RwSignal::new(DownloadController::new()),
        }
    }

    // ========================================================================
    // Listing
    // ========================================================================

    /// Run one table draw against the server.
    ///
    /// Responses are applied in arrival order.
    pub fn redraw(&self) {
        let Some(request) = self.state.try_update(|s| s.next_draw()) else {
            return;
        };
        let ctx = *self;
        ctx.loading.set(true);

        spawn_local(async move {
            let client = ctx.client.get_value();
            let config = ctx.config.get_value();

            match run_draw(&client, &request, &config).await {
                Ok(data) => ctx.table.set(data),
                Err(_err) => {
                    #[cfg(target_arch = "wasm32")]
                    web_sys::console::error_1(&format!("Listing failed: {}", _err).into());
                    dom::alert(messages::LIST_FAILED);
                }
            }
            ctx.loading.set(false);
        });
    }

    /// Breadcrumb click: show the crumb's folder from its first page.
    pub fn open_folder(&self, folder: &str) {
        self.state.update(|s| s.open_folder(folder));
        self.redraw();
    }

    /// Folder link click: show `route_path` from its first page.
    pub fn open_route(&self, route_path: &str) {
        self.state.update(|s| s.open_route(route_path));
        self.redraw();
    }

    pub fn goto_page(&self, page: u32) {
        self.state.update(|s| s.goto_page(page));
        self.redraw();
    }

    pub fn set_page_size(&self, page_size: u32) {
        self.state.update(|s| s.set_page_size(page_size));
        self.redraw();
    }

    pub fn set_search(&self, search: &str) {
        self.state.update(|s| s.set_search(search));
        self.redraw();
    }

    /// Search box input. Draws once typing has paused.
    pub fn type_search(&self, text: &str) {
        let Some(ticket) = self.search_input.try_update_value(|d| d.input(text)) else {
            return;
        };
        let ctx = *self;

        spawn_local(async move {
            TimeoutFuture::new(SEARCH_DEBOUNCE_MS).await;
            if let Some(Some(search)) = ctx.search_input.try_update_value(|d| d.settle(ticket)) {
                ctx.set_search(&search);
            }
        });
    }

    // ========================================================================
    // Downloads
    // ========================================================================

    /// Download button click. Ignored while another download is tracked.
    pub fn start_download(&self, target: DownloadTarget) {
        let Some(request) = self.download.try_update(|d| d.begin(&target)).flatten() else {
            return;
        };
        let downloads = self.download;
        let client = self.client.get_value();

        spawn_local(async move {
            let result = client
                .download(&request, move |progress| {
                    if let Some(Some(generation)) = downloads.try_update(|d| d.progress(progress)) {
                        schedule_fade(downloads, generation);
                    }
                })
                .await;

            let fade = match result {
                Ok(response) => match downloads.try_update(|d| d.complete(response)) {
                    Some((saved, fade)) => {
                        if let Err(_err) = dom::save_blob(&saved.body, &saved.filename) {
                            #[cfg(target_arch = "wasm32")]
                            web_sys::console::error_2(&"Failed to save download".into(), &_err);
                        }
                        fade
                    }
                    None => None,
                },
                Err(_err) => {
                    #[cfg(target_arch = "wasm32")]
                    web_sys::console::error_1(&format!("Failed to download file: {}", _err).into());
                    downloads.try_update(|d| d.fail()).flatten()
                }
            };

            if let Some(generation) = fade {
                schedule_fade(downloads, generation);
            }
        });
    }
}

/// Fade the progress panel out after the configured delay.
fn schedule_fade(downloads: RwSignal<DownloadController>, generation: u64) {
    spawn_local(async move {
        TimeoutFuture::new(PROGRESS_FADE_DELAY_MS).await;
        downloads.update(|d| {
            d.fade_out(generation);
        });
    });
}

/// Root application component with error boundary.
///
/// This component:
/// - Creates and provides the global AppContext
/// - Warns before leaving the page during a download
/// - Wraps the app in an ErrorBoundary for graceful error handling
#[component]
pub fn App() -> impl IntoView {
    let ctx = AppContext::new(BrowserConfig::from_document(), &dom::current_url());
    provide_context(ctx);

    dom::install_leave_guard(move || ctx.download.with_untracked(|d| d.is_busy()));

    view! {
        <ErrorBoundary
            fallback=|errors| view! {
                <div class="alert alert-danger" role="alert">
                    <h4 class="alert-heading">"Something went wrong"</h4>
                    <p>"An unexpected error occurred. Please try reloading the page."</p>
                    <ul class="mb-0">
                        {move || errors.get()
                            .into_iter()
                            .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                            .collect::<Vec<_>>()
                        }
                    </ul>
                </div>
            }
        >
            <FileBrowser />
        </ErrorBoundary>
    }
}
