//! Application configuration.
//!
//! Centralizes all configuration constants used throughout the application,
//! plus the small amount of runtime configuration the host page provides
//! through data attributes on the mount element.

// =============================================================================
// Application Metadata
// =============================================================================

/// Id of the element the application mounts into.
pub const MOUNT_ELEMENT_ID: &str = "app";

// =============================================================================
// Network Configuration
// =============================================================================

/// Default base path of the thermal files API.
pub const DEFAULT_API_BASE: &str = "/api/thermal-files/";

/// Listing endpoint, relative to the API base.
pub const LIST_ENDPOINT: &str = "list_thermal_folder_contents/";

/// Download endpoint, relative to the API base.
pub const DOWNLOAD_ENDPOINT: &str = "download/";

/// Download request timeout in milliseconds (15 minutes, folder archives are slow).
pub const DOWNLOAD_TIMEOUT_MS: u32 = 15 * 60 * 1000;

// =============================================================================
// Table Configuration
// =============================================================================

/// Page number used when the URL carries none (or garbage).
pub const DEFAULT_PAGE: u32 = 1;

/// Page size used when the URL carries none (or garbage).
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Choices offered by the page-size selector.
pub const PAGE_SIZE_OPTIONS: &[u32] = &[10, 25, 50, 100];

/// Maximum number of page buttons in the pagination footer (ellipses included).
pub const MAX_PAGE_BUTTONS: usize = 7;

/// Pause in typing before the search box triggers a draw, in milliseconds.
pub const SEARCH_DEBOUNCE_MS: u32 = 400;

// =============================================================================
// Download Configuration
// =============================================================================

/// Save-as name when the response carries no usable `Content-Disposition`.
pub const DEFAULT_DOWNLOAD_NAME: &str = "download.7z";

/// Delay before the progress panel fades out, in milliseconds.
pub const PROGRESS_FADE_DELAY_MS: u32 = 2000;

/// Percentage the progress bar shows while idle.
pub const PROGRESS_IDLE_PERCENT: f64 = 5.0;

/// Label prefix for folder downloads.
pub const FOLDER_LABEL_PREFIX: &str = "Folder: ";

/// User-facing messages.
pub mod messages {
    /// Alert shown when a listing request fails.
    pub const LIST_FAILED: &str = "There was an error fetching the files";
    /// Banner shown when a download fails or is aborted.
    pub const DOWNLOAD_FAILED: &str = "There was an error downloading the file";
}

// =============================================================================
// UI Configuration
// =============================================================================

/// Icon theme selection.
///
/// Available themes:
/// - `Bootstrap` - Matches the host page's Bootstrap Icons (default)
/// - `Lucide` - Minimal, thin strokes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(dead_code)]
pub enum IconTheme {
    #[default]
    Bootstrap,
    Lucide,
}

/// Current icon theme used throughout the application.
pub const ICON_THEME: IconTheme = IconTheme::Bootstrap;

// =============================================================================
// Runtime Configuration
// =============================================================================

/// Configuration supplied by the host page at mount time.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BrowserConfig {
    /// Base path of the thermal files API (always ends with `/`).
    pub api_base: String,
    /// Absolute root prefix the server puts in front of every entry path.
    pub root: String,
    /// Current page URL without its query string, used to build links.
    pub location: String,
}

impl BrowserConfig {
    /// Build a config, normalizing the API base to end with a slash.
    pub fn new(
        api_base: impl Into<String>,
        root: impl Into<String>,
        location: impl Into<String>,
    ) -> Self {
        let mut api_base = api_base.into();
        if api_base.is_empty() {
            api_base = DEFAULT_API_BASE.to_string();
        } else if !api_base.ends_with('/') {
            api_base.push('/');
        }
        Self {
            api_base,
            root: root.into(),
            location: location.into(),
        }
    }

    /// Read the config from the document.
    ///
    /// Looks at `data-api-base` and `data-root` on the mount element; the
    /// root falls back to the value of a hidden `#route_path` input.
    pub fn from_document() -> Self {
        use crate::utils::dom;

        let mount = dom::document().and_then(|d| d.get_element_by_id(MOUNT_ELEMENT_ID));
        let api_base = mount
            .as_ref()
            .and_then(|el| el.get_attribute("data-api-base"))
            .unwrap_or_else(|| DEFAULT_API_BASE.to_string());
        let root = mount
            .as_ref()
            .and_then(|el| el.get_attribute("data-root"))
            .or_else(|| dom::input_value("route_path"))
            .unwrap_or_default();

        Self::new(api_base, root, dom::location_without_query())
    }

    /// Full URL of the listing endpoint for an encoded query.
    pub fn list_url(&self, query: &str) -> String {
        format!("{}{}?{}", self.api_base, LIST_ENDPOINT, query)
    }

    /// Full URL of the download endpoint for an encoded query.
    pub fn download_url(&self, query: &str) -> String {
        format!("{}{}?{}", self.api_base, DOWNLOAD_ENDPOINT, query)
    }

    /// Link to this page with the given encoded query.
    pub fn page_link(&self, query: &str) -> String {
        format!("{}?{}", self.location, query)
    }
}

impl Default for BrowserConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE, "", "")
    }
}
