//! Remote directory client contract.
//!
//! The browser talks to the backend through two request/response pairs:
//!
//! - [`ListFolder`] → [`ListingPage`] (JSON)
//! - [`DownloadFile`] → [`DownloadResponse`] (binary body plus headers)
//!
//! [`DirectoryClient`] abstracts the transport so the controllers can be
//! driven by the browser implementation (`utils::fetch`) or by
//! [`MockDirectoryClient`] in tests.

use std::sync::LazyLock;

use regex::Regex;

use crate::config::DEFAULT_DOWNLOAD_NAME;
use crate::core::error::FetchError;
use crate::core::query::encode_query;
use crate::models::{ListingPage, Progress};

// =============================================================================
// Messages
// =============================================================================

/// Request for one page of a folder listing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListFolder {
    pub page: u32,
    pub page_size: u32,
    pub route_path: String,
    pub search: String,
    /// Table draw counter, echoed to the server
    pub draw: Option<u32>,
}

impl ListFolder {
    /// View-state parameters, as written to the address bar.
    pub fn state_query(&self) -> String {
        encode_query(self.state_pairs())
    }

    /// Full backend query (view state plus draw counter).
    pub fn request_query(&self) -> String {
        let mut pairs = self.state_pairs();
        if let Some(draw) = self.draw {
            pairs.push(("draw", draw.to_string()));
        }
        encode_query(pairs)
    }

    fn state_pairs(&self) -> Vec<(&'static str, String)> {
        vec![
            ("page", self.page.to_string()),
            ("page_size", self.page_size.to_string()),
            ("route_path", self.route_path.clone()),
            ("search", self.search.clone()),
        ]
    }
}

/// Request to download a file, or a folder as an archive.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DownloadFile {
    pub file_path: String,
    pub is_directory: bool,
}

impl DownloadFile {
    pub fn query(&self) -> String {
        encode_query([("file_path", self.file_path.as_str())])
    }
}

/// A completed download.
#[derive(Clone, Debug, PartialEq)]
pub struct DownloadResponse<B> {
    /// HTTP status as reported by the transport
    pub status: u16,
    /// Raw `Content-Disposition` header, if any
    pub content_disposition: Option<String>,
    /// Response body
    pub body: B,
}

impl<B> DownloadResponse<B> {
    /// Save-as name suggested by the server, or the default name.
    pub fn filename(&self) -> String {
        content_disposition_filename(self.content_disposition.as_deref())
    }
}

// =============================================================================
// Transport Contract
// =============================================================================

/// Backend operations needed by the browser. No retries.
#[allow(async_fn_in_trait)]
pub trait DirectoryClient {
    /// Body type of a download (a `Blob` in the browser).
    type Body;

    /// Fetch one page of a folder listing.
    async fn list_folder(&self, request: &ListFolder) -> Result<ListingPage, FetchError>;

    /// Download a file or folder archive, reporting progress as bytes arrive.
    async fn download<P>(
        &self,
        request: &DownloadFile,
        on_progress: P,
    ) -> Result<DownloadResponse<Self::Body>, FetchError>
    where
        P: FnMut(Progress) + 'static;
}

/// Terminal event of a binary transfer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TransferEvent {
    Load,
    Error,
    Abort,
    Timeout,
}

/// Decide the outcome of a transfer from its real HTTP status.
///
/// Binary transfers can report a complete 200 response through the error
/// path, so the status wins over the event that fired.
pub fn classify_transfer(status: u16, event: TransferEvent) -> Result<(), FetchError> {
    if status == 200 {
        return Ok(());
    }
    match event {
        TransferEvent::Load if (200..300).contains(&status) => Ok(()),
        TransferEvent::Load => Err(FetchError::HttpError(status)),
        TransferEvent::Error if status == 0 => {
            Err(FetchError::NetworkError("transfer failed".to_string()))
        }
        TransferEvent::Error => Err(FetchError::HttpError(status)),
        TransferEvent::Abort => Err(FetchError::Aborted),
        TransferEvent::Timeout => Err(FetchError::Timeout),
    }
}

static FILENAME_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"filename="?([^"]+)"?"#).expect("filename pattern is valid")
});

/// Extract the save-as name from a `Content-Disposition` header.
pub fn content_disposition_filename(header: Option<&str>) -> String {
    header
        .filter(|h| h.contains("filename="))
        .and_then(|h| FILENAME_RE.captures(h))
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string())
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| DEFAULT_DOWNLOAD_NAME.to_string())
}

// =============================================================================
// Mock Client
// =============================================================================

#[cfg(any(test, feature = "mock"))]
pub use mock::MockDirectoryClient;

#[cfg(any(test, feature = "mock"))]
mod mock {
    use std::cell::RefCell;
    use std::collections::VecDeque;

    use super::*;

    /// In-memory client that records requests and replays canned responses.
    #[derive(Default)]
    pub struct MockDirectoryClient {
        listings: RefCell<VecDeque<Result<ListingPage, FetchError>>>,
        downloads: RefCell<VecDeque<Result<DownloadResponse<Vec<u8>>, FetchError>>>,
        progress: RefCell<Vec<Progress>>,
        list_requests: RefCell<Vec<ListFolder>>,
        download_requests: RefCell<Vec<DownloadFile>>,
    }

    impl MockDirectoryClient {
        pub fn new() -> Self {
            Self::default()
        }

        /// Queue the result of the next listing request.
        pub fn push_listing(&self, result: Result<ListingPage, FetchError>) {
            self.listings.borrow_mut().push_back(result);
        }

        /// Queue the result of the next download.
        pub fn push_download(&self, result: Result<DownloadResponse<Vec<u8>>, FetchError>) {
            self.downloads.borrow_mut().push_back(result);
        }

        /// Progress events replayed by every download before it resolves.
        pub fn set_progress(&self, events: Vec<Progress>) {
            *self.progress.borrow_mut() = events;
        }

        pub fn list_requests(&self) -> Vec<ListFolder> {
            self.list_requests.borrow().clone()
        }

        pub fn download_requests(&self) -> Vec<DownloadFile> {
            self.download_requests.borrow().clone()
        }
    }

    impl DirectoryClient for MockDirectoryClient {
        type Body = Vec<u8>;

        async fn list_folder(&self, request: &ListFolder) -> Result<ListingPage, FetchError> {
            self.list_requests.borrow_mut().push(request.clone());
            self.listings
                .borrow_mut()
                .pop_front()
                .unwrap_or_else(|| Ok(ListingPage::default()))
        }

        async fn download<P>(
            &self,
            request: &DownloadFile,
            mut on_progress: P,
        ) -> Result<DownloadResponse<Vec<u8>>, FetchError>
        where
            P: FnMut(Progress) + 'static,
        {
            self.download_requests.borrow_mut().push(request.clone());
            for event in self.progress.borrow().iter() {
                on_progress(*event);
            }
            self.downloads
                .borrow_mut()
                .pop_front()
                .unwrap_or_else(|| Err(FetchError::NetworkError("no response queued".to_string())))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_folder_queries() {
        let request = ListFolder {
            page: 2,
            page_size: 5,
            route_path: "a/b".to_string(),
            search: String::new(),
            draw: Some(3),
        };
        assert_eq!(request.state_query(), "page=2&page_size=5&route_path=a%2Fb&search=");
        assert_eq!(
            request.request_query(),
            "page=2&page_size=5&route_path=a%2Fb&search=&draw=3"
        );
    }

    #[test]
    fn test_classify_transfer() {
        assert_eq!(classify_transfer(200, TransferEvent::Load), Ok(()));
        assert_eq!(classify_transfer(200, TransferEvent::Error), Ok(()));
        assert_eq!(classify_transfer(204, TransferEvent::Load), Ok(()));
        assert_eq!(
            classify_transfer(500, TransferEvent::Load),
            Err(FetchError::HttpError(500))
        );
        assert_eq!(
            classify_transfer(404, TransferEvent::Error),
            Err(FetchError::HttpError(404))
        );
        assert!(matches!(
            classify_transfer(0, TransferEvent::Error),
            Err(FetchError::NetworkError(_))
        ));
        assert_eq!(classify_transfer(0, TransferEvent::Abort), Err(FetchError::Aborted));
        assert_eq!(classify_transfer(0, TransferEvent::Timeout), Err(FetchError::Timeout));
    }

    #[test]
    fn test_content_disposition_filename() {
        assert_eq!(
            content_disposition_filename(Some(r#"attachment; filename="flight_01.zip""#)),
            "flight_01.zip"
        );
        assert_eq!(
            content_disposition_filename(Some("attachment; filename=img 1.tif")),
            "img 1.tif"
        );
        assert_eq!(content_disposition_filename(Some("attachment")), DEFAULT_DOWNLOAD_NAME);
        assert_eq!(content_disposition_filename(Some(r#"filename="""#)), DEFAULT_DOWNLOAD_NAME);
        assert_eq!(content_disposition_filename(None), DEFAULT_DOWNLOAD_NAME);
    }

    #[test]
    fn test_download_query() {
        let request = DownloadFile {
            file_path: "/data/thermal/flight 1".to_string(),
            is_directory: true,
        };
        assert_eq!(request.query(), "file_path=%2Fdata%2Fthermal%2Fflight+1");
    }
}
