//! Browser implementation of the directory client.
//!
//! Listings go through `gloo-net`'s Fetch wrapper. Downloads use
//! `XMLHttpRequest` because Fetch has no byte-level progress events; its
//! callbacks are bridged into a future with a oneshot channel.

use std::cell::RefCell;
use std::rc::Rc;

use futures::channel::oneshot;
use gloo_net::http::Request;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::Closure;
use web_sys::{Blob, ProgressEvent, XmlHttpRequest, XmlHttpRequestResponseType};

use crate::config::{BrowserConfig, DOWNLOAD_TIMEOUT_MS};
use crate::core::client::{
    DirectoryClient, DownloadFile, DownloadResponse, ListFolder, TransferEvent, classify_transfer,
};
use crate::core::error::FetchError;
use crate::models::{ListingPage, Progress};
use crate::utils::dom;

/// Directory client talking to the thermal files API.
#[derive(Clone, Debug)]
pub struct HttpDirectoryClient {
    config: BrowserConfig,
}

impl HttpDirectoryClient {
    pub fn new(config: BrowserConfig) -> Self {
        Self { config }
    }
}

impl DirectoryClient for HttpDirectoryClient {
    type Body = Blob;

    /// Fetch one page of a folder listing.
    ///
    /// The view state is written to the address bar first so the current
    /// view can be bookmarked or shared.
    async fn list_folder(&self, request: &ListFolder) -> Result<ListingPage, FetchError> {
        dom::replace_query(&request.state_query());

        let url = self.config.list_url(&request.request_query());
        let response = Request::get(&url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| FetchError::NetworkError(e.to_string()))?;

        if !response.ok() {
            return Err(FetchError::HttpError(response.status()));
        }

        let text = response
            .text()
            .await
            .map_err(|_| FetchError::ResponseReadFailed)?;
        serde_json::from_str(&text).map_err(|e| FetchError::JsonParseError(e.to_string()))
    }

    async fn download<P>(
        &self,
        request: &DownloadFile,
        on_progress: P,
    ) -> Result<DownloadResponse<Blob>, FetchError>
    where
        P: FnMut(Progress) + 'static,
    {
        let url = self.config.download_url(&request.query());
        fetch_blob(&url, on_progress).await
    }
}

/// GET `url` as a blob, reporting progress, with the download timeout.
async fn fetch_blob<P>(url: &str, mut on_progress: P) -> Result<DownloadResponse<Blob>, FetchError>
where
    P: FnMut(Progress) + 'static,
{
    let xhr = XmlHttpRequest::new().map_err(|_| FetchError::RequestCreationFailed)?;
    xhr.open_with_async("GET", url, true)
        .map_err(|_| FetchError::RequestCreationFailed)?;
    xhr.set_response_type(XmlHttpRequestResponseType::Blob);
    xhr.set_timeout(DOWNLOAD_TIMEOUT_MS);

    let (tx, rx) = oneshot::channel::<TransferEvent>();
    let sender = Rc::new(RefCell::new(Some(tx)));
    let terminal = |event: TransferEvent| {
        let sender = sender.clone();
        Closure::wrap(Box::new(move |_: ProgressEvent| {
            if let Some(tx) = sender.borrow_mut().take() {
                let _ = tx.send(event);
            }
        }) as Box<dyn FnMut(ProgressEvent)>)
    };
    let on_load = terminal(TransferEvent::Load);
    let on_error = terminal(TransferEvent::Error);
    let on_abort = terminal(TransferEvent::Abort);
    let on_timeout = terminal(TransferEvent::Timeout);

    let on_progress_event = Closure::wrap(Box::new(move |event: ProgressEvent| {
        #[cfg(target_arch = "wasm32")]
        web_sys::console::log_1(
            &format!("Transfer: {}: {} bytes transferred", event.type_(), event.loaded()).into(),
        );
        let total = event.length_computable().then(|| event.total() as u64);
        on_progress(Progress::new(event.loaded() as u64, total));
    }) as Box<dyn FnMut(ProgressEvent)>);

    xhr.set_onprogress(Some(on_progress_event.as_ref().unchecked_ref()));
    xhr.set_onload(Some(on_load.as_ref().unchecked_ref()));
    xhr.set_onerror(Some(on_error.as_ref().unchecked_ref()));
    xhr.set_onabort(Some(on_abort.as_ref().unchecked_ref()));
    xhr.set_ontimeout(Some(on_timeout.as_ref().unchecked_ref()));

    xhr.send()
        .map_err(|e| FetchError::NetworkError(format!("{e:?}")))?;

    let event = rx.await.map_err(|_| FetchError::Aborted)?;

    // Detach handlers before their closures are dropped
    xhr.set_onprogress(None);
    xhr.set_onload(None);
    xhr.set_onerror(None);
    xhr.set_onabort(None);
    xhr.set_ontimeout(None);

    let status = xhr.status().unwrap_or(0);
    classify_transfer(status, event)?;

    let body = xhr
        .response()
        .map_err(|_| FetchError::ResponseReadFailed)?
        .dyn_into::<Blob>()
        .map_err(|_| FetchError::InvalidContent)?;

    Ok(DownloadResponse {
        status,
        content_disposition: xhr.get_response_header("Content-Disposition").ok().flatten(),
        body,
    })
}
