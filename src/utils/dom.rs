//! DOM and Web API utility functions.
//!
//! Provides safe, consistent access to browser APIs with proper error handling.

use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen::prelude::Closure;
use web_sys::{
    BeforeUnloadEvent, Blob, Document, HtmlAnchorElement, HtmlInputElement, MouseEvent, Url,
    Window,
};

/// Get the browser window object.
#[inline]
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Get the document object.
#[inline]
pub fn document() -> Option<Document> {
    window()?.document()
}

/// Value of an `<input>` by id, when present and non-empty.
pub fn input_value(id: &str) -> Option<String> {
    let input = document()?
        .get_element_by_id(id)?
        .dyn_into::<HtmlInputElement>()
        .ok()?;
    Some(input.value()).filter(|v| !v.is_empty())
}

// =============================================================================
// Browser Navigation
// =============================================================================

/// Full URL of the current page.
pub fn current_url() -> String {
    window()
        .and_then(|w| w.location().href().ok())
        .unwrap_or_default()
}

/// Current page URL with query string and fragment removed.
pub fn location_without_query() -> String {
    let href = current_url();
    let end = href.find(['?', '#']).unwrap_or(href.len());
    href[..end].to_string()
}

/// Replace the URL query without adding to browser history.
///
/// The query should not include the '?' prefix.
pub fn replace_query(query: &str) {
    if let Some(window) = window()
        && let Ok(history) = window.history()
    {
        let url = format!("?{query}");
        let _ = history.replace_state_with_url(&JsValue::NULL, "", Some(&url));
    }
}

/// Whether a click should be handled in-app rather than by the browser
/// (primary button, no modifier keys asking for a new tab or window).
pub fn is_plain_click(event: &MouseEvent) -> bool {
    event.button() == 0
        && !event.ctrl_key()
        && !event.meta_key()
        && !event.shift_key()
        && !event.alt_key()
}

/// Show a blocking alert dialog.
pub fn alert(message: &str) {
    if let Some(window) = window() {
        let _ = window.alert_with_message(message);
    }
}

// =============================================================================
// Downloads
// =============================================================================

/// Save a blob under `filename` by clicking a temporary `<a download>`.
pub fn save_blob(blob: &Blob, filename: &str) -> Result<(), JsValue> {
    let document = document().ok_or_else(|| JsValue::from_str("document not available"))?;
    let object_url = Url::create_object_url_with_blob(blob)?;

    let anchor = document
        .create_element("a")?
        .dyn_into::<HtmlAnchorElement>()?;
    anchor.set_href(&object_url);
    anchor.set_download(filename);
    anchor.click();

    // Revoke on the next tick so the browser has picked the URL up
    wasm_bindgen_futures::spawn_local(async move {
        gloo_timers::future::TimeoutFuture::new(0).await;
        let _ = Url::revoke_object_url(&object_url);
    });

    Ok(())
}

/// Ask for confirmation before leaving the page while `is_busy` holds.
pub fn install_leave_guard<F>(is_busy: F)
where
    F: Fn() -> bool + 'static,
{
    let Some(window) = window() else {
        return;
    };

    let closure = Closure::wrap(Box::new(move |event: BeforeUnloadEvent| {
        if is_busy() {
            event.prevent_default();
            event.set_return_value("A download is in progress.");
        }
    }) as Box<dyn Fn(BeforeUnloadEvent)>);
    let _ = window
        .add_event_listener_with_callback("beforeunload", closure.as_ref().unchecked_ref());

    // Keep the closure alive for the lifetime of the app
    closure.forget();
}
