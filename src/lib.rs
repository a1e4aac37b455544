//! Thermal files browser.
//!
//! A Leptos (CSR) application that browses the remote thermal files tree:
//! breadcrumb navigation, a server-paginated and searchable table of folder
//! contents, and file or folder downloads with a progress panel.
//!
//! The view state lives in the page URL (`route_path`, `page`, `page_size`,
//! `search`) so every view can be bookmarked or shared.

pub mod app;
pub mod components;
pub mod config;
pub mod core;
pub mod models;
pub mod utils;

use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Mount the browser into the `#app` element, or the body when missing.
pub fn mount() {
    console_error_panic_hook::set_once();

    match document().get_element_by_id(config::MOUNT_ELEMENT_ID) {
        Some(root) => mount_to(root.unchecked_into::<web_sys::HtmlElement>(), app::App).forget(),
        None => mount_to_body(app::App),
    }
}
