//! Download progress panel and error banner.

use leptos::prelude::*;

use crate::app::AppContext;
use crate::utils::format::format_percent;

/// Progress bar for the tracked download, followed by the error banner.
#[component]
pub fn DownloadProgress() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let download = ctx.download;

    let visible = Signal::derive(move || download.with(|d| d.panel_visible()));
    let percent = Signal::derive(move || download.with(|d| d.percent()));
    let label = Signal::derive(move || download.with(|d| d.label().to_string()));
    let error = Signal::derive(move || download.with(|d| d.error().map(String::from)));

    view! {
        <div
            id="progress-container"
            class="mb-3"
            style:display=move || if visible.get() { "block" } else { "none" }
        >
            <div id="filename" class="small mb-1">{label}</div>
            <div
                id="progress-bar"
                class="progress"
                role="progressbar"
                aria-label="Download progress"
                aria-valuemin="0"
                aria-valuemax="100"
                aria-valuenow=move || format!("{:.0}", percent.get())
            >
                <div
                    class="progress-bar progress-bar-striped progress-bar-animated"
                    style:width=move || format!("{}%", percent.get())
                >
                    {move || format_percent(percent.get())}
                </div>
            </div>
        </div>

        {move || error.get().map(|message| view! {
            <div class="alert alert-danger alert-dismissible fade show" role="alert">
                {message}
                <button
                    type="button"
                    class="btn-close"
                    aria-label="Close"
                    on:click=move |_| download.update(|d| d.dismiss_error())
                ></button>
            </div>
        })}
    }
}
