//! Download icon button shared by table rows and the path bar.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::models::DownloadTarget;

/// Icon button that starts a download of `target`.
///
/// Disabled while any download is tracked.
#[component]
pub fn DownloadButton(
    target: DownloadTarget,
    /// Extra Bootstrap classes
    #[prop(optional, into)]
    class: String,
) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let disabled = Signal::derive(move || ctx.download.with(|d| d.buttons_disabled()));
    let path = target.path.clone();
    let is_dir = target.is_dir;
    let title = if is_dir {
        "Download folder"
    } else {
        "Download file"
    };

    let on_click = move |_: leptos::ev::MouseEvent| {
        if !disabled.get_untracked() {
            ctx.start_download(target.clone());
        }
    };

    view! {
        <button
            type="button"
            class=format!("btn-download btn border border-0 {}", class)
            data-path=path
            data-is-dir=is_dir.to_string()
            title=title
            aria-label=title
            disabled=disabled
            on:click=on_click
        >
            <Icon icon=ic::DOWNLOAD />
        </button>
    }
}
