//! Path bar component.
//!
//! Displays the breadcrumb of the current folder with clickable segments.
//! The current folder carries a download button for the whole folder.

use leptos::prelude::*;
use leptos_icons::Icon;

use super::DownloadButton;
use crate::app::AppContext;
use crate::components::icons as ic;
use crate::core::breadcrumb::{Crumb, crumbs};
use crate::utils::dom::is_plain_click;

/// Breadcrumb bar displayed above the table.
#[component]
pub fn PathBar() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let crumbs = Memo::new(move |_| {
        let config = ctx.config.get_value();
        ctx.state
            .with(|s| crumbs(&s.nav.breadcrumb, s.grid.length, &config))
    });

    view! {
        <nav aria-label="breadcrumb">
            <ol class="breadcrumb" id="breadcrumb">
                {move || {
                    crumbs
                        .get()
                        .into_iter()
                        .enumerate()
                        .map(|(idx, crumb)| view! { <CrumbItem crumb=crumb is_root=idx == 0 /> })
                        .collect_view()
                }}
            </ol>
        </nav>
    }
}

/// One breadcrumb item (plus the folder download button when current).
#[component]
fn CrumbItem(crumb: Crumb, is_root: bool) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let Crumb {
        label,
        folder,
        href,
        download,
    } = crumb;

    let Some(href) = href else {
        return view! {
            <li class="breadcrumb-item active" aria-current="page" data-folder=folder>
                {label}
                {download.map(|target| view! {
                    " "
                    <DownloadButton target=target class="btn-sm btn-outline-secondary" />
                })}
            </li>
        }
        .into_any();
    };

    let folder_attr = folder.clone();
    let on_click = move |ev: leptos::ev::MouseEvent| {
        if is_plain_click(&ev) {
            ev.prevent_default();
            ctx.open_folder(&folder);
        }
    };

    view! {
        <li class="breadcrumb-item" data-folder=folder_attr>
            <a href=href class="text-decoration-none" on:click=on_click>
                {is_root.then(|| view! { <Icon icon=ic::HOME /> " " })}
                {label}
            </a>
        </li>
    }
    .into_any()
}
