//! File table component.
//!
//! Renders the rows of the last completed draw. Rows are rebuilt on every
//! draw, so their click handlers are bound afresh each time.

use leptos::prelude::*;
use leptos_icons::Icon;

use super::DownloadButton;
use crate::app::AppContext;
use crate::components::icons as ic;
use crate::core::table::{NameCell, Row};
use crate::utils::dom::is_plain_click;

#[component]
pub fn FileTable() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let is_empty = Signal::derive(move || ctx.table.with(|t| t.rows.is_empty()));

    view! {
        <div class="table-responsive position-relative">
            <Show when=move || ctx.loading.get()>
                <div class="position-absolute top-50 start-50 translate-middle" role="status">
                    <Icon icon=ic::LOADING />
                    " Processing..."
                </div>
            </Show>
            <table class="table table-hover align-middle">
                <thead class="table-light">
                    <tr>
                        <th scope="col">"Name"</th>
                        <th scope="col">"Created at"</th>
                        <th scope="col">"Size"</th>
                        <th scope="col">"Download"</th>
                    </tr>
                </thead>
                <tbody>
                    <Show
                        when=move || !is_empty.get()
                        fallback=|| view! {
                            <tr>
                                <td colspan="4" class="text-center text-muted">
                                    "No data available in table"
                                </td>
                            </tr>
                        }
                    >
                        {move || {
                            ctx.table.with(|t| {
                                t.rows
                                    .iter()
                                    .cloned()
                                    .map(|row| view! { <FileRow row=row /> })
                                    .collect_view()
                            })
                        }}
                    </Show>
                </tbody>
            </table>
        </div>
    }
}

#[component]
fn FileRow(row: Row) -> impl IntoView {
    let Row {
        name,
        created_at,
        size,
        download,
        ..
    } = row;

    view! {
        <tr>
            <td><NameCellView cell=name /></td>
            <td>{created_at}</td>
            <td><span>{size}</span></td>
            <td>
                <DownloadButton target=download class="btn-outline-dark" />
            </td>
        </tr>
    }
}

/// Name column: folder link or plain file name.
#[component]
fn NameCellView(cell: NameCell) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    match cell {
        NameCell::File { label } => view! { <span>{label}</span> }.into_any(),
        NameCell::Folder {
            label,
            route_path,
            href,
        } => {
            let folder = format!("/{route_path}");
            let on_click = move |ev: leptos::ev::MouseEvent| {
                if is_plain_click(&ev) {
                    ev.prevent_default();
                    ctx.open_route(&route_path);
                }
            };

            view! {
                <a
                    href=href
                    class="btn-folder icon-link icon-link-hover link-opacity-50-hover"
                    data-folder=folder
                    on:click=on_click
                >
                    <Icon icon=ic::FOLDER />
                    {label}
                </a>
            }
            .into_any()
        }
    }
}
