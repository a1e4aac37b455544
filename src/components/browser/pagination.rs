//! Table toolbar (page size, search) and pagination footer.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::config::PAGE_SIZE_OPTIONS;
use crate::core::table::{PageButton, PageInfo, page_buttons};

/// Page-size selector and search box above the table.
#[component]
pub fn TableToolbar() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let length = Signal::derive(move || ctx.state.with(|s| s.grid.length));
    let search = Signal::derive(move || ctx.state.with(|s| s.grid.search.clone()));

    let on_length = move |ev: leptos::ev::Event| {
        if let Ok(size) = event_target_value(&ev).parse::<u32>() {
            ctx.set_page_size(size);
        }
    };
    let on_search = move |ev: leptos::ev::Event| {
        ctx.type_search(&event_target_value(&ev));
    };

    view! {
        <div class="row mb-2 align-items-center">
            <div class="col-sm-6">
                <label class="d-inline-flex align-items-center gap-2">
                    "Show"
                    <select
                        class="form-select form-select-sm w-auto"
                        prop:value=move || length.get().to_string()
                        on:change=on_length
                    >
                        {PAGE_SIZE_OPTIONS
                            .iter()
                            .map(|size| {
                                let size = *size;
                                view! {
                                    <option
                                        value=size.to_string()
                                        selected=move || length.get() == size
                                    >
                                        {size.to_string()}
                                    </option>
                                }
                            })
                            .collect_view()}
                    </select>
                    "entries"
                </label>
            </div>
            <div class="col-sm-6 text-sm-end">
                <label class="d-inline-flex align-items-center gap-2">
                    <Icon icon=ic::SEARCH />
                    <input
                        type="search"
                        class="form-control form-control-sm"
                        placeholder="Search"
                        aria-label="Search files"
                        prop:value=search
                        on:input=on_search
                    />
                </label>
            </div>
        </div>
    }
}

/// "Showing X to Y of Z entries" plus page buttons.
#[component]
pub fn Pagination() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let info = Memo::new(move |_| {
        let total = ctx.table.with(|t| t.records_total);
        ctx.state
            .with(|s| PageInfo::new(s.grid.start, s.grid.length, total))
    });

    let on_previous = move |_: leptos::ev::MouseEvent| {
        let info = info.get_untracked();
        if info.has_previous() {
            ctx.goto_page(info.page - 1);
        }
    };
    let on_next = move |_: leptos::ev::MouseEvent| {
        let info = info.get_untracked();
        if info.has_next() {
            ctx.goto_page(info.page + 1);
        }
    };

    view! {
        <div class="row align-items-center">
            <div class="col-sm-5 text-muted small" role="status" aria-live="polite">
                {move || info.get().summary()}
            </div>
            <div class="col-sm-7">
                <ul class="pagination pagination-sm justify-content-sm-end mb-0">
                    <li class=move || page_item_class(!info.get().has_previous(), false)>
                        <button type="button" class="page-link" aria-label="Previous" on:click=on_previous>
                            <Icon icon=ic::CHEVRON_LEFT />
                        </button>
                    </li>
                    {move || {
                        let info = info.get();
                        page_buttons(info.page, info.page_count)
                            .into_iter()
                            .map(|button| match button {
                                PageButton::Page(page) => {
                                    let is_current = page == info.page;
                                    view! {
                                        <li class=page_item_class(false, is_current)>
                                            <button
                                                type="button"
                                                class="page-link"
                                                aria-current=is_current.then_some("page")
                                                on:click=move |_| ctx.goto_page(page)
                                            >
                                                {page.to_string()}
                                            </button>
                                        </li>
                                    }
                                    .into_any()
                                }
                                PageButton::Ellipsis => view! {
                                    <li class="page-item disabled">
                                        <span class="page-link">"…"</span>
                                    </li>
                                }
                                .into_any(),
                            })
                            .collect_view()
                    }}
                    <li class=move || page_item_class(!info.get().has_next(), false)>
                        <button type="button" class="page-link" aria-label="Next" on:click=on_next>
                            <Icon icon=ic::CHEVRON_RIGHT />
                        </button>
                    </li>
                </ul>
            </div>
        </div>
    }
}

fn page_item_class(disabled: bool, active: bool) -> String {
    let mut class = String::from("page-item");
    if disabled {
        class.push_str(" disabled");
    }
    if active {
        class.push_str(" active");
    }
    class
}
