//! Pagination Bar Component
//!
//! Previous/next page, page position and page size.

use leptos::prelude::*;

use crate::commands;
use crate::config::PAGE_SIZE_OPTIONS;
use crate::context::use_app_context;
use crate::store::UiStateStoreFields;

/// Pagination controls under the table
#[component]
pub fn PaginationBar() -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;

    let page = move || store.view().read().page;
    let page_size = move || store.view().read().page_size;
    let page_count = move || store.view().read().page_count(store.total().get());

    let go_to = move |target: u32| {
        let view = store.view().get_untracked();
        commands::change_view(ctx, target, view.page_size, view.sort);
    };

    let on_size_change = move |ev| {
        let Ok(size @ 1..) = event_target_value(&ev).parse::<u32>() else { return };
        let view = store.view().get_untracked();
        // Keep the first visible row on screen
        let first_row = (view.page - 1) * view.page_size;
        commands::change_view(ctx, first_row / size + 1, size, view.sort);
    };

    view! {
        <div class="pagination-bar">
            <span class="total">{move || format!("Total {}", store.total().get())}</span>
            <button
                class="page-btn"
                disabled=move || page() <= 1
                on:click=move |_| go_to(page() - 1)
            >
                "‹"
            </button>
            <span class="page-position">{move || format!("{} / {}", page(), page_count())}</span>
            <button
                class="page-btn"
                disabled=move || page() >= page_count()
                on:click=move |_| go_to(page() + 1)
            >
                "›"
            </button>
            <select class="page-size" on:change=on_size_change>
                // A configured size outside the standard options still gets an entry
                {move || {
                    store.view().read().page_size_choices(PAGE_SIZE_OPTIONS).into_iter().map(|size| view! {
                        <option value=size.to_string() prop:selected=move || page_size() == size>
                            {format!("{} / page", size)}
                        </option>
                    }).collect_view()
                }}
            </select>
        </div>
    }
}
