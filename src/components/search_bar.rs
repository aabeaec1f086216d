//! Search Bar Component
//!
//! Column select, search text and clear button.

use leptos::prelude::*;

use crate::commands;
use crate::context::use_app_context;
use crate::models::SearchColumn;
use crate::store::UiStateStoreFields;

/// Search bar above the table
#[component]
pub fn SearchBar() -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;

    // Text being typed; the controller only sees it on submit
    let (text, set_text) = signal(store.view().read_untracked().search.clone());

    let selected_column = move || {
        store.view().read().search_column.map(|c| c.as_str()).unwrap_or_default().to_string()
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        commands::set_search(ctx, text.get());
    };

    let on_clear = move |_| {
        set_text.set(String::new());
        commands::clear_search(ctx);
    };

    view! {
        <form class="search-bar" on:submit=on_submit>
            <select
                class="search-column"
                on:change=move |ev| {
                    let column = SearchColumn::parse(&event_target_value(&ev));
                    commands::set_search_column(ctx, column);
                }
            >
                <option value="" prop:selected=move || selected_column().is_empty()>"select"</option>
                {SearchColumn::ALL.into_iter().map(|column| view! {
                    <option
                        value=column.as_str()
                        prop:selected=move || selected_column() == column.as_str()
                    >
                        {column.label()}
                    </option>
                }).collect_view()}
            </select>
            <input
                type="text"
                class="search-input"
                placeholder="Search"
                prop:value=move || text.get()
                on:input=move |ev| set_text.set(event_target_value(&ev))
            />
            <button type="submit" class="search-btn">"Search"</button>
            <button type="button" class="clear-btn" on:click=on_clear>"Clear"</button>
        </form>
    }
}
