//! Selection Bar Component
//!
//! Selected row count and bulk delete.

use leptos::prelude::*;

use crate::commands;
use crate::context::use_app_context;
use crate::models::RecordId;
use crate::store::UiStateStoreFields;

#[component]
pub fn SelectionBar(
    selected: ReadSignal<Vec<RecordId>>,
    set_selected: WriteSignal<Vec<RecordId>>,
) -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;
    let (deleting, set_deleting) = signal(false);

    let delete_selected = move |_| {
        let ids = selected.get();
        if ids.is_empty() { return; }
        set_deleting.set(true);
        commands::delete_many(ctx, ids, move |report| {
            // Failed ids stay selected so they can be retried
            set_selected.update(|ids| ids.retain(|id| !report.deleted.contains(id)));
            set_deleting.set(false);
        });
    };

    view! {
        <div class="selection-bar">
            <span class="selection-count">
                {move || format!("{} / {} rows selected", selected.read().len(), store.rows().read().len())}
            </span>
            <button
                class="danger-btn"
                disabled=move || selected.read().is_empty() || deleting.get()
                on:click=delete_selected
            >
                "Delete Selected"
            </button>
        </div>
    }
}
