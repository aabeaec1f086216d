//! Record Admin App
//!
//! Toolbar (search, selection), table, pagination, add button and the
//! add/edit modal.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::commands;
use crate::components::{
    LogPanel, PaginationBar, RecordFormModal, RecordTable, SearchBar, SelectionBar, ToastStack,
};
use crate::context::AppContext;
use crate::models::{Record, RecordId};
use crate::store::{UiState, UiStateStoreFields};

#[component]
pub fn App() -> impl IntoView {
    let store = Store::new(UiState::default());
    let ctx = AppContext::new(store);
    provide_context(ctx);

    // State
    let (selected, set_selected) = signal(Vec::<RecordId>::new());
    let (modal_open, set_modal_open) = signal(false);
    let (editing, set_editing) = signal::<Option<Record>>(None);

    // Load the first page on mount
    Effect::new(move |_| {
        commands::fetch(ctx);
    });

    // Selection only covers rows on screen
    Effect::new(move |_| {
        let rows = store.rows().read();
        set_selected.update(|ids| ids.retain(|id| rows.iter().any(|r| r.id == *id)));
    });

    let open_add = move |_| {
        set_editing.set(None);
        set_modal_open.set(true);
    };

    let open_edit = move |record: Record| {
        set_editing.set(Some(record));
        set_modal_open.set(true);
    };

    view! {
        <div class="admin-layout">
            <div class="toolbar">
                <SearchBar />
                <SelectionBar selected=selected set_selected=set_selected />
            </div>

            <RecordTable selected=selected set_selected=set_selected on_edit=open_edit />

            <div class="table-footer">
                <button class="add-btn" on:click=open_add>"+ Add Item"</button>
                <PaginationBar />
            </div>

            <RecordFormModal open=modal_open set_open=set_modal_open editing=editing />
            <ToastStack />
            <LogPanel />
        </div>
    }
}
