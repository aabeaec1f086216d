//! Record Table Component
//!
//! Rows of the current page with sortable headers, row selection and
//! per-row edit/delete actions.

use leptos::prelude::*;

use crate::commands;
use crate::components::RowDeleteButton;
use crate::context::use_app_context;
use crate::models::{Record, RecordId, Sort, SortField, SortOrder};
use crate::store::UiStateStoreFields;

/// The admin table
#[component]
pub fn RecordTable(
    selected: ReadSignal<Vec<RecordId>>,
    set_selected: WriteSignal<Vec<RecordId>>,
    #[prop(into)] on_edit: Callback<Record>,
) -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;

    let all_selected = move || {
        let rows = store.rows().read();
        let selected = selected.read();
        !rows.is_empty() && rows.iter().all(|r| selected.contains(&r.id))
    };

    let toggle_all = move |ev| {
        if event_target_checked(&ev) {
            set_selected.set(store.rows().read_untracked().iter().map(|r| r.id).collect());
        } else {
            set_selected.set(Vec::new());
        }
    };

    let table_class = move || {
        if store.loading().get() { "record-table loading" } else { "record-table" }
    };

    view! {
        <div class=table_class>
            <table>
                <thead>
                    <tr>
                        <th class="select-col">
                            <input type="checkbox" prop:checked=all_selected on:change=toggle_all />
                        </th>
                        <th class="order-col">"#"</th>
                        <SortHeader field=SortField::Id label="ID" />
                        <SortHeader field=SortField::Name label="Name" />
                        <SortHeader field=SortField::Reviews label="Reviews" />
                        <SortHeader field=SortField::StartDate label="Start Date" />
                        <th>"Picture"</th>
                        <th>"Action"</th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || store.rows().get().into_iter().enumerate()
                        key=|(index, record)| {
                            // Every displayed field, so edits re-render the row
                            (
                                *index,
                                record.id,
                                record.name.clone(),
                                record.reviews,
                                record.start_date,
                                record.picture.clone(),
                            )
                        }
                        children=move |(index, record)| {
                            let id = record.id;
                            let is_selected = move || selected.read().contains(&id);
                            let on_check = move |ev| {
                                let checked = event_target_checked(&ev);
                                set_selected.update(|ids| {
                                    if !checked {
                                        ids.retain(|x| *x != id);
                                    } else if !ids.contains(&id) {
                                        ids.push(id);
                                    }
                                });
                            };
                            let edit_record = record.clone();

                            view! {
                                <tr class=move || if is_selected() { "selected" } else { "" }>
                                    <td class="select-col">
                                        <input type="checkbox" prop:checked=is_selected on:change=on_check />
                                    </td>
                                    <td class="order-col">{index + 1}</td>
                                    <td>{record.id}</td>
                                    <td>{record.name.clone()}</td>
                                    <td class="text-right">{record.reviews}</td>
                                    <td>{record.start_date_text()}</td>
                                    <td>
                                        <a href=record.picture.clone() target="_blank" rel="noopener noreferrer">
                                            {record.picture.clone()}
                                        </a>
                                    </td>
                                    <td class="actions">
                                        <button class="edit-btn" on:click=move |_| on_edit.run(edit_record.clone())>
                                            "Edit"
                                        </button>
                                        <RowDeleteButton id=id name=record.name.clone() />
                                    </td>
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>
            <Show when=move || store.rows().read().is_empty() && !store.loading().get()>
                <div class="empty">"No data"</div>
            </Show>
        </div>
    }
}

/// Column header that cycles the sort on click
#[component]
fn SortHeader(field: SortField, label: &'static str) -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;

    let indicator = move || match Sort::order_for(store.view().read().sort, field) {
        Some(SortOrder::Ascend) => "▲",
        Some(SortOrder::Descend) => "▼",
        None => "",
    };

    let on_click = move |_| {
        let view = store.view().get_untracked();
        commands::change_view(ctx, view.page, view.page_size, Sort::toggled(view.sort, field));
    };

    view! {
        <th class="sortable" on:click=on_click>
            {label}
            <span class="sort-indicator">{indicator}</span>
        </th>
    }
}
