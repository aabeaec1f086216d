//! Record Form Modal Component
//!
//! Add/edit dialog. Validation happens in the controller; messages show up
//! as toasts and the dialog stays open until a save succeeds.

use leptos::prelude::*;

use crate::commands;
use crate::context::use_app_context;
use crate::models::{Record, RecordForm};

#[component]
pub fn RecordFormModal(
    open: ReadSignal<bool>,
    set_open: WriteSignal<bool>,
    /// Record being edited (None = adding)
    editing: ReadSignal<Option<Record>>,
) -> impl IntoView {
    let ctx = use_app_context();
    let (form, set_form) = signal(RecordForm::default());
    let (saving, set_saving) = signal(false);

    // Reset the form each time the modal opens
    Effect::new(move |_| {
        if open.get() {
            let values = editing
                .get_untracked()
                .map(|record| RecordForm::from_record(&record))
                .unwrap_or_default();
            set_form.set(values);
        }
    });

    let title = move || if editing.read().is_some() { "Edit Item" } else { "Add Item" };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if saving.get_untracked() { return; }
        set_saving.set(true);
        commands::save(ctx, form.get_untracked(), editing.get_untracked(), move |saved| {
            set_saving.set(false);
            if saved {
                set_open.set(false);
            }
        });
    };

    view! {
        <Show when=move || open.get()>
            <div class="modal-backdrop" on:click=move |_| set_open.set(false)>
                <div class="modal" on:click=|ev| ev.stop_propagation()>
                    <h2 class="modal-title">{title}</h2>
                    <form class="record-form" novalidate=true on:submit=on_submit>
                        <label class="form-item">
                            <span class="required">"Name"</span>
                            <input
                                type="text"
                                prop:value=move || form.read().name.clone()
                                on:input=move |ev| {
                                    let value = event_target_value(&ev);
                                    set_form.update(|f| f.name = value);
                                }
                            />
                        </label>
                        <label class="form-item">
                            <span class="required">"Reviews"</span>
                            <input
                                type="number"
                                min="0"
                                prop:value=move || form.read().reviews.clone()
                                on:input=move |ev| {
                                    let value = event_target_value(&ev);
                                    set_form.update(|f| f.reviews = value);
                                }
                            />
                        </label>
                        <label class="form-item">
                            <span class="required">"Start Date"</span>
                            <input
                                type="date"
                                prop:value=move || form.read().start_date.clone()
                                on:input=move |ev| {
                                    let value = event_target_value(&ev);
                                    set_form.update(|f| f.start_date = value);
                                }
                            />
                        </label>
                        <label class="form-item">
                            <span class="required">"Picture"</span>
                            <input
                                type="url"
                                placeholder="https://"
                                prop:value=move || form.read().picture.clone()
                                on:input=move |ev| {
                                    let value = event_target_value(&ev);
                                    set_form.update(|f| f.picture = value);
                                }
                            />
                        </label>
                        <div class="modal-actions">
                            <button type="button" on:click=move |_| set_open.set(false)>"Cancel"</button>
                            <button type="submit" class="primary-btn" disabled=move || saving.get()>
                                "OK"
                            </button>
                        </div>
                    </form>
                </div>
            </div>
        </Show>
    }
}
