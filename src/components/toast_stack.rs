//! Toast Stack Component
//!
//! Success and error notices from the controller. Each toast removes itself
//! after a few seconds (see `StoreListener`).

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::store::{store_remove_toast, UiStateStoreFields};

#[component]
pub fn ToastStack() -> impl IntoView {
    let store = use_app_context().store;

    view! {
        <div class="toast-stack">
            <For
                each=move || store.toasts().get()
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    let class = if toast.notice.is_error() { "toast error" } else { "toast success" };
                    view! {
                        <div class=class on:click=move |_| store_remove_toast(&store, id)>
                            {toast.notice.message.clone()}
                        </div>
                    }
                }
            />
        </div>
    }
}
