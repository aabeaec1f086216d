//! Row Delete Button Component
//!
//! Per-row delete that asks "Delete <name>?" in place before calling the
//! controller. Clicks never reach the row underneath.

use leptos::ev::MouseEvent;
use leptos::prelude::*;

use crate::commands;
use crate::context::use_app_context;
use crate::models::RecordId;

#[derive(Clone, Copy, PartialEq, Eq)]
enum Stage {
    Idle,
    Confirming,
}

#[component]
pub fn RowDeleteButton(id: RecordId, #[prop(into)] name: String) -> impl IntoView {
    let ctx = use_app_context();
    let (stage, set_stage) = signal(Stage::Idle);
    let prompt = format!("Delete {}?", name);

    let step = move |ev: MouseEvent, next: Stage| {
        ev.stop_propagation();
        set_stage.set(next);
    };

    move || match stage.get() {
        Stage::Idle => view! {
            <button class="delete-btn" on:click=move |ev| step(ev, Stage::Confirming)>
                "Delete"
            </button>
        }
        .into_any(),
        Stage::Confirming => view! {
            <span class="delete-confirm">
                <span class="delete-confirm-text">{prompt.clone()}</span>
                <button
                    class="confirm-btn"
                    on:click=move |ev| {
                        step(ev, Stage::Idle);
                        commands::delete(ctx, id);
                    }
                >
                    "Yes"
                </button>
                <button class="cancel-btn" on:click=move |ev| step(ev, Stage::Idle)>
                    "No"
                </button>
            </span>
        }
        .into_any(),
    }
}
