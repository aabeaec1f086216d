//! Log Panel Component
//!
//! Collapsible view of the lines kept by the rolling logger, newest first.

use leptos::prelude::*;

#[component]
pub fn LogPanel() -> impl IntoView {
    let (open, set_open) = signal(false);
    let (lines, set_lines) = signal(Vec::<String>::new());

    let refresh = move || set_lines.set(rolling_logger::recent_lines());

    let toggle = move |_| {
        let next = !open.get_untracked();
        if next {
            refresh();
        }
        set_open.set(next);
    };

    view! {
        <div class="log-panel">
            <button class="log-toggle" on:click=toggle>
                {move || if open.get() { "Hide log" } else { "Show log" }}
            </button>
            <Show when=move || open.get()>
                <div class="log-body">
                    <button class="log-refresh" on:click=move |_| refresh()>"Refresh"</button>
                    <pre class="log-lines">
                        {move || {
                            lines
                                .get()
                                .into_iter()
                                .rev()
                                .map(|line| view! { <div class="log-line">{line}</div> })
                                .collect_view()
                        }}
                    </pre>
                </div>
            </Show>
        </div>
    }
}
