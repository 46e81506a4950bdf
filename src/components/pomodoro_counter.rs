//! Pomodoro Counter Component
//!
//! `-` / number / `+` control over the counter of an edit session.

use leptos::prelude::*;

use crate::interaction::EditSession;

#[component]
pub fn PomodoroCounter(session: RwSignal<EditSession>) -> impl IntoView {
    let count = move || session.with(|s| s.counter().value());

    view! {
        <div class="pomodoro-counter" on:click=|ev| ev.stop_propagation()>
            <span class="pomodoro-label">"Pomodoro"</span>
            <button
                type="button"
                class="pomodoro-btn decrement"
                on:click=move |ev| {
                    ev.prevent_default();
                    session.update(|s| s.counter_mut().decrement());
                }
            >
                "-"
            </button>
            <input
                type="number"
                class="pomodoro-input"
                min="0"
                prop:value=move || count().to_string()
                on:input=move |ev| {
                    let raw = event_target_value(&ev);
                    // Invalid input is dropped; the field snaps back on next render
                    session.update(|s| {
                        s.counter_mut().set_from_input(&raw);
                    });
                }
            />
            <button
                type="button"
                class="pomodoro-btn increment"
                on:click=move |ev| {
                    ev.prevent_default();
                    session.update(|s| s.counter_mut().increment());
                }
            >
                "+"
            </button>
        </div>
    }
}
