//! Task Card Component
//!
//! A card on the board. Shows the task text and pomodoro count, or an editor
//! for both while editing. Editing ends on save, Enter, or a click anywhere
//! outside the card.

use leptos::html;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

use leptos_dragdrop::{is_dragging, make_on_mousedown, DndSignals};

use crate::components::outside_click::{node_contains, use_activation_region, use_is_active};
use crate::components::{AutoGrowingTextEditor, PomodoroCounter};
use crate::interaction::EditSession;
use crate::models::Task;

/// A single draggable card
///
/// # Arguments
/// * `task` - current record; the card re-reads it when the store changes
/// * `on_save_card_text` - called with `(text, pomodoro_count)` on commit
/// * `on_delete_card` - called by the delete action
/// * `on_click` - clicks on the card body while not editing
#[component]
pub fn TaskCard(
    task: Signal<Task>,
    dnd: DndSignals,
    #[prop(into)] on_save_card_text: Callback<(String, u32)>,
    #[prop(into)] on_delete_card: Callback<()>,
    #[prop(optional, into)] on_click: Option<Callback<web_sys::MouseEvent>>,
) -> impl IntoView {
    let card_ref = NodeRef::<html::Div>::new();
    let session = RwSignal::new(EditSession::for_record());
    let is_editing = use_is_active(session);
    let editing = move || is_editing.get();

    use_activation_region(session, move |node| {
        node_contains(card_ref.get_untracked().map(|el| el.unchecked_into()), node)
    });

    let id = task.with_untracked(|t| t.id.clone());
    let on_mousedown = make_on_mousedown(dnd, id.clone());

    let commit = move |keep_open: bool| -> bool {
        match session.try_update(|s| s.commit(keep_open)).flatten() {
            Some(committed) => {
                on_save_card_text.run((committed.text, committed.pomodoros));
                true
            }
            None => false,
        }
    };

    let start_editing = move |ev: web_sys::MouseEvent| {
        ev.stop_propagation();
        let (text, count) = task.with_untracked(|t| (t.text.clone(), t.pomodoro_count));
        tracing::debug!(count, "card enters edit mode");
        session.update(|s| s.open(&text, count));
    };

    let card_click = move |ev: web_sys::MouseEvent| {
        if session.with_untracked(|s| s.is_active()) || dnd.drag_just_ended.get_untracked() {
            return;
        }
        if let Some(on_click) = on_click {
            on_click.run(ev);
        }
    };

    let card_class = move || {
        let mut c = String::from("task-card");
        if editing() { c.push_str(" focused"); }
        if is_dragging(&dnd, &id) { c.push_str(" dragging"); }
        c
    };

    view! {
        <div
            class=card_class
            node_ref=card_ref
            on:mousedown=move |ev| {
                if !session.with_untracked(|s| s.is_active()) { on_mousedown(ev) }
            }
            on:click=card_click
        >
            <Show
                when=editing
                fallback=move || view! {
                    <p class=move || if task.with(|t| t.done) { "card-text done" } else { "card-text" }>
                        {move || task.with(|t| t.text.clone())}
                    </p>
                }
            >
                <AutoGrowingTextEditor
                    session=session
                    class="card-textarea"
                    on_enter=move |keep_open: bool| commit(keep_open)
                />
            </Show>

            <Show
                when=editing
                fallback=move || view! {
                    <div class="card-actions">
                        <span class="pomodoro-info" title="Pomodoros">
                            {move || task.with(|t| t.pomodoro_count)}
                            " 🍅"
                        </span>
                        <button class="card-edit-btn" title="Edit" on:click=start_editing>"✎"</button>
                        <button
                            class="card-delete-btn"
                            title="Delete"
                            on:click=move |ev| {
                                ev.stop_propagation();
                                on_delete_card.run(());
                            }
                        >
                            "🗑"
                        </button>
                    </div>
                }
            >
                <div class="card-actions editing">
                    <PomodoroCounter session=session />
                    <button
                        class="card-save-btn"
                        title="Save"
                        on:click=move |ev| {
                            ev.stop_propagation();
                            commit(false);
                        }
                    >
                        "Save"
                    </button>
                </div>
            </Show>
        </div>
    }
}
