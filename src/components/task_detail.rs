//! Task Detail Panel
//!
//! Side panel for the card that was clicked: completion toggle and a
//! description editor with Markdown preview.

use leptos::html;
use leptos::prelude::*;

use crate::context::use_app_context;
use crate::markdown::render_description;
use crate::models::TaskChanges;
use crate::store::{store_edit_task, store_find_task, use_board_store};

/// Detail panel; `panel_ref` is the region its outside-click tracker watches
#[component]
pub fn TaskDetail(panel_ref: NodeRef<html::Aside>) -> impl IntoView {
    let store = use_board_store();
    let ctx = use_app_context();

    let task = Memo::new(move |_| {
        ctx.selected_task.get().and_then(|id| store_find_task(&store, &id))
    });

    // Draft follows the selected task
    let (draft, set_draft) = signal(String::new());
    Effect::new(move |_| {
        let description = task.with(|t| t.as_ref().map(|t| t.description.clone()));
        set_draft.set(description.unwrap_or_default());
    });

    // Saved on every keystroke
    let save_description = move |description: String| {
        set_draft.set(description.clone());
        let Some(id) = task.with_untracked(|t| t.as_ref().map(|t| t.id.clone())) else {
            return;
        };
        store_edit_task(&store, &id, TaskChanges { description: Some(description), ..Default::default() });
    };

    let toggle_done = move |_| {
        let Some((id, done)) = task.with_untracked(|t| t.as_ref().map(|t| (t.id.clone(), t.done))) else {
            return;
        };
        store_edit_task(&store, &id, TaskChanges { done: Some(!done), ..Default::default() });
    };

    let visible = move || ctx.detail_open.get() && task.with(|t| t.is_some());
    let rendered_html = move || render_description(&draft.get());

    view! {
        <aside class=move || if visible() { "task-detail open" } else { "task-detail" } node_ref=panel_ref>
            <Show when=visible>
                <div class="task-detail-header">
                    <h2 class=move || if task.with(|t| t.as_ref().is_some_and(|t| t.done)) { "detail-title done" } else { "detail-title" }>
                        {move || task.with(|t| t.as_ref().map(|t| t.text.clone()).unwrap_or_default())}
                    </h2>
                    <button class="close-btn" on:click=move |_| ctx.close_detail()>"×"</button>
                </div>

                <label class="detail-done">
                    <input
                        type="checkbox"
                        prop:checked=move || task.with(|t| t.as_ref().is_some_and(|t| t.done))
                        on:change=toggle_done
                    />
                    "Done"
                </label>

                <p class="detail-pomodoros">
                    {move || task.with(|t| t.as_ref().map(|t| t.pomodoro_count).unwrap_or(0))}
                    " pomodoros"
                </p>

                <div class="detail-description">
                    <textarea
                        class="description-textarea"
                        placeholder="Add a more detailed description..."
                        prop:value=move || draft.get()
                        on:input=move |ev| save_description(event_target_value(&ev))
                    ></textarea>
                    <div class="description-preview" inner_html=rendered_html></div>
                </div>
            </Show>
        </aside>
    }
}
