//! Board View Component
//!
//! All lists side by side plus the "add another list" form. Owns the
//! drag-and-drop state shared by every card.

use leptos::prelude::*;

use leptos_dragdrop::*;

use crate::components::{TaskFormButton, TaskListColumn};
use crate::store::{store_create_list, store_move_task, use_board_store, BoardStateStoreFields};

#[component]
pub fn BoardView() -> impl IntoView {
    let store = use_board_store();

    let dnd = create_dnd_signals();
    bind_global_mouseup(dnd, move |dragged_id, slot| {
        tracing::debug!(task = %dragged_id, list = %slot.list_id, index = slot.index, "card dropped");
        store_move_task(&store, &dragged_id, &slot.list_id, slot.index);
    });

    let list_ids = move || {
        store.lists().with(|lists| lists.iter().map(|l| l.id.clone()).collect::<Vec<_>>())
    };

    view! {
        <div class=move || if dnd.dragging_id.with(|d| d.is_some()) { "board dragging" } else { "board" }>
            <For
                each=list_ids
                key=|id| id.clone()
                children=move |id| {
                    let fallback = store.lists().with_untracked(|lists| {
                        lists.iter().find(|l| l.id == id).cloned()
                    });
                    let Some(fallback) = fallback else {
                        return ().into_any();
                    };
                    let list = Signal::derive(move || {
                        store.lists().with(|lists| lists.iter().find(|l| l.id == id).cloned())
                            .unwrap_or_else(|| fallback.clone())
                    });
                    view! { <TaskListColumn list=list dnd=dnd /> }.into_any()
                }
            />

            <div class="add-list">
                <TaskFormButton
                    for_list=true
                    on_submit=move |(title, _): (String, u32)| store_create_list(&store, &title)
                />
            </div>
        </div>
    }
}
