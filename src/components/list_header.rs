//! List Header Component
//!
//! Column title with inline rename and a priority toggle.

use leptos::html;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::components::outside_click::{node_contains, use_activation_region, use_is_active};
use crate::components::AutoGrowingTextEditor;
use crate::interaction::EditSession;
use crate::models::{ListChanges, TaskList};
use crate::store::{store_edit_list, use_board_store};

#[component]
pub fn ListHeader(list: Signal<TaskList>) -> impl IntoView {
    let store = use_board_store();
    let header_ref = NodeRef::<html::Div>::new();
    let session = RwSignal::new(EditSession::for_record());
    let is_renaming = use_is_active(session);
    let renaming = move || is_renaming.get();

    use_activation_region(session, move |node| {
        node_contains(header_ref.get_untracked().map(|el| el.unchecked_into()), node)
    });

    let list_id = list.with_untracked(|l| l.id.clone());

    let rename = {
        let list_id = list_id.clone();
        move |keep_open: bool| -> bool {
            match session.try_update(|s| s.commit(keep_open)).flatten() {
                Some(committed) => {
                    let changes = ListChanges { title: Some(committed.text), ..Default::default() };
                    store_edit_list(&store, &list_id, changes);
                    true
                }
                None => false,
            }
        }
    };

    let toggle_priority = move |_| {
        let priority = !list.with_untracked(|l| l.priority);
        store_edit_list(&store, &list_id, ListChanges { priority: Some(priority), ..Default::default() });
    };

    view! {
        <div class="list-header" node_ref=header_ref>
            <Show
                when=renaming
                fallback=move || view! {
                    <h2
                        class="list-title"
                        title="Rename"
                        on:click=move |_| {
                            let title = list.with_untracked(|l| l.title.clone());
                            session.update(|s| s.open(&title, 0));
                        }
                    >
                        {move || list.with(|l| l.title.clone())}
                    </h2>
                }
            >
                <AutoGrowingTextEditor
                    session=session
                    single_line=true
                    class="list-title-input"
                    on_enter=rename.clone()
                />
            </Show>
            <button
                class=move || if list.with(|l| l.priority) { "priority-btn active" } else { "priority-btn" }
                title="Priority"
                on:click=toggle_priority
            >
                "★"
            </button>
        </div>
    }
}
