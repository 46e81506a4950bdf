//! Pomodoro Board App
//!
//! Board on the left, task detail panel on the right.

use leptos::html;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::components::outside_click::{node_contains, use_target_outside};
use crate::components::{BoardView, TaskDetail};
use crate::context::AppContext;
use crate::settings::BoardSettings;
use crate::store::{BoardState, BoardStore};

#[component]
pub fn App() -> impl IntoView {
    let settings = BoardSettings::load();
    tracing::info!(?settings, "settings loaded");
    provide_context(settings);

    let store: BoardStore = BoardStore::new(BoardState::new());
    provide_context(store);

    // Detail panel closes on clicks outside it
    let detail_ref = NodeRef::<html::Aside>::new();
    let detail_open = use_target_outside(move |node| {
        node_contains(detail_ref.get_untracked().map(|el| el.unchecked_into()), node)
    });
    let selected_task = signal::<Option<String>>(None);

    provide_context(AppContext::new(selected_task, detail_open));

    view! {
        <div class="app-layout">
            <main class="main-content">
                <h1>"Pomodoro Board"</h1>
                <BoardView />
            </main>

            <TaskDetail panel_ref=detail_ref />
        </div>
    }
}
