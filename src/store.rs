//! Global Board Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. Components
//! dispatch through the `store_*` helpers, which apply the reducers from
//! `board.rs` and log what happened.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::board;
use crate::error::BoardResult;
use crate::models::{ListChanges, Task, TaskChanges, TaskList};

/// Board state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct BoardState {
    /// Lists in display order
    pub lists: Vec<TaskList>,
}

impl BoardState {
    /// Board with the default three columns
    pub fn new() -> Self {
        let mut lists = Vec::new();
        for title in ["To Do", "In Progress", "Done"] {
            board::create_list(&mut lists, title);
        }
        Self { lists }
    }
}

/// Type alias for the store
pub type BoardStore = Store<BoardState>;

/// Get the board store from context
pub fn use_board_store() -> BoardStore {
    expect_context::<BoardStore>()
}

fn report<T>(action: &str, result: BoardResult<T>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(e) => {
            tracing::warn!(error = %e, "{} ignored", action);
            None
        }
    }
}

// ========================
// Store Helper Functions
// ========================

pub fn store_create_list(store: &BoardStore, title: &str) {
    let id = board::create_list(&mut store.lists().write(), title);
    tracing::info!(list = %id, "list created");
}

pub fn store_edit_list(store: &BoardStore, list_id: &str, changes: ListChanges) {
    let result = board::edit_list(&mut store.lists().write(), list_id, changes);
    if report("edit_list", result).is_some() {
        tracing::info!(list = %list_id, "list edited");
    }
}

pub fn store_create_task(store: &BoardStore, list_id: &str, text: &str, pomodoros: u32) {
    let result = board::create_task(&mut store.lists().write(), list_id, text, pomodoros);
    if let Some(id) = report("create_task", result) {
        tracing::info!(task = %id, list = %list_id, pomodoros, "task created");
    }
}

pub fn store_edit_task(store: &BoardStore, task_id: &str, changes: TaskChanges) {
    let result = board::edit_task(&mut store.lists().write(), task_id, changes);
    if report("edit_task", result).is_some() {
        tracing::info!(task = %task_id, "task edited");
    }
}

pub fn store_delete_task(store: &BoardStore, task_id: &str) {
    let result = board::delete_task(&mut store.lists().write(), task_id);
    if report("delete_task", result).is_some() {
        tracing::info!(task = %task_id, "task deleted");
    }
}

pub fn store_move_task(store: &BoardStore, task_id: &str, to_list_id: &str, index: usize) {
    let result = board::move_task(&mut store.lists().write(), task_id, to_list_id, index);
    if report("move_task", result).is_some() {
        tracing::info!(task = %task_id, list = %to_list_id, index, "task moved");
    }
}

/// Current snapshot of a task, tracked
pub fn store_find_task(store: &BoardStore, task_id: &str) -> Option<Task> {
    store.lists().with(|lists| board::find_task(lists, task_id).cloned())
}
