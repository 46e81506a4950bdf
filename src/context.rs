//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Task shown in the detail panel
    pub selected_task: ReadSignal<Option<String>>,
    set_selected_task: WriteSignal<Option<String>>,
    /// Whether the detail panel is open - read
    pub detail_open: ReadSignal<bool>,
    /// Whether the detail panel is open - write
    set_detail_open: WriteSignal<bool>,
}

impl AppContext {
    pub fn new(
        selected_task: (ReadSignal<Option<String>>, WriteSignal<Option<String>>),
        detail_open: (ReadSignal<bool>, WriteSignal<bool>),
    ) -> Self {
        Self {
            selected_task: selected_task.0,
            set_selected_task: selected_task.1,
            detail_open: detail_open.0,
            set_detail_open: detail_open.1,
        }
    }

    /// Show a task in the detail panel
    pub fn open_task(&self, task_id: String) {
        self.set_selected_task.set(Some(task_id));
        self.set_detail_open.set(true);
    }

    pub fn close_detail(&self) {
        self.set_detail_open.set(false);
    }
}

pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
