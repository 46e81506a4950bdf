//! Frontend Models
//!
//! Board records and the partial-edit payloads the store accepts.

use serde::{Deserialize, Serialize};

/// A single card on the board
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    #[serde(rename = "_id")]
    pub id: String,
    pub text: String,
    pub description: String,
    pub done: bool,
    #[serde(rename = "pomodoroCount")]
    pub pomodoro_count: u32,
}

impl Task {
    /// Fresh, not-done task with an empty description
    pub fn new(id: String, text: String, pomodoro_count: u32) -> Self {
        Self {
            id,
            text,
            description: String::new(),
            done: false,
            pomodoro_count,
        }
    }

    /// Merge the provided fields; `None` leaves a field untouched
    pub fn apply(&mut self, changes: TaskChanges) {
        if let Some(text) = changes.text {
            self.text = text;
        }
        if let Some(description) = changes.description {
            self.description = description;
        }
        if let Some(done) = changes.done {
            self.done = done;
        }
        if let Some(count) = changes.pomodoro_count {
            self.pomodoro_count = count;
        }
    }
}

/// An ordered column of tasks
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskList {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub cards: Vec<Task>,
    pub priority: bool,
}

impl TaskList {
    pub fn new(id: String, title: String) -> Self {
        Self {
            id,
            title,
            cards: Vec::new(),
            priority: false,
        }
    }

    pub fn apply(&mut self, changes: ListChanges) {
        if let Some(title) = changes.title {
            self.title = title;
        }
        if let Some(priority) = changes.priority {
            self.priority = priority;
        }
    }
}

/// Editable task fields (everything except the id)
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaskChanges {
    pub text: Option<String>,
    pub description: Option<String>,
    pub done: Option<bool>,
    pub pomodoro_count: Option<u32>,
}

/// Editable list fields
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListChanges {
    pub title: Option<String>,
    pub priority: Option<bool>,
}
