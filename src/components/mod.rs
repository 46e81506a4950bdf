//! UI Components
//!
//! Reusable Leptos components.

pub mod outside_click;
mod auto_grow_editor;
mod pomodoro_counter;
mod task_card;
mod task_form_button;
mod list_header;
mod task_list_column;
mod board_view;
mod task_detail;

pub use auto_grow_editor::AutoGrowingTextEditor;
pub use pomodoro_counter::PomodoroCounter;
pub use task_card::TaskCard;
pub use task_form_button::TaskFormButton;
pub use list_header::ListHeader;
pub use task_list_column::{DropZone, TaskListColumn};
pub use board_view::BoardView;
pub use task_detail::TaskDetail;
