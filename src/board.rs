//! Board Reducers
//!
//! Pure mutations over the ordered lists of a board. The reactive store in
//! `store.rs` applies these to its state.

use uuid::Uuid;

use crate::error::{BoardError, BoardResult};
use crate::models::{ListChanges, Task, TaskChanges, TaskList};

fn new_id() -> String {
    Uuid::new_v4().to_string()
}

fn list_mut<'a>(lists: &'a mut [TaskList], list_id: &str) -> BoardResult<&'a mut TaskList> {
    lists
        .iter_mut()
        .find(|list| list.id == list_id)
        .ok_or_else(|| BoardError::ListNotFound(list_id.to_string()))
}

/// (list index, card index) of a task
fn locate(lists: &[TaskList], task_id: &str) -> BoardResult<(usize, usize)> {
    lists
        .iter()
        .enumerate()
        .find_map(|(li, list)| {
            list.cards.iter().position(|t| t.id == task_id).map(|ci| (li, ci))
        })
        .ok_or_else(|| BoardError::TaskNotFound(task_id.to_string()))
}

/// Append a new empty list, returning its id
pub fn create_list(lists: &mut Vec<TaskList>, title: &str) -> String {
    let id = new_id();
    lists.push(TaskList::new(id.clone(), title.to_string()));
    id
}

pub fn edit_list(lists: &mut [TaskList], list_id: &str, changes: ListChanges) -> BoardResult<()> {
    list_mut(lists, list_id)?.apply(changes);
    Ok(())
}

/// Append a new task to the end of a list, returning its id
pub fn create_task(
    lists: &mut [TaskList],
    list_id: &str,
    text: &str,
    pomodoros: u32,
) -> BoardResult<String> {
    let list = list_mut(lists, list_id)?;
    let id = new_id();
    list.cards.push(Task::new(id.clone(), text.to_string(), pomodoros));
    Ok(id)
}

pub fn edit_task(lists: &mut [TaskList], task_id: &str, changes: TaskChanges) -> BoardResult<()> {
    let (li, ci) = locate(lists, task_id)?;
    lists[li].cards[ci].apply(changes);
    Ok(())
}

/// Remove a task, returning it
pub fn delete_task(lists: &mut [TaskList], task_id: &str) -> BoardResult<Task> {
    let (li, ci) = locate(lists, task_id)?;
    Ok(lists[li].cards.remove(ci))
}

/// Move a task to drop slot `index` of `to_list_id`.
///
/// `index` counts slots before the task is taken out of its current list, so
/// dropping a card onto the slot directly below itself leaves it in place.
/// Slots past the end append.
pub fn move_task(
    lists: &mut [TaskList],
    task_id: &str,
    to_list_id: &str,
    index: usize,
) -> BoardResult<()> {
    let (from_li, from_ci) = locate(lists, task_id)?;
    let to_li = lists
        .iter()
        .position(|list| list.id == to_list_id)
        .ok_or_else(|| BoardError::ListNotFound(to_list_id.to_string()))?;

    let task = lists[from_li].cards.remove(from_ci);
    let mut index = index;
    if from_li == to_li && from_ci < index {
        index -= 1;
    }
    let cards = &mut lists[to_li].cards;
    let index = index.min(cards.len());
    cards.insert(index, task);
    Ok(())
}

pub fn find_task<'a>(lists: &'a [TaskList], task_id: &str) -> Option<&'a Task> {
    lists
        .iter()
        .flat_map(|list| list.cards.iter())
        .find(|task| task.id == task_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(cards: &[&str]) -> (Vec<TaskList>, String, Vec<String>) {
        let mut lists = Vec::new();
        let list_id = create_list(&mut lists, "To Do");
        let ids = cards
            .iter()
            .map(|text| create_task(&mut lists, &list_id, text, 1).unwrap())
            .collect();
        (lists, list_id, ids)
    }

    fn texts(list: &TaskList) -> Vec<&str> {
        list.cards.iter().map(|t| t.text.as_str()).collect()
    }

    #[test]
    fn test_create_task_defaults() {
        let (lists, _, ids) = board_with(&["Buy milk"]);
        let task = find_task(&lists, &ids[0]).unwrap();

        assert_eq!(task.text, "Buy milk");
        assert_eq!(task.description, "");
        assert!(!task.done);
        assert_eq!(task.pomodoro_count, 1);
    }

    #[test]
    fn test_ids_are_unique() {
        let (_, _, ids) = board_with(&["a", "b", "c"]);
        assert_ne!(ids[0], ids[1]);
        assert_ne!(ids[1], ids[2]);
        assert_ne!(ids[0], ids[2]);
    }

    #[test]
    fn test_create_task_unknown_list() {
        let mut lists = Vec::new();
        let err = create_task(&mut lists, "missing", "x", 1).unwrap_err();
        assert_eq!(err, BoardError::ListNotFound("missing".to_string()));
    }

    #[test]
    fn test_edit_task_merges_fields() {
        let (mut lists, _, ids) = board_with(&["Draft report"]);
        edit_task(
            &mut lists,
            &ids[0],
            TaskChanges { pomodoro_count: Some(5), ..Default::default() },
        )
        .unwrap();

        let task = find_task(&lists, &ids[0]).unwrap();
        assert_eq!(task.text, "Draft report");
        assert_eq!(task.pomodoro_count, 5);
        assert_eq!(task.id, ids[0]);
    }

    #[test]
    fn test_edit_unknown_task_leaves_board_unchanged() {
        let (mut lists, _, _) = board_with(&["a"]);
        let before = lists.clone();
        let result = edit_task(
            &mut lists,
            "nope",
            TaskChanges { text: Some("b".to_string()), ..Default::default() },
        );

        assert!(result.is_err());
        assert_eq!(lists, before);
    }

    #[test]
    fn test_delete_task() {
        let (mut lists, _, ids) = board_with(&["a", "b"]);
        let removed = delete_task(&mut lists, &ids[0]).unwrap();

        assert_eq!(removed.text, "a");
        assert_eq!(texts(&lists[0]), vec!["b"]);
        assert!(delete_task(&mut lists, &ids[0]).is_err());
    }

    #[test]
    fn test_edit_list() {
        let (mut lists, list_id, _) = board_with(&[]);
        edit_list(
            &mut lists,
            &list_id,
            ListChanges { priority: Some(true), ..Default::default() },
        )
        .unwrap();

        assert!(lists[0].priority);
        assert_eq!(lists[0].title, "To Do");
    }

    #[test]
    fn test_move_down_within_list() {
        let (mut lists, list_id, ids) = board_with(&["a", "b", "c"]);
        // Slot 3 is below "c"
        move_task(&mut lists, &ids[0], &list_id, 3).unwrap();
        assert_eq!(texts(&lists[0]), vec!["b", "c", "a"]);
    }

    #[test]
    fn test_move_up_within_list() {
        let (mut lists, list_id, ids) = board_with(&["a", "b", "c"]);
        move_task(&mut lists, &ids[2], &list_id, 0).unwrap();
        assert_eq!(texts(&lists[0]), vec!["c", "a", "b"]);
    }

    #[test]
    fn test_move_onto_own_slot_is_noop() {
        let (mut lists, list_id, ids) = board_with(&["a", "b", "c"]);
        move_task(&mut lists, &ids[1], &list_id, 1).unwrap();
        move_task(&mut lists, &ids[1], &list_id, 2).unwrap();
        assert_eq!(texts(&lists[0]), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_move_across_lists() {
        let (mut lists, _, ids) = board_with(&["a", "b"]);
        let done_id = create_list(&mut lists, "Done");
        create_task(&mut lists, &done_id, "x", 0).unwrap();

        move_task(&mut lists, &ids[1], &done_id, 0).unwrap();
        move_task(&mut lists, &ids[0], &done_id, 99).unwrap();

        assert!(lists[0].cards.is_empty());
        assert_eq!(texts(&lists[1]), vec!["b", "x", "a"]);
    }

    #[test]
    fn test_move_to_unknown_list_keeps_task() {
        let (mut lists, _, ids) = board_with(&["a"]);
        assert!(move_task(&mut lists, &ids[0], "missing", 0).is_err());
        assert_eq!(texts(&lists[0]), vec!["a"]);
    }
}
