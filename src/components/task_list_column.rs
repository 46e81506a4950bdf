//! Task List Column Component
//!
//! One list of the board: header, cards with drop zones between them, and
//! the "add another card" form.

use leptos::prelude::*;

use leptos_dragdrop::*;

use crate::components::{ListHeader, TaskCard, TaskFormButton};
use crate::context::use_app_context;
use crate::models::{TaskChanges, TaskList};
use crate::store::{store_create_task, store_delete_task, store_edit_task, use_board_store};

#[component]
pub fn TaskListColumn(list: Signal<TaskList>, dnd: DndSignals) -> impl IntoView {
    let store = use_board_store();
    let ctx = use_app_context();
    let list_id = list.with_untracked(|l| l.id.clone());

    // (index, card id) in display order
    let card_slots = move || {
        list.with(|l| {
            l.cards
                .iter()
                .enumerate()
                .map(|(index, task)| (index, task.id.clone()))
                .collect::<Vec<_>>()
        })
    };
    let card_count = move || list.with(|l| l.cards.len());

    let column_class = move || {
        if list.with(|l| l.priority) { "task-list priority" } else { "task-list" }
    };

    let add_card = {
        let list_id = list_id.clone();
        move |(text, pomodoros): (String, u32)| {
            store_create_task(&store, &list_id, &text, pomodoros);
        }
    };

    let trailing_list_id = list_id.clone();

    view! {
        <section class=column_class>
            <ListHeader list=list />

            <div class="task-list-cards">
                <For
                    // Keyed by position too, so drop zones follow reordering
                    each=card_slots
                    key=|slot| slot.clone()
                    children=move |(index, task_id)| {
                        let fallback = list.with_untracked(|l| {
                            l.cards.iter().find(|t| t.id == task_id).cloned()
                        });
                        let Some(fallback) = fallback else {
                            return ().into_any();
                        };
                        let lookup_id = task_id.clone();
                        let task = Signal::derive(move || {
                            list.with(|l| l.cards.iter().find(|t| t.id == lookup_id).cloned())
                                .unwrap_or_else(|| fallback.clone())
                        });

                        let save_id = task_id.clone();
                        let delete_id = task_id.clone();
                        let open_id = task_id;

                        view! {
                            <DropZone dnd=dnd list_id=list_id.clone() index=index />
                            <TaskCard
                                task=task
                                dnd=dnd
                                on_save_card_text=move |(text, pomodoro_count): (String, u32)| {
                                    let changes = TaskChanges {
                                        text: Some(text),
                                        pomodoro_count: Some(pomodoro_count),
                                        ..Default::default()
                                    };
                                    store_edit_task(&store, &save_id, changes);
                                }
                                on_delete_card=move |_| store_delete_task(&store, &delete_id)
                                on_click=move |_: web_sys::MouseEvent| ctx.open_task(open_id.clone())
                            />
                        }
                        .into_any()
                    }
                />

                // Zone after the last card
                {move || view! {
                    <DropZone dnd=dnd list_id=trailing_list_id.clone() index=card_count() />
                }}
            </div>

            <TaskFormButton on_submit=add_card />
        </section>
    }
}

/// Drop zone component - a horizontal separator for dropping cards
#[component]
pub fn DropZone(
    dnd: DndSignals,
    list_id: String,
    index: usize,
) -> impl IntoView {
    let on_mouseenter = make_on_slot_mouseenter(dnd, list_id.clone(), index);
    let on_mouseleave = make_on_mouseleave(dnd);

    // Is this zone the current drop target?
    let is_active = move || {
        dnd.drop_slot.with(|slot| {
            matches!(slot, Some(DropSlot { list_id: l, index: i }) if *l == list_id && *i == index)
        })
    };

    // Only show when dragging
    let is_dragging = move || dnd.dragging_id.with(|d| d.is_some());

    let zone_class = move || {
        let mut c = String::from("drop-zone");
        if !is_dragging() { c.push_str(" hidden"); }
        if is_active() { c.push_str(" active"); }
        c
    };

    view! {
        <div
            class=zone_class
            on:mouseenter=on_mouseenter
            on:mouseleave=on_mouseleave
        />
    }
}
