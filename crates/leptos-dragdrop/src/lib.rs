//! Leptos DragDrop Utilities
//!
//! Simple drag-and-drop for Leptos using mouse events.
//! Uses movement threshold to distinguish click from drag.
//! Cards are addressed by string id, drop positions by `(list_id, index)`.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Insertion slot inside a list: `index` counts the cards above it
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DropSlot {
    pub list_id: String,
    pub index: usize,
}

/// DnD state signals
#[derive(Clone, Copy)]
pub struct DndSignals {
    /// Card being dragged
    pub dragging_id: RwSignal<Option<String>>,
    /// Slot under the pointer
    pub drop_slot: RwSignal<Option<DropSlot>>,
    /// Set for a short moment after a drop so the trailing click is ignored
    pub drag_just_ended: RwSignal<bool>,
    /// Pending card id (mousedown but not yet dragging)
    pub pending_id: RwSignal<Option<String>>,
    /// Start position for movement detection
    pub start: RwSignal<(i32, i32)>,
}

/// Movement threshold in pixels to start dragging
const DRAG_THRESHOLD_PX: i32 = 5;

/// How long the trailing click after a drop is swallowed
const DRAG_END_GRACE_MS: u32 = 100;

pub fn create_dnd_signals() -> DndSignals {
    DndSignals {
        dragging_id: RwSignal::new(None),
        drop_slot: RwSignal::new(None),
        drag_just_ended: RwSignal::new(false),
        pending_id: RwSignal::new(None),
        start: RwSignal::new((0, 0)),
    }
}

/// Whether the pointer moved far enough from `start` to count as a drag
pub fn exceeds_threshold(start: (i32, i32), current: (i32, i32)) -> bool {
    let dx = (current.0 - start.0).abs();
    let dy = (current.1 - start.1).abs();
    dx > DRAG_THRESHOLD_PX || dy > DRAG_THRESHOLD_PX
}

/// Tracked check used for the card's `dragging` class
pub fn is_dragging(dnd: &DndSignals, id: &str) -> bool {
    dnd.dragging_id.with(|d| d.as_deref() == Some(id))
}

/// End drag operation
pub fn end_drag(dnd: &DndSignals) {
    dnd.dragging_id.set(None);
    dnd.drop_slot.set(None);
    dnd.pending_id.set(None);
    dnd.drag_just_ended.set(true);

    let clear = dnd.drag_just_ended;
    gloo_timers::callback::Timeout::new(DRAG_END_GRACE_MS, move || {
        clear.set(false);
    })
    .forget();
}

/// Controls inside a card never start a drag
fn is_control(target: Option<web_sys::EventTarget>) -> bool {
    target
        .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
        .and_then(|el| el.closest("button, input, textarea").ok().flatten())
        .is_some()
}

/// Create mousedown handler for draggable cards
/// Records pending drag with start position
pub fn make_on_mousedown(dnd: DndSignals, card_id: String) -> impl Fn(web_sys::MouseEvent) + Clone + 'static {
    move |ev: web_sys::MouseEvent| {
        if ev.button() != 0 || is_control(ev.target()) {
            return;
        }
        dnd.pending_id.set(Some(card_id.clone()));
        dnd.start.set((ev.client_x(), ev.client_y()));
    }
}

/// Create mouseenter handler for drop slots
pub fn make_on_slot_mouseenter(dnd: DndSignals, list_id: String, index: usize) -> impl Fn(web_sys::MouseEvent) + Clone + 'static {
    move |_ev: web_sys::MouseEvent| {
        if dnd.dragging_id.with_untracked(|d| d.is_some()) {
            dnd.drop_slot.set(Some(DropSlot { list_id: list_id.clone(), index }));
        }
    }
}

/// Create mouseleave handler
pub fn make_on_mouseleave(dnd: DndSignals) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |_ev: web_sys::MouseEvent| {
        if dnd.dragging_id.with_untracked(|d| d.is_some()) {
            dnd.drop_slot.set(None);
        }
    }
}

fn bind_document_listener(event: &str, handler: impl FnMut(web_sys::MouseEvent) + 'static) {
    use wasm_bindgen::closure::Closure;

    let closure = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(handler);
    if let Some(doc) = web_sys::window().and_then(|win| win.document()) {
        let _ = doc.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

/// Bind global mousemove/mouseup handlers. `on_drop` receives the dragged
/// card id and the slot it was released over.
pub fn bind_global_mouseup<F>(dnd: DndSignals, on_drop: F)
where
    F: Fn(String, DropSlot) + 'static,
{
    // Start dragging once the pending card moved past the threshold
    bind_document_listener("mousemove", move |ev: web_sys::MouseEvent| {
        if dnd.dragging_id.with_untracked(|d| d.is_some()) {
            return;
        }
        let Some(pending) = dnd.pending_id.get_untracked() else {
            return;
        };
        if exceeds_threshold(dnd.start.get_untracked(), (ev.client_x(), ev.client_y())) {
            dnd.dragging_id.set(Some(pending));
        }
    });

    bind_document_listener("mouseup", move |_ev: web_sys::MouseEvent| {
        let dragging = dnd.dragging_id.get_untracked();
        let slot = dnd.drop_slot.get_untracked();

        match (dragging, slot) {
            (Some(dragged), Some(slot)) => {
                end_drag(&dnd);
                on_drop(dragged, slot);
            }
            (Some(_), None) => end_drag(&dnd),
            // Plain click: no drag happened, let the click through
            (None, _) => dnd.pending_id.set(None),
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_small_movement_is_a_click() {
        assert!(!exceeds_threshold((100, 100), (100, 100)));
        assert!(!exceeds_threshold((100, 100), (105, 95)));
    }

    #[test]
    fn test_movement_past_threshold_drags() {
        assert!(exceeds_threshold((100, 100), (106, 100)));
        assert!(exceeds_threshold((100, 100), (100, 94)));
    }
}
