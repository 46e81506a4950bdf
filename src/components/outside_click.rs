//! Outside Click Hooks
//!
//! Binds the activation registry to the document. One `mousedown` listener is
//! installed the first time any component registers a region; each region is
//! removed again when its owner is cleaned up.

use std::cell::{Cell, RefCell};

use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

use crate::interaction::{ActivationRegistry, ActivationState};

thread_local! {
    static REGISTRY: RefCell<ActivationRegistry<web_sys::Node>> = RefCell::new(ActivationRegistry::new());
    static LISTENER_BOUND: Cell<bool> = const { Cell::new(false) };
}

fn dispatch_outside(target: &web_sys::Node) {
    let pending = REGISTRY.with(|registry| registry.borrow().deactivations_outside(target));
    if !pending.is_empty() {
        tracing::debug!(count = pending.len(), "outside click closes regions");
    }
    for deactivate in pending {
        deactivate();
    }
}

fn ensure_global_listener() {
    if LISTENER_BOUND.with(|bound| bound.replace(true)) {
        return;
    }

    let on_mousedown = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |ev: web_sys::MouseEvent| {
        if let Some(node) = ev.target().and_then(|t| t.dyn_into::<web_sys::Node>().ok()) {
            dispatch_outside(&node);
        }
    });

    if let Some(doc) = web_sys::window().and_then(|win| win.document()) {
        let _ = doc.add_event_listener_with_callback("mousedown", on_mousedown.as_ref().unchecked_ref());
    }
    on_mousedown.forget();
}

/// Close `state` whenever the user presses the mouse outside the region.
///
/// `contains` decides whether a node belongs to the region; it is usually a
/// `NodeRef` lookup followed by `Node::contains`.
pub fn use_activation_region<S>(state: RwSignal<S>, contains: impl Fn(&web_sys::Node) -> bool + 'static)
where
    S: ActivationState + Send + Sync + 'static,
{
    ensure_global_listener();

    let id = REGISTRY.with(|registry| {
        registry.borrow_mut().register(
            contains,
            move || state.try_with_untracked(|s| s.is_active()).unwrap_or(false),
            move || {
                state.try_update(|s| s.deactivate());
            },
        )
    });

    on_cleanup(move || {
        REGISTRY.with(|registry| registry.borrow_mut().unregister(id));
    });
}

/// Plain `(is_active, set_active)` pair that drops to false on outside clicks.
/// Setting it to true is unrestricted.
pub fn use_target_outside(
    contains: impl Fn(&web_sys::Node) -> bool + 'static,
) -> (ReadSignal<bool>, WriteSignal<bool>) {
    let active = RwSignal::new(false);
    use_activation_region(active, contains);
    active.split()
}

/// Region test for an element behind a `NodeRef`
pub fn node_contains(element: Option<web_sys::Node>, target: &web_sys::Node) -> bool {
    element.is_some_and(|el| el.contains(Some(target)))
}

/// Whether `state` is active, as a memo
///
/// Subscribers only rerun when the flag flips, not on every buffer or
/// counter edit inside the state.
pub fn use_is_active<S>(state: RwSignal<S>) -> Memo<bool>
where
    S: ActivationState + Send + Sync + 'static,
{
    Memo::new(move |_| state.with(|s| s.is_active()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use crate::interaction::EditSession;

    #[test]
    fn test_is_active_ignores_edits_while_open() {
        let session = RwSignal::new(EditSession::for_form(1));
        let is_open = use_is_active(session);

        let runs = Arc::new(AtomicUsize::new(0));
        let counted = Arc::clone(&runs);
        let watcher = Memo::new(move |_| {
            counted.fetch_add(1, Ordering::SeqCst);
            is_open.get()
        });

        assert!(!watcher.get());
        session.update(|s| s.open_blank());
        assert!(watcher.get());
        assert_eq!(runs.load(Ordering::SeqCst), 2);

        session.update(|s| s.set_buffer("Buy milk".to_string()));
        session.update(|s| {
            s.counter_mut().increment();
        });
        assert!(watcher.get());
        assert_eq!(runs.load(Ordering::SeqCst), 2);

        session.update(|s| s.close());
        assert!(!watcher.get());
        assert_eq!(runs.load(Ordering::SeqCst), 3);
    }
}
