//! Activation Regions
//!
//! Process-wide registry behind outside-click detection. Every component that
//! should close when the user clicks elsewhere registers a region: a
//! containment test, a way to ask whether it is currently active, and a way
//! to deactivate it. The dispatcher feeds every pointer event through
//! `deactivations_outside` and runs what comes back.
//!
//! Generic over the event target so it can be exercised without a DOM.

use std::rc::Rc;

/// Anything that can be switched off by an outside click
pub trait ActivationState {
    fn is_active(&self) -> bool;
    fn deactivate(&mut self);
}

impl ActivationState for bool {
    fn is_active(&self) -> bool {
        *self
    }

    fn deactivate(&mut self) {
        *self = false;
    }
}

impl ActivationState for super::EditSession {
    fn is_active(&self) -> bool {
        super::EditSession::is_active(self)
    }

    fn deactivate(&mut self) {
        self.close();
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RegionId(u64);

pub type Deactivate = Rc<dyn Fn()>;

struct Region<T> {
    id: RegionId,
    contains: Box<dyn Fn(&T) -> bool>,
    is_active: Box<dyn Fn() -> bool>,
    deactivate: Deactivate,
}

pub struct ActivationRegistry<T> {
    next_id: u64,
    regions: Vec<Region<T>>,
}

impl<T> Default for ActivationRegistry<T> {
    fn default() -> Self {
        Self { next_id: 0, regions: Vec::new() }
    }
}

impl<T> ActivationRegistry<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(
        &mut self,
        contains: impl Fn(&T) -> bool + 'static,
        is_active: impl Fn() -> bool + 'static,
        deactivate: impl Fn() + 'static,
    ) -> RegionId {
        let id = RegionId(self.next_id);
        self.next_id += 1;
        self.regions.push(Region {
            id,
            contains: Box::new(contains),
            is_active: Box::new(is_active),
            deactivate: Rc::new(deactivate),
        });
        id
    }

    pub fn unregister(&mut self, id: RegionId) -> bool {
        let before = self.regions.len();
        self.regions.retain(|region| region.id != id);
        self.regions.len() != before
    }

    /// Deactivators of every active region that does not contain `target`.
    ///
    /// Returned rather than run so the caller can release its borrow of the
    /// registry first; deactivating may unmount components that unregister.
    pub fn deactivations_outside(&self, target: &T) -> Vec<Deactivate> {
        self.regions
            .iter()
            .filter(|region| (region.is_active)() && !(region.contains)(target))
            .map(|region| Rc::clone(&region.deactivate))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    /// Region covering `range`, with a shared active flag
    fn region(
        registry: &mut ActivationRegistry<u32>,
        range: std::ops::Range<u32>,
        active: bool,
    ) -> (RegionId, Rc<Cell<bool>>) {
        let flag = Rc::new(Cell::new(active));
        let read = Rc::clone(&flag);
        let write = Rc::clone(&flag);
        let id = registry.register(
            move |target| range.contains(target),
            move || read.get(),
            move || write.set(false),
        );
        (id, flag)
    }

    fn dispatch(registry: &ActivationRegistry<u32>, target: u32) {
        for deactivate in registry.deactivations_outside(&target) {
            deactivate();
        }
    }

    #[test]
    fn test_outside_click_deactivates() {
        let mut registry = ActivationRegistry::new();
        let (_, flag) = region(&mut registry, 0..10, true);

        dispatch(&registry, 50);
        assert!(!flag.get());
    }

    #[test]
    fn test_inside_click_keeps_active() {
        let mut registry = ActivationRegistry::new();
        let (_, flag) = region(&mut registry, 0..10, true);

        dispatch(&registry, 3);
        assert!(flag.get());
    }

    #[test]
    fn test_regions_decide_independently() {
        let mut registry = ActivationRegistry::new();
        let (_, left) = region(&mut registry, 0..10, true);
        let (_, right) = region(&mut registry, 10..20, true);

        dispatch(&registry, 15);
        assert!(!left.get());
        assert!(right.get());
    }

    #[test]
    fn test_inactive_regions_are_skipped() {
        let mut registry = ActivationRegistry::new();
        let (_, _) = region(&mut registry, 0..10, false);
        let (_, active) = region(&mut registry, 10..20, true);

        assert_eq!(registry.deactivations_outside(&50).len(), 1);
        dispatch(&registry, 50);
        assert!(!active.get());
    }

    #[test]
    fn test_unregistered_region_is_not_notified() {
        let mut registry = ActivationRegistry::new();
        let (id, flag) = region(&mut registry, 0..10, true);

        assert!(registry.unregister(id));
        assert!(!registry.unregister(id));

        dispatch(&registry, 50);
        assert!(flag.get());
    }

    #[test]
    fn test_bool_state() {
        let mut open = true;
        open.deactivate();
        assert!(!open.is_active());
    }

    #[test]
    fn test_session_state_deactivates_by_closing() {
        let mut session = super::super::EditSession::for_form(1);
        session.open_blank();
        session.set_buffer("pending".to_string());

        ActivationState::deactivate(&mut session);
        assert!(!ActivationState::is_active(&session));
        assert_eq!(session.buffer(), "");
    }
}
