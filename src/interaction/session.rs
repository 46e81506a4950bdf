//! Edit Session
//!
//! Two-state machine behind every card, creation form and list title: idle
//! (showing static content) or active (showing an editor). Holds the pending
//! text buffer and pomodoro counter while active.

use super::counter::BoundedCounter;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Idle,
    Active,
}

/// What happens to the buffer and counter after a successful commit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AfterCommit {
    /// Keep what was committed (editing an existing record)
    Retain,
    /// Clear the buffer and reset the counter (creating records)
    Reset { pomodoros: u32 },
}

/// Payload emitted by a successful commit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Commit {
    pub text: String,
    pub pomodoros: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EditSession {
    phase: Phase,
    buffer: String,
    counter: BoundedCounter,
    after_commit: AfterCommit,
}

impl EditSession {
    /// Session for editing an existing record
    pub fn for_record() -> Self {
        Self::new(AfterCommit::Retain)
    }

    /// Session for a creation form whose counter starts at `pomodoros`
    pub fn for_form(pomodoros: u32) -> Self {
        Self::new(AfterCommit::Reset { pomodoros })
    }

    fn new(after_commit: AfterCommit) -> Self {
        let counter = match after_commit {
            AfterCommit::Retain => BoundedCounter::default(),
            AfterCommit::Reset { pomodoros } => BoundedCounter::new(pomodoros),
        };
        Self {
            phase: Phase::Idle,
            buffer: String::new(),
            counter,
            after_commit,
        }
    }

    pub fn is_active(&self) -> bool {
        self.phase == Phase::Active
    }

    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    pub fn counter(&self) -> BoundedCounter {
        self.counter
    }

    pub fn counter_mut(&mut self) -> &mut BoundedCounter {
        &mut self.counter
    }

    pub fn set_buffer(&mut self, text: String) {
        self.buffer = text;
    }

    /// Enter the active phase seeded with the record's current values
    pub fn open(&mut self, text: &str, pomodoros: u32) {
        self.phase = Phase::Active;
        self.buffer = text.to_string();
        self.counter = BoundedCounter::new(pomodoros);
    }

    /// Open a creation form: empty buffer, initial counter
    pub fn open_blank(&mut self) {
        let pomodoros = match self.after_commit {
            AfterCommit::Reset { pomodoros } => pomodoros,
            AfterCommit::Retain => self.counter.value(),
        };
        self.open("", pomodoros);
    }

    /// Leave without committing; the pending buffer is dropped
    pub fn close(&mut self) {
        self.phase = Phase::Idle;
        self.buffer.clear();
    }

    /// Try to commit the buffer.
    ///
    /// Empty or whitespace-only text is rejected and nothing changes. On
    /// success the session stays active only when `keep_open` is set.
    pub fn commit(&mut self, keep_open: bool) -> Option<Commit> {
        if !self.is_active() || self.buffer.trim().is_empty() {
            return None;
        }
        let commit = Commit {
            text: self.buffer.clone(),
            pomodoros: self.counter.value(),
        };
        if let AfterCommit::Reset { pomodoros } = self.after_commit {
            self.buffer.clear();
            self.counter = BoundedCounter::new(pomodoros);
        }
        if !keep_open {
            self.close();
        }
        Some(commit)
    }
}
