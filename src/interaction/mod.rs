//! Interaction Core
//!
//! DOM-free state machines behind the board's editors: the bounded counter,
//! the edit session, Enter-key handling and the outside-click registry.

mod counter;
mod keys;
mod outside;
mod session;

pub use counter::BoundedCounter;
pub use keys::{enter_action, EnterAction};
pub use outside::{ActivationRegistry, ActivationState, RegionId};
pub use session::{AfterCommit, Commit, EditSession};
