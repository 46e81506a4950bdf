//! Enter-key handling for editors.

/// Result of pressing Enter in an editor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnterAction {
    /// The editor stays open after committing
    pub keep_open: bool,
}

/// Classify a key press. Only Enter commits; the configured modifier keeps the
/// editor open.
pub fn enter_action(key: &str, modifier_held: bool) -> Option<EnterAction> {
    (key == "Enter").then_some(EnterAction { keep_open: modifier_held })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_enter_closes() {
        assert_eq!(enter_action("Enter", false), Some(EnterAction { keep_open: false }));
    }

    #[test]
    fn test_modified_enter_keeps_open() {
        assert_eq!(enter_action("Enter", true), Some(EnterAction { keep_open: true }));
    }

    #[test]
    fn test_other_keys_ignored() {
        assert_eq!(enter_action("a", false), None);
        assert_eq!(enter_action("Escape", true), None);
        assert_eq!(enter_action("Tab", false), None);
    }
}
