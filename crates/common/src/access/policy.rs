use super::{AccessLevel, Action};

const READ_LEVELS: &[AccessLevel] = &[AccessLevel::ReadWrite, AccessLevel::ReadOnly];
const UPDATE_LEVELS: &[AccessLevel] = &[AccessLevel::ReadWrite];
const DELETE_LEVELS: &[AccessLevel] = &[AccessLevel::ReadWrite];

/// Fixed mapping from an [`Action`] to the access levels that satisfy it.
///
/// The table is immutable and every action has an entry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AccessPolicyTable;

impl AccessPolicyTable {
    pub const fn new() -> Self {
        Self
    }

    /// The levels, most permissive first, that authorize `action`
    pub fn allowed_levels(&self, action: Action) -> &'static [AccessLevel] {
        match action {
            Action::Read => READ_LEVELS,
            Action::Update => UPDATE_LEVELS,
            Action::Delete => DELETE_LEVELS,
        }
    }

    pub fn permits(&self, action: Action, level: AccessLevel) -> bool {
        self.allowed_levels(action).contains(&level)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_action_has_levels() {
        let table = AccessPolicyTable::new();
        for action in Action::ALL {
            assert!(!table.allowed_levels(action).is_empty());
        }
    }

    #[test]
    fn test_no_access_never_permits() {
        let table = AccessPolicyTable::new();
        for action in Action::ALL {
            assert!(!table.permits(action, AccessLevel::NoAccess));
        }
    }

    #[test]
    fn test_read_only_permits_read_only() {
        let table = AccessPolicyTable::new();
        assert!(table.permits(Action::Read, AccessLevel::ReadOnly));
        assert!(!table.permits(Action::Update, AccessLevel::ReadOnly));
        assert!(!table.permits(Action::Delete, AccessLevel::ReadOnly));
    }

    #[test]
    fn test_read_write_permits_everything() {
        let table = AccessPolicyTable::new();
        for action in Action::ALL {
            assert!(table.permits(action, AccessLevel::ReadWrite));
        }
    }
}
