use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::User;

/// A group of users that can be granted access as a unit.
///
/// Admin teams bypass every component-level restriction when they are the
/// requester. Membership is informational for authorization: a user does not
/// pick up the rights of the teams they belong to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    id: String,
    is_admin: bool,
    /// Members keyed by user id
    #[serde(default)]
    members: BTreeMap<String, User>,
}

impl Team {
    pub fn new(id: impl Into<String>, is_admin: bool) -> Self {
        Self {
            id: id.into(),
            is_admin,
            members: BTreeMap::new(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn is_admin(&self) -> bool {
        self.is_admin
    }

    pub fn members(&self) -> impl Iterator<Item = &User> {
        self.members.values()
    }

    pub fn is_member(&self, user_id: &str) -> bool {
        self.members.contains_key(user_id)
    }

    /// Add a user to the team. Returns `false` if they were already a member.
    pub fn add_member(&mut self, user: User) -> bool {
        if self.members.contains_key(user.id()) {
            return false;
        }
        self.members.insert(user.id().to_string(), user);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_member_is_idempotent() {
        let mut team = Team::new("T1", false);
        assert!(team.add_member(User::new("U1", "alice")));
        assert!(!team.add_member(User::new("U1", "alice")));
        assert_eq!(team.members().count(), 1);
        assert!(team.is_member("U1"));
        assert!(!team.is_member("U2"));
    }
}
