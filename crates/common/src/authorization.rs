//! # Authorization
//!
//! Decides whether a requester may perform an [`Action`] on a component.
//! Rules are applied in order and the first one that matches decides:
//!
//! 1. **Owner**: the component's owner is allowed every action, whatever
//!    the access list says about them.
//! 2. **Admin team**: a requester that resolves to a team flagged as admin
//!    is allowed every action.
//! 3. **Access list**: the requester is allowed if it is listed under one of
//!    the levels the [`AccessPolicyTable`] accepts for the action.
//!
//! Anything else is denied, including requesters that resolve to no known
//! user or team. A denial is a normal outcome, not an error.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::access::{AccessLevel, AccessPolicyTable, Action};
use crate::component::Component;
use crate::identity::{Collaborator, IdentityProvider, Resolution};

/// Who is asking, and whether the id names a user or a team
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Requester {
    pub id: String,
    pub is_individual: bool,
}

impl Requester {
    pub fn new(id: impl Into<String>, is_individual: bool) -> Self {
        Self {
            id: id.into(),
            is_individual,
        }
    }

    pub fn user(id: impl Into<String>) -> Self {
        Self::new(id, true)
    }

    pub fn team(id: impl Into<String>) -> Self {
        Self::new(id, false)
    }
}

impl std::fmt::Display for Requester {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_individual {
            write!(f, "user:{}", self.id)
        } else {
            write!(f, "team:{}", self.id)
        }
    }
}

/// The rule that produced a verdict
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rule {
    Owner,
    AdminTeam,
    Granted(AccessLevel),
    UnknownRequester,
    NoAccessList,
    NotGranted,
}

impl Rule {
    pub fn is_allowed(&self) -> bool {
        matches!(self, Rule::Owner | Rule::AdminTeam | Rule::Granted(_))
    }
}

impl std::fmt::Display for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Rule::Owner => write!(f, "requester owns the component"),
            Rule::AdminTeam => write!(f, "requester is an admin team"),
            Rule::Granted(level) => write!(f, "requester holds {}", level),
            Rule::UnknownRequester => write!(f, "requester is not a known collaborator"),
            Rule::NoAccessList => write!(f, "component has no access list"),
            Rule::NotGranted => write!(f, "requester holds no level permitting the action"),
        }
    }
}

/// The authorization engine.
///
/// Holds no state of its own beyond the handle to the identity store it
/// resolves requesters against.
#[derive(Debug, Clone)]
pub struct Authorizer {
    identities: Arc<dyn IdentityProvider>,
    policy: AccessPolicyTable,
}

impl Authorizer {
    pub fn new(identities: Arc<dyn IdentityProvider>) -> Self {
        Self {
            identities,
            policy: AccessPolicyTable::new(),
        }
    }

    pub fn identities(&self) -> &Arc<dyn IdentityProvider> {
        &self.identities
    }

    /// Whether `requester` may perform `action` on `component`
    pub fn authorize<C: Component>(
        &self,
        component: &C,
        requester: &Requester,
        action: Action,
    ) -> bool {
        self.decide(component, requester, action).is_allowed()
    }

    /// Like [`authorize`](Self::authorize), but reports which rule decided
    pub fn decide<C: Component>(&self, component: &C, requester: &Requester, action: Action) -> Rule {
        let rule = self.evaluate(component, requester, action);
        tracing::debug!(
            "{} {} on {} {}: {} ({})",
            if rule.is_allowed() { "allow" } else { "deny" },
            action,
            C::KIND,
            component.id(),
            requester,
            rule
        );
        rule
    }

    fn evaluate<C: Component>(&self, component: &C, requester: &Requester, action: Action) -> Rule {
        if component.is_owned_by(&requester.id) {
            return Rule::Owner;
        }

        let collaborator = match self
            .identities
            .resolve_requester(&requester.id, requester.is_individual)
        {
            Resolution::Team(team) if team.is_admin() => return Rule::AdminTeam,
            Resolution::Team(team) => Collaborator::Team(team),
            Resolution::User(user) => Collaborator::User(user),
            Resolution::NotFound => return Rule::UnknownRequester,
        };

        let Some(access) = component.access_map() else {
            return Rule::NoAccessList;
        };

        // grants are looked up under the requester's own kind only
        access
            .levels_of(collaborator.kind(), collaborator.id())
            .into_iter()
            .find(|level| self.policy.permits(action, *level))
            .map(Rule::Granted)
            .unwrap_or(Rule::NotGranted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::access::assign_access;
    use crate::component::{Attachment, Page};
    use crate::identity::{MemoryIdentityStore, User};

    fn setup() -> (Authorizer, MemoryIdentityStore) {
        let store = MemoryIdentityStore::new();
        store.create_user("U1", "alice");
        store.create_user("U2", "bob");
        store.create_team("T1", false);
        store.create_team("ADMINS", true);
        (Authorizer::new(Arc::new(store.clone())), store)
    }

    fn attachment() -> Attachment {
        Attachment::new("Sample.txt", "abc", User::new("U1", "alice"))
    }

    #[test]
    fn test_owner_allowed_despite_no_access() {
        let (authorizer, _) = setup();
        let mut attachment = attachment();
        assign_access(
            &mut attachment,
            AccessLevel::NoAccess,
            User::new("U1", "alice").into(),
        );

        for action in Action::ALL {
            assert_eq!(
                authorizer.decide(&attachment, &Requester::user("U1"), action),
                Rule::Owner
            );
            assert!(authorizer.authorize(&attachment, &Requester::team("U1"), action));
        }
    }

    #[test]
    fn test_admin_team_bypasses_missing_acl() {
        let (authorizer, _) = setup();
        let attachment = attachment();
        for action in Action::ALL {
            assert_eq!(
                authorizer.decide(&attachment, &Requester::team("ADMINS"), action),
                Rule::AdminTeam
            );
        }
    }

    #[test]
    fn test_admin_flag_ignored_for_individual_lookup() {
        let (authorizer, _) = setup();
        assert_eq!(
            authorizer.decide(&attachment(), &Requester::user("ADMINS"), Action::Read),
            Rule::UnknownRequester
        );
    }

    #[test]
    fn test_unknown_requester_denied() {
        let (authorizer, _) = setup();
        let mut attachment = attachment();
        assign_access(
            &mut attachment,
            AccessLevel::ReadWrite,
            User::new("GHOST", "ghost").into(),
        );
        assert!(!authorizer.authorize(&attachment, &Requester::user("GHOST"), Action::Read));
    }

    #[test]
    fn test_no_acl_denies_non_owner() {
        let (authorizer, _) = setup();
        assert_eq!(
            authorizer.decide(&attachment(), &Requester::user("U2"), Action::Read),
            Rule::NoAccessList
        );
    }

    #[test]
    fn test_level_exactness() {
        let (authorizer, store) = setup();
        let mut page = Page::new("P1", None, User::new("U1", "alice"), "");
        assign_access(&mut page, AccessLevel::ReadOnly, store.find_user("U2").unwrap().into());
        assign_access(&mut page, AccessLevel::NoAccess, store.find_team("T1").unwrap().into());

        let bob = Requester::user("U2");
        assert_eq!(
            authorizer.decide(&page, &bob, Action::Read),
            Rule::Granted(AccessLevel::ReadOnly)
        );
        assert!(!authorizer.authorize(&page, &bob, Action::Update));
        assert!(!authorizer.authorize(&page, &bob, Action::Delete));

        let team = Requester::team("T1");
        for action in Action::ALL {
            assert_eq!(authorizer.decide(&page, &team, action), Rule::NotGranted);
        }
    }

    #[test]
    fn test_user_grant_does_not_reach_team_with_same_id() {
        let (authorizer, store) = setup();
        store.create_user("X", "shadow");
        store.create_team("X", false);
        let mut attachment = attachment();
        let user = store.find_user("X").unwrap();
        assign_access(&mut attachment, AccessLevel::ReadWrite, user.into());

        assert_eq!(
            authorizer.decide(&attachment, &Requester::user("X"), Action::Delete),
            Rule::Granted(AccessLevel::ReadWrite)
        );
        for action in Action::ALL {
            assert_eq!(
                authorizer.decide(&attachment, &Requester::team("X"), action),
                Rule::NotGranted
            );
        }
    }

    #[test]
    fn test_team_grant_applies_to_team_requests_only() {
        let (authorizer, store) = setup();
        store.add_member("T1", "U2").unwrap();
        let mut page = Page::new("P1", None, User::new("U1", "alice"), "");
        assign_access(&mut page, AccessLevel::ReadWrite, store.find_team("T1").unwrap().into());

        assert!(authorizer.authorize(&page, &Requester::team("T1"), Action::Update));
        assert!(!authorizer.authorize(&page, &Requester::user("U2"), Action::Update));
    }
}
