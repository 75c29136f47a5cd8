use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use super::{Team, User};

/// Which identity namespace a collaborator id belongs to.
///
/// Users and teams have separate id spaces: a user and a team may share an
/// id without being the same collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CollaboratorKind {
    User,
    Team,
}

impl std::fmt::Display for CollaboratorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CollaboratorKind::User => write!(f, "user"),
            CollaboratorKind::Team => write!(f, "team"),
        }
    }
}

/// An identity that can appear in a component's access list.
///
/// Two collaborators are equal when they have the same kind and id,
/// whatever the rest of their record. Access lists hold snapshots taken at
/// assignment time and only the kind and id are consulted afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Collaborator {
    User(User),
    Team(Team),
}

impl Collaborator {
    pub fn kind(&self) -> CollaboratorKind {
        match self {
            Collaborator::User(_) => CollaboratorKind::User,
            Collaborator::Team(_) => CollaboratorKind::Team,
        }
    }

    pub fn id(&self) -> &str {
        match self {
            Collaborator::User(user) => user.id(),
            Collaborator::Team(team) => team.id(),
        }
    }

    pub fn as_team(&self) -> Option<&Team> {
        match self {
            Collaborator::Team(team) => Some(team),
            Collaborator::User(_) => None,
        }
    }
}

impl PartialEq for Collaborator {
    fn eq(&self, other: &Self) -> bool {
        self.kind() == other.kind() && self.id() == other.id()
    }
}

impl Eq for Collaborator {}

impl Hash for Collaborator {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.kind().hash(state);
        self.id().hash(state);
    }
}

impl From<User> for Collaborator {
    fn from(user: User) -> Self {
        Collaborator::User(user)
    }
}

impl From<Team> for Collaborator {
    fn from(team: Team) -> Self {
        Collaborator::Team(team)
    }
}

impl std::fmt::Display for Collaborator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.kind(), self.id())
    }
}

/// Outcome of looking an id up in the identity store.
#[derive(Debug, Clone, PartialEq)]
pub enum Resolution {
    User(User),
    Team(Team),
    NotFound,
}

impl Resolution {
    pub fn into_collaborator(self) -> Option<Collaborator> {
        match self {
            Resolution::User(user) => Some(Collaborator::User(user)),
            Resolution::Team(team) => Some(Collaborator::Team(team)),
            Resolution::NotFound => None,
        }
    }
}
