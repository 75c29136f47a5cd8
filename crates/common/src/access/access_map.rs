use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::AccessLevel;
use crate::identity::{Collaborator, CollaboratorKind};

/// Collaborators holding one access level, keyed by kind and id.
///
/// Serialized as a list of collaborator records.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<Collaborator>", into = "Vec<Collaborator>")]
pub struct CollaboratorSet(BTreeMap<(CollaboratorKind, String), Collaborator>);

impl CollaboratorSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a collaborator. Returns `false` if one with the same kind and
    ///  id was already present, in which case the set is unchanged.
    pub fn insert(&mut self, collaborator: Collaborator) -> bool {
        let key = (collaborator.kind(), collaborator.id().to_string());
        if self.0.contains_key(&key) {
            return false;
        }
        self.0.insert(key, collaborator);
        true
    }

    pub fn contains(&self, kind: CollaboratorKind, id: &str) -> bool {
        self.0.contains_key(&(kind, id.to_string()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Collaborator> {
        self.0.values()
    }

    /// Append every member of `other` not already present
    pub fn extend_from(&mut self, other: &CollaboratorSet) {
        for collaborator in other.iter() {
            self.insert(collaborator.clone());
        }
    }
}

impl FromIterator<Collaborator> for CollaboratorSet {
    fn from_iter<T: IntoIterator<Item = Collaborator>>(iter: T) -> Self {
        let mut set = Self::new();
        for collaborator in iter {
            set.insert(collaborator);
        }
        set
    }
}

impl From<Vec<Collaborator>> for CollaboratorSet {
    fn from(collaborators: Vec<Collaborator>) -> Self {
        collaborators.into_iter().collect()
    }
}

impl From<CollaboratorSet> for Vec<Collaborator> {
    fn from(set: CollaboratorSet) -> Self {
        set.0.into_values().collect()
    }
}

/// A component's access-control list.
///
/// All three levels are always present. A collaborator may end up under
/// more than one level, since grants only ever add.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessMap {
    #[serde(rename = "READ_WRITE", default)]
    read_write: CollaboratorSet,
    #[serde(rename = "READ_ONLY", default)]
    read_only: CollaboratorSet,
    #[serde(rename = "NO_ACCESS", default)]
    no_access: CollaboratorSet,
}

impl AccessMap {
    /// A list with every level present and empty
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn level(&self, level: AccessLevel) -> &CollaboratorSet {
        match level {
            AccessLevel::ReadWrite => &self.read_write,
            AccessLevel::ReadOnly => &self.read_only,
            AccessLevel::NoAccess => &self.no_access,
        }
    }

    pub fn level_mut(&mut self, level: AccessLevel) -> &mut CollaboratorSet {
        match level {
            AccessLevel::ReadWrite => &mut self.read_write,
            AccessLevel::ReadOnly => &mut self.read_only,
            AccessLevel::NoAccess => &mut self.no_access,
        }
    }

    /// Add `collaborator` under `level`
    pub fn grant(&mut self, level: AccessLevel, collaborator: Collaborator) -> bool {
        self.level_mut(level).insert(collaborator)
    }

    pub fn contains(&self, level: AccessLevel, kind: CollaboratorKind, id: &str) -> bool {
        self.level(level).contains(kind, id)
    }

    /// Every level under which the collaborator is listed, most permissive first
    pub fn levels_of(&self, kind: CollaboratorKind, id: &str) -> Vec<AccessLevel> {
        AccessLevel::ALL
            .into_iter()
            .filter(|level| self.contains(*level, kind, id))
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (AccessLevel, &CollaboratorSet)> {
        AccessLevel::ALL
            .into_iter()
            .map(move |level| (level, self.level(level)))
    }

    pub fn is_empty(&self) -> bool {
        self.iter().all(|(_, set)| set.is_empty())
    }

    /// Append each of `other`'s levels into the matching level of `self`
    pub fn extend_from(&mut self, other: &AccessMap) {
        for level in AccessLevel::ALL {
            self.level_mut(level).extend_from(other.level(level));
        }
    }
}

impl std::fmt::Display for AccessMap {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, (level, set)) in self.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            let members: Vec<String> = set.iter().map(ToString::to_string).collect();
            write!(f, "{}: [{}]", level, members.join(", "))?;
        }
        Ok(())
    }
}
