use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::AccessError;

/// A grade of access on a component.
///
/// The ordering runs from least to most permissive. Authorization never
/// compares levels: an action is satisfied only by the exact levels listed
/// for it in the [`AccessPolicyTable`](super::AccessPolicyTable).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AccessLevel {
    NoAccess,
    ReadOnly,
    ReadWrite,
}

impl AccessLevel {
    /// Every level, most permissive first
    pub const ALL: [AccessLevel; 3] = [
        AccessLevel::ReadWrite,
        AccessLevel::ReadOnly,
        AccessLevel::NoAccess,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AccessLevel::ReadWrite => "READ_WRITE",
            AccessLevel::ReadOnly => "READ_ONLY",
            AccessLevel::NoAccess => "NO_ACCESS",
        }
    }
}

impl std::fmt::Display for AccessLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AccessLevel {
    type Err = AccessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "READ_WRITE" => Ok(AccessLevel::ReadWrite),
            "READ_ONLY" => Ok(AccessLevel::ReadOnly),
            "NO_ACCESS" => Ok(AccessLevel::NoAccess),
            other => Err(AccessError::InvalidAccessLevel(other.to_string())),
        }
    }
}
