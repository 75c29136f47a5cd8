//! Access levels and access-control lists
//!
//! - **[`AccessLevel`]**: the three grades of access a collaborator can hold
//! - **[`Action`]**: the operation categories that are subject to authorization
//! - **[`AccessPolicyTable`]**: which levels satisfy which action
//! - **[`AccessMap`]**: a component's access list, one collaborator set per level
//!
//! A component's list is either absent (never assigned) or complete: every
//! level is present, possibly with an empty set. [`assign_access`] creates a
//! complete list on first use; [`inherit_access`] derives one for a new page
//! from its parent.

mod access_map;
mod action;
mod assign;
mod inherit;
mod level;
mod policy;

pub use access_map::{AccessMap, CollaboratorSet};
pub use action::Action;
pub use assign::assign_access;
pub use inherit::inherit_access;
pub use level::AccessLevel;
pub use policy::AccessPolicyTable;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum AccessError {
    #[error("invalid access level: {0}")]
    InvalidAccessLevel(String),
    #[error("unknown action: {0}")]
    UnknownAction(String),
}
