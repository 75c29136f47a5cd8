//! Identities that can hold access rights on a component
//!
//! - **[`User`]**: an individual, the only kind of identity that can own a component
//! - **[`Team`]**: a named group of users, optionally carrying the admin override
//! - **[`Collaborator`]**: either of the above, as it appears in an access list
//! - **[`MemoryIdentityStore`]**: the in-memory user and team directory
//!
//! Lookups go through the [`IdentityProvider`] trait so the authorization
//! engine never depends on how identities are stored.

mod collaborator;
mod store;
mod team;
mod user;

pub use collaborator::{Collaborator, CollaboratorKind, Resolution};
pub use store::{IdentityError, IdentityProvider, MemoryIdentityStore};
pub use team::Team;
pub use user::User;
