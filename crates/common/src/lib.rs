/**
 * Access levels, actions, and the per-component
 *  access-control list.
 * Includes the fixed policy table that maps an
 *  action onto the levels that satisfy it, and the
 *  one-shot inheritance of a page's list from its parent.
 */
pub mod access;
/**
 * The decision function: may this requester perform
 *  this action on this component?
 */
pub mod authorization;
/**
 * Owned, access-controlled entities -- pages and
 *  attachments -- and the shared metadata they carry.
 */
pub mod component;
/**
 * Users, teams, and the in-memory store that
 *  resolves ids into collaborators.
 */
pub mod identity;
/**
 * Keyed component stores that gate every read,
 *  update and delete behind an authorization check.
 */
pub mod service;
/**
 * Process-scoped aggregate that wires the identity
 *  store and component services together.
 */
pub mod wiki;

pub mod prelude {
    pub use crate::access::{AccessError, AccessLevel, AccessMap, AccessPolicyTable, Action};
    pub use crate::authorization::{Authorizer, Requester, Rule};
    pub use crate::component::{Attachment, Component, Page};
    pub use crate::identity::{
        Collaborator, CollaboratorKind, IdentityError, IdentityProvider, MemoryIdentityStore,
        Resolution, Team, User,
    };
    pub use crate::service::{
        AttachmentService, ExplicitAccess, PageService, ServiceError, UpdateComponent,
        UpdateOutcome,
    };
    pub use crate::wiki::Wiki;
}
