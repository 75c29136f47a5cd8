//! Component services
//!
//! Each service owns one keyed in-memory store and is the only way to reach
//! the components inside it:
//!
//! - **[`PageService`]**: pages keyed by page id; pages created without an
//!   explicit access list inherit one from their parent
//! - **[`AttachmentService`]**: attachments keyed by filename
//!
//! Reads through [`access`](PageService::access), updates, deletes and
//! grants are authorized first and fail with
//! [`ServiceError::AccessDenied`] when the requester is not allowed.
//! The plain `read` lookups skip authorization and are meant for callers
//! that have already made that decision.

mod attachment;
mod error;
mod page;
mod store;
mod update;

use std::collections::BTreeMap;

use crate::access::AccessLevel;

pub use attachment::AttachmentService;
pub use error::ServiceError;
pub use page::PageService;
pub use update::{UpdateComponent, UpdateOutcome};

/// An explicit access list supplied at creation: collaborator id to level
pub type ExplicitAccess = BTreeMap<String, AccessLevel>;
