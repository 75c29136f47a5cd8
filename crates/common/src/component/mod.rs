//! Owned, access-controlled wiki entities
//!
//! Every component carries the same [`ComponentMeta`]: an owning
//! [`User`] and an optional [`AccessMap`]. The concrete variants differ only
//! in how they are keyed and whether they sit in the page tree:
//!
//! - **[`Page`]**: keyed by page id, optionally the child of another page
//! - **[`Attachment`]**: keyed by filename, never part of the tree

mod attachment;
mod page;

use serde::{Deserialize, Serialize};

use crate::access::AccessMap;
use crate::identity::User;

pub use attachment::Attachment;
pub use page::Page;

/// Ownership and access state shared by every component
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentMeta {
    owner: User,
    /// `None` until an access list is first assigned or inherited
    access: Option<AccessMap>,
}

impl ComponentMeta {
    pub fn new(owner: User) -> Self {
        Self {
            owner,
            access: None,
        }
    }

    pub fn owner(&self) -> &User {
        &self.owner
    }

    pub fn set_owner(&mut self, owner: User) {
        self.owner = owner;
    }

    pub fn access(&self) -> Option<&AccessMap> {
        self.access.as_ref()
    }

    pub fn set_access(&mut self, access: AccessMap) {
        self.access = Some(access);
    }

    /// The access list, created empty on first use
    pub fn access_mut(&mut self) -> &mut AccessMap {
        self.access.get_or_insert_with(AccessMap::empty)
    }
}

/// Capabilities every access-controlled entity exposes
pub trait Component {
    /// Short label for logging, e.g. `page`
    const KIND: &'static str;

    /// The key the component is stored under
    fn id(&self) -> &str;

    fn meta(&self) -> &ComponentMeta;

    fn meta_mut(&mut self) -> &mut ComponentMeta;

    fn contents(&self) -> &str;

    fn set_contents(&mut self, contents: String);

    fn owner(&self) -> &User {
        self.meta().owner()
    }

    fn access_map(&self) -> Option<&AccessMap> {
        self.meta().access()
    }

    fn is_owned_by(&self, user_id: &str) -> bool {
        self.owner().id() == user_id
    }
}
