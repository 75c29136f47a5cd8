use std::collections::HashMap;

use super::{AccessLevel, AccessMap};
use crate::component::{Component, Page};

/// Derive the access list for a page created without one.
///
/// The parent's owner gets read-write, and the parent's own list, if any,
/// is appended level by level. A missing parent, or no parent at all,
/// yields three empty levels. The result is computed once: later changes to
/// the parent are not reflected in the child.
pub fn inherit_access(page: &Page, pages: &HashMap<String, Page>) -> AccessMap {
    let mut access = AccessMap::empty();

    let Some(parent) = page.parent_page_id().and_then(|id| pages.get(id)) else {
        if let Some(parent_id) = page.parent_page_id() {
            tracing::warn!(
                "parent page {} of {} not found; nothing to inherit",
                parent_id,
                page.page_id()
            );
        }
        return access;
    };

    tracing::debug!(
        "page {} inheriting access from {}",
        page.page_id(),
        parent.page_id()
    );
    access.grant(AccessLevel::ReadWrite, parent.owner().clone().into());
    if let Some(parent_access) = parent.access_map() {
        access.extend_from(parent_access);
    }

    access
}
