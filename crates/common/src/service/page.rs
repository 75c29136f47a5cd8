use super::store::ComponentStore;
use super::{ExplicitAccess, ServiceError, UpdateComponent, UpdateOutcome};
use crate::access::{assign_access, inherit_access, AccessLevel};
use crate::authorization::{Authorizer, Requester};
use crate::component::{Component, Page};
use crate::identity::User;

/// In-memory page store with authorization-gated access
#[derive(Debug, Clone)]
pub struct PageService {
    store: ComponentStore<Page>,
}

impl PageService {
    pub fn new(authorizer: Authorizer) -> Self {
        Self {
            store: ComponentStore::new(authorizer),
        }
    }

    /// Create a page and store it under `page_id`.
    ///
    /// With an explicit access list every entry must name an existing user
    /// or team, otherwise nothing is stored. Without one, the page inherits
    /// from `parent_page_id` as it stands right now.
    pub fn create(
        &self,
        page_id: impl Into<String>,
        parent_page_id: Option<String>,
        owner: User,
        content: impl Into<String>,
        access: Option<ExplicitAccess>,
    ) -> Result<Page, ServiceError> {
        let mut page = Page::new(page_id, parent_page_id, owner, content);
        tracing::info!("creating page with page id: {}", page.page_id());

        let grants = match &access {
            Some(access) => Some(self.store.resolve_access(access)?),
            None => None,
        };

        // hold the write lock across the parent lookup and the insert
        let mut pages = self.store.components().write();
        match grants {
            Some(grants) => {
                tracing::debug!("assigning access rights to page {}", page.page_id());
                page.meta_mut().access_mut();
                for (level, collaborator) in grants {
                    assign_access(&mut page, level, collaborator);
                }
            }
            None => {
                let inherited = inherit_access(&page, &pages);
                page.meta_mut().set_access(inherited);
            }
        }

        ComponentStore::insert_locked(&mut pages, page.clone());
        Ok(page)
    }

    /// Look a page up without authorization
    pub fn read(&self, page_id: &str) -> Result<Page, ServiceError> {
        self.store.read(page_id)
    }

    /// Read a page on behalf of `requester`
    pub fn access(&self, page_id: &str, requester: &Requester) -> Result<Page, ServiceError> {
        self.store.access(page_id, requester)
    }

    pub fn update(
        &self,
        page_id: &str,
        requester: &Requester,
        changes: UpdateComponent,
    ) -> Result<UpdateOutcome, ServiceError> {
        self.store.update(page_id, requester, changes)
    }

    /// Remove a page, returning it
    pub fn delete(&self, page_id: &str, requester: &Requester) -> Result<Page, ServiceError> {
        self.store.delete(page_id, requester)
    }

    pub fn assign(
        &self,
        page_id: &str,
        requester: &Requester,
        collaborator_id: &str,
        level: AccessLevel,
    ) -> Result<(), ServiceError> {
        self.store.assign(page_id, requester, collaborator_id, level)
    }

    pub fn list(&self) -> Vec<String> {
        self.store.list()
    }

    /// Pages whose parent is `page_id`, sorted by id
    pub fn children(&self, page_id: &str) -> Vec<String> {
        let mut children: Vec<String> = self
            .store
            .components()
            .read()
            .values()
            .filter(|page| page.parent_page_id() == Some(page_id))
            .map(|page| page.page_id().to_string())
            .collect();
        children.sort();
        children
    }

    pub fn authorizer(&self) -> &Authorizer {
        self.store.authorizer()
    }
}
