use std::sync::Arc;

use crate::access::Action;
use crate::authorization::{Authorizer, Requester, Rule};
use crate::identity::MemoryIdentityStore;
use crate::service::{AttachmentService, PageService, ServiceError};

/// Everything a running wiki needs, constructed once per process.
///
/// Cloning is cheap: every clone shares the same stores.
#[derive(Debug, Clone)]
pub struct Wiki {
    identities: MemoryIdentityStore,
    pages: PageService,
    attachments: AttachmentService,
}

impl Wiki {
    pub fn new() -> Self {
        Self::with_identities(MemoryIdentityStore::new())
    }

    pub fn with_identities(identities: MemoryIdentityStore) -> Self {
        let authorizer = Authorizer::new(Arc::new(identities.clone()));
        Self {
            pages: PageService::new(authorizer.clone()),
            attachments: AttachmentService::new(authorizer),
            identities,
        }
    }

    pub fn identities(&self) -> &MemoryIdentityStore {
        &self.identities
    }

    pub fn pages(&self) -> &PageService {
        &self.pages
    }

    pub fn attachments(&self) -> &AttachmentService {
        &self.attachments
    }

    /// Explain which rule decides `action` on a stored page
    pub fn explain_page(
        &self,
        page_id: &str,
        requester: &Requester,
        action: Action,
    ) -> Result<Rule, ServiceError> {
        let page = self.pages.read(page_id)?;
        Ok(self.pages.authorizer().decide(&page, requester, action))
    }

    /// Explain which rule decides `action` on a stored attachment
    pub fn explain_attachment(
        &self,
        filename: &str,
        requester: &Requester,
        action: Action,
    ) -> Result<Rule, ServiceError> {
        let attachment = self.attachments.read(filename)?;
        Ok(self
            .attachments
            .authorizer()
            .decide(&attachment, requester, action))
    }
}

impl Default for Wiki {
    fn default() -> Self {
        Self::new()
    }
}
