use super::store::ComponentStore;
use super::{ExplicitAccess, ServiceError, UpdateComponent, UpdateOutcome};
use crate::access::{assign_access, AccessLevel, AccessMap};
use crate::authorization::{Authorizer, Requester};
use crate::component::{Attachment, Component};
use crate::identity::User;

/// In-memory attachment store with authorization-gated access
#[derive(Debug, Clone)]
pub struct AttachmentService {
    store: ComponentStore<Attachment>,
}

impl AttachmentService {
    pub fn new(authorizer: Authorizer) -> Self {
        Self {
            store: ComponentStore::new(authorizer),
        }
    }

    /// Create an attachment and store it under `filename`.
    ///
    /// Attachments are not part of the page tree, so without an explicit
    /// access list they start with an empty one.
    pub fn create(
        &self,
        filename: impl Into<String>,
        contents: impl Into<String>,
        owner: User,
        access: Option<ExplicitAccess>,
    ) -> Result<Attachment, ServiceError> {
        let mut attachment = Attachment::new(filename, contents, owner);
        attachment.meta_mut().set_access(AccessMap::empty());

        if let Some(access) = &access {
            tracing::debug!(
                "assigning access rights to attachment {}",
                attachment.filename()
            );
            for (level, collaborator) in self.store.resolve_access(access)? {
                assign_access(&mut attachment, level, collaborator);
            }
        }

        self.store.insert(attachment.clone());
        Ok(attachment)
    }

    /// Look an attachment up without authorization
    pub fn read(&self, filename: &str) -> Result<Attachment, ServiceError> {
        self.store.read(filename)
    }

    /// Read an attachment on behalf of `requester`
    pub fn access(&self, filename: &str, requester: &Requester) -> Result<Attachment, ServiceError> {
        self.store.access(filename, requester)
    }

    pub fn update(
        &self,
        filename: &str,
        requester: &Requester,
        changes: UpdateComponent,
    ) -> Result<UpdateOutcome, ServiceError> {
        self.store.update(filename, requester, changes)
    }

    /// Remove an attachment, returning it
    pub fn delete(&self, filename: &str, requester: &Requester) -> Result<Attachment, ServiceError> {
        self.store.delete(filename, requester)
    }

    pub fn assign(
        &self,
        filename: &str,
        requester: &Requester,
        collaborator_id: &str,
        level: AccessLevel,
    ) -> Result<(), ServiceError> {
        self.store.assign(filename, requester, collaborator_id, level)
    }

    pub fn list(&self) -> Vec<String> {
        self.store.list()
    }

    pub fn authorizer(&self) -> &Authorizer {
        self.store.authorizer()
    }
}
