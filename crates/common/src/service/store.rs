use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;

use super::{ExplicitAccess, ServiceError, UpdateComponent, UpdateOutcome};
use crate::access::{assign_access, AccessLevel, Action};
use crate::authorization::{Authorizer, Requester};
use crate::component::Component;
use crate::identity::{Collaborator, IdentityProvider};

/// Keyed store of one kind of component, with the authorization-gated
///  operations both services share
#[derive(Debug)]
pub(crate) struct ComponentStore<C> {
    components: Arc<RwLock<HashMap<String, C>>>,
    authorizer: Authorizer,
}

impl<C> Clone for ComponentStore<C> {
    fn clone(&self) -> Self {
        Self {
            components: self.components.clone(),
            authorizer: self.authorizer.clone(),
        }
    }
}

impl<C: Component + Clone> ComponentStore<C> {
    pub fn new(authorizer: Authorizer) -> Self {
        Self {
            components: Arc::new(RwLock::new(HashMap::new())),
            authorizer,
        }
    }

    pub fn authorizer(&self) -> &Authorizer {
        &self.authorizer
    }

    pub fn components(&self) -> &Arc<RwLock<HashMap<String, C>>> {
        &self.components
    }

    /// Resolve every entry of an explicit access list, users before teams.
    ///
    /// Fails on the first id that names neither, so nothing is granted
    ///  unless everything resolves.
    pub fn resolve_access(
        &self,
        access: &ExplicitAccess,
    ) -> Result<Vec<(AccessLevel, Collaborator)>, ServiceError> {
        access
            .iter()
            .map(|(id, level)| Ok((*level, self.resolve_collaborator(id)?)))
            .collect()
    }

    fn resolve_collaborator(&self, id: &str) -> Result<Collaborator, ServiceError> {
        self.authorizer
            .identities()
            .resolve_collaborator(id)
            .into_collaborator()
            .ok_or_else(|| {
                tracing::warn!("collaborator {} does not exist", id);
                ServiceError::InvalidReference(id.to_string())
            })
    }

    /// Insert a component, replacing any other stored under the same id
    pub fn insert(&self, component: C) {
        Self::insert_locked(&mut self.components.write(), component);
    }

    pub fn insert_locked(components: &mut HashMap<String, C>, component: C) {
        let id = component.id().to_string();
        tracing::info!("{} created: {}", C::KIND, id);
        if components.insert(id.clone(), component).is_some() {
            tracing::warn!("{} {} replaced an existing entry", C::KIND, id);
        }
    }

    pub fn read(&self, id: &str) -> Result<C, ServiceError> {
        self.components
            .read()
            .get(id)
            .cloned()
            .ok_or_else(|| Self::not_found(id))
    }

    pub fn access(&self, id: &str, requester: &Requester) -> Result<C, ServiceError> {
        let components = self.components.read();
        let component = components.get(id).ok_or_else(|| Self::not_found(id))?;
        self.check(component, requester, Action::Read)?;
        Ok(component.clone())
    }

    pub fn update(
        &self,
        id: &str,
        requester: &Requester,
        changes: UpdateComponent,
    ) -> Result<UpdateOutcome, ServiceError> {
        let mut components = self.components.write();
        let component = components.get_mut(id).ok_or_else(|| Self::not_found(id))?;
        self.check(component, requester, Action::Update)?;

        // ownership can only be handed over by the current owner
        let new_owner = match changes.owner_id {
            Some(owner_id) if component.is_owned_by(&requester.id) => Some(
                self.authorizer
                    .identities()
                    .find_user(&owner_id)
                    .ok_or(ServiceError::InvalidReference(owner_id))?,
            ),
            Some(owner_id) => {
                tracing::warn!(
                    "{} is not the owner of {} {}; ignoring transfer to {}",
                    requester,
                    C::KIND,
                    id,
                    owner_id
                );
                None
            }
            None => None,
        };

        let mut outcome = UpdateOutcome::default();
        if let Some(contents) = changes.contents {
            component.set_contents(contents);
            outcome.contents_updated = true;
        }
        if let Some(owner) = new_owner {
            tracing::info!(
                "transferring ownership of {} {} to {}",
                C::KIND,
                id,
                owner.id()
            );
            component.meta_mut().set_owner(owner);
            outcome.ownership_transferred = true;
        }
        Ok(outcome)
    }

    pub fn delete(&self, id: &str, requester: &Requester) -> Result<C, ServiceError> {
        let mut components = self.components.write();
        let component = components.get(id).ok_or_else(|| Self::not_found(id))?;
        self.check(component, requester, Action::Delete)?;
        tracing::info!("{} deleted: {}", C::KIND, id);
        components.remove(id).ok_or_else(|| Self::not_found(id))
    }

    /// Grant `level` to an existing collaborator on a stored component.
    ///
    /// Changing the access list counts as an update.
    pub fn assign(
        &self,
        id: &str,
        requester: &Requester,
        collaborator_id: &str,
        level: AccessLevel,
    ) -> Result<(), ServiceError> {
        let mut components = self.components.write();
        let component = components.get_mut(id).ok_or_else(|| Self::not_found(id))?;
        self.check(component, requester, Action::Update)?;
        let collaborator = self.resolve_collaborator(collaborator_id)?;
        assign_access(component, level, collaborator);
        Ok(())
    }

    /// Ids currently stored, sorted
    pub fn list(&self) -> Vec<String> {
        let mut ids: Vec<String> = self.components.read().keys().cloned().collect();
        ids.sort();
        ids
    }

    fn check(&self, component: &C, requester: &Requester, action: Action) -> Result<(), ServiceError> {
        if self.authorizer.authorize(component, requester, action) {
            Ok(())
        } else {
            Err(ServiceError::AccessDenied {
                kind: C::KIND,
                id: component.id().to_string(),
                requester: requester.clone(),
                action,
            })
        }
    }

    fn not_found(id: &str) -> ServiceError {
        ServiceError::NotFound {
            kind: C::KIND,
            id: id.to_string(),
        }
    }
}
