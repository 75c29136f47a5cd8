use super::AccessLevel;
use crate::component::Component;
use crate::identity::Collaborator;

/// Grant `level` on `component` to `collaborator`.
///
/// The caller has already resolved the collaborator. A component with no
/// access list gets a complete, empty one before the grant. Grants are
/// additive: any level the collaborator already holds is kept.
pub fn assign_access<C: Component>(
    component: &mut C,
    level: AccessLevel,
    collaborator: Collaborator,
) {
    tracing::debug!(
        "granting {} on {} {} to {}",
        level,
        C::KIND,
        component.id(),
        collaborator
    );
    component.meta_mut().access_mut().grant(level, collaborator);
}
