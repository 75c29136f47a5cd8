use crate::access::Action;
use crate::authorization::Requester;

#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum ServiceError {
    #[error("{kind} not found: {id}")]
    NotFound { kind: &'static str, id: String },
    #[error("not authorized: {requester} may not {action} {kind} {id}")]
    AccessDenied {
        kind: &'static str,
        id: String,
        requester: Requester,
        action: Action,
    },
    #[error("collaborator does not exist: {0}")]
    InvalidReference(String),
}

impl ServiceError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, ServiceError::NotFound { .. })
    }

    pub fn is_access_denied(&self) -> bool {
        matches!(self, ServiceError::AccessDenied { .. })
    }
}
