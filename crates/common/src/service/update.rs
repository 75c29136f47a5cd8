use serde::{Deserialize, Serialize};

/// Changes requested against an existing component
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateComponent {
    /// Replacement contents
    #[serde(default)]
    pub contents: Option<String>,
    /// Id of the user to transfer ownership to. Only honoured when the
    ///  requester is the current owner.
    #[serde(default)]
    pub owner_id: Option<String>,
}

impl UpdateComponent {
    pub fn contents(contents: impl Into<String>) -> Self {
        Self {
            contents: Some(contents.into()),
            owner_id: None,
        }
    }

    pub fn transfer_to(owner_id: impl Into<String>) -> Self {
        Self {
            contents: None,
            owner_id: Some(owner_id.into()),
        }
    }

    pub fn with_owner(mut self, owner_id: impl Into<String>) -> Self {
        self.owner_id = Some(owner_id.into());
        self
    }
}

/// Which of the requested changes were applied
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateOutcome {
    pub contents_updated: bool,
    pub ownership_transferred: bool,
}
