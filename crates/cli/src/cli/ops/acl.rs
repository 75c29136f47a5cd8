use clap::Args;

use common::prelude::*;

use super::{render_access, ComponentKind};
use crate::cli::op::ContextError;

/// Print a component's access list
#[derive(Args, Debug, Clone)]
pub struct Acl {
    pub kind: ComponentKind,

    /// Page id or attachment filename
    pub id: String,

    /// Print as JSON
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

#[derive(Debug, thiserror::Error)]
pub enum AclError {
    #[error(transparent)]
    Context(#[from] ContextError),
    #[error(transparent)]
    Service(#[from] ServiceError),
    #[error("failed to render json: {0}")]
    Json(#[from] serde_json::Error),
}

#[async_trait::async_trait]
impl crate::cli::op::Op for Acl {
    type Error = AclError;
    type Output = String;

    async fn execute(&self, ctx: &crate::cli::op::OpContext) -> Result<Self::Output, Self::Error> {
        let wiki = ctx.load_wiki()?;
        let access = match self.kind {
            ComponentKind::Page => wiki.pages().read(&self.id)?.access_map().cloned(),
            ComponentKind::Attachment => wiki.attachments().read(&self.id)?.access_map().cloned(),
        };

        if self.json {
            return Ok(serde_json::to_string_pretty(&access)?);
        }
        Ok(render_access(access.as_ref()))
    }
}
