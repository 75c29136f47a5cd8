use clap::Args;

use common::prelude::*;

use super::{render_access, ComponentKind, RequesterArgs};
use crate::cli::op::ContextError;

/// Read a component on behalf of a requester
#[derive(Args, Debug, Clone)]
pub struct Show {
    pub kind: ComponentKind,

    /// Page id or attachment filename
    pub id: String,

    #[command(flatten)]
    pub requester: RequesterArgs,

    /// Print as JSON
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

#[derive(Debug, thiserror::Error)]
pub enum ShowError {
    #[error(transparent)]
    Context(#[from] ContextError),
    #[error(transparent)]
    Service(#[from] ServiceError),
    #[error("failed to render json: {0}")]
    Json(#[from] serde_json::Error),
}

impl Show {
    fn render<C: Component + serde::Serialize>(&self, component: &C) -> Result<String, ShowError> {
        if self.json {
            return Ok(serde_json::to_string_pretty(component)?);
        }
        Ok(format!(
            "{} {} (owner {})\n{}\n\n{}",
            C::KIND,
            component.id(),
            component.owner(),
            render_access(component.access_map()),
            component.contents()
        ))
    }
}

#[async_trait::async_trait]
impl crate::cli::op::Op for Show {
    type Error = ShowError;
    type Output = String;

    async fn execute(&self, ctx: &crate::cli::op::OpContext) -> Result<Self::Output, Self::Error> {
        let wiki = ctx.load_wiki()?;
        let requester = Requester::from(&self.requester);

        match self.kind {
            ComponentKind::Page => self.render(&wiki.pages().access(&self.id, &requester)?),
            ComponentKind::Attachment => {
                self.render(&wiki.attachments().access(&self.id, &requester)?)
            }
        }
    }
}
