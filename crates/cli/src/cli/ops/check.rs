use clap::Args;

use common::prelude::*;

use super::{ComponentKind, RequesterArgs};
use crate::cli::op::ContextError;

/// Explain whether a requester may act on a component
#[derive(Args, Debug, Clone)]
pub struct Check {
    pub kind: ComponentKind,

    /// Page id or attachment filename
    pub id: String,

    #[command(flatten)]
    pub requester: RequesterArgs,

    /// read, update or delete; every action when omitted
    #[arg(long)]
    pub action: Option<Action>,
}

#[derive(Debug, thiserror::Error)]
pub enum CheckError {
    #[error(transparent)]
    Context(#[from] ContextError),
    #[error(transparent)]
    Service(#[from] ServiceError),
}

#[async_trait::async_trait]
impl crate::cli::op::Op for Check {
    type Error = CheckError;
    type Output = String;

    async fn execute(&self, ctx: &crate::cli::op::OpContext) -> Result<Self::Output, Self::Error> {
        let wiki = ctx.load_wiki()?;
        let requester = Requester::from(&self.requester);
        let actions = match self.action {
            Some(action) => vec![action],
            None => Action::ALL.to_vec(),
        };

        let mut lines = Vec::with_capacity(actions.len());
        for action in actions {
            let rule = match self.kind {
                ComponentKind::Page => wiki.explain_page(&self.id, &requester, action)?,
                ComponentKind::Attachment => {
                    wiki.explain_attachment(&self.id, &requester, action)?
                }
            };
            let verdict = if rule.is_allowed() { "allow" } else { "deny" };
            lines.push(format!("{:<6} {:<5} {}", action.to_string(), verdict, rule));
        }
        Ok(lines.join("\n"))
    }
}
