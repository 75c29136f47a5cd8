use clap::{Args, ValueEnum};

use common::prelude::*;

pub mod acl;
pub mod check;
pub mod init;
pub mod show;
pub mod version;

pub use acl::Acl;
pub use check::Check;
pub use init::Init;
pub use show::Show;
pub use version::Version;

/// Which store a component id refers to
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComponentKind {
    Page,
    Attachment,
}

/// Identifies who is asking
#[derive(Args, Debug, Clone)]
pub struct RequesterArgs {
    /// User id, or team id with --team
    #[arg(long)]
    pub requester: String,

    /// Treat the requester id as a team
    #[arg(long, default_value_t = false)]
    pub team: bool,
}

impl From<&RequesterArgs> for Requester {
    fn from(args: &RequesterArgs) -> Self {
        Requester::new(args.requester.clone(), !args.team)
    }
}

/// Render a component's access list, one level per line
pub fn render_access(access: Option<&AccessMap>) -> String {
    match access {
        Some(access) => access.to_string(),
        None => "no access list assigned".to_string(),
    }
}
