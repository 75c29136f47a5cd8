//! Seed files
//!
//! The engine keeps everything in memory, so each CLI invocation rebuilds a
//! [`Wiki`] from a TOML seed describing its users, teams, pages and
//! attachments:
//!
//! ```toml
//! [[users]]
//! id = "U1"
//! username = "alice"
//!
//! [[teams]]
//! id = "T1"
//! is_admin = false
//! members = ["U1"]
//!
//! [[pages]]
//! id = "P1"
//! owner = "U1"
//! content = "Home"
//! access = { U2 = "READ_ONLY" }
//!
//! [[pages]]
//! id = "P2"
//! parent = "P1"
//! owner = "U2"
//!
//! [[attachments]]
//! filename = "Sample.txt"
//! owner = "U1"
//! contents = "abc"
//! ```
//!
//! Entries are applied in file order with the same semantics as the
//! service calls they map to, so a parent page must be listed before the
//! pages that inherit from it.

use std::{fs, path::Path, str::FromStr};

use serde::{Deserialize, Serialize};

use common::prelude::*;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Seed {
    #[serde(default)]
    pub users: Vec<SeedUser>,
    #[serde(default)]
    pub teams: Vec<SeedTeam>,
    #[serde(default)]
    pub pages: Vec<SeedPage>,
    #[serde(default)]
    pub attachments: Vec<SeedAttachment>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedUser {
    pub id: String,
    pub username: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedTeam {
    pub id: String,
    #[serde(default)]
    pub is_admin: bool,
    /// User ids
    #[serde(default)]
    pub members: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedPage {
    pub id: String,
    #[serde(default)]
    pub parent: Option<String>,
    pub owner: String,
    #[serde(default)]
    pub content: String,
    /// Explicit access list; when absent the page inherits from its parent
    #[serde(default)]
    pub access: Option<ExplicitAccess>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedAttachment {
    pub filename: String,
    pub owner: String,
    #[serde(default)]
    pub contents: String,
    #[serde(default)]
    pub access: Option<ExplicitAccess>,
}

#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    #[error("failed to read seed file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse seed file: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("owner {owner} of {component} is not a known user")]
    UnknownOwner { component: String, owner: String },
    #[error("identity error: {0}")]
    Identity(#[from] IdentityError),
    #[error("service error: {0}")]
    Service(#[from] ServiceError),
}

impl FromStr for Seed {
    type Err = SeedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(toml::from_str(s)?)
    }
}

impl Seed {
    pub fn load(path: &Path) -> Result<Self, SeedError> {
        tracing::debug!("loading seed from {}", path.display());
        fs::read_to_string(path)?.parse()
    }

    /// A small tree used by `wiki init`
    pub fn sample() -> Self {
        Self {
            users: vec![
                SeedUser {
                    id: "U1".into(),
                    username: "alice".into(),
                },
                SeedUser {
                    id: "U2".into(),
                    username: "bob".into(),
                },
                SeedUser {
                    id: "U3".into(),
                    username: "carol".into(),
                },
            ],
            teams: vec![
                SeedTeam {
                    id: "editors".into(),
                    is_admin: false,
                    members: vec!["U2".into()],
                },
                SeedTeam {
                    id: "admins".into(),
                    is_admin: true,
                    members: vec!["U3".into()],
                },
            ],
            pages: vec![
                SeedPage {
                    id: "home".into(),
                    parent: None,
                    owner: "U1".into(),
                    content: "Welcome to the wiki".into(),
                    access: Some(ExplicitAccess::from([
                        ("U2".to_string(), AccessLevel::ReadOnly),
                        ("editors".to_string(), AccessLevel::ReadWrite),
                    ])),
                },
                SeedPage {
                    id: "home/notes".into(),
                    parent: Some("home".into()),
                    owner: "U2".into(),
                    content: "Inherits from home".into(),
                    access: None,
                },
            ],
            attachments: vec![SeedAttachment {
                filename: "Sample.txt".into(),
                owner: "U1".into(),
                contents: "abc".into(),
                access: None,
            }],
        }
    }

    /// Apply the seed to a fresh wiki
    pub fn build(&self) -> Result<Wiki, SeedError> {
        let wiki = Wiki::new();
        let identities = wiki.identities();

        for user in &self.users {
            identities.create_user(&user.id, &user.username);
        }
        for team in &self.teams {
            identities.create_team(&team.id, team.is_admin);
            for member in &team.members {
                identities.add_member(&team.id, member)?;
            }
        }

        for page in &self.pages {
            let owner = Self::owner(identities, &page.owner, &page.id)?;
            wiki.pages().create(
                &page.id,
                page.parent.clone(),
                owner,
                &page.content,
                page.access.clone(),
            )?;
        }
        for attachment in &self.attachments {
            let owner = Self::owner(identities, &attachment.owner, &attachment.filename)?;
            wiki.attachments().create(
                &attachment.filename,
                &attachment.contents,
                owner,
                attachment.access.clone(),
            )?;
        }

        tracing::info!(
            "seeded wiki with {} pages and {} attachments",
            self.pages.len(),
            self.attachments.len()
        );
        Ok(wiki)
    }

    fn owner(
        identities: &MemoryIdentityStore,
        owner_id: &str,
        component: &str,
    ) -> Result<User, SeedError> {
        identities
            .find_user(owner_id)
            .ok_or_else(|| SeedError::UnknownOwner {
                component: component.to_string(),
                owner: owner_id.to_string(),
            })
    }
}
