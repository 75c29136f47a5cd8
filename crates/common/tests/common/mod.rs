//! Shared test utilities for service integration tests
#![allow(dead_code)]

use common::prelude::*;

pub const OWNER_ID: &str = "U1";
pub const COLLABORATOR_ID: &str = "U2";
pub const NEW_OWNER_ID: &str = "U3";
pub const TEAM_ID: &str = "T1";
pub const ADMIN_TEAM_ID: &str = "ADMINS";

pub const FILE_NAME: &str = "Sample.txt";
pub const FILE_CONTENT: &str = "abc";

/// Set up a wiki with three users, a plain team and an admin team
pub fn setup_test_env() -> Wiki {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();

    let wiki = Wiki::new();
    let identities = wiki.identities();
    identities.create_user(OWNER_ID, "alice");
    identities.create_user(COLLABORATOR_ID, "bob");
    identities.create_user(NEW_OWNER_ID, "carol");
    identities.create_team(TEAM_ID, false);
    identities.create_team(ADMIN_TEAM_ID, true);
    identities.add_member(TEAM_ID, COLLABORATOR_ID).unwrap();
    wiki
}

pub fn owner(wiki: &Wiki) -> User {
    wiki.identities().find_user(OWNER_ID).unwrap()
}

pub fn access(entries: &[(&str, AccessLevel)]) -> ExplicitAccess {
    entries
        .iter()
        .map(|(id, level)| (id.to_string(), *level))
        .collect()
}
