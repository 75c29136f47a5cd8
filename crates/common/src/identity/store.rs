use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;

use super::{Resolution, Team, User};

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum IdentityError {
    #[error("user not found: {0}")]
    UserNotFound(String),
    #[error("team not found: {0}")]
    TeamNotFound(String),
}

/// Read access to users and teams.
///
/// This is the only view of identities the authorization engine and the
/// component services rely on.
pub trait IdentityProvider: Send + Sync + std::fmt::Debug {
    fn find_user(&self, id: &str) -> Option<User>;

    fn find_team(&self, id: &str) -> Option<Team>;

    /// Resolve an id that may name either kind of collaborator,
    ///  trying users before teams
    fn resolve_collaborator(&self, id: &str) -> Resolution {
        if let Some(user) = self.find_user(id) {
            return Resolution::User(user);
        }
        match self.find_team(id) {
            Some(team) => Resolution::Team(team),
            None => Resolution::NotFound,
        }
    }

    /// Resolve a requester whose kind is already known
    fn resolve_requester(&self, id: &str, is_individual: bool) -> Resolution {
        if is_individual {
            self.find_user(id)
                .map(Resolution::User)
                .unwrap_or(Resolution::NotFound)
        } else {
            self.find_team(id)
                .map(Resolution::Team)
                .unwrap_or(Resolution::NotFound)
        }
    }
}

/// In-memory user and team directory
#[derive(Debug, Clone, Default)]
pub struct MemoryIdentityStore {
    users: Arc<RwLock<HashMap<String, User>>>,
    teams: Arc<RwLock<HashMap<String, Team>>>,
}

impl MemoryIdentityStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a user, replacing any existing user with the same id
    pub fn create_user(&self, id: impl Into<String>, username: impl Into<String>) -> User {
        let user = User::new(id, username);
        tracing::info!("creating user {}", user);
        self.users.write().insert(user.id().to_string(), user.clone());
        user
    }

    /// Rename a user. An empty username leaves the record untouched.
    pub fn update_user(&self, id: &str, username: &str) -> Result<User, IdentityError> {
        let mut users = self.users.write();
        let user = users
            .get_mut(id)
            .ok_or_else(|| IdentityError::UserNotFound(id.to_string()))?;
        if !username.is_empty() {
            user.set_username(username);
        }
        Ok(user.clone())
    }

    pub fn delete_user(&self, id: &str) -> Result<User, IdentityError> {
        self.users
            .write()
            .remove(id)
            .ok_or_else(|| IdentityError::UserNotFound(id.to_string()))
    }

    /// Insert a team, replacing any existing team with the same id
    pub fn create_team(&self, id: impl Into<String>, is_admin: bool) -> Team {
        let team = Team::new(id, is_admin);
        tracing::info!("creating team {} (admin: {})", team.id(), team.is_admin());
        self.teams.write().insert(team.id().to_string(), team.clone());
        team
    }

    pub fn delete_team(&self, id: &str) -> Result<Team, IdentityError> {
        self.teams
            .write()
            .remove(id)
            .ok_or_else(|| IdentityError::TeamNotFound(id.to_string()))
    }

    /// Add an existing user to an existing team.
    ///
    /// Returns `false` if the user was already a member.
    pub fn add_member(&self, team_id: &str, user_id: &str) -> Result<bool, IdentityError> {
        let mut teams = self.teams.write();
        let team = teams
            .get_mut(team_id)
            .ok_or_else(|| IdentityError::TeamNotFound(team_id.to_string()))?;
        let user = self
            .find_user(user_id)
            .ok_or_else(|| IdentityError::UserNotFound(user_id.to_string()))?;
        Ok(team.add_member(user))
    }
}

impl IdentityProvider for MemoryIdentityStore {
    fn find_user(&self, id: &str) -> Option<User> {
        tracing::trace!("looking up user {}", id);
        self.users.read().get(id).cloned()
    }

    fn find_team(&self, id: &str) -> Option<Team> {
        tracing::trace!("looking up team {}", id);
        self.teams.read().get(id).cloned()
    }
}
