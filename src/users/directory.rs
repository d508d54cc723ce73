use std::collections::BTreeMap;

use log::info;
use serde::Serialize;
use thiserror::Error;

use super::user::User;

#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "error", rename_all = "snake_case")]
pub enum DirectoryError {
    #[error("username `{username}` already exists")]
    DuplicateUser { username: String },
    #[error("no such user `{username}`")]
    UserNotFound { username: String },
    #[error("username `{username}` is reserved")]
    ReservedName { username: String },
    #[error("username must not be empty")]
    EmptyUsername,
}

/// Username to user registry. Entries are never removed.
#[derive(Debug)]
pub struct UserDirectory {
    users: BTreeMap<String, User>,
    admin_name: String,
}

impl UserDirectory {
    pub fn new(admin_name: impl Into<String>) -> Self {
        Self {
            users: BTreeMap::new(),
            admin_name: admin_name.into(),
        }
    }

    pub fn admin_name(&self) -> &str {
        &self.admin_name
    }

    pub fn is_admin(&self, username: &str) -> bool {
        username == self.admin_name
    }

    pub fn create(&mut self, username: &str) -> Result<&mut User, DirectoryError> {
        if username.trim().is_empty() {
            return Err(DirectoryError::EmptyUsername);
        }
        if self.is_admin(username) {
            return Err(DirectoryError::ReservedName {
                username: username.to_string(),
            });
        }
        if self.users.contains_key(username) {
            return Err(DirectoryError::DuplicateUser {
                username: username.to_string(),
            });
        }

        info!("registered user {}", username);
        Ok(self
            .users
            .entry(username.to_string())
            .or_insert_with(|| User::new(username)))
    }

    pub fn find(&self, username: &str) -> Option<&User> {
        self.users.get(username)
    }

    pub fn find_mut(&mut self, username: &str) -> Option<&mut User> {
        self.users.get_mut(username)
    }

    pub fn lookup(&self, username: &str) -> Result<&User, DirectoryError> {
        self.find(username).ok_or_else(|| DirectoryError::UserNotFound {
            username: username.to_string(),
        })
    }

    /// Registered usernames in sorted order. The admin name is never listed.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.users.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}
