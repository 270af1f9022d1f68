// ABOUTME: User account type definitions
// ABOUTME: Stored accounts and the input used to register one

use chrono::{DateTime, Utc};

use prdkit_core::UserIdentity;

use crate::password::StoredPassword;

#[derive(Debug, Clone)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub password: StoredPassword,
    pub created_at: DateTime<Utc>,
    pub last_login_at: Option<DateTime<Utc>>,
}

impl User {
    pub fn identity(&self) -> UserIdentity {
        UserIdentity {
            id: self.id.clone(),
            name: self.name.clone(),
            email: self.email.clone(),
        }
    }
}

/// A registration that has already been validated and hashed
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    /// Normalized (trimmed, lowercased) address
    pub email: String,
    pub password: StoredPassword,
}

/// Canonical form used for storing and matching email addresses
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}
