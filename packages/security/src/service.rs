// ABOUTME: Authentication service: signup, login, and bearer credential verification
// ABOUTME: LocalAuthService backs the contract with SQLite users and HMAC-signed credentials

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{debug, info, warn};

use prdkit_core::{require_present, UserIdentity};
use prdkit_storage::StorageError;

use crate::credentials::CredentialSigner;
use crate::error::{AuthError, AuthResult};
use crate::password::{PasswordHasher, StoredPassword};
use crate::users::{normalize_email, NewUser, UserStorage};

/// Result of a successful login
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginSession {
    pub identity: UserIdentity,
    /// Opaque bearer credential
    pub credential: String,
    pub expires_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupConfirmation {
    pub user_id: String,
}

#[async_trait]
pub trait AuthService: Send + Sync {
    /// Register an account. `Conflict` when the email is already taken.
    async fn signup(&self, name: &str, email: &str, password: &str)
        -> AuthResult<SignupConfirmation>;

    /// Exchange email and password for a credential.
    ///
    /// `NotFound` when no account matches the email, `InvalidCredential` when
    /// the password does not match.
    async fn login(&self, email: &str, password: &str) -> AuthResult<LoginSession>;

    /// Resolve a bearer credential back to the identity it was issued for
    async fn verify(&self, credential: &str) -> AuthResult<UserIdentity>;
}

pub struct LocalAuthService {
    users: UserStorage,
    hasher: PasswordHasher,
    signer: CredentialSigner,
}

impl LocalAuthService {
    pub fn new(users: UserStorage, hasher: PasswordHasher, signer: CredentialSigner) -> Self {
        Self {
            users,
            hasher,
            signer,
        }
    }

    pub fn users(&self) -> &UserStorage {
        &self.users
    }

    // Argon2 is CPU bound; keep it off the async workers.
    async fn hash_password(&self, password: &str) -> AuthResult<StoredPassword> {
        let hasher = self.hasher.clone();
        let password = password.to_string();
        tokio::task::spawn_blocking(move || hasher.hash(&password))
            .await
            .map_err(|e| AuthError::Hashing(format!("Hashing task failed: {}", e)))?
    }

    async fn verify_password(&self, password: &str, stored: &StoredPassword) -> AuthResult<bool> {
        let hasher = self.hasher.clone();
        let password = password.to_string();
        let stored = stored.clone();
        tokio::task::spawn_blocking(move || hasher.verify(&password, &stored))
            .await
            .map_err(|e| AuthError::Hashing(format!("Hashing task failed: {}", e)))?
    }
}

#[async_trait]
impl AuthService for LocalAuthService {
    async fn signup(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> AuthResult<SignupConfirmation> {
        let name = require_present("name", Some(name))?;
        let email = normalize_email(require_present("email", Some(email))?);
        require_present("password", Some(password))?;

        if self.users.find_by_email(&email).await?.is_some() {
            return Err(AuthError::Conflict(email));
        }

        let password = self.hash_password(password).await?;
        let user = self
            .users
            .create_user(NewUser {
                name: name.to_string(),
                email: email.clone(),
                password,
            })
            .await
            .map_err(|e| match e {
                // Lost a race with a concurrent signup for the same address
                StorageError::Duplicate(_) => AuthError::Conflict(email.clone()),
                other => other.into(),
            })?;

        info!("Registered user {}", user.id);

        Ok(SignupConfirmation { user_id: user.id })
    }

    async fn login(&self, email: &str, password: &str) -> AuthResult<LoginSession> {
        let email = normalize_email(require_present("email", Some(email))?);
        require_present("password", Some(password))?;

        let user = self
            .users
            .find_by_email(&email)
            .await?
            .ok_or_else(|| AuthError::NotFound(email.clone()))?;

        if !self.verify_password(password, &user.password).await? {
            warn!("Rejected login for user {}: password mismatch", user.id);
            return Err(AuthError::InvalidCredential);
        }

        let now = Utc::now();
        let expires_at = self.signer.expiry(now)?;
        let identity = user.identity();
        let credential = self.signer.issue(&identity, now)?;
        self.users.touch_last_login(&user.id, now).await?;

        info!("User {} logged in", user.id);

        Ok(LoginSession {
            identity,
            credential,
            expires_at,
        })
    }

    async fn verify(&self, credential: &str) -> AuthResult<UserIdentity> {
        match self.signer.verify(credential, Utc::now()) {
            Ok(claims) => {
                debug!("Verified credential for user {}", claims.sub);
                Ok(claims.identity())
            }
            Err(e) => {
                warn!("Rejected bearer credential: {}", e);
                Err(e)
            }
        }
    }
}
