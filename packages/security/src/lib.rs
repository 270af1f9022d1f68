// ABOUTME: Authentication and credential functionality for prdkit
// ABOUTME: Provides password hashing, signed bearer credentials, and user accounts

pub mod credentials;
pub mod error;
pub mod password;
pub mod service;
pub mod users;

// Re-export main types for convenience
pub use credentials::{CredentialClaims, CredentialSigner, DEFAULT_TTL_SECS, MAX_TTL_SECS, MIN_SECRET_LEN};
pub use error::{AuthError, AuthResult};
pub use password::{HashingParams, PasswordHasher, StoredPassword};
pub use service::{AuthService, LocalAuthService, LoginSession, SignupConfirmation};
pub use users::{normalize_email, NewUser, User, UserStorage};
