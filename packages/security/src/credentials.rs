// ABOUTME: Signed bearer credentials issued at login
// ABOUTME: base64url(JSON claims) "." base64url(HMAC-SHA256 over the encoded claims)

use base64::{engine::general_purpose::URL_SAFE_NO_PAD as BASE64_URL, Engine};
use chrono::{DateTime, Duration, Utc};
use ring::hmac;
use serde::{Deserialize, Serialize};

use prdkit_core::UserIdentity;

use crate::error::{AuthError, AuthResult};

/// Shortest accepted signing secret, in bytes
pub const MIN_SECRET_LEN: usize = 32;

/// Credential lifetime when none is configured
pub const DEFAULT_TTL_SECS: i64 = 3600;

/// Longest accepted credential lifetime
pub const MAX_TTL_SECS: i64 = u32::MAX as i64;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CredentialClaims {
    pub sub: String,
    pub email: String,
    pub name: String,
    pub iat: i64,
    pub exp: i64,
}

impl CredentialClaims {
    pub fn identity(&self) -> UserIdentity {
        UserIdentity {
            id: self.sub.clone(),
            name: self.name.clone(),
            email: self.email.clone(),
        }
    }

    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.exp, 0)
    }
}

#[derive(Clone)]
pub struct CredentialSigner {
    key: hmac::Key,
    ttl: Duration,
}

impl std::fmt::Debug for CredentialSigner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredentialSigner")
            .field("ttl", &self.ttl)
            .finish_non_exhaustive()
    }
}

impl CredentialSigner {
    pub fn new(secret: &[u8], ttl: Duration) -> AuthResult<Self> {
        if secret.len() < MIN_SECRET_LEN {
            return Err(AuthError::Configuration(format!(
                "Signing secret must be at least {} bytes",
                MIN_SECRET_LEN
            )));
        }
        if ttl <= Duration::zero() || ttl > Duration::seconds(MAX_TTL_SECS) {
            return Err(AuthError::Configuration(format!(
                "Credential lifetime must be between 1 and {} seconds",
                MAX_TTL_SECS
            )));
        }

        Ok(Self {
            key: hmac::Key::new(hmac::HMAC_SHA256, secret),
            ttl,
        })
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// When a credential issued at `now` stops being valid
    pub fn expiry(&self, now: DateTime<Utc>) -> AuthResult<DateTime<Utc>> {
        now.checked_add_signed(self.ttl).ok_or_else(|| {
            AuthError::Configuration("Credential expiry is out of range".to_string())
        })
    }

    /// Sign a credential for `identity` valid from `now` for the configured lifetime
    pub fn issue(&self, identity: &UserIdentity, now: DateTime<Utc>) -> AuthResult<String> {
        let claims = CredentialClaims {
            sub: identity.id.clone(),
            email: identity.email.clone(),
            name: identity.name.clone(),
            iat: now.timestamp(),
            exp: self.expiry(now)?.timestamp(),
        };

        let payload = BASE64_URL.encode(serde_json::to_vec(&claims)?);
        let tag = hmac::sign(&self.key, payload.as_bytes());

        Ok(format!("{}.{}", payload, BASE64_URL.encode(tag.as_ref())))
    }

    /// Check the signature and expiry of `credential` as of `now`
    pub fn verify(&self, credential: &str, now: DateTime<Utc>) -> AuthResult<CredentialClaims> {
        let (payload, signature) = credential
            .trim()
            .split_once('.')
            .ok_or(AuthError::InvalidCredential)?;

        let signature = BASE64_URL
            .decode(signature)
            .map_err(|_| AuthError::InvalidCredential)?;
        hmac::verify(&self.key, payload.as_bytes(), &signature)
            .map_err(|_| AuthError::InvalidCredential)?;

        let claims: CredentialClaims = BASE64_URL
            .decode(payload)
            .ok()
            .and_then(|bytes| serde_json::from_slice(&bytes).ok())
            .ok_or(AuthError::InvalidCredential)?;

        if now.timestamp() >= claims.exp {
            return Err(AuthError::ExpiredCredential);
        }

        Ok(claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    const SECRET: &[u8] = b"0123456789abcdef0123456789abcdef";

    fn identity() -> UserIdentity {
        UserIdentity {
            id: "user-1".to_string(),
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
        }
    }

    fn signer() -> CredentialSigner {
        CredentialSigner::new(SECRET, Duration::seconds(DEFAULT_TTL_SECS)).unwrap()
    }

    fn issued_at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 1, 1, 9, 0, 0).unwrap()
    }

    #[test]
    fn test_issue_then_verify() {
        let signer = signer();
        let credential = signer.issue(&identity(), issued_at()).unwrap();

        let claims = signer
            .verify(&credential, issued_at() + Duration::minutes(59))
            .unwrap();
        assert_eq!(claims.identity(), identity());
        assert_eq!(claims.exp - claims.iat, DEFAULT_TTL_SECS);
        assert_eq!(
            claims.expires_at(),
            Some(issued_at() + Duration::seconds(DEFAULT_TTL_SECS))
        );
    }

    #[test]
    fn test_expired_credential() {
        let signer = signer();
        let credential = signer.issue(&identity(), issued_at()).unwrap();

        assert!(matches!(
            signer.verify(&credential, issued_at() + Duration::hours(1)),
            Err(AuthError::ExpiredCredential)
        ));
    }

    #[test]
    fn test_tampered_payload_is_rejected() {
        let signer = signer();
        let credential = signer.issue(&identity(), issued_at()).unwrap();
        let (_, signature) = credential.split_once('.').unwrap();

        let forged_claims = CredentialClaims {
            sub: "someone-else".to_string(),
            email: "eve@example.com".to_string(),
            name: "Eve".to_string(),
            iat: issued_at().timestamp(),
            exp: (issued_at() + Duration::days(365)).timestamp(),
        };
        let forged_payload = BASE64_URL.encode(serde_json::to_vec(&forged_claims).unwrap());
        let forged = format!("{}.{}", forged_payload, signature);

        assert!(matches!(
            signer.verify(&forged, issued_at()),
            Err(AuthError::InvalidCredential)
        ));
    }

    #[test]
    fn test_other_secret_is_rejected() {
        let credential = signer().issue(&identity(), issued_at()).unwrap();
        let other =
            CredentialSigner::new(b"another-secret-another-secret-xx", Duration::hours(1)).unwrap();

        assert!(matches!(
            other.verify(&credential, issued_at()),
            Err(AuthError::InvalidCredential)
        ));
    }

    #[test]
    fn test_malformed_credentials() {
        let signer = signer();
        for credential in ["", "no-dot-here", "a.b", ".", "!!!.???"] {
            assert!(
                matches!(
                    signer.verify(credential, issued_at()),
                    Err(AuthError::InvalidCredential)
                ),
                "accepted {:?}",
                credential
            );
        }
    }

    #[test]
    fn test_short_secret_rejected() {
        assert!(matches!(
            CredentialSigner::new(b"too-short", Duration::hours(1)),
            Err(AuthError::Configuration(_))
        ));
        assert!(matches!(
            CredentialSigner::new(SECRET, Duration::zero()),
            Err(AuthError::Configuration(_))
        ));
        assert!(matches!(
            CredentialSigner::new(SECRET, Duration::seconds(MAX_TTL_SECS + 1)),
            Err(AuthError::Configuration(_))
        ));
        assert!(CredentialSigner::new(SECRET, Duration::seconds(MAX_TTL_SECS)).is_ok());
    }

    #[test]
    fn test_expiry_overflow_is_an_error() {
        let signer = CredentialSigner::new(SECRET, Duration::seconds(MAX_TTL_SECS)).unwrap();
        let far_future = DateTime::<Utc>::from_naive_utc_and_offset(chrono::NaiveDateTime::MAX, Utc);

        assert!(matches!(
            signer.expiry(far_future),
            Err(AuthError::Configuration(_))
        ));
        assert!(matches!(
            signer.issue(&identity(), far_future),
            Err(AuthError::Configuration(_))
        ));
        assert_eq!(
            signer.expiry(issued_at()).unwrap(),
            issued_at() + Duration::seconds(MAX_TTL_SECS)
        );
    }
}
