// ABOUTME: Integration tests for the local authentication service
// ABOUTME: Signup, login, and credential verification against an in-memory database

use chrono::{Duration, Utc};
use prdkit_security::{
    AuthError, AuthService, CredentialSigner, HashingParams, LocalAuthService, PasswordHasher,
    UserStorage,
};
use prdkit_storage::connect_in_memory;

const SECRET: &[u8] = b"integration-test-secret-0123456789";

fn signer() -> CredentialSigner {
    CredentialSigner::new(SECRET, Duration::hours(1)).unwrap()
}

async fn service() -> LocalAuthService {
    let pool = connect_in_memory().await.unwrap();
    LocalAuthService::new(
        UserStorage::new(pool),
        PasswordHasher::new(HashingParams::fast()),
        signer(),
    )
}

#[tokio::test]
async fn test_signup_then_login() {
    let auth = service().await;

    let confirmation = auth
        .signup("Ada Lovelace", "ada@example.com", "s3cret-pass")
        .await
        .unwrap();
    let session = auth.login("ada@example.com", "s3cret-pass").await.unwrap();

    assert_eq!(session.identity.id, confirmation.user_id);
    assert_eq!(session.identity.name, "Ada Lovelace");
    assert_eq!(session.identity.email, "ada@example.com");
    assert!(!session.credential.is_empty());
    assert!(session.expires_at > Utc::now());
}

#[tokio::test]
async fn test_login_unknown_email_is_not_found() {
    let auth = service().await;

    assert!(matches!(
        auth.login("ghost@example.com", "whatever").await,
        Err(AuthError::NotFound(_))
    ));
}

#[tokio::test]
async fn test_login_wrong_password_is_invalid_credential() {
    let auth = service().await;
    auth.signup("Ada", "ada@example.com", "right").await.unwrap();

    assert!(matches!(
        auth.login("ada@example.com", "wrong").await,
        Err(AuthError::InvalidCredential)
    ));
}

#[tokio::test]
async fn test_duplicate_signup_conflicts() {
    let auth = service().await;
    auth.signup("Ada", "ada@example.com", "one").await.unwrap();

    assert!(matches!(
        auth.signup("Other Ada", "  ADA@example.com ", "two").await,
        Err(AuthError::Conflict(_))
    ));
}

#[tokio::test]
async fn test_email_matching_ignores_case_and_whitespace() {
    let auth = service().await;
    auth.signup("Ada", " Ada@Example.COM", "pw").await.unwrap();

    let session = auth.login("ada@example.com  ", "pw").await.unwrap();
    assert_eq!(session.identity.email, "ada@example.com");
}

#[tokio::test]
async fn test_missing_fields_are_validation_errors() {
    let auth = service().await;

    for (name, email, password) in [("", "a@b.c", "pw"), ("A", " ", "pw"), ("A", "a@b.c", "")] {
        assert!(
            matches!(
                auth.signup(name, email, password).await,
                Err(AuthError::Validation(_))
            ),
            "accepted {:?}",
            (name, email, password)
        );
    }
    assert!(matches!(
        auth.login("", "pw").await,
        Err(AuthError::Validation(_))
    ));
}

#[tokio::test]
async fn test_login_records_last_login() {
    let auth = service().await;
    let confirmation = auth.signup("Ada", "ada@example.com", "pw").await.unwrap();

    auth.login("ada@example.com", "pw").await.unwrap();

    let user = auth.users().get_user(&confirmation.user_id).await.unwrap();
    assert!(user.last_login_at.is_some());
}

#[tokio::test]
async fn test_verify_round_trips_identity() {
    let auth = service().await;
    auth.signup("Ada", "ada@example.com", "pw").await.unwrap();
    let session = auth.login("ada@example.com", "pw").await.unwrap();

    let identity = auth.verify(&session.credential).await.unwrap();
    assert_eq!(identity, session.identity);
}

#[tokio::test]
async fn test_verify_rejects_expired_and_tampered() {
    let auth = service().await;
    auth.signup("Ada", "ada@example.com", "pw").await.unwrap();
    let session = auth.login("ada@example.com", "pw").await.unwrap();

    let stale = signer()
        .issue(&session.identity, Utc::now() - Duration::hours(2))
        .unwrap();
    assert!(matches!(
        auth.verify(&stale).await,
        Err(AuthError::ExpiredCredential)
    ));

    let mut tampered = session.credential.clone();
    tampered.insert(0, 'x');
    assert!(matches!(
        auth.verify(&tampered).await,
        Err(AuthError::InvalidCredential)
    ));
}

#[tokio::test]
async fn test_closed_store_reports_unavailable() {
    let pool = connect_in_memory().await.unwrap();
    let auth = LocalAuthService::new(
        UserStorage::new(pool.clone()),
        PasswordHasher::new(HashingParams::fast()),
        signer(),
    );
    pool.close().await;

    let err = auth.login("ada@example.com", "pw").await.unwrap_err();
    assert!(err.is_unavailable(), "got {err:?}");
}
