//! Unit tests for the authentication service

use std::sync::Arc;

use crate::domain::entities::user::Role;
use crate::domain::value_objects::RegisterUser;
use crate::errors::{AuthError, DomainError};
use crate::repositories::{MockUserRepository, UserRepository};
use crate::services::auth::AuthService;
use crate::services::hash::CredentialHasher;
use crate::services::token::{TokenService, TokenServiceConfig};

use super::mocks::FailingUserRepository;

// Minimum bcrypt cost, keeps the tests fast
const TEST_COST: u32 = 4;

fn token_config() -> TokenServiceConfig {
    TokenServiceConfig {
        access_secret: "test-access-secret".to_string(),
        refresh_secret: "test-refresh-secret".to_string(),
        access_token_expiry_secs: 3_600,
        refresh_token_expiry_secs: 604_800,
    }
}

fn service<U: UserRepository>(repository: Arc<U>) -> AuthService<U> {
    AuthService::new(
        repository,
        Arc::new(TokenService::new(token_config())),
        CredentialHasher::new(TEST_COST),
    )
}

fn register_request(email: &str) -> RegisterUser {
    RegisterUser {
        name: "Test User".to_string(),
        email: email.to_string(),
        phone: "+61400000000".to_string(),
        address: Some("1 Example St".to_string()),
        role: Role::User,
        is_active: true,
        email_verified: false,
        password: "secret123".to_string(),
    }
}

#[tokio::test]
async fn register_returns_public_fields() {
    let repo = Arc::new(MockUserRepository::new());
    let auth = service(Arc::clone(&repo));

    let public = auth.register(register_request("a@x.com")).await.unwrap();

    assert_eq!(public.email, "a@x.com");
    assert_eq!(public.role, Role::User);
    assert!(public.is_active);
    assert_eq!(repo.count().await.unwrap(), 1);

    // The stored record carries a digest, not the plaintext
    let stored = repo.find_by_email("a@x.com").await.unwrap().unwrap();
    assert_ne!(stored.password_hash, "secret123");
    assert!(stored.hashed_refresh_token.is_none());
}

#[tokio::test]
async fn registering_the_same_email_twice_fails() {
    let auth = service(Arc::new(MockUserRepository::new()));

    auth.register(register_request("a@x.com")).await.unwrap();
    let err = auth.register(register_request("a@x.com")).await.unwrap_err();

    assert!(matches!(err, DomainError::Auth(AuthError::DuplicateEmail)));
}

#[tokio::test]
async fn login_mints_a_verifiable_token_pair() {
    let auth = service(Arc::new(MockUserRepository::new()));
    let token_service = TokenService::new(token_config());

    let public = auth.register(register_request("a@x.com")).await.unwrap();
    let response = auth.login("a@x.com", "secret123").await.unwrap();

    assert_eq!(response.user, public);
    assert_eq!(response.expires_in, 3_600);
    assert_ne!(response.access_token, response.refresh_token);

    let access = token_service.verify_access(&response.access_token).unwrap();
    let refresh = token_service.verify_refresh(&response.refresh_token).unwrap();
    for claims in [access, refresh] {
        assert_eq!(claims.sub, public.id);
        assert_eq!(claims.email, "a@x.com");
        assert_eq!(claims.role, Role::User);
    }
}

#[tokio::test]
async fn unknown_email_and_wrong_password_are_indistinguishable() {
    let auth = service(Arc::new(MockUserRepository::new()));
    auth.register(register_request("a@x.com")).await.unwrap();

    let unknown = auth.login("b@x.com", "secret123").await.unwrap_err();
    let mismatch = auth.login("a@x.com", "wrong-password").await.unwrap_err();

    assert!(matches!(
        unknown,
        DomainError::Auth(AuthError::InvalidCredentials)
    ));
    assert!(matches!(
        mismatch,
        DomainError::Auth(AuthError::InvalidCredentials)
    ));
    assert_eq!(unknown.to_string(), mismatch.to_string());
}

#[tokio::test]
async fn refresh_rotates_and_rejects_the_used_token() {
    let auth = service(Arc::new(MockUserRepository::new()));
    auth.register(register_request("a@x.com")).await.unwrap();

    let response = auth.login("a@x.com", "secret123").await.unwrap();
    let first = response.refresh_token;

    let rotated = auth.refresh(&first).await.unwrap();
    assert_ne!(rotated.refresh_token, first);

    // The token just used is rotated out
    let err = auth.refresh(&first).await.unwrap_err();
    assert!(matches!(
        err,
        DomainError::Auth(AuthError::InvalidRefreshToken)
    ));

    // The replacement keeps working
    auth.refresh(&rotated.refresh_token).await.unwrap();
}

#[tokio::test]
async fn a_second_login_invalidates_the_first_session() {
    let auth = service(Arc::new(MockUserRepository::new()));
    auth.register(register_request("a@x.com")).await.unwrap();

    let first = auth.login("a@x.com", "secret123").await.unwrap();
    let second = auth.login("a@x.com", "secret123").await.unwrap();

    assert!(matches!(
        auth.refresh(&first.refresh_token).await.unwrap_err(),
        DomainError::Auth(AuthError::InvalidRefreshToken)
    ));
    auth.refresh(&second.refresh_token).await.unwrap();
}

#[tokio::test]
async fn refresh_before_any_login_is_rejected() {
    let repo = Arc::new(MockUserRepository::new());
    let auth = service(Arc::clone(&repo));
    let public = auth.register(register_request("a@x.com")).await.unwrap();

    // A token that verifies by signature, but no session is on record yet
    let token_service = TokenService::new(token_config());
    let token = token_service
        .issue_refresh(public.id, &public.email, public.role)
        .unwrap();

    assert!(matches!(
        auth.refresh(&token).await.unwrap_err(),
        DomainError::Auth(AuthError::InvalidRefreshToken)
    ));
}

#[tokio::test]
async fn invalid_tokens_are_rejected_before_the_store_is_consulted() {
    // Every store call fails, so reaching the store would surface as a
    // store failure instead of the unauthorized outcome
    let auth = service(Arc::new(FailingUserRepository));

    let garbage = auth.refresh("not-a-jwt").await.unwrap_err();
    assert!(matches!(
        garbage,
        DomainError::Auth(AuthError::InvalidRefreshToken)
    ));

    let expired_issuer = TokenService::new(TokenServiceConfig {
        refresh_token_expiry_secs: -3_600,
        ..token_config()
    });
    let expired = expired_issuer.issue_refresh(1, "a@x.com", Role::User).unwrap();
    assert!(matches!(
        auth.refresh(&expired).await.unwrap_err(),
        DomainError::Auth(AuthError::InvalidRefreshToken)
    ));
}

#[tokio::test]
async fn store_failures_propagate_unchanged() {
    let auth = service(Arc::new(FailingUserRepository));

    assert!(matches!(
        auth.login("a@x.com", "secret123").await.unwrap_err(),
        DomainError::Store { .. }
    ));
    assert!(matches!(
        auth.register(register_request("a@x.com")).await.unwrap_err(),
        DomainError::Store { .. }
    ));
    assert!(matches!(
        auth.list_users(None, None).await.unwrap_err(),
        DomainError::Store { .. }
    ));
}

#[tokio::test]
async fn access_validation_resolves_the_live_subject() {
    let repo = Arc::new(MockUserRepository::new());
    let auth = service(Arc::clone(&repo));
    auth.register(register_request("a@x.com")).await.unwrap();

    let response = auth.login("a@x.com", "secret123").await.unwrap();
    let resolved = auth
        .validate_access_token(&response.access_token)
        .await
        .unwrap();
    assert_eq!(resolved, response.user);
}

#[tokio::test]
async fn access_validation_rejects_deactivated_users() {
    let repo = Arc::new(MockUserRepository::new());
    let auth = service(Arc::clone(&repo));
    auth.register(register_request("a@x.com")).await.unwrap();
    let response = auth.login("a@x.com", "secret123").await.unwrap();

    let mut user = repo.find_by_id(response.user.id).await.unwrap().unwrap();
    user.is_active = false;
    repo.update(user).await.unwrap();

    assert!(matches!(
        auth.validate_access_token(&response.access_token)
            .await
            .unwrap_err(),
        DomainError::Auth(AuthError::InvalidAccessToken)
    ));
}

#[tokio::test]
async fn access_validation_rejects_refresh_tokens() {
    let auth = service(Arc::new(MockUserRepository::new()));
    auth.register(register_request("a@x.com")).await.unwrap();
    let response = auth.login("a@x.com", "secret123").await.unwrap();

    assert!(matches!(
        auth.validate_access_token(&response.refresh_token)
            .await
            .unwrap_err(),
        DomainError::Auth(AuthError::InvalidAccessToken)
    ));
}

#[tokio::test]
async fn list_users_pages_newest_first_with_metadata() {
    let auth = service(Arc::new(MockUserRepository::new()));
    for i in 1..=12 {
        auth.register(register_request(&format!("u{i}@x.com")))
            .await
            .unwrap();
    }

    let page = auth.list_users(Some(2.0), Some(5.0)).await.unwrap();
    let ids: Vec<i64> = page.data.iter().map(|u| u.id).collect();
    assert_eq!(ids, vec![7, 6, 5, 4, 3]);
    assert_eq!(page.meta.total_count, 12);
    assert_eq!(page.meta.current_page, 2);
    assert_eq!(page.meta.page_size, 5);
    assert_eq!(page.meta.total_pages, 3);
}

#[tokio::test]
async fn list_users_normalizes_invalid_paging_input() {
    let auth = service(Arc::new(MockUserRepository::new()));
    for i in 1..=3 {
        auth.register(register_request(&format!("u{i}@x.com")))
            .await
            .unwrap();
    }

    // Negative page and NaN size resolve to page 1 of 10
    let page = auth.list_users(Some(-1.0), Some(f64::NAN)).await.unwrap();
    assert_eq!(page.meta.current_page, 1);
    assert_eq!(page.meta.page_size, 10);
    assert_eq!(page.data.len(), 3);
}

#[tokio::test]
async fn listing_an_empty_store_reports_one_empty_page() {
    let auth = service(Arc::new(MockUserRepository::new()));

    let page = auth.list_users(None, None).await.unwrap();
    assert!(page.data.is_empty());
    assert_eq!(page.meta.total_count, 0);
    assert_eq!(page.meta.total_pages, 1);
    assert_eq!(page.meta.current_page, 1);
}
