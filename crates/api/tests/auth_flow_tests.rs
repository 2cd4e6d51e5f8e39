mod common;

use api::auth::refresh::{issue_refresh_token, revoke_by_token, rotate_refresh_token};
use api::error::AppError;
use api::services::TokenCleanupService;
use common::*;
use tokio_test::{assert_err, assert_ok};

// These need TEST_DATABASE_URL and return early without it.

#[tokio::test]
async fn test_me_returns_the_session_user() {
    let Some(app_state) = setup_test_db().await else {
        return;
    };
    let schema = test_schema(app_state.clone());
    let (user_id, claims) = create_test_user(&app_state, "captain").await;

    let response = execute_graphql(&schema, "{ me { id email displayName } }", None, Some(claims.clone())).await;
    assert!(response.errors.is_empty(), "{:?}", response.errors);

    let data = response.data.into_json().unwrap();
    assert_eq!(data["me"]["id"], user_id.to_string());
    assert_eq!(data["me"]["email"], claims.email);
    assert_eq!(data["me"]["displayName"], "captain");
}

#[tokio::test]
async fn test_refresh_token_rotation() {
    let Some(app_state) = setup_test_db().await else {
        return;
    };
    let (user_id, _claims) = create_test_user(&app_state, "rotator").await;

    let first = assert_ok!(issue_refresh_token(&app_state.db, user_id, 7).await);
    let rotated = assert_ok!(rotate_refresh_token(&app_state.db, &first, 7).await);
    assert_eq!(rotated.user_id, user_id);
    assert_ne!(rotated.new_raw_token, first);

    let second = assert_ok!(rotate_refresh_token(&app_state.db, &rotated.new_raw_token, 7).await);
    assert_eq!(second.user_id, user_id);
}

#[tokio::test]
async fn test_reusing_a_rotated_token_revokes_the_family() {
    let Some(app_state) = setup_test_db().await else {
        return;
    };
    let (user_id, _claims) = create_test_user(&app_state, "victim").await;

    let stolen = assert_ok!(issue_refresh_token(&app_state.db, user_id, 7).await);
    let legit = assert_ok!(rotate_refresh_token(&app_state.db, &stolen, 7).await);

    let err = assert_err!(rotate_refresh_token(&app_state.db, &stolen, 7).await);
    assert!(matches!(err, AppError::Unauthorized(_)));

    // The legitimate holder is signed out too.
    assert_err!(rotate_refresh_token(&app_state.db, &legit.new_raw_token, 7).await);
}

#[tokio::test]
async fn test_sign_out_revokes_and_unknown_tokens_are_rejected() {
    let Some(app_state) = setup_test_db().await else {
        return;
    };
    let (user_id, _claims) = create_test_user(&app_state, "leaver").await;

    let token = assert_ok!(issue_refresh_token(&app_state.db, user_id, 7).await);
    assert_ok!(revoke_by_token(&app_state.db, &token).await);
    assert_err!(rotate_refresh_token(&app_state.db, &token, 7).await);

    // Unknown tokens: sign-out is a no-op, refresh is refused.
    assert_ok!(revoke_by_token(&app_state.db, "never-issued").await);
    assert_err!(rotate_refresh_token(&app_state.db, "never-issued", 7).await);
}

#[tokio::test]
async fn test_expired_tokens_are_refused_and_purged() {
    let Some(app_state) = setup_test_db().await else {
        return;
    };
    let (user_id, _claims) = create_test_user(&app_state, "sleeper").await;

    let token = assert_ok!(issue_refresh_token(&app_state.db, user_id, 0).await);
    assert_err!(rotate_refresh_token(&app_state.db, &token, 7).await);

    let service = TokenCleanupService::new(app_state.clone());
    let removed = assert_ok!(service.purge_expired().await);
    assert!(removed >= 1);
}
