use chrono::{Duration, Utc};
use rand::distr::Alphanumeric;
use rand::RngExt;
use sha2::{Digest, Sha256};
use sqlx::PgPool;
use uuid::Uuid;

use infra::repos::refresh_tokens::{self, NewRefreshToken};

use crate::error::AppError;

const TOKEN_LENGTH: usize = 64;

#[derive(Debug)]
pub struct RotateResult {
    pub user_id: Uuid,
    pub new_raw_token: String,
}

/// Only the SHA-256 of a refresh token is ever stored.
pub fn hash_token(raw: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(raw.as_bytes());
    format!("{:x}", hasher.finalize())
}

fn generate_raw_token() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(TOKEN_LENGTH)
        .map(char::from)
        .collect()
}

async fn store_in_family(
    pool: &PgPool,
    user_id: Uuid,
    family_id: Uuid,
    expiration_days: u64,
) -> Result<String, AppError> {
    let raw_token = generate_raw_token();
    let token_hash = hash_token(&raw_token);

    refresh_tokens::insert(
        pool,
        NewRefreshToken {
            token_hash: &token_hash,
            user_id,
            family_id,
            expires_at: Utc::now() + Duration::days(expiration_days as i64),
        },
    )
    .await?;

    Ok(raw_token)
}

/// Start a new token family for a fresh sign-in.
pub async fn issue_refresh_token(
    pool: &PgPool,
    user_id: Uuid,
    expiration_days: u64,
) -> Result<String, AppError> {
    store_in_family(pool, user_id, Uuid::new_v4(), expiration_days).await
}

/// Swap a live refresh token for a new one in the same family.
///
/// Presenting a token that was already rotated away means someone else holds
/// a copy, so the whole family is revoked and the caller must sign in again.
pub async fn rotate_refresh_token(
    pool: &PgPool,
    raw_token: &str,
    expiration_days: u64,
) -> Result<RotateResult, AppError> {
    let token_hash = hash_token(raw_token);
    let invalid = || AppError::Unauthorized("Invalid or expired refresh token".to_string());

    let Some(row) = refresh_tokens::find_by_hash(pool, &token_hash).await? else {
        return Err(invalid());
    };

    if row.revoked_at.is_some() {
        let revoked = refresh_tokens::revoke_family(pool, row.family_id).await?;
        tracing::warn!(
            family_id = %row.family_id,
            revoked,
            "Refresh token reuse detected, revoked token family"
        );
        return Err(invalid());
    }

    if row.expires_at <= Utc::now() {
        return Err(invalid());
    }

    // Losing this race means a concurrent request rotated the same token first.
    if !refresh_tokens::revoke(pool, row.id).await? {
        refresh_tokens::revoke_family(pool, row.family_id).await?;
        return Err(invalid());
    }

    let new_raw_token = store_in_family(pool, row.user_id, row.family_id, expiration_days).await?;

    Ok(RotateResult {
        user_id: row.user_id,
        new_raw_token,
    })
}

pub async fn revoke_by_token(pool: &PgPool, raw_token: &str) -> Result<(), AppError> {
    let token_hash = hash_token(raw_token);

    if let Some(row) = refresh_tokens::find_by_hash(pool, &token_hash).await? {
        refresh_tokens::revoke_family(pool, row.family_id).await?;
    }

    Ok(())
}
