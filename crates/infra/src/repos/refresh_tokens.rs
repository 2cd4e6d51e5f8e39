use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgExecutor, Result as SqlxResult};
use uuid::Uuid;

#[derive(Debug, Clone, FromRow)]
pub struct RefreshTokenRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub family_id: Uuid,
    pub expires_at: DateTime<Utc>,
    pub revoked_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone)]
pub struct NewRefreshToken<'a> {
    pub token_hash: &'a str,
    pub user_id: Uuid,
    pub family_id: Uuid,
    pub expires_at: DateTime<Utc>,
}

pub async fn insert<'e>(executor: impl PgExecutor<'e>, token: NewRefreshToken<'_>) -> SqlxResult<Uuid> {
    sqlx::query_scalar::<_, Uuid>(
        r#"
        INSERT INTO refresh_tokens (token_hash, user_id, family_id, expires_at)
        VALUES ($1, $2, $3, $4)
        RETURNING id
        "#,
    )
    .bind(token.token_hash)
    .bind(token.user_id)
    .bind(token.family_id)
    .bind(token.expires_at)
    .fetch_one(executor)
    .await
}

/// Look a token up by hash regardless of state; callers decide what revoked
/// or expired means for them.
pub async fn find_by_hash<'e>(
    executor: impl PgExecutor<'e>,
    token_hash: &str,
) -> SqlxResult<Option<RefreshTokenRow>> {
    sqlx::query_as::<_, RefreshTokenRow>(
        r#"
        SELECT id, user_id, family_id, expires_at, revoked_at
        FROM refresh_tokens
        WHERE token_hash = $1
        "#,
    )
    .bind(token_hash)
    .fetch_optional(executor)
    .await
}

/// Revoke a single token. Returns false when it was already revoked, which
/// lets concurrent rotations of the same token lose cleanly.
pub async fn revoke<'e>(executor: impl PgExecutor<'e>, id: Uuid) -> SqlxResult<bool> {
    let result = sqlx::query(
        "UPDATE refresh_tokens SET revoked_at = NOW() WHERE id = $1 AND revoked_at IS NULL",
    )
    .bind(id)
    .execute(executor)
    .await?;

    Ok(result.rows_affected() == 1)
}

pub async fn revoke_family<'e>(executor: impl PgExecutor<'e>, family_id: Uuid) -> SqlxResult<u64> {
    let result = sqlx::query(
        "UPDATE refresh_tokens SET revoked_at = NOW() WHERE family_id = $1 AND revoked_at IS NULL",
    )
    .bind(family_id)
    .execute(executor)
    .await?;

    Ok(result.rows_affected())
}

pub async fn delete_expired<'e>(executor: impl PgExecutor<'e>) -> SqlxResult<u64> {
    let result = sqlx::query("DELETE FROM refresh_tokens WHERE expires_at < NOW()")
        .execute(executor)
        .await?;

    Ok(result.rows_affected())
}
