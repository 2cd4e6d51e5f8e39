use sqlx::{PgExecutor, Result as SqlxResult};
use uuid::Uuid;

use crate::models::{UserCredentialsRow, UserRow};

#[derive(Debug, Clone)]
pub struct CreateUser {
    pub email: String,
    pub display_name: Option<String>,
    pub password_hash: String,
}

pub async fn get_by_id<'e>(executor: impl PgExecutor<'e>, id: Uuid) -> SqlxResult<Option<UserRow>> {
    sqlx::query_as::<_, UserRow>(
        r#"
        SELECT id, email, display_name, created_at, updated_at
        FROM users
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(executor)
    .await
}

pub async fn get_by_ids<'e>(executor: impl PgExecutor<'e>, ids: &[Uuid]) -> SqlxResult<Vec<UserRow>> {
    if ids.is_empty() {
        return Ok(Vec::new());
    }

    sqlx::query_as::<_, UserRow>(
        r#"
        SELECT id, email, display_name, created_at, updated_at
        FROM users
        WHERE id = ANY($1::uuid[])
        "#,
    )
    .bind(ids)
    .fetch_all(executor)
    .await
}

/// Emails are matched case-insensitively.
pub async fn find_credentials_by_email<'e>(
    executor: impl PgExecutor<'e>,
    email: &str,
) -> SqlxResult<Option<UserCredentialsRow>> {
    sqlx::query_as::<_, UserCredentialsRow>(
        r#"
        SELECT id, email, password_hash
        FROM users
        WHERE LOWER(email) = LOWER($1)
        "#,
    )
    .bind(email)
    .fetch_optional(executor)
    .await
}

pub async fn email_exists<'e>(executor: impl PgExecutor<'e>, email: &str) -> SqlxResult<bool> {
    sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM users WHERE LOWER(email) = LOWER($1))")
        .bind(email)
        .fetch_one(executor)
        .await
}

pub async fn create<'e>(executor: impl PgExecutor<'e>, data: CreateUser) -> SqlxResult<UserRow> {
    sqlx::query_as::<_, UserRow>(
        r#"
        INSERT INTO users (email, display_name, password_hash)
        VALUES ($1, $2, $3)
        RETURNING id, email, display_name, created_at, updated_at
        "#,
    )
    .bind(data.email)
    .bind(data.display_name)
    .bind(data.password_hash)
    .fetch_one(executor)
    .await
}
