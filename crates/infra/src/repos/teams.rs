use sqlx::{PgExecutor, Result as SqlxResult};
use uuid::Uuid;

use crate::models::TeamRow;

#[derive(Debug, Clone)]
pub struct CreateTeam {
    pub tournament_id: Uuid,
    pub name: String,
    pub logo_url: Option<String>,
}

/// Both fields are written as given; a `None` logo clears the stored one.
#[derive(Debug, Clone)]
pub struct UpdateTeam {
    pub name: String,
    pub logo_url: Option<String>,
}

pub async fn get_by_id<'e>(executor: impl PgExecutor<'e>, id: Uuid) -> SqlxResult<Option<TeamRow>> {
    sqlx::query_as::<_, TeamRow>(
        r#"
        SELECT id, tournament_id, name, logo_url, created_at, updated_at
        FROM teams
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(executor)
    .await
}

pub async fn get_by_ids<'e>(executor: impl PgExecutor<'e>, ids: &[Uuid]) -> SqlxResult<Vec<TeamRow>> {
    if ids.is_empty() {
        return Ok(Vec::new());
    }

    sqlx::query_as::<_, TeamRow>(
        r#"
        SELECT id, tournament_id, name, logo_url, created_at, updated_at
        FROM teams
        WHERE id = ANY($1::uuid[])
        "#,
    )
    .bind(ids)
    .fetch_all(executor)
    .await
}

pub async fn list_by_tournament<'e>(
    executor: impl PgExecutor<'e>,
    tournament_id: Uuid,
) -> SqlxResult<Vec<TeamRow>> {
    sqlx::query_as::<_, TeamRow>(
        r#"
        SELECT id, tournament_id, name, logo_url, created_at, updated_at
        FROM teams
        WHERE tournament_id = $1
        ORDER BY created_at DESC, id DESC
        "#,
    )
    .bind(tournament_id)
    .fetch_all(executor)
    .await
}

pub async fn create<'e>(executor: impl PgExecutor<'e>, data: CreateTeam) -> SqlxResult<TeamRow> {
    sqlx::query_as::<_, TeamRow>(
        r#"
        INSERT INTO teams (tournament_id, name, logo_url)
        VALUES ($1, $2, $3)
        RETURNING id, tournament_id, name, logo_url, created_at, updated_at
        "#,
    )
    .bind(data.tournament_id)
    .bind(data.name)
    .bind(data.logo_url)
    .fetch_one(executor)
    .await
}

pub async fn update<'e>(
    executor: impl PgExecutor<'e>,
    id: Uuid,
    data: UpdateTeam,
) -> SqlxResult<Option<TeamRow>> {
    sqlx::query_as::<_, TeamRow>(
        r#"
        UPDATE teams
        SET name = $2,
            logo_url = $3,
            updated_at = NOW()
        WHERE id = $1
        RETURNING id, tournament_id, name, logo_url, created_at, updated_at
        "#,
    )
    .bind(id)
    .bind(data.name)
    .bind(data.logo_url)
    .fetch_optional(executor)
    .await
}

/// Deletes the team row only. Players and matches pointing at it stay as
/// they are.
pub async fn delete<'e>(executor: impl PgExecutor<'e>, id: Uuid) -> SqlxResult<bool> {
    let result = sqlx::query("DELETE FROM teams WHERE id = $1")
        .bind(id)
        .execute(executor)
        .await?;

    Ok(result.rows_affected() > 0)
}
