use crate::{models::TournamentRow, pagination::LimitOffset};
use chrono::NaiveDate;
use sqlx::{PgExecutor, Result as SqlxResult};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, sqlx::Type, serde::Serialize, serde::Deserialize)]
#[sqlx(type_name = "tournament_status", rename_all = "snake_case")]
pub enum TournamentStatus {
    Upcoming,
    Ongoing,
    Completed,
}

#[derive(Debug, Clone)]
pub struct CreateTournament {
    pub name: String,
    pub description: Option<String>,
    pub status: TournamentStatus,
    pub start_date: Option<NaiveDate>,
    pub created_by: Uuid,
}

#[derive(Debug, Clone, Default)]
pub struct UpdateTournament {
    pub name: Option<String>,
    pub description: Option<String>,
    pub status: Option<TournamentStatus>,
    pub start_date: Option<NaiveDate>,
}

pub async fn get_by_id<'e>(
    executor: impl PgExecutor<'e>,
    id: Uuid,
) -> SqlxResult<Option<TournamentRow>> {
    sqlx::query_as::<_, TournamentRow>(
        r#"
        SELECT id, name, description, status, start_date, created_by, created_at, updated_at
        FROM tournaments
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(executor)
    .await
}

/// Newest first, matching how tournament lists are browsed.
pub async fn list<'e>(
    executor: impl PgExecutor<'e>,
    page: Option<LimitOffset>,
) -> SqlxResult<Vec<TournamentRow>> {
    let p = page.unwrap_or_default();

    sqlx::query_as::<_, TournamentRow>(
        r#"
        SELECT id, name, description, status, start_date, created_by, created_at, updated_at
        FROM tournaments
        ORDER BY created_at DESC, id DESC
        LIMIT $1 OFFSET $2
        "#,
    )
    .bind(p.limit)
    .bind(p.offset)
    .fetch_all(executor)
    .await
}

pub async fn count<'e>(executor: impl PgExecutor<'e>) -> SqlxResult<i64> {
    sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM tournaments")
        .fetch_one(executor)
        .await
}

pub async fn create<'e>(
    executor: impl PgExecutor<'e>,
    data: CreateTournament,
) -> SqlxResult<TournamentRow> {
    sqlx::query_as::<_, TournamentRow>(
        r#"
        INSERT INTO tournaments (name, description, status, start_date, created_by)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING id, name, description, status, start_date, created_by, created_at, updated_at
        "#,
    )
    .bind(data.name)
    .bind(data.description)
    .bind(data.status)
    .bind(data.start_date)
    .bind(data.created_by)
    .fetch_one(executor)
    .await
}

/// Partial update; `None` fields keep their stored value. An empty
/// description clears it to NULL.
pub async fn update<'e>(
    executor: impl PgExecutor<'e>,
    id: Uuid,
    data: UpdateTournament,
) -> SqlxResult<Option<TournamentRow>> {
    sqlx::query_as::<_, TournamentRow>(
        r#"
        UPDATE tournaments
        SET name = COALESCE($2, name),
            description = CASE WHEN $3::text IS NULL THEN description ELSE NULLIF($3, '') END,
            status = COALESCE($4, status),
            start_date = COALESCE($5, start_date),
            updated_at = NOW()
        WHERE id = $1
        RETURNING id, name, description, status, start_date, created_by, created_at, updated_at
        "#,
    )
    .bind(id)
    .bind(data.name)
    .bind(data.description)
    .bind(data.status)
    .bind(data.start_date)
    .fetch_optional(executor)
    .await
}
