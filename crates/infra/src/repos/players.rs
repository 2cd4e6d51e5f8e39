use sqlx::{PgExecutor, Result as SqlxResult};
use uuid::Uuid;

use crate::models::PlayerRow;

#[derive(Debug, Clone)]
pub struct CreatePlayer {
    pub team_id: Uuid,
    pub name: String,
    pub position: Option<String>,
}

pub async fn get_by_ids<'e>(
    executor: impl PgExecutor<'e>,
    ids: &[Uuid],
) -> SqlxResult<Vec<PlayerRow>> {
    if ids.is_empty() {
        return Ok(Vec::new());
    }

    sqlx::query_as::<_, PlayerRow>(
        r#"
        SELECT id, team_id, name, position, created_at
        FROM players
        WHERE id = ANY($1::uuid[])
        "#,
    )
    .bind(ids)
    .fetch_all(executor)
    .await
}

pub async fn list_by_team<'e>(
    executor: impl PgExecutor<'e>,
    team_id: Uuid,
) -> SqlxResult<Vec<PlayerRow>> {
    sqlx::query_as::<_, PlayerRow>(
        r#"
        SELECT id, team_id, name, position, created_at
        FROM players
        WHERE team_id = $1
        ORDER BY created_at ASC, id ASC
        "#,
    )
    .bind(team_id)
    .fetch_all(executor)
    .await
}

/// Players of the given teams, oldest first.
pub async fn list_by_teams<'e>(
    executor: impl PgExecutor<'e>,
    team_ids: &[Uuid],
) -> SqlxResult<Vec<PlayerRow>> {
    if team_ids.is_empty() {
        return Ok(Vec::new());
    }

    sqlx::query_as::<_, PlayerRow>(
        r#"
        SELECT id, team_id, name, position, created_at
        FROM players
        WHERE team_id = ANY($1::uuid[])
        ORDER BY created_at ASC, id ASC
        "#,
    )
    .bind(team_ids)
    .fetch_all(executor)
    .await
}

pub async fn create<'e>(executor: impl PgExecutor<'e>, data: CreatePlayer) -> SqlxResult<PlayerRow> {
    sqlx::query_as::<_, PlayerRow>(
        r#"
        INSERT INTO players (team_id, name, position)
        VALUES ($1, $2, $3)
        RETURNING id, team_id, name, position, created_at
        "#,
    )
    .bind(data.team_id)
    .bind(data.name)
    .bind(data.position)
    .fetch_one(executor)
    .await
}
