use sqlx::{PgExecutor, Result as SqlxResult};
use uuid::Uuid;

use crate::models::PlayerStatsRow;

#[derive(Debug, Clone)]
pub struct CreatePlayerStats {
    pub player_id: Uuid,
    pub tournament_id: Uuid,
    pub runs: i32,
    pub wickets: i32,
    pub matches_played: i32,
    pub strike_rate: f64,
    pub average: f64,
}

#[derive(Debug, Clone, Default)]
pub struct UpdatePlayerStats {
    pub runs: Option<i32>,
    pub wickets: Option<i32>,
    pub matches_played: Option<i32>,
    pub strike_rate: Option<f64>,
    pub average: Option<f64>,
}

pub async fn get_by_id<'e>(
    executor: impl PgExecutor<'e>,
    id: Uuid,
) -> SqlxResult<Option<PlayerStatsRow>> {
    sqlx::query_as::<_, PlayerStatsRow>(
        r#"
        SELECT id, player_id, tournament_id, runs, wickets, matches_played,
               strike_rate, average, created_at, updated_at
        FROM player_stats
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(executor)
    .await
}

/// Top scorers first.
pub async fn list_by_tournament<'e>(
    executor: impl PgExecutor<'e>,
    tournament_id: Uuid,
) -> SqlxResult<Vec<PlayerStatsRow>> {
    sqlx::query_as::<_, PlayerStatsRow>(
        r#"
        SELECT id, player_id, tournament_id, runs, wickets, matches_played,
               strike_rate, average, created_at, updated_at
        FROM player_stats
        WHERE tournament_id = $1
        ORDER BY runs DESC, id ASC
        "#,
    )
    .bind(tournament_id)
    .fetch_all(executor)
    .await
}

pub async fn create<'e>(
    executor: impl PgExecutor<'e>,
    data: CreatePlayerStats,
) -> SqlxResult<PlayerStatsRow> {
    sqlx::query_as::<_, PlayerStatsRow>(
        r#"
        INSERT INTO player_stats (player_id, tournament_id, runs, wickets, matches_played,
                                  strike_rate, average)
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        RETURNING id, player_id, tournament_id, runs, wickets, matches_played,
                  strike_rate, average, created_at, updated_at
        "#,
    )
    .bind(data.player_id)
    .bind(data.tournament_id)
    .bind(data.runs)
    .bind(data.wickets)
    .bind(data.matches_played)
    .bind(data.strike_rate)
    .bind(data.average)
    .fetch_one(executor)
    .await
}

pub async fn update<'e>(
    executor: impl PgExecutor<'e>,
    id: Uuid,
    data: UpdatePlayerStats,
) -> SqlxResult<Option<PlayerStatsRow>> {
    sqlx::query_as::<_, PlayerStatsRow>(
        r#"
        UPDATE player_stats
        SET runs = COALESCE($2, runs),
            wickets = COALESCE($3, wickets),
            matches_played = COALESCE($4, matches_played),
            strike_rate = COALESCE($5, strike_rate),
            average = COALESCE($6, average),
            updated_at = NOW()
        WHERE id = $1
        RETURNING id, player_id, tournament_id, runs, wickets, matches_played,
                  strike_rate, average, created_at, updated_at
        "#,
    )
    .bind(id)
    .bind(data.runs)
    .bind(data.wickets)
    .bind(data.matches_played)
    .bind(data.strike_rate)
    .bind(data.average)
    .fetch_optional(executor)
    .await
}
