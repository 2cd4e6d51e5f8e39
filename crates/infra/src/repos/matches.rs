use chrono::{DateTime, Utc};
use sqlx::{PgExecutor, Result as SqlxResult};
use uuid::Uuid;

use crate::models::MatchRow;

#[derive(Debug, Clone, Copy, PartialEq, Eq, sqlx::Type, serde::Serialize, serde::Deserialize)]
#[sqlx(type_name = "match_status", rename_all = "snake_case")]
pub enum MatchStatus {
    Scheduled,
    Ongoing,
    Completed,
}

impl MatchStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchStatus::Scheduled => "scheduled",
            MatchStatus::Ongoing => "ongoing",
            MatchStatus::Completed => "completed",
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateMatch {
    pub tournament_id: Uuid,
    pub team1_id: Uuid,
    pub team2_id: Uuid,
    pub venue: Option<String>,
    pub match_date: Option<DateTime<Utc>>,
}

/// Result fields are overwritten wholesale, `None` included.
#[derive(Debug, Clone)]
pub struct UpdateMatchResult {
    pub status: MatchStatus,
    pub team1_score: Option<String>,
    pub team2_score: Option<String>,
    pub winner_team_id: Option<Uuid>,
}

pub async fn list_by_tournament<'e>(
    executor: impl PgExecutor<'e>,
    tournament_id: Uuid,
) -> SqlxResult<Vec<MatchRow>> {
    sqlx::query_as::<_, MatchRow>(
        r#"
        SELECT id, tournament_id, team1_id, team2_id, venue, match_date, status,
               team1_score, team2_score, winner_team_id, created_at, updated_at
        FROM matches
        WHERE tournament_id = $1
        ORDER BY created_at DESC, id DESC
        "#,
    )
    .bind(tournament_id)
    .fetch_all(executor)
    .await
}

/// New matches always start out scheduled.
pub async fn create<'e>(executor: impl PgExecutor<'e>, data: CreateMatch) -> SqlxResult<MatchRow> {
    sqlx::query_as::<_, MatchRow>(
        r#"
        INSERT INTO matches (tournament_id, team1_id, team2_id, venue, match_date, status)
        VALUES ($1, $2, $3, $4, $5, 'scheduled')
        RETURNING id, tournament_id, team1_id, team2_id, venue, match_date, status,
                  team1_score, team2_score, winner_team_id, created_at, updated_at
        "#,
    )
    .bind(data.tournament_id)
    .bind(data.team1_id)
    .bind(data.team2_id)
    .bind(data.venue)
    .bind(data.match_date)
    .fetch_one(executor)
    .await
}

pub async fn update_result<'e>(
    executor: impl PgExecutor<'e>,
    id: Uuid,
    data: UpdateMatchResult,
) -> SqlxResult<Option<MatchRow>> {
    sqlx::query_as::<_, MatchRow>(
        r#"
        UPDATE matches
        SET status = $2,
            team1_score = $3,
            team2_score = $4,
            winner_team_id = $5,
            updated_at = NOW()
        WHERE id = $1
        RETURNING id, tournament_id, team1_id, team2_id, venue, match_date, status,
                  team1_score, team2_score, winner_team_id, created_at, updated_at
        "#,
    )
    .bind(id)
    .bind(data.status)
    .bind(data.team1_score)
    .bind(data.team2_score)
    .bind(data.winner_team_id)
    .fetch_optional(executor)
    .await
}
