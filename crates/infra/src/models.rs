use crate::repos::matches::MatchStatus;
use crate::repos::tournaments::TournamentStatus;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct UserRow {
    pub id: Uuid,
    pub email: String,
    pub display_name: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Credentials are kept off `UserRow` so they never travel further than sign-in.
#[derive(Debug, Clone, FromRow)]
pub struct UserCredentialsRow {
    pub id: Uuid,
    pub email: String,
    pub password_hash: String,
}

#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct TournamentRow {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub status: TournamentStatus,
    pub start_date: Option<NaiveDate>,
    pub created_by: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct TeamRow {
    pub id: Uuid,
    pub tournament_id: Uuid,
    pub name: String,
    pub logo_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct PlayerRow {
    pub id: Uuid,
    pub team_id: Uuid,
    pub name: String,
    pub position: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct MatchRow {
    pub id: Uuid,
    pub tournament_id: Uuid,
    pub team1_id: Uuid,
    pub team2_id: Uuid,
    pub venue: Option<String>,
    pub match_date: Option<DateTime<Utc>>,
    pub status: MatchStatus,
    pub team1_score: Option<String>,
    pub team2_score: Option<String>,
    pub winner_team_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl MatchRow {
    pub fn involves(&self, team_id: Uuid) -> bool {
        self.team1_id == team_id || self.team2_id == team_id
    }
}

#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct PlayerStatsRow {
    pub id: Uuid,
    pub player_id: Uuid,
    pub tournament_id: Uuid,
    pub runs: i32,
    pub wickets: i32,
    pub matches_played: i32,
    pub strike_rate: f64,
    pub average: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
