use async_graphql::{InputObject, SimpleObject, ID};
use chrono::{DateTime, Utc};

use super::service::StatLine;

#[derive(SimpleObject, Clone, Debug)]
pub struct PlayerStatLine {
    pub id: ID,
    pub player_id: ID,
    pub tournament_id: ID,
    /// "Unknown Player" when the player row no longer exists.
    pub player_name: String,
    pub team_name: Option<String>,
    pub runs: i32,
    pub wickets: i32,
    pub matches_played: i32,
    pub strike_rate: f64,
    pub average: f64,
    pub updated_at: DateTime<Utc>,
}

impl From<StatLine> for PlayerStatLine {
    fn from(line: StatLine) -> Self {
        let stats = line.stats;
        Self {
            id: stats.id.into(),
            player_id: stats.player_id.into(),
            tournament_id: stats.tournament_id.into(),
            player_name: line.player_name,
            team_name: line.team_name,
            runs: stats.runs,
            wickets: stats.wickets,
            matches_played: stats.matches_played,
            strike_rate: stats.strike_rate,
            average: stats.average,
            updated_at: stats.updated_at,
        }
    }
}

#[derive(InputObject)]
pub struct AddPlayerStatsInput {
    pub player_id: ID,
    pub tournament_id: ID,
    pub runs: i32,
    pub wickets: i32,
    pub matches_played: i32,
    pub strike_rate: f64,
    pub average: f64,
}

#[derive(InputObject)]
pub struct UpdatePlayerStatsInput {
    pub id: ID,
    pub runs: Option<i32>,
    pub wickets: Option<i32>,
    pub matches_played: Option<i32>,
    pub strike_rate: Option<f64>,
    pub average: Option<f64>,
}
