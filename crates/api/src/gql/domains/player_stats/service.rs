use std::collections::HashMap;

use uuid::Uuid;

use infra::models::{PlayerRow, PlayerStatsRow, TeamRow};

use crate::gql::error::GqlError;

pub const UNKNOWN_PLAYER: &str = "Unknown Player";

/// A stat row with the names needed to display it.
#[derive(Debug, Clone)]
pub struct StatLine {
    pub stats: PlayerStatsRow,
    pub player_name: String,
    pub team_name: Option<String>,
}

/// Attach player and team names to `stats`, keeping its order.
pub fn join_stat_lines(
    stats: Vec<PlayerStatsRow>,
    players: &[PlayerRow],
    teams: &[TeamRow],
) -> Vec<StatLine> {
    let players_by_id: HashMap<Uuid, &PlayerRow> = players.iter().map(|p| (p.id, p)).collect();
    let team_names: HashMap<Uuid, &str> = teams.iter().map(|t| (t.id, t.name.as_str())).collect();

    stats
        .into_iter()
        .map(|stats| {
            let player = players_by_id.get(&stats.player_id);
            let player_name = player
                .map(|p| p.name.clone())
                .unwrap_or_else(|| UNKNOWN_PLAYER.to_string());
            let team_name = player
                .and_then(|p| team_names.get(&p.team_id))
                .map(|name| name.to_string());

            StatLine {
                stats,
                player_name,
                team_name,
            }
        })
        .collect()
}

/// Every provided figure must be zero or more; rates must also be finite.
pub fn ensure_non_negative_stats(
    runs: Option<i32>,
    wickets: Option<i32>,
    matches_played: Option<i32>,
    strike_rate: Option<f64>,
    average: Option<f64>,
) -> Result<(), GqlError> {
    let counts = [
        ("Runs", runs),
        ("Wickets", wickets),
        ("Matches played", matches_played),
    ];
    for (field, value) in counts {
        if value.is_some_and(|v| v < 0) {
            return Err(GqlError::validation(format!("{field} cannot be negative")));
        }
    }

    let rates = [("Strike rate", strike_rate), ("Average", average)];
    for (field, value) in rates {
        let Some(v) = value else { continue };
        if !v.is_finite() {
            return Err(GqlError::validation(format!("{field} must be a finite number")));
        }
        if v < 0.0 {
            return Err(GqlError::validation(format!("{field} cannot be negative")));
        }
    }

    Ok(())
}
