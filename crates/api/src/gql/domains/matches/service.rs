use std::collections::HashSet;

use uuid::Uuid;

use infra::models::{MatchRow, TeamRow};
use infra::repos::{matches, matches::CreateMatch, teams};

use crate::gql::error::GqlError;

pub const SAME_TEAM_ERROR: &str = "Please select different teams";
pub const TEAM_NOT_IN_TOURNAMENT_ERROR: &str = "Both teams must belong to this tournament";

/// Parameters for scheduling a match (parsed by the resolver).
pub struct ScheduleMatchParams {
    pub tournament_id: Uuid,
    pub team1_id: Uuid,
    pub team2_id: Uuid,
    pub venue: Option<String>,
    pub match_date: Option<chrono::DateTime<chrono::Utc>>,
}

pub fn ensure_distinct_teams(team1_id: Uuid, team2_id: Uuid) -> Result<(), GqlError> {
    if team1_id == team2_id {
        return Err(GqlError::validation(SAME_TEAM_ERROR));
    }
    Ok(())
}

/// `found` must contain every id in `wanted`, each belonging to `tournament_id`.
pub fn ensure_teams_in_tournament(
    tournament_id: Uuid,
    wanted: &[Uuid],
    found: &[TeamRow],
) -> Result<(), GqlError> {
    let in_tournament: HashSet<Uuid> = found
        .iter()
        .filter(|t| t.tournament_id == tournament_id)
        .map(|t| t.id)
        .collect();

    if wanted.iter().all(|id| in_tournament.contains(id)) {
        Ok(())
    } else {
        Err(GqlError::validation(TEAM_NOT_IN_TOURNAMENT_ERROR))
    }
}

/// Validate and insert a new scheduled match.
///
/// The same-team check runs before any database access.
pub async fn schedule_match(
    pool: &sqlx::PgPool,
    params: ScheduleMatchParams,
) -> Result<MatchRow, GqlError> {
    ensure_distinct_teams(params.team1_id, params.team2_id)?;

    let wanted = [params.team1_id, params.team2_id];
    let found = teams::get_by_ids(pool, &wanted).await?;
    ensure_teams_in_tournament(params.tournament_id, &wanted, &found)?;

    let row = matches::create(
        pool,
        CreateMatch {
            tournament_id: params.tournament_id,
            team1_id: params.team1_id,
            team2_id: params.team2_id,
            venue: params.venue,
            match_date: params.match_date,
        },
    )
    .await?;

    Ok(row)
}
