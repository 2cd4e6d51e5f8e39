use async_graphql::{Context, Object, Result, ID};

use crate::auth::permissions::require_user;
use crate::gql::common::helpers::{blank_to_none, get_tournament_or_err, parse_id};
use crate::gql::common::types::TournamentEventKind;
use crate::gql::error::{DbResultExt, GqlError};
use crate::gql::subscriptions::publish_tournament_event;
use crate::state::AppState;
use infra::repos::matches::{self, UpdateMatchResult};

use super::service::{self, ScheduleMatchParams};
use super::types::{Match, ScheduleMatchInput, UpdateMatchInput};

#[derive(Default)]
pub struct MatchQuery;

#[Object]
impl MatchQuery {
    /// Matches of a tournament, newest first
    async fn matches(&self, ctx: &Context<'_>, tournament_id: ID) -> Result<Vec<Match>> {
        require_user(ctx)?;
        let state = ctx.data::<AppState>()?;
        let tournament_id = parse_id(&tournament_id, "tournament")?;

        let rows = matches::list_by_tournament(&state.db, tournament_id)
            .await
            .db()?;

        Ok(rows.into_iter().map(Match::from).collect())
    }
}

#[derive(Default)]
pub struct MatchMutation;

#[Object]
impl MatchMutation {
    /// Schedule a match between two different teams of the tournament
    async fn schedule_match(&self, ctx: &Context<'_>, input: ScheduleMatchInput) -> Result<Match> {
        require_user(ctx)?;
        let tournament_id = parse_id(&input.tournament_id, "tournament")?;
        let team1_id = parse_id(&input.team1_id, "team")?;
        let team2_id = parse_id(&input.team2_id, "team")?;

        // Reject before touching the database.
        service::ensure_distinct_teams(team1_id, team2_id)?;

        let state = ctx.data::<AppState>()?;
        get_tournament_or_err(&state.db, tournament_id).await?;

        let row = service::schedule_match(
            &state.db,
            ScheduleMatchParams {
                tournament_id,
                team1_id,
                team2_id,
                venue: blank_to_none(input.venue),
                match_date: input.match_date,
            },
        )
        .await?;

        tracing::info!(
            match_id = %row.id,
            tournament_id = %tournament_id,
            team1_id = %team1_id,
            team2_id = %team2_id,
            "Match scheduled"
        );
        publish_tournament_event(TournamentEventKind::MatchScheduled, tournament_id, row.id);

        Ok(row.into())
    }

    /// Record status, scores and winner of a match
    async fn update_match(&self, ctx: &Context<'_>, input: UpdateMatchInput) -> Result<Match> {
        require_user(ctx)?;
        let id = parse_id(&input.id, "match")?;
        let winner_team_id = input
            .winner_team_id
            .filter(|w| !w.trim().is_empty())
            .map(|w| parse_id(&w, "winner team"))
            .transpose()?;
        let state = ctx.data::<AppState>()?;

        let row = matches::update_result(
            &state.db,
            id,
            UpdateMatchResult {
                status: input.status.into(),
                team1_score: blank_to_none(input.team1_score),
                team2_score: blank_to_none(input.team2_score),
                winner_team_id,
            },
        )
        .await
        .db()?
        .ok_or(GqlError::NotFound("Match"))?;

        tracing::info!(match_id = %row.id, status = row.status.as_str(), "Match updated");
        publish_tournament_event(TournamentEventKind::MatchUpdated, row.tournament_id, row.id);

        Ok(row.into())
    }
}
