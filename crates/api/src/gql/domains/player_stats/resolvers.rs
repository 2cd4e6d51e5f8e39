use async_graphql::{Context, Object, Result, ID};

use crate::auth::permissions::require_user;
use crate::gql::common::helpers::{get_tournament_or_err, parse_id};
use crate::gql::common::types::TournamentEventKind;
use crate::gql::error::{DbResultExt, GqlError};
use crate::gql::subscriptions::publish_tournament_event;
use crate::state::AppState;
use infra::repos::player_stats::{self, CreatePlayerStats, UpdatePlayerStats};
use infra::repos::{players, teams};

use super::service::{ensure_non_negative_stats, join_stat_lines, StatLine};
use super::types::{AddPlayerStatsInput, PlayerStatLine, UpdatePlayerStatsInput};

async fn to_stat_line(state: &AppState, row: infra::models::PlayerStatsRow) -> Result<PlayerStatLine> {
    let player_rows = players::get_by_ids(&state.db, &[row.player_id]).await.db()?;
    let team_ids: Vec<_> = player_rows.iter().map(|p| p.team_id).collect();
    let team_rows = teams::get_by_ids(&state.db, &team_ids).await.db()?;

    let line = join_stat_lines(vec![row], &player_rows, &team_rows)
        .into_iter()
        .next()
        .map(PlayerStatLine::from)
        .ok_or(GqlError::NotFound("Player stats"))?;
    Ok(line)
}

#[derive(Default)]
pub struct PlayerStatsQuery;

#[Object]
impl PlayerStatsQuery {
    /// Player stats of a tournament, top run scorers first
    async fn player_stats(&self, ctx: &Context<'_>, tournament_id: ID) -> Result<Vec<PlayerStatLine>> {
        require_user(ctx)?;
        let state = ctx.data::<AppState>()?;
        let tournament_id = parse_id(&tournament_id, "tournament")?;

        let stats = player_stats::list_by_tournament(&state.db, tournament_id)
            .await
            .db()?;

        let player_ids: Vec<_> = stats.iter().map(|s| s.player_id).collect();
        let player_rows = players::get_by_ids(&state.db, &player_ids).await.db()?;

        let team_ids: Vec<_> = player_rows.iter().map(|p| p.team_id).collect();
        let team_rows = teams::get_by_ids(&state.db, &team_ids).await.db()?;

        Ok(join_stat_lines(stats, &player_rows, &team_rows)
            .into_iter()
            .map(|line: StatLine| line.into())
            .collect())
    }
}

#[derive(Default)]
pub struct PlayerStatsMutation;

#[Object]
impl PlayerStatsMutation {
    /// Record a player's figures for a tournament
    async fn add_player_stats(
        &self,
        ctx: &Context<'_>,
        input: AddPlayerStatsInput,
    ) -> Result<PlayerStatLine> {
        require_user(ctx)?;
        let player_id = parse_id(&input.player_id, "player")?;
        let tournament_id = parse_id(&input.tournament_id, "tournament")?;
        ensure_non_negative_stats(
            Some(input.runs),
            Some(input.wickets),
            Some(input.matches_played),
            Some(input.strike_rate),
            Some(input.average),
        )?;
        let state = ctx.data::<AppState>()?;

        get_tournament_or_err(&state.db, tournament_id).await?;

        let row = player_stats::create(
            &state.db,
            CreatePlayerStats {
                player_id,
                tournament_id,
                runs: input.runs,
                wickets: input.wickets,
                matches_played: input.matches_played,
                strike_rate: input.strike_rate,
                average: input.average,
            },
        )
        .await
        .db()?;

        tracing::info!(stats_id = %row.id, player_id = %player_id, "Player stats added");
        publish_tournament_event(TournamentEventKind::StatsUpdated, tournament_id, row.id);

        to_stat_line(state, row).await
    }

    /// Update the given figures; omitted ones are kept
    async fn update_player_stats(
        &self,
        ctx: &Context<'_>,
        input: UpdatePlayerStatsInput,
    ) -> Result<PlayerStatLine> {
        require_user(ctx)?;
        let id = parse_id(&input.id, "player stats")?;
        ensure_non_negative_stats(
            input.runs,
            input.wickets,
            input.matches_played,
            input.strike_rate,
            input.average,
        )?;
        let state = ctx.data::<AppState>()?;

        let row = player_stats::update(
            &state.db,
            id,
            UpdatePlayerStats {
                runs: input.runs,
                wickets: input.wickets,
                matches_played: input.matches_played,
                strike_rate: input.strike_rate,
                average: input.average,
            },
        )
        .await
        .db()?
        .ok_or(GqlError::NotFound("Player stats"))?;

        tracing::info!(stats_id = %row.id, "Player stats updated");
        publish_tournament_event(TournamentEventKind::StatsUpdated, row.tournament_id, row.id);

        to_stat_line(state, row).await
    }
}
