use async_graphql::{Context, Object, Result, ID};

use crate::auth::permissions::require_user;
use crate::gql::common::helpers::{blank_to_none, parse_id, require_non_empty};
use crate::gql::common::types::TournamentEventKind;
use crate::gql::error::{DbResultExt, GqlError};
use crate::gql::subscriptions::publish_tournament_event;
use crate::state::AppState;
use infra::repos::players::{self, CreatePlayer};
use infra::repos::teams;

use super::types::{AddPlayerInput, Player};

#[derive(Default)]
pub struct PlayerQuery;

#[Object]
impl PlayerQuery {
    /// Players of a team, oldest first
    async fn players(&self, ctx: &Context<'_>, team_id: ID) -> Result<Vec<Player>> {
        require_user(ctx)?;
        let state = ctx.data::<AppState>()?;
        let team_id = parse_id(&team_id, "team")?;

        let rows = players::list_by_team(&state.db, team_id).await.db()?;

        Ok(rows.into_iter().map(Player::from).collect())
    }

    /// Players of every current team in a tournament, oldest first
    async fn tournament_players(&self, ctx: &Context<'_>, tournament_id: ID) -> Result<Vec<Player>> {
        require_user(ctx)?;
        let state = ctx.data::<AppState>()?;
        let tournament_id = parse_id(&tournament_id, "tournament")?;

        let team_ids: Vec<_> = teams::list_by_tournament(&state.db, tournament_id)
            .await
            .db()?
            .into_iter()
            .map(|t| t.id)
            .collect();

        let rows = players::list_by_teams(&state.db, &team_ids).await.db()?;

        Ok(rows.into_iter().map(Player::from).collect())
    }
}

#[derive(Default)]
pub struct PlayerMutation;

#[Object]
impl PlayerMutation {
    /// Add a player to an existing team
    async fn add_player(&self, ctx: &Context<'_>, input: AddPlayerInput) -> Result<Player> {
        require_user(ctx)?;
        let team_id = parse_id(&input.team_id, "team")?;
        let name = require_non_empty(&input.name, "Player name is required")?;
        let state = ctx.data::<AppState>()?;

        let team = teams::get_by_id(&state.db, team_id)
            .await
            .db()?
            .ok_or(GqlError::NotFound("Team"))?;

        let row = players::create(
            &state.db,
            CreatePlayer {
                team_id,
                name,
                position: blank_to_none(input.position),
            },
        )
        .await
        .db()?;

        tracing::info!(player_id = %row.id, team_id = %team_id, "Player added");
        publish_tournament_event(TournamentEventKind::PlayerAdded, team.tournament_id, row.id);

        Ok(row.into())
    }
}
