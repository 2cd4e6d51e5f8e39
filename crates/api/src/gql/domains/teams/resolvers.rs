use async_graphql::{Context, Object, Result, ID};

use crate::auth::permissions::require_user;
use crate::gql::common::helpers::{blank_to_none, get_tournament_or_err, parse_id, require_non_empty};
use crate::gql::common::types::TournamentEventKind;
use crate::gql::error::{DbResultExt, GqlError};
use crate::gql::subscriptions::publish_tournament_event;
use crate::state::AppState;
use infra::repos::teams::{self, CreateTeam, UpdateTeam};

use super::types::{AddTeamInput, Team, UpdateTeamInput};

const NAME_REQUIRED: &str = "Team name is required";

#[derive(Default)]
pub struct TeamQuery;

#[Object]
impl TeamQuery {
    /// Teams of a tournament, newest first
    async fn teams(&self, ctx: &Context<'_>, tournament_id: ID) -> Result<Vec<Team>> {
        require_user(ctx)?;
        let state = ctx.data::<AppState>()?;
        let tournament_id = parse_id(&tournament_id, "tournament")?;

        let rows = teams::list_by_tournament(&state.db, tournament_id)
            .await
            .db()?;

        Ok(rows.into_iter().map(Team::from).collect())
    }
}

#[derive(Default)]
pub struct TeamMutation;

#[Object]
impl TeamMutation {
    /// Add a team to an existing tournament
    async fn add_team(&self, ctx: &Context<'_>, input: AddTeamInput) -> Result<Team> {
        require_user(ctx)?;
        let tournament_id = parse_id(&input.tournament_id, "tournament")?;
        let name = require_non_empty(&input.name, NAME_REQUIRED)?;
        let state = ctx.data::<AppState>()?;

        get_tournament_or_err(&state.db, tournament_id).await?;

        let row = teams::create(
            &state.db,
            CreateTeam {
                tournament_id,
                name,
                logo_url: blank_to_none(input.logo_url),
            },
        )
        .await
        .db()?;

        tracing::info!(team_id = %row.id, tournament_id = %tournament_id, "Team added");
        publish_tournament_event(TournamentEventKind::TeamAdded, tournament_id, row.id);

        Ok(row.into())
    }

    /// Rename a team and replace its logo; an empty logo clears it
    async fn update_team(&self, ctx: &Context<'_>, input: UpdateTeamInput) -> Result<Team> {
        require_user(ctx)?;
        let id = parse_id(&input.id, "team")?;
        let name = require_non_empty(&input.name, NAME_REQUIRED)?;
        let state = ctx.data::<AppState>()?;

        let row = teams::update(
            &state.db,
            id,
            UpdateTeam {
                name,
                logo_url: blank_to_none(input.logo_url),
            },
        )
        .await
        .db()?
        .ok_or(GqlError::NotFound("Team"))?;

        tracing::info!(team_id = %row.id, "Team updated");
        publish_tournament_event(TournamentEventKind::TeamUpdated, row.tournament_id, row.id);

        Ok(row.into())
    }

    /// Delete a team. Its players and any matches referencing it are kept.
    async fn delete_team(&self, ctx: &Context<'_>, id: ID) -> Result<bool> {
        require_user(ctx)?;
        let id = parse_id(&id, "team")?;
        let state = ctx.data::<AppState>()?;

        let Some(team) = teams::get_by_id(&state.db, id).await.db()? else {
            return Ok(false);
        };

        let deleted = teams::delete(&state.db, id).await.db()?;

        if deleted {
            tracing::info!(team_id = %id, tournament_id = %team.tournament_id, "Team deleted");
            publish_tournament_event(TournamentEventKind::TeamDeleted, team.tournament_id, id);
        }

        Ok(deleted)
    }
}
