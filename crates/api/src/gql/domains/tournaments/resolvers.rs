use async_graphql::{Context, Object, Result, ID};

use crate::auth::permissions::require_user;
use crate::gql::common::helpers::{blank_to_none, parse_id, require_non_empty};
use crate::gql::common::types::{PaginatedResponse, PaginationInput, TournamentEventKind};
use crate::gql::error::{DbResultExt, GqlError};
use crate::gql::subscriptions::publish_tournament_event;
use crate::state::AppState;
use infra::repos::tournaments::{self, CreateTournament, UpdateTournament};

use super::types::{CreateTournamentInput, Tournament, TournamentStatus, UpdateTournamentInput};

const NAME_REQUIRED: &str = "Tournament name is required";

#[derive(Default)]
pub struct TournamentQuery;

#[Object]
impl TournamentQuery {
    /// Tournaments, newest first
    async fn tournaments(
        &self,
        ctx: &Context<'_>,
        pagination: Option<PaginationInput>,
    ) -> Result<PaginatedResponse<Tournament>> {
        require_user(ctx)?;
        let state = ctx.data::<AppState>()?;

        let page = pagination.unwrap_or_default().to_limit_offset();

        // Fetch tournaments and total count in parallel
        let (rows, total_count) = tokio::try_join!(
            tournaments::list(&state.db, Some(page)),
            tournaments::count(&state.db)
        )
        .db()?;

        let items: Vec<Tournament> = rows.into_iter().map(Tournament::from).collect();

        Ok(PaginatedResponse::new(items, total_count, page))
    }

    /// Get a single tournament by ID
    async fn tournament(&self, ctx: &Context<'_>, id: ID) -> Result<Option<Tournament>> {
        require_user(ctx)?;
        let state = ctx.data::<AppState>()?;
        let id = parse_id(&id, "tournament")?;

        let row = tournaments::get_by_id(&state.db, id).await.db()?;

        Ok(row.map(Tournament::from))
    }
}

#[derive(Default)]
pub struct TournamentMutation;

#[Object]
impl TournamentMutation {
    /// Create a tournament owned by the current user
    async fn create_tournament(
        &self,
        ctx: &Context<'_>,
        input: CreateTournamentInput,
    ) -> Result<Tournament> {
        let user_id = require_user(ctx)?;
        let name = require_non_empty(&input.name, NAME_REQUIRED)?;
        let state = ctx.data::<AppState>()?;

        let row = tournaments::create(
            &state.db,
            CreateTournament {
                name,
                description: blank_to_none(input.description),
                status: input.status.unwrap_or(TournamentStatus::Upcoming).into(),
                start_date: input.start_date,
                created_by: user_id,
            },
        )
        .await
        .db()?;

        tracing::info!(tournament_id = %row.id, user_id = %user_id, "Tournament created");

        Ok(row.into())
    }

    /// Update the given fields of a tournament; omitted fields are kept
    async fn update_tournament(
        &self,
        ctx: &Context<'_>,
        input: UpdateTournamentInput,
    ) -> Result<Tournament> {
        require_user(ctx)?;
        let id = parse_id(&input.id, "tournament")?;
        let name = input
            .name
            .as_deref()
            .map(|n| require_non_empty(n, NAME_REQUIRED))
            .transpose()?;
        let state = ctx.data::<AppState>()?;

        let row = tournaments::update(
            &state.db,
            id,
            UpdateTournament {
                name,
                // An empty description clears the stored one.
                description: input.description.map(|d| d.trim().to_string()),
                status: input.status.map(Into::into),
                start_date: input.start_date,
            },
        )
        .await
        .db()?
        .ok_or(GqlError::NotFound("Tournament"))?;

        tracing::info!(tournament_id = %row.id, "Tournament updated");
        publish_tournament_event(TournamentEventKind::TournamentUpdated, row.id, row.id);

        Ok(row.into())
    }
}
