use async_graphql::{Context, Object, Result, ID};

use crate::auth::permissions::require_user;
use crate::gql::common::helpers::parse_id;
use crate::gql::error::DbResultExt;
use crate::state::AppState;
use infra::repos::{matches, teams};

use super::service::compute_standings;
use super::types::Standing;

#[derive(Default)]
pub struct StandingsQuery;

#[Object]
impl StandingsQuery {
    /// League table of a tournament's current teams
    async fn standings(&self, ctx: &Context<'_>, tournament_id: ID) -> Result<Vec<Standing>> {
        require_user(ctx)?;
        let state = ctx.data::<AppState>()?;
        let tournament_id = parse_id(&tournament_id, "tournament")?;

        let (team_rows, match_rows) = tokio::try_join!(
            teams::list_by_tournament(&state.db, tournament_id),
            matches::list_by_tournament(&state.db, tournament_id)
        )
        .db()?;

        Ok(compute_standings(&team_rows, &match_rows)
            .into_iter()
            .map(Standing::from)
            .collect())
    }
}
