use async_graphql::dataloader::DataLoader;
use async_graphql::{ComplexObject, Context, InputObject, Result, SimpleObject, ID};
use chrono::{DateTime, Utc};
use uuid::Uuid;

use infra::models::PlayerRow;

use crate::gql::domains::teams::types::Team;
use crate::gql::error::ResultExt;
use crate::gql::loaders::TeamLoader;

#[derive(SimpleObject, Clone, Debug)]
#[graphql(complex)]
pub struct Player {
    pub id: ID,
    pub team_id: ID,
    pub name: String,
    pub position: Option<String>,
    pub created_at: DateTime<Utc>,
    #[graphql(skip)]
    pub team_uuid: Uuid,
}

#[ComplexObject]
impl Player {
    /// Null once the team has been deleted.
    async fn team(&self, ctx: &Context<'_>) -> Result<Option<Team>> {
        let loader = ctx.data::<DataLoader<TeamLoader>>()?;
        let team = loader
            .load_one(self.team_uuid)
            .await
            .gql_err("Failed to load team")?;
        Ok(team.map(Team::from))
    }
}

impl From<PlayerRow> for Player {
    fn from(row: PlayerRow) -> Self {
        Self {
            id: row.id.into(),
            team_id: row.team_id.into(),
            name: row.name,
            position: row.position,
            created_at: row.created_at,
            team_uuid: row.team_id,
        }
    }
}

#[derive(InputObject)]
pub struct AddPlayerInput {
    pub team_id: ID,
    pub name: String,
    pub position: Option<String>,
}
