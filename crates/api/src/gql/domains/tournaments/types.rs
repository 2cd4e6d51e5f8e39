use async_graphql::dataloader::DataLoader;
use async_graphql::{ComplexObject, Context, Enum, InputObject, Result, SimpleObject, ID};
use chrono::{DateTime, NaiveDate, Utc};
use uuid::Uuid;

use infra::models::TournamentRow;
use infra::repos::tournaments::TournamentStatus as RepoTournamentStatus;

use crate::gql::domains::auth::types::User;
use crate::gql::error::ResultExt;
use crate::gql::loaders::UserLoader;

#[derive(Enum, Copy, Clone, Eq, PartialEq, Debug, serde::Serialize, serde::Deserialize)]
pub enum TournamentStatus {
    Upcoming,
    Ongoing,
    Completed,
}

impl From<TournamentStatus> for RepoTournamentStatus {
    fn from(status: TournamentStatus) -> Self {
        match status {
            TournamentStatus::Upcoming => RepoTournamentStatus::Upcoming,
            TournamentStatus::Ongoing => RepoTournamentStatus::Ongoing,
            TournamentStatus::Completed => RepoTournamentStatus::Completed,
        }
    }
}

impl From<RepoTournamentStatus> for TournamentStatus {
    fn from(status: RepoTournamentStatus) -> Self {
        match status {
            RepoTournamentStatus::Upcoming => TournamentStatus::Upcoming,
            RepoTournamentStatus::Ongoing => TournamentStatus::Ongoing,
            RepoTournamentStatus::Completed => TournamentStatus::Completed,
        }
    }
}

#[derive(SimpleObject, Clone, Debug)]
#[graphql(complex)]
pub struct Tournament {
    pub id: ID,
    pub name: String,
    pub description: Option<String>,
    pub status: TournamentStatus,
    pub start_date: Option<NaiveDate>,
    #[graphql(skip)]
    pub created_by_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[ComplexObject]
impl Tournament {
    /// The user who created the tournament, if the account still exists.
    async fn created_by(&self, ctx: &Context<'_>) -> Result<Option<User>> {
        let Some(user_id) = self.created_by_id else {
            return Ok(None);
        };
        let loader = ctx.data::<DataLoader<UserLoader>>()?;
        let user = loader.load_one(user_id).await.gql_err("Failed to load user")?;
        Ok(user.map(User::from))
    }
}

impl From<TournamentRow> for Tournament {
    fn from(row: TournamentRow) -> Self {
        Self {
            id: row.id.into(),
            name: row.name,
            description: row.description,
            status: row.status.into(),
            start_date: row.start_date,
            created_by_id: row.created_by,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

#[derive(InputObject)]
pub struct CreateTournamentInput {
    pub name: String,
    pub description: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub status: Option<TournamentStatus>,
}

#[derive(InputObject)]
pub struct UpdateTournamentInput {
    pub id: ID,
    pub name: Option<String>,
    pub description: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub status: Option<TournamentStatus>,
}
