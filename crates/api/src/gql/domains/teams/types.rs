use async_graphql::{InputObject, SimpleObject, ID};
use chrono::{DateTime, Utc};
use infra::models::TeamRow;

#[derive(SimpleObject, Clone, Debug)]
pub struct Team {
    pub id: ID,
    pub tournament_id: ID,
    pub name: String,
    pub logo_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<TeamRow> for Team {
    fn from(row: TeamRow) -> Self {
        Self {
            id: row.id.into(),
            tournament_id: row.tournament_id.into(),
            name: row.name,
            logo_url: row.logo_url,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

#[derive(InputObject)]
pub struct AddTeamInput {
    pub tournament_id: ID,
    pub name: String,
    pub logo_url: Option<String>,
}

#[derive(InputObject)]
pub struct UpdateTeamInput {
    pub id: ID,
    pub name: String,
    pub logo_url: Option<String>,
}
