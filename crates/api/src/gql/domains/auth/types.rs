use async_graphql::{SimpleObject, ID};
use chrono::{DateTime, Utc};
use infra::models::UserRow;

#[derive(SimpleObject, Clone, Debug)]
pub struct User {
    pub id: ID,
    pub email: String,
    pub display_name: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        Self {
            id: row.id.into(),
            email: row.email,
            display_name: row.display_name,
            created_at: row.created_at,
        }
    }
}
