use async_graphql::{Error, Result, ID};
use uuid::Uuid;

use infra::db::Db;
use infra::models::TournamentRow;

use crate::gql::error::{GqlError, ResultExt};

pub fn parse_id(id: &ID, what: &str) -> Result<Uuid> {
    Uuid::parse_str(id.as_str()).gql_err(&format!("Invalid {what} ID"))
}

/// Trimmed value, or `message` as the error when nothing is left.
pub fn require_non_empty(value: &str, message: &str) -> Result<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(Error::new(message));
    }
    Ok(trimmed.to_string())
}

/// Optional free-text inputs: blank strings are stored as null.
pub fn blank_to_none(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

pub async fn get_tournament_or_err(db: &Db, tournament_id: Uuid) -> Result<TournamentRow> {
    let tournament = infra::repos::tournaments::get_by_id(db, tournament_id)
        .await
        .map_err(GqlError::from)?
        .ok_or(GqlError::NotFound("Tournament"))?;
    Ok(tournament)
}
