use async_graphql::dataloader::DataLoader;
use async_graphql::{ComplexObject, Context, Enum, InputObject, Result, SimpleObject, ID};
use chrono::{DateTime, Utc};
use uuid::Uuid;

use infra::models::MatchRow;
use infra::repos::matches::MatchStatus as RepoMatchStatus;

use crate::gql::domains::teams::types::Team;
use crate::gql::error::ResultExt;
use crate::gql::loaders::TeamLoader;

#[derive(Enum, Copy, Clone, Eq, PartialEq, Debug, serde::Serialize, serde::Deserialize)]
pub enum MatchStatus {
    Scheduled,
    Ongoing,
    Completed,
}

impl From<MatchStatus> for RepoMatchStatus {
    fn from(status: MatchStatus) -> Self {
        match status {
            MatchStatus::Scheduled => RepoMatchStatus::Scheduled,
            MatchStatus::Ongoing => RepoMatchStatus::Ongoing,
            MatchStatus::Completed => RepoMatchStatus::Completed,
        }
    }
}

impl From<RepoMatchStatus> for MatchStatus {
    fn from(status: RepoMatchStatus) -> Self {
        match status {
            RepoMatchStatus::Scheduled => MatchStatus::Scheduled,
            RepoMatchStatus::Ongoing => MatchStatus::Ongoing,
            RepoMatchStatus::Completed => MatchStatus::Completed,
        }
    }
}

#[derive(SimpleObject, Clone, Debug)]
#[graphql(complex)]
pub struct Match {
    pub id: ID,
    pub tournament_id: ID,
    pub team1_id: ID,
    pub team2_id: ID,
    pub venue: Option<String>,
    pub match_date: Option<DateTime<Utc>>,
    pub status: MatchStatus,
    pub team1_score: Option<String>,
    pub team2_score: Option<String>,
    pub winner_team_id: Option<ID>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[graphql(skip)]
    pub row: MatchRow,
}

async fn load_team(ctx: &Context<'_>, team_id: Uuid) -> Result<Option<Team>> {
    let loader = ctx.data::<DataLoader<TeamLoader>>()?;
    let team = loader.load_one(team_id).await.gql_err("Failed to load team")?;
    Ok(team.map(Team::from))
}

#[ComplexObject]
impl Match {
    /// Null if the team has been deleted since the match was scheduled.
    async fn team1(&self, ctx: &Context<'_>) -> Result<Option<Team>> {
        load_team(ctx, self.row.team1_id).await
    }

    async fn team2(&self, ctx: &Context<'_>) -> Result<Option<Team>> {
        load_team(ctx, self.row.team2_id).await
    }

    async fn winner(&self, ctx: &Context<'_>) -> Result<Option<Team>> {
        match self.row.winner_team_id {
            Some(id) => load_team(ctx, id).await,
            None => Ok(None),
        }
    }
}

impl From<MatchRow> for Match {
    fn from(row: MatchRow) -> Self {
        Self {
            id: row.id.into(),
            tournament_id: row.tournament_id.into(),
            team1_id: row.team1_id.into(),
            team2_id: row.team2_id.into(),
            venue: row.venue.clone(),
            match_date: row.match_date,
            status: row.status.into(),
            team1_score: row.team1_score.clone(),
            team2_score: row.team2_score.clone(),
            winner_team_id: row.winner_team_id.map(Into::into),
            created_at: row.created_at,
            updated_at: row.updated_at,
            row,
        }
    }
}

#[derive(InputObject)]
pub struct ScheduleMatchInput {
    pub tournament_id: ID,
    pub team1_id: ID,
    pub team2_id: ID,
    pub venue: Option<String>,
    pub match_date: Option<DateTime<Utc>>,
}

/// Scores are free text ("150/6"); empty strings clear them. No check ties
/// the winner to the scores or to the two teams.
#[derive(InputObject)]
pub struct UpdateMatchInput {
    pub id: ID,
    pub status: MatchStatus,
    pub team1_score: Option<String>,
    pub team2_score: Option<String>,
    pub winner_team_id: Option<ID>,
}
