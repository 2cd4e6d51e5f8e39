use async_graphql::{Enum, InputObject, OutputType, SimpleObject, ID};
use chrono::{DateTime, Utc};
use infra::pagination::LimitOffset;

use crate::gql::domains::tournaments::types::Tournament;

#[derive(InputObject, Clone, Copy, Debug, Default)]
pub struct PaginationInput {
    /// Page size, 1 to 100. Defaults to 50.
    pub limit: Option<i32>,
    pub offset: Option<i32>,
}

impl PaginationInput {
    pub fn to_limit_offset(self) -> LimitOffset {
        LimitOffset::new(self.limit.map(i64::from), self.offset.map(i64::from))
    }
}

#[derive(SimpleObject)]
#[graphql(concrete(name = "TournamentPage", params(Tournament)))]
pub struct PaginatedResponse<T: OutputType> {
    pub items: Vec<T>,
    pub total_count: i32,
    pub page_size: i32,
    pub offset: i32,
    pub has_next_page: bool,
}

impl<T: OutputType> PaginatedResponse<T> {
    pub fn new(items: Vec<T>, total_count: i64, page: LimitOffset) -> Self {
        let page_size = items.len() as i32;
        let offset = page.offset as i32;
        let total_count = total_count as i32;
        Self {
            items,
            total_count,
            page_size,
            offset,
            has_next_page: offset + page_size < total_count,
        }
    }
}

#[derive(Enum, Copy, Clone, Eq, PartialEq, Debug)]
pub enum TournamentEventKind {
    TeamAdded,
    TeamUpdated,
    TeamDeleted,
    PlayerAdded,
    MatchScheduled,
    MatchUpdated,
    StatsUpdated,
    TournamentUpdated,
}

/// Something changed inside a tournament; subscribers re-fetch what they show.
#[derive(SimpleObject, Clone, Debug)]
pub struct TournamentEvent {
    pub kind: TournamentEventKind,
    pub tournament_id: ID,
    pub entity_id: ID,
    pub occurred_at: DateTime<Utc>,
}
