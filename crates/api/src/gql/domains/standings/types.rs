use async_graphql::{SimpleObject, ID};

use super::service::StandingEntry;

#[derive(SimpleObject, Clone, Debug)]
pub struct Standing {
    /// 1-based position in the table.
    pub rank: i32,
    pub team_id: ID,
    pub team_name: String,
    pub logo_url: Option<String>,
    pub wins: i32,
    pub matches_played: i32,
}

impl From<StandingEntry> for Standing {
    fn from(entry: StandingEntry) -> Self {
        Self {
            rank: entry.rank as i32,
            team_id: entry.team_id.into(),
            team_name: entry.team_name,
            logo_url: entry.logo_url,
            wins: entry.wins as i32,
            matches_played: entry.matches_played as i32,
        }
    }
}
