use std::cmp::Ordering;

use uuid::Uuid;

use infra::models::{MatchRow, TeamRow};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StandingEntry {
    pub rank: usize,
    pub team_id: Uuid,
    pub team_name: String,
    pub logo_url: Option<String>,
    pub wins: u32,
    pub matches_played: u32,
}

/// Rank `teams` by the matches they appear in.
///
/// Wins count matches whose winner is the team; matches played count every
/// match naming the team on either side, whatever its status. Matches that
/// only reference deleted teams contribute nothing.
///
/// Order: wins descending, matches played ascending, name ascending
/// (byte-wise), then id, so equal records always come out the same way.
pub fn compute_standings(teams: &[TeamRow], matches: &[MatchRow]) -> Vec<StandingEntry> {
    let mut entries: Vec<StandingEntry> = teams
        .iter()
        .map(|t| {
            let wins = matches
                .iter()
                .filter(|m| m.winner_team_id == Some(t.id))
                .count() as u32;
            let matches_played = matches.iter().filter(|m| m.involves(t.id)).count() as u32;

            StandingEntry {
                rank: 0,
                team_id: t.id,
                team_name: t.name.clone(),
                logo_url: t.logo_url.clone(),
                wins,
                matches_played,
            }
        })
        .collect();

    entries.sort_by(compare_entries);
    for (i, entry) in entries.iter_mut().enumerate() {
        entry.rank = i + 1;
    }
    entries
}

fn compare_entries(a: &StandingEntry, b: &StandingEntry) -> Ordering {
    b.wins
        .cmp(&a.wins)
        .then(a.matches_played.cmp(&b.matches_played))
        .then_with(|| a.team_name.as_bytes().cmp(b.team_name.as_bytes()))
        .then(a.team_id.cmp(&b.team_id))
}
