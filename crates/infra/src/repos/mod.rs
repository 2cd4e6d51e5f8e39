pub mod matches;
pub mod player_stats;
pub mod players;
pub mod refresh_tokens;
pub mod teams;
pub mod tournaments;
pub mod users;

pub use matches::{CreateMatch, MatchStatus, UpdateMatchResult};
pub use player_stats::{CreatePlayerStats, UpdatePlayerStats};
pub use players::CreatePlayer;
pub use teams::{CreateTeam, UpdateTeam};
pub use tournaments::{CreateTournament, TournamentStatus, UpdateTournament};
pub use users::CreateUser;
