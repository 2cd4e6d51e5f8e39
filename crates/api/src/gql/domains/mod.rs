// Each domain contains: mod.rs, resolvers.rs, types.rs (and service.rs for pure logic)

pub mod auth;
pub mod matches;
pub mod player_stats;
pub mod players;
pub mod standings;
pub mod teams;
pub mod tournaments;
