use async_graphql::MergedObject;

use crate::gql::domains::matches::MatchMutation;
use crate::gql::domains::player_stats::PlayerStatsMutation;
use crate::gql::domains::players::PlayerMutation;
use crate::gql::domains::teams::TeamMutation;
use crate::gql::domains::tournaments::TournamentMutation;

#[derive(MergedObject, Default)]
pub struct MutationRoot(
    MatchMutation,
    PlayerMutation,
    PlayerStatsMutation,
    TeamMutation,
    TournamentMutation,
);
