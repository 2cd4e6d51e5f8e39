use async_graphql::dataloader::DataLoader;
use async_graphql::Schema;

use super::loaders::{TeamLoader, UserLoader};
use super::{MutationRoot, QueryRoot, SubscriptionRoot};
use crate::state::AppState;

const MAX_QUERY_DEPTH: usize = 15;
const MAX_QUERY_COMPLEXITY: usize = 200;

pub type AppSchema = Schema<QueryRoot, MutationRoot, SubscriptionRoot>;

/// Resolvers reach the pool through `AppState` and batch relation lookups
/// through the team and user loaders.
pub fn build_schema(state: AppState, introspection_enabled: bool) -> AppSchema {
    let teams = DataLoader::new(TeamLoader::new(state.db.clone()), tokio::spawn);
    let users = DataLoader::new(UserLoader::new(state.db.clone()), tokio::spawn);

    let builder = Schema::build(
        QueryRoot::default(),
        MutationRoot::default(),
        SubscriptionRoot,
    )
    .data(state)
    .data(teams)
    .data(users)
    .limit_depth(MAX_QUERY_DEPTH)
    .limit_complexity(MAX_QUERY_COMPLEXITY);

    if introspection_enabled {
        builder.finish()
    } else {
        builder.disable_introspection().finish()
    }
}
