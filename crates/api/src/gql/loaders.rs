use std::{collections::HashMap, future::Future, sync::Arc};

use async_graphql::dataloader::Loader;
use infra::db::Db;
use infra::models::{TeamRow, UserRow};
use infra::repos::{teams, users};
use uuid::Uuid;

/// Declares a by-id batch loader over a repo `get_by_ids` function. Ids with
/// no row (a deleted team, say) are absent from the result map.
macro_rules! id_loader {
    ($(#[$meta:meta])* $name:ident, $row:ty, $fetch:path) => {
        $(#[$meta])*
        #[derive(Clone)]
        pub struct $name {
            pool: Db,
        }

        impl $name {
            pub fn new(pool: Db) -> Self {
                Self { pool }
            }
        }

        impl Loader<Uuid> for $name {
            type Value = $row;
            type Error = Arc<sqlx::Error>;

            fn load(
                &self,
                keys: &[Uuid],
            ) -> impl Future<Output = Result<HashMap<Uuid, Self::Value>, Self::Error>> + Send {
                let pool = self.pool.clone();
                let ids = keys.to_vec();

                async move {
                    let rows = $fetch(&pool, &ids).await.map_err(Arc::new)?;
                    Ok(rows.into_iter().map(|row| (row.id, row)).collect())
                }
            }
        }
    };
}

id_loader!(
    /// Resolves `Match.team1/team2/winner` and `Player.team`.
    TeamLoader,
    TeamRow,
    teams::get_by_ids
);

id_loader!(
    /// Resolves `Tournament.createdBy`.
    UserLoader,
    UserRow,
    users::get_by_ids
);
