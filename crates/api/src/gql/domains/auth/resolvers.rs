use async_graphql::{Context, Object, Result};

use crate::auth::permissions::require_current_user;

use super::types::User;

#[derive(Default)]
pub struct AuthQuery;

#[Object]
impl AuthQuery {
    /// Get the current authenticated user's information
    async fn me(&self, ctx: &Context<'_>) -> Result<User> {
        let user = require_current_user(ctx).await?;
        Ok(user.into())
    }
}
