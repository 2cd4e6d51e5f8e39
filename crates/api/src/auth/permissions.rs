use async_graphql::{Context, Error, Result};
use uuid::Uuid;

use crate::auth::Claims;
use crate::state::AppState;

pub const LOGIN_REQUIRED: &str = "You must be logged in to perform this action";

/// Resolve the signed-in user's id from the request claims.
///
/// Only the token is consulted, so guarded resolvers fail before touching the
/// database when there is no session.
pub fn require_user(ctx: &Context<'_>) -> Result<Uuid> {
    let claims = ctx
        .data::<Claims>()
        .map_err(|_| Error::new(LOGIN_REQUIRED))?;

    claims
        .user_id()
        .map_err(|e| Error::new(format!("Invalid user ID: {}", e)))
}

/// Like `require_user`, but also loads the user row.
pub async fn require_current_user(ctx: &Context<'_>) -> Result<infra::models::UserRow> {
    let user_id = require_user(ctx)?;
    let state = ctx.data::<AppState>()?;

    infra::repos::users::get_by_id(&state.db, user_id)
        .await
        .map_err(crate::gql::error::GqlError::from)?
        .ok_or_else(|| Error::new(LOGIN_REQUIRED))
}
