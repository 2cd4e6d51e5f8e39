use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};

use crate::auth::Claims;
use crate::error::AppError;
use crate::state::AppState;

/// Validate an optional bearer token and stash its claims in the request
/// extensions. Requests without a token pass through anonymously; a token that
/// fails verification is rejected outright.
pub async fn jwt_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let token = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .map(str::to_owned);

    if let Some(token) = token {
        let claims = state
            .jwt_service()
            .verify_token(&token)
            .map_err(|_| AppError::Unauthorized("Invalid or expired token".to_string()))?;
        request.extensions_mut().insert::<Claims>(claims);
    }

    Ok(next.run(request).await)
}
