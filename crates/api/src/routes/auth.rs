use axum::{
    extract::{Request, State},
    http::{
        header::{COOKIE, SET_COOKIE},
        HeaderMap, StatusCode,
    },
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use infra::models::UserRow;
use infra::repos::users::{self, CreateUser};

use crate::auth::cookie::{build_clear_cookie, build_refresh_cookie, extract_refresh_token};
use crate::auth::password::{validate_email, PasswordService};
use crate::auth::refresh;
use crate::error::AppError;
use crate::state::AppState;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignUpRequest {
    pub email: String,
    pub password: String,
    pub display_name: Option<String>,
}

#[derive(Deserialize)]
pub struct SignInRequest {
    pub email: String,
    pub password: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionUser {
    pub id: Uuid,
    pub email: String,
    pub display_name: Option<String>,
}

impl From<UserRow> for SessionUser {
    fn from(row: UserRow) -> Self {
        Self {
            id: row.id,
            email: row.email,
            display_name: row.display_name,
        }
    }
}

#[derive(Serialize)]
pub struct SessionResponse {
    pub token: String,
    pub user: SessionUser,
}

#[derive(Serialize)]
pub struct RefreshResponse {
    pub token: String,
}

/// POST /auth/signup
pub async fn sign_up(
    State(state): State<AppState>,
    Json(body): Json<SignUpRequest>,
) -> Result<Response, AppError> {
    let email = body.email.trim().to_string();
    validate_email(&email)?;
    PasswordService::validate_password_strength(&body.password)?;

    if users::email_exists(&state.db, &email).await? {
        return Err(AppError::Conflict(
            "User with this email already exists".to_string(),
        ));
    }

    let password_hash = PasswordService::hash_password(&body.password)?;
    let display_name = body
        .display_name
        .map(|n| n.trim().to_string())
        .filter(|n| !n.is_empty());

    let user = users::create(
        &state.db,
        CreateUser {
            email,
            display_name,
            password_hash,
        },
    )
    .await
    .map_err(|e| match e {
        sqlx::Error::Database(ref db) if db.is_unique_violation() => {
            AppError::Conflict("User with this email already exists".to_string())
        }
        other => AppError::Db(other),
    })?;

    tracing::info!(user_id = %user.id, "User signed up");

    start_session(&state, user, StatusCode::CREATED).await
}

/// POST /auth/signin
pub async fn sign_in(
    State(state): State<AppState>,
    Json(body): Json<SignInRequest>,
) -> Result<Response, AppError> {
    let invalid = || AppError::Unauthorized("Invalid credentials".to_string());

    let credentials = users::find_credentials_by_email(&state.db, body.email.trim())
        .await?
        .ok_or_else(invalid)?;

    if !PasswordService::verify_password(&body.password, &credentials.password_hash)? {
        return Err(invalid());
    }

    let user = users::get_by_id(&state.db, credentials.id)
        .await?
        .ok_or_else(invalid)?;

    tracing::info!(user_id = %user.id, "User signed in");

    start_session(&state, user, StatusCode::OK).await
}

/// POST /auth/refresh
pub async fn refresh_session(
    State(state): State<AppState>,
    req: Request,
) -> Result<Response, AppError> {
    let raw_token = refresh_token_from(req.headers())
        .ok_or_else(|| AppError::Unauthorized("No refresh token in cookie".to_string()))?;

    let auth_config = state.auth_config();
    let result = refresh::rotate_refresh_token(
        &state.db,
        &raw_token,
        auth_config.refresh_token_expiration_days,
    )
    .await?;

    let user = users::get_by_id(&state.db, result.user_id)
        .await?
        .ok_or_else(|| AppError::Unauthorized("User not found".to_string()))?;

    let token = state.jwt_service().create_token(user.id, user.email)?;
    let cookie_value = build_refresh_cookie(
        &result.new_raw_token,
        auth_config.refresh_cookie_max_age_secs(),
        &auth_config.cookie_domain,
        auth_config.cookie_secure,
    );

    with_cookie(Json(RefreshResponse { token }).into_response(), &cookie_value)
}

/// POST /auth/signout
pub async fn sign_out(
    State(state): State<AppState>,
    req: Request,
) -> Result<Response, AppError> {
    // The cookie may already be gone; signing out is idempotent.
    if let Some(raw_token) = refresh_token_from(req.headers()) {
        refresh::revoke_by_token(&state.db, &raw_token).await?;
    }

    let auth_config = state.auth_config();
    let cookie_value = build_clear_cookie(&auth_config.cookie_domain, auth_config.cookie_secure);

    with_cookie(StatusCode::NO_CONTENT.into_response(), &cookie_value)
}

async fn start_session(
    state: &AppState,
    user: UserRow,
    status: StatusCode,
) -> Result<Response, AppError> {
    let auth_config = state.auth_config();

    let token = state.jwt_service().create_token(user.id, user.email.clone())?;
    let raw_refresh = refresh::issue_refresh_token(
        &state.db,
        user.id,
        auth_config.refresh_token_expiration_days,
    )
    .await?;

    let cookie_value = build_refresh_cookie(
        &raw_refresh,
        auth_config.refresh_cookie_max_age_secs(),
        &auth_config.cookie_domain,
        auth_config.cookie_secure,
    );

    let body = SessionResponse {
        token,
        user: user.into(),
    };

    with_cookie((status, Json(body)).into_response(), &cookie_value)
}

fn refresh_token_from(headers: &HeaderMap) -> Option<String> {
    headers
        .get(COOKIE)
        .and_then(|v| v.to_str().ok())
        .and_then(extract_refresh_token)
}

fn with_cookie(mut response: Response, cookie_value: &str) -> Result<Response, AppError> {
    response.headers_mut().insert(
        SET_COOKIE,
        cookie_value
            .parse()
            .map_err(|_| AppError::Internal("Failed to build cookie header".to_string()))?,
    );
    Ok(response)
}
