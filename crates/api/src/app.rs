use std::sync::Arc;
use std::time::Duration;

use async_graphql_axum::{GraphQLProtocol, GraphQLRequest, GraphQLResponse, GraphQLWebSocket};
use axum::{
    extract::{State, WebSocketUpgrade},
    http::{
        header::{HeaderValue, AUTHORIZATION, CONTENT_TYPE},
        Method, StatusCode,
    },
    middleware,
    response::{IntoResponse, Response},
    routing::{get, post},
    Extension, Router,
};
use tower_governor::governor::GovernorConfigBuilder;
use tower_governor::GovernorLayer;
use tower_http::{cors::CorsLayer, timeout::TimeoutLayer, trace::TraceLayer};

use crate::auth::Claims;
use crate::error::AppError;
use crate::gql::AppSchema;
use crate::middleware::jwt::jwt_middleware;
use crate::routes::auth;
use crate::state::AppState;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Full HTTP surface: health, `/auth/*` and `/graphql`.
pub fn build_router(state: AppState, schema: AppSchema, allowed_origins: &[String]) -> Router {
    Router::new()
        .route("/health", get(health))
        .merge(auth_routes())
        .merge(graphql_routes(state.clone(), schema))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            REQUEST_TIMEOUT,
        ))
        .layer(cors_layer(allowed_origins))
}

/// Sign-up and sign-in are throttled per client IP (about ten per minute);
/// refresh and sign-out are not.
fn auth_routes() -> Router<AppState> {
    let governor_conf = GovernorConfigBuilder::default()
        .per_second(6)
        .burst_size(10)
        .finish()
        .expect("static governor configuration is valid");

    let credential_routes = Router::new()
        .route("/auth/signup", post(auth::sign_up))
        .route("/auth/signin", post(auth::sign_in))
        .layer(GovernorLayer::new(Arc::new(governor_conf)));

    Router::new()
        .route("/auth/refresh", post(auth::refresh_session))
        .route("/auth/signout", post(auth::sign_out))
        .merge(credential_routes)
}

/// Only `/graphql` reads the bearer header. The `/auth/*` routes work from
/// the refresh cookie, so a stale access token must not block them.
fn graphql_routes(state: AppState, schema: AppSchema) -> Router<AppState> {
    Router::new()
        .route("/graphql", post(graphql_handler).get(graphql_ws_handler))
        .layer(Extension(schema))
        .route_layer(middleware::from_fn_with_state(state, jwt_middleware))
}

fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|o| o.parse().ok())
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE, AUTHORIZATION])
        .allow_credentials(true)
}

/// Queries and mutations. Claims set by the JWT middleware ride along as
/// request data; without them guarded resolvers refuse.
async fn graphql_handler(
    Extension(schema): Extension<AppSchema>,
    claims: Option<Extension<Claims>>,
    req: GraphQLRequest,
) -> GraphQLResponse {
    let mut request = req.into_inner();
    if let Some(Extension(claims)) = claims {
        request = request.data(claims);
    }
    schema.execute(request).await.into()
}

/// Subscriptions over websocket. Browsers cannot set headers on the upgrade,
/// so the token comes in the `connection_init` payload as
/// `{ "headers": { "Authorization": "Bearer ..." } }`.
async fn graphql_ws_handler(
    State(state): State<AppState>,
    Extension(schema): Extension<AppSchema>,
    protocol: GraphQLProtocol,
    upgrade: WebSocketUpgrade,
) -> Response {
    let jwt_service = state.jwt_service().clone();

    upgrade
        .protocols(["graphql-transport-ws", "graphql-ws"])
        .on_upgrade(move |stream| {
            GraphQLWebSocket::new(stream, schema, protocol)
                .on_connection_init(move |payload: serde_json::Value| async move {
                    let mut data = async_graphql::Data::default();

                    if let Some(token) = bearer_from_init(&payload) {
                        let claims = jwt_service
                            .verify_token(token)
                            .map_err(|_| async_graphql::Error::new("Invalid or expired token"))?;
                        data.insert(claims);
                    }

                    Ok(data)
                })
                .serve()
        })
        .into_response()
}

fn bearer_from_init(payload: &serde_json::Value) -> Option<&str> {
    payload
        .get("headers")?
        .get("Authorization")?
        .as_str()?
        .strip_prefix("Bearer ")
}

/// Liveness plus a database round-trip.
async fn health(State(state): State<AppState>) -> Result<&'static str, AppError> {
    let _one: i32 = sqlx::query_scalar("SELECT 1").fetch_one(&state.db).await?;
    Ok("ok")
}
