use std::sync::Arc;

use axum::{routing::get, Router};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub mod auth;
pub mod config;
pub mod database;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod schema;

use crate::auth::TokenService;
use crate::database::UserStore;

/// Shared application state injected into every handler and the auth gate.
///
/// The store is constructed once at startup and passed in explicitly; there
/// is no ambient connection handle.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn UserStore>,
    pub tokens: TokenService,
}

/// Build the full application router.
///
/// `/auth` hands out tokens without authentication; everything under
/// `/users` sits behind the bearer-token gate.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/auth", get(handlers::auth::token_get))
        .merge(user_routes(state.clone()))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn user_routes(state: AppState) -> Router<AppState> {
    use handlers::users;

    Router::new()
        .route("/users", get(users::list).post(users::create))
        .route(
            "/users/:id",
            get(users::show).put(users::update).delete(users::delete),
        )
        .route_layer(axum::middleware::from_fn_with_state(
            state,
            middleware::auth::require_bearer,
        ))
}

/// Serve the router on an already-bound listener.
pub async fn serve(listener: tokio::net::TcpListener, router: Router) -> std::io::Result<()> {
    axum::serve(listener, router).await
}
