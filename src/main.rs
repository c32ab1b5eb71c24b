use std::sync::Arc;

use users_api::auth::TokenService;
use users_api::database::postgres::PgUserStore;
use users_api::{app, AppState};

#[tokio::main]
async fn main() {
    // Load .env if present so cargo run picks up DATABASE_URL and friends.
    let _ = dotenvy::dotenv();

    let config = users_api::config::config();

    tracing_subscriber::fmt::init();
    tracing::info!("Starting Users API in {:?} mode", config.environment);

    let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");
    let store = PgUserStore::connect(&database_url, &config.database)
        .await
        .unwrap_or_else(|e| panic!("failed to connect to database: {}", e));
    store
        .ensure_schema()
        .await
        .expect("failed to prepare users table");

    let state = AppState {
        store: Arc::new(store),
        tokens: TokenService::new(
            &config.security.jwt_secret,
            config.security.jwt_expiry_hours,
        ),
    };

    // Allow tests or deployments to override port via env
    let port = std::env::var("USERS_API_PORT")
        .ok()
        .or_else(|| std::env::var("PORT").ok())
        .and_then(|s| s.parse::<u16>().ok())
        .unwrap_or(3000);

    let bind_addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .unwrap_or_else(|e| panic!("failed to bind {}: {}", bind_addr, e));

    tracing::info!("Users API listening on http://{}", bind_addr);

    users_api::serve(listener, app(state)).await.expect("server");
}
