// handlers/auth.rs - GET /auth handler

use axum::extract::State;
use axum::response::Json;
use serde_json::{json, Value};

use crate::error::ApiError;
use crate::AppState;

/// GET /auth - issue a fresh bearer token.
///
/// Unauthenticated by design, always succeeds, consumes and mutates
/// nothing.
pub async fn token_get(State(state): State<AppState>) -> Result<Json<Value>, ApiError> {
    let token = state.tokens.sign()?;

    Ok(Json(json!({ "token": token })))
}
