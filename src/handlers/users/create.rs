// handlers/users/create.rs - POST /users handler

use axum::extract::State;
use axum::response::Json;
use serde_json::Value;

use crate::database::{NewUser, User};
use crate::error::ApiError;
use crate::schema;
use crate::AppState;

/// POST /users - create a user.
///
/// Body is validated against the closed create schema before anything else
/// runs. The store's write path owns the email uniqueness check; its
/// conflict signal comes back as 409. Returns the created record with 200.
pub async fn create(
    State(state): State<AppState>,
    body: Option<Json<Value>>,
) -> Result<Json<User>, ApiError> {
    let payload = body.map(|Json(v)| v).unwrap_or(Value::Null);

    schema::validate(&schema::users::CREATE_BODY, &payload).map_err(ApiError::validation)?;

    let input: NewUser = serde_json::from_value(payload)
        .map_err(|e| ApiError::internal_server_error(format!("validated body did not decode: {}", e)))?;

    let user = state.store.create(input).await?;

    Ok(Json(user))
}
