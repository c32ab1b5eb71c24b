// handlers/users/update.rs - PUT /users/:id handler

use axum::extract::{Path, State};
use axum::response::Json;
use serde_json::Value;

use crate::database::{User, UserPatch};
use crate::error::ApiError;
use crate::schema;
use crate::AppState;

use super::{user_id_param, USER_NOT_FOUND};

/// PUT /users/:id - partial update.
///
/// The id is validated before the body, matching the declaration order of
/// the rule sets. Any subset of {name, email, password} may be supplied;
/// provided keys overwrite, omitted keys keep their prior value. The body
/// itself must still be an object.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Option<Json<Value>>,
) -> Result<Json<User>, ApiError> {
    let id = user_id_param(&id)?;

    let payload = body.map(|Json(v)| v).unwrap_or(Value::Null);
    schema::validate(&schema::users::UPDATE_BODY, &payload).map_err(ApiError::validation)?;

    let patch: UserPatch = serde_json::from_value(payload)
        .map_err(|e| ApiError::internal_server_error(format!("validated body did not decode: {}", e)))?;

    let user = state
        .store
        .update(id, patch)
        .await?
        .ok_or_else(|| ApiError::not_found(USER_NOT_FOUND))?;

    Ok(Json(user))
}
