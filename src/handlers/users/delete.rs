// handlers/users/delete.rs - DELETE /users/:id handler

use axum::extract::{Path, State};
use axum::response::Json;

use crate::database::User;
use crate::error::ApiError;
use crate::AppState;

use super::{user_id_param, USER_NOT_FOUND};

/// DELETE /users/:id - hard delete, returning the record as it was.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<User>, ApiError> {
    let id = user_id_param(&id)?;

    let user = state
        .store
        .delete(id)
        .await?
        .ok_or_else(|| ApiError::not_found(USER_NOT_FOUND))?;

    Ok(Json(user))
}
