// handlers/users/show.rs - GET /users/:id handler

use axum::extract::{Path, State};
use axum::response::Json;

use crate::database::User;
use crate::error::ApiError;
use crate::AppState;

use super::{user_id_param, USER_NOT_FOUND};

/// GET /users/:id - fetch a single user.
pub async fn show(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<User>, ApiError> {
    let id = user_id_param(&id)?;

    let user = state
        .store
        .find_by_id(id)
        .await?
        .ok_or_else(|| ApiError::not_found(USER_NOT_FOUND))?;

    Ok(Json(user))
}
