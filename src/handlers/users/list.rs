// handlers/users/list.rs - GET /users handler

use axum::extract::State;
use axum::response::Json;

use crate::database::User;
use crate::error::ApiError;
use crate::AppState;

/// GET /users - every user, in the store's natural return order.
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<User>>, ApiError> {
    let users = state.store.find_all().await?;

    Ok(Json(users))
}
