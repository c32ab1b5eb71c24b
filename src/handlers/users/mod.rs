// handlers/users/mod.rs - user resource handlers

use serde_json::json;
use uuid::Uuid;

use crate::error::ApiError;
use crate::schema;

pub mod create; // POST /users
pub mod delete; // DELETE /users/:id
pub mod list; // GET /users
pub mod show; // GET /users/:id
pub mod update; // PUT /users/:id

pub use create::create;
pub use delete::delete;
pub use list::list;
pub use show::show;
pub use update::update;

pub(crate) const USER_NOT_FOUND: &str = "User with this id can not be found";

/// Validate the `:id` path parameter against the params rule set and parse
/// it into a [`Uuid`].
pub(crate) fn user_id_param(raw: &str) -> Result<Uuid, ApiError> {
    schema::validate(&schema::users::PARAMS, &json!({ "id": raw }))
        .map_err(ApiError::validation)?;

    Uuid::parse_str(raw).map_err(|_| {
        ApiError::validation(vec![schema::Violation::new(
            "params/id",
            "should be a valid UUID",
        )])
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_uuid_is_parsed() {
        let id = user_id_param("b9c3a1f0-5b1f-4a8e-9d7c-2f3e4a5b6c7d").unwrap();
        assert_eq!(id.to_string(), "b9c3a1f0-5b1f-4a8e-9d7c-2f3e4a5b6c7d");
    }

    #[test]
    fn invalid_uuid_produces_the_params_message() {
        let err = user_id_param("clearlynotauuid").unwrap_err();
        assert_eq!(err.message(), "params/id should be a valid UUID");
        assert_eq!(err.status_code(), 400);
    }
}
