use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// The persisted user record. Fully populated at rest; `id` is assigned at
/// creation and never changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub password: String,
}
