//! Record store adapter boundary.
//!
//! Handlers only see [`UserStore`]; the concrete backend (Postgres in
//! production, in-memory for tests and fixtures) is chosen at startup and
//! injected through `AppState`. Each operation is atomic per call - in
//! particular, email uniqueness is enforced inside `create`/`update`
//! rather than by a separate lookup.

use async_trait::async_trait;
use serde::Deserialize;
use thiserror::Error;
use uuid::Uuid;

pub mod memory;
pub mod models;
pub mod postgres;

pub use models::User;

/// Errors surfaced by store implementations
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("duplicate value for unique field '{0}'")]
    UniqueViolation(&'static str),

    #[error(transparent)]
    Sqlx(#[from] sqlx::Error),
}

/// Fields supplied when creating a user; the store assigns the id.
#[derive(Debug, Clone, Deserialize)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Partial update: provided keys fully overwrite, omitted keys keep their
/// prior value.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UserPatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

#[async_trait]
pub trait UserStore: Send + Sync {
    /// Create a user, assigning a fresh id. Fails with
    /// [`StoreError::UniqueViolation`] if the email is already taken.
    async fn create(&self, user: NewUser) -> Result<User, StoreError>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, StoreError>;

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError>;

    /// Every user, in the store's natural return order.
    async fn find_all(&self) -> Result<Vec<User>, StoreError>;

    /// Merge `patch` over the stored record. `None` if the id is unknown.
    async fn update(&self, id: Uuid, patch: UserPatch) -> Result<Option<User>, StoreError>;

    /// Hard delete, returning the prior representation. `None` if the id is
    /// unknown.
    async fn delete(&self, id: Uuid) -> Result<Option<User>, StoreError>;
}
