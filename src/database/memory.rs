//! In-memory user store, used by the integration tests and anywhere a
//! durable backend is not wanted. Honors the same uniqueness contract as
//! Postgres by checking under its write lock.

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::{NewUser, StoreError, User, UserPatch, UserStore};

#[derive(Default)]
pub struct MemoryStore {
    // Vec keeps insertion order as the natural return order
    users: RwLock<Vec<User>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserStore for MemoryStore {
    async fn create(&self, user: NewUser) -> Result<User, StoreError> {
        let mut users = self.users.write().await;

        if users.iter().any(|u| u.email == user.email) {
            return Err(StoreError::UniqueViolation("email"));
        }

        let user = User {
            id: Uuid::new_v4(),
            name: user.name,
            email: user.email,
            password: user.password,
        };
        users.push(user.clone());

        Ok(user)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, StoreError> {
        let users = self.users.read().await;
        Ok(users.iter().find(|u| u.id == id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        let users = self.users.read().await;
        Ok(users.iter().find(|u| u.email == email).cloned())
    }

    async fn find_all(&self) -> Result<Vec<User>, StoreError> {
        let users = self.users.read().await;
        Ok(users.clone())
    }

    async fn update(&self, id: Uuid, patch: UserPatch) -> Result<Option<User>, StoreError> {
        let mut users = self.users.write().await;

        if let Some(email) = &patch.email {
            if users.iter().any(|u| u.email == *email && u.id != id) {
                return Err(StoreError::UniqueViolation("email"));
            }
        }

        let Some(user) = users.iter_mut().find(|u| u.id == id) else {
            return Ok(None);
        };

        if let Some(name) = patch.name {
            user.name = name;
        }
        if let Some(email) = patch.email {
            user.email = email;
        }
        if let Some(password) = patch.password {
            user.password = password;
        }

        Ok(Some(user.clone()))
    }

    async fn delete(&self, id: Uuid) -> Result<Option<User>, StoreError> {
        let mut users = self.users.write().await;

        let position = users.iter().position(|u| u.id == id);
        Ok(position.map(|i| users.remove(i)))
    }
}
