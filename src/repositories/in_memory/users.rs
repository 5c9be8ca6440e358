use async_trait::async_trait;
use chrono::Utc;
use parking_lot::RwLock;
use uuid::Uuid;

use crate::models::{CreateUser, User};
use crate::repositories::{RepositoryError, RepositoryResult, UsersRepository};

#[derive(Debug, Default)]
pub struct InMemoryUsersRepository {
    items: RwLock<Vec<User>>,
}

impl InMemoryUsersRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> Vec<User> {
        self.items.read().clone()
    }
}

#[async_trait]
impl UsersRepository for InMemoryUsersRepository {
    async fn find_by_email(&self, email: &str) -> RepositoryResult<Option<User>> {
        Ok(self.items.read().iter().find(|u| u.email == email).cloned())
    }

    async fn create(&self, data: CreateUser) -> RepositoryResult<User> {
        let mut items = self.items.write();
        if items.iter().any(|u| u.email == data.email) {
            return Err(RepositoryError::Conflict(format!("email {} already registered", data.email)));
        }

        let user = User {
            id: Uuid::new_v4(),
            email: data.email,
            password_hash: data.password_hash,
            created_at: Utc::now(),
        };
        items.push(user.clone());

        Ok(user)
    }

    async fn find_by_id(&self, id: Uuid) -> RepositoryResult<Option<User>> {
        Ok(self.items.read().iter().find(|u| u.id == id).cloned())
    }
}
