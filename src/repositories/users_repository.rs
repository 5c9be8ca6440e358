use async_trait::async_trait;
use uuid::Uuid;

use super::RepositoryResult;
use crate::models::{CreateUser, User};

#[async_trait]
pub trait UsersRepository: Send + Sync {
    async fn find_by_email(&self, email: &str) -> RepositoryResult<Option<User>>;

    /// Stores must reject a duplicate email with [`super::RepositoryError::Conflict`].
    async fn create(&self, data: CreateUser) -> RepositoryResult<User>;

    async fn find_by_id(&self, id: Uuid) -> RepositoryResult<Option<User>>;
}
