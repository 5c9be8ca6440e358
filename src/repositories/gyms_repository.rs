use async_trait::async_trait;
use uuid::Uuid;

use super::RepositoryResult;
use crate::models::{Coordinate, CreateGym, Gym};

#[async_trait]
pub trait GymsRepository: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> RepositoryResult<Option<Gym>>;

    /// Gyms within the store's configured radius of `from`.
    async fn find_many_nearby(&self, from: Coordinate) -> RepositoryResult<Vec<Gym>>;

    /// Gyms whose title contains `query`, one page at a time (1-based).
    async fn search_many(&self, query: &str, page: u32) -> RepositoryResult<Vec<Gym>>;

    async fn create(&self, data: CreateGym) -> RepositoryResult<Gym>;
}
