use async_trait::async_trait;
use chrono::{DateTime, FixedOffset};
use uuid::Uuid;

use super::RepositoryResult;
use crate::models::{CheckIn, CreateCheckIn};

#[async_trait]
pub trait CheckInsRepository: Send + Sync {
    /// Persists a new check-in. Stores must reject a second check-in for the
    /// same user and gym on the same calendar day with
    /// [`super::RepositoryError::Conflict`].
    async fn create(&self, data: CreateCheckIn) -> RepositoryResult<CheckIn>;

    /// The user's check-in at `gym_id` on the calendar day containing `date`,
    /// with the day taken in `date`'s offset.
    async fn find_by_user_id_on_date(
        &self,
        user_id: Uuid,
        gym_id: Uuid,
        date: DateTime<FixedOffset>,
    ) -> RepositoryResult<Option<CheckIn>>;

    /// One page (1-based) of the user's check-ins, oldest first.
    async fn find_many_by_user_id(&self, user_id: Uuid, page: u32) -> RepositoryResult<Vec<CheckIn>>;

    async fn count_by_user_id(&self, user_id: Uuid) -> RepositoryResult<u64>;

    async fn find_by_id(&self, id: Uuid) -> RepositoryResult<Option<CheckIn>>;

    async fn save(&self, check_in: CheckIn) -> RepositoryResult<CheckIn>;
}
