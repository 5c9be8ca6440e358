use async_trait::async_trait;
use chrono::{DateTime, FixedOffset, Utc};
use parking_lot::Mutex;
use uuid::Uuid;

use super::paginate;
use crate::config::StoreSettings;
use crate::models::{CheckIn, CreateCheckIn};
use crate::repositories::{CheckInsRepository, RepositoryError, RepositoryResult};
use crate::utils::calendar_day_bounds;

#[derive(Debug, Default)]
pub struct InMemoryCheckInsRepository {
    items: Mutex<Vec<CheckIn>>,
    settings: StoreSettings,
}

impl InMemoryCheckInsRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_settings(settings: StoreSettings) -> Self {
        Self {
            items: Mutex::new(Vec::new()),
            settings,
        }
    }

    pub fn items(&self) -> Vec<CheckIn> {
        self.items.lock().clone()
    }
}

fn on_day(check_in: &CheckIn, user_id: Uuid, gym_id: Uuid, bounds: (DateTime<Utc>, DateTime<Utc>)) -> bool {
    let (start, end) = bounds;
    check_in.user_id == user_id
        && check_in.gym_id == gym_id
        && check_in.created_at >= start
        && check_in.created_at < end
}

#[async_trait]
impl CheckInsRepository for InMemoryCheckInsRepository {
    async fn create(&self, data: CreateCheckIn) -> RepositoryResult<CheckIn> {
        let bounds = calendar_day_bounds(data.created_at);

        // Check and insert under one lock so concurrent creates cannot both pass
        let mut items = self.items.lock();
        if items.iter().any(|c| on_day(c, data.user_id, data.gym_id, bounds)) {
            return Err(RepositoryError::Conflict(format!(
                "user {} already checked in at gym {} on {}",
                data.user_id,
                data.gym_id,
                data.created_at.date_naive()
            )));
        }

        let check_in = CheckIn {
            id: Uuid::new_v4(),
            user_id: data.user_id,
            gym_id: data.gym_id,
            created_at: data.created_at.with_timezone(&Utc),
            validated_at: None,
        };
        items.push(check_in.clone());

        Ok(check_in)
    }

    async fn find_by_user_id_on_date(
        &self,
        user_id: Uuid,
        gym_id: Uuid,
        date: DateTime<FixedOffset>,
    ) -> RepositoryResult<Option<CheckIn>> {
        let bounds = calendar_day_bounds(date);

        Ok(self
            .items
            .lock()
            .iter()
            .find(|c| on_day(c, user_id, gym_id, bounds))
            .cloned())
    }

    async fn find_many_by_user_id(&self, user_id: Uuid, page: u32) -> RepositoryResult<Vec<CheckIn>> {
        let mut owned: Vec<CheckIn> = self
            .items
            .lock()
            .iter()
            .filter(|c| c.user_id == user_id)
            .cloned()
            .collect();
        owned.sort_by_key(|c| c.created_at);

        Ok(paginate(owned.into_iter(), page, self.settings.page_size))
    }

    async fn count_by_user_id(&self, user_id: Uuid) -> RepositoryResult<u64> {
        let count = self.items.lock().iter().filter(|c| c.user_id == user_id).count();
        Ok(count as u64)
    }

    async fn find_by_id(&self, id: Uuid) -> RepositoryResult<Option<CheckIn>> {
        Ok(self.items.lock().iter().find(|c| c.id == id).cloned())
    }

    async fn save(&self, check_in: CheckIn) -> RepositoryResult<CheckIn> {
        let mut items = self.items.lock();
        let slot = items
            .iter_mut()
            .find(|c| c.id == check_in.id)
            .ok_or_else(|| RepositoryError::NotFound(format!("check-in {}", check_in.id)))?;

        *slot = check_in.clone();
        Ok(check_in)
    }
}
