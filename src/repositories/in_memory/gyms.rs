use async_trait::async_trait;
use parking_lot::RwLock;
use uuid::Uuid;

use super::paginate;
use crate::config::StoreSettings;
use crate::models::{Coordinate, CreateGym, Gym};
use crate::repositories::{GymsRepository, RepositoryResult};
use crate::utils::distance_between_coordinates;

#[derive(Debug, Default)]
pub struct InMemoryGymsRepository {
    items: RwLock<Vec<Gym>>,
    settings: StoreSettings,
}

impl InMemoryGymsRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_settings(settings: StoreSettings) -> Self {
        Self {
            items: RwLock::new(Vec::new()),
            settings,
        }
    }

    /// Inserts a gym with a caller-chosen id.
    pub fn insert(&self, gym: Gym) {
        self.items.write().push(gym);
    }

    pub fn items(&self) -> Vec<Gym> {
        self.items.read().clone()
    }
}

#[async_trait]
impl GymsRepository for InMemoryGymsRepository {
    async fn find_by_id(&self, id: Uuid) -> RepositoryResult<Option<Gym>> {
        Ok(self.items.read().iter().find(|gym| gym.id == id).cloned())
    }

    async fn find_many_nearby(&self, from: Coordinate) -> RepositoryResult<Vec<Gym>> {
        let radius = self.settings.nearby_radius_km;

        Ok(self
            .items
            .read()
            .iter()
            .filter(|gym| distance_between_coordinates(from, Coordinate::from(*gym)) <= radius)
            .cloned()
            .collect())
    }

    async fn search_many(&self, query: &str, page: u32) -> RepositoryResult<Vec<Gym>> {
        let needle = query.to_lowercase();
        let items = self.items.read();

        Ok(paginate(
            items
                .iter()
                .filter(|gym| gym.title.to_lowercase().contains(&needle))
                .cloned(),
            page,
            self.settings.page_size,
        ))
    }

    async fn create(&self, data: CreateGym) -> RepositoryResult<Gym> {
        let gym = Gym {
            id: Uuid::new_v4(),
            title: data.title,
            description: data.description,
            phone: data.phone,
            latitude: data.latitude,
            longitude: data.longitude,
        };

        self.items.write().push(gym.clone());
        Ok(gym)
    }
}
