use std::sync::Arc;

use tracing::{debug, instrument};

use super::UseCaseResult;
use crate::models::{Coordinate, Gym};
use crate::repositories::GymsRepository;

#[derive(Debug, Clone, Copy)]
pub struct FetchNearbyGymsRequest {
    pub user_latitude: f64,
    pub user_longitude: f64,
}

#[derive(Debug, Clone)]
pub struct FetchNearbyGymsResponse {
    pub gyms: Vec<Gym>,
}

pub struct FetchNearbyGymsUseCase {
    gyms: Arc<dyn GymsRepository>,
}

impl FetchNearbyGymsUseCase {
    pub fn new(gyms: Arc<dyn GymsRepository>) -> Self {
        Self { gyms }
    }

    #[instrument(skip(self))]
    pub async fn execute(&self, request: FetchNearbyGymsRequest) -> UseCaseResult<FetchNearbyGymsResponse> {
        let gyms = self
            .gyms
            .find_many_nearby(Coordinate::new(request.user_latitude, request.user_longitude))
            .await?;

        debug!(found = gyms.len(), "nearby gyms fetched");

        Ok(FetchNearbyGymsResponse { gyms })
    }
}
