use std::sync::Arc;

use tracing::{info, instrument};

use super::UseCaseResult;
use crate::models::{CreateGym, Gym};
use crate::repositories::GymsRepository;

#[derive(Debug, Clone)]
pub struct CreateGymResponse {
    pub gym: Gym,
}

pub struct CreateGymUseCase {
    gyms: Arc<dyn GymsRepository>,
}

impl CreateGymUseCase {
    pub fn new(gyms: Arc<dyn GymsRepository>) -> Self {
        Self { gyms }
    }

    #[instrument(skip(self, request), fields(title = %request.title))]
    pub async fn execute(&self, request: CreateGym) -> UseCaseResult<CreateGymResponse> {
        let gym = self.gyms.create(request).await?;

        info!(gym_id = %gym.id, "gym created");

        Ok(CreateGymResponse { gym })
    }
}
