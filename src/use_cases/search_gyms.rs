use std::sync::Arc;

use tracing::{debug, instrument};

use super::UseCaseResult;
use crate::models::Gym;
use crate::repositories::GymsRepository;

#[derive(Debug, Clone)]
pub struct SearchGymsRequest {
    pub query: String,
    /// 1-based
    pub page: u32,
}

#[derive(Debug, Clone)]
pub struct SearchGymsResponse {
    pub gyms: Vec<Gym>,
}

pub struct SearchGymsUseCase {
    gyms: Arc<dyn GymsRepository>,
}

impl SearchGymsUseCase {
    pub fn new(gyms: Arc<dyn GymsRepository>) -> Self {
        Self { gyms }
    }

    #[instrument(skip(self))]
    pub async fn execute(&self, request: SearchGymsRequest) -> UseCaseResult<SearchGymsResponse> {
        let gyms = self.gyms.search_many(&request.query, request.page).await?;

        debug!(found = gyms.len(), "gym search finished");

        Ok(SearchGymsResponse { gyms })
    }
}
