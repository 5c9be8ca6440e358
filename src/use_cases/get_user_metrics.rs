use std::sync::Arc;

use tracing::instrument;
use uuid::Uuid;

use super::UseCaseResult;
use crate::repositories::CheckInsRepository;

#[derive(Debug, Clone, Copy)]
pub struct GetUserMetricsRequest {
    pub user_id: Uuid,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GetUserMetricsResponse {
    pub check_ins_count: u64,
}

pub struct GetUserMetricsUseCase {
    check_ins: Arc<dyn CheckInsRepository>,
}

impl GetUserMetricsUseCase {
    pub fn new(check_ins: Arc<dyn CheckInsRepository>) -> Self {
        Self { check_ins }
    }

    #[instrument(skip(self))]
    pub async fn execute(&self, request: GetUserMetricsRequest) -> UseCaseResult<GetUserMetricsResponse> {
        let check_ins_count = self.check_ins.count_by_user_id(request.user_id).await?;

        Ok(GetUserMetricsResponse { check_ins_count })
    }
}
