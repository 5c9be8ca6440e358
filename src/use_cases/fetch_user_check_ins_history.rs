use std::sync::Arc;

use tracing::instrument;
use uuid::Uuid;

use super::UseCaseResult;
use crate::models::CheckIn;
use crate::repositories::CheckInsRepository;

#[derive(Debug, Clone, Copy)]
pub struct FetchUserCheckInsHistoryRequest {
    pub user_id: Uuid,
    /// 1-based
    pub page: u32,
}

#[derive(Debug, Clone)]
pub struct FetchUserCheckInsHistoryResponse {
    pub check_ins: Vec<CheckIn>,
}

pub struct FetchUserCheckInsHistoryUseCase {
    check_ins: Arc<dyn CheckInsRepository>,
}

impl FetchUserCheckInsHistoryUseCase {
    pub fn new(check_ins: Arc<dyn CheckInsRepository>) -> Self {
        Self { check_ins }
    }

    #[instrument(skip(self))]
    pub async fn execute(
        &self,
        request: FetchUserCheckInsHistoryRequest,
    ) -> UseCaseResult<FetchUserCheckInsHistoryResponse> {
        let check_ins = self
            .check_ins
            .find_many_by_user_id(request.user_id, request.page)
            .await?;

        Ok(FetchUserCheckInsHistoryResponse { check_ins })
    }
}
