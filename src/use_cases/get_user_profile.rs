use std::sync::Arc;

use tracing::instrument;
use uuid::Uuid;

use super::{UseCaseError, UseCaseResult};
use crate::models::User;
use crate::repositories::UsersRepository;

#[derive(Debug, Clone, Copy)]
pub struct GetUserProfileRequest {
    pub user_id: Uuid,
}

#[derive(Debug, Clone)]
pub struct GetUserProfileResponse {
    pub user: User,
}

pub struct GetUserProfileUseCase {
    users: Arc<dyn UsersRepository>,
}

impl GetUserProfileUseCase {
    pub fn new(users: Arc<dyn UsersRepository>) -> Self {
        Self { users }
    }

    #[instrument(skip(self))]
    pub async fn execute(&self, request: GetUserProfileRequest) -> UseCaseResult<GetUserProfileResponse> {
        let user = self
            .users
            .find_by_id(request.user_id)
            .await?
            .ok_or(UseCaseError::ResourceNotFound)?;

        Ok(GetUserProfileResponse { user })
    }
}
