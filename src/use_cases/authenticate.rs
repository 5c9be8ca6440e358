use std::sync::Arc;

use tracing::{instrument, warn};

use super::{UseCaseError, UseCaseResult};
use crate::auth::verify_password;
use crate::models::User;
use crate::repositories::UsersRepository;

pub struct AuthenticateRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone)]
pub struct AuthenticateResponse {
    pub user: User,
}

pub struct AuthenticateUseCase {
    users: Arc<dyn UsersRepository>,
}

impl AuthenticateUseCase {
    pub fn new(users: Arc<dyn UsersRepository>) -> Self {
        Self { users }
    }

    /// Unknown email and wrong password fail the same way.
    #[instrument(skip(self, request), fields(email = %request.email))]
    pub async fn execute(&self, request: AuthenticateRequest) -> UseCaseResult<AuthenticateResponse> {
        let Some(user) = self.users.find_by_email(&request.email).await? else {
            warn!("authentication failed: unknown email");
            return Err(UseCaseError::InvalidCredentials);
        };

        match verify_password(&request.password, &user.password_hash) {
            Ok(true) => {}
            Ok(false) => {
                warn!(user_id = %user.id, "authentication failed: password mismatch");
                return Err(UseCaseError::InvalidCredentials);
            }
            Err(e) => {
                warn!(user_id = %user.id, error = %e, "authentication failed: stored hash unreadable");
                return Err(UseCaseError::InvalidCredentials);
            }
        }

        Ok(AuthenticateResponse { user })
    }
}
