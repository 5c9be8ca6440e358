use std::sync::Arc;

use tracing::{info, instrument, warn};

use super::{UseCaseError, UseCaseResult};
use crate::auth::hash_password;
use crate::models::{CreateUser, User};
use crate::repositories::{RepositoryError, UsersRepository};

pub struct RegisterRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone)]
pub struct RegisterResponse {
    pub user: User,
}

pub struct RegisterUseCase {
    users: Arc<dyn UsersRepository>,
    bcrypt_cost: u32,
}

impl RegisterUseCase {
    pub fn new(users: Arc<dyn UsersRepository>, bcrypt_cost: u32) -> Self {
        Self { users, bcrypt_cost }
    }

    #[instrument(skip(self, request), fields(email = %request.email))]
    pub async fn execute(&self, request: RegisterRequest) -> UseCaseResult<RegisterResponse> {
        if self.users.find_by_email(&request.email).await?.is_some() {
            warn!("email already registered");
            return Err(UseCaseError::UserAlreadyExists);
        }

        let password_hash = hash_password(&request.password, self.bcrypt_cost)?;

        let user = match self
            .users
            .create(CreateUser {
                email: request.email,
                password_hash,
            })
            .await
        {
            Ok(user) => user,
            Err(RepositoryError::Conflict(_)) => return Err(UseCaseError::UserAlreadyExists),
            Err(e) => return Err(e.into()),
        };

        info!(user_id = %user.id, "user registered");

        Ok(RegisterResponse { user })
    }
}
