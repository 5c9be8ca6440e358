use thiserror::Error;

use crate::auth::PasswordError;
use crate::repositories::RepositoryError;

pub type UseCaseResult<T> = Result<T, UseCaseError>;

#[derive(Error, Debug)]
pub enum UseCaseError {
    #[error("Resource not found")]
    ResourceNotFound,
    #[error("Max distance reached")]
    MaxDistance,
    #[error("Max number of check-ins reached")]
    MaxNumberOfCheckIns,
    #[error("E-mail already exists")]
    UserAlreadyExists,
    #[error("Invalid credentials")]
    InvalidCredentials,
    #[error("The check-in can only be validated until {window_minutes} minutes of its creation")]
    LateCheckInValidation { window_minutes: i64 },
    #[error(transparent)]
    PasswordHashing(#[from] PasswordError),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
