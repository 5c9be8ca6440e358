mod common;

use std::sync::Arc;

use common::*;
use gym_pass::auth::verify_password;
use gym_pass::models::{CreateUser, UserResponse};
use gym_pass::repositories::in_memory::InMemoryUsersRepository;
use gym_pass::repositories::UsersRepository;
use gym_pass::use_cases::{
    AuthenticateRequest, AuthenticateUseCase, GetUserProfileRequest, GetUserProfileUseCase,
    RegisterRequest, RegisterUseCase, UseCaseError,
};
use uuid::Uuid;

fn register_request(email: &str, password: &str) -> RegisterRequest {
    RegisterRequest {
        email: email.to_string(),
        password: password.to_string(),
    }
}

#[tokio::test]
async fn test_should_be_able_to_register() {
    init_test_logging();
    let users = Arc::new(InMemoryUsersRepository::new());
    let sut = RegisterUseCase::new(users.clone(), TEST_BCRYPT_COST);

    let response = sut
        .execute(register_request("johndoe@example.com", "123456"))
        .await
        .unwrap();

    assert!(!response.user.id.is_nil());
    assert_eq!(response.user.email, "johndoe@example.com");
    assert_eq!(users.items().len(), 1);
}

#[tokio::test]
async fn test_should_hash_user_password_upon_registration() {
    let users = Arc::new(InMemoryUsersRepository::new());
    let sut = RegisterUseCase::new(users, TEST_BCRYPT_COST);

    let response = sut
        .execute(register_request("johndoe@example.com", "123456"))
        .await
        .unwrap();

    assert_ne!(response.user.password_hash, "123456");
    assert!(verify_password("123456", &response.user.password_hash).unwrap());
}

#[tokio::test]
async fn test_should_not_be_able_to_register_with_same_email_twice() {
    let users = Arc::new(InMemoryUsersRepository::new());
    let sut = RegisterUseCase::new(users.clone(), TEST_BCRYPT_COST);

    sut.execute(register_request("johndoe@example.com", "123456"))
        .await
        .unwrap();
    let second = sut
        .execute(register_request("johndoe@example.com", "654321"))
        .await;

    assert!(matches!(second, Err(UseCaseError::UserAlreadyExists)));
    assert_eq!(users.items().len(), 1);
}

#[tokio::test]
async fn test_should_be_able_to_authenticate() {
    let users = Arc::new(InMemoryUsersRepository::new());
    let register = RegisterUseCase::new(users.clone(), TEST_BCRYPT_COST);
    let sut = AuthenticateUseCase::new(users);

    let registered = register
        .execute(register_request("johndoe@example.com", "123456"))
        .await
        .unwrap();

    let response = sut
        .execute(AuthenticateRequest {
            email: "johndoe@example.com".to_string(),
            password: "123456".to_string(),
        })
        .await
        .unwrap();

    assert_eq!(response.user.id, registered.user.id);
}

#[tokio::test]
async fn test_should_not_be_able_to_authenticate_with_wrong_email() {
    let users = Arc::new(InMemoryUsersRepository::new());
    let sut = AuthenticateUseCase::new(users);

    let result = sut
        .execute(AuthenticateRequest {
            email: "nobody@example.com".to_string(),
            password: "123456".to_string(),
        })
        .await;

    assert!(matches!(result, Err(UseCaseError::InvalidCredentials)));
}

#[tokio::test]
async fn test_should_not_be_able_to_authenticate_with_wrong_password() {
    let users = Arc::new(InMemoryUsersRepository::new());
    let register = RegisterUseCase::new(users.clone(), TEST_BCRYPT_COST);
    let sut = AuthenticateUseCase::new(users);

    register
        .execute(register_request("johndoe@example.com", "123456"))
        .await
        .unwrap();

    let result = sut
        .execute(AuthenticateRequest {
            email: "johndoe@example.com".to_string(),
            password: "123123".to_string(),
        })
        .await;

    assert!(matches!(result, Err(UseCaseError::InvalidCredentials)));
}

#[tokio::test]
async fn test_malformed_stored_hash_is_invalid_credentials() {
    let users = Arc::new(InMemoryUsersRepository::new());
    users
        .create(CreateUser {
            email: "legacy@example.com".to_string(),
            password_hash: "not-a-bcrypt-hash".to_string(),
        })
        .await
        .unwrap();
    let sut = AuthenticateUseCase::new(users);

    let result = sut
        .execute(AuthenticateRequest {
            email: "legacy@example.com".to_string(),
            password: "123456".to_string(),
        })
        .await;

    assert!(matches!(result, Err(UseCaseError::InvalidCredentials)));
}

#[tokio::test]
async fn test_should_be_able_to_get_user_profile() {
    let users = Arc::new(InMemoryUsersRepository::new());
    let register = RegisterUseCase::new(users.clone(), TEST_BCRYPT_COST);
    let sut = GetUserProfileUseCase::new(users);

    let registered = register
        .execute(register_request("johndoe@example.com", "123456"))
        .await
        .unwrap();

    let response = sut
        .execute(GetUserProfileRequest {
            user_id: registered.user.id,
        })
        .await
        .unwrap();

    assert_eq!(response.user.email, "johndoe@example.com");
}

#[tokio::test]
async fn test_should_not_be_able_to_get_user_profile_with_wrong_id() {
    let users = Arc::new(InMemoryUsersRepository::new());
    let sut = GetUserProfileUseCase::new(users);

    let result = sut
        .execute(GetUserProfileRequest {
            user_id: Uuid::new_v4(),
        })
        .await;

    assert!(matches!(result, Err(UseCaseError::ResourceNotFound)));
}

#[tokio::test]
async fn test_password_hash_is_never_serialized() {
    let users = Arc::new(InMemoryUsersRepository::new());
    let register = RegisterUseCase::new(users, TEST_BCRYPT_COST);

    let user = register
        .execute(register_request("johndoe@example.com", "123456"))
        .await
        .unwrap()
        .user;

    let json = serde_json::to_value(&user).unwrap();
    assert!(json.get("password_hash").is_none());
    assert_eq!(json["email"], "johndoe@example.com");

    let response = UserResponse::from(user.clone());
    assert_eq!(response.id, user.id);
    assert_eq!(response.email, user.email);
}
