mod common;

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, FixedOffset};
use common::*;
use gym_pass::config::CheckInRules;
use gym_pass::models::{CheckIn, Coordinate, CreateCheckIn, CreateGym, Gym};
use gym_pass::repositories::{CheckInsRepository, GymsRepository, RepositoryError, RepositoryResult};
use gym_pass::use_cases::{
    CheckInRequest, CheckInUseCase, FetchNearbyGymsRequest, FetchNearbyGymsUseCase, UseCaseError,
};
use gym_pass::ManualClock;
use mockall::mock;
use uuid::Uuid;

mock! {
    pub Gyms {}

    #[async_trait]
    impl GymsRepository for Gyms {
        async fn find_by_id(&self, id: Uuid) -> RepositoryResult<Option<Gym>>;
        async fn find_many_nearby(&self, from: Coordinate) -> RepositoryResult<Vec<Gym>>;
        async fn search_many(&self, query: &str, page: u32) -> RepositoryResult<Vec<Gym>>;
        async fn create(&self, data: CreateGym) -> RepositoryResult<Gym>;
    }
}

mock! {
    pub CheckIns {}

    #[async_trait]
    impl CheckInsRepository for CheckIns {
        async fn create(&self, data: CreateCheckIn) -> RepositoryResult<CheckIn>;
        async fn find_by_user_id_on_date(
            &self,
            user_id: Uuid,
            gym_id: Uuid,
            date: DateTime<FixedOffset>,
        ) -> RepositoryResult<Option<CheckIn>>;
        async fn find_many_by_user_id(&self, user_id: Uuid, page: u32) -> RepositoryResult<Vec<CheckIn>>;
        async fn count_by_user_id(&self, user_id: Uuid) -> RepositoryResult<u64>;
        async fn find_by_id(&self, id: Uuid) -> RepositoryResult<Option<CheckIn>>;
        async fn save(&self, check_in: CheckIn) -> RepositoryResult<CheckIn>;
    }
}

fn near_gym() -> Gym {
    gym("JavaScript Gym", NEAR_LATITUDE, NEAR_LONGITUDE)
}

fn request(gym_id: Uuid) -> CheckInRequest {
    CheckInRequest {
        user_id: Uuid::new_v4(),
        gym_id,
        user_latitude: NEAR_LATITUDE,
        user_longitude: NEAR_LONGITUDE,
    }
}

fn use_case(check_ins: MockCheckIns, gyms: MockGyms) -> CheckInUseCase {
    CheckInUseCase::new(
        Arc::new(check_ins),
        Arc::new(gyms),
        Arc::new(ManualClock::new(at(2024, 1, 20, 8, 0))),
        CheckInRules::default(),
    )
}

#[tokio::test]
async fn test_store_conflict_on_create_is_max_number_of_check_ins() {
    init_test_logging();
    let gym = near_gym();
    let gym_id = gym.id;

    let mut gyms = MockGyms::new();
    gyms.expect_find_by_id()
        .times(1)
        .returning(move |_| Ok(Some(gym.clone())));

    let mut check_ins = MockCheckIns::new();
    check_ins
        .expect_find_by_user_id_on_date()
        .times(1)
        .returning(|_, _, _| Ok(None));
    check_ins
        .expect_create()
        .times(1)
        .returning(|_| Err(RepositoryError::Conflict("check_ins_once_per_day".to_string())));

    let result = use_case(check_ins, gyms).execute(request(gym_id)).await;

    assert!(matches!(result, Err(UseCaseError::MaxNumberOfCheckIns)));
}

#[tokio::test]
async fn test_check_in_passes_reference_day_to_store() {
    let gym = near_gym();
    let gym_id = gym.id;

    let mut gyms = MockGyms::new();
    gyms.expect_find_by_id().returning(move |_| Ok(Some(gym.clone())));

    let mut check_ins = MockCheckIns::new();
    check_ins
        .expect_find_by_user_id_on_date()
        .withf(move |_, g, date| *g == gym_id && *date == at(2024, 1, 20, 8, 0))
        .times(1)
        .returning(|_, _, _| Ok(None));
    check_ins.expect_create().times(1).returning(|data| {
        Ok(CheckIn {
            id: Uuid::new_v4(),
            user_id: data.user_id,
            gym_id: data.gym_id,
            created_at: data.created_at.into(),
            validated_at: None,
        })
    });

    let response = use_case(check_ins, gyms).execute(request(gym_id)).await.unwrap();

    assert_eq!(response.check_in.gym_id, gym_id);
}

#[tokio::test]
async fn test_distance_rejection_never_touches_check_in_store() {
    let gym = gym("Orlando Gym", DISTANT_LATITUDE, DISTANT_LONGITUDE);
    let gym_id = gym.id;

    let mut gyms = MockGyms::new();
    gyms.expect_find_by_id().returning(move |_| Ok(Some(gym.clone())));

    // No expectations: any call on the check-in store fails the test
    let check_ins = MockCheckIns::new();

    let result = use_case(check_ins, gyms).execute(request(gym_id)).await;

    assert!(matches!(result, Err(UseCaseError::MaxDistance)));
}

#[tokio::test]
async fn test_gym_store_failure_is_propagated() {
    let mut gyms = MockGyms::new();
    gyms.expect_find_by_id()
        .returning(|_| Err(RepositoryError::Database(sqlx::Error::PoolTimedOut)));

    let result = use_case(MockCheckIns::new(), gyms)
        .execute(request(Uuid::new_v4()))
        .await;

    assert!(matches!(
        result,
        Err(UseCaseError::Repository(RepositoryError::Database(sqlx::Error::PoolTimedOut)))
    ));
}

#[tokio::test]
async fn test_nearby_store_failure_is_propagated() {
    let mut gyms = MockGyms::new();
    gyms.expect_find_many_nearby()
        .returning(|_| Err(RepositoryError::Database(sqlx::Error::PoolClosed)));

    let sut = FetchNearbyGymsUseCase::new(Arc::new(gyms));
    let result = sut
        .execute(FetchNearbyGymsRequest {
            user_latitude: NEAR_LATITUDE,
            user_longitude: NEAR_LONGITUDE,
        })
        .await;

    assert!(matches!(result, Err(UseCaseError::Repository(_))));
}
