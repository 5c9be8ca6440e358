use std::sync::Arc;

use sqlx::PgPool;

use super::*;
use crate::clock::{Clock, SystemClock};
use crate::config::AppConfig;
use crate::repositories::postgres::{
    PostgresCheckInsRepository, PostgresGymsRepository, PostgresUsersRepository,
};
use crate::repositories::{CheckInsRepository, GymsRepository, UsersRepository};

/// Builds use cases backed by the PostgreSQL stores.
#[derive(Clone)]
pub struct UseCaseFactory {
    users: Arc<dyn UsersRepository>,
    gyms: Arc<dyn GymsRepository>,
    check_ins: Arc<dyn CheckInsRepository>,
    clock: Arc<dyn Clock>,
    config: AppConfig,
}

impl UseCaseFactory {
    pub fn new(db: PgPool, config: AppConfig) -> Self {
        Self {
            users: Arc::new(PostgresUsersRepository::new(db.clone())),
            gyms: Arc::new(PostgresGymsRepository::new(db.clone(), config.store)),
            check_ins: Arc::new(PostgresCheckInsRepository::new(db, config.store)),
            clock: Arc::new(SystemClock),
            config,
        }
    }

    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn make_register_use_case(&self) -> RegisterUseCase {
        RegisterUseCase::new(self.users.clone(), self.config.bcrypt_cost)
    }

    pub fn make_authenticate_use_case(&self) -> AuthenticateUseCase {
        AuthenticateUseCase::new(self.users.clone())
    }

    pub fn make_get_user_profile_use_case(&self) -> GetUserProfileUseCase {
        GetUserProfileUseCase::new(self.users.clone())
    }

    pub fn make_create_gym_use_case(&self) -> CreateGymUseCase {
        CreateGymUseCase::new(self.gyms.clone())
    }

    pub fn make_search_gyms_use_case(&self) -> SearchGymsUseCase {
        SearchGymsUseCase::new(self.gyms.clone())
    }

    pub fn make_fetch_nearby_gyms_use_case(&self) -> FetchNearbyGymsUseCase {
        FetchNearbyGymsUseCase::new(self.gyms.clone())
    }

    pub fn make_check_in_use_case(&self) -> CheckInUseCase {
        CheckInUseCase::new(
            self.check_ins.clone(),
            self.gyms.clone(),
            self.clock.clone(),
            self.config.check_in,
        )
    }

    pub fn make_validate_check_in_use_case(&self) -> ValidateCheckInUseCase {
        ValidateCheckInUseCase::new(
            self.check_ins.clone(),
            self.clock.clone(),
            self.config.check_in.validation_window,
        )
    }

    pub fn make_fetch_user_check_ins_history_use_case(&self) -> FetchUserCheckInsHistoryUseCase {
        FetchUserCheckInsHistoryUseCase::new(self.check_ins.clone())
    }

    pub fn make_get_user_metrics_use_case(&self) -> GetUserMetricsUseCase {
        GetUserMetricsUseCase::new(self.check_ins.clone())
    }
}
