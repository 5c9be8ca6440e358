use std::sync::Arc;

use tracing::{info, instrument, warn};
use uuid::Uuid;

use super::{UseCaseError, UseCaseResult};
use crate::clock::Clock;
use crate::config::CheckInRules;
use crate::models::{CheckIn, Coordinate, CreateCheckIn};
use crate::repositories::{CheckInsRepository, GymsRepository, RepositoryError};
use crate::utils::distance_between_coordinates;

#[derive(Debug, Clone)]
pub struct CheckInRequest {
    pub user_id: Uuid,
    pub gym_id: Uuid,
    pub user_latitude: f64,
    pub user_longitude: f64,
}

#[derive(Debug, Clone)]
pub struct CheckInResponse {
    pub check_in: CheckIn,
}

/// Records a check-in when the user is inside the gym's geofence and has not
/// already checked in there today.
pub struct CheckInUseCase {
    check_ins: Arc<dyn CheckInsRepository>,
    gyms: Arc<dyn GymsRepository>,
    clock: Arc<dyn Clock>,
    rules: CheckInRules,
}

impl CheckInUseCase {
    pub fn new(
        check_ins: Arc<dyn CheckInsRepository>,
        gyms: Arc<dyn GymsRepository>,
        clock: Arc<dyn Clock>,
        rules: CheckInRules,
    ) -> Self {
        Self {
            check_ins,
            gyms,
            clock,
            rules,
        }
    }

    #[instrument(skip(self, request), fields(user_id = %request.user_id, gym_id = %request.gym_id))]
    pub async fn execute(&self, request: CheckInRequest) -> UseCaseResult<CheckInResponse> {
        let gym = self
            .gyms
            .find_by_id(request.gym_id)
            .await?
            .ok_or(UseCaseError::ResourceNotFound)?;

        let distance = distance_between_coordinates(
            Coordinate::new(request.user_latitude, request.user_longitude),
            Coordinate::from(&gym),
        );

        if distance > self.rules.max_distance_km {
            warn!(distance_km = distance, max_km = self.rules.max_distance_km, "check-in outside geofence");
            return Err(UseCaseError::MaxDistance);
        }

        let now = self.clock.now_in(self.rules.day_offset);

        let same_day = self
            .check_ins
            .find_by_user_id_on_date(request.user_id, request.gym_id, now)
            .await?;

        if same_day.is_some() {
            warn!(day = %now.date_naive(), "user already checked in today");
            return Err(UseCaseError::MaxNumberOfCheckIns);
        }

        let check_in = match self
            .check_ins
            .create(CreateCheckIn {
                user_id: request.user_id,
                gym_id: request.gym_id,
                created_at: now,
            })
            .await
        {
            Ok(check_in) => check_in,
            Err(RepositoryError::Conflict(reason)) => {
                warn!(%reason, "concurrent check-in rejected by store");
                return Err(UseCaseError::MaxNumberOfCheckIns);
            }
            Err(e) => return Err(e.into()),
        };

        info!(check_in_id = %check_in.id, distance_km = distance, "check-in recorded");

        Ok(CheckInResponse { check_in })
    }
}
