use std::sync::Arc;

use chrono::Duration;
use tracing::{info, instrument, warn};
use uuid::Uuid;

use super::{UseCaseError, UseCaseResult};
use crate::clock::Clock;
use crate::models::CheckIn;
use crate::repositories::CheckInsRepository;

#[derive(Debug, Clone, Copy)]
pub struct ValidateCheckInRequest {
    pub check_in_id: Uuid,
}

#[derive(Debug, Clone)]
pub struct ValidateCheckInResponse {
    pub check_in: CheckIn,
}

/// Confirms a check-in, but only shortly after it was made.
pub struct ValidateCheckInUseCase {
    check_ins: Arc<dyn CheckInsRepository>,
    clock: Arc<dyn Clock>,
    window: Duration,
}

impl ValidateCheckInUseCase {
    pub fn new(check_ins: Arc<dyn CheckInsRepository>, clock: Arc<dyn Clock>, window: Duration) -> Self {
        Self {
            check_ins,
            clock,
            window,
        }
    }

    #[instrument(skip(self))]
    pub async fn execute(&self, request: ValidateCheckInRequest) -> UseCaseResult<ValidateCheckInResponse> {
        let mut check_in = self
            .check_ins
            .find_by_id(request.check_in_id)
            .await?
            .ok_or(UseCaseError::ResourceNotFound)?;

        let now = self.clock.now();
        let elapsed = now - check_in.created_at;

        if elapsed > self.window {
            warn!(elapsed_minutes = elapsed.num_minutes(), "check-in validation window elapsed");
            return Err(UseCaseError::LateCheckInValidation {
                window_minutes: self.window.num_minutes(),
            });
        }

        check_in.validated_at = Some(now);
        let check_in = self.check_ins.save(check_in).await?;

        info!(check_in_id = %check_in.id, "check-in validated");

        Ok(ValidateCheckInResponse { check_in })
    }
}
