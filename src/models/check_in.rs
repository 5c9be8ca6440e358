use chrono::{DateTime, FixedOffset, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct CheckIn {
    pub id: Uuid,
    pub user_id: Uuid,
    pub gym_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub validated_at: Option<DateTime<Utc>>,
}

impl CheckIn {
    pub fn is_validated(&self) -> bool {
        self.validated_at.is_some()
    }
}

/// Input accepted by [`crate::repositories::CheckInsRepository::create`].
///
/// `created_at` carries the reference offset so stores can derive the
/// calendar day the check-in belongs to.
#[derive(Debug, Clone)]
pub struct CreateCheckIn {
    pub user_id: Uuid,
    pub gym_id: Uuid,
    pub created_at: DateTime<FixedOffset>,
}
