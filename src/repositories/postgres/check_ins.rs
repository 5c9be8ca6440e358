use async_trait::async_trait;
use chrono::{DateTime, FixedOffset, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::config::StoreSettings;
use super::sql_paging;
use crate::models::{CheckIn, CreateCheckIn};
use crate::repositories::{CheckInsRepository, RepositoryError, RepositoryResult};

const CHECK_IN_COLUMNS: &str = "id, user_id, gym_id, created_at, validated_at";

#[derive(Debug, Clone)]
pub struct PostgresCheckInsRepository {
    db: PgPool,
    settings: StoreSettings,
}

impl PostgresCheckInsRepository {
    pub fn new(db: PgPool, settings: StoreSettings) -> Self {
        Self { db, settings }
    }
}

#[async_trait]
impl CheckInsRepository for PostgresCheckInsRepository {
    async fn create(&self, data: CreateCheckIn) -> RepositoryResult<CheckIn> {
        // check_ins_once_per_day turns a racing duplicate into a unique violation
        let check_in = sqlx::query_as::<_, CheckIn>(&format!(
            r#"
            INSERT INTO check_ins (id, user_id, gym_id, created_at, check_in_date)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING {CHECK_IN_COLUMNS}
            "#
        ))
        .bind(Uuid::new_v4())
        .bind(data.user_id)
        .bind(data.gym_id)
        .bind(data.created_at.with_timezone(&Utc))
        .bind(data.created_at.date_naive())
        .fetch_one(&self.db)
        .await?;

        Ok(check_in)
    }

    async fn find_by_user_id_on_date(
        &self,
        user_id: Uuid,
        gym_id: Uuid,
        date: DateTime<FixedOffset>,
    ) -> RepositoryResult<Option<CheckIn>> {
        let check_in = sqlx::query_as::<_, CheckIn>(&format!(
            "SELECT {CHECK_IN_COLUMNS} FROM check_ins WHERE user_id = $1 AND gym_id = $2 AND check_in_date = $3"
        ))
        .bind(user_id)
        .bind(gym_id)
        .bind(date.date_naive())
        .fetch_optional(&self.db)
        .await?;

        Ok(check_in)
    }

    async fn find_many_by_user_id(&self, user_id: Uuid, page: u32) -> RepositoryResult<Vec<CheckIn>> {
        let (limit, offset) = sql_paging(page, self.settings.page_size)?;
        let check_ins = sqlx::query_as::<_, CheckIn>(&format!(
            "SELECT {CHECK_IN_COLUMNS} FROM check_ins WHERE user_id = $1 ORDER BY created_at ASC, id LIMIT $2 OFFSET $3"
        ))
        .bind(user_id)
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.db)
        .await?;

        Ok(check_ins)
    }

    async fn count_by_user_id(&self, user_id: Uuid) -> RepositoryResult<u64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM check_ins WHERE user_id = $1")
            .bind(user_id)
            .fetch_one(&self.db)
            .await?;

        u64::try_from(count).map_err(|_| RepositoryError::Decode(format!("negative count {count}")))
    }

    async fn find_by_id(&self, id: Uuid) -> RepositoryResult<Option<CheckIn>> {
        let check_in = sqlx::query_as::<_, CheckIn>(&format!(
            "SELECT {CHECK_IN_COLUMNS} FROM check_ins WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.db)
        .await?;

        Ok(check_in)
    }

    async fn save(&self, check_in: CheckIn) -> RepositoryResult<CheckIn> {
        let saved = sqlx::query_as::<_, CheckIn>(&format!(
            "UPDATE check_ins SET validated_at = $2 WHERE id = $1 RETURNING {CHECK_IN_COLUMNS}"
        ))
        .bind(check_in.id)
        .bind(check_in.validated_at)
        .fetch_optional(&self.db)
        .await?;

        saved.ok_or_else(|| RepositoryError::NotFound(format!("check-in {}", check_in.id)))
    }
}
