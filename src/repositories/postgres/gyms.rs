use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::config::StoreSettings;
use crate::models::{Coordinate, CreateGym, Gym};
use crate::repositories::{GymsRepository, RepositoryResult};
use super::sql_paging;
use crate::utils::EARTH_RADIUS_KM;

#[derive(Debug, Clone)]
pub struct PostgresGymsRepository {
    db: PgPool,
    settings: StoreSettings,
}

impl PostgresGymsRepository {
    pub fn new(db: PgPool, settings: StoreSettings) -> Self {
        Self { db, settings }
    }
}

#[async_trait]
impl GymsRepository for PostgresGymsRepository {
    async fn find_by_id(&self, id: Uuid) -> RepositoryResult<Option<Gym>> {
        let gym = sqlx::query_as::<_, Gym>(
            "SELECT id, title, description, phone, latitude, longitude FROM gyms WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.db)
        .await?;

        Ok(gym)
    }

    async fn find_many_nearby(&self, from: Coordinate) -> RepositoryResult<Vec<Gym>> {
        // Spherical law of cosines; the clamp keeps ACOS inside its domain
        let gyms = sqlx::query_as::<_, Gym>(
            r#"
            SELECT id, title, description, phone, latitude, longitude
            FROM gyms
            WHERE $3 * ACOS(LEAST(1.0, GREATEST(-1.0,
                    COS(RADIANS($1)) * COS(RADIANS(latitude)) * COS(RADIANS(longitude) - RADIANS($2))
                    + SIN(RADIANS($1)) * SIN(RADIANS(latitude))
                  ))) <= $4
            ORDER BY created_at, id
            "#,
        )
        .bind(from.latitude)
        .bind(from.longitude)
        .bind(EARTH_RADIUS_KM)
        .bind(self.settings.nearby_radius_km)
        .fetch_all(&self.db)
        .await?;

        Ok(gyms)
    }

    async fn search_many(&self, query: &str, page: u32) -> RepositoryResult<Vec<Gym>> {
        let (limit, offset) = sql_paging(page, self.settings.page_size)?;
        let gyms = sqlx::query_as::<_, Gym>(
            r#"
            SELECT id, title, description, phone, latitude, longitude
            FROM gyms
            WHERE STRPOS(LOWER(title), LOWER($1)) > 0
            ORDER BY created_at, id
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(query)
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.db)
        .await?;

        Ok(gyms)
    }

    async fn create(&self, data: CreateGym) -> RepositoryResult<Gym> {
        let gym = sqlx::query_as::<_, Gym>(
            r#"
            INSERT INTO gyms (id, title, description, phone, latitude, longitude)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, title, description, phone, latitude, longitude
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&data.title)
        .bind(&data.description)
        .bind(&data.phone)
        .bind(data.latitude)
        .bind(data.longitude)
        .fetch_one(&self.db)
        .await?;

        Ok(gym)
    }
}
