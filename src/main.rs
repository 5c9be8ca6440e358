use std::sync::Arc;

use gym_pass::config::{run_migrations, AppConfig, DatabaseConfig, DatabaseSeeder};
use gym_pass::repositories::postgres::PostgresGymsRepository;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

#[tokio::main]
#[instrument]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::from_env()?;

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level)),
        )
        .init();

    let db_config = DatabaseConfig::from_env()?;
    let pool = db_config.create_pool().await?;
    info!(environment = %config.environment, "connected to database");

    run_migrations(&pool).await?;
    info!("migrations applied");

    if config.seed_database {
        let gyms = Arc::new(PostgresGymsRepository::new(pool.clone(), config.store));
        DatabaseSeeder::new(gyms).seed_all().await?;
    }

    info!(
        geofence_km = config.check_in.max_distance_km,
        nearby_km = config.store.nearby_radius_km,
        page_size = config.store.page_size,
        "gym-pass store ready"
    );

    pool.close().await;
    Ok(())
}
