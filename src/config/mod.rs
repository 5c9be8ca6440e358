pub mod app;
pub mod database;
pub mod seeding;

pub use app::{AppConfig, CheckInRules, StoreSettings};
pub use database::{run_migrations, DatabaseConfig};
pub use seeding::DatabaseSeeder;
