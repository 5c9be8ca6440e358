pub mod auth;
pub mod clock;
pub mod config;
pub mod models;
pub mod repositories;
pub mod use_cases;
pub mod utils;

pub use clock::{Clock, ManualClock, SystemClock};
pub use use_cases::{UseCaseError, UseCaseResult};
