// Application use cases. Each one orchestrates a store call or two behind a guard.

pub mod authenticate;
pub mod check_in;
pub mod create_gym;
pub mod errors;
pub mod factories;
pub mod fetch_nearby_gyms;
pub mod fetch_user_check_ins_history;
pub mod get_user_metrics;
pub mod get_user_profile;
pub mod register;
pub mod search_gyms;
pub mod validate_check_in;

pub use authenticate::*;
pub use check_in::*;
pub use create_gym::*;
pub use errors::*;
pub use factories::UseCaseFactory;
pub use fetch_nearby_gyms::*;
pub use fetch_user_check_ins_history::*;
pub use get_user_metrics::*;
pub use get_user_profile::*;
pub use register::*;
pub use search_gyms::*;
pub use validate_check_in::*;
