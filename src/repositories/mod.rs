// Store traits consumed by the use cases, plus in-memory and PostgreSQL adapters

pub mod check_ins_repository;
pub mod errors;
pub mod gyms_repository;
pub mod in_memory;
pub mod postgres;
pub mod users_repository;

pub use check_ins_repository::CheckInsRepository;
pub use errors::{RepositoryError, RepositoryResult};
pub use gyms_repository::GymsRepository;
pub use users_repository::UsersRepository;
