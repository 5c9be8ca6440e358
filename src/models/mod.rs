// Plain entity structs shared by the stores and use cases

pub mod check_in;
pub mod gym;
pub mod user;

pub use check_in::*;
pub use gym::*;
pub use user::*;
