mod check_ins;
mod gyms;
mod users;

pub use check_ins::PostgresCheckInsRepository;
pub use gyms::PostgresGymsRepository;
pub use users::PostgresUsersRepository;

use super::{RepositoryError, RepositoryResult};
use crate::utils::page_offset;

/// `LIMIT` and `OFFSET` for a 1-based page, as Postgres BIGINTs.
fn sql_paging(page: u32, page_size: u32) -> RepositoryResult<(i64, i64)> {
    let offset = page_offset(page, page_size);
    let offset = i64::try_from(offset)
        .map_err(|_| RepositoryError::Decode(format!("page {page} offset {offset} out of range")))?;

    Ok((i64::from(page_size), offset))
}
