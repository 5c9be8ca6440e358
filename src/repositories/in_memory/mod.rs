// Process-local stores backed by locked vectors

mod check_ins;
mod gyms;
mod users;

pub use check_ins::InMemoryCheckInsRepository;
pub use gyms::InMemoryGymsRepository;
pub use users::InMemoryUsersRepository;

fn paginate<T: Clone>(items: impl Iterator<Item = T>, page: u32, page_size: u32) -> Vec<T> {
    let offset = crate::utils::page_offset(page, page_size);

    items
        .skip(usize::try_from(offset).unwrap_or(usize::MAX))
        .take(page_size as usize)
        .collect()
}
