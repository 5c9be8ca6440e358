pub mod geo;
pub mod time;

pub use geo::{distance_between_coordinates, EARTH_RADIUS_KM};
pub use time::{calendar_day_bounds, page_offset};
