#![allow(dead_code)]

use std::sync::Arc;

use chrono::{DateTime, TimeZone, Utc};
use gym_pass::config::CheckInRules;
use gym_pass::models::Gym;
use gym_pass::repositories::in_memory::{InMemoryCheckInsRepository, InMemoryGymsRepository};
use gym_pass::use_cases::CheckInUseCase;
use gym_pass::ManualClock;
use uuid::Uuid;

pub const NEAR_LATITUDE: f64 = -23.6158976;
pub const NEAR_LONGITUDE: f64 = -46.6354176;

/// Same longitude, about 16.6 km north
pub const FAR_LATITUDE: f64 = -23.466193;

pub const DISTANT_LATITUDE: f64 = 28.4811732;
pub const DISTANT_LONGITUDE: f64 = -81.3426652;

/// Lowest cost bcrypt accepts
pub const TEST_BCRYPT_COST: u32 = 4;

/// Initialize test logging
pub fn init_test_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("debug")
        .with_test_writer()
        .try_init();
}

pub fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, minute, 0).unwrap()
}

pub fn gym(title: &str, latitude: f64, longitude: f64) -> Gym {
    Gym {
        id: Uuid::new_v4(),
        title: title.to_string(),
        description: None,
        phone: None,
        latitude,
        longitude,
    }
}

/// In-memory stores plus a check-in use case over them, sharing one manual clock
pub struct CheckInFixture {
    pub check_ins: Arc<InMemoryCheckInsRepository>,
    pub gyms: Arc<InMemoryGymsRepository>,
    pub clock: Arc<ManualClock>,
    pub sut: CheckInUseCase,
}

impl CheckInFixture {
    pub fn new() -> Self {
        Self::with_rules(CheckInRules::default())
    }

    pub fn with_rules(rules: CheckInRules) -> Self {
        init_test_logging();

        let check_ins = Arc::new(InMemoryCheckInsRepository::new());
        let gyms = Arc::new(InMemoryGymsRepository::new());
        let clock = Arc::new(ManualClock::new(at(2024, 1, 20, 8, 0)));
        let sut = CheckInUseCase::new(check_ins.clone(), gyms.clone(), clock.clone(), rules);

        Self {
            check_ins,
            gyms,
            clock,
            sut,
        }
    }

    pub fn add_gym(&self, gym: Gym) -> Uuid {
        let id = gym.id;
        self.gyms.insert(gym);
        id
    }
}
