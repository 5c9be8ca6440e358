use anyhow::{anyhow, Context, Result};
use chrono::{Duration, FixedOffset, Offset, Utc};
use std::env;
use std::fmt::Display;
use std::str::FromStr;

/// Rules the check-in use cases enforce.
#[derive(Debug, Clone, Copy)]
pub struct CheckInRules {
    /// Geofence radius around a gym, in kilometers.
    pub max_distance_km: f64,
    /// How long after creation a check-in may still be validated.
    pub validation_window: Duration,
    /// Offset whose calendar days bound the once-per-day rule.
    pub day_offset: FixedOffset,
}

impl Default for CheckInRules {
    fn default() -> Self {
        Self {
            max_distance_km: 0.1,
            validation_window: Duration::minutes(20),
            day_offset: Utc.fix(),
        }
    }
}

/// Tunables owned by the store adapters.
#[derive(Debug, Clone, Copy)]
pub struct StoreSettings {
    pub page_size: u32,
    pub nearby_radius_km: f64,
}

impl Default for StoreSettings {
    fn default() -> Self {
        Self {
            page_size: 20,
            nearby_radius_km: 10.0,
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: String,
    pub log_level: String,
    pub check_in: CheckInRules,
    pub store: StoreSettings,
    pub bcrypt_cost: u32,
    pub seed_database: bool,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let environment = lookup("ENVIRONMENT").unwrap_or_else(|| "development".to_string());
        let log_level = lookup("LOG_LEVEL").unwrap_or_else(|| "info".to_string());

        let defaults = CheckInRules::default();
        let max_distance_km: f64 = parse_var(&lookup, "GEOFENCE_RADIUS_KM", defaults.max_distance_km)?;
        if !(max_distance_km.is_finite() && max_distance_km >= 0.0) {
            return Err(anyhow!("GEOFENCE_RADIUS_KM must be a non-negative number"));
        }

        let window_minutes: i64 = parse_var(&lookup, "CHECK_IN_VALIDATION_WINDOW_MINUTES", 20)?;
        if window_minutes < 0 {
            return Err(anyhow!("CHECK_IN_VALIDATION_WINDOW_MINUTES must not be negative"));
        }

        let offset_minutes: i32 = parse_var(&lookup, "DAY_BOUNDARY_UTC_OFFSET_MINUTES", 0)?;
        let day_offset = offset_minutes
            .checked_mul(60)
            .and_then(FixedOffset::east_opt)
            .ok_or_else(|| anyhow!("DAY_BOUNDARY_UTC_OFFSET_MINUTES out of range: {}", offset_minutes))?;

        let store_defaults = StoreSettings::default();
        let page_size: u32 = parse_var(&lookup, "PAGE_SIZE", store_defaults.page_size)?;
        if page_size == 0 {
            return Err(anyhow!("PAGE_SIZE must be at least 1"));
        }
        let nearby_radius_km: f64 = parse_var(&lookup, "NEARBY_RADIUS_KM", store_defaults.nearby_radius_km)?;
        if !(nearby_radius_km.is_finite() && nearby_radius_km >= 0.0) {
            return Err(anyhow!("NEARBY_RADIUS_KM must be a non-negative number"));
        }

        let bcrypt_cost: u32 = parse_var(&lookup, "BCRYPT_COST", bcrypt::DEFAULT_COST)?;
        let seed_database: bool = parse_var(&lookup, "SEED_DATABASE", false)?;

        let config = AppConfig {
            environment,
            log_level,
            check_in: CheckInRules {
                max_distance_km,
                validation_window: Duration::minutes(window_minutes),
                day_offset,
            },
            store: StoreSettings {
                page_size,
                nearby_radius_km,
            },
            bcrypt_cost,
            seed_database,
        };

        if config.seed_database && config.is_production() {
            return Err(anyhow!("SEED_DATABASE is not allowed in production"));
        }

        Ok(config)
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

pub(crate) fn parse_var<F, T>(lookup: &F, key: &str, default: T) -> Result<T>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: Display,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|e| anyhow!("{}", e))
            .with_context(|| format!("invalid value for {}: {:?}", key, raw)),
        None => Ok(default),
    }
}
