//! Weather snapshot consumed by outfit generation.

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// A point on the map.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Location {
    pub latitude: f64,
    pub longitude: f64,
}

impl Location {
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// The weather at one place on one day.
///
/// Temperatures are °F. Generation only reads `high`, `low` and `current`;
/// the remaining fields are carried for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherSnapshot {
    pub high: i32,
    pub low: i32,
    pub current: i32,
    /// Chance of rain, percent.
    #[serde(default)]
    pub rain: u8,
    /// Cloud cover, percent.
    #[serde(default)]
    pub cloud: u8,
    /// Expected snowfall, mm.
    #[serde(default)]
    pub snowfall: u32,
    #[serde(default)]
    pub location: Location,
    pub date: NaiveDate,
}

impl WeatherSnapshot {
    /// Snapshot for today with only temperatures filled in.
    pub fn new(high: i32, low: i32, current: i32) -> Self {
        Self {
            high,
            low,
            current,
            rain: 0,
            cloud: 0,
            snowfall: 0,
            location: Location::default(),
            date: Utc::now().date_naive(),
        }
    }

    pub fn at(mut self, location: Location) -> Self {
        self.location = location;
        self
    }

    /// Same temperature everywhere all day.
    pub fn constant(temperature: i32) -> Self {
        Self::new(temperature, temperature, temperature)
    }

    /// Day temperature weighted toward the current reading:
    /// `(high + low + 2·current) / 4`.
    pub fn weighted_temperature(&self) -> f64 {
        (f64::from(self.high) + f64::from(self.low) + 2.0 * f64::from(self.current)) / 4.0
    }
}
