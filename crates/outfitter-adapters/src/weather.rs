//! Weather supplied up front instead of fetched.

use outfitter_core::{
    application::ports::WeatherSource,
    domain::{Location, WeatherSnapshot},
    error::OutfitterResult,
};
use tracing::debug;

/// A `WeatherSource` that always reports the same snapshot, relocated to
/// whatever location is asked for.
#[derive(Debug, Clone, PartialEq)]
pub struct FixedWeather {
    snapshot: WeatherSnapshot,
}

impl FixedWeather {
    pub fn new(snapshot: WeatherSnapshot) -> Self {
        Self { snapshot }
    }

    /// Today's weather with only temperatures known (°F).
    pub fn from_temperatures(high: i32, low: i32, current: i32) -> Self {
        Self::new(WeatherSnapshot::new(high, low, current))
    }

    pub fn snapshot(&self) -> &WeatherSnapshot {
        &self.snapshot
    }
}

impl WeatherSource for FixedWeather {
    fn current(&self, location: Location) -> OutfitterResult<WeatherSnapshot> {
        debug!(
            high = self.snapshot.high,
            low = self.snapshot.low,
            current = self.snapshot.current,
            "Using fixed weather"
        );
        Ok(self.snapshot.clone().at(location))
    }
}
