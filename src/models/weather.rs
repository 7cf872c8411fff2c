//! Seeded weather observations for the `get_weather` tool.

use serde::Serialize;

/// A single seeded weather observation.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct WeatherRecord {
    /// Lower-case pinyin city key used for lookups.
    pub city: &'static str,
    /// Temperature in degrees Celsius.
    pub temp: i32,
    /// Human-readable sky condition.
    pub condition: &'static str,
    /// Relative humidity in percent.
    pub humidity: u8,
}

/// Seeded observations, in the order they are advertised to callers.
pub const WEATHER: &[WeatherRecord] = &[
    WeatherRecord {
        city: "beijing",
        temp: 5,
        condition: "晴天",
        humidity: 45,
    },
    WeatherRecord {
        city: "shanghai",
        temp: 12,
        condition: "多云",
        humidity: 65,
    },
    WeatherRecord {
        city: "guangzhou",
        temp: 20,
        condition: "小雨",
        humidity: 80,
    },
    WeatherRecord {
        city: "shenzhen",
        temp: 22,
        condition: "晴天",
        humidity: 70,
    },
];

/// Look up a city case-insensitively.
#[must_use]
pub fn find(city: &str) -> Option<&'static WeatherRecord> {
    let key = city.to_lowercase();
    WEATHER.iter().find(|record| record.city == key)
}

/// Seeded city keys joined with `", "` in table order.
#[must_use]
pub fn supported_cities() -> String {
    WEATHER
        .iter()
        .map(|record| record.city)
        .collect::<Vec<_>>()
        .join(", ")
}
