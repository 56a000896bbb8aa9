//! Deterministic stand-in data for when no API credential is configured.
//!
//! The functions here never perform I/O and never fail, so the rest of the
//! system stays exercisable without network access or secrets. Whether to use
//! them instead of the live [`WeatherClient`](crate::client::WeatherClient) is
//! the caller's decision; see [`Config::live_api_key`](crate::config::Config::live_api_key).

use crate::cities::CityInfo;
use crate::model::{Clouds, Condition, Coord, MainReadings, Sys, WeatherSnapshot, Wind, ZipCode};

/// A demo record has exactly the shape of a live snapshot.
pub type DemoRecord = WeatherSnapshot;

/// Per-city overrides keyed by panel ZIP code: (zip, °F, condition).
const DEMO_CITIES: &[(&str, f64, &str)] = &[
    ("10001", 68.0, "cloudy"),
    ("33101", 84.0, "clear sky"),
    ("60601", 55.0, "light rain"),
    ("75201", 78.0, "partly cloudy"),
    ("95101", 72.0, "clear sky"),
];

/// Fallback for keys outside the lookup table.
const DEFAULT_TEMP_F: f64 = 70.0;
const DEFAULT_CONDITION: &str = "clear sky";

/// Fixed observation time between the sample sunrise and sunset, so the
/// record is fully deterministic.
const DEMO_OBSERVED_AT: i64 = 1_635_793_200;

/// The unmodified sample reading: a clear autumn day in Mountain View.
pub fn base_record() -> DemoRecord {
    WeatherSnapshot {
        coord: Coord {
            lon: -122.08,
            lat: 37.39,
        },
        weather: vec![Condition {
            id: 800,
            main: "Clear".to_string(),
            description: "clear sky".to_string(),
            icon: "01d".to_string(),
        }],
        main: MainReadings {
            temp: 72.5,
            feels_like: 75.2,
            temp_min: 68.0,
            temp_max: 78.0,
            pressure: 1013,
            humidity: 65,
        },
        visibility: Some(10_000),
        wind: Wind {
            speed: 8.5,
            deg: 230.0,
            gust: None,
        },
        clouds: Clouds { all: 5 },
        dt: DEMO_OBSERVED_AT,
        sys: Sys {
            country: Some("US".to_string()),
            sunrise: 1_635_765_432,
            sunset: 1_635_806_832,
        },
        timezone: -28_800,
        name: "Mountain View".to_string(),
    }
}

/// Sample reading for a location key (a ZIP code or other identifier).
///
/// Recognized keys get their tabulated temperature and condition; any other
/// key gets the documented default of 70°F and "clear sky".
pub fn snapshot(key: &str) -> DemoRecord {
    let (temp, condition) = DEMO_CITIES
        .iter()
        .find(|(zip, ..)| *zip == key)
        .map(|&(_, temp, condition)| (temp, condition))
        .unwrap_or((DEFAULT_TEMP_F, DEFAULT_CONDITION));

    let mut record = base_record();
    record.main.temp = temp;
    record.weather[0].description = condition.to_string();
    record
}

/// Sample reading for a submitted ZIP code, visibly labeled as demo data so
/// it cannot be mistaken for a live observation.
pub fn snapshot_for_zip(zip: &ZipCode) -> DemoRecord {
    let mut record = snapshot(zip.as_str());
    record.name = format!("Demo Location ({zip})");
    record
}

/// Sample reading for a major-cities panel entry, labeled with the city name.
pub fn snapshot_for_city(city: &CityInfo) -> DemoRecord {
    let mut record = snapshot(city.zip);
    record.name = city.name.to_string();
    record
}
