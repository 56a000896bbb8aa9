use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::WeatherError;

/// A validated US ZIP code: five digits, optionally followed by a hyphen and
/// four more (`12345` or `12345-6789`). Input is trimmed before validation.
///
/// Construction is the validation boundary: no network request is ever made
/// for a string that failed to parse into a `ZipCode`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ZipCode(String);

impl ZipCode {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ZipCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for ZipCode {
    type Err = WeatherError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if is_valid_zip(trimmed) {
            Ok(Self(trimmed.to_owned()))
        } else {
            Err(WeatherError::Validation(
                "Please enter a valid US ZIP code (5 digits or 5+4 format)".to_string(),
            ))
        }
    }
}

fn is_valid_zip(s: &str) -> bool {
    let bytes = s.as_bytes();
    match bytes.len() {
        5 => bytes.iter().all(u8::is_ascii_digit),
        10 => {
            bytes[..5].iter().all(u8::is_ascii_digit)
                && bytes[5] == b'-'
                && bytes[6..].iter().all(u8::is_ascii_digit)
        }
        _ => false,
    }
}

/// Result of geocoding a ZIP code.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocationData {
    #[serde(default)]
    pub zip: Option<String>,
    pub name: String,
    pub lat: f64,
    pub lon: f64,
    pub country: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coord {
    pub lon: f64,
    pub lat: f64,
}

/// One condition descriptor. The provider may return several simultaneously;
/// see [`WeatherSnapshot::condition`] for the truncation rule.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Condition {
    pub id: i64,
    pub main: String,
    pub description: String,
    pub icon: String,
}

/// Thermodynamic readings. Imperial units throughout: temperatures in °F,
/// pressure in hPa.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MainReadings {
    pub temp: f64,
    pub feels_like: f64,
    pub temp_min: f64,
    pub temp_max: f64,
    pub pressure: i64,
    pub humidity: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Wind {
    /// mph under imperial units.
    pub speed: f64,
    #[serde(default)]
    pub deg: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gust: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Clouds {
    /// Coverage percent.
    pub all: u8,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Sys {
    #[serde(default)]
    pub country: Option<String>,
    /// Unix seconds, UTC.
    pub sunrise: i64,
    pub sunset: i64,
}

/// A current-conditions reading. Immutable once parsed; a new fetch yields a
/// new value rather than mutating an old one.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherSnapshot {
    pub coord: Coord,
    pub weather: Vec<Condition>,
    pub main: MainReadings,
    /// Meters; the provider omits it for some stations.
    #[serde(default)]
    pub visibility: Option<i64>,
    pub wind: Wind,
    pub clouds: Clouds,
    /// Observation time, Unix seconds UTC.
    pub dt: i64,
    pub sys: Sys,
    /// Offset of the observed location from UTC, in seconds.
    #[serde(default)]
    pub timezone: i32,
    pub name: String,
}

impl WeatherSnapshot {
    /// The primary condition descriptor. The provider can report multiple
    /// simultaneous conditions; only the first entry is used for display.
    pub fn condition(&self) -> Option<&Condition> {
        self.weather.first()
    }

    /// Display description of the primary condition.
    pub fn description(&self) -> &str {
        self.condition()
            .map(|c| c.description.as_str())
            .unwrap_or("Unknown")
    }
}

/// One timestamped entry of a multi-day forecast.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastEntry {
    /// Forecasted time, Unix seconds UTC.
    pub dt: i64,
    pub main: MainReadings,
    pub weather: Vec<Condition>,
    pub wind: Wind,
    pub clouds: Clouds,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dt_txt: Option<String>,
}

impl ForecastEntry {
    /// Same first-entry-wins rule as [`WeatherSnapshot::condition`].
    pub fn condition(&self) -> Option<&Condition> {
        self.weather.first()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastCity {
    pub name: String,
    pub country: String,
    #[serde(default)]
    pub timezone: i32,
    #[serde(default)]
    pub sunrise: i64,
    #[serde(default)]
    pub sunset: i64,
}

/// Multi-day forecast: an ordered sequence of 3-hourly entries plus the
/// resolved place they apply to.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherForecast {
    pub list: Vec<ForecastEntry>,
    pub city: ForecastCity,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_five_digit_zip() {
        let zip: ZipCode = "90210".parse().expect("5-digit zip must parse");
        assert_eq!(zip.as_str(), "90210");
    }

    #[test]
    fn accepts_zip_plus_four() {
        let zip: ZipCode = "12345-6789".parse().expect("zip+4 must parse");
        assert_eq!(zip.as_str(), "12345-6789");
    }

    #[test]
    fn trims_surrounding_whitespace() {
        let zip: ZipCode = "  10001 ".parse().expect("trimmed zip must parse");
        assert_eq!(zip.as_str(), "10001");
    }

    #[test]
    fn rejects_letters() {
        let err = "ABCDE".parse::<ZipCode>().unwrap_err();
        assert!(matches!(err, WeatherError::Validation(_)));
        assert!(err.to_string().contains("valid US ZIP code"));
    }

    #[test]
    fn rejects_wrong_lengths() {
        for bad in ["", "1234", "123456", "12345-678", "12345-67890", "12345-"] {
            assert!(bad.parse::<ZipCode>().is_err(), "{bad:?} must be rejected");
        }
    }

    #[test]
    fn rejects_wrong_separator() {
        assert!("12345 6789".parse::<ZipCode>().is_err());
        assert!("12345+6789".parse::<ZipCode>().is_err());
    }

    #[test]
    fn first_condition_entry_wins() {
        let payload = serde_json::json!({
            "coord": { "lon": -73.99, "lat": 40.75 },
            "weather": [
                { "id": 500, "main": "Rain", "description": "light rain", "icon": "10d" },
                { "id": 701, "main": "Mist", "description": "mist", "icon": "50d" }
            ],
            "main": {
                "temp": 58.2, "feels_like": 57.0, "temp_min": 55.0,
                "temp_max": 61.0, "pressure": 1009, "humidity": 87
            },
            "visibility": 8047,
            "wind": { "speed": 12.5, "deg": 40 },
            "clouds": { "all": 90 },
            "dt": 1635793200,
            "sys": { "country": "US", "sunrise": 1635765432, "sunset": 1635806832 },
            "timezone": -14400,
            "name": "New York"
        });

        let snapshot: WeatherSnapshot = serde_json::from_value(payload).unwrap();
        assert_eq!(snapshot.weather.len(), 2);
        assert_eq!(snapshot.description(), "light rain");
    }
}
