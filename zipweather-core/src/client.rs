use reqwest::{Client, StatusCode};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::WeatherError;
use crate::model::{LocationData, WeatherForecast, WeatherSnapshot, ZipCode};

pub const DEFAULT_BASE_URL: &str = "https://api.openweathermap.org";

/// Client for the ZIP geocoding and weather endpoints of OpenWeather.
///
/// The credential is fixed at construction and reused across calls; the
/// client holds no other state, so clones may issue requests concurrently
/// with no ordering guarantees between them. Units are fixed to imperial
/// (°F, mph, Unix-seconds timestamps).
#[derive(Debug, Clone)]
pub struct WeatherClient {
    api_key: String,
    base_url: String,
    http: Client,
}

/// Error body shape the provider uses for non-2xx responses.
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    #[serde(default)]
    message: String,
}

impl WeatherClient {
    pub fn new(api_key: String) -> Self {
        Self::with_base_url(api_key, DEFAULT_BASE_URL.to_string())
    }

    /// Same as [`new`](Self::new) with an overridden endpoint base,
    /// used to point the client at a mock server in tests.
    pub fn with_base_url(api_key: String, base_url: String) -> Self {
        Self {
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
            http: Client::new(),
        }
    }

    /// Resolve a ZIP code to coordinates and a display name.
    ///
    /// The ZIP was already validated when the [`ZipCode`] was constructed,
    /// so every call here is allowed to reach the network. A provider
    /// "not found" turns into [`WeatherError::NotFound`] with a user-facing
    /// message; other failures keep their taxonomy from [`get_json`](Self::get_json).
    pub async fn resolve_location(&self, zip: &ZipCode) -> Result<LocationData, WeatherError> {
        let query = [
            ("zip", format!("{zip},US")),
            ("appid", self.api_key.clone()),
        ];

        match self.get_json("/geo/1.0/zip", &query).await {
            Err(WeatherError::Provider { status, message })
                if status == Some(404) || message.contains("not found") =>
            {
                Err(WeatherError::NotFound(
                    "ZIP code not found. Please check and try again.".to_string(),
                ))
            }
            other => other,
        }
    }

    /// Current conditions at a coordinate pair. No local fallback: any
    /// failure propagates to the caller.
    pub async fn current_weather(
        &self,
        lat: f64,
        lon: f64,
    ) -> Result<WeatherSnapshot, WeatherError> {
        let query = self.coord_query(lat, lon);
        self.get_json("/data/2.5/weather", &query).await
    }

    /// Resolve a ZIP code, then fetch current conditions there.
    ///
    /// Exactly two GET requests on the success path; a geocode failure is
    /// returned as-is and the conditions request is never issued.
    pub async fn current_weather_by_zip(
        &self,
        zip: &ZipCode,
    ) -> Result<WeatherSnapshot, WeatherError> {
        let location = self.resolve_location(zip).await?;
        self.current_weather(location.lat, location.lon).await
    }

    /// 5-day / 3-hourly forecast at a coordinate pair.
    pub async fn forecast(&self, lat: f64, lon: f64) -> Result<WeatherForecast, WeatherError> {
        let query = self.coord_query(lat, lon);
        self.get_json("/data/2.5/forecast", &query).await
    }

    /// Resolve a ZIP code, then fetch the forecast there. Same composition
    /// rules as [`current_weather_by_zip`](Self::current_weather_by_zip).
    pub async fn forecast_by_zip(&self, zip: &ZipCode) -> Result<WeatherForecast, WeatherError> {
        let location = self.resolve_location(zip).await?;
        self.forecast(location.lat, location.lon).await
    }

    fn coord_query(&self, lat: f64, lon: f64) -> [(&'static str, String); 4] {
        [
            ("lat", lat.to_string()),
            ("lon", lon.to_string()),
            ("appid", self.api_key.clone()),
            ("units", "imperial".to_string()),
        ]
    }

    /// Shared GET-and-parse path. Transport failures map to `Network`,
    /// non-2xx responses to `Provider` (with the provider's own message when
    /// the body carries one), and unparseable success bodies to `Provider`.
    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&'static str, String)],
    ) -> Result<T, WeatherError> {
        let url = format!("{}{}", self.base_url, path);
        debug!(path, "requesting weather provider");

        let res = self.http.get(&url).query(query).send().await?;
        let status = res.status();
        let body = res.text().await?;

        if !status.is_success() {
            return Err(WeatherError::provider(
                Some(status.as_u16()),
                provider_message(&body, status),
            ));
        }

        serde_json::from_str(&body).map_err(|e| {
            WeatherError::provider(None, format!("Malformed response from weather provider: {e}"))
        })
    }
}

/// The provider's own error message when the body carries one, otherwise a
/// generic status-derived message.
fn provider_message(body: &str, status: StatusCode) -> String {
    serde_json::from_str::<ApiErrorBody>(body)
        .ok()
        .map(|e| e.message)
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| format!("HTTP error! status: {status}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn provider_message_prefers_body_message() {
        let msg = provider_message(r#"{"cod":401,"message":"Invalid API key"}"#, StatusCode::UNAUTHORIZED);
        assert_eq!(msg, "Invalid API key");
    }

    #[test]
    fn provider_message_falls_back_to_status() {
        let msg = provider_message("<html>bad gateway</html>", StatusCode::BAD_GATEWAY);
        assert_eq!(msg, "HTTP error! status: 502 Bad Gateway");
    }

    #[test]
    fn base_url_trailing_slash_is_normalized() {
        let client = WeatherClient::with_base_url("k".into(), "http://localhost:9999/".into());
        assert_eq!(client.base_url, "http://localhost:9999");
    }
}
