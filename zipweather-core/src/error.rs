use thiserror::Error;

/// Errors produced by ZIP resolution and weather retrieval.
///
/// The four kinds are deliberately distinguishable so callers can pick a
/// different recovery for each: re-prompt on `Validation`, re-prompt on
/// `NotFound`, retry or surface on `Provider`/`Network`.
#[derive(Debug, Error)]
pub enum WeatherError {
    /// Malformed input, rejected before any network call is attempted.
    #[error("{0}")]
    Validation(String),

    /// The provider does not recognize the requested ZIP code.
    #[error("{0}")]
    NotFound(String),

    /// Non-success response from the provider, or a response body that
    /// could not be parsed.
    #[error("{message}")]
    Provider {
        status: Option<u16>,
        message: String,
    },

    /// Transport-level failure: DNS, connection refused, timeout.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

impl WeatherError {
    pub(crate) fn provider(status: Option<u16>, message: impl Into<String>) -> Self {
        WeatherError::Provider {
            status,
            message: message.into(),
        }
    }
}
