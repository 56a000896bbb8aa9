//! Core library for the `zipweather` dashboard CLI.
//!
//! This crate defines:
//! - Credential configuration and the demo-mode policy
//! - The OpenWeather client (ZIP geocoding, current conditions, forecast)
//! - The demo fallback provider and the shared domain models
//! - Pure formatting helpers for rendering weather data
//!
//! It is used by `zipweather-cli`, but can also be reused by other binaries or services.

pub mod cities;
pub mod client;
pub mod config;
pub mod demo;
pub mod error;
pub mod format;
pub mod model;

pub use cities::{CityInfo, MAJOR_CITIES};
pub use client::WeatherClient;
pub use config::Config;
pub use error::WeatherError;
pub use model::{LocationData, WeatherForecast, WeatherSnapshot, ZipCode};
