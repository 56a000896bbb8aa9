use std::str::FromStr;

use anyhow::{Context, bail};
use clap::{Parser, Subcommand};
use tracing::warn;

use zipweather_core::{Config, MAJOR_CITIES, WeatherClient, WeatherError, ZipCode, config, demo, format};

use crate::render;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "zipweather", version, about = "ZIP-code weather dashboard")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store the OpenWeather API key for live weather data.
    Configure,

    /// Show current conditions for a US ZIP code.
    Show {
        /// 5-digit or 5+4 ZIP code, e.g. "90210" or "10001-0001".
        zip: String,
    },

    /// Show the 5-day forecast for a US ZIP code.
    Forecast {
        /// 5-digit or 5+4 ZIP code.
        zip: String,
    },

    /// Show the five-major-cities panel.
    Cities,

    /// Verify the configured API key against the provider.
    CheckKey,
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command {
            Command::Configure => configure(),
            Command::Show { zip } => show(&zip).await,
            Command::Forecast { zip } => forecast(&zip).await,
            Command::Cities => cities().await,
            Command::CheckKey => check_key().await,
        }
    }
}

fn configure() -> anyhow::Result<()> {
    let key = inquire::Password::new("OpenWeather API key:")
        .without_confirmation()
        .prompt()
        .context("Failed to read API key")?;
    let key = key.trim().to_string();

    if !config::is_live_key(&key) {
        bail!(
            "That looks like a placeholder, not a real key.\n\
             Sign up at https://openweathermap.org/api and run `zipweather configure` again."
        );
    }
    if key.len() != 32 {
        println!(
            "Warning: key length is {}, OpenWeather keys are usually 32 characters",
            key.len()
        );
    }

    let mut cfg = Config::load()?;
    cfg.set_api_key(key);
    cfg.save()?;

    println!("Saved API key to {}", Config::config_file_path()?.display());
    Ok(())
}

async fn show(zip: &str) -> anyhow::Result<()> {
    let zip = ZipCode::from_str(zip)?;
    let cfg = Config::load()?;

    let snapshot = match cfg.live_api_key() {
        Some(key) => {
            WeatherClient::new(key)
                .current_weather_by_zip(&zip)
                .await?
        }
        None => {
            warn!("no OpenWeather API key configured; showing demo data");
            demo::snapshot_for_zip(&zip)
        }
    };

    render::current(&snapshot);
    Ok(())
}

async fn forecast(zip: &str) -> anyhow::Result<()> {
    let zip = ZipCode::from_str(zip)?;
    let cfg = Config::load()?;

    let Some(key) = cfg.live_api_key() else {
        bail!(
            "The forecast needs a live OpenWeather API key.\n\
             Hint: run `zipweather configure`, or set {}.",
            config::API_KEY_ENV
        );
    };

    let forecast = WeatherClient::new(key).forecast_by_zip(&zip).await?;
    render::forecast(&forecast);
    Ok(())
}

async fn cities() -> anyhow::Result<()> {
    let cfg = Config::load()?;

    match cfg.live_api_key() {
        None => {
            warn!("no OpenWeather API key configured; showing demo data");
            println!("Major cities (demo data)\n");
            for city in &MAJOR_CITIES {
                render::city_card(city, &demo::snapshot_for_city(city));
            }
        }
        Some(key) => {
            let client = WeatherClient::new(key);

            // One independent in-flight request per city; results are
            // printed in panel order regardless of completion order.
            let tasks: Vec<_> = MAJOR_CITIES
                .iter()
                .map(|city| {
                    let client = client.clone();
                    let zip = ZipCode::from_str(city.zip);
                    tokio::spawn(async move {
                        let zip = zip?;
                        client.current_weather_by_zip(&zip).await
                    })
                })
                .collect();

            println!("Major cities\n");
            for (city, task) in MAJOR_CITIES.iter().zip(tasks) {
                match task.await? {
                    Ok(snapshot) => render::city_card(city, &snapshot),
                    Err(e) => println!("{} {} — unavailable: {e}\n", city.emoji, city.name),
                }
            }
        }
    }

    Ok(())
}

async fn check_key() -> anyhow::Result<()> {
    let cfg = Config::load()?;

    let Some(key) = cfg.resolve_api_key() else {
        bail!(
            "No API key configured.\n\
             Hint: run `zipweather configure`, or set {}.",
            config::API_KEY_ENV
        );
    };

    let preview: String = key.chars().take(8).collect();
    println!("Checking API key {preview}...");

    if !config::is_live_key(&key) {
        bail!("The configured key is the placeholder {key:?}; replace it with your real API key.");
    }
    if key.len() != 32 {
        println!(
            "Warning: key length is {}, OpenWeather keys are usually 32 characters",
            key.len()
        );
    }

    let zip = ZipCode::from_str("10001")?;
    match WeatherClient::new(key).current_weather_by_zip(&zip).await {
        Ok(snapshot) => {
            println!("API key is working!");
            println!(
                "Test location: {}, temperature: {}",
                snapshot.name,
                format::format_temperature(snapshot.main.temp)
            );
            Ok(())
        }
        Err(WeatherError::Provider {
            status: Some(401),
            message,
        }) => {
            println!("API key test failed: {message}");
            println!(
                "New keys can take a couple of hours to activate; \
                 double-check the key on your OpenWeather account page."
            );
            bail!("API key rejected by the provider")
        }
        Err(e) => Err(e.into()),
    }
}
