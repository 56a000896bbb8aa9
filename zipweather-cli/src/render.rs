//! Terminal rendering of weather data: the current-conditions panel, the
//! forecast listing, and the major-cities cards.

use zipweather_core::cities::CityInfo;
use zipweather_core::format;
use zipweather_core::model::{WeatherForecast, WeatherSnapshot};

/// Print the full current-conditions panel.
pub fn current(snapshot: &WeatherSnapshot) {
    let condition = snapshot.description();
    let tz = snapshot.timezone;

    let heading = match snapshot.sys.country.as_deref() {
        Some(country) if !country.is_empty() => format!("{}, {}", snapshot.name, country),
        _ => snapshot.name.clone(),
    };

    println!(
        "{} {}",
        format::condition_emoji(condition, snapshot.main.temp),
        heading
    );
    println!("{}", format::format_date(snapshot.dt, tz));
    println!();
    println!(
        "  {} (feels like {})  {}",
        format::format_temperature(snapshot.main.temp),
        format::format_temperature(snapshot.main.feels_like),
        condition
    );
    println!(
        "  High {} / Low {}",
        format::format_temperature(snapshot.main.temp_max),
        format::format_temperature(snapshot.main.temp_min)
    );
    println!();
    println!(
        "  Humidity    {}% ({})",
        snapshot.main.humidity,
        format::humidity_level(snapshot.main.humidity)
    );
    println!(
        "  Wind        {} mph {}",
        snapshot.wind.speed,
        format::wind_direction(snapshot.wind.deg)
    );
    println!("  Pressure    {} hPa", snapshot.main.pressure);
    if let Some(meters) = snapshot.visibility {
        println!("  Visibility  {} km", (meters as f64 / 1000.0).round() as i64);
    }
    println!("  Clouds      {}%", snapshot.clouds.all);
    println!(
        "  Sunrise     {}",
        format::format_time(snapshot.sys.sunrise, tz)
    );
    println!(
        "  Sunset      {}",
        format::format_time(snapshot.sys.sunset, tz)
    );
    println!();
    println!("Last updated: {}", format::format_time(snapshot.dt, tz));
    if let Some(primary) = snapshot.condition() {
        println!("Icon: {}", format::icon_url(&primary.icon));
    }
}

/// Print the forecast as day headers with 3-hourly lines under each.
pub fn forecast(forecast: &WeatherForecast) {
    let tz = forecast.city.timezone;

    println!(
        "5-day forecast for {}, {}\n",
        forecast.city.name, forecast.city.country
    );

    let mut current_day = String::new();
    for entry in &forecast.list {
        let day = format::format_date(entry.dt, tz);
        if day != current_day {
            if !current_day.is_empty() {
                println!();
            }
            println!("{day}");
            current_day = day;
        }

        let condition = entry
            .condition()
            .map(|c| c.description.as_str())
            .unwrap_or("Unknown");
        println!(
            "  {:>8}  {:>5}  {}  ({} mph {})",
            format::format_time(entry.dt, tz),
            format::format_temperature(entry.main.temp),
            condition,
            entry.wind.speed,
            format::wind_direction(entry.wind.deg)
        );
    }
}

/// Print one card of the major-cities panel.
pub fn city_card(city: &CityInfo, snapshot: &WeatherSnapshot) {
    let condition = snapshot.description();

    println!("{} {} ({})", city.emoji, snapshot.name, city.region);
    println!(
        "   {} {}  {}",
        format::condition_emoji(condition, snapshot.main.temp),
        format::format_temperature(snapshot.main.temp),
        condition
    );
    println!(
        "   Humidity {}%  Wind {} mph",
        snapshot.main.humidity, snapshot.wind.speed
    );
    println!();
}
