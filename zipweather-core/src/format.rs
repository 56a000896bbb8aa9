//! Pure response-shaping helpers: icon URLs, compass bucketing, time and
//! temperature display. No I/O; every function is a pure function of its
//! arguments.

use chrono::{DateTime, FixedOffset};

const ICON_BASE_URL: &str = "https://openweathermap.org/img/wn";

/// Full URL of the 2x condition icon for a provider icon code like `"01d"`.
pub fn icon_url(icon_code: &str) -> String {
    format!("{ICON_BASE_URL}/{icon_code}@2x.png")
}

const COMPASS: [&str; 16] = [
    "N", "NNE", "NE", "ENE", "E", "ESE", "SE", "SSE", "S", "SSW", "SW", "WSW", "W", "WNW", "NW",
    "NNW",
];

/// Nearest of 16 compass labels for a wind heading in degrees. Sectors are
/// 22.5° wide; headings wrap at 360° and negative input is normalized.
pub fn wind_direction(degrees: f64) -> &'static str {
    let sector = ((degrees / 22.5).round() as i64).rem_euclid(16) as usize;
    COMPASS[sector]
}

/// Rounded Fahrenheit reading with the degree suffix, e.g. `"73°F"`.
pub fn format_temperature(temp_f: f64) -> String {
    format!("{}°F", temp_f.round() as i64)
}

fn local_datetime(unix_secs: i64, tz_offset_secs: i32) -> Option<DateTime<FixedOffset>> {
    let offset = FixedOffset::east_opt(tz_offset_secs)?;
    DateTime::from_timestamp(unix_secs, 0).map(|dt| dt.with_timezone(&offset))
}

/// 12-hour clock reading like `"3:17 AM"` at the given UTC offset.
///
/// Returns an empty string for timestamps or offsets outside chrono's
/// representable range.
pub fn format_time(unix_secs: i64, tz_offset_secs: i32) -> String {
    local_datetime(unix_secs, tz_offset_secs)
        .map(|dt| dt.format("%-I:%M %p").to_string())
        .unwrap_or_default()
}

/// Long-form date like `"Monday, November 1"` at the given UTC offset.
pub fn format_date(unix_secs: i64, tz_offset_secs: i32) -> String {
    local_datetime(unix_secs, tz_offset_secs)
        .map(|dt| dt.format("%A, %B %-d").to_string())
        .unwrap_or_default()
}

/// Dashboard glyph for a condition description, falling back to a
/// temperature-derived glyph when the description matches nothing known.
pub fn condition_emoji(condition: &str, temp_f: f64) -> &'static str {
    let lower = condition.to_lowercase();

    if lower.contains("clear") {
        return if temp_f > 80.0 { "☀️" } else { "🌤️" };
    }
    if lower.contains("cloud") {
        return if lower.contains("partly") { "⛅" } else { "☁️" };
    }
    if lower.contains("rain") || lower.contains("drizzle") {
        return "🌧️";
    }
    if lower.contains("thunder") || lower.contains("storm") {
        return "⛈️";
    }
    if lower.contains("snow") {
        return "❄️";
    }
    if lower.contains("fog") || lower.contains("mist") {
        return "🌫️";
    }
    if lower.contains("wind") {
        return "💨";
    }

    if temp_f > 85.0 {
        "🔥"
    } else if temp_f > 75.0 {
        "☀️"
    } else if temp_f > 65.0 {
        "🌤️"
    } else if temp_f > 50.0 {
        "⛅"
    } else if temp_f > 32.0 {
        "🌧️"
    } else {
        "❄️"
    }
}

/// Qualitative humidity bucket used next to the raw percentage.
pub fn humidity_level(pct: u8) -> &'static str {
    if pct >= 70 {
        "High"
    } else if pct >= 40 {
        "Normal"
    } else {
        "Low"
    }
}
