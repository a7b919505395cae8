//! Humidity, UV, cloud cover, air quality and visibility readings.

use crate::types::forecast::Forecast;
use crate::types::units::fahrenheit_to_celsius;
use chrono::{DateTime, FixedOffset};

const MAGNUS_A: f64 = 17.27;
const MAGNUS_B: f64 = 237.7;
const METERS_PER_MILE: f64 = 1609.34;
const VISIBILITY_TRACK_MILES: f64 = 25.0;

/// Dew point in °F from air temperature in °F and relative humidity in percent,
/// using the Magnus approximation. Humidity is floored at 0.0001 % so the log
/// stays finite.
pub fn dew_point_f(temp_f: f64, relative_humidity: f64) -> f64 {
    let temp_c = fahrenheit_to_celsius(temp_f);
    let rh = relative_humidity.max(0.0001);
    let alpha = (MAGNUS_A * temp_c) / (MAGNUS_B + temp_c) + (rh / 100.0).ln();
    let dew_c = (MAGNUS_B * alpha) / (MAGNUS_A - alpha);
    dew_c * 9.0 / 5.0 + 32.0
}

pub fn uv_label(uv_index: f64) -> &'static str {
    match uv_index {
        v if v < 3.0 => "Low",
        v if v < 6.0 => "Moderate",
        v if v < 8.0 => "High",
        v if v < 11.0 => "Very High",
        _ => "Extreme",
    }
}

/// Slider position for the UV index, which tops out at 11.
pub fn uv_position(uv_index: f64) -> f64 {
    uv_index.clamp(0.0, 11.0) / 11.0 * 100.0
}

pub fn cloud_label(cloud_cover_pct: f64) -> &'static str {
    match cloud_cover_pct {
        v if v < 20.0 => "Clear",
        v if v < 40.0 => "Mostly Clear",
        v if v < 60.0 => "Partly Cloudy",
        v if v < 80.0 => "Mostly Cloudy",
        _ => "Overcast",
    }
}

pub fn cloud_position(cloud_cover_pct: f64) -> f64 {
    cloud_cover_pct.clamp(0.0, 100.0)
}

pub fn aqi_label(aqi: f64) -> &'static str {
    match aqi {
        v if v <= 50.0 => "Good",
        v if v <= 100.0 => "Moderate",
        v if v <= 150.0 => "Unhealthy for Some",
        v if v <= 200.0 => "Unhealthy",
        v if v <= 300.0 => "Very Unhealthy",
        _ => "Hazardous",
    }
}

/// The AQI slider maps 0–500 onto the track; readings past either end are pinned to it.
pub fn aqi_position(aqi: f64) -> f64 {
    (aqi / 5.0).clamp(0.0, 100.0)
}

pub fn meters_to_miles(meters: f64) -> f64 {
    meters / METERS_PER_MILE
}

pub fn visibility_label(miles: f64) -> &'static str {
    match miles {
        v if v < 0.5 => "Dense Fog",
        v if v < 1.0 => "Foggy",
        v if v < 3.0 => "Hazy",
        v if v < 5.0 => "Fair",
        v if v < 10.0 => "Clear",
        v if v < 20.0 => "Very Clear",
        _ => "Ultra Clear",
    }
}

pub fn visibility_position(miles: f64) -> f64 {
    (miles / VISIBILITY_TRACK_MILES * 100.0).min(100.0)
}

/// Fifteen-minute visibility samples in miles, for the visibility chart. Falls
/// back to the hourly column when the forecast carries no 15-minute block.
pub fn visibility_series(forecast: &Forecast) -> Vec<(DateTime<FixedOffset>, f64)> {
    let (times, values) = match &forecast.minutely_15 {
        Some(block) if !block.time.is_empty() => (&block.time, &block.visibility),
        _ => (&forecast.hourly.time, &forecast.hourly.visibility),
    };
    times
        .iter()
        .zip(values.iter())
        .filter_map(|(time, meters)| {
            let at = forecast.localize(*time)?;
            Some((at, meters_to_miles((*meters)?)))
        })
        .collect()
}
