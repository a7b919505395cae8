//! Data structures for the Open-Meteo forecast response, plus row views and time
//! helpers that resolve the response's local timestamps.

use crate::types::lat_lon::LatLon;
use crate::types::local_time;
use crate::types::units::Units;
use crate::types::weather_code::{describe_code, CodeDescription};
use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, Offset, TimeZone, Timelike, Utc};
use serde::Deserialize;
use std::collections::HashMap;

/// The variables requested for the `current` block.
pub(crate) const CURRENT_VARIABLES: &[&str] = &[
    "temperature_2m",
    "relative_humidity_2m",
    "apparent_temperature",
    "is_day",
    "weather_code",
    "wind_speed_10m",
    "wind_direction_10m",
    "wind_gusts_10m",
    "precipitation",
    "rain",
    "showers",
    "snowfall",
    "cloud_cover",
    "pressure_msl",
    "surface_pressure",
];

/// The variables requested for the `hourly` block.
pub(crate) const HOURLY_VARIABLES: &[&str] = &[
    "temperature_2m",
    "weather_code",
    "apparent_temperature",
    "relative_humidity_2m",
    "dew_point_2m",
    "pressure_msl",
    "cloud_cover",
    "visibility",
    "precipitation",
    "precipitation_probability",
    "rain",
    "showers",
    "snowfall",
    "snow_depth",
    "wind_speed_10m",
    "wind_direction_10m",
    "wind_gusts_10m",
    "surface_pressure",
];

/// The variables requested for the `daily` block.
pub(crate) const DAILY_VARIABLES: &[&str] = &[
    "weather_code",
    "temperature_2m_max",
    "temperature_2m_min",
    "apparent_temperature_max",
    "apparent_temperature_min",
    "sunrise",
    "sunset",
    "wind_speed_10m_max",
    "wind_direction_10m_dominant",
    "wind_gusts_10m_max",
    "daylight_duration",
    "sunshine_duration",
    "uv_index_max",
    "uv_index_clear_sky_max",
    "showers_sum",
    "snowfall_sum",
    "rain_sum",
    "precipitation_sum",
    "precipitation_hours",
    "precipitation_probability_max",
];

/// The variables requested for the `minutely_15` block.
pub(crate) const MINUTELY_15_VARIABLES: &[&str] = &["visibility"];

/// A complete forecast for one location as returned by Open-Meteo.
///
/// Timestamps inside the blocks are local wall-clock times for the location; use
/// [`Forecast::localize`] (or the row views) to attach the response's UTC offset.
#[derive(Debug, Clone, Deserialize)]
pub struct Forecast {
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default)]
    pub generationtime_ms: f64,
    #[serde(default)]
    pub utc_offset_seconds: i32,
    #[serde(default)]
    pub timezone: String,
    #[serde(default)]
    pub timezone_abbreviation: String,
    #[serde(default)]
    pub elevation: f64,
    #[serde(default)]
    pub current_units: HashMap<String, String>,
    pub current: CurrentConditions,
    #[serde(default)]
    pub hourly_units: HashMap<String, String>,
    #[serde(default)]
    pub hourly: HourlySeries,
    #[serde(default)]
    pub daily_units: HashMap<String, String>,
    #[serde(default)]
    pub daily: DailySeries,
    #[serde(default)]
    pub minutely_15: Option<Minutely15Series>,
    /// The units the values were requested in; not part of the response body.
    #[serde(skip)]
    pub units: Units,
}

/// The `current` block.
#[derive(Debug, Clone, Deserialize)]
pub struct CurrentConditions {
    #[serde(deserialize_with = "local_time::deserialize")]
    pub time: NaiveDateTime,
    #[serde(default)]
    pub interval: i64,
    pub temperature_2m: f64,
    #[serde(default)]
    pub relative_humidity_2m: f64,
    #[serde(default)]
    pub apparent_temperature: f64,
    #[serde(default)]
    pub is_day: u8,
    #[serde(default)]
    pub weather_code: Option<i64>,
    #[serde(default)]
    pub wind_speed_10m: f64,
    #[serde(default)]
    pub wind_direction_10m: f64,
    #[serde(default)]
    pub wind_gusts_10m: f64,
    #[serde(default)]
    pub precipitation: f64,
    #[serde(default)]
    pub rain: f64,
    #[serde(default)]
    pub showers: f64,
    #[serde(default)]
    pub snowfall: f64,
    #[serde(default)]
    pub cloud_cover: f64,
    #[serde(default)]
    pub pressure_msl: f64,
    #[serde(default)]
    pub surface_pressure: f64,
}

/// The `hourly` block: parallel columns indexed by position in `time`.
///
/// Open-Meteo reports `null` where a model has no value, so numeric columns are
/// `Option`. A column that was not requested deserializes as empty.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct HourlySeries {
    #[serde(deserialize_with = "local_time::vec::deserialize")]
    pub time: Vec<NaiveDateTime>,
    pub temperature_2m: Vec<Option<f64>>,
    pub weather_code: Vec<Option<i64>>,
    pub apparent_temperature: Vec<Option<f64>>,
    pub relative_humidity_2m: Vec<Option<f64>>,
    pub dew_point_2m: Vec<Option<f64>>,
    pub pressure_msl: Vec<Option<f64>>,
    pub cloud_cover: Vec<Option<f64>>,
    pub visibility: Vec<Option<f64>>,
    pub precipitation: Vec<Option<f64>>,
    pub precipitation_probability: Vec<Option<f64>>,
    pub rain: Vec<Option<f64>>,
    pub showers: Vec<Option<f64>>,
    pub snowfall: Vec<Option<f64>>,
    pub snow_depth: Vec<Option<f64>>,
    pub wind_speed_10m: Vec<Option<f64>>,
    pub wind_direction_10m: Vec<Option<f64>>,
    pub wind_gusts_10m: Vec<Option<f64>>,
    pub surface_pressure: Vec<Option<f64>>,
}

/// The `daily` block.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct DailySeries {
    pub time: Vec<NaiveDate>,
    pub weather_code: Vec<Option<i64>>,
    pub temperature_2m_max: Vec<Option<f64>>,
    pub temperature_2m_min: Vec<Option<f64>>,
    pub apparent_temperature_max: Vec<Option<f64>>,
    pub apparent_temperature_min: Vec<Option<f64>>,
    #[serde(deserialize_with = "local_time::optional_vec::deserialize")]
    pub sunrise: Vec<Option<NaiveDateTime>>,
    #[serde(deserialize_with = "local_time::optional_vec::deserialize")]
    pub sunset: Vec<Option<NaiveDateTime>>,
    pub wind_speed_10m_max: Vec<Option<f64>>,
    pub wind_direction_10m_dominant: Vec<Option<f64>>,
    pub wind_gusts_10m_max: Vec<Option<f64>>,
    pub daylight_duration: Vec<Option<f64>>,
    pub sunshine_duration: Vec<Option<f64>>,
    pub uv_index_max: Vec<Option<f64>>,
    pub uv_index_clear_sky_max: Vec<Option<f64>>,
    pub showers_sum: Vec<Option<f64>>,
    pub snowfall_sum: Vec<Option<f64>>,
    pub rain_sum: Vec<Option<f64>>,
    pub precipitation_sum: Vec<Option<f64>>,
    pub precipitation_hours: Vec<Option<f64>>,
    pub precipitation_probability_max: Vec<Option<f64>>,
}

/// The `minutely_15` block (only visibility is requested).
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Minutely15Series {
    #[serde(deserialize_with = "local_time::vec::deserialize")]
    pub time: Vec<NaiveDateTime>,
    pub visibility: Vec<Option<f64>>,
}

/// One row of the hourly block.
#[derive(Debug, Clone, PartialEq)]
pub struct HourlyPoint {
    pub time: DateTime<FixedOffset>,
    pub temperature: Option<f64>,
    pub apparent_temperature: Option<f64>,
    pub weather_code: Option<i64>,
    pub relative_humidity: Option<f64>,
    pub dew_point: Option<f64>,
    pub cloud_cover: Option<f64>,
    pub visibility_m: Option<f64>,
    pub precipitation_probability: Option<f64>,
    pub wind_speed: Option<f64>,
    pub wind_gusts: Option<f64>,
}

/// One row of the daily block.
#[derive(Debug, Clone, PartialEq)]
pub struct DailyPoint {
    pub date: NaiveDate,
    pub weather_code: Option<i64>,
    pub temperature_min: Option<f64>,
    pub temperature_max: Option<f64>,
    pub sunrise: Option<DateTime<FixedOffset>>,
    pub sunset: Option<DateTime<FixedOffset>>,
    pub uv_index_max: Option<f64>,
    pub wind_speed_max: Option<f64>,
    pub wind_gusts_max: Option<f64>,
    pub precipitation_probability_max: Option<f64>,
    pub precipitation_sum: Option<f64>,
}

fn at<T: Copy>(column: &[Option<T>], index: usize) -> Option<T> {
    column.get(index).copied().flatten()
}

impl Forecast {
    /// The position the forecast was computed for (Open-Meteo snaps to its grid).
    pub fn position(&self) -> LatLon {
        LatLon(self.latitude, self.longitude)
    }

    /// The location's UTC offset. Out-of-range offsets fall back to UTC.
    pub fn offset(&self) -> FixedOffset {
        FixedOffset::east_opt(self.utc_offset_seconds).unwrap_or_else(|| Utc.fix())
    }

    /// Attaches the location's offset to a local timestamp from the response.
    pub fn localize(&self, local: NaiveDateTime) -> Option<DateTime<FixedOffset>> {
        self.offset().from_local_datetime(&local).single()
    }

    /// Converts an instant into the location's wall-clock time.
    pub fn to_local<Tz: TimeZone>(&self, instant: &DateTime<Tz>) -> DateTime<FixedOffset> {
        instant.with_timezone(&self.offset())
    }

    pub fn is_day(&self) -> bool {
        self.current.is_day == 1
    }

    /// Description of the current condition, honoring day/night.
    pub fn current_condition(&self) -> CodeDescription {
        describe_code(self.current.weather_code, self.is_day())
    }

    pub fn hour_count(&self) -> usize {
        self.hourly.time.len()
    }

    pub fn day_count(&self) -> usize {
        self.daily.time.len()
    }

    pub fn hour(&self, index: usize) -> Option<HourlyPoint> {
        let h = &self.hourly;
        let time = self.localize(*h.time.get(index)?)?;
        Some(HourlyPoint {
            time,
            temperature: at(&h.temperature_2m, index),
            apparent_temperature: at(&h.apparent_temperature, index),
            weather_code: at(&h.weather_code, index),
            relative_humidity: at(&h.relative_humidity_2m, index),
            dew_point: at(&h.dew_point_2m, index),
            cloud_cover: at(&h.cloud_cover, index),
            visibility_m: at(&h.visibility, index),
            precipitation_probability: at(&h.precipitation_probability, index),
            wind_speed: at(&h.wind_speed_10m, index),
            wind_gusts: at(&h.wind_gusts_10m, index),
        })
    }

    pub fn day(&self, index: usize) -> Option<DailyPoint> {
        let d = &self.daily;
        let date = *d.time.get(index)?;
        let local = |column: &[Option<NaiveDateTime>]| {
            column
                .get(index)
                .copied()
                .flatten()
                .and_then(|t| self.localize(t))
        };
        Some(DailyPoint {
            date,
            weather_code: at(&d.weather_code, index),
            temperature_min: at(&d.temperature_2m_min, index),
            temperature_max: at(&d.temperature_2m_max, index),
            sunrise: local(&d.sunrise),
            sunset: local(&d.sunset),
            uv_index_max: at(&d.uv_index_max, index),
            wind_speed_max: at(&d.wind_speed_10m_max, index),
            wind_gusts_max: at(&d.wind_gusts_10m_max, index),
            precipitation_probability_max: at(&d.precipitation_probability_max, index),
            precipitation_sum: at(&d.precipitation_sum, index),
        })
    }

    /// Index of the first hourly row strictly after `now`.
    pub fn first_hour_after<Tz: TimeZone>(&self, now: &DateTime<Tz>) -> Option<usize> {
        let now = now.with_timezone(&Utc);
        self.hourly
            .time
            .iter()
            .position(|t| self.localize(*t).is_some_and(|t| t.with_timezone(&Utc) > now))
    }

    /// Index of the hourly row in the same local date and hour as `now`.
    pub fn hour_containing<Tz: TimeZone>(&self, now: &DateTime<Tz>) -> Option<usize> {
        let local = self.to_local(now).naive_local();
        self.hourly
            .time
            .iter()
            .position(|t| t.date() == local.date() && t.hour() == local.hour())
    }

    /// Up to `count` hourly rows starting at the first hour after `now`, or at the
    /// start of the series when every row is in the past.
    pub fn upcoming_hours<Tz: TimeZone>(
        &self,
        now: &DateTime<Tz>,
        count: usize,
    ) -> Vec<HourlyPoint> {
        let start = self.first_hour_after(now).unwrap_or(0);
        let end = (start + count).min(self.hour_count());
        (start..end).filter_map(|i| self.hour(i)).collect()
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use chrono::NaiveTime;

    /// A trimmed but structurally faithful Open-Meteo response for Denver, UTC-6.
    pub(crate) const SAMPLE_FORECAST: &str = r#"{
        "latitude": 39.74,
        "longitude": -104.99,
        "generationtime_ms": 0.5,
        "utc_offset_seconds": -21600,
        "timezone": "America/Denver",
        "timezone_abbreviation": "GMT-6",
        "elevation": 1609.0,
        "current_units": {"temperature_2m": "°F", "wind_speed_10m": "mp/h"},
        "current": {
            "time": "2024-06-21T14:00",
            "interval": 900,
            "temperature_2m": 84.6,
            "relative_humidity_2m": 18,
            "apparent_temperature": 80.2,
            "is_day": 1,
            "weather_code": 2,
            "wind_speed_10m": 9.4,
            "wind_direction_10m": 250,
            "wind_gusts_10m": 21.3,
            "precipitation": 0.0,
            "rain": 0.0,
            "showers": 0.0,
            "snowfall": 0.0,
            "cloud_cover": 41,
            "pressure_msl": 1011.2,
            "surface_pressure": 834.1
        },
        "hourly_units": {"temperature_2m": "°F"},
        "hourly": {
            "time": ["2024-06-21T13:00", "2024-06-21T14:00", "2024-06-21T15:00", "2024-06-21T16:00", "2024-06-22T00:00"],
            "temperature_2m": [83.1, 84.6, 85.9, 86.0, 66.2],
            "weather_code": [1, 2, 3, 95, 0],
            "apparent_temperature": [79.0, 80.2, 81.5, 82.0, 64.0],
            "relative_humidity_2m": [19, 18, 17, 20, 40],
            "dew_point_2m": [35.0, 34.1, 34.0, 38.0, 41.0],
            "cloud_cover": [20, 41, 60, 90, 0],
            "visibility": [24140, 24140, 20000, null, 24140],
            "precipitation_probability": [0, 0, 5, 40, 0],
            "wind_speed_10m": [8.0, 9.4, 10.2, 14.8, 4.1],
            "wind_gusts_10m": [18.0, 21.3, 22.0, 35.5, 9.0]
        },
        "daily_units": {"sunrise": "iso8601"},
        "daily": {
            "time": ["2024-06-21", "2024-06-22"],
            "weather_code": [95, 3],
            "temperature_2m_max": [88.3, 91.0],
            "temperature_2m_min": [58.1, 61.4],
            "sunrise": ["2024-06-21T05:32", "2024-06-22T05:32"],
            "sunset": ["2024-06-21T20:31", null],
            "uv_index_max": [9.85, 10.2],
            "precipitation_probability_max": [40, 10]
        }
    }"#;

    pub(crate) fn sample() -> Forecast {
        serde_json::from_str(SAMPLE_FORECAST).expect("sample forecast decodes")
    }

    #[test]
    fn decodes_sample_and_fills_missing_columns() {
        let f = sample();
        assert_eq!(f.hour_count(), 5);
        assert_eq!(f.day_count(), 2);
        assert!(f.hourly.rain.is_empty());
        assert!(f.minutely_15.is_none());
        assert_eq!(f.offset().local_minus_utc(), -21600);
        assert!(f.is_day());
        assert_eq!(f.current_condition().condition, "Partly cloudy skies");
    }

    #[test]
    fn rows_carry_offset_and_nulls() {
        let f = sample();
        let h = f.hour(3).unwrap();
        assert_eq!(h.time.to_rfc3339(), "2024-06-21T16:00:00-06:00");
        assert_eq!(h.visibility_m, None);
        assert_eq!(h.wind_gusts, Some(35.5));
        assert!(f.hour(99).is_none());

        let d = f.day(1).unwrap();
        assert!(d.sunrise.is_some());
        assert!(d.sunset.is_none());
        assert_eq!(d.wind_speed_max, None);
    }

    #[test]
    fn hour_lookup_relative_to_now() {
        let f = sample();
        let offset = f.offset();
        let now = offset
            .from_local_datetime(&NaiveDate::from_ymd_opt(2024, 6, 21).unwrap().and_time(
                NaiveTime::from_hms_opt(14, 20, 0).unwrap(),
            ))
            .unwrap();
        assert_eq!(f.first_hour_after(&now), Some(2));
        assert_eq!(f.hour_containing(&now), Some(1));
        // Same instant expressed in UTC resolves identically.
        assert_eq!(f.first_hour_after(&now.with_timezone(&Utc)), Some(2));

        let upcoming = f.upcoming_hours(&now, 12);
        assert_eq!(upcoming.len(), 3);
        assert_eq!(upcoming[0].temperature, Some(85.9));
    }

    #[test]
    fn upcoming_hours_falls_back_to_start() {
        let f = sample();
        let far_future = Utc.with_ymd_and_hms(2030, 1, 1, 0, 0, 0).unwrap();
        assert_eq!(f.first_hour_after(&far_future), None);
        assert_eq!(f.upcoming_hours(&far_future, 2).len(), 2);
    }
}
