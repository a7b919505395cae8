//! Open-Meteo air-quality response (hourly US AQI).

use crate::types::local_time;
use chrono::NaiveDateTime;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct AirQuality {
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default)]
    pub utc_offset_seconds: i32,
    #[serde(default)]
    pub hourly: AirQualitySeries,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AirQualitySeries {
    #[serde(deserialize_with = "local_time::vec::deserialize")]
    pub time: Vec<NaiveDateTime>,
    pub us_aqi: Vec<Option<f64>>,
}

impl AirQuality {
    /// The first reported US AQI value, which is what the widget shows.
    pub fn current_aqi(&self) -> Option<f64> {
        self.hourly.us_aqi.first().copied().flatten()
    }
}
