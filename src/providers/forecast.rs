use crate::providers::error::ProviderError;
use crate::providers::http_loader::HttpLoader;
use crate::types::forecast::{
    Forecast, CURRENT_VARIABLES, DAILY_VARIABLES, HOURLY_VARIABLES, MINUTELY_15_VARIABLES,
};
use crate::types::lat_lon::LatLon;
use crate::types::units::Units;

/// Open-Meteo forecast endpoint.
#[derive(Debug, Clone)]
pub struct ForecastProvider {
    loader: HttpLoader,
    base_url: String,
}

impl ForecastProvider {
    pub fn new(loader: HttpLoader, base_url: &str) -> Self {
        Self {
            loader,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub(crate) fn query(location: LatLon, units: Units, days: u8) -> Vec<(&'static str, String)> {
        vec![
            ("latitude", location.latitude().to_string()),
            ("longitude", location.longitude().to_string()),
            ("current", CURRENT_VARIABLES.join(",")),
            ("hourly", HOURLY_VARIABLES.join(",")),
            ("daily", DAILY_VARIABLES.join(",")),
            ("minutely_15", MINUTELY_15_VARIABLES.join(",")),
            ("timezone", "auto".to_string()),
            ("past_days", "0".to_string()),
            ("forecast_days", days.to_string()),
            ("temperature_unit", units.temperature.query_value().to_string()),
            ("wind_speed_unit", units.wind_speed.query_value().to_string()),
            (
                "precipitation_unit",
                units.precipitation.query_value().to_string(),
            ),
        ]
    }

    pub async fn fetch(
        &self,
        location: LatLon,
        units: Units,
        days: u8,
    ) -> Result<Forecast, ProviderError> {
        let url = format!("{}/v1/forecast", self.base_url);
        let request = self
            .loader
            .client()
            .get(&url)
            .query(&Self::query(location, units, days));
        let mut forecast: Forecast = self.loader.fetch_json(request).await?;
        if forecast.hourly.time.is_empty() {
            return Err(ProviderError::UnexpectedData {
                provider: "open-meteo forecast",
                message: "response has no hourly rows".to_string(),
            });
        }
        forecast.units = units;
        Ok(forecast)
    }
}
