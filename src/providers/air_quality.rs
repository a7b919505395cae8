use crate::providers::error::ProviderError;
use crate::providers::http_loader::HttpLoader;
use crate::types::air_quality::AirQuality;
use crate::types::lat_lon::LatLon;

/// Open-Meteo air-quality endpoint, hourly US AQI only.
#[derive(Debug, Clone)]
pub struct AirQualityProvider {
    loader: HttpLoader,
    base_url: String,
}

impl AirQualityProvider {
    pub fn new(loader: HttpLoader, base_url: &str) -> Self {
        Self {
            loader,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub async fn fetch(&self, location: LatLon) -> Result<AirQuality, ProviderError> {
        let url = format!("{}/v1/air-quality", self.base_url);
        let request = self.loader.client().get(&url).query(&[
            ("latitude", location.latitude().to_string()),
            ("longitude", location.longitude().to_string()),
            ("hourly", "us_aqi".to_string()),
        ]);
        self.loader.fetch_json(request).await
    }
}
