//! This module provides the main entry point of the crate: the [`Hiems`] client,
//! which talks to the forecast, alerts, air-quality, geocoding and chat providers
//! and owns the preference store.

use crate::clients::forecast_client::ForecastClient;
use crate::clients::geocode_client::GeocodeClient;
use crate::config::HiemsConfig;
use crate::error::HiemsError;
use crate::preferences::store::PreferenceStore;
use crate::providers::air_quality::AirQualityProvider;
use crate::providers::alerts::AlertsProvider;
use crate::providers::chat::ChatProvider;
use crate::providers::forecast::ForecastProvider;
use crate::providers::geocode::GeocodeProvider;
use crate::providers::http_loader::HttpLoader;
use crate::summary::error::SummaryError;
use crate::summary::summarize;
use crate::types::air_quality::AirQuality;
use crate::types::alerts::AlertCollection;
use crate::types::forecast::Forecast;
use crate::types::lat_lon::LatLon;
use crate::types::units::Units;
use crate::utils::{ensure_cache_dir_exists, get_cache_dir};
use bon::bon;
use chrono::{DateTime, Utc};
use std::path::{Path, PathBuf};

/// The main client struct.
///
/// Create one with [`Hiems::new()`] (default configuration and cache directory),
/// [`Hiems::with_cache_folder()`], or [`Hiems::with_config()`] for full control.
///
/// # Examples
///
/// ```no_run
/// # use hiems::{Hiems, HiemsError, LatLon};
/// # #[tokio::main]
/// # async fn main() -> Result<(), HiemsError> {
/// let client = Hiems::new().await?;
/// let denver = LatLon(39.74, -104.99);
///
/// let forecast = client.forecast().location(denver).days(3).call().await?;
/// println!("{} hourly rows", forecast.hour_count());
///
/// let place = client.geocode().reverse(denver).await?;
/// println!("Weather for {}", place.name);
/// # Ok(())
/// # }
/// ```
pub struct Hiems {
    config: HiemsConfig,
    cache_dir: PathBuf,
    forecast: ForecastProvider,
    air_quality: AirQualityProvider,
    alerts: AlertsProvider,
    geocode: GeocodeProvider,
    chat: Option<ChatProvider>,
    preferences: PreferenceStore,
}

#[bon]
impl Hiems {
    /// Creates a client from `config`, keeping preferences in `cache_folder`.
    ///
    /// # Errors
    ///
    /// Returns [`HiemsError::CacheDirCreation`] if the directory cannot be created,
    /// [`HiemsError::Provider`] if the HTTP client cannot be built, and
    /// [`HiemsError::Preferences`] if an existing preference file is unreadable.
    pub async fn with_config(
        config: HiemsConfig,
        cache_folder: PathBuf,
    ) -> Result<Self, HiemsError> {
        ensure_cache_dir_exists(&cache_folder)
            .await
            .map_err(|e| HiemsError::CacheDirCreation(cache_folder.clone(), e))?;

        let loader = HttpLoader::new(&config.user_agent, config.request_timeout)?;
        let preferences = PreferenceStore::open(&cache_folder).await?;
        Ok(Self {
            forecast: ForecastProvider::new(loader.clone(), &config.forecast_base_url),
            air_quality: AirQualityProvider::new(loader.clone(), &config.air_quality_base_url),
            alerts: AlertsProvider::new(loader.clone(), &config.alerts_base_url),
            geocode: GeocodeProvider::new(loader.clone(), &config.geocode_base_url),
            chat: config
                .ai
                .clone()
                .map(|ai| ChatProvider::new(loader, ai)),
            preferences,
            cache_dir: cache_folder,
            config,
        })
    }

    /// Creates a client configured from the environment (see
    /// [`HiemsConfig::from_env`]) with preferences in `cache_folder`.
    pub async fn with_cache_folder(cache_folder: PathBuf) -> Result<Self, HiemsError> {
        Self::with_config(HiemsConfig::from_env(), cache_folder).await
    }

    /// Creates a client configured from the environment, using the default cache
    /// directory (e.g. `~/.cache/hiems_cache` on Linux).
    ///
    /// # Errors
    ///
    /// Returns [`HiemsError::CacheDirResolution`] if no system cache directory exists.
    pub async fn new() -> Result<Self, HiemsError> {
        let cache_folder = get_cache_dir().map_err(HiemsError::CacheDirResolution)?;
        Self::with_cache_folder(cache_folder).await
    }

    pub fn config(&self) -> &HiemsConfig {
        &self.config
    }

    pub fn cache_dir(&self) -> &Path {
        &self.cache_dir
    }

    pub fn preferences(&self) -> &PreferenceStore {
        &self.preferences
    }

    /// Whether a chat endpoint is configured for the conditions summary.
    pub fn summary_enabled(&self) -> bool {
        self.chat.is_some()
    }

    /// Starts a forecast request; see [`ForecastClient`].
    pub fn forecast(&self) -> ForecastClient<'_> {
        ForecastClient::new(self)
    }

    /// Geocoding lookups; see [`GeocodeClient`].
    pub fn geocode(&self) -> GeocodeClient<'_> {
        GeocodeClient::new(self)
    }

    /// Fetches the forecast for `location`. `units` and `days` default to the
    /// client configuration.
    #[builder]
    pub async fn fetch_forecast(
        &self,
        location: LatLon,
        units: Option<Units>,
        days: Option<u8>,
    ) -> Result<Forecast, HiemsError> {
        let units = units.unwrap_or(self.config.units);
        let days = days.unwrap_or(self.config.forecast_days);
        Ok(self.forecast.fetch(location, units, days).await?)
    }

    /// Active NWS alerts around `location`.
    pub async fn alerts(&self, location: LatLon) -> Result<AlertCollection, HiemsError> {
        Ok(self.alerts.fetch(location).await?)
    }

    /// Hourly US AQI around `location`.
    pub async fn air_quality(&self, location: LatLon) -> Result<AirQuality, HiemsError> {
        Ok(self.air_quality.fetch(location).await?)
    }

    pub(crate) fn geocoder(&self) -> &GeocodeProvider {
        &self.geocode
    }

    /// Asks the chat model for a one-paragraph summary of `forecast`.
    ///
    /// Pass the last summary as `previous` to keep the wording stable between
    /// refreshes. `now` defaults to the current time. Values are described in the
    /// units the forecast was fetched with.
    ///
    /// # Errors
    ///
    /// [`SummaryError::NotConfigured`] when no AI endpoint is configured,
    /// [`SummaryError::EmptyResponse`] when the model replies with nothing.
    #[builder]
    pub async fn summary(
        &self,
        forecast: &Forecast,
        previous: Option<&str>,
        now: Option<DateTime<Utc>>,
    ) -> Result<String, HiemsError> {
        let chat = self.chat.as_ref().ok_or(SummaryError::NotConfigured)?;
        let now = now.unwrap_or_else(Utc::now);
        Ok(summarize(chat, forecast, &forecast.units, previous, &now).await?)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::config::AiConfig;
    use crate::providers::test_server::{Route, TestServer};
    use crate::types::alerts::tests::SAMPLE_ALERTS;
    use crate::types::forecast::tests::SAMPLE_FORECAST;
    use crate::types::place::tests::SAMPLE_CANDIDATES;

    pub(crate) const SAMPLE_AIR_QUALITY: &str = r#"{"latitude": 39.75, "longitude": -105.0,
        "hourly": {"time": ["2024-06-21T14:00"], "us_aqi": [48]}}"#;

    /// Every provider route answered by one canned server.
    pub(crate) async fn full_server() -> TestServer {
        TestServer::start(vec![
            Route::json("/v1/forecast", 200, SAMPLE_FORECAST),
            Route::json("/v1/air-quality", 200, SAMPLE_AIR_QUALITY),
            Route::json("/alerts/active", 200, SAMPLE_ALERTS),
            Route::json(
                "/reverseGeocode",
                200,
                r#"{"address": {"City": "Denver", "Region": "Colorado"}}"#,
            ),
            Route::json("/findAddressCandidates", 200, SAMPLE_CANDIDATES),
            Route::json(
                "/chat/completions",
                200,
                r#"{"choices": [{"message": {"content": "Warm with afternoon storms, high of 88°."}}]}"#,
            ),
        ])
        .await
    }

    pub(crate) fn config_for(server: &TestServer, with_ai: bool) -> HiemsConfig {
        let base = server.base_url().to_string();
        HiemsConfig::builder()
            .forecast_base_url(base.clone())
            .air_quality_base_url(base.clone())
            .alerts_base_url(base.clone())
            .geocode_base_url(base.clone())
            .maybe_ai(with_ai.then(|| AiConfig::builder().api_key("k").base_url(base).build()))
            .build()
    }

    #[tokio::test]
    async fn fetches_every_provider() {
        let server = full_server().await;
        let dir = tempfile::tempdir().unwrap();
        let client = Hiems::with_config(config_for(&server, true), dir.path().to_path_buf())
            .await
            .unwrap();
        let denver = LatLon(39.74, -104.99);

        let forecast = client.forecast().location(denver).call().await.unwrap();
        assert_eq!(forecast.day_count(), 2);
        assert_eq!(client.alerts(denver).await.unwrap().features.len(), 3);
        assert_eq!(
            client.air_quality(denver).await.unwrap().current_aqi(),
            Some(48.0)
        );
        assert_eq!(client.geocode().reverse(denver).await.unwrap().name, "Denver");
        assert_eq!(client.geocode().search("Boulder").await.unwrap().len(), 2);

        let summary = client
            .summary()
            .forecast(&forecast)
            .call()
            .await
            .unwrap();
        assert_eq!(summary, "Warm with afternoon storms, high of 88°.");

        let forecast_request = &server.requests()[0];
        assert_eq!(
            forecast_request.query_value("forecast_days").as_deref(),
            Some("14")
        );
    }

    #[tokio::test]
    async fn summary_without_ai_is_not_configured() {
        let server = full_server().await;
        let dir = tempfile::tempdir().unwrap();
        let client = Hiems::with_config(config_for(&server, false), dir.path().to_path_buf())
            .await
            .unwrap();
        assert!(!client.summary_enabled());
        let forecast = client.forecast().location(LatLon(0.0, 0.0)).call().await.unwrap();
        let err = client
            .summary()
            .forecast(&forecast)
            .call()
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            HiemsError::Summary(SummaryError::NotConfigured)
        ));
    }

    #[tokio::test]
    async fn cache_folder_is_created() {
        let root = tempfile::tempdir().unwrap();
        let nested = root.path().join("nested").join("cache");
        let client = Hiems::with_config(HiemsConfig::default(), nested.clone())
            .await
            .unwrap();
        assert!(nested.is_dir());
        assert_eq!(client.cache_dir(), nested.as_path());
    }

    #[tokio::test]
    #[ignore = "hits the live providers"]
    async fn live_default_client() -> Result<(), HiemsError> {
        let client = Hiems::new().await?;
        let forecast = client
            .forecast()
            .location(LatLon(39.74, -104.99))
            .days(1)
            .call()
            .await?;
        assert!(forecast.hour_count() >= 24);
        Ok(())
    }
}
