use crate::providers::error::ProviderError;
use crate::providers::http_loader::HttpLoader;
use crate::types::alerts::AlertCollection;
use crate::types::lat_lon::LatLon;
use reqwest::header::ACCEPT;

/// National Weather Service active alerts. Only covers US locations; elsewhere the
/// service answers with an error status, which surfaces as [`ProviderError::HttpStatus`].
#[derive(Debug, Clone)]
pub struct AlertsProvider {
    loader: HttpLoader,
    base_url: String,
}

impl AlertsProvider {
    pub fn new(loader: HttpLoader, base_url: &str) -> Self {
        Self {
            loader,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub async fn fetch(&self, location: LatLon) -> Result<AlertCollection, ProviderError> {
        let url = format!("{}/alerts/active", self.base_url);
        let point = format!("{},{}", location.latitude(), location.longitude());
        let request = self
            .loader
            .client()
            .get(&url)
            .query(&[("point", point)])
            .header(ACCEPT, "application/geo+json");
        self.loader.fetch_json(request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::providers::test_server::{Route, TestServer};
    use crate::types::alerts::tests::SAMPLE_ALERTS;
    use std::time::Duration;

    #[tokio::test]
    async fn sends_point_and_geojson_accept() {
        let server =
            TestServer::start(vec![Route::json("/alerts/active", 200, SAMPLE_ALERTS)]).await;
        let loader = HttpLoader::new("(hiems, test)", Duration::from_secs(5)).unwrap();
        let alerts = AlertsProvider::new(loader, server.base_url())
            .fetch(LatLon(39.74, -104.99))
            .await
            .unwrap();
        assert_eq!(alerts.features.len(), 3);

        let request = &server.requests()[0];
        assert_eq!(request.query_value("point").as_deref(), Some("39.74,-104.99"));
        assert_eq!(request.header("accept"), Some("application/geo+json"));
        assert_eq!(request.header("user-agent"), Some("(hiems, test)"));
    }

    #[tokio::test]
    async fn outside_coverage_is_an_http_error() {
        let server = TestServer::start(vec![Route::json(
            "/alerts/active",
            400,
            r#"{"title": "Invalid Parameter"}"#,
        )])
        .await;
        let loader = HttpLoader::new("(hiems, test)", Duration::from_secs(5)).unwrap();
        let err = AlertsProvider::new(loader, server.base_url())
            .fetch(LatLon(52.37, 4.90))
            .await
            .unwrap_err();
        assert!(matches!(err, ProviderError::HttpStatus { .. }));
    }
}
