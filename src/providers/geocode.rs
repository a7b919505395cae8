use crate::providers::error::ProviderError;
use crate::providers::http_loader::HttpLoader;
use crate::types::lat_lon::LatLon;
use crate::types::place::{CandidatesResponse, Place, ReverseGeocodeResponse, UNKNOWN_LOCATION};
use log::debug;

const MAX_CANDIDATES: usize = 10;

/// ArcGIS World geocoding service: reverse lookup and free-text search.
#[derive(Debug, Clone)]
pub struct GeocodeProvider {
    loader: HttpLoader,
    base_url: String,
}

impl GeocodeProvider {
    pub fn new(loader: HttpLoader, base_url: &str) -> Self {
        Self {
            loader,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// The display name for a position: city, then sub-region, then region, then
    /// `"Unknown Location"`.
    pub async fn reverse(&self, location: LatLon) -> Result<Place, ProviderError> {
        let url = format!("{}/reverseGeocode", self.base_url);
        let request = self.loader.client().get(&url).query(&[
            (
                "location",
                format!("{},{}", location.longitude(), location.latitude()),
            ),
            ("f", "json".to_string()),
        ]);
        let response: ReverseGeocodeResponse = self.loader.fetch_json(request).await?;
        let name = response
            .address
            .as_ref()
            .and_then(|a| a.display_name())
            .unwrap_or(UNKNOWN_LOCATION)
            .to_string();
        Ok(Place {
            name,
            position: location,
            score: 100.0,
        })
    }

    /// Up to ten candidate places for `query`. A blank query returns no places
    /// without contacting the service.
    pub async fn search(&self, query: &str) -> Result<Vec<Place>, ProviderError> {
        let query = query.trim();
        if query.is_empty() {
            debug!("Skipping geocode search for blank query");
            return Ok(Vec::new());
        }
        let url = format!("{}/findAddressCandidates", self.base_url);
        let request = self.loader.client().get(&url).query(&[
            ("SingleLine", query.to_string()),
            ("f", "json".to_string()),
            ("maxLocations", MAX_CANDIDATES.to_string()),
        ]);
        let response: CandidatesResponse = self.loader.fetch_json(request).await?;
        Ok(response
            .candidates
            .into_iter()
            .take(MAX_CANDIDATES)
            .map(Place::from)
            .collect())
    }
}
