//! ArcGIS geocoding responses and the named places derived from them.

use crate::types::lat_lon::LatLon;
use serde::{Deserialize, Serialize};

/// Name used when reverse geocoding yields no usable address field.
pub const UNKNOWN_LOCATION: &str = "Unknown Location";

/// A named position, either searched for or reverse geocoded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Place {
    pub name: String,
    pub position: LatLon,
    /// Match score from the geocoder (0–100); reverse geocoding reports 100.
    pub score: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ReverseGeocodeResponse {
    #[serde(default)]
    pub address: Option<ReverseAddress>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ReverseAddress {
    pub city: Option<String>,
    pub sub_region: Option<String>,
    pub region: Option<String>,
    pub country_code: Option<String>,
    pub match_addr: Option<String>,
}

impl ReverseAddress {
    /// City, falling back to sub-region, then region.
    pub fn display_name(&self) -> Option<&str> {
        [&self.city, &self.sub_region, &self.region]
            .into_iter()
            .filter_map(|v| v.as_deref())
            .find(|v| !v.is_empty())
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CandidatesResponse {
    #[serde(default)]
    pub candidates: Vec<AddressCandidate>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AddressCandidate {
    pub address: String,
    pub location: CandidateLocation,
    #[serde(default)]
    pub score: f64,
    #[serde(default)]
    pub attributes: CandidateAttributes,
}

/// ArcGIS points: `x` is longitude, `y` is latitude.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct CandidateLocation {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct CandidateAttributes {
    pub city: Option<String>,
    pub region: Option<String>,
    pub country: Option<String>,
    pub place_name: Option<String>,
}

impl From<AddressCandidate> for Place {
    fn from(candidate: AddressCandidate) -> Self {
        Place {
            name: candidate.address,
            position: LatLon(candidate.location.y, candidate.location.x),
            score: candidate.score,
        }
    }
}
