//! Provides the `GeocodeClient`, obtained via [`Hiems::geocode()`], for naming a
//! position and searching places by free text.

use crate::{Hiems, HiemsError, LatLon, Place};

pub struct GeocodeClient<'a> {
    client: &'a Hiems,
}

impl<'a> GeocodeClient<'a> {
    pub(crate) fn new(client: &'a Hiems) -> Self {
        Self { client }
    }

    /// Names `location` from its address: city, sub-region, region, or
    /// `"Unknown Location"`.
    pub async fn reverse(&self, location: LatLon) -> Result<Place, HiemsError> {
        Ok(self.client.geocoder().reverse(location).await?)
    }

    /// Up to ten places matching `query`. Blank queries return an empty list.
    pub async fn search(&self, query: &str) -> Result<Vec<Place>, HiemsError> {
        Ok(self.client.geocoder().search(query).await?)
    }
}
