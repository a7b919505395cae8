//! Geographic position used by every provider and by the astronomical calculations.

use crate::error::HiemsError;
use serde::{Deserialize, Serialize};

/// Represents a geographical coordinate using latitude and longitude.
///
/// Latitude is the first element (index 0), and longitude is the second (index 1).
/// Both values are in decimal degrees. The tuple constructor performs no validation;
/// use [`LatLon::new`] when the values come from user input.
///
/// # Examples
///
/// ```
/// use hiems::LatLon;
///
/// let oslo = LatLon(59.9139, 10.7522);
/// assert_eq!(oslo.latitude(), 59.9139);
/// assert_eq!(oslo.longitude(), 10.7522);
///
/// assert!(LatLon::new(91.0, 0.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLon(pub f64, pub f64);

impl LatLon {
    /// Creates a position, checking that latitude is within [-90, 90] and
    /// longitude within [-180, 180].
    ///
    /// # Errors
    ///
    /// Returns [`HiemsError::InvalidCoordinate`] for out-of-range or non-finite values.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, HiemsError> {
        if !(-90.0..=90.0).contains(&latitude) || !(-180.0..=180.0).contains(&longitude) {
            return Err(HiemsError::InvalidCoordinate {
                latitude,
                longitude,
            });
        }
        Ok(Self(latitude, longitude))
    }

    pub fn latitude(&self) -> f64 {
        self.0
    }

    pub fn longitude(&self) -> f64 {
        self.1
    }
}
