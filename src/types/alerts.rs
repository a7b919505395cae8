//! National Weather Service active-alert types (GeoJSON feature collection).

use chrono::{DateTime, FixedOffset};
use serde::Deserialize;

/// The NWS severity scale. Anything unrecognised maps to [`Severity::Unknown`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub enum Severity {
    Extreme,
    Severe,
    Moderate,
    Minor,
    #[default]
    #[serde(other)]
    Unknown,
}

/// How prominently an alert banner is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerTone {
    /// Red banner: extreme and severe alerts.
    Danger,
    /// Yellow banner with dark text: moderate alerts and alerts of unknown severity.
    Caution,
    /// Muted banner: minor alerts.
    Neutral,
}

impl Severity {
    pub fn banner_tone(&self) -> BannerTone {
        match self {
            Severity::Extreme | Severity::Severe => BannerTone::Danger,
            Severity::Moderate | Severity::Unknown => BannerTone::Caution,
            Severity::Minor => BannerTone::Neutral,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AlertCollection {
    #[serde(default)]
    pub features: Vec<AlertFeature>,
    #[serde(default)]
    pub title: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AlertFeature {
    #[serde(default)]
    pub id: Option<String>,
    pub properties: AlertProperties,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AlertProperties {
    pub event: Option<String>,
    pub headline: Option<String>,
    pub description: Option<String>,
    pub instruction: Option<String>,
    pub severity: Severity,
    pub area_desc: Option<String>,
    pub sender_name: Option<String>,
    pub effective: Option<DateTime<FixedOffset>>,
    pub expires: Option<DateTime<FixedOffset>>,
}

/// An alert reduced to what a banner needs.
#[derive(Debug, Clone, PartialEq)]
pub struct AlertBanner {
    pub title: String,
    pub headline: String,
    pub tone: BannerTone,
}

impl AlertFeature {
    pub fn banner(&self) -> AlertBanner {
        let p = &self.properties;
        AlertBanner {
            title: p
                .event
                .clone()
                .filter(|e| !e.is_empty())
                .unwrap_or_else(|| "Weather Alert".to_string()),
            headline: p.headline.clone().unwrap_or_default(),
            tone: p.severity.banner_tone(),
        }
    }
}

impl AlertCollection {
    pub fn banners(&self) -> Vec<AlertBanner> {
        self.features.iter().map(AlertFeature::banner).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) const SAMPLE_ALERTS: &str = r#"{
        "type": "FeatureCollection",
        "title": "Current watches, warnings, and advisories",
        "features": [
            {
                "id": "https://api.weather.gov/alerts/urn:oid:1",
                "type": "Feature",
                "properties": {
                    "event": "Severe Thunderstorm Warning",
                    "headline": "Severe Thunderstorm Warning issued June 21 at 4:02PM MDT",
                    "severity": "Severe",
                    "areaDesc": "Denver, CO",
                    "effective": "2024-06-21T16:02:00-06:00",
                    "expires": "2024-06-21T16:45:00-06:00"
                }
            },
            {
                "type": "Feature",
                "properties": {
                    "event": "",
                    "severity": "Cataclysmic"
                }
            },
            {
                "type": "Feature",
                "properties": {
                    "event": "Air Quality Alert",
                    "headline": "Ozone",
                    "severity": "Minor"
                }
            }
        ]
    }"#;

    #[test]
    fn decodes_and_maps_banners() {
        let alerts: AlertCollection = serde_json::from_str(SAMPLE_ALERTS).unwrap();
        let banners = alerts.banners();
        assert_eq!(banners.len(), 3);
        assert_eq!(banners[0].tone, BannerTone::Danger);
        assert_eq!(banners[0].title, "Severe Thunderstorm Warning");
        assert_eq!(banners[1].title, "Weather Alert");
        assert_eq!(banners[1].headline, "");
        assert_eq!(banners[1].tone, BannerTone::Caution);
        assert_eq!(banners[2].tone, BannerTone::Neutral);
        assert_eq!(
            alerts.features[0].properties.area_desc.as_deref(),
            Some("Denver, CO")
        );
        assert!(alerts.features[0].properties.expires.is_some());
    }

    #[test]
    fn empty_collection() {
        let alerts: AlertCollection = serde_json::from_str(r#"{"features": []}"#).unwrap();
        assert!(alerts.is_empty());
    }
}
