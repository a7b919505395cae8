//! Client configuration: provider endpoints, units and the optional AI summary.

use crate::types::units::Units;
use bon::Builder;
use std::env;
use std::time::Duration;

pub const DEFAULT_FORECAST_BASE_URL: &str = "https://api.open-meteo.com";
pub const DEFAULT_AIR_QUALITY_BASE_URL: &str = "https://air-quality-api.open-meteo.com";
pub const DEFAULT_ALERTS_BASE_URL: &str = "https://api.weather.gov";
pub const DEFAULT_GEOCODE_BASE_URL: &str =
    "https://geocode.arcgis.com/arcgis/rest/services/World/GeocodeServer";
pub const DEFAULT_AI_BASE_URL: &str = "https://ai.hackclub.com/proxy/v1";
pub const DEFAULT_AI_MODEL: &str = "openai/gpt-oss-120b";
pub const DEFAULT_USER_AGENT: &str = "(hiems, contact)";

/// Credentials and endpoint for an OpenAI-compatible chat completion API.
#[derive(Debug, Clone, PartialEq, Eq, Builder)]
pub struct AiConfig {
    #[builder(into)]
    pub api_key: String,
    #[builder(into, default = DEFAULT_AI_BASE_URL.to_string())]
    pub base_url: String,
    #[builder(into, default = DEFAULT_AI_MODEL.to_string())]
    pub model: String,
}

/// Configuration for a [`crate::Hiems`] client.
///
/// Every field has a default, so `HiemsConfig::builder().build()` gives a client
/// against the public endpoints with the conditions summary turned off.
///
/// ```
/// use hiems::{AiConfig, HiemsConfig};
/// use std::time::Duration;
///
/// let config = HiemsConfig::builder()
///     .forecast_days(7)
///     .ai(AiConfig::builder().api_key("secret").build())
///     .search_debounce(Duration::from_millis(150))
///     .build();
/// assert_eq!(config.forecast_days, 7);
/// assert_eq!(config.ai.unwrap().model, "openai/gpt-oss-120b");
/// ```
#[derive(Debug, Clone, PartialEq, Builder)]
pub struct HiemsConfig {
    #[builder(into, default = DEFAULT_FORECAST_BASE_URL.to_string())]
    pub forecast_base_url: String,
    #[builder(into, default = DEFAULT_AIR_QUALITY_BASE_URL.to_string())]
    pub air_quality_base_url: String,
    #[builder(into, default = DEFAULT_ALERTS_BASE_URL.to_string())]
    pub alerts_base_url: String,
    #[builder(into, default = DEFAULT_GEOCODE_BASE_URL.to_string())]
    pub geocode_base_url: String,
    /// Sent on every request; the alerts provider rejects anonymous clients.
    #[builder(into, default = DEFAULT_USER_AGENT.to_string())]
    pub user_agent: String,
    #[builder(default)]
    pub units: Units,
    #[builder(default = 14)]
    pub forecast_days: u8,
    /// `None` disables the conditions summary.
    pub ai: Option<AiConfig>,
    #[builder(default = Duration::from_millis(300))]
    pub search_debounce: Duration,
    #[builder(default = Duration::from_secs(30))]
    pub request_timeout: Duration,
}

impl Default for HiemsConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl HiemsConfig {
    /// Defaults, with the AI summary configured from `AI_API_KEY`,
    /// `AI_API_BASE_URL` and `AI_MODEL` when `HIEMS_USE_AI=true` and a key is set.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let use_ai = lookup("HIEMS_USE_AI")
            .map(|v| v.trim().eq_ignore_ascii_case("true"))
            .unwrap_or(false);
        let ai = use_ai
            .then(|| lookup("AI_API_KEY"))
            .flatten()
            .filter(|key| !key.is_empty())
            .map(|api_key| AiConfig {
                api_key,
                base_url: lookup("AI_API_BASE_URL")
                    .filter(|v| !v.is_empty())
                    .unwrap_or_else(|| DEFAULT_AI_BASE_URL.to_string()),
                model: lookup("AI_MODEL")
                    .filter(|v| !v.is_empty())
                    .unwrap_or_else(|| DEFAULT_AI_MODEL.to_string()),
            });
        Self {
            ai,
            ..Self::default()
        }
    }
}
