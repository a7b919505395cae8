pub mod astro;
mod clients;
pub mod color;
mod config;
pub mod dashboard;
mod error;
mod hiems;
pub mod preferences;
pub mod providers;
pub mod readings;
pub mod summary;
mod types;
mod utils;

pub use error::HiemsError;
pub use hiems::Hiems;

pub use config::*;

pub use clients::forecast_client::*;
pub use clients::geocode_client::*;

pub use astro::sun_path::{altitude_fraction, PathPoint, SunPathGraph};
pub use astro::sun_times::{
    day_length, solar_events, solar_noon, sun_times, DaySunTimes, Depression, SolarEvent,
    SolarEvents, SunTimes,
};

pub use color::gradient::{ColorGradient, ColorStop, GradientError};
pub use color::rgb::{ColorParseError, Rgb};

pub use types::air_quality::*;
pub use types::alerts::*;
pub use types::forecast::*;
pub use types::lat_lon::LatLon;
pub use types::place::{Place, UNKNOWN_LOCATION};
pub use types::units::*;
pub use types::weather_code::*;

pub use dashboard::search::{PlaceSearch, SearchDebouncer};
pub use dashboard::{Dashboard, DashboardState, RefreshOutcome};
pub use preferences::error::PreferencesError;
pub use preferences::store::{PreferenceStore, SelectedLocation};
pub use providers::error::ProviderError;
pub use summary::error::SummaryError;
pub use summary::SummaryState;
