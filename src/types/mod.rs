pub mod air_quality;
pub mod alerts;
pub mod forecast;
pub mod lat_lon;
pub(crate) mod local_time;
pub mod place;
pub mod units;
pub mod weather_code;
