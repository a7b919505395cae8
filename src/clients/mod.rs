pub mod forecast_client;
pub mod geocode_client;
