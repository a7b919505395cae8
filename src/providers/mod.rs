//! HTTP clients for the upstream weather, geocoding and chat providers.

pub mod air_quality;
pub mod alerts;
pub mod chat;
pub mod error;
pub mod forecast;
pub mod geocode;
pub mod http_loader;
#[cfg(test)]
pub(crate) mod test_server;
