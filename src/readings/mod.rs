//! Derived values for the small dashboard widgets.

pub mod atmosphere;
pub mod feels_like;
pub mod temperature;
pub mod wind;
