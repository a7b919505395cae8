//! Unit selections passed to Open-Meteo and used when formatting values.

use serde::{Deserialize, Serialize};

const KM_PER_MILE: f64 = 1.609_344;
const NAUTICAL_MILE_KM: f64 = 1.852;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TemperatureUnit {
    Celsius,
    #[default]
    Fahrenheit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum WindSpeedUnit {
    Kmh,
    Ms,
    #[default]
    Mph,
    Knots,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PrecipitationUnit {
    Mm,
    #[default]
    Inch,
}

/// The unit system requested from the forecast provider.
///
/// Defaults to Fahrenheit, miles per hour and inches. The color palettes are keyed
/// in Fahrenheit and miles per hour; [`TemperatureUnit::to_fahrenheit`] and
/// [`WindSpeedUnit::to_mph`] convert readings before a lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Units {
    pub temperature: TemperatureUnit,
    pub wind_speed: WindSpeedUnit,
    pub precipitation: PrecipitationUnit,
}

impl TemperatureUnit {
    pub(crate) fn query_value(&self) -> &'static str {
        match self {
            TemperatureUnit::Celsius => "celsius",
            TemperatureUnit::Fahrenheit => "fahrenheit",
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            TemperatureUnit::Celsius => "°C",
            TemperatureUnit::Fahrenheit => "°F",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            TemperatureUnit::Celsius => "Celsius",
            TemperatureUnit::Fahrenheit => "Fahrenheit",
        }
    }

    /// `value`, given in this unit, in degrees Fahrenheit.
    pub fn to_fahrenheit(&self, value: f64) -> f64 {
        match self {
            TemperatureUnit::Celsius => celsius_to_fahrenheit(value),
            TemperatureUnit::Fahrenheit => value,
        }
    }
}

impl WindSpeedUnit {
    pub(crate) fn query_value(&self) -> &'static str {
        match self {
            WindSpeedUnit::Kmh => "kmh",
            WindSpeedUnit::Ms => "ms",
            WindSpeedUnit::Mph => "mph",
            WindSpeedUnit::Knots => "kn",
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            WindSpeedUnit::Kmh => "km/h",
            WindSpeedUnit::Ms => "m/s",
            WindSpeedUnit::Mph => "mph",
            WindSpeedUnit::Knots => "kn",
        }
    }

    /// `value`, given in this unit, in miles per hour.
    pub fn to_mph(&self, value: f64) -> f64 {
        match self {
            WindSpeedUnit::Kmh => value / KM_PER_MILE,
            WindSpeedUnit::Ms => value * 3600.0 / (KM_PER_MILE * 1000.0),
            WindSpeedUnit::Mph => value,
            WindSpeedUnit::Knots => value * NAUTICAL_MILE_KM / KM_PER_MILE,
        }
    }
}

impl PrecipitationUnit {
    pub(crate) fn query_value(&self) -> &'static str {
        match self {
            PrecipitationUnit::Mm => "mm",
            PrecipitationUnit::Inch => "inch",
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            PrecipitationUnit::Mm => "mm",
            PrecipitationUnit::Inch => "\"",
        }
    }
}

pub fn fahrenheit_to_celsius(f: f64) -> f64 {
    (f - 32.0) * 5.0 / 9.0
}

pub fn celsius_to_fahrenheit(c: f64) -> f64 {
    c * 9.0 / 5.0 + 32.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_dashboard() {
        let units = Units::default();
        assert_eq!(units.temperature.query_value(), "fahrenheit");
        assert_eq!(units.wind_speed.query_value(), "mph");
        assert_eq!(units.precipitation.query_value(), "inch");
    }

    #[test]
    fn temperature_conversions() {
        assert_eq!(fahrenheit_to_celsius(212.0), 100.0);
        assert_eq!(celsius_to_fahrenheit(-40.0), -40.0);
        assert_eq!(TemperatureUnit::Celsius.to_fahrenheit(100.0), 212.0);
        assert_eq!(TemperatureUnit::Fahrenheit.to_fahrenheit(71.5), 71.5);
    }

    #[test]
    fn wind_speeds_to_mph() {
        assert!((WindSpeedUnit::Kmh.to_mph(100.0) - 62.137).abs() < 1e-3);
        assert!((WindSpeedUnit::Ms.to_mph(10.0) - 22.369).abs() < 1e-3);
        assert!((WindSpeedUnit::Knots.to_mph(10.0) - 11.508).abs() < 1e-3);
        assert_eq!(WindSpeedUnit::Mph.to_mph(12.0), 12.0);
    }
}
