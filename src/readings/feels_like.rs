use crate::color::gradient::css_linear_gradient;
use crate::color::palettes;
use crate::color::rgb::Rgb;
use crate::types::forecast::Forecast;
use crate::types::units::TemperatureUnit;

/// Difference, in degrees Fahrenheit, that pushes the slider to its end.
const FULL_SCALE_DELTA: f64 = 15.0;

/// Feels-like reading: how far the apparent temperature is from the actual one.
///
/// The slider runs from "much colder" on the left to "much warmer" on the right.
/// When it feels colder the marker sits at `100 - delta/15·100`, otherwise at
/// `delta/15·100` (delta in °F), with the dot pinned at the end the actual
/// temperature sits on. `actual`, `apparent` and `delta` stay in the reading's unit.
#[derive(Debug, Clone, PartialEq)]
pub struct FeelsLike {
    pub actual: f64,
    pub apparent: f64,
    pub colder: bool,
    pub delta: f64,
    pub slider_value: f64,
    pub actual_color: Rgb,
    pub apparent_color: Rgb,
}

impl FeelsLike {
    pub fn new(actual: f64, apparent: f64, unit: TemperatureUnit) -> Self {
        let colder = apparent < actual;
        let delta = (apparent - actual).abs();
        let actual_f = unit.to_fahrenheit(actual);
        let apparent_f = unit.to_fahrenheit(apparent);
        let scaled = (apparent_f - actual_f).abs() / FULL_SCALE_DELTA * 100.0;
        let gradient = palettes::temperature();
        Self {
            actual,
            apparent,
            colder,
            delta,
            slider_value: if colder { 100.0 - scaled } else { scaled },
            actual_color: gradient.color_at(actual_f),
            apparent_color: gradient.color_at(apparent_f),
        }
    }

    /// The reading for the forecast's current conditions.
    pub fn current(forecast: &Forecast) -> Self {
        let c = &forecast.current;
        Self::new(
            c.temperature_2m,
            c.apparent_temperature,
            forecast.units.temperature,
        )
    }

    /// Where the dot (actual temperature) sits.
    pub fn dot_position(&self) -> f64 {
        if self.colder {
            100.0
        } else {
            0.0
        }
    }

    /// The highlighted range between the dot and the marker.
    pub fn span(&self) -> (f64, f64) {
        let dot = self.dot_position();
        (dot.min(self.slider_value), dot.max(self.slider_value))
    }

    /// Colder readings fade from the apparent color into the actual one.
    pub fn css_gradient(&self) -> String {
        let (left, right) = if self.colder {
            (self.apparent_color, self.actual_color)
        } else {
            (self.actual_color, self.apparent_color)
        };
        css_linear_gradient(&[(left, 0.0), (right, 100.0)])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::forecast::tests::sample;

    #[test]
    fn colder_reading() {
        let f = FeelsLike::new(40.0, 34.0, TemperatureUnit::Fahrenheit);
        assert!(f.colder);
        assert_eq!(f.delta, 6.0);
        assert!((f.slider_value - 60.0).abs() < 1e-9);
        assert_eq!(f.dot_position(), 100.0);
        assert_eq!(f.span(), (f.slider_value, 100.0));
        assert!(f.css_gradient().ends_with("#1E90FF 100%)"));
    }

    #[test]
    fn warmer_reading() {
        let f = FeelsLike::new(80.0, 84.5, TemperatureUnit::Fahrenheit);
        assert!(!f.colder);
        assert!((f.slider_value - 30.0).abs() < 1e-9);
        assert_eq!(f.span().0, 0.0);
        assert!(f.css_gradient().starts_with("linear-gradient(to right, #FFD700 0%"));
    }

    #[test]
    fn equal_temperatures_are_not_colder() {
        let f = FeelsLike::new(70.0, 70.0, TemperatureUnit::Fahrenheit);
        assert!(!f.colder);
        assert_eq!(f.slider_value, 0.0);
    }

    #[test]
    fn celsius_reading_uses_fahrenheit_palette() {
        let c = FeelsLike::new(29.0, 27.0, TemperatureUnit::Celsius);
        let gradient = palettes::temperature();
        assert!(c.colder);
        assert_eq!(c.delta, 2.0);
        assert_eq!(c.actual_color, gradient.color_at(84.2));
        assert_eq!(c.apparent_color, gradient.color_at(80.6));
        // 2 °C is 3.6 °F of the 15 °F scale.
        assert!((c.slider_value - 76.0).abs() < 1e-9);
        assert_ne!(
            c.actual_color,
            FeelsLike::new(29.0, 27.0, TemperatureUnit::Fahrenheit).actual_color
        );
    }

    #[test]
    fn current_reading_follows_forecast_units() {
        let mut forecast = sample();
        assert!(FeelsLike::current(&forecast).colder);

        forecast.units.temperature = TemperatureUnit::Celsius;
        forecast.current.temperature_2m = 29.0;
        forecast.current.apparent_temperature = 27.0;
        let f = FeelsLike::current(&forecast);
        assert_eq!(f, FeelsLike::new(29.0, 27.0, TemperatureUnit::Celsius));
    }
}
