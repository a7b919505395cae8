//! Piecewise-linear color mapping over sorted value stops.

use crate::color::rgb::Rgb;
use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum GradientError {
    #[error("A gradient needs at least two stops, got {0}")]
    TooFewStops(usize),

    #[error("Gradient stop value must be finite, got {0}")]
    NonFiniteValue(f64),

    #[error("Gradient has more than one stop at value {0}")]
    DuplicateValue(f64),
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ColorStop {
    pub value: f64,
    pub color: Rgb,
}

impl ColorStop {
    pub const fn new(value: f64, color: Rgb) -> Self {
        Self { value, color }
    }
}

/// A color ramp defined by at least two stops with unique, finite values.
///
/// Values at or beyond either end take the end color unchanged; values in between
/// blend linearly per channel between the two bracketing stops.
///
/// ```
/// use hiems::{ColorGradient, ColorStop, Rgb};
///
/// let gray = ColorGradient::new(vec![
///     ColorStop::new(100.0, Rgb::WHITE),
///     ColorStop::new(0.0, Rgb::BLACK),
/// ])?;
/// assert_eq!(gray.color_at(50.0).to_hex(), "#808080");
/// assert_eq!(gray.color_at(-20.0), Rgb::BLACK);
/// # Ok::<(), hiems::GradientError>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ColorGradient {
    stops: Vec<ColorStop>,
}

impl ColorGradient {
    /// Sorts `stops` by value and validates them.
    pub fn new(mut stops: Vec<ColorStop>) -> Result<Self, GradientError> {
        if stops.len() < 2 {
            return Err(GradientError::TooFewStops(stops.len()));
        }
        if let Some(bad) = stops.iter().find(|s| !s.value.is_finite()) {
            return Err(GradientError::NonFiniteValue(bad.value));
        }
        stops.sort_by_key(|s| OrderedFloat(s.value));
        if let Some(pair) = stops.windows(2).find(|w| w[0].value == w[1].value) {
            return Err(GradientError::DuplicateValue(pair[0].value));
        }
        Ok(Self { stops })
    }

    /// For the built-in tables, which are checked by tests.
    pub(crate) fn from_table(table: &[ColorStop]) -> Self {
        let mut stops = table.to_vec();
        stops.sort_by_key(|s| OrderedFloat(s.value));
        Self { stops }
    }

    pub fn stops(&self) -> &[ColorStop] {
        &self.stops
    }

    pub fn min_value(&self) -> f64 {
        self.stops[0].value
    }

    pub fn max_value(&self) -> f64 {
        self.stops[self.stops.len() - 1].value
    }

    /// Color for `value`. NaN maps to the lowest stop's color.
    pub fn color_at(&self, value: f64) -> Rgb {
        let first = &self.stops[0];
        let last = &self.stops[self.stops.len() - 1];
        if value.is_nan() || value <= first.value {
            return first.color;
        }
        if value >= last.value {
            return last.color;
        }
        // First stop strictly above the value; bounds above guarantee 1..len.
        let upper_idx = self.stops.partition_point(|s| s.value <= value);
        let lo = &self.stops[upper_idx - 1];
        let hi = &self.stops[upper_idx];
        if value == lo.value {
            return lo.color;
        }
        let t = (value - lo.value) / (hi.value - lo.value);
        let a = lo.color.channels();
        let b = hi.color.channels();
        Rgb::from_channels([
            a[0] + t * (b[0] - a[0]),
            a[1] + t * (b[1] - a[1]),
            a[2] + t * (b[2] - a[2]),
        ])
    }

    /// Stop positions for a bar segment that spans `left_pct..left_pct + width_pct`
    /// of a track covering `min..max`.
    ///
    /// Each stop is placed at its position on the full track, re-expressed as a
    /// percentage of the segment and clamped to `0..=100`, so the segment shows
    /// exactly the slice of the gradient it covers.
    pub fn css_segment(
        &self,
        min: f64,
        max: f64,
        left_pct: f64,
        width_pct: f64,
    ) -> Vec<(Rgb, f64)> {
        let width = width_pct.max(0.0001);
        self.stops
            .iter()
            .map(|s| {
                let global = percent_from_value(s.value, min, max);
                let local = ((global - left_pct) / width * 100.0).clamp(0.0, 100.0);
                (s.color, local)
            })
            .collect()
    }

    /// The stops as a CSS gradient, treating stop values as percentages.
    pub fn to_css(&self) -> String {
        css_linear_gradient(
            &self
                .stops
                .iter()
                .map(|s| (s.color, s.value))
                .collect::<Vec<_>>(),
        )
    }
}

/// Where `value` sits on a `min..max` track, in percent. A zero-width span is
/// treated as 1 so the result stays finite.
pub fn percent_from_value(value: f64, min: f64, max: f64) -> f64 {
    let (lo, hi) = if min <= max { (min, max) } else { (max, min) };
    let span = if hi - lo == 0.0 { 1.0 } else { hi - lo };
    (value.clamp(lo, hi) - lo) / span * 100.0
}

/// Renders `linear-gradient(to right, #RRGGBB p%, ...)`.
pub fn css_linear_gradient(parts: &[(Rgb, f64)]) -> String {
    let stops = parts
        .iter()
        .map(|(color, pct)| format!("{} {}%", color, pct))
        .collect::<Vec<_>>()
        .join(", ");
    format!("linear-gradient(to right, {})", stops)
}
