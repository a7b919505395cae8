use crate::color::gradient::{css_linear_gradient, percent_from_value};
use crate::color::palettes;
use crate::types::forecast::DailySeries;
use crate::types::units::TemperatureUnit;

/// Where `temp` falls between `min` and `max`, in percent of the track.
pub fn percent_from_temp(temp: f64, min: f64, max: f64) -> f64 {
    percent_from_value(temp, min, max)
}

/// The forecast-wide temperature span that every daily bar is drawn against,
/// plus the widest rounded label on each side for column alignment.
///
/// `min` and `max` are in `unit`; bar gradients are drawn from the Fahrenheit palette.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TemperatureRange {
    pub min: f64,
    pub max: f64,
    pub min_digits: usize,
    pub max_digits: usize,
    pub unit: TemperatureUnit,
}

fn label_width(value: f64) -> usize {
    (value.round() as i64).to_string().len()
}

impl TemperatureRange {
    /// Minimum of the daily minimums and maximum of the daily maximums. `None`
    /// when either column has no values.
    pub fn from_daily(daily: &DailySeries, unit: TemperatureUnit) -> Option<Self> {
        let mins: Vec<f64> = daily.temperature_2m_min.iter().flatten().copied().collect();
        let maxes: Vec<f64> = daily.temperature_2m_max.iter().flatten().copied().collect();
        let min = mins.iter().copied().reduce(f64::min)?;
        let max = maxes.iter().copied().reduce(f64::max)?;
        Some(Self {
            min,
            max,
            min_digits: mins.iter().map(|v| label_width(*v)).max().unwrap_or(1),
            max_digits: maxes.iter().map(|v| label_width(*v)).max().unwrap_or(1),
            unit,
        })
    }

    pub fn percent(&self, temp: f64) -> f64 {
        percent_from_temp(temp, self.min, self.max)
    }

    /// The bar for one day: left edge, width, and the slice of the temperature
    /// gradient it covers.
    pub fn bar(&self, low: f64, high: f64) -> TemperatureBar {
        let left = self.percent(low.min(high));
        let right = self.percent(low.max(high));
        let width = right - left;
        let parts = palettes::temperature().css_segment(
            self.unit.to_fahrenheit(self.min),
            self.unit.to_fahrenheit(self.max),
            left,
            width,
        );
        TemperatureBar {
            left_pct: left,
            width_pct: width,
            gradient: css_linear_gradient(&parts),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TemperatureBar {
    pub left_pct: f64,
    pub width_pct: f64,
    pub gradient: String,
}
