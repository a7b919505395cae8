//! Geometry for the sun widget: a 24-hour cosine wave with markers for the next
//! sun event and the current time, plus a sinusoidal altitude approximation.

use chrono::{DateTime, NaiveTime, TimeZone, Timelike};
use std::f64::consts::PI;

const MINUTES_PER_DAY: f64 = 24.0 * 60.0;

/// Dimensions of the sun-path graph, in SVG user units. The x axis always runs
/// 0–100 (percent of the day).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SunPathGraph {
    pub height: f64,
    pub amplitude: f64,
    pub padding: f64,
}

impl Default for SunPathGraph {
    fn default() -> Self {
        Self {
            height: 50.0,
            amplitude: 22.0,
            padding: 7.0,
        }
    }
}

/// A point on the graph: `x` in percent of the day, `y` in SVG units from the top.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PathPoint {
    pub x: f64,
    pub y: f64,
}

impl SunPathGraph {
    fn center(&self) -> f64 {
        self.height / 2.0
    }

    /// Height of the viewBox including top and bottom padding.
    pub fn total_height(&self) -> f64 {
        self.height + self.padding * 2.0
    }

    fn point_at_fraction(&self, fraction: f64) -> PathPoint {
        PathPoint {
            x: fraction * 100.0,
            y: self.padding + self.center() + self.amplitude * (fraction * 2.0 * PI).cos(),
        }
    }

    /// Where a clock time falls on the wave. Midnight sits at the bottom (largest y).
    pub fn point_at(&self, time: NaiveTime) -> PathPoint {
        let minutes = f64::from(time.hour() * 60 + time.minute());
        self.point_at_fraction(minutes / MINUTES_PER_DAY)
    }

    /// `steps + 1` evenly spaced points covering the whole day.
    pub fn wave(&self, steps: usize) -> Vec<PathPoint> {
        let steps = steps.max(1);
        (0..=steps)
            .map(|i| self.point_at_fraction(i as f64 / steps as f64))
            .collect()
    }

    /// The wave as an SVG path (`M x,y L x,y ...`).
    pub fn svg_path(&self, steps: usize) -> String {
        self.wave(steps)
            .iter()
            .enumerate()
            .map(|(i, p)| format!("{}{},{}", if i == 0 { "M" } else { "L" }, p.x, p.y))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// The horizon line's y: the wave height at the displayed event's time.
    pub fn horizon_y(&self, event: NaiveTime) -> f64 {
        self.point_at(event).y
    }
}

/// Approximate solar altitude as a fraction of its peak, from sunrise and sunset.
///
/// Daytime follows `sin(π·(t − rise)/(set − rise))` (0 at the horizon, 1 at
/// transit). Night mirrors the arc below zero across the night length, using the
/// same rise/set shifted by a day. Returns `None` when `set` is not after `rise`.
pub fn altitude_fraction<Tz: TimeZone>(
    now: &DateTime<Tz>,
    rise: &DateTime<Tz>,
    set: &DateTime<Tz>,
) -> Option<f64> {
    let day = (set.clone() - rise.clone()).num_seconds() as f64;
    if day <= 0.0 {
        return None;
    }
    let night = 86_400.0 - day;
    let since_rise = (now.clone() - rise.clone()).num_seconds() as f64;
    let value = if (0.0..=day).contains(&since_rise) {
        (PI * since_rise / day).sin()
    } else if night > 0.0 {
        let since_set = (since_rise - day).rem_euclid(86_400.0);
        -(PI * (since_set / night).min(1.0)).sin()
    } else {
        0.0
    };
    Some(value.clamp(-1.0, 1.0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn t(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    #[test]
    fn midnight_is_lowest_noon_is_highest() {
        let g = SunPathGraph::default();
        let midnight = g.point_at(t(0, 0));
        let noon = g.point_at(t(12, 0));
        assert_eq!(midnight.x, 0.0);
        assert_eq!(midnight.y, 7.0 + 25.0 + 22.0);
        assert_eq!(noon.x, 50.0);
        assert!((noon.y - (7.0 + 25.0 - 22.0)).abs() < 1e-9);
        assert_eq!(g.total_height(), 64.0);
    }

    #[test]
    fn quarter_day_sits_on_center_line() {
        let g = SunPathGraph::default();
        let six = g.point_at(t(6, 0));
        assert_eq!(six.x, 25.0);
        assert!((six.y - 32.0).abs() < 1e-9);
        assert!((g.horizon_y(t(18, 0)) - 32.0).abs() < 1e-9);
    }

    #[test]
    fn svg_path_shape() {
        let g = SunPathGraph::default();
        let path = g.svg_path(4);
        let parts: Vec<&str> = path.split(' ').collect();
        assert_eq!(parts.len(), 5);
        assert!(parts[0].starts_with("M0,"));
        assert!(parts[4].starts_with("L100,"));
        assert_eq!(g.wave(0).len(), 2);
    }

    #[test]
    fn altitude_fraction_day_and_night() {
        let rise = Utc.with_ymd_and_hms(2024, 3, 20, 6, 0, 0).unwrap();
        let set = Utc.with_ymd_and_hms(2024, 3, 20, 18, 0, 0).unwrap();
        let noon = Utc.with_ymd_and_hms(2024, 3, 20, 12, 0, 0).unwrap();
        let midnight = Utc.with_ymd_and_hms(2024, 3, 21, 0, 0, 0).unwrap();
        let early = Utc.with_ymd_and_hms(2024, 3, 20, 0, 0, 0).unwrap();

        assert!((altitude_fraction(&noon, &rise, &set).unwrap() - 1.0).abs() < 1e-9);
        assert!(altitude_fraction(&rise, &rise, &set).unwrap().abs() < 1e-9);
        assert!((altitude_fraction(&midnight, &rise, &set).unwrap() + 1.0).abs() < 1e-9);
        assert!((altitude_fraction(&early, &rise, &set).unwrap() + 1.0).abs() < 1e-9);
        assert!(altitude_fraction(&noon, &set, &rise).is_none());
    }
}
