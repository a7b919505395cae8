//! Wind compass: 16-point direction names, label placement and arrow geometry.

use crate::color::palettes;
use crate::color::rgb::Rgb;
use crate::types::forecast::Forecast;

const COMPASS_POINTS: [&str; 16] = [
    "N", "NNE", "NE", "ENE", "E", "ESE", "SE", "SSE", "S", "SSW", "SW", "WSW", "W", "WNW", "NW",
    "NNW",
];

/// The 16-point compass name for a bearing in degrees.
///
/// ```
/// use hiems::readings::wind::compass_point;
///
/// assert_eq!(compass_point(250.0), "WSW");
/// assert_eq!(compass_point(-10.0), "N");
/// ```
pub fn compass_point(degrees: f64) -> &'static str {
    let index = (degrees.rem_euclid(360.0) / 22.5).round() as usize % COMPASS_POINTS.len();
    COMPASS_POINTS[index]
}

fn angular_distance(a: f64, b: f64) -> f64 {
    ((a - b + 180.0).rem_euclid(360.0) - 180.0).abs()
}

/// Whether the arrow for `direction` would cover the label at `target` (or at its
/// opposite, where the tail is drawn).
pub fn is_near_cardinal(direction: f64, target: f64) -> bool {
    let opposite = (target + 180.0).rem_euclid(360.0);
    angular_distance(direction, target) < 10.0 || angular_distance(direction, opposite) < 10.0
}

/// Cardinal labels that stay visible for a given wind direction.
pub fn visible_cardinals(direction: f64) -> Vec<&'static str> {
    [("N", 0.0), ("E", 90.0), ("S", 180.0), ("W", 270.0)]
        .into_iter()
        .filter(|(_, bearing)| !is_near_cardinal(direction, *bearing))
        .map(|(label, _)| label)
        .collect()
}

/// Arrow coordinates in a 100×100 viewBox before rotation by the wind direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArrowGeometry {
    pub center_x: f64,
    pub tip_y: f64,
    pub shaft_end_y: f64,
    pub head_offset_x: f64,
    pub head_offset_y: f64,
    pub opposite_tip_y: f64,
    pub opposite_shaft_end_y: f64,
}

pub fn arrow_geometry() -> ArrowGeometry {
    const TIP_Y: f64 = 7.0;
    const SHAFT_LENGTH: f64 = 15.0;
    const HEAD_LENGTH: f64 = 6.0;
    const HEAD_ANGLE_DEG: f64 = 45.0;
    const OPPOSITE_TIP_SHORT: f64 = 5.0;

    let head_angle = HEAD_ANGLE_DEG.to_radians();
    let opposite_tip_y = 100.0 - TIP_Y - OPPOSITE_TIP_SHORT;
    ArrowGeometry {
        center_x: 50.0,
        tip_y: TIP_Y,
        shaft_end_y: TIP_Y + SHAFT_LENGTH,
        head_offset_x: head_angle.sin() * HEAD_LENGTH,
        head_offset_y: head_angle.cos() * HEAD_LENGTH,
        opposite_tip_y,
        opposite_shaft_end_y: opposite_tip_y - SHAFT_LENGTH + OPPOSITE_TIP_SHORT,
    }
}

pub fn wind_color(speed_mph: f64) -> Rgb {
    palettes::wind().color_at(speed_mph)
}

/// The current wind as the compass widget shows it. Speeds stay in the
/// forecast's unit; the color is looked up in miles per hour.
#[derive(Debug, Clone, PartialEq)]
pub struct WindReading {
    pub speed: f64,
    pub gusts: f64,
    pub direction: f64,
    pub compass: &'static str,
    pub color: Rgb,
}

impl WindReading {
    pub fn current(forecast: &Forecast) -> Self {
        let c = &forecast.current;
        Self {
            speed: c.wind_speed_10m,
            gusts: c.wind_gusts_10m,
            direction: c.wind_direction_10m,
            compass: compass_point(c.wind_direction_10m),
            color: wind_color(forecast.units.wind_speed.to_mph(c.wind_speed_10m)),
        }
    }
}
