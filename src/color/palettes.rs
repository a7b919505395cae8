//! Built-in color tables for the dashboard widgets.
//!
//! Temperature and wind tables are keyed by °F and mph respectively; the slider
//! tables (UV, AQI, cloud cover, humidity, visibility) are keyed by percent of
//! the slider track.

use crate::color::gradient::{ColorGradient, ColorStop};
use crate::color::rgb::Rgb;

const fn stop(value: f64, hex: u32) -> ColorStop {
    ColorStop::new(value, Rgb::from_u32(hex))
}

pub const TEMPERATURE_STOPS_F: [ColorStop; 38] = [
    stop(-100.0, 0xFFFFFF),
    stop(-60.0, 0xFDFEFF),
    stop(-55.0, 0xFCFDFE),
    stop(-50.0, 0xFAFBFE),
    stop(-45.0, 0xF8FAFE),
    stop(-40.0, 0xF6F9FD),
    stop(-35.0, 0xF4F7FC),
    stop(-30.0, 0xF1F5FB),
    stop(-25.0, 0xEEF3FA),
    stop(-20.0, 0xEAF0F8),
    stop(-15.0, 0xE5EBF6),
    stop(-10.0, 0xDEE6F3),
    stop(-5.0, 0xD4DEEF),
    stop(0.0, 0xC7D6EB),
    stop(5.0, 0xB0C4DE),
    stop(10.0, 0xAFC5DF),
    stop(15.0, 0xA2BCD9),
    stop(20.0, 0x90B0D6),
    stop(25.0, 0x7FA3D1),
    stop(30.0, 0x6A8FBF),
    stop(40.0, 0x1E90FF),
    stop(45.0, 0x00CED1),
    stop(50.0, 0x48D1CC),
    stop(55.0, 0x20B2AA),
    stop(60.0, 0x90EE90),
    stop(65.0, 0x98FB98),
    stop(70.0, 0xEEE8AA),
    stop(75.0, 0xF0E68C),
    stop(80.0, 0xFFD700),
    stop(85.0, 0xFFA500),
    stop(90.0, 0xFF8C00),
    stop(95.0, 0xFFA07A),
    stop(100.0, 0xFF69B4),
    stop(105.0, 0xDC143C),
    stop(110.0, 0xCD5C5C),
    stop(115.0, 0xB22222),
    stop(120.0, 0x8B0000),
    stop(150.0, 0x7F0017),
];

/// Wind speed bands in mph, roughly following the Beaufort scale.
pub const WIND_STOPS_MPH: [ColorStop; 7] = [
    stop(0.0, 0x9FD3FF),
    stop(8.0, 0x8BD67A),
    stop(13.0, 0xF5D66A),
    stop(19.0, 0xFFA500),
    stop(25.0, 0xFF4500),
    stop(39.0, 0xDC143C),
    stop(55.0, 0x8F3F97),
];

/// The generic slider ramp, also used by the UV widget.
pub const SLIDER_STOPS: [ColorStop; 4] = [
    stop(0.0, 0x00A000),
    stop(33.0, 0xFFFF00),
    stop(66.0, 0xFF0000),
    stop(100.0, 0x800080),
];

pub const AQI_STOPS: [ColorStop; 6] = [
    stop(0.0, 0x00E400),
    stop(17.0, 0xFFFF00),
    stop(34.0, 0xFF7E00),
    stop(50.0, 0xFF0000),
    stop(67.0, 0x8F3F97),
    stop(100.0, 0x7E0023),
];

pub const CLOUD_STOPS: [ColorStop; 3] = [
    stop(0.0, 0x29B6F6),
    stop(50.0, 0x7E8C9A),
    stop(100.0, 0x37474F),
];

pub const HUMIDITY_STOPS: [ColorStop; 5] = [
    stop(0.0, 0xE67A00),
    stop(20.0, 0xF5D66A),
    stop(50.0, 0x8BD67A),
    stop(75.0, 0x4DA6FF),
    stop(100.0, 0x0057C8),
];

pub const VISIBILITY_STOPS: [ColorStop; 8] = [
    stop(0.0, 0xB4B4B4),
    stop(2.0, 0xB4B4B4),
    stop(4.0, 0xD0D0D0),
    stop(12.0, 0xE8E2C6),
    stop(20.0, 0xD6E8FF),
    stop(40.0, 0x9FD3FF),
    stop(80.0, 0x5BB7FF),
    stop(100.0, 0x2F9AFF),
];

pub fn temperature() -> ColorGradient {
    ColorGradient::from_table(&TEMPERATURE_STOPS_F)
}

pub fn wind() -> ColorGradient {
    ColorGradient::from_table(&WIND_STOPS_MPH)
}

pub fn uv() -> ColorGradient {
    ColorGradient::from_table(&SLIDER_STOPS)
}

pub fn air_quality() -> ColorGradient {
    ColorGradient::from_table(&AQI_STOPS)
}

pub fn cloud_cover() -> ColorGradient {
    ColorGradient::from_table(&CLOUD_STOPS)
}

pub fn humidity() -> ColorGradient {
    ColorGradient::from_table(&HUMIDITY_STOPS)
}

pub fn visibility() -> ColorGradient {
    ColorGradient::from_table(&VISIBILITY_STOPS)
}

/// Temperature color for a reading in °F.
pub fn color_for_temp_f(temp_f: f64) -> Rgb {
    temperature().color_at(temp_f)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tables_are_valid_gradients() {
        let tables: [&[ColorStop]; 7] = [
            &TEMPERATURE_STOPS_F,
            &WIND_STOPS_MPH,
            &SLIDER_STOPS,
            &AQI_STOPS,
            &CLOUD_STOPS,
            &HUMIDITY_STOPS,
            &VISIBILITY_STOPS,
        ];
        for table in tables {
            let checked = ColorGradient::new(table.to_vec()).unwrap();
            assert_eq!(checked, ColorGradient::from_table(table));
        }
    }

    #[test]
    fn temperature_extremes_and_stops() {
        assert_eq!(color_for_temp_f(-150.0), Rgb::WHITE);
        assert_eq!(color_for_temp_f(200.0).to_hex(), "#7F0017");
        assert_eq!(color_for_temp_f(40.0).to_hex(), "#1E90FF");
        assert_eq!(color_for_temp_f(72.0), temperature().color_at(72.0));
    }

    #[test]
    fn temperature_midway_between_stops() {
        // Halfway from #FFD700 (80) to #FFA500 (85): (255, 190, 0).
        assert_eq!(color_for_temp_f(82.5), Rgb::new(255, 190, 0));
    }

    #[test]
    fn slider_tables_span_the_track() {
        for g in [uv(), air_quality(), cloud_cover(), humidity(), visibility()] {
            assert_eq!(g.min_value(), 0.0);
            assert_eq!(g.max_value(), 100.0);
        }
        assert_eq!(
            cloud_cover().to_css(),
            "linear-gradient(to right, #29B6F6 0%, #7E8C9A 50%, #37474F 100%)"
        );
    }

    #[test]
    fn calm_wind_is_cool_and_storm_is_purple() {
        assert_eq!(wind().color_at(0.0).to_hex(), "#9FD3FF");
        assert_eq!(wind().color_at(80.0).to_hex(), "#8F3F97");
    }
}
