use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ColorParseError {
    #[error("Invalid hex color '{0}', expected #RGB or #RRGGBB")]
    InvalidHex(String),
}

/// An sRGB color with 8-bit channels.
///
/// Parses `#RGB` and `#RRGGBB` (the `#` is optional, digits are case-insensitive)
/// and always formats as uppercase `#RRGGBB`.
///
/// ```
/// use hiems::Rgb;
///
/// let c = Rgb::from_hex("#1e90ff").unwrap();
/// assert_eq!(c, Rgb::new(30, 144, 255));
/// assert_eq!(c.to_hex(), "#1E90FF");
/// assert_eq!(Rgb::from_hex("fff").unwrap().to_hex(), "#FFFFFF");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Builds a color from a `0xRRGGBB` literal, used by the palette tables.
    pub const fn from_u32(value: u32) -> Self {
        Self {
            r: ((value >> 16) & 0xFF) as u8,
            g: ((value >> 8) & 0xFF) as u8,
            b: (value & 0xFF) as u8,
        }
    }

    pub fn from_hex(hex: &str) -> Result<Self, ColorParseError> {
        let invalid = || ColorParseError::InvalidHex(hex.to_string());
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        let expanded: String = match digits.len() {
            3 => digits.chars().flat_map(|c| [c, c]).collect(),
            6 => digits.to_string(),
            _ => return Err(invalid()),
        };
        let value = u32::from_str_radix(&expanded, 16).map_err(|_| invalid())?;
        Ok(Self::from_u32(value))
    }

    pub fn to_hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// Channels as floats, for interpolation.
    pub(crate) fn channels(&self) -> [f64; 3] {
        [f64::from(self.r), f64::from(self.g), f64::from(self.b)]
    }

    /// Rounds half away from zero and clamps each channel into `0..=255`.
    pub(crate) fn from_channels(channels: [f64; 3]) -> Self {
        let to_u8 = |v: f64| v.round().clamp(0.0, 255.0) as u8;
        Self::new(to_u8(channels[0]), to_u8(channels[1]), to_u8(channels[2]))
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Rgb {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl Serialize for Rgb {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Rgb {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Rgb::from_hex(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_short_and_long_forms() {
        assert_eq!(Rgb::from_hex("#000").unwrap(), Rgb::BLACK);
        assert_eq!(Rgb::from_hex("FFFFFF").unwrap(), Rgb::WHITE);
        assert_eq!(Rgb::from_hex("#7f0017").unwrap(), Rgb::new(127, 0, 23));
        assert_eq!("#abc".parse::<Rgb>().unwrap(), Rgb::new(0xAA, 0xBB, 0xCC));
    }

    #[test]
    fn rejects_malformed_hex() {
        for bad in ["", "#", "#12", "#1234", "#GGGGGG", "#12345678", "+12345"] {
            assert_eq!(
                Rgb::from_hex(bad),
                Err(ColorParseError::InvalidHex(bad.to_string())),
                "{bad}"
            );
        }
    }

    #[test]
    fn formats_uppercase() {
        assert_eq!(Rgb::new(0xab, 0x0c, 0x01).to_string(), "#AB0C01");
    }

    #[test]
    fn channel_rounding_is_half_away_from_zero() {
        assert_eq!(
            Rgb::from_channels([127.5, 0.49, 300.0]),
            Rgb::new(128, 0, 255)
        );
        assert_eq!(Rgb::from_channels([-4.0, 254.5, 1.5]), Rgb::new(0, 255, 2));
    }

    #[test]
    fn serde_uses_hex_strings() {
        let json = serde_json::to_string(&Rgb::new(30, 144, 255)).unwrap();
        assert_eq!(json, "\"#1E90FF\"");
        let back: Rgb = serde_json::from_str("\"#1e90ff\"").unwrap();
        assert_eq!(back, Rgb::new(30, 144, 255));
        assert!(serde_json::from_str::<Rgb>("\"nope\"").is_err());
    }
}
