//! Defines the `WeatherCode` enum, mapping WMO weather interpretation codes (as reported
//! by Open-Meteo in `weather_code`) to descriptive variants and icon classes.

/// Represents a WMO weather interpretation code.
///
/// Only the codes Open-Meteo actually emits are modelled. Convert a raw integer with
/// [`WeatherCode::from_i64`]; anything unmapped yields `None`, which the describing
/// helpers render as "Unknown".
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum WeatherCode {
    /// Code 0: Clear sky.
    Clear = 0,
    /// Code 1: Mainly clear.
    MainlyClear = 1,
    /// Code 2: Partly cloudy.
    PartlyCloudy = 2,
    /// Code 3: Overcast.
    Overcast = 3,
    /// Code 45: Fog.
    Fog = 45,
    /// Code 48: Depositing rime fog.
    RimeFog = 48,
    /// Code 51: Light drizzle.
    LightDrizzle = 51,
    /// Code 53: Moderate drizzle.
    Drizzle = 53,
    /// Code 55: Dense drizzle.
    DenseDrizzle = 55,
    /// Code 61: Slight rain.
    LightRain = 61,
    /// Code 63: Moderate rain.
    Rain = 63,
    /// Code 65: Heavy rain.
    HeavyRain = 65,
    /// Code 71: Slight snow fall.
    LightSnow = 71,
    /// Code 73: Moderate snow fall.
    Snow = 73,
    /// Code 75: Heavy snow fall.
    HeavySnow = 75,
    /// Code 80: Slight rain showers.
    LightRainShowers = 80,
    /// Code 81: Moderate rain showers.
    RainShowers = 81,
    /// Code 82: Violent rain showers.
    ViolentRainShowers = 82,
    /// Code 85: Slight snow showers.
    LightSnowShowers = 85,
    /// Code 86: Heavy snow showers.
    HeavySnowShowers = 86,
    /// Code 95: Thunderstorm.
    Thunderstorm = 95,
    /// Code 96: Thunderstorm with slight hail.
    ThunderstormLightHail = 96,
    /// Code 99: Thunderstorm with heavy hail.
    ThunderstormHeavyHail = 99,
}

/// Text and icon for a weather code, as shown on the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodeDescription {
    /// Human readable condition, e.g. "Light rain".
    pub condition: &'static str,
    /// Weather-icons class, e.g. `wi-day-rain`.
    pub icon_class: &'static str,
}

impl WeatherCode {
    /// Attempts to convert a raw WMO code into a `WeatherCode` variant.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use hiems::WeatherCode;
    ///
    /// assert_eq!(WeatherCode::from_i64(63), Some(WeatherCode::Rain));
    /// assert_eq!(WeatherCode::from_i64(4), None);
    /// ```
    pub fn from_i64(value: i64) -> Option<Self> {
        match value {
            0 => Some(WeatherCode::Clear),
            1 => Some(WeatherCode::MainlyClear),
            2 => Some(WeatherCode::PartlyCloudy),
            3 => Some(WeatherCode::Overcast),
            45 => Some(WeatherCode::Fog),
            48 => Some(WeatherCode::RimeFog),
            51 => Some(WeatherCode::LightDrizzle),
            53 => Some(WeatherCode::Drizzle),
            55 => Some(WeatherCode::DenseDrizzle),
            61 => Some(WeatherCode::LightRain),
            63 => Some(WeatherCode::Rain),
            65 => Some(WeatherCode::HeavyRain),
            71 => Some(WeatherCode::LightSnow),
            73 => Some(WeatherCode::Snow),
            75 => Some(WeatherCode::HeavySnow),
            80 => Some(WeatherCode::LightRainShowers),
            81 => Some(WeatherCode::RainShowers),
            82 => Some(WeatherCode::ViolentRainShowers),
            85 => Some(WeatherCode::LightSnowShowers),
            86 => Some(WeatherCode::HeavySnowShowers),
            95 => Some(WeatherCode::Thunderstorm),
            96 => Some(WeatherCode::ThunderstormLightHail),
            99 => Some(WeatherCode::ThunderstormHeavyHail),
            _ => None,
        }
    }

    /// Condition text and icon; `day` selects between day and night icon variants.
    pub fn describe(self, day: bool) -> CodeDescription {
        let pick = |d: &'static str, n: &'static str| if day { d } else { n };
        let (condition, icon_class) = match self {
            WeatherCode::Clear => ("Clear skies", pick("wi-day-sunny", "wi-night-clear")),
            WeatherCode::MainlyClear => (
                "Mainly clear skies",
                pick("wi-day-sunny-overcast", "wi-night-alt-cloudy"),
            ),
            WeatherCode::PartlyCloudy => (
                "Partly cloudy skies",
                pick("wi-day-cloudy", "wi-night-alt-cloudy"),
            ),
            WeatherCode::Overcast => ("Overcast skies", "wi-cloudy"),
            WeatherCode::Fog => ("Fog", pick("wi-day-fog", "wi-night-fog")),
            WeatherCode::RimeFog => ("Depositing rime fog", pick("wi-day-fog", "wi-night-fog")),
            WeatherCode::LightDrizzle => (
                "Light drizzle",
                pick("wi-day-sprinkle", "wi-night-alt-sprinkle"),
            ),
            WeatherCode::Drizzle => (
                "Moderate drizzle",
                pick("wi-day-sprinkle", "wi-night-alt-sprinkle"),
            ),
            WeatherCode::DenseDrizzle => {
                ("Dense drizzle", pick("wi-day-rain", "wi-night-alt-rain"))
            }
            WeatherCode::LightRain => ("Light rain", pick("wi-day-rain", "wi-night-alt-rain")),
            WeatherCode::Rain => ("Moderate rain", pick("wi-day-rain", "wi-night-alt-rain")),
            WeatherCode::HeavyRain => (
                "Heavy rain",
                pick("wi-day-rain-wind", "wi-night-alt-rain-wind"),
            ),
            WeatherCode::LightSnow => ("Light snow", pick("wi-day-snow", "wi-night-alt-snow")),
            WeatherCode::Snow => ("Moderate snow", pick("wi-day-snow", "wi-night-alt-snow")),
            WeatherCode::HeavySnow => (
                "Heavy snow",
                pick("wi-day-snow-wind", "wi-night-alt-snow-wind"),
            ),
            WeatherCode::LightRainShowers => (
                "Light rain showers",
                pick("wi-day-showers", "wi-night-alt-showers"),
            ),
            WeatherCode::RainShowers => (
                "Moderate rain showers",
                pick("wi-day-showers", "wi-night-alt-showers"),
            ),
            WeatherCode::ViolentRainShowers => (
                "Violent rain showers",
                pick("wi-day-rain-wind", "wi-night-alt-rain-wind"),
            ),
            WeatherCode::LightSnowShowers => (
                "Light snow showers",
                pick("wi-day-snow", "wi-night-alt-snow"),
            ),
            WeatherCode::HeavySnowShowers => (
                "Heavy snow showers",
                pick("wi-day-snow-wind", "wi-night-alt-snow-wind"),
            ),
            WeatherCode::Thunderstorm => (
                "Thunderstorms",
                pick("wi-day-thunderstorm", "wi-night-alt-thunderstorm"),
            ),
            WeatherCode::ThunderstormLightHail => (
                "Thunderstorms with light hail",
                pick("wi-day-hail", "wi-night-alt-hail"),
            ),
            WeatherCode::ThunderstormHeavyHail => (
                "Thunderstorms with heavy hail",
                pick("wi-day-hail", "wi-night-alt-hail"),
            ),
        };
        CodeDescription {
            condition,
            icon_class,
        }
    }
}

const UNKNOWN: CodeDescription = CodeDescription {
    condition: "Unknown",
    icon_class: "wi-na",
};

/// Describes a raw code, falling back to "Unknown" / `wi-na` for unmapped values.
pub fn describe_code(code: Option<i64>, day: bool) -> CodeDescription {
    code.and_then(WeatherCode::from_i64)
        .map(|c| c.describe(day))
        .unwrap_or(UNKNOWN)
}
