//! Compact plain-text rendering of a forecast for the language model.

use crate::types::forecast::Forecast;
use crate::types::units::Units;
use crate::types::weather_code::describe_code;
use chrono::{DateTime, TimeZone};

const HOURS_AHEAD: usize = 12;

fn rounded(value: Option<f64>) -> String {
    value
        .map(|v| format!("{}", v.round() as i64))
        .unwrap_or_else(|| "--".to_string())
}

fn raw(value: Option<f64>) -> String {
    value
        .map(|v| v.to_string())
        .unwrap_or_else(|| "--".to_string())
}

/// Renders a `NOW:` line for current conditions followed by `NEXT 12HR:` lines,
/// one per hour starting at the first hour after `now`.
///
/// Hour labels are the location's local clock time (`3 PM`); hours on a later
/// local date than `now` get a weekday prefix (`Sat 3 AM`).
pub fn format_weather_for_llm<Tz: TimeZone>(
    forecast: &Forecast,
    units: &Units,
    now: &DateTime<Tz>,
) -> String {
    let c = &forecast.current;
    let temp = units.temperature.symbol();
    let wind = units.wind_speed.symbol();
    let mut out = format!(
        "NOW: {}{temp}, feels {}{temp}. {}. \
         Humidity {}%, Wind {}{wind} (gusts {}{wind}), \
         Clouds {}%, Pressure {}hPa",
        rounded(Some(c.temperature_2m)),
        rounded(Some(c.apparent_temperature)),
        forecast.current_condition().condition,
        c.relative_humidity_2m,
        rounded(Some(c.wind_speed_10m)),
        rounded(Some(c.wind_gusts_10m)),
        c.cloud_cover,
        rounded(Some(c.pressure_msl)),
    );
    if c.precipitation > 0.0 || c.rain > 0.0 || c.snowfall > 0.0 {
        out.push_str(&format!(
            ". Precip: {:.2}{}",
            c.precipitation,
            units.precipitation.symbol()
        ));
    }

    out.push_str("\n\nNEXT 12HR:\n");

    let today = forecast.to_local(now).date_naive();
    for hour in forecast.upcoming_hours(now, HOURS_AHEAD) {
        let clock = hour.time.format("%-I %p").to_string();
        let label = if hour.time.date_naive() == today {
            clock
        } else {
            format!("{} {}", hour.time.format("%a"), clock)
        };
        out.push_str(&format!(
            "{label}: {}{temp} ({}°), {}, {}% hum, {}{wind} wind",
            rounded(hour.temperature),
            rounded(hour.apparent_temperature),
            describe_code(hour.weather_code, true).condition,
            raw(hour.relative_humidity),
            rounded(hour.wind_speed),
        ));
        if let Some(chance) = hour.precipitation_probability.filter(|p| *p > 0.0) {
            out.push_str(&format!(", {chance}% precip chance"));
        }
        out.push('\n');
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::forecast::tests::sample;
    use chrono::{FixedOffset, TimeZone};

    fn denver(h: u32, m: u32) -> DateTime<FixedOffset> {
        FixedOffset::west_opt(6 * 3600)
            .unwrap()
            .with_ymd_and_hms(2024, 6, 21, h, m, 0)
            .unwrap()
    }

    #[test]
    fn now_line() {
        let text = format_weather_for_llm(&sample(), &Units::default(), &denver(14, 20));
        let first = text.lines().next().unwrap();
        assert_eq!(
            first,
            "NOW: 85°F, feels 80°F. Partly cloudy skies. Humidity 18%, Wind 9mph (gusts 21mph), Clouds 41%, Pressure 1011hPa"
        );
    }

    #[test]
    fn next_hours_start_after_now_and_prefix_other_days() {
        let text = format_weather_for_llm(&sample(), &Units::default(), &denver(14, 20));
        let hours: Vec<&str> = text
            .split("NEXT 12HR:\n")
            .nth(1)
            .unwrap()
            .lines()
            .collect();
        assert_eq!(hours.len(), 3);
        assert!(hours[0].starts_with("3 PM: 86°F (82°), "));
        assert!(hours[0].ends_with("10mph wind, 5% precip chance"));
        assert!(hours[1].starts_with("4 PM: 86°F"));
        assert!(hours[1].contains("40% precip chance"));
        assert_eq!(
            hours[2],
            "Sat 12 AM: 66°F (64°), Clear skies, 40% hum, 4mph wind"
        );
    }

    #[test]
    fn past_series_starts_at_first_row() {
        let late = FixedOffset::west_opt(6 * 3600)
            .unwrap()
            .with_ymd_and_hms(2024, 6, 25, 9, 0, 0)
            .unwrap();
        let text = format_weather_for_llm(&sample(), &Units::default(), &late);
        let hours = text.split("NEXT 12HR:\n").nth(1).unwrap();
        assert!(hours.starts_with("Fri 1 PM: 83°F"));
        assert_eq!(hours.lines().count(), 5);
    }

    #[test]
    fn precipitation_is_reported_when_present() {
        let mut forecast = sample();
        forecast.current.rain = 0.1;
        forecast.current.precipitation = 0.25;
        let text = format_weather_for_llm(&forecast, &Units::default(), &denver(14, 20));
        assert!(text.lines().next().unwrap().ends_with(". Precip: 0.25\""));
    }
}
