//! Sunrise, sunset and twilight times from a low-precision solar position model.
//!
//! The model works in Julian days relative to J2000 and is accurate to roughly a
//! minute at mid latitudes, which is plenty for a dashboard. Every function here is
//! pure: the same `(date, position, depression)` always yields bit-identical output.

use crate::types::forecast::Forecast;
use crate::types::lat_lon::LatLon;
use chrono::{DateTime, Datelike, Duration, FixedOffset, NaiveDate, TimeZone, Utc};
use std::f64::consts::PI;

const RAD: f64 = PI / 180.0;
const J2000: f64 = 2_451_545.0;
const UNIX_EPOCH_JULIAN: f64 = 2_440_587.5;
/// Days from 0001-01-01 (CE day 1) to 2000-01-01.
const J2000_DAYS_FROM_CE: i32 = 730_120;
const J0: f64 = 0.0009;
const OBLIQUITY_DEG: f64 = 23.4397;
const PERIHELION_DEG: f64 = 102.9372;
const REFRACTION_AND_RADIUS_DEG: f64 = 0.833;

/// How far below the horizon the sun's center must be for an event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Depression {
    /// 0°: geometric sunrise and sunset.
    Horizon,
    /// 0.833°: sunrise/sunset as observed, accounting for refraction and the solar disk.
    ApparentHorizon,
    /// 6°: civil dawn and dusk.
    Civil,
    /// 12°: nautical dawn and dusk.
    Nautical,
    /// 18°: astronomical dawn and dusk.
    Astronomical,
    /// Any other angle in degrees below the horizon (negative values are above it).
    Degrees(f64),
}

impl Depression {
    pub fn degrees(&self) -> f64 {
        match self {
            Depression::Horizon => 0.0,
            Depression::ApparentHorizon => REFRACTION_AND_RADIUS_DEG,
            Depression::Civil => 6.0,
            Depression::Nautical => 12.0,
            Depression::Astronomical => 18.0,
            Depression::Degrees(d) => *d,
        }
    }
}

/// The morning and evening crossing of one depression angle.
///
/// Either side is `None` when the sun never reaches the angle that day (polar day
/// or polar night); that is a normal result, not an error.
#[derive(Debug, Clone, PartialEq)]
pub struct SunTimes<Tz: TimeZone> {
    pub rise: Option<DateTime<Tz>>,
    pub set: Option<DateTime<Tz>>,
}

/// Named solar events, used to look values up in [`SolarEvents`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SolarEvent {
    Sunrise,
    Sunset,
    CivilDawn,
    CivilDusk,
    NauticalDawn,
    NauticalDusk,
    AstronomicalDawn,
    AstronomicalDusk,
}

/// Every solar event for one date and position.
#[derive(Debug, Clone, PartialEq)]
pub struct SolarEvents<Tz: TimeZone> {
    pub sunrise: Option<DateTime<Tz>>,
    pub sunset: Option<DateTime<Tz>>,
    pub civil_dawn: Option<DateTime<Tz>>,
    pub civil_dusk: Option<DateTime<Tz>>,
    pub nautical_dawn: Option<DateTime<Tz>>,
    pub nautical_dusk: Option<DateTime<Tz>>,
    pub astronomical_dawn: Option<DateTime<Tz>>,
    pub astronomical_dusk: Option<DateTime<Tz>>,
}

impl<Tz: TimeZone> SolarEvents<Tz> {
    pub fn get(&self, event: SolarEvent) -> Option<&DateTime<Tz>> {
        match event {
            SolarEvent::Sunrise => self.sunrise.as_ref(),
            SolarEvent::Sunset => self.sunset.as_ref(),
            SolarEvent::CivilDawn => self.civil_dawn.as_ref(),
            SolarEvent::CivilDusk => self.civil_dusk.as_ref(),
            SolarEvent::NauticalDawn => self.nautical_dawn.as_ref(),
            SolarEvent::NauticalDusk => self.nautical_dusk.as_ref(),
            SolarEvent::AstronomicalDawn => self.astronomical_dawn.as_ref(),
            SolarEvent::AstronomicalDusk => self.astronomical_dusk.as_ref(),
        }
    }
}

/// Intermediate quantities shared by every event on one solar day.
struct SolarDay {
    /// Mean solar noon, days after J2000.
    mean_noon: f64,
    mean_anomaly: f64,
    ecliptic_longitude: f64,
    declination: f64,
}

impl SolarDay {
    fn new(date: NaiveDate, position: LatLon) -> Self {
        let days = f64::from(date.num_days_from_ce() - J2000_DAYS_FROM_CE);
        let west = -position.longitude() / 360.0;
        let cycle = (days - J0 - west).round();
        let mean_noon = J0 + west + cycle;

        let mean_anomaly = RAD * (357.5291 + 0.985_600_28 * mean_noon);
        let center = RAD
            * (1.9148 * mean_anomaly.sin()
                + 0.02 * (2.0 * mean_anomaly).sin()
                + 0.0003 * (3.0 * mean_anomaly).sin());
        let ecliptic_longitude = mean_anomaly + center + RAD * PERIHELION_DEG + PI;
        let declination = (ecliptic_longitude.sin() * (RAD * OBLIQUITY_DEG).sin()).asin();

        Self {
            mean_noon,
            mean_anomaly,
            ecliptic_longitude,
            declination,
        }
    }

    /// Julian date of the solar transit nearest to `approx` (days after J2000).
    fn transit_at(&self, approx: f64) -> f64 {
        J2000 + approx + 0.0053 * self.mean_anomaly.sin()
            - 0.0069 * (2.0 * self.ecliptic_longitude).sin()
    }

    fn transit(&self) -> f64 {
        self.transit_at(self.mean_noon)
    }

    /// Hour angle (radians) at which the sun's center is at `altitude` radians,
    /// or `None` when it never gets there.
    fn hour_angle(&self, altitude: f64, latitude: f64) -> Option<f64> {
        let phi = RAD * latitude;
        let cos_omega = (altitude.sin() - phi.sin() * self.declination.sin())
            / (phi.cos() * self.declination.cos());
        if !cos_omega.is_finite() || cos_omega.abs() > 1.0 {
            return None;
        }
        Some(cos_omega.acos())
    }

    /// Julian dates of the morning and evening crossings.
    fn crossings(&self, depression: Depression, latitude: f64) -> Option<(f64, f64)> {
        let omega = self.hour_angle(-RAD * depression.degrees(), latitude)?;
        let transit = self.transit();
        let set = self.transit_at(self.mean_noon + omega / (2.0 * PI));
        Some((transit - (set - transit), set))
    }
}

fn julian_to_utc(julian: f64) -> Option<DateTime<Utc>> {
    let millis = (julian - UNIX_EPOCH_JULIAN) * 86_400_000.0;
    if !millis.is_finite() {
        return None;
    }
    DateTime::from_timestamp_millis(millis.round() as i64)
}

fn julian_to_tz<Tz: TimeZone>(julian: f64, tz: &Tz) -> Option<DateTime<Tz>> {
    julian_to_utc(julian).map(|t| t.with_timezone(tz))
}

/// Computes when the sun's center crosses `depression` degrees below the horizon on
/// `date` at `position`, returned in `tz`.
///
/// The date is the civil date at the position; the two crossings bracket that
/// day's solar transit.
///
/// # Examples
///
/// ```
/// use chrono::{NaiveDate, Utc};
/// use hiems::{sun_times, Depression, LatLon};
///
/// let date = NaiveDate::from_ymd_opt(2024, 3, 20).unwrap();
/// let times = sun_times(date, LatLon(0.0, 0.0), Depression::Horizon, &Utc);
/// let day = times.set.unwrap() - times.rise.unwrap();
/// assert!((day.num_minutes() - 720).abs() <= 1);
///
/// // Midsummer near the pole: the sun never sets.
/// let june = NaiveDate::from_ymd_opt(2024, 6, 21).unwrap();
/// let polar = sun_times(june, LatLon(89.0, 0.0), Depression::Horizon, &Utc);
/// assert!(polar.rise.is_none());
/// ```
pub fn sun_times<Tz: TimeZone>(
    date: NaiveDate,
    position: LatLon,
    depression: Depression,
    tz: &Tz,
) -> SunTimes<Tz> {
    let day = SolarDay::new(date, position);
    match day.crossings(depression, position.latitude()) {
        Some((rise, set)) => SunTimes {
            rise: julian_to_tz(rise, tz),
            set: julian_to_tz(set, tz),
        },
        None => SunTimes {
            rise: None,
            set: None,
        },
    }
}

/// Local solar noon (the sun's transit) for `date` at `position`.
pub fn solar_noon<Tz: TimeZone>(
    date: NaiveDate,
    position: LatLon,
    tz: &Tz,
) -> Option<DateTime<Tz>> {
    julian_to_tz(SolarDay::new(date, position).transit(), tz)
}

/// Time between geometric sunrise and sunset; `None` during polar day or night.
pub fn day_length(date: NaiveDate, position: LatLon) -> Option<Duration> {
    let times = sun_times(date, position, Depression::Horizon, &Utc);
    Some(times.set? - times.rise?)
}

/// Sunrise, sunset and the three twilight pairs for `date` at `position`.
pub fn solar_events<Tz: TimeZone>(date: NaiveDate, position: LatLon, tz: &Tz) -> SolarEvents<Tz> {
    let day = SolarDay::new(date, position);
    let pair = |depression: Depression| match day.crossings(depression, position.latitude()) {
        Some((rise, set)) => (julian_to_tz(rise, tz), julian_to_tz(set, tz)),
        None => (None, None),
    };
    let (sunrise, sunset) = pair(Depression::Horizon);
    let (civil_dawn, civil_dusk) = pair(Depression::Civil);
    let (nautical_dawn, nautical_dusk) = pair(Depression::Nautical);
    let (astronomical_dawn, astronomical_dusk) = pair(Depression::Astronomical);
    SolarEvents {
        sunrise,
        sunset,
        civil_dawn,
        civil_dusk,
        nautical_dawn,
        nautical_dusk,
        astronomical_dawn,
        astronomical_dusk,
    }
}

/// Sun times for one forecast day: the provider's sunrise/sunset when present,
/// otherwise the estimator's, plus estimated twilight.
#[derive(Debug, Clone, PartialEq)]
pub struct DaySunTimes {
    pub date: NaiveDate,
    pub sunrise: Option<DateTime<FixedOffset>>,
    pub sunset: Option<DateTime<FixedOffset>>,
    /// True when sunrise or sunset came from the estimator rather than the provider.
    pub estimated: bool,
    pub events: SolarEvents<FixedOffset>,
}

impl Forecast {
    /// Solar events for the `index`-th daily row, in the forecast's local offset.
    pub fn solar_events_for_day(&self, index: usize) -> Option<DaySunTimes> {
        let day = self.day(index)?;
        let events = solar_events(day.date, self.position(), &self.offset());
        let estimated = day.sunrise.is_none() || day.sunset.is_none();
        Some(DaySunTimes {
            date: day.date,
            sunrise: day.sunrise.or_else(|| events.sunrise),
            sunset: day.sunset.or_else(|| events.sunset),
            estimated,
            events,
        })
    }
}
