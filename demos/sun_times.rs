//! Prints sunrise, sunset and twilight for a few places, without touching the network.

use chrono::{FixedOffset, NaiveDate};
use hiems::{day_length, solar_events, solar_noon, LatLon, SolarEvent, SunPathGraph};

fn main() {
    let date = NaiveDate::from_ymd_opt(2025, 6, 21).unwrap();
    let places = [
        ("Denver", LatLon(39.74, -104.99), -6),
        ("Helsinki", LatLon(60.17, 24.94), 3),
        ("Longyearbyen", LatLon(78.22, 15.65), 2),
    ];

    for (name, position, hours) in places {
        let tz = FixedOffset::east_opt(hours * 3600).unwrap();
        let events = solar_events(date, position, &tz);
        println!("--- {name} on {date} ---");
        for event in [
            SolarEvent::AstronomicalDawn,
            SolarEvent::NauticalDawn,
            SolarEvent::CivilDawn,
            SolarEvent::Sunrise,
            SolarEvent::Sunset,
            SolarEvent::CivilDusk,
            SolarEvent::NauticalDusk,
            SolarEvent::AstronomicalDusk,
        ] {
            let label = format!("{event:?}");
            match events.get(event) {
                Some(time) => println!("{label:>18}: {}", time.format("%H:%M")),
                None => println!("{label:>18}: -"),
            }
        }
        if let Some(noon) = solar_noon(date, position, &tz) {
            println!("{:>18}: {}", "Solar noon", noon.format("%H:%M"));
        }
        match day_length(date, position) {
            Some(length) => println!(
                "{:>18}: {}h {}m",
                "Day length",
                length.num_hours(),
                length.num_minutes() % 60
            ),
            None => println!("{:>18}: polar day or night", "Day length"),
        }

        if let (Some(rise), Some(set)) = (events.sunrise, events.sunset) {
            let graph = SunPathGraph::default();
            println!(
                "Horizon at y={:.1} / y={:.1}",
                graph.horizon_y(rise.time()),
                graph.horizon_y(set.time())
            );
        }
    }
}
