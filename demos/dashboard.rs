//! Follows one location: refreshes everything once, prints the widgets, then
//! searches for another place and switches to it.
//!
//! Set `HIEMS_USE_AI=true` and `AI_API_KEY` to include the conditions summary.

use chrono::Utc;
use hiems::readings::feels_like::FeelsLike;
use hiems::readings::temperature::TemperatureRange;
use hiems::readings::wind::WindReading;
use hiems::{Dashboard, Hiems, HiemsError, LatLon, SearchDebouncer};
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<(), HiemsError> {
    let client = Arc::new(Hiems::new().await?);
    let dashboard = Dashboard::new(client.clone());

    dashboard.set_location(LatLon(39.74, -104.99), None).await;
    println!("Refresh: {:?}", dashboard.refresh().await);
    dashboard.refresh_summary().await;

    let state = dashboard.snapshot().await;
    println!(
        "Weather for {}",
        state.location_name.as_deref().unwrap_or("?")
    );
    if let Some(forecast) = &state.forecast {
        let now = forecast.current_condition();
        println!(
            "Now {:.0}° ({}), feels {:.0}°",
            forecast.current.temperature_2m, now.condition, forecast.current.apparent_temperature
        );
        let feels = FeelsLike::current(forecast);
        println!(
            "Feels {} by {:.1}°, {} -> {}",
            if feels.colder { "colder" } else { "warmer" },
            feels.delta,
            feels.actual_color,
            feels.apparent_color
        );
        let wind = WindReading::current(forecast);
        println!(
            "Wind {:.0} {} (gusts {:.0}), color {}",
            wind.speed, wind.compass, wind.gusts, wind.color
        );

        let range = state.temperature_range.or_else(|| {
            TemperatureRange::from_daily(&forecast.daily, forecast.units.temperature)
        });
        for index in 0..forecast.day_count().min(5) {
            let Some(day) = forecast.day(index) else {
                continue;
            };
            let (Some(low), Some(high)) = (day.temperature_min, day.temperature_max) else {
                continue;
            };
            let bar = range.map(|r| r.bar(low, high));
            let sun = forecast.solar_events_for_day(index);
            println!(
                "{} {:>4.0}..{:<4.0} bar at {:>5.1}% width {:>5.1}%  sunrise {}",
                day.date.format("%a"),
                low,
                high,
                bar.as_ref().map(|b| b.left_pct).unwrap_or_default(),
                bar.as_ref().map(|b| b.width_pct).unwrap_or_default(),
                sun.and_then(|s| s.sunrise)
                    .map(|t| t.format("%H:%M").to_string())
                    .unwrap_or_else(|| "-".to_string()),
            );
        }
        for hour in forecast.upcoming_hours(&Utc::now(), 3) {
            println!(
                "{}: {:?}°",
                hour.time.format("%H:%M"),
                hour.temperature.map(f64::round)
            );
        }
    }
    if let Some(alerts) = &state.alerts {
        for banner in alerts.banners() {
            println!("[{:?}] {}: {}", banner.tone, banner.title, banner.headline);
        }
    }
    if let Some(aqi) = state.air_quality.as_ref().and_then(|a| a.current_aqi()) {
        println!("AQI {aqi:.0}");
    }
    if let Some(summary) = state.summary.text() {
        println!("Summary: {summary}");
    }

    let search = SearchDebouncer::new(client.clone(), client.config().search_debounce);
    if let Some(Ok(places)) = search.search("Boulder, CO").await {
        for place in &places {
            println!("{} ({:.0})", place.name, place.score);
        }
        if let Some(first) = places.first() {
            dashboard
                .set_location(first.position, Some(first.name.clone()))
                .await;
            println!("Switched: {:?}", dashboard.refresh().await);
        }
    }

    Ok(())
}
