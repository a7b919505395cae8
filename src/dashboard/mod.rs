//! Dashboard orchestration: the shared state for one followed location, refreshed
//! concurrently, polled on an interval and reset whenever the location changes.

pub mod search;

use crate::error::HiemsError;
use crate::hiems::Hiems;
use crate::readings::temperature::TemperatureRange;
use crate::summary::SummaryState;
use crate::types::air_quality::AirQuality;
use crate::types::alerts::AlertCollection;
use crate::types::forecast::Forecast;
use crate::types::lat_lon::LatLon;
use chrono::{DateTime, Utc};
use futures_util::future::join3;
use log::{debug, info, warn};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;

/// Everything the dashboard renders for the current location.
#[derive(Debug, Clone, Default)]
pub struct DashboardState {
    pub location: Option<LatLon>,
    pub location_name: Option<String>,
    pub forecast: Option<Forecast>,
    pub alerts: Option<AlertCollection>,
    pub air_quality: Option<AirQuality>,
    pub temperature_range: Option<TemperatureRange>,
    pub summary: SummaryState,
    pub last_refresh: Option<DateTime<Utc>>,
}

/// What a call to [`Dashboard::refresh`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshOutcome {
    /// No location has been set yet.
    NoLocation,
    /// The location changed while the requests were in flight; results were dropped.
    Superseded,
    /// Results were applied; each flag says whether that slice was updated.
    Applied {
        forecast: bool,
        alerts: bool,
        air_quality: bool,
    },
}

#[derive(Debug)]
struct Inner {
    state: DashboardState,
    generation: u64,
    location_token: CancellationToken,
}

/// Identifies the location a request was started for.
#[derive(Debug, Clone)]
struct Ticket {
    location: LatLon,
    generation: u64,
    token: CancellationToken,
}

struct Fetched {
    forecast: Result<Forecast, HiemsError>,
    alerts: Result<AlertCollection, HiemsError>,
    air_quality: Result<AirQuality, HiemsError>,
}

/// Shared dashboard state for a single followed location.
///
/// The state lock is never held across a network request: each operation takes
/// a [`Ticket`] for the current location, releases the lock, fetches, and only
/// applies results if the location is still the same.
pub struct Dashboard {
    client: Arc<Hiems>,
    inner: Mutex<Inner>,
}

impl Dashboard {
    pub fn new(client: Arc<Hiems>) -> Self {
        let summary = if client.summary_enabled() {
            SummaryState::Pending
        } else {
            SummaryState::Disabled
        };
        Self {
            client,
            inner: Mutex::new(Inner {
                state: DashboardState {
                    summary,
                    ..Default::default()
                },
                generation: 0,
                location_token: CancellationToken::new(),
            }),
        }
    }

    pub fn client(&self) -> &Arc<Hiems> {
        &self.client
    }

    /// A copy of the current state.
    pub async fn snapshot(&self) -> DashboardState {
        self.inner.lock().await.state.clone()
    }

    /// Switches to `location`, cancelling in-flight work for the previous one and
    /// clearing its data. Without a `name`, the location is reverse geocoded; a
    /// failed lookup is logged and leaves the name empty.
    pub async fn set_location(&self, location: LatLon, name: Option<String>) {
        let ticket = {
            let mut inner = self.inner.lock().await;
            inner.location_token.cancel();
            inner.location_token = CancellationToken::new();
            inner.generation += 1;

            let summary = if self.client.summary_enabled() {
                SummaryState::Pending
            } else {
                SummaryState::Disabled
            };
            inner.state = DashboardState {
                location: Some(location),
                location_name: name.clone(),
                summary,
                ..Default::default()
            };
            info!(
                "Following location {:?} (generation {})",
                location, inner.generation
            );
            Ticket {
                location,
                generation: inner.generation,
                token: inner.location_token.clone(),
            }
        };

        if name.is_some() {
            return;
        }
        let geocode = self.client.geocode();
        let looked_up = tokio::select! {
            _ = ticket.token.cancelled() => return,
            result = geocode.reverse(ticket.location) => result,
        };
        match looked_up {
            Ok(place) => {
                let mut inner = self.inner.lock().await;
                if inner.generation == ticket.generation {
                    inner.state.location_name = Some(place.name);
                }
            }
            Err(e) => warn!("Reverse geocoding {:?} failed: {}", ticket.location, e),
        }
    }

    async fn ticket(&self) -> Option<Ticket> {
        let inner = self.inner.lock().await;
        inner.state.location.map(|location| Ticket {
            location,
            generation: inner.generation,
            token: inner.location_token.clone(),
        })
    }

    /// Fetches forecast, alerts and air quality concurrently.
    ///
    /// A failed slice is logged and keeps its previous value; successful slices
    /// replace theirs, and a new forecast also recomputes the temperature range.
    pub async fn refresh(&self) -> RefreshOutcome {
        let Some(ticket) = self.ticket().await else {
            debug!("Refresh skipped: no location");
            return RefreshOutcome::NoLocation;
        };

        let location = ticket.location;
        let forecast_client = self.client.forecast();
        let fetch = join3(
            forecast_client.location(location).call(),
            self.client.alerts(location),
            self.client.air_quality(location),
        );
        let (forecast, alerts, air_quality) = tokio::select! {
            _ = ticket.token.cancelled() => {
                debug!("Refresh for {:?} cancelled", location);
                return RefreshOutcome::Superseded;
            }
            results = fetch => results,
        };

        self.apply(
            &ticket,
            Fetched {
                forecast,
                alerts,
                air_quality,
            },
        )
        .await
    }

    async fn apply(&self, ticket: &Ticket, fetched: Fetched) -> RefreshOutcome {
        let mut inner = self.inner.lock().await;
        if inner.generation != ticket.generation {
            debug!("Dropping results for superseded location {:?}", ticket.location);
            return RefreshOutcome::Superseded;
        }
        let state = &mut inner.state;

        let forecast = match fetched.forecast {
            Ok(forecast) => {
                state.temperature_range =
                    TemperatureRange::from_daily(&forecast.daily, forecast.units.temperature);
                state.forecast = Some(forecast);
                true
            }
            Err(e) => {
                warn!("Forecast refresh failed: {}", e);
                false
            }
        };
        let alerts = match fetched.alerts {
            Ok(alerts) => {
                state.alerts = Some(alerts);
                true
            }
            Err(e) => {
                warn!("Alerts refresh failed: {}", e);
                false
            }
        };
        let air_quality = match fetched.air_quality {
            Ok(air_quality) => {
                state.air_quality = Some(air_quality);
                true
            }
            Err(e) => {
                warn!("Air quality refresh failed: {}", e);
                false
            }
        };
        if forecast || alerts || air_quality {
            state.last_refresh = Some(Utc::now());
        }

        RefreshOutcome::Applied {
            forecast,
            alerts,
            air_quality,
        }
    }

    /// Asks for a new conditions summary, passing the previous one as context.
    ///
    /// Does nothing without a forecast or once the summary is disabled. A failure
    /// disables the summary for this location. Returns whether a new summary was stored.
    pub async fn refresh_summary(&self) -> bool {
        let (ticket, forecast, previous) = {
            let inner = self.inner.lock().await;
            if inner.state.summary.is_disabled() {
                return false;
            }
            let (Some(location), Some(forecast)) = (inner.state.location, &inner.state.forecast)
            else {
                return false;
            };
            (
                Ticket {
                    location,
                    generation: inner.generation,
                    token: inner.location_token.clone(),
                },
                forecast.clone(),
                inner.state.summary.text().map(str::to_string),
            )
        };

        let request = self
            .client
            .summary()
            .forecast(&forecast)
            .maybe_previous(previous.as_deref())
            .call();
        let result = tokio::select! {
            _ = ticket.token.cancelled() => return false,
            result = request => result,
        };

        let mut inner = self.inner.lock().await;
        if inner.generation != ticket.generation {
            return false;
        }
        match result {
            Ok(text) => {
                inner.state.summary = SummaryState::Ready(text);
                true
            }
            Err(e) => {
                warn!("Conditions summary failed, disabling: {}", e);
                inner.state.summary = SummaryState::Disabled;
                false
            }
        }
    }

    /// Polls [`Self::refresh`] and [`Self::refresh_summary`] every `interval` until
    /// `token` is cancelled. The first round runs immediately. A zero interval
    /// spawns nothing.
    pub fn spawn_polling(
        self: &Arc<Self>,
        interval: Duration,
        token: CancellationToken,
    ) -> Option<JoinHandle<()>> {
        if interval.is_zero() {
            debug!("Auto refresh disabled");
            return None;
        }
        let dashboard = Arc::clone(self);
        Some(tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                tokio::select! {
                    _ = token.cancelled() => break,
                    _ = ticker.tick() => {}
                }
                tokio::select! {
                    _ = token.cancelled() => break,
                    _ = async {
                        dashboard.refresh().await;
                        dashboard.refresh_summary().await;
                    } => {}
                }
            }
            debug!("Auto refresh stopped");
        }))
    }

    /// [`Self::spawn_polling`] with the interval stored in the preferences.
    pub async fn spawn_auto_refresh(
        self: &Arc<Self>,
        token: CancellationToken,
    ) -> Option<JoinHandle<()>> {
        let interval = self.client.preferences().auto_refresh_interval().await;
        self.spawn_polling(interval, token)
    }
}
