//! Provides the `ForecastClient`, obtained via [`Hiems::forecast()`], for
//! requesting a forecast for a location with optional unit and range overrides.

use crate::{Forecast, Hiems, HiemsError, LatLon, Units};
use bon::bon;

/// A client builder for forecast requests.
///
/// Calling `.location(LatLon)` starts the request; `.units(..)` and `.days(..)`
/// are optional, and `.call().await` sends it.
pub struct ForecastClient<'a> {
    client: &'a Hiems,
}

#[bon]
impl<'a> ForecastClient<'a> {
    pub(crate) fn new(client: &'a Hiems) -> Self {
        Self { client }
    }

    /// Fetches the forecast around `location`.
    ///
    /// * `.units(Units)`: Optional. Defaults to the client configuration (°F, mph, inch).
    /// * `.days(u8)`: Optional. Number of forecast days, defaults to the configured 14.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use hiems::{Hiems, HiemsError, LatLon, TemperatureUnit, Units};
    ///
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), HiemsError> {
    /// let client = Hiems::new().await?;
    /// let metric = Units {
    ///     temperature: TemperatureUnit::Celsius,
    ///     ..Units::default()
    /// };
    /// let forecast = client
    ///     .forecast()
    ///     .location(LatLon(52.37, 4.90))
    ///     .units(metric)
    ///     .days(2)
    ///     .call()
    ///     .await?;
    /// println!("Now: {}", forecast.current.temperature_2m);
    /// # Ok(())
    /// # }
    /// ```
    #[builder(start_fn = location)]
    #[doc(hidden)]
    pub async fn build_location(
        &self,
        #[builder(start_fn)] location: LatLon,
        units: Option<Units>,
        days: Option<u8>,
    ) -> Result<Forecast, HiemsError> {
        self.client
            .fetch_forecast()
            .location(location)
            .maybe_units(units)
            .maybe_days(days)
            .call()
            .await
    }
}

#[cfg(test)]
mod tests {
    use crate::hiems::tests::{config_for, full_server};
    use crate::types::units::{TemperatureUnit, Units};
    use crate::{Hiems, LatLon};

    #[tokio::test]
    async fn overrides_are_forwarded() {
        let server = full_server().await;
        let dir = tempfile::tempdir().unwrap();
        let client = Hiems::with_config(config_for(&server, false), dir.path().to_path_buf())
            .await
            .unwrap();
        client
            .forecast()
            .location(LatLon(39.74, -104.99))
            .units(Units {
                temperature: TemperatureUnit::Celsius,
                ..Units::default()
            })
            .days(5)
            .call()
            .await
            .unwrap();

        let request = &server.requests()[0];
        assert_eq!(request.query_value("forecast_days").as_deref(), Some("5"));
        assert_eq!(
            request.query_value("temperature_unit").as_deref(),
            Some("celsius")
        );
    }
}
