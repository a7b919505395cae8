//! Debounced place search: only the last query of a typing burst reaches the geocoder.

use crate::error::HiemsError;
use crate::hiems::Hiems;
use crate::types::place::Place;
use log::debug;
use std::future::Future;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio_util::sync::CancellationToken;

/// Something that can search places by free text.
pub trait PlaceSearch: Send + Sync {
    fn search_places(
        &self,
        query: &str,
    ) -> impl Future<Output = Result<Vec<Place>, HiemsError>> + Send;
}

impl PlaceSearch for Hiems {
    fn search_places(
        &self,
        query: &str,
    ) -> impl Future<Output = Result<Vec<Place>, HiemsError>> + Send {
        async move { self.geocode().search(query).await }
    }
}

/// Delays each search by `delay`; a newer call supersedes any pending or
/// in-flight one, whose future then resolves to `None`.
pub struct SearchDebouncer<S> {
    searcher: Arc<S>,
    delay: Duration,
    pending: Mutex<Option<CancellationToken>>,
}

impl<S: PlaceSearch> SearchDebouncer<S> {
    pub fn new(searcher: Arc<S>, delay: Duration) -> Self {
        Self {
            searcher,
            delay,
            pending: Mutex::new(None),
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    fn supersede(&self) -> CancellationToken {
        let token = CancellationToken::new();
        let mut pending = self.pending.lock().unwrap_or_else(|e| e.into_inner());
        if let Some(previous) = pending.replace(token.clone()) {
            previous.cancel();
        }
        token
    }

    /// Cancels whatever search is pending.
    pub fn cancel(&self) {
        let mut pending = self.pending.lock().unwrap_or_else(|e| e.into_inner());
        if let Some(previous) = pending.take() {
            previous.cancel();
        }
    }

    /// Waits out the debounce delay, then searches. Returns `None` if another
    /// call superseded this one before its results arrived.
    pub async fn search(&self, query: &str) -> Option<Result<Vec<Place>, HiemsError>> {
        let token = self.supersede();
        tokio::select! {
            _ = token.cancelled() => {
                debug!("Search for {:?} superseded during debounce", query);
                return None;
            }
            _ = tokio::time::sleep(self.delay) => {}
        }
        tokio::select! {
            _ = token.cancelled() => {
                debug!("Search for {:?} superseded in flight", query);
                None
            }
            result = self.searcher.search_places(query) => Some(result),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::lat_lon::LatLon;
    use tokio::time::sleep;

    #[derive(Default)]
    struct RecordingSearch {
        calls: Mutex<Vec<String>>,
    }

    impl PlaceSearch for RecordingSearch {
        fn search_places(
            &self,
            query: &str,
        ) -> impl Future<Output = Result<Vec<Place>, HiemsError>> + Send {
            self.calls.lock().unwrap().push(query.to_string());
            let place = Place {
                name: query.to_string(),
                position: LatLon(0.0, 0.0),
                score: 100.0,
            };
            async move { Ok(vec![place]) }
        }
    }

    #[tokio::test(start_paused = true)]
    async fn only_last_query_in_burst_is_sent() {
        let searcher = Arc::new(RecordingSearch::default());
        let debouncer = SearchDebouncer::new(searcher.clone(), Duration::from_millis(300));

        let (first, second, last) = tokio::join!(
            debouncer.search("B"),
            async {
                sleep(Duration::from_millis(100)).await;
                debouncer.search("Bo").await
            },
            async {
                sleep(Duration::from_millis(200)).await;
                debouncer.search("Boulder").await
            },
        );

        assert!(first.is_none());
        assert!(second.is_none());
        let places = last.unwrap().unwrap();
        assert_eq!(places[0].name, "Boulder");
        assert_eq!(*searcher.calls.lock().unwrap(), vec!["Boulder".to_string()]);
    }

    #[tokio::test(start_paused = true)]
    async fn spaced_queries_all_go_through() {
        let searcher = Arc::new(RecordingSearch::default());
        let debouncer = SearchDebouncer::new(searcher.clone(), Duration::from_millis(300));

        assert!(debouncer.search("Denver").await.is_some());
        sleep(Duration::from_millis(500)).await;
        assert!(debouncer.search("Boulder").await.is_some());
        assert_eq!(searcher.calls.lock().unwrap().len(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn cancel_drops_pending_search() {
        let searcher = Arc::new(RecordingSearch::default());
        let debouncer = SearchDebouncer::new(searcher.clone(), Duration::from_millis(300));

        let (result, _) = tokio::join!(debouncer.search("Aspen"), async {
            sleep(Duration::from_millis(50)).await;
            debouncer.cancel();
        });
        assert!(result.is_none());
        assert!(searcher.calls.lock().unwrap().is_empty());
    }
}
