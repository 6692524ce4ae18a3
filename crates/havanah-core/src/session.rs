//! A wizard run together with its remote collaborators.
//!
//! [`TripSession`] owns one [`Wizard`] and the async work that hangs off it:
//! place lookups, itinerary proposals, route fetches and saving the chosen
//! trip. Closing the session cancels whatever is still in flight, so a late
//! answer can never land in a wizard that has already been reset.

use std::{
    sync::{Arc, Mutex, MutexGuard, PoisonError},
    time::Duration,
};

use jiff::{civil::Date, Zoned};
use log::{debug, info, warn};
use tokio_util::sync::CancellationToken;

use crate::{
    error::{Result, TripError},
    geocode::{Geocoder, NominatimGeocoder},
    models::{DetailedRoute, MapRegion, Trip, VanWarning},
    params::SaveTrip,
    results::{check_van_restrictions, ItineraryCatalog, ResultsView, StaticCatalog},
    routing::{Router, VanRoutingOptions},
    trips::TripBook,
    wizard::{Step, Wizard},
};

/// Pause between picking an itinerary and closing the session.
pub const DEFAULT_ACK_DELAY: Duration = Duration::from_millis(500);

/// Builder for [`TripSession`].
pub struct TripSessionBuilder {
    geocoder: Option<Arc<dyn Geocoder>>,
    catalog: Option<Arc<dyn ItineraryCatalog>>,
    book: Option<TripBook>,
    ack_delay: Duration,
    min_date: Option<Date>,
    past_dates: bool,
}

impl TripSessionBuilder {
    pub fn new() -> Self {
        Self {
            geocoder: None,
            catalog: None,
            book: None,
            ack_delay: DEFAULT_ACK_DELAY,
            min_date: None,
            past_dates: false,
        }
    }

    /// Place lookups go to `geocoder` instead of public Nominatim.
    pub fn with_geocoder(mut self, geocoder: impl Geocoder + 'static) -> Self {
        self.geocoder = Some(Arc::new(geocoder));
        self
    }

    /// Proposals come from `catalog` instead of [`StaticCatalog`].
    pub fn with_catalog(mut self, catalog: impl ItineraryCatalog + 'static) -> Self {
        self.catalog = Some(Arc::new(catalog));
        self
    }

    /// Chosen trips are saved to `book`. Without one, nothing is persisted.
    pub fn with_trip_book(mut self, book: TripBook) -> Self {
        self.book = Some(book);
        self
    }

    pub fn with_ack_delay(mut self, delay: Duration) -> Self {
        self.ack_delay = delay;
        self
    }

    /// First selectable calendar day. Defaults to today.
    pub fn with_min_date(mut self, date: Date) -> Self {
        self.min_date = Some(date);
        self
    }

    /// Lets the calendar accept any day.
    pub fn allow_past_dates(mut self) -> Self {
        self.past_dates = true;
        self
    }

    /// # Errors
    ///
    /// Returns `TripError::Http` if the default geocoder's HTTP client cannot
    /// be created.
    pub fn build(self) -> Result<TripSession> {
        let geocoder: Arc<dyn Geocoder> = match self.geocoder {
            Some(geocoder) => geocoder,
            None => Arc::new(NominatimGeocoder::new()?),
        };
        let catalog: Arc<dyn ItineraryCatalog> = match self.catalog {
            Some(catalog) => catalog,
            None => Arc::new(StaticCatalog::new()),
        };

        let mut wizard = Wizard::new();
        if !self.past_dates {
            let min_date = self.min_date.unwrap_or_else(|| Zoned::now().date());
            wizard = wizard.with_min_date(min_date);
        }

        Ok(TripSession {
            wizard: Mutex::new(wizard),
            results: Mutex::new(None),
            cancel: Mutex::new(CancellationToken::new()),
            geocoder,
            catalog,
            book: self.book,
            ack_delay: self.ack_delay,
        })
    }
}

impl Default for TripSessionBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// One open questionnaire.
pub struct TripSession {
    wizard: Mutex<Wizard>,
    results: Mutex<Option<ResultsView>>,
    cancel: Mutex<CancellationToken>,
    geocoder: Arc<dyn Geocoder>,
    catalog: Arc<dyn ItineraryCatalog>,
    book: Option<TripBook>,
    ack_delay: Duration,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

impl TripSession {
    /// Runs `f` against the wizard.
    pub fn with_wizard<R>(&self, f: impl FnOnce(&mut Wizard) -> R) -> R {
        f(&mut lock(&self.wizard))
    }

    /// Copy of the wizard state.
    pub fn wizard(&self) -> Wizard {
        lock(&self.wizard).clone()
    }

    pub fn step(&self) -> Step {
        lock(&self.wizard).step()
    }

    /// Proposals on screen, once the wizard is complete.
    pub fn results(&self) -> Option<ResultsView> {
        lock(&self.results).clone()
    }

    pub fn trip_book(&self) -> Option<&TripBook> {
        self.book.as_ref()
    }

    fn token(&self) -> CancellationToken {
        lock(&self.cancel).clone()
    }

    /// Advances the wizard. From the last step this completes it and
    /// fetches proposals.
    pub async fn advance(&self) -> Result<Step> {
        if self.step() == Step::LAST {
            self.complete().await?;
            return Ok(Step::Results);
        }
        self.with_wizard(Wizard::advance)
    }

    /// Steps back. Leaving the results screen drops the proposals.
    pub fn retreat(&self) -> Step {
        let step = self.with_wizard(Wizard::retreat);
        if step != Step::Results {
            lock(&self.results).take();
        }
        step
    }

    /// Looks `query` up and recentres the departure map on the match.
    ///
    /// Failures leave the wizard untouched.
    pub async fn search_departure(&self, query: &str) -> Result<MapRegion> {
        let token = self.token();

        let found = tokio::select! {
            _ = token.cancelled() => Err(TripError::Cancelled),
            found = self.geocoder.search(query) => found,
        };

        let point = match found {
            Ok(point) => point,
            Err(TripError::Cancelled) => return Err(TripError::Cancelled),
            Err(e) => {
                warn!("Place lookup for '{query}' failed: {e}");
                return Err(e);
            }
        };

        let mut wizard = lock(&self.wizard);
        if token.is_cancelled() {
            return Err(TripError::Cancelled);
        }
        let region = MapRegion::around(point);
        wizard.set_region(region);
        Ok(region)
    }

    /// Freezes the answers and fetches proposals for them.
    ///
    /// A failed fetch leaves an empty result list on screen and returns the
    /// error for display.
    pub async fn complete(&self) -> Result<ResultsView> {
        let token = self.token();
        let preferences = self.with_wizard(|wizard| wizard.complete().cloned())?;

        let proposed = tokio::select! {
            _ = token.cancelled() => Err(TripError::Cancelled),
            proposed = self.catalog.propose(&preferences) => proposed,
        };

        let mut results = lock(&self.results);
        if token.is_cancelled() {
            return Err(TripError::Cancelled);
        }
        match proposed {
            Ok(itineraries) => {
                debug!("{} itineraries proposed", itineraries.len());
                let view = ResultsView::new(itineraries);
                *results = Some(view.clone());
                Ok(view)
            }
            Err(e) => {
                warn!("Fetching itineraries failed: {e}");
                *results = Some(ResultsView::default());
                Err(e)
            }
        }
    }

    /// Picks a proposed itinerary, saves the trip when a book is attached,
    /// then closes the session after the acknowledgement delay.
    pub async fn select(&self, id: u32) -> Result<Option<Trip>> {
        let token = self.token();

        let itinerary = {
            let mut results = lock(&self.results);
            let view = results.as_mut().ok_or_else(|| TripError::InvalidTransition {
                step: self.step(),
                action: "select an itinerary",
            })?;
            view.select(id)?.clone()
        };
        let preferences = self
            .with_wizard(|wizard| wizard.preferences().cloned())
            .ok_or_else(|| TripError::InvalidTransition {
                step: self.step(),
                action: "select an itinerary",
            })?;
        info!("Itinerary selected: {} ({})", itinerary.title, itinerary.id);

        let saved = match &self.book {
            Some(book) => Some(
                book.save_trip(&SaveTrip {
                    preferences,
                    itinerary,
                })
                .await?,
            ),
            None => None,
        };

        tokio::select! {
            _ = token.cancelled() => {}
            _ = tokio::time::sleep(self.ack_delay) => self.close(),
        }
        Ok(saved)
    }

    /// Fetches a detailed route for a proposed itinerary along with the
    /// warnings a van driver should see.
    pub async fn detailed_route(
        &self,
        router: &dyn Router,
        id: u32,
        options: &VanRoutingOptions,
    ) -> Result<(DetailedRoute, Vec<VanWarning>)> {
        let token = self.token();
        let waypoints = {
            let results = lock(&self.results);
            let view = results.as_ref().ok_or_else(|| TripError::InvalidTransition {
                step: self.step(),
                action: "fetch a route",
            })?;
            view.get(id)
                .ok_or(TripError::ItineraryNotFound { id })?
                .waypoints()
        };

        let route = tokio::select! {
            _ = token.cancelled() => Err(TripError::Cancelled),
            route = router.route(&waypoints, options) => route,
        };
        let route = route.map_err(|e| {
            if !matches!(e, TripError::Cancelled) {
                warn!("Route for itinerary {id} failed: {e}");
            }
            e
        })?;

        let warnings = check_van_restrictions(&route);
        Ok((route, warnings))
    }

    /// Abandons the run: cancels pending work, resets and hides the wizard.
    pub fn close(&self) {
        {
            let mut cancel = lock(&self.cancel);
            cancel.cancel();
            *cancel = CancellationToken::new();
        }
        lock(&self.wizard).close();
        lock(&self.results).take();
        debug!("Session closed");
    }

    /// Shows the wizard again after a close.
    pub fn open(&self) {
        lock(&self.wizard).open();
    }

    pub fn is_closed(&self) -> bool {
        lock(&self.wizard).is_closed()
    }
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;

    use super::*;
    use crate::models::{AnswerKey, Coordinate};

    struct FixedGeocoder(Coordinate);

    #[async_trait]
    impl Geocoder for FixedGeocoder {
        async fn search(&self, query: &str) -> Result<Coordinate> {
            if query == "nowhere" {
                return Err(TripError::PlaceNotFound {
                    query: query.to_string(),
                });
            }
            Ok(self.0)
        }
    }

    fn session() -> TripSession {
        TripSessionBuilder::new()
            .with_geocoder(FixedGeocoder(Coordinate::new(43.6, 3.88).unwrap()))
            .allow_past_dates()
            .with_ack_delay(Duration::ZERO)
            .build()
            .unwrap()
    }

    #[tokio::test]
    async fn test_search_recentres_map() {
        let session = session();
        let region = session.search_departure("Montpellier").await.unwrap();
        assert_eq!(region.latitude, 43.6);
        assert_eq!(region.latitude_delta, 0.2);
        assert_eq!(session.wizard().region(), region);
    }

    #[tokio::test]
    async fn test_failed_search_leaves_wizard_untouched() {
        let session = session();
        let before = session.wizard().region();
        let err = session.search_departure("nowhere").await.unwrap_err();
        assert!(matches!(err, TripError::PlaceNotFound { .. }));
        assert_eq!(session.wizard().region(), before);
    }

    #[tokio::test]
    async fn test_complete_outside_last_step_is_rejected() {
        let session = session();
        let err = session.complete().await.unwrap_err();
        assert!(matches!(err, TripError::InvalidTransition { .. }));
        assert!(session.results().is_none());
    }

    #[tokio::test]
    async fn test_select_without_results_is_rejected() {
        let session = session();
        assert!(session.select(1).await.is_err());
        assert!(!session.is_closed());
    }

    #[tokio::test]
    async fn test_close_then_open() {
        let session = session();
        session
            .with_wizard(|w| w.select_single(AnswerKey::DateType, "approx"))
            .unwrap();
        session.close();
        assert!(session.is_closed());
        assert!(session.wizard().answers().is_empty());

        session.open();
        assert_eq!(session.step(), Step::DateType);
    }

    #[test]
    fn test_builder_defaults_min_date_to_today() {
        let session = TripSessionBuilder::new()
            .with_geocoder(FixedGeocoder(Coordinate::new(0.0, 0.0).unwrap()))
            .build()
            .unwrap();
        assert_eq!(session.wizard().min_date(), Some(Zoned::now().date()));
    }
}
