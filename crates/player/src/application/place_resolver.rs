//! Place resolver
//!
//! Turns keystrokes into a suggestion list and a selection into a
//! [`Location`]. One resolver backs one input field.
//!
//! ```text
//! Idle -> Typing -(debounce)-> Searching -> Suggesting | Empty | Failed
//! Suggesting -> Selecting -> Resolved
//! ```
//!
//! Every keystroke bumps a generation counter and aborts the pending debounce
//! task. A search result is applied only while its generation is still
//! current, so a slow response can never overwrite a newer one.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;

use kundli_domain::{Coordinates, Location, PlaceCandidate};
use kundli_shared::GeoPlace;

use crate::application::LocationStore;
use crate::config::PlayerConfig;
use crate::ports::{GatewayApiPort, GeolocationPort};

/// Queries shorter than this (in trimmed characters) never hit the network.
pub const MIN_QUERY_CHARS: usize = 2;

/// Place types requested from the commercial provider.
pub const CITY_TYPES: &str = "(cities)";

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ResolverError {
    /// Device position could not be acquired (denied or timed out).
    #[error("Location unavailable: {0}")]
    LocationUnavailable(String),

    /// Every provider failed.
    #[error("Search failed: {0}")]
    SearchFailed(String),
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum ResolverState {
    #[default]
    Idle,
    Typing {
        query: String,
    },
    Searching {
        query: String,
    },
    Suggesting {
        query: String,
        candidates: Vec<PlaceCandidate>,
    },
    Empty {
        query: String,
    },
    Failed {
        error: ResolverError,
    },
    Selecting {
        candidate: PlaceCandidate,
    },
    Resolved {
        location: Location,
    },
}

impl ResolverState {
    /// Suggestions to render; empty in every state but `Suggesting`.
    pub fn candidates(&self) -> &[PlaceCandidate] {
        match self {
            ResolverState::Suggesting { candidates, .. } => candidates,
            _ => &[],
        }
    }
}

struct Shared {
    api: Arc<dyn GatewayApiPort>,
    geolocation: Arc<dyn GeolocationPort>,
    store: LocationStore,
    state: watch::Sender<ResolverState>,
    generation: AtomicU64,
    selected: Mutex<Option<Location>>,
    debounce: Duration,
    geolocation_timeout: Duration,
}

impl Shared {
    fn is_current(&self, generation: u64) -> bool {
        self.generation.load(Ordering::SeqCst) == generation
    }

    fn set_state(&self, state: ResolverState) {
        self.state.send_replace(state);
    }

    fn selected(&self) -> MutexGuard<'_, Option<Location>> {
        self.selected.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Commercial provider first; open data when it errors or finds nothing.
    async fn search(&self, query: &str) -> Result<Vec<PlaceCandidate>, ResolverError> {
        match self.api.places(query, CITY_TYPES).await {
            Ok(predictions) if !predictions.is_empty() => {
                return Ok(predictions.iter().map(|p| p.to_candidate()).collect());
            }
            Ok(_) => tracing::debug!(query, "No predictions, falling back to open-data search"),
            Err(e) => {
                tracing::warn!(query, error = %e, "Places lookup failed, falling back to open-data search")
            }
        }

        let places = self.api.geo_search(query).await.map_err(|e| {
            tracing::warn!(query, error = %e, "Open-data search failed");
            ResolverError::SearchFailed(e.to_string())
        })?;
        Ok(places.iter().filter_map(|p| p.to_candidate()).collect())
    }

    async fn run_search(&self, query: String, generation: u64) {
        tokio::time::sleep(self.debounce).await;
        if !self.is_current(generation) {
            return;
        }
        self.set_state(ResolverState::Searching {
            query: query.clone(),
        });

        let outcome = self.search(&query).await;
        if !self.is_current(generation) {
            tracing::debug!(query, generation, "Discarding stale search results");
            return;
        }

        self.set_state(match outcome {
            Ok(candidates) if candidates.is_empty() => ResolverState::Empty { query },
            Ok(candidates) => ResolverState::Suggesting { query, candidates },
            Err(error) => ResolverState::Failed { error },
        });
    }

    /// Timezone (and a name, if we have none) for a point; `None` on failure.
    async fn reverse(&self, coordinates: Coordinates) -> Option<GeoPlace> {
        match self.api.geo_reverse(coordinates).await {
            Ok(place) => Some(place),
            Err(e) => {
                tracing::warn!(lat = coordinates.lat(), lon = coordinates.lon(), error = %e, "Reverse geocode failed");
                None
            }
        }
    }

    async fn promote(&self, candidate: &PlaceCandidate) -> Location {
        let mut location = candidate.to_location();

        if candidate.needs_details() {
            let place_id = candidate.place_id.as_deref().unwrap_or_default();
            match self.api.place_details(place_id).await {
                Ok(details) => match Coordinates::new(details.lat, details.lon) {
                    Ok(coordinates) => {
                        if !details.name.trim().is_empty() {
                            location.name = details.name;
                        }
                        location = location.with_coordinates(coordinates);
                    }
                    Err(e) => tracing::warn!(place_id, error = %e, "Place details out of range"),
                },
                Err(e) => {
                    tracing::warn!(place_id, error = %e, "Place details failed, keeping name only");
                    return location;
                }
            }
        }

        let has_tz = matches!(location.tz.as_deref(), Some(tz) if !tz.trim().is_empty());
        if let (false, Some(coordinates)) = (has_tz, location.coordinates()) {
            if let Some(tz) = self.reverse(coordinates).await.and_then(|place| place.tz) {
                location = location.with_timezone(tz);
            }
        }
        location
    }

    fn commit(&self, location: &Location, generation: u64) {
        if location.is_resolved() {
            self.store.save(location);
        }
        *self.selected() = Some(location.clone());
        if self.is_current(generation) {
            self.set_state(ResolverState::Resolved {
                location: location.clone(),
            });
        }
    }
}

/// Debounced search-as-you-type for one place field.
pub struct PlaceResolver {
    shared: Arc<Shared>,
    pending: Mutex<Option<JoinHandle<()>>>,
}

impl PlaceResolver {
    /// The previously persisted location, if any, becomes the initial selection.
    pub fn new(
        api: Arc<dyn GatewayApiPort>,
        geolocation: Arc<dyn GeolocationPort>,
        store: LocationStore,
        config: &PlayerConfig,
    ) -> Self {
        let (state, _) = watch::channel(ResolverState::Idle);
        let selected = store.load();
        Self {
            shared: Arc::new(Shared {
                api,
                geolocation,
                store,
                state,
                generation: AtomicU64::new(0),
                selected: Mutex::new(selected),
                debounce: config.debounce,
                geolocation_timeout: config.geolocation_timeout,
            }),
            pending: Mutex::new(None),
        }
    }

    pub fn state(&self) -> ResolverState {
        self.shared.state.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<ResolverState> {
        self.shared.state.subscribe()
    }

    /// The location currently chosen for this field.
    pub fn selected(&self) -> Option<Location> {
        self.shared.selected().clone()
    }

    fn pending(&self) -> MutexGuard<'_, Option<JoinHandle<()>>> {
        self.pending.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Invalidate all in-flight work and return the new generation.
    fn next_generation(&self) -> u64 {
        if let Some(handle) = self.pending().take() {
            handle.abort();
        }
        self.shared.generation.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Handle a keystroke. Must be called from within a tokio runtime.
    pub fn on_input(&self, text: &str) {
        let generation = self.next_generation();
        let query = text.trim().to_string();

        if query.chars().count() < MIN_QUERY_CHARS {
            self.shared.set_state(ResolverState::Idle);
            return;
        }

        self.shared.set_state(ResolverState::Typing {
            query: query.clone(),
        });
        let shared = Arc::clone(&self.shared);
        let handle = tokio::spawn(async move { shared.run_search(query, generation).await });
        *self.pending() = Some(handle);
    }

    /// Wait for the pending search, if any, to finish.
    pub async fn flush(&self) {
        let handle = self.pending().take();
        if let Some(handle) = handle {
            if let Err(e) = handle.await {
                if !e.is_cancelled() {
                    tracing::error!(error = %e, "Search task failed");
                }
            }
        }
    }

    /// Promote a suggestion to a Location.
    ///
    /// A failed detail lookup is not an error: the result then carries only
    /// the display name. Only fully resolved locations are persisted.
    pub async fn select(&self, candidate: PlaceCandidate) -> Location {
        let generation = self.next_generation();
        self.shared.set_state(ResolverState::Selecting {
            candidate: candidate.clone(),
        });

        let location = self.shared.promote(&candidate).await;
        self.shared.commit(&location, generation);
        location
    }

    /// Resolve the device position.
    ///
    /// # Errors
    ///
    /// `ResolverError::LocationUnavailable` when the position is denied or not
    /// available within the geolocation timeout. The selected and persisted
    /// locations are left as they were.
    pub async fn use_current_position(&self) -> Result<Location, ResolverError> {
        let generation = self.next_generation();
        let timeout = self.shared.geolocation_timeout;

        let fix = tokio::time::timeout(timeout, self.shared.geolocation.current_position()).await;
        let coordinates = match fix {
            Ok(Ok(coordinates)) => coordinates,
            Ok(Err(e)) => return Err(self.location_unavailable(e.to_string(), generation)),
            Err(_) => {
                return Err(self.location_unavailable(
                    format!("timed out after {}s", timeout.as_secs()),
                    generation,
                ))
            }
        };

        let location = match self.shared.reverse(coordinates).await {
            Some(place) => {
                let name = if place.name.trim().is_empty() {
                    coordinates.display()
                } else {
                    place.name
                };
                let location = Location::named(name).with_coordinates(coordinates);
                match place.tz {
                    Some(tz) => location.with_timezone(tz),
                    None => location,
                }
            }
            None => Location::named(coordinates.display()).with_coordinates(coordinates),
        };

        self.shared.commit(&location, generation);
        Ok(location)
    }

    fn location_unavailable(&self, reason: String, generation: u64) -> ResolverError {
        tracing::warn!(reason = %reason, "Device location unavailable");
        let error = ResolverError::LocationUnavailable(reason);
        if self.shared.is_current(generation) {
            self.shared.set_state(ResolverState::Failed {
                error: error.clone(),
            });
        }
        error
    }
}

impl Drop for PlaceResolver {
    fn drop(&mut self) {
        if let Some(handle) = self.pending().take() {
            handle.abort();
        }
    }
}
