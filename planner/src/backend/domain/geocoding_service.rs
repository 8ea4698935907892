//! Place-name lookup used to pre-fill coordinates for a new destination.
//!
//! Lookups are tagged with a generation ticket. Dismissing the add-destination
//! form, or starting a newer lookup, advances the generation; a reply whose
//! ticket is no longer current is discarded instead of delivered.

use anyhow::Result;
use async_trait::async_trait;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use thiserror::Error;
use tracing::{info, warn};

use crate::backend::domain::models::route::Coordinates;
use crate::backend::domain::models::ValidationError;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeocodingError {
    #[error("Error searching for location: {0}")]
    Network(String),
    #[error("Location service returned HTTP {0}")]
    Status(u16),
    #[error("Unexpected response from location service: {0}")]
    Parse(String),
}

/// Outbound place search; implementations do not retry
#[async_trait]
pub trait PlaceLookup: Send + Sync {
    /// First match for `query`, or None when nothing matched
    async fn search(&self, query: &str) -> Result<Option<Coordinates>, GeocodingError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LookupTicket(u64);

#[derive(Debug, Clone, Default)]
pub struct LookupTracker {
    generation: Arc<AtomicU64>,
}

impl LookupTracker {
    /// Start a lookup; any lookup already in flight becomes stale
    pub fn begin(&self) -> LookupTicket {
        LookupTicket(self.generation.fetch_add(1, Ordering::SeqCst) + 1)
    }

    /// Make every in-flight lookup stale
    pub fn invalidate(&self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
    }

    pub fn is_current(&self, ticket: LookupTicket) -> bool {
        self.generation.load(Ordering::SeqCst) == ticket.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LookupOutcome {
    Found(Coordinates),
    NotFound,
    /// The form was dismissed or a newer lookup started before this one finished
    Discarded,
}

#[derive(Clone)]
pub struct GeocodingService {
    lookup: Arc<dyn PlaceLookup>,
    tracker: LookupTracker,
}

impl GeocodingService {
    pub fn new(lookup: Arc<dyn PlaceLookup>) -> Self {
        Self {
            lookup,
            tracker: LookupTracker::default(),
        }
    }

    pub async fn lookup(&self, query: &str) -> Result<LookupOutcome> {
        let query = query.trim();
        if query.is_empty() {
            return Err(ValidationError::EmptyQuery.into());
        }

        let ticket = self.tracker.begin();
        info!("Looking up coordinates for '{}'", query);
        let result = self.lookup.search(query).await;

        if !self.tracker.is_current(ticket) {
            info!("Discarding stale lookup result for '{}'", query);
            return Ok(LookupOutcome::Discarded);
        }

        match result? {
            Some(coordinates) => {
                info!("Found '{}' at {:?}", query, coordinates);
                Ok(LookupOutcome::Found(coordinates))
            }
            None => {
                warn!("Location not found: '{}'", query);
                Ok(LookupOutcome::NotFound)
            }
        }
    }

    /// The add-destination form was closed; late replies are dropped
    pub fn dismiss(&self) {
        self.tracker.invalidate();
    }
}
