//! Last-search-wins session
//!
//! Starting a search cancels the one in flight. A result whose generation is
//! no longer current is reported as [`SearchError::Superseded`] and never
//! surfaced.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use domain::SearchResult;
use parking_lot::Mutex;
use tokio_util::sync::CancellationToken;
use tracing::debug;

use crate::error::SearchError;
use crate::services::search_orchestrator::SearchOrchestrator;

/// Ticket for one started search
#[derive(Debug, Clone)]
pub struct SearchTicket {
    generation: u64,
    token: CancellationToken,
}

impl SearchTicket {
    #[must_use]
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    #[must_use]
    pub const fn token(&self) -> &CancellationToken {
        &self.token
    }
}

/// Serialises user searches so only the latest one produces a result
pub struct SearchSession {
    orchestrator: Arc<SearchOrchestrator>,
    generation: AtomicU64,
    in_flight: Mutex<Option<SearchTicket>>,
}

impl std::fmt::Debug for SearchSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SearchSession")
            .field("generation", &self.current_generation())
            .field("in_flight", &self.in_flight.lock().is_some())
            .finish_non_exhaustive()
    }
}

impl SearchSession {
    #[must_use]
    pub fn new(orchestrator: Arc<SearchOrchestrator>) -> Self {
        Self {
            orchestrator,
            generation: AtomicU64::new(0),
            in_flight: Mutex::new(None),
        }
    }

    /// Start a new generation, cancelling the previous search
    pub fn begin(&self) -> SearchTicket {
        let token = CancellationToken::new();
        let mut in_flight = self.in_flight.lock();
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        let ticket = SearchTicket { generation, token };
        if let Some(previous) = in_flight.replace(ticket.clone()) {
            previous.token.cancel();
        }
        drop(in_flight);

        debug!(generation, "Search generation started");
        ticket
    }

    /// Whether `generation` is still the latest search
    pub fn is_current(&self, generation: u64) -> bool {
        self.generation.load(Ordering::SeqCst) == generation
    }

    pub fn current_generation(&self) -> u64 {
        self.generation.load(Ordering::SeqCst)
    }

    /// Cancel whatever search is in flight
    pub fn cancel(&self) {
        if let Some(ticket) = self.in_flight.lock().take() {
            ticket.token.cancel();
        }
    }

    /// Run a search, superseding any earlier one
    ///
    /// # Errors
    ///
    /// `SearchError::Superseded` if a newer search started before this one
    /// finished, otherwise whatever the orchestrator reports.
    pub async fn search(&self, city: &str) -> Result<SearchResult, SearchError> {
        let ticket = self.begin();
        self.run(city, &ticket).await
    }

    /// Run a search for a ticket obtained from [`Self::begin`]
    ///
    /// # Errors
    ///
    /// Same as [`Self::search`].
    pub async fn run(&self, city: &str, ticket: &SearchTicket) -> Result<SearchResult, SearchError> {
        let outcome = self
            .orchestrator
            .execute_cancellable(city, &ticket.token)
            .await;

        if !self.is_current(ticket.generation) {
            debug!(generation = ticket.generation, "Discarding superseded search");
            return Err(SearchError::Superseded);
        }

        let mut in_flight = self.in_flight.lock();
        if in_flight
            .as_ref()
            .is_some_and(|current| current.generation == ticket.generation)
        {
            in_flight.take();
        }
        drop(in_flight);

        outcome
    }
}
