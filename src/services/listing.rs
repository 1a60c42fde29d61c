use std::time::{Duration, Instant};

use anyhow::Result;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::api::{ListingClient, RemoteEntry};

/// Result of one listing fetch
#[derive(Debug)]
pub struct ListingResponse {
    pub generation: u64,
    pub entries: Result<Vec<RemoteEntry>>,
    pub elapsed: Duration,
}

/// Runs listing fetches in the background, one at a time.
///
/// Starting a new fetch aborts the one in flight, and every fetch is
/// tagged with a generation so a late result can still be recognised as
/// stale.
pub struct ListingLoader {
    client: ListingClient,
    response_tx: mpsc::UnboundedSender<ListingResponse>,
    in_flight: Option<JoinHandle<()>>,
    generation: u64,
}

impl ListingLoader {
    pub fn new(client: ListingClient) -> (Self, mpsc::UnboundedReceiver<ListingResponse>) {
        let (response_tx, response_rx) = mpsc::unbounded_channel();
        let loader = Self {
            client,
            response_tx,
            in_flight: None,
            generation: 0,
        };
        (loader, response_rx)
    }

    /// Start a fetch, superseding any fetch still running.
    /// Returns the generation of the new request.
    pub fn request(&mut self) -> u64 {
        if let Some(handle) = self.in_flight.take() {
            if !handle.is_finished() {
                log::debug!("Aborting listing fetch generation {}", self.generation);
                handle.abort();
            }
        }

        self.generation += 1;
        let generation = self.generation;
        let client = self.client.clone();
        let response_tx = self.response_tx.clone();

        log::debug!("Fetching listing generation {} from {}", generation, client.url());

        self.in_flight = Some(tokio::spawn(async move {
            let start = Instant::now();
            let entries = client.get_listing().await;
            let _ = response_tx.send(ListingResponse {
                generation,
                entries,
                elapsed: start.elapsed(),
            });
        }));

        generation
    }

    pub fn is_loading(&self) -> bool {
        self.in_flight.as_ref().is_some_and(|h| !h.is_finished())
    }
}

impl Drop for ListingLoader {
    fn drop(&mut self) {
        if let Some(handle) = self.in_flight.take() {
            handle.abort();
        }
    }
}
