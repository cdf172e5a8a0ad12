use std::sync::Arc;

use lookbook::DisplayItem;
use tokio::sync::mpsc;

use crate::{Completion, FetchError, PageTicket, QueryController, SearchBackend, SearchResponse};

struct Fetched {
    ticket: PageTicket,
    outcome: Result<SearchResponse, FetchError>,
}

/// Event loop half of the feed.
///
/// Fetches run as spawned tasks and report back over a channel; every state
/// change happens in [`next_completion`](Self::next_completion) on the caller's
/// task, in arrival order. Generation tags make late answers to superseded
/// queries inert.
pub struct FeedSession<B: SearchBackend + 'static> {
    controller: QueryController,
    backend: Arc<B>,
    tx: mpsc::UnboundedSender<Fetched>,
    rx: mpsc::UnboundedReceiver<Fetched>,
    in_flight: usize,
}

impl<B: SearchBackend + 'static> FeedSession<B> {
    pub fn new(controller: QueryController, backend: Arc<B>) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self { controller, backend, tx, rx, in_flight: 0 }
    }

    pub fn controller(&self) -> &QueryController {
        &self.controller
    }

    pub fn controller_mut(&mut self) -> &mut QueryController {
        &mut self.controller
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Requests dispatched and not yet applied, stale ones included.
    pub fn in_flight(&self) -> usize {
        self.in_flight
    }

    pub fn submit(&mut self, text: impl Into<String>) {
        let ticket = self.controller.submit(text);
        self.dispatch(ticket);
    }

    /// Returns whether a page request went out.
    pub fn sentinel_visibility(&mut self, visible: bool) -> bool {
        match self.controller.sentinel_visibility(visible) {
            Some(ticket) => {
                self.dispatch(ticket);
                true
            }
            None => false,
        }
    }

    pub fn display_items(&self) -> Vec<DisplayItem> {
        self.controller.display_items()
    }

    /// Waits for the next fetch to finish and applies it. `None` when nothing
    /// is in flight.
    pub async fn next_completion(&mut self) -> Option<Completion> {
        if self.in_flight == 0 {
            return None;
        }
        let fetched = self.rx.recv().await?;
        self.in_flight -= 1;
        Some(self.controller.complete(&fetched.ticket, fetched.outcome))
    }

    fn dispatch(&mut self, ticket: PageTicket) {
        self.in_flight += 1;
        let backend = Arc::clone(&self.backend);
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let request = ticket.request.clone();
            let search = tokio::spawn(async move { backend.search(&request).await });
            // A panicking backend still has to account for its ticket.
            let outcome = match search.await {
                Ok(outcome) => outcome,
                Err(e) => Err(FetchError::Transport(format!("search task failed: {e}"))),
            };
            // The receiver only goes away with the session.
            let _ = tx.send(Fetched { ticket, outcome });
        });
    }
}
