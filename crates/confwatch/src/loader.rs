//! Lazily loaded views.
//!
//! A view chunk is fetched the first time its route matches and kept for the
//! lifetime of the page. [`LazySlot`] tracks where a single chunk is in that
//! life cycle; [`ViewLoader`] is the seam that actually fetches it.

use std::cell::RefCell;

use gloo_net::http::Response;

use crate::errors::LoadError;
use crate::log::{error, info};

pub type LoadResult<T> = Result<T, LoadError>;

/// The chunk holding the homepage view.
pub const HOMEPAGE_CHUNK: &str = "homepage";

#[derive(Debug, Clone, PartialEq)]
pub enum LoadState<T> {
    /// Nothing requested yet.
    Idle,
    Pending,
    Ready(T),
    Failed(LoadError),
}

impl<T> LoadState<T> {
    pub fn is_pending(&self) -> bool {
        matches!(self, LoadState::Pending)
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, LoadState::Ready(_))
    }
}

/// Identifies one load attempt. Results carrying an outdated ticket are dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

#[derive(Debug)]
pub struct LazySlot<T> {
    state: LoadState<T>,
    generation: u64,
}

impl<T> LazySlot<T> {
    pub fn new() -> Self {
        Self {
            state: LoadState::Idle,
            generation: 0,
        }
    }

    pub fn state(&self) -> &LoadState<T> {
        &self.state
    }

    /// Starts a load when the slot is idle or the previous attempt failed.
    /// Returns `None` while a load is in flight or once the chunk is ready.
    pub fn begin(&mut self) -> Option<Ticket> {
        match self.state {
            LoadState::Idle | LoadState::Failed(_) => {
                self.generation += 1;
                self.state = LoadState::Pending;
                Some(Ticket(self.generation))
            }
            LoadState::Pending | LoadState::Ready(_) => None,
        }
    }

    /// Records the outcome of the attempt identified by `ticket`.
    /// Returns `false` if the slot was reset since that attempt began.
    pub fn finish(&mut self, ticket: Ticket, result: LoadResult<T>) -> bool {
        if ticket.0 != self.generation || !self.state.is_pending() {
            return false;
        }
        self.state = match result {
            Ok(value) => LoadState::Ready(value),
            Err(err) => LoadState::Failed(err),
        };
        true
    }

    /// Forgets any loaded value; an in-flight attempt will be ignored.
    pub fn reset(&mut self) {
        self.generation += 1;
        self.state = LoadState::Idle;
    }
}

impl<T> Default for LazySlot<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait(?Send)]
pub trait ViewLoader {
    async fn load(&self, chunk: &str) -> LoadResult<String>;
}

/// Fetches `chunk` for the attempt started with `ticket` and stores the
/// outcome in `slot`.
///
/// The slot is not borrowed across the fetch, so the view may read it while
/// the load is pending. Returns whether the slot changed.
pub async fn complete_load<L>(
    slot: &RefCell<LazySlot<String>>,
    ticket: Ticket,
    loader: &L,
    chunk: &str,
) -> bool
where
    L: ViewLoader + ?Sized,
{
    info!("Loading view chunk {}", chunk);

    let result = loader.load(chunk).await;
    match &result {
        Ok(body) => info!("View chunk {} ready ({} bytes)", chunk, body.len()),
        Err(err) => error!("View chunk {} failed: {}", chunk, err),
    }
    slot.borrow_mut().finish(ticket, result)
}

async fn handle_response_status(response: Response, url: &str) -> LoadResult<Response> {
    match response.status() {
        200..=299 => Ok(response),
        404 => Err(LoadError::NotFound(url.to_string())),
        status => Err(LoadError::UnexpectedStatus {
            url: url.to_string(),
            status,
        }),
    }
}

/// Fetches `<root_url>/<chunk>.html` over HTTP.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpViewLoader {
    root_url: String,
}

impl HttpViewLoader {
    pub fn new(root_url: impl Into<String>) -> Self {
        Self {
            root_url: root_url.into(),
        }
    }

    pub fn chunk_url(&self, chunk: &str) -> String {
        format!("{}/{}.html", self.root_url.trim_end_matches('/'), chunk)
    }
}

#[async_trait::async_trait(?Send)]
impl ViewLoader for HttpViewLoader {
    async fn load(&self, chunk: &str) -> LoadResult<String> {
        let url = self.chunk_url(chunk);

        let response = gloo_net::http::Request::get(&url)
            .send()
            .await
            .map_err(|e| LoadError::Network {
                url: url.clone(),
                reason: e.to_string(),
            })?;

        handle_response_status(response, &url)
            .await?
            .text()
            .await
            .map_err(|e| LoadError::Decode {
                url: url.clone(),
                reason: e.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use std::cell::Cell;

    /// Returns scripted results in order and counts calls.
    struct ScriptedLoader {
        results: RefCell<Vec<LoadResult<String>>>,
        calls: Cell<usize>,
    }

    impl ScriptedLoader {
        fn new(mut results: Vec<LoadResult<String>>) -> Self {
            results.reverse();
            Self {
                results: RefCell::new(results),
                calls: Cell::new(0),
            }
        }
    }

    #[async_trait::async_trait(?Send)]
    impl ViewLoader for ScriptedLoader {
        async fn load(&self, chunk: &str) -> LoadResult<String> {
            self.calls.set(self.calls.get() + 1);
            self.results
                .borrow_mut()
                .pop()
                .unwrap_or_else(|| Err(LoadError::NotFound(chunk.to_string())))
        }
    }

    fn network_error() -> LoadError {
        LoadError::Network {
            url: "/chunks/homepage.html".to_string(),
            reason: "offline".to_string(),
        }
    }

    #[test]
    fn test_slot_life_cycle() {
        let mut slot = LazySlot::<String>::new();
        assert_eq!(slot.state(), &LoadState::Idle);

        let ticket = slot.begin().unwrap();
        assert!(slot.state().is_pending());
        assert!(slot.begin().is_none());

        assert!(slot.finish(ticket, Ok("<h1>Upcoming</h1>".to_string())));
        assert_eq!(slot.state(), &LoadState::Ready("<h1>Upcoming</h1>".to_string()));
        assert!(slot.begin().is_none());
    }

    #[test]
    fn test_failed_slot_can_retry() {
        let mut slot = LazySlot::<String>::new();
        let ticket = slot.begin().unwrap();
        slot.finish(ticket, Err(network_error()));
        assert_eq!(slot.state(), &LoadState::Failed(network_error()));

        let retry = slot.begin().unwrap();
        assert_ne!(retry, ticket);
        assert!(slot.state().is_pending());
    }

    #[test]
    fn test_stale_result_is_ignored() {
        let mut slot = LazySlot::<String>::new();
        let ticket = slot.begin().unwrap();
        slot.reset();

        assert!(!slot.finish(ticket, Ok("late".to_string())));
        assert_eq!(slot.state(), &LoadState::Idle);
    }

    /// Mirrors how the view drives a load: begin synchronously, then fetch.
    fn drive(slot: &RefCell<LazySlot<String>>, loader: &ScriptedLoader) -> bool {
        let Some(ticket) = slot.borrow_mut().begin() else {
            return false;
        };
        block_on(complete_load(slot, ticket, loader, HOMEPAGE_CHUNK))
    }

    #[test]
    fn test_ready_chunk_is_fetched_once() {
        let slot = RefCell::new(LazySlot::new());
        let loader = ScriptedLoader::new(vec![Ok("<section/>".to_string())]);

        assert!(drive(&slot, &loader));
        assert!(!drive(&slot, &loader));

        assert_eq!(loader.calls.get(), 1);
        assert!(slot.borrow().state().is_ready());
    }

    #[test]
    fn test_failure_then_retry_recovers() {
        let slot = RefCell::new(LazySlot::new());
        let loader = ScriptedLoader::new(vec![Err(network_error()), Ok("<section/>".to_string())]);

        assert!(drive(&slot, &loader));
        assert_eq!(slot.borrow().state(), &LoadState::Failed(network_error()));

        assert!(drive(&slot, &loader));
        assert_eq!(
            slot.borrow().state(),
            &LoadState::Ready("<section/>".to_string())
        );
        assert_eq!(loader.calls.get(), 2);
    }

    #[test]
    fn test_load_finishing_after_reset_is_dropped() {
        let slot = RefCell::new(LazySlot::new());
        let loader = ScriptedLoader::new(vec![Ok("<section/>".to_string())]);

        let ticket = slot.borrow_mut().begin().unwrap();
        slot.borrow_mut().reset();

        assert!(!block_on(complete_load(&slot, ticket, &loader, HOMEPAGE_CHUNK)));
        assert_eq!(slot.borrow().state(), &LoadState::Idle);
        assert_eq!(loader.calls.get(), 1);
    }

    #[test]
    fn test_chunk_url() {
        assert_eq!(
            HttpViewLoader::new("/chunks").chunk_url(HOMEPAGE_CHUNK),
            "/chunks/homepage.html"
        );
        assert_eq!(
            HttpViewLoader::new("https://cdn.example.org/v/").chunk_url("homepage"),
            "https://cdn.example.org/v/homepage.html"
        );
    }
}
