// Loading/error/data tri-state around the single books fetch

use std::sync::Arc;

use tokio::sync::oneshot::{self, error::TryRecvError};
use tokio::task::JoinHandle;

use crate::books_client::{BooksClient, FetchFailure};
use crate::domain::{Book, mapping::map_books};

type FetchResult = Result<Vec<Book>, FetchFailure>;

/// Anything that can produce the book list once per call.
#[async_trait::async_trait]
pub trait BookSource: Send + Sync {
    async fn fetch_books(&self) -> FetchResult;
}

#[async_trait::async_trait]
impl BookSource for BooksClient {
    async fn fetch_books(&self) -> FetchResult {
        let dtos = self.get_books().await?;
        Ok(map_books(dtos))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum FetchState {
    Loading,
    Failed(FetchFailure),
    Ready(Vec<Book>),
}

/// Owns the in-flight fetch. Dropping it aborts the request and any late
/// result is discarded.
pub struct DataSource {
    source: Option<Arc<dyn BookSource>>,
    state: FetchState,
    pending: Option<oneshot::Receiver<FetchResult>>,
    task: Option<JoinHandle<()>>,
}

impl std::fmt::Debug for DataSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DataSource")
            .field("state", &self.state)
            .field("in_flight", &self.pending.is_some())
            .finish()
    }
}

impl DataSource {
    /// Fire the one request for this screen. Must be called inside a tokio runtime.
    pub fn spawn(source: Arc<dyn BookSource>) -> Self {
        let mut ds = DataSource {
            source: Some(source),
            state: FetchState::Loading,
            pending: None,
            task: None,
        };
        ds.start();
        ds
    }

    /// A data source that never talks to the network, fixed at `state`.
    pub fn with_state(state: FetchState) -> Self {
        DataSource {
            source: None,
            state,
            pending: None,
            task: None,
        }
    }

    fn start(&mut self) {
        let Some(source) = self.source.clone() else {
            return;
        };
        let (tx, rx) = oneshot::channel();
        let task = tokio::spawn(async move {
            let result = source.fetch_books().await;
            if tx.send(result).is_err() {
                tracing::debug!("screen is gone, discarding fetch result");
            }
        });
        self.state = FetchState::Loading;
        self.pending = Some(rx);
        self.task = Some(task);
    }

    fn resolve(&mut self, result: FetchResult) {
        if self.state != FetchState::Loading {
            return;
        }
        self.pending = None;
        self.task = None;
        self.state = match result {
            Ok(books) => {
                tracing::info!(count = books.len(), "books ready");
                FetchState::Ready(books)
            }
            Err(e) => {
                tracing::warn!(error = %e, "books fetch failed");
                FetchState::Failed(e)
            }
        };
    }

    /// Move a finished fetch into the state without blocking. Returns true when the state changed.
    pub fn poll(&mut self) -> bool {
        let Some(rx) = self.pending.as_mut() else {
            return false;
        };
        match rx.try_recv() {
            Ok(result) => {
                self.resolve(result);
                true
            }
            Err(TryRecvError::Empty) => false,
            Err(TryRecvError::Closed) => {
                self.resolve(Err(FetchFailure::Network(
                    "fetch task ended without a result".into(),
                )));
                true
            }
        }
    }

    /// Wait for the in-flight fetch, if any, to settle.
    pub async fn settle(&mut self) {
        let Some(rx) = self.pending.take() else {
            return;
        };
        let result = rx.await.unwrap_or_else(|_| {
            Err(FetchFailure::Network(
                "fetch task ended without a result".into(),
            ))
        });
        self.resolve(result);
    }

    /// Issue the request again after a failure. Has no effect in any other state.
    pub fn retry(&mut self) -> bool {
        if !matches!(self.state, FetchState::Failed(_)) || self.source.is_none() {
            return false;
        }
        tracing::info!("retrying books fetch");
        self.start();
        true
    }

    pub fn state(&self) -> &FetchState {
        &self.state
    }

    pub fn loading(&self) -> bool {
        self.state == FetchState::Loading
    }

    pub fn error(&self) -> Option<&FetchFailure> {
        match &self.state {
            FetchState::Failed(e) => Some(e),
            _ => None,
        }
    }

    /// The fetched books; empty while loading or after a failure.
    pub fn data(&self) -> &[Book] {
        match &self.state {
            FetchState::Ready(books) => books,
            _ => &[],
        }
    }
}

impl Drop for DataSource {
    fn drop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}
