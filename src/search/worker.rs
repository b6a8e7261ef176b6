//! Background fetch execution
//!
//! Fetch tickets are queued to a single background thread, started on first
//! use, and completions come back over a channel so an interactive loop can
//! keep drawing while requests are in flight. There is no cancellation: the
//! request already running finishes and the controller discards its result
//! if it was superseded. Tickets still waiting in the queue when a newer one
//! arrives are skipped without touching the network, so holding a paging key
//! costs at most one extra request.

use crate::api::ImageSearch;
use crate::search::error::{Result, SearchError};
use crate::search::orchestrator::{FetchCompletion, FetchRequest};
use crossbeam_channel::{Receiver, RecvTimeoutError, Sender, TryRecvError, unbounded};
use std::sync::Arc;
use std::thread;
use std::time::Duration;
use tracing::debug;

/// Executes fetch tickets off the caller's thread
pub struct FetchWorker {
    service: Arc<dyn ImageSearch>,
    requests: Option<Sender<FetchRequest>>,
    sender: Sender<FetchCompletion>,
    receiver: Receiver<FetchCompletion>,
}

impl FetchWorker {
    /// Create a worker backed by `service`
    ///
    /// The background thread is not started until the first `spawn`.
    #[must_use]
    pub fn new(service: Arc<dyn ImageSearch>) -> Self {
        let (sender, receiver) = unbounded();
        Self {
            service,
            requests: None,
            sender,
            receiver,
        }
    }

    /// Queue `request` for background execution
    ///
    /// # Errors
    ///
    /// Returns `SearchError::Spawn` if the OS refuses to start the worker
    /// thread and `SearchError::WorkerDisconnected` if the thread has died.
    /// A dead thread is restarted on the next call.
    pub fn spawn(&mut self, request: FetchRequest) -> Result<()> {
        if self.requests.is_none() {
            self.requests = Some(self.start()?);
        }
        let Some(requests) = &self.requests else {
            return Err(SearchError::WorkerDisconnected);
        };

        let seq = request.seq;
        if requests.send(request).is_err() {
            self.requests = None;
            return Err(SearchError::WorkerDisconnected);
        }

        debug!(seq, "fetch queued");
        Ok(())
    }

    fn start(&self) -> Result<Sender<FetchRequest>> {
        let (requests, queue) = unbounded();
        let service = Arc::clone(&self.service);
        let completions = self.sender.clone();

        thread::Builder::new()
            .name("imgseek-fetch".to_string())
            .spawn(move || serve(&queue, service.as_ref(), &completions))
            .map_err(|e| SearchError::Spawn(e.to_string()))?;

        debug!("fetch worker started");
        Ok(requests)
    }

    /// Next finished fetch, if one is ready
    #[must_use]
    pub fn try_recv(&self) -> Option<FetchCompletion> {
        match self.receiver.try_recv() {
            Ok(completion) => Some(completion),
            Err(TryRecvError::Empty | TryRecvError::Disconnected) => None,
        }
    }

    /// Wait up to `timeout` for a finished fetch
    ///
    /// Returns `Ok(None)` on timeout.
    ///
    /// # Errors
    ///
    /// Returns `SearchError::WorkerDisconnected` if the channel is closed.
    pub fn recv_timeout(&self, timeout: Duration) -> Result<Option<FetchCompletion>> {
        match self.receiver.recv_timeout(timeout) {
            Ok(completion) => Ok(Some(completion)),
            Err(RecvTimeoutError::Timeout) => Ok(None),
            Err(RecvTimeoutError::Disconnected) => Err(SearchError::WorkerDisconnected),
        }
    }
}

/// Worker thread body; exits once the `FetchWorker` is dropped
fn serve(
    queue: &Receiver<FetchRequest>,
    service: &dyn ImageSearch,
    completions: &Sender<FetchCompletion>,
) {
    while let Ok(request) = queue.recv() {
        let request = newest_queued(request, queue);
        let seq = request.seq;
        let completion = FetchCompletion::execute(request, service);
        if completions.send(completion).is_err() {
            debug!(seq, "fetch finished after receiver was dropped");
            return;
        }
    }
}

/// Skip to the most recent ticket waiting behind `request`
///
/// Tickets are queued in issue order, so the last one is the newest.
fn newest_queued(mut request: FetchRequest, queue: &Receiver<FetchRequest>) -> FetchRequest {
    for newer in queue.try_iter() {
        debug!(seq = request.seq, "superseded fetch skipped");
        request = newer;
    }
    request
}

impl std::fmt::Debug for FetchWorker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FetchWorker")
            .field("started", &self.requests.is_some())
            .field("pending", &self.receiver.len())
            .finish_non_exhaustive()
    }
}
