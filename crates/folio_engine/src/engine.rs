use std::sync::{mpsc, Arc};
use std::thread;

use folio_logging::{folio_info, folio_warn};

use crate::fetch::{FetchSettings, ReqwestFetcher, RepoFetcher};
use crate::{EngineEvent, FetchRequest, RequestId};

enum EngineCommand {
    Fetch {
        request_id: RequestId,
        request: FetchRequest,
    },
}

/// Runs fetches on a background tokio runtime and reports completions as events.
///
/// Dropping the handle closes the command channel; in-flight results are discarded.
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: mpsc::Receiver<EngineEvent>,
}

impl EngineHandle {
    pub fn new(settings: FetchSettings) -> std::io::Result<Self> {
        Self::with_fetcher(Arc::new(ReqwestFetcher::new(settings)))
    }

    pub fn with_fetcher(fetcher: Arc<dyn RepoFetcher>) -> std::io::Result<Self> {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .enable_all()
            .thread_name("folio-engine")
            .build()?;

        thread::Builder::new()
            .name("folio-engine-commands".to_string())
            .spawn(move || {
                while let Ok(command) = cmd_rx.recv() {
                    let fetcher = fetcher.clone();
                    let event_tx = event_tx.clone();
                    runtime.spawn(async move {
                        handle_command(fetcher.as_ref(), command, event_tx).await;
                    });
                }
                folio_info!("Engine command channel closed");
            })?;

        Ok(Self { cmd_tx, event_rx })
    }

    pub fn fetch(&self, request_id: RequestId, request: FetchRequest) {
        if self
            .cmd_tx
            .send(EngineCommand::Fetch {
                request_id,
                request,
            })
            .is_err()
        {
            folio_warn!("Engine stopped; dropping fetch request {}", request_id);
        }
    }

    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.event_rx.try_recv().ok()
    }

    /// Blocks until the next event or until every sender is gone.
    pub fn recv(&self) -> Option<EngineEvent> {
        self.event_rx.recv().ok()
    }
}

async fn handle_command(
    fetcher: &dyn RepoFetcher,
    command: EngineCommand,
    event_tx: mpsc::Sender<EngineEvent>,
) {
    match command {
        EngineCommand::Fetch {
            request_id,
            request,
        } => {
            let result = fetcher.fetch_repos(&request).await;
            match &result {
                Ok(records) => folio_info!(
                    "Fetch {} completed with {} repositories",
                    request_id,
                    records.len()
                ),
                Err(err) => folio_warn!("Fetch {} failed ({}): {}", request_id, err.kind, err),
            }
            let _ = event_tx.send(EngineEvent::FetchCompleted { request_id, result });
        }
    }
}
