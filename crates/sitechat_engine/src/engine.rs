use std::sync::{mpsc, Arc};
use std::thread;

use chat_logging::{chat_info, chat_warn};

use crate::backend::{Backend, BackendSettings, ReqwestBackend};
use crate::{BackendError, EngineEvent, RequestId};

enum EngineCommand {
    Ingest {
        request_id: RequestId,
        url: String,
    },
    Ask {
        request_id: RequestId,
        question: String,
    },
}

pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: mpsc::Receiver<EngineEvent>,
}

impl EngineHandle {
    pub fn new(settings: BackendSettings) -> Result<Self, BackendError> {
        Ok(Self::with_backend(Arc::new(ReqwestBackend::new(settings)?)))
    }

    /// Builds a handle over a custom backend; used by tests to stay off the
    /// network.
    pub fn with_backend(backend: Arc<dyn Backend>) -> Self {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();

        thread::spawn(move || {
            let runtime = tokio::runtime::Runtime::new().expect("tokio runtime");
            // Each command runs as its own task, so an ingest and a query
            // can be in flight at the same time.
            while let Ok(command) = cmd_rx.recv() {
                let backend = backend.clone();
                let event_tx = event_tx.clone();
                runtime.spawn(async move {
                    handle_command(backend.as_ref(), command, event_tx).await;
                });
            }
        });

        Self { cmd_tx, event_rx }
    }

    pub fn ingest(&self, request_id: RequestId, url: impl Into<String>) {
        let _ = self.cmd_tx.send(EngineCommand::Ingest {
            request_id,
            url: url.into(),
        });
    }

    pub fn ask(&self, request_id: RequestId, question: impl Into<String>) {
        let _ = self.cmd_tx.send(EngineCommand::Ask {
            request_id,
            question: question.into(),
        });
    }

    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.event_rx.try_recv().ok()
    }
}

async fn handle_command(
    backend: &dyn Backend,
    command: EngineCommand,
    event_tx: mpsc::Sender<EngineEvent>,
) {
    match command {
        EngineCommand::Ingest { request_id, url } => {
            chat_info!("ingest request_id={} url={}", request_id, url);
            let result = backend.ingest(&url).await;
            if let Err(err) = &result {
                chat_warn!("ingest request_id={} failed: {}", request_id, err);
            }
            let _ = event_tx.send(EngineEvent::IngestCompleted { request_id, result });
        }
        EngineCommand::Ask {
            request_id,
            question,
        } => {
            chat_info!("ask request_id={} question_len={}", request_id, question.len());
            let result = backend.ask(&question).await;
            if let Err(err) = &result {
                chat_warn!("ask request_id={} failed: {}", request_id, err);
            }
            let _ = event_tx.send(EngineEvent::AskCompleted { request_id, result });
        }
    }
}
