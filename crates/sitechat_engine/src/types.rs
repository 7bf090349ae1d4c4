use thiserror::Error;

pub type RequestId = u64;

/// Settlement of one backend exchange, tagged with the request id the shell
/// dispatched it under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    IngestCompleted {
        request_id: RequestId,
        result: Result<(), BackendError>,
    },
    AskCompleted {
        request_id: RequestId,
        result: Result<QueryAnswer, BackendError>,
    },
}

/// Decoded body of a successful query exchange. The backend may omit the
/// answer entirely.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct QueryAnswer {
    pub answer: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BackendError {
    #[error("backend returned http status {0}")]
    HttpStatus(u16),
    #[error("request timed out")]
    Timeout,
    #[error("could not decode backend response: {0}")]
    InvalidResponse(String),
    #[error("network error: {0}")]
    Network(String),
}
