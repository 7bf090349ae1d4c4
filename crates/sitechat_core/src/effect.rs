use crate::state::RequestId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    DispatchIngest { request_id: RequestId, url: String },
    DispatchQuery { request_id: RequestId, question: String },
    Notify(Notice),
}

/// Payload for the external notification collaborator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub severity: Severity,
    pub title: String,
    pub description: String,
}

impl Notice {
    pub fn info(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            severity: Severity::Info,
            title: title.into(),
            description: description.into(),
        }
    }

    pub fn error(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            title: title.into(),
            description: description.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Error,
}
