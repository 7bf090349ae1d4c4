//! Sitechat core: pure interaction state machine and view-model helpers.
mod effect;
mod msg;
mod state;
mod update;
mod view_model;

pub use effect::{Effect, Notice, Severity};
pub use msg::{IngestOutcome, Msg, QueryOutcome};
pub use state::{AppState, Author, IngestStatus, Message, MessageId, RequestId, Timestamp};
pub use update::{ingest_confirmation, update, ANSWER_FALLBACK, INGEST_INVITE, QUERY_FAILED_REPLY};
pub use view_model::AppViewModel;
