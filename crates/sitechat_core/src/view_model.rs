use crate::state::{IngestStatus, Message};

/// Immutable snapshot the shell renders from. Produced by `AppState::view`;
/// the shell never mutates state directly.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub status: IngestStatus,
    pub messages: Vec<Message>,
    pub site_input: String,
    pub question_input: String,
    pub is_ingesting: bool,
    pub is_querying: bool,
    pub dirty: bool,
}
