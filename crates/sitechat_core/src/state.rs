use crate::view_model::AppViewModel;

/// Identifier for a transcript message. Monotonic, never reused, and keeps
/// increasing across transcript clears.
pub type MessageId = u64;

/// Identifier for an in-flight backend exchange. A single monotonic counter
/// covers both exchange kinds; settlements carrying a non-current id are
/// dropped.
pub type RequestId = u64;

/// Unix timestamp in milliseconds, stamped by the shell when it dispatches
/// a message. The state machine itself never reads a clock.
pub type Timestamp = i64;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Author {
    User,
    Assistant,
}

/// One transcript entry. Immutable once appended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub id: MessageId,
    pub author: Author,
    pub content: String,
    pub created_at: Timestamp,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IngestStatus {
    #[default]
    Idle,
    InProgress,
    Ready,
    Failed,
}

impl IngestStatus {
    /// Human-readable badge text for the shell.
    pub fn label(self) -> &'static str {
        match self {
            IngestStatus::Idle => "Waiting for a website",
            IngestStatus::InProgress => "Ingesting...",
            IngestStatus::Ready => "Ready for questions",
            IngestStatus::Failed => "Error occurred",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct PendingIngest {
    pub(crate) request_id: RequestId,
    pub(crate) url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    status: IngestStatus,
    transcript: Vec<Message>,
    site_input: String,
    question_input: String,
    pending_ingest: Option<PendingIngest>,
    pending_query: Option<RequestId>,
    next_message_id: MessageId,
    next_request_id: RequestId,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> AppViewModel {
        AppViewModel {
            status: self.status,
            messages: self.transcript.clone(),
            site_input: self.site_input.clone(),
            question_input: self.question_input.clone(),
            is_ingesting: self.pending_ingest.is_some(),
            is_querying: self.pending_query.is_some(),
            dirty: self.dirty,
        }
    }

    /// Returns whether a render is due and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub(crate) fn site_input(&self) -> &str {
        &self.site_input
    }

    pub(crate) fn set_site_input(&mut self, text: String) {
        self.site_input = text;
        self.mark_dirty();
    }

    pub(crate) fn question_input(&self) -> &str {
        &self.question_input
    }

    pub(crate) fn set_question_input(&mut self, text: String) {
        self.question_input = text;
        self.mark_dirty();
    }

    pub(crate) fn is_ingesting(&self) -> bool {
        self.pending_ingest.is_some()
    }

    pub(crate) fn is_querying(&self) -> bool {
        self.pending_query.is_some()
    }

    /// Marks an ingestion as in flight and returns its request id.
    pub(crate) fn begin_ingest(&mut self, url: String) -> RequestId {
        let request_id = self.alloc_request_id();
        self.status = IngestStatus::InProgress;
        self.pending_ingest = Some(PendingIngest { request_id, url });
        self.mark_dirty();
        request_id
    }

    /// Clears the pending ingestion if `request_id` is the current one,
    /// returning the submitted url. A stale id leaves the state untouched.
    pub(crate) fn settle_ingest(&mut self, request_id: RequestId) -> Option<String> {
        match &self.pending_ingest {
            Some(pending) if pending.request_id == request_id => {
                let url = pending.url.clone();
                self.pending_ingest = None;
                self.mark_dirty();
                Some(url)
            }
            _ => None,
        }
    }

    pub(crate) fn mark_ready(&mut self) {
        self.status = IngestStatus::Ready;
        self.mark_dirty();
    }

    pub(crate) fn mark_failed(&mut self) {
        self.status = IngestStatus::Failed;
        self.mark_dirty();
    }

    /// Marks a query as in flight and returns its request id.
    pub(crate) fn begin_query(&mut self) -> RequestId {
        let request_id = self.alloc_request_id();
        self.pending_query = Some(request_id);
        self.mark_dirty();
        request_id
    }

    /// Clears the pending query if `request_id` is the current one.
    pub(crate) fn settle_query(&mut self, request_id: RequestId) -> bool {
        if self.pending_query == Some(request_id) {
            self.pending_query = None;
            self.mark_dirty();
            true
        } else {
            false
        }
    }

    pub(crate) fn clear_transcript(&mut self) {
        self.transcript.clear();
        self.mark_dirty();
    }

    pub(crate) fn push_message(
        &mut self,
        author: Author,
        content: String,
        created_at: Timestamp,
    ) -> MessageId {
        self.next_message_id += 1;
        let id = self.next_message_id;
        self.transcript.push(Message {
            id,
            author,
            content,
            created_at,
        });
        self.mark_dirty();
        id
    }

    fn alloc_request_id(&mut self) -> RequestId {
        self.next_request_id += 1;
        self.next_request_id
    }
}
