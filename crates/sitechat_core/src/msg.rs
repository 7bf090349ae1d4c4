use crate::state::{RequestId, Timestamp};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User edited the website address input box.
    SiteInputChanged(String),
    /// User submitted the current address for ingestion.
    SiteSubmitted,
    /// User edited the question input box.
    QuestionInputChanged(String),
    /// User submitted the current question.
    QuestionSubmitted { at: Timestamp },
    /// Backend settled an ingestion exchange.
    IngestDone {
        request_id: RequestId,
        outcome: IngestOutcome,
        at: Timestamp,
    },
    /// Backend settled a query exchange.
    QueryDone {
        request_id: RequestId,
        outcome: QueryOutcome,
        at: Timestamp,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IngestOutcome {
    Succeeded,
    Failed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryOutcome {
    /// The backend produced an answer text.
    Answered(String),
    /// The backend responded but carried no answer.
    NoAnswer,
    /// Transport failure or error response.
    Failed,
}
