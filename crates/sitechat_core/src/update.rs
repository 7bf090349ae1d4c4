use crate::state::Author;
use crate::{AppState, Effect, IngestOutcome, Msg, Notice, QueryOutcome};

/// Assistant reply when a settled query carries no answer.
pub const ANSWER_FALLBACK: &str = "I couldn't find an answer to your question.";

/// Assistant reply when a query exchange fails.
pub const QUERY_FAILED_REPLY: &str =
    "Sorry, I encountered an error while processing your question. Please try again.";

/// Second greeting appended after a successful ingestion.
pub const INGEST_INVITE: &str =
    "You can now ask me questions about the content I found on this website!";

/// First greeting appended after a successful ingestion, naming the site.
pub fn ingest_confirmation(url: &str) -> String {
    format!("Successfully ingested content from: {url}")
}

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::SiteInputChanged(text) => {
            state.set_site_input(text);
            Vec::new()
        }
        Msg::SiteSubmitted => {
            let address = state.site_input().trim().to_string();
            if address.is_empty() {
                // Rejected before any state change; the input box keeps its text.
                vec![Effect::Notify(Notice::error(
                    "Error",
                    "Please enter a website address.",
                ))]
            } else if state.is_ingesting() {
                Vec::new()
            } else {
                let request_id = state.begin_ingest(address.clone());
                vec![Effect::DispatchIngest {
                    request_id,
                    url: address,
                }]
            }
        }
        Msg::IngestDone {
            request_id,
            outcome,
            at,
        } => {
            let Some(url) = state.settle_ingest(request_id) else {
                // Stale settlement; the request it answers is no longer current.
                return (state, Vec::new());
            };
            match outcome {
                IngestOutcome::Succeeded => {
                    state.mark_ready();
                    state.clear_transcript();
                    state.push_message(Author::Assistant, ingest_confirmation(&url), at);
                    state.push_message(Author::Assistant, INGEST_INVITE.to_string(), at);
                    vec![Effect::Notify(Notice::info(
                        "Success",
                        "Website ingested successfully! You can now ask questions.",
                    ))]
                }
                IngestOutcome::Failed => {
                    state.mark_failed();
                    vec![Effect::Notify(Notice::error(
                        "Error",
                        "Failed to ingest the website. Please try again.",
                    ))]
                }
            }
        }
        Msg::QuestionInputChanged(text) => {
            state.set_question_input(text);
            Vec::new()
        }
        Msg::QuestionSubmitted { at } => {
            let question = state.question_input().trim().to_string();
            // Empty drafts and double submits are both dropped without feedback.
            if question.is_empty() || state.is_querying() {
                Vec::new()
            } else {
                state.set_question_input(String::new());
                state.push_message(Author::User, question.clone(), at);
                let request_id = state.begin_query();
                vec![Effect::DispatchQuery {
                    request_id,
                    question,
                }]
            }
        }
        Msg::QueryDone {
            request_id,
            outcome,
            at,
        } => {
            if !state.settle_query(request_id) {
                return (state, Vec::new());
            }
            match outcome {
                QueryOutcome::Answered(text) => {
                    state.push_message(Author::Assistant, text, at);
                    Vec::new()
                }
                QueryOutcome::NoAnswer => {
                    state.push_message(Author::Assistant, ANSWER_FALLBACK.to_string(), at);
                    Vec::new()
                }
                QueryOutcome::Failed => {
                    state.push_message(Author::Assistant, QUERY_FAILED_REPLY.to_string(), at);
                    vec![Effect::Notify(Notice::error(
                        "Error",
                        "Failed to get an answer. Please try again.",
                    ))]
                }
            }
        }
    };

    (state, effects)
}
