use sitechat_core::{
    ingest_confirmation, update, AppState, Author, Effect, IngestOutcome, IngestStatus, Msg,
    QueryOutcome, RequestId,
};

const T0: i64 = 1_700_000_000_000;

fn dispatched_request_id(effects: &[Effect]) -> RequestId {
    effects
        .iter()
        .find_map(|effect| match effect {
            Effect::DispatchIngest { request_id, .. }
            | Effect::DispatchQuery { request_id, .. } => Some(*request_id),
            _ => None,
        })
        .expect("no exchange dispatched")
}

fn ingest_site(state: AppState, address: &str, outcome: IngestOutcome) -> AppState {
    let (state, _) = update(state, Msg::SiteInputChanged(address.to_string()));
    let (state, effects) = update(state, Msg::SiteSubmitted);
    let request_id = dispatched_request_id(&effects);
    let (state, _) = update(
        state,
        Msg::IngestDone {
            request_id,
            outcome,
            at: T0,
        },
    );
    state
}

fn ask(state: AppState, question: &str, outcome: QueryOutcome) -> AppState {
    let (state, _) = update(state, Msg::QuestionInputChanged(question.to_string()));
    let (state, effects) = update(state, Msg::QuestionSubmitted { at: T0 });
    let request_id = dispatched_request_id(&effects);
    let (state, _) = update(
        state,
        Msg::QueryDone {
            request_id,
            outcome,
            at: T0,
        },
    );
    state
}

#[test]
fn ingest_then_question_round_trip() {
    let state = AppState::new();

    let state = ingest_site(state, "https://example.com", IngestOutcome::Succeeded);
    let view = state.view();
    assert_eq!(view.status, IngestStatus::Ready);
    assert_eq!(view.messages.len(), 2);
    assert_eq!(
        view.messages[0].content,
        ingest_confirmation("https://example.com")
    );

    let state = ask(
        state,
        "What is this page about?",
        QueryOutcome::Answered("It's a demo site.".to_string()),
    );
    let view = state.view();
    assert_eq!(view.messages.len(), 4);
    assert_eq!(view.messages[2].author, Author::User);
    assert_eq!(view.messages[2].content, "What is this page about?");
    assert_eq!(view.messages[3].author, Author::Assistant);
    assert_eq!(view.messages[3].content, "It's a demo site.");
}

#[test]
fn new_ingest_resets_prior_conversation() {
    let state = AppState::new();
    let state = ingest_site(state, "https://first.example.com", IngestOutcome::Succeeded);
    let state = ask(
        state,
        "anything?",
        QueryOutcome::Answered("something".to_string()),
    );
    assert_eq!(state.view().messages.len(), 4);
    let highest_id = state.view().messages.last().unwrap().id;

    let state = ingest_site(state, "https://second.example.com", IngestOutcome::Succeeded);
    let view = state.view();

    // The transcript starts over with exactly the two fresh greetings.
    assert_eq!(view.messages.len(), 2);
    assert_eq!(
        view.messages[0].content,
        ingest_confirmation("https://second.example.com")
    );
    // Ids keep increasing across the clear.
    assert!(view.messages[0].id > highest_id);
}

#[test]
fn failed_ingest_preserves_prior_conversation() {
    let state = AppState::new();
    let state = ingest_site(state, "https://first.example.com", IngestOutcome::Succeeded);
    let state = ask(
        state,
        "anything?",
        QueryOutcome::Answered("something".to_string()),
    );
    let before = state.view().messages.clone();

    let state = ingest_site(state, "https://second.example.com", IngestOutcome::Failed);
    let view = state.view();

    assert_eq!(view.status, IngestStatus::Failed);
    assert_eq!(view.messages, before);
}

#[test]
fn transcript_ids_are_strictly_increasing() {
    let state = AppState::new();
    let state = ingest_site(state, "https://example.com", IngestOutcome::Succeeded);
    let state = ask(state, "one?", QueryOutcome::NoAnswer);
    let state = ask(state, "two?", QueryOutcome::Failed);

    let ids: Vec<_> = state.view().messages.iter().map(|m| m.id).collect();
    let mut sorted = ids.clone();
    sorted.sort_unstable();
    sorted.dedup();
    assert_eq!(ids, sorted);
    assert_eq!(ids.len(), 6);
}
