use std::sync::Arc;

use chrono::Utc;
use sitechat_core::{
    update, AppState, AppViewModel, Effect, IngestOutcome, Msg, QueryOutcome, Timestamp,
};
use sitechat_engine::{EngineEvent, EngineHandle};

use crate::notify::Notifier;

type Clock = Arc<dyn Fn() -> Timestamp + Send + Sync>;

/// Facade over the pure state machine and the backend engine.
///
/// The shell reads snapshots and forwards user intents; every state change
/// flows through `dispatch`, which runs the reducer and then performs the
/// returned effects.
pub(crate) struct ChatSession {
    state: AppState,
    engine: EngineHandle,
    notifier: Box<dyn Notifier>,
    clock: Clock,
}

impl ChatSession {
    pub(crate) fn new(engine: EngineHandle, notifier: Box<dyn Notifier>) -> Self {
        Self::with_clock(engine, notifier, Arc::new(|| Utc::now().timestamp_millis()))
    }

    pub(crate) fn with_clock(
        engine: EngineHandle,
        notifier: Box<dyn Notifier>,
        clock: Clock,
    ) -> Self {
        Self {
            state: AppState::new(),
            engine,
            notifier,
            clock,
        }
    }

    pub(crate) fn set_site_input(&mut self, text: impl Into<String>) {
        self.dispatch(Msg::SiteInputChanged(text.into()));
    }

    pub(crate) fn submit_site(&mut self) {
        self.dispatch(Msg::SiteSubmitted);
    }

    pub(crate) fn set_question_input(&mut self, text: impl Into<String>) {
        self.dispatch(Msg::QuestionInputChanged(text.into()));
    }

    pub(crate) fn submit_question(&mut self) {
        let at = (self.clock)();
        self.dispatch(Msg::QuestionSubmitted { at });
    }

    /// Drains settled backend exchanges into the state machine.
    pub(crate) fn pump(&mut self) {
        while let Some(event) = self.engine.try_recv() {
            let at = (self.clock)();
            let msg = match event {
                EngineEvent::IngestCompleted { request_id, result } => Msg::IngestDone {
                    request_id,
                    outcome: match result {
                        Ok(()) => IngestOutcome::Succeeded,
                        Err(_) => IngestOutcome::Failed,
                    },
                    at,
                },
                EngineEvent::AskCompleted { request_id, result } => Msg::QueryDone {
                    request_id,
                    outcome: match result {
                        Ok(answer) => match answer.answer {
                            Some(text) => QueryOutcome::Answered(text),
                            None => QueryOutcome::NoAnswer,
                        },
                        Err(_) => QueryOutcome::Failed,
                    },
                    at,
                },
            };
            self.dispatch(msg);
        }
    }

    pub(crate) fn snapshot(&self) -> AppViewModel {
        self.state.view()
    }

    pub(crate) fn take_dirty(&mut self) -> bool {
        self.state.consume_dirty()
    }

    fn dispatch(&mut self, msg: Msg) {
        let state = std::mem::take(&mut self.state);
        let (state, effects) = update(state, msg);
        self.state = state;
        self.run_effects(effects);
    }

    fn run_effects(&mut self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::DispatchIngest { request_id, url } => self.engine.ingest(request_id, url),
                Effect::DispatchQuery {
                    request_id,
                    question,
                } => self.engine.ask(request_id, question),
                Effect::Notify(notice) => self.notifier.notify(&notice),
            }
        }
    }
}
