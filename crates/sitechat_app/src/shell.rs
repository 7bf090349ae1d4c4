//! Line-oriented shell: reads user intents from stdin, pumps the session,
//! and renders transcript updates.

use std::io::{self, BufRead, Write};
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use sitechat_core::{Author, IngestStatus, MessageId};
use sitechat_engine::EngineHandle;

use crate::config;
use crate::logging::{self, LogDestination};
use crate::notify::TerminalNotifier;
use crate::session::ChatSession;

pub(crate) fn run_app() -> anyhow::Result<()> {
    logging::initialize(LogDestination::from_env());

    let engine = EngineHandle::new(config::backend_settings_from_env())?;
    let mut session = ChatSession::new(engine, Box::new(TerminalNotifier));

    println!("sitechat - ingest a website, then ask questions about it.");
    println!("Commands: `:site <url>` to ingest, `:quit` to exit; anything else is a question.");

    let line_rx = spawn_input_reader();
    let mut last_printed: MessageId = 0;
    let mut last_status = session.snapshot().status;

    loop {
        session.pump();

        match line_rx.try_recv() {
            Ok(line) => {
                let line = line.trim().to_string();
                if line == ":quit" {
                    break;
                }
                if let Some(address) = line.strip_prefix(":site ") {
                    session.set_site_input(address);
                    session.submit_site();
                } else if !line.is_empty() {
                    session.set_question_input(line);
                    session.submit_question();
                }
            }
            Err(mpsc::TryRecvError::Empty) => {}
            Err(mpsc::TryRecvError::Disconnected) => break,
        }

        if session.take_dirty() {
            render(&session, &mut last_printed, &mut last_status);
        }

        thread::sleep(Duration::from_millis(20));
    }

    Ok(())
}

fn spawn_input_reader() -> mpsc::Receiver<String> {
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            match line {
                Ok(line) => {
                    if tx.send(line).is_err() {
                        break;
                    }
                }
                Err(_) => break,
            }
        }
    });
    rx
}

fn render(session: &ChatSession, last_printed: &mut MessageId, last_status: &mut IngestStatus) {
    let view = session.snapshot();

    if view.status != *last_status {
        println!("-- {}", view.status.label());
        *last_status = view.status;
    }

    // Message ids survive transcript clears, so printing by high-water mark
    // works across a re-ingestion as well.
    let printed_through = *last_printed;
    for message in view.messages.iter().filter(|m| m.id > printed_through) {
        let who = match message.author {
            Author::User => "you",
            Author::Assistant => "bot",
        };
        println!("{who}: {}", message.content);
        *last_printed = message.id;
    }

    let _ = io::stdout().flush();
}
