//! Logging bootstrap for sitechat_app.
//!
//! Log lines go to `./chat.log` by default; `SITECHAT_LOG` selects a
//! different destination.

use std::fs::File;

use log::LevelFilter;
use simplelog::{
    ColorChoice, CombinedLogger, ConfigBuilder, SharedLogger, TermLogger, TerminalMode,
    WriteLogger,
};

const LOG_PATH: &str = "./chat.log";
const DESTINATION_VAR: &str = "SITECHAT_LOG";

/// Destination for log output.
#[derive(Debug, Clone, Copy)]
pub(crate) enum LogDestination {
    /// Write to ./chat.log in the current directory.
    File,
    /// Write to the terminal.
    Terminal,
    /// Write to both file and terminal.
    Both,
}

impl LogDestination {
    /// Reads `SITECHAT_LOG` (`file`, `term`, `both`); anything unrecognized
    /// falls back to the file destination.
    pub(crate) fn from_env() -> Self {
        match std::env::var(DESTINATION_VAR).as_deref() {
            Ok("term") => Self::Terminal,
            Ok("both") => Self::Both,
            _ => Self::File,
        }
    }

    fn wants_terminal(self) -> bool {
        matches!(self, Self::Terminal | Self::Both)
    }

    fn wants_file(self) -> bool {
        matches!(self, Self::File | Self::Both)
    }
}

/// Initializes the global logger for the chosen destination.
pub(crate) fn initialize(destination: LogDestination) {
    let level = LevelFilter::Info;
    let config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .set_target_level(LevelFilter::Error)
        .build();

    let mut loggers: Vec<Box<dyn SharedLogger>> = Vec::new();
    if destination.wants_terminal() {
        loggers.push(TermLogger::new(
            level,
            config.clone(),
            TerminalMode::Mixed,
            ColorChoice::Auto,
        ));
    }
    if destination.wants_file() {
        match File::create(LOG_PATH) {
            Ok(file) => loggers.push(WriteLogger::new(level, config, file)),
            Err(err) => eprintln!("Warning: could not create {LOG_PATH}: {err}"),
        }
    }

    // The app still runs without a logger if the file could not be created.
    if !loggers.is_empty() {
        let _ = CombinedLogger::init(loggers);
    }
}
