use chat_logging::{chat_error, chat_info};
use sitechat_core::{Notice, Severity};

/// External notification collaborator. The core emits notices as effects;
/// how they are rendered is up to the implementation.
pub(crate) trait Notifier {
    fn notify(&self, notice: &Notice);
}

/// Prints notices to the terminal and mirrors them into the log.
pub(crate) struct TerminalNotifier;

impl Notifier for TerminalNotifier {
    fn notify(&self, notice: &Notice) {
        match notice.severity {
            Severity::Info => {
                chat_info!("{}: {}", notice.title, notice.description);
                println!("[{}] {}", notice.title, notice.description);
            }
            Severity::Error => {
                chat_error!("{}: {}", notice.title, notice.description);
                eprintln!("[{}] {}", notice.title, notice.description);
            }
        }
    }
}
