//! perilloro-notify - Notifier bridge for perilloro
//!
//! Hands a human-readable message to a user-supplied external command at
//! every interval boundary. The command is optional, and a notifier that
//! cannot be run never stops the timer: the failure becomes a single
//! warning line on the timer's own output.

mod backend;

pub use backend::{NotifierCommand, NotifierOutput, NotifyError};

use perilloro_core::Console;
use std::io::{self, Write};

/// Notifier bridge: dispatches messages to the configured command, if any
#[derive(Debug, Clone, Default)]
pub struct Notifier {
    command: Option<NotifierCommand>,
}

impl Notifier {
    /// Create a notifier from a whitespace-separated command line.
    ///
    /// An empty spec yields a disabled notifier.
    pub fn new(spec: &str) -> Self {
        Self {
            command: NotifierCommand::parse(spec),
        }
    }

    /// A notifier that never launches anything
    pub fn disabled() -> Self {
        Self::default()
    }

    pub fn is_enabled(&self) -> bool {
        self.command.is_some()
    }

    /// Send `message`, returning the notifier's captured output.
    ///
    /// Returns `Ok(None)` when disabled or when the notifier failed; a
    /// failure is reported as exactly one warning line on `console`. The
    /// only error is a failure to write that warning.
    pub fn notify<W: Write>(
        &self,
        message: &str,
        console: &mut Console<W>,
    ) -> io::Result<Option<NotifierOutput>> {
        let Some(command) = &self.command else {
            return Ok(None);
        };

        match command.send(message) {
            Ok(output) => {
                tracing::debug!(
                    program = command.program(),
                    stdout = output.stdout.trim(),
                    stderr = output.stderr.trim(),
                    "notifier finished"
                );
                Ok(Some(output))
            }
            Err(e) => {
                tracing::warn!(error = %e, "notifier failed");
                console.warn(&format!("could not use system notifier ({})", e))?;
                Ok(None)
            }
        }
    }
}

/// One-shot notify: parse `spec` and send `message` through it
pub fn notify<W: Write>(
    spec: &str,
    message: &str,
    console: &mut Console<W>,
) -> io::Result<Option<NotifierOutput>> {
    Notifier::new(spec).notify(message, console)
}
