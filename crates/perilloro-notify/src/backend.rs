//! External notifier command

use std::io;
use std::process::{Command, ExitStatus};
use thiserror::Error;

/// Errors from running the notifier command
#[derive(Error, Debug)]
pub enum NotifyError {
    #[error("failed to launch '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },

    #[error("'{program}' exited with {status}: {stderr}")]
    Status {
        program: String,
        status: ExitStatus,
        stderr: String,
    },
}

/// Captured output of a notifier run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NotifierOutput {
    pub stdout: String,
    pub stderr: String,
}

/// A notifier command line: program, leading arguments, then the message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotifierCommand {
    program: String,
    args: Vec<String>,
}

impl NotifierCommand {
    /// Split a notifier spec on whitespace.
    ///
    /// Returns `None` for an empty or all-whitespace spec.
    pub fn parse(spec: &str) -> Option<Self> {
        let mut tokens = spec.split_whitespace().map(str::to_string);
        let program = tokens.next()?;
        Some(Self {
            program,
            args: tokens.collect(),
        })
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// Build the process invocation with `message` as the final argument
    pub fn command(&self, message: &str) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(&self.args).arg(message);
        cmd
    }

    /// Run the notifier and wait for it, draining stdout and stderr
    pub fn send(&self, message: &str) -> Result<NotifierOutput, NotifyError> {
        let output = self
            .command(message)
            .output()
            .map_err(|source| NotifyError::Spawn {
                program: self.program.clone(),
                source,
            })?;

        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
        let stderr = String::from_utf8_lossy(&output.stderr).into_owned();

        if !output.status.success() {
            return Err(NotifyError::Status {
                program: self.program.clone(),
                status: output.status,
                stderr: single_line(&stderr),
            });
        }

        Ok(NotifierOutput { stdout, stderr })
    }
}

/// Join the non-empty lines of `text` so it fits on one warning line
fn single_line(text: &str) -> String {
    text.lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect::<Vec<_>>()
        .join(" | ")
}
