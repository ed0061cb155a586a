//! Command-line interface

use clap::Parser;

use crate::sequence::IntervalSpec;
use crate::session::{PlanError, SessionPlan};

/// perilloro - slightly modified version of pomodoro method
#[derive(Parser, Debug)]
#[command(name = "perilloro")]
#[command(version)]
#[command(about = "perilloro - slightly modified version of pomodoro method")]
#[command(after_help = r#"CONCEPTS:
    pomodoro    time applied to activity
    break       time applied between pomodoros
    session     set of pomodoros
    rest        time applied between sessions

All time values are in minutes. Increments make each successive interval
of a category longer (or shorter, when negative); durations never go
below zero.

EXAMPLES:
    perilloro                           # 1 session: 25m, 5m break, 25m
    perilloro -i 4 -s 3 --bi 0          # 3 sessions of 4 pomodoros
    perilloro -p 50 -b 10 -r 30 -s 2    # longer intervals
    perilloro -n notify-send            # desktop notifications
    perilloro --dry-run --json          # show the plan only
"#)]
pub struct Cli {
    /// Initial pomodoro time
    #[arg(short, long, value_name = "MINS", default_value_t = 25.0)]
    pub pomodoro: f64,

    /// Increment of pomodoro times for each iteration
    #[arg(long = "pi", value_name = "MINS", default_value_t = 0.0, allow_negative_numbers = true)]
    pub pomodoro_increment: f64,

    /// Initial break time between pomodoros
    #[arg(short = 'b', long = "break", value_name = "MINS", default_value_t = 5.0)]
    pub break_time: f64,

    /// Increment of break times for each iteration
    #[arg(long = "bi", value_name = "MINS", default_value_t = 5.0, allow_negative_numbers = true)]
    pub break_increment: f64,

    /// Initial rest time between sessions
    #[arg(short, long, value_name = "MINS", default_value_t = 20.0)]
    pub rest: f64,

    /// Increment of rest times for each session
    #[arg(long = "ri", value_name = "MINS", default_value_t = 0.0, allow_negative_numbers = true)]
    pub rest_increment: f64,

    /// Number of pomodoros for each session
    #[arg(short, long, default_value_t = 2, value_parser = clap::value_parser!(u32).range(1..))]
    pub iterations: u32,

    /// Number of sessions
    #[arg(short, long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    pub sessions: u32,

    /// Notifier command; each message is passed as its last argument
    #[arg(short, long, value_name = "COMMAND", default_value = "", hide_default_value = true)]
    pub notifier: String,

    /// Print the plan and exit without running the timer
    #[arg(long)]
    pub dry_run: bool,

    /// Print the plan as JSON (with --dry-run)
    #[arg(long, requires = "dry_run")]
    pub json: bool,

    /// Log diagnostics to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Build the session plan, converting minutes to seconds
    pub fn plan(&self) -> Result<SessionPlan, PlanError> {
        SessionPlan::new(
            self.sessions,
            self.iterations,
            IntervalSpec::from_minutes(self.pomodoro, self.pomodoro_increment),
            IntervalSpec::from_minutes(self.break_time, self.break_increment),
            IntervalSpec::from_minutes(self.rest, self.rest_increment),
        )
    }

    /// Default tracing filter when `RUST_LOG` is unset
    pub fn log_level(&self) -> &'static str {
        if self.verbose {
            "debug"
        } else {
            "warn"
        }
    }
}
