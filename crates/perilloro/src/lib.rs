//! perilloro - slightly modified version of the pomodoro method
//!
//! Work in pomodoros separated by breaks; group pomodoros into sessions
//! separated by rests. Every interval category can grow (or shrink) by a
//! fixed increment each time it comes around.
//!
//! - [`sequence`]: interval durations as `initial + n * increment`
//! - [`stats`]: planned totals and efficiency ratios
//! - [`session`]: the validated run configuration
//! - [`schedule`]: the order intervals run in
//! - [`countdown`] and [`clock`]: the one-second tick loop
//! - [`runner`]: the control loop tying it all together
//! - [`report`]: the plan summary printed before the run

pub mod cli;
pub mod clock;
pub mod countdown;
pub mod report;
pub mod runner;
pub mod schedule;
pub mod sequence;
pub mod session;
pub mod stats;

pub use clock::{Clock, SystemClock, VirtualClock};
pub use report::Report;
pub use runner::{RunSummary, Runner};
pub use schedule::{Interval, Phase, Schedule};
pub use sequence::{IntervalCursor, IntervalSpec};
pub use session::{PlanError, SessionPlan};
pub use stats::{total_times, Totals};
