//! Time accounting
//!
//! Aggregates planned pomodoro, break and rest time and the efficiency
//! ratios derived from them.

use serde::{Deserialize, Serialize};

/// Planned time per interval category, in seconds
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Totals {
    pub pomodoro: f64,
    pub breaks: f64,
    pub rest: f64,
}

impl Totals {
    /// Grand total of all intervals
    pub fn total(&self) -> f64 {
        self.pomodoro + self.breaks + self.rest
    }

    /// Share of a session spent on pomodoros.
    ///
    /// `None` when there is no pomodoro or break time at all.
    pub fn session_efficiency(&self) -> Option<f64> {
        ratio(self.pomodoro, self.pomodoro + self.breaks)
    }

    /// Share of the whole run spent on pomodoros
    pub fn total_efficiency(&self) -> Option<f64> {
        ratio(self.pomodoro, self.total())
    }
}

fn ratio(numerator: f64, denominator: f64) -> Option<f64> {
    if denominator > 0.0 {
        Some(numerator / denominator)
    } else {
        None
    }
}

/// Total planned times for `sessions` sessions of `iterations` pomodoros.
///
/// Each session counts the first `iterations` pomodoro draws and
/// `iterations - 1` break draws; rest is drawn `sessions - 1` times, once
/// between each pair of sessions. Values are pulled from the given
/// sequences, so pass cursors reserved for accounting.
pub fn total_times<P, B, R>(
    pomodoro: P,
    breaks: B,
    rest: R,
    iterations: u32,
    sessions: u32,
) -> Totals
where
    P: Iterator<Item = f64>,
    B: Iterator<Item = f64>,
    R: Iterator<Item = f64>,
{
    let per_session_pomodoro: f64 = pomodoro.take(iterations as usize).sum();
    let per_session_breaks: f64 = breaks.take(iterations.saturating_sub(1) as usize).sum();
    let rest: f64 = rest.take(sessions.saturating_sub(1) as usize).sum();

    Totals {
        pomodoro: f64::from(sessions) * per_session_pomodoro,
        breaks: f64::from(sessions) * per_session_breaks,
        rest,
    }
}
