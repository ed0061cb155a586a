//! Plan report
//!
//! The summary printed before the timer starts: planned totals per
//! category, efficiency ratios and the estimated finish time.

use anyhow::Result;
use chrono::{DateTime, Local};
use perilloro_core::{hms, Console};
use serde::Serialize;
use std::io::Write;

use crate::countdown::Countdown;
use crate::runner::START_COUNTDOWN;
use crate::schedule::Schedule;
use crate::session::SessionPlan;
use crate::stats::Totals;

#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub plan: SessionPlan,
    pub totals: Totals,
    /// Grand total in seconds
    pub total: f64,
    pub session_efficiency: Option<f64>,
    pub total_efficiency: Option<f64>,
    /// Local `HH:MM` at which the run should end
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_finish: Option<String>,
}

impl Report {
    pub fn new(plan: &SessionPlan) -> Self {
        let totals = plan.totals();
        Self {
            plan: *plan,
            totals,
            total: totals.total(),
            session_efficiency: totals.session_efficiency(),
            total_efficiency: totals.total_efficiency(),
            estimated_finish: None,
        }
    }

    /// Set the estimated finish for a run starting at `start`.
    ///
    /// Counts the count-in plus the whole ticks each scheduled interval
    /// waits. Time spent in the notifier is not included.
    pub fn with_start(mut self, start: DateTime<Local>) -> Self {
        let ticks: u64 = Schedule::new(&self.plan)
            .map(|interval| Countdown::new(interval.seconds).ticks())
            .sum();
        let seconds = u64::from(START_COUNTDOWN).saturating_add(ticks);
        self.estimated_finish = i64::try_from(seconds)
            .ok()
            .and_then(chrono::Duration::try_seconds)
            .and_then(|d| start.checked_add_signed(d))
            .map(|finish| finish.format("%H:%M").to_string());
        self
    }

    pub fn render<W: Write>(&self, console: &mut Console<W>) -> Result<()> {
        console.message(&format!(
            "will run {} sessions of {} iterations each",
            self.plan.sessions(),
            self.plan.iterations()
        ))?;
        console.newline()?;

        for (name, seconds) in [
            ("pomodoros", self.totals.pomodoro),
            ("break", self.totals.breaks),
            ("rest", self.totals.rest),
        ] {
            console.message(&format!("{} total time: {}", name, hms(seconds)))?;
        }
        console.message(&format!("total time: {}", hms(self.total)))?;
        console.newline()?;

        console.message(&format!(
            "efficiency per session: {}",
            efficiency(self.session_efficiency)
        ))?;
        console.message(&format!(
            "total efficiency: {}",
            efficiency(self.total_efficiency)
        ))?;
        if let Some(finish) = &self.estimated_finish {
            console.message(&format!("estimated finish: {}", finish))?;
        }
        console.newline()?;

        Ok(())
    }
}

fn efficiency(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{:.2}", v),
        None => "undefined".to_string(),
    }
}
