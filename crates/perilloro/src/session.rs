//! Session plan
//!
//! The immutable configuration of a run: how many sessions, how many
//! pomodoros per session, and the interval sequences for pomodoros, breaks
//! and rests.

use serde::Serialize;
use thiserror::Error;

use crate::sequence::{IntervalCursor, IntervalSpec};
use crate::stats::{total_times, Totals};

/// Invalid plan configuration
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PlanError {
    #[error("{what} must be at least 1")]
    ZeroCount { what: &'static str },

    #[error("initial {what} duration must be a non-negative number (got {value})")]
    InvalidDuration { what: &'static str, value: f64 },

    #[error("{what} increment must be a finite number (got {value})")]
    InvalidIncrement { what: &'static str, value: f64 },
}

/// One cursor per interval category
#[derive(Debug, Clone)]
pub struct Cursors {
    pub pomodoro: IntervalCursor,
    pub breaks: IntervalCursor,
    pub rest: IntervalCursor,
}

/// Validated, read-only run configuration
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SessionPlan {
    sessions: u32,
    iterations: u32,
    pomodoro: IntervalSpec,
    #[serde(rename = "break")]
    breaks: IntervalSpec,
    rest: IntervalSpec,
}

impl SessionPlan {
    pub fn new(
        sessions: u32,
        iterations: u32,
        pomodoro: IntervalSpec,
        breaks: IntervalSpec,
        rest: IntervalSpec,
    ) -> Result<Self, PlanError> {
        if sessions == 0 {
            return Err(PlanError::ZeroCount { what: "sessions" });
        }
        if iterations == 0 {
            return Err(PlanError::ZeroCount { what: "iterations" });
        }
        for (what, spec) in [("pomodoro", pomodoro), ("break", breaks), ("rest", rest)] {
            if !spec.initial.is_finite() || spec.initial < 0.0 {
                return Err(PlanError::InvalidDuration {
                    what,
                    value: spec.initial,
                });
            }
            if !spec.increment.is_finite() {
                return Err(PlanError::InvalidIncrement {
                    what,
                    value: spec.increment,
                });
            }
        }

        Ok(Self {
            sessions,
            iterations,
            pomodoro,
            breaks,
            rest,
        })
    }

    pub fn sessions(&self) -> u32 {
        self.sessions
    }

    /// Pomodoros per session
    pub fn iterations(&self) -> u32 {
        self.iterations
    }

    pub fn pomodoro(&self) -> IntervalSpec {
        self.pomodoro
    }

    pub fn breaks(&self) -> IntervalSpec {
        self.breaks
    }

    pub fn rest(&self) -> IntervalSpec {
        self.rest
    }

    /// Fresh cursors at the start of every sequence
    pub fn cursors(&self) -> Cursors {
        Cursors {
            pomodoro: self.pomodoro.cursor(),
            breaks: self.breaks.cursor(),
            rest: self.rest.cursor(),
        }
    }

    /// Planned totals, computed on cursors of their own
    pub fn totals(&self) -> Totals {
        let cursors = self.cursors();
        total_times(
            cursors.pomodoro,
            cursors.breaks,
            cursors.rest,
            self.iterations,
            self.sessions,
        )
    }
}

impl Default for SessionPlan {
    /// 1 session of 2 pomodoros: 25 min pomodoros, 5 min breaks growing by
    /// 5 min, 20 min rests
    fn default() -> Self {
        Self {
            sessions: 1,
            iterations: 2,
            pomodoro: IntervalSpec::from_minutes(25.0, 0.0),
            breaks: IntervalSpec::from_minutes(5.0, 5.0),
            rest: IntervalSpec::from_minutes(20.0, 0.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plan(sessions: u32, iterations: u32) -> SessionPlan {
        SessionPlan::new(
            sessions,
            iterations,
            IntervalSpec::constant(1500.0),
            IntervalSpec::constant(300.0),
            IntervalSpec::constant(1200.0),
        )
        .unwrap()
    }

    #[test]
    fn test_totals() {
        assert_eq!(
            plan(1, 2).totals(),
            Totals {
                pomodoro: 3000.0,
                breaks: 300.0,
                rest: 0.0
            }
        );
        assert_eq!(
            plan(2, 2).totals(),
            Totals {
                pomodoro: 6000.0,
                breaks: 600.0,
                rest: 1200.0
            }
        );
    }

    #[test]
    fn test_totals_do_not_touch_run_cursors() {
        let plan = SessionPlan::new(
            1,
            3,
            IntervalSpec::new(60.0, 60.0),
            IntervalSpec::new(10.0, 10.0),
            IntervalSpec::constant(0.0),
        )
        .unwrap();

        let mut cursors = plan.cursors();
        let first = plan.totals();
        let second = plan.totals();
        assert_eq!(first, second);
        assert_eq!(cursors.pomodoro.next(), Some(60.0));
        assert_eq!(cursors.breaks.next(), Some(10.0));
    }

    #[test]
    fn test_rejects_zero_counts() {
        let spec = IntervalSpec::constant(60.0);
        assert_eq!(
            SessionPlan::new(0, 2, spec, spec, spec),
            Err(PlanError::ZeroCount { what: "sessions" })
        );
        assert_eq!(
            SessionPlan::new(1, 0, spec, spec, spec),
            Err(PlanError::ZeroCount { what: "iterations" })
        );
    }

    #[test]
    fn test_rejects_bad_durations() {
        let ok = IntervalSpec::constant(60.0);
        let err = SessionPlan::new(1, 1, ok, IntervalSpec::constant(-1.0), ok).unwrap_err();
        assert!(matches!(err, PlanError::InvalidDuration { what: "break", .. }));

        let err = SessionPlan::new(1, 1, ok, ok, IntervalSpec::new(60.0, f64::NAN)).unwrap_err();
        assert!(matches!(err, PlanError::InvalidIncrement { what: "rest", .. }));

        // Negative increments are allowed; draws clamp at zero
        assert!(SessionPlan::new(1, 1, IntervalSpec::new(60.0, -600.0), ok, ok).is_ok());
    }

    #[test]
    fn test_default_plan() {
        let plan = SessionPlan::default();
        assert_eq!(plan.sessions(), 1);
        assert_eq!(plan.iterations(), 2);
        assert_eq!(plan.breaks(), IntervalSpec::new(300.0, 300.0));
        assert_eq!(plan.totals().pomodoro, 3000.0);
    }
}
