//! Interval schedule
//!
//! The order in which intervals run. Within a session, pomodoros alternate
//! with breaks and there is no break after the last pomodoro. Sessions are
//! separated by one rest, with no rest after the last session. Each
//! category draws from its own cursor, which keeps advancing across
//! sessions.

use perilloro_core::hms;

use crate::sequence::Draw;
use crate::session::{Cursors, SessionPlan};

/// Position of an interval within the run. Numbers are 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Pomodoro { session: u32, iteration: u32 },
    /// Break following pomodoro `iteration`
    Break { session: u32, iteration: u32 },
    /// Rest following session `session`
    Rest { session: u32 },
}

impl Phase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Pomodoro { .. } => "pomodoro",
            Phase::Break { .. } => "break",
            Phase::Rest { .. } => "rest",
        }
    }

    pub fn session(&self) -> u32 {
        match *self {
            Phase::Pomodoro { session, .. }
            | Phase::Break { session, .. }
            | Phase::Rest { session } => session,
        }
    }

    /// Message handed to the notifier when the interval starts
    pub fn notification(&self, seconds: f64) -> String {
        let label = match self {
            Phase::Pomodoro { .. } => "pomodoro started",
            Phase::Break { .. } => "break time",
            Phase::Rest { .. } => "rest time",
        };
        format!("{} - duration: {}", label, hms(seconds))
    }

    /// Label shown in front of the remaining time on the countdown line
    pub fn countdown_label(&self, iterations: u32) -> String {
        match self {
            Phase::Pomodoro { iteration, .. } => {
                format!("pomodoro #{} out of {} - ", iteration, iterations)
            }
            Phase::Break { .. } => "break time! - ".to_string(),
            Phase::Rest { .. } => String::new(),
        }
    }

    /// The phase that follows this one in `plan`, if any
    fn successor(&self, plan: &SessionPlan) -> Option<Phase> {
        match *self {
            Phase::Pomodoro { session, iteration } if iteration < plan.iterations() => {
                Some(Phase::Break { session, iteration })
            }
            Phase::Pomodoro { session, .. } if session < plan.sessions() => {
                Some(Phase::Rest { session })
            }
            Phase::Pomodoro { .. } => None,
            Phase::Break { session, iteration } => Some(Phase::Pomodoro {
                session,
                iteration: iteration + 1,
            }),
            Phase::Rest { session } => Some(Phase::Pomodoro {
                session: session + 1,
                iteration: 1,
            }),
        }
    }
}

/// An interval ready to run
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    pub phase: Phase,
    pub seconds: f64,
    /// The configured progression went below zero for this interval
    pub clamped: bool,
}

/// Every interval of a plan, in run order
#[derive(Debug, Clone)]
pub struct Schedule {
    plan: SessionPlan,
    cursors: Cursors,
    next: Option<Phase>,
}

impl Schedule {
    pub fn new(plan: &SessionPlan) -> Self {
        Self {
            plan: *plan,
            cursors: plan.cursors(),
            next: Some(Phase::Pomodoro {
                session: 1,
                iteration: 1,
            }),
        }
    }

    pub fn cursors(&self) -> &Cursors {
        &self.cursors
    }

    fn draw(&mut self, phase: Phase) -> Draw {
        match phase {
            Phase::Pomodoro { .. } => self.cursors.pomodoro.draw(),
            Phase::Break { .. } => self.cursors.breaks.draw(),
            Phase::Rest { .. } => self.cursors.rest.draw(),
        }
    }
}

impl Iterator for Schedule {
    type Item = Interval;

    fn next(&mut self) -> Option<Interval> {
        let phase = self.next?;
        self.next = phase.successor(&self.plan);

        let draw = self.draw(phase);
        tracing::debug!(
            phase = phase.as_str(),
            session = phase.session(),
            index = draw.index,
            seconds = draw.seconds,
            "interval drawn"
        );

        Some(Interval {
            phase,
            seconds: draw.seconds,
            clamped: draw.clamped,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sequence::IntervalSpec;

    fn plan(sessions: u32, iterations: u32) -> SessionPlan {
        SessionPlan::new(
            sessions,
            iterations,
            IntervalSpec::new(100.0, 10.0),
            IntervalSpec::new(20.0, 1.0),
            IntervalSpec::new(50.0, 5.0),
        )
        .unwrap()
    }

    #[test]
    fn test_single_interval() {
        let mut schedule = Schedule::new(&plan(1, 1));
        let only = schedule.next().unwrap();
        assert_eq!(
            only.phase,
            Phase::Pomodoro {
                session: 1,
                iteration: 1
            }
        );
        assert_eq!(only.seconds, 100.0);
        assert!(schedule.next().is_none());

        assert_eq!(schedule.cursors().pomodoro.drawn(), 1);
        assert_eq!(schedule.cursors().breaks.drawn(), 0);
        assert_eq!(schedule.cursors().rest.drawn(), 0);
    }

    #[test]
    fn test_order() {
        let phases: Vec<Phase> = Schedule::new(&plan(2, 2)).map(|i| i.phase).collect();
        assert_eq!(
            phases,
            vec![
                Phase::Pomodoro { session: 1, iteration: 1 },
                Phase::Break { session: 1, iteration: 1 },
                Phase::Pomodoro { session: 1, iteration: 2 },
                Phase::Rest { session: 1 },
                Phase::Pomodoro { session: 2, iteration: 1 },
                Phase::Break { session: 2, iteration: 1 },
                Phase::Pomodoro { session: 2, iteration: 2 },
            ]
        );
    }

    #[test]
    fn test_cursors_continue_across_sessions() {
        let seconds: Vec<f64> = Schedule::new(&plan(2, 2)).map(|i| i.seconds).collect();
        assert_eq!(seconds, vec![100.0, 20.0, 110.0, 50.0, 120.0, 21.0, 130.0]);
    }

    #[test]
    fn test_draw_counts_match_accounting() {
        let plan = plan(3, 4);
        let mut schedule = Schedule::new(&plan);
        let count = schedule.by_ref().count();

        assert_eq!(count, 3 * 4 + 3 * 3 + 2);
        assert_eq!(schedule.cursors().pomodoro.drawn(), 12);
        assert_eq!(schedule.cursors().breaks.drawn(), 9);
        assert_eq!(schedule.cursors().rest.drawn(), 2);
    }

    #[test]
    fn test_totals_agree_without_increments() {
        let plan = SessionPlan::new(
            3,
            2,
            IntervalSpec::constant(1500.0),
            IntervalSpec::constant(300.0),
            IntervalSpec::constant(1200.0),
        )
        .unwrap();
        let scheduled: f64 = Schedule::new(&plan).map(|i| i.seconds).sum();
        assert_eq!(scheduled, plan.totals().total());
    }

    #[test]
    fn test_notification_text() {
        let phase = Phase::Pomodoro {
            session: 1,
            iteration: 1,
        };
        assert_eq!(phase.notification(1500.0), "pomodoro started - duration: 0h25m0s");
        assert_eq!(
            Phase::Break { session: 1, iteration: 1 }.notification(300.0),
            "break time - duration: 0h5m0s"
        );
        assert_eq!(
            Phase::Rest { session: 1 }.notification(3720.0),
            "rest time - duration: 1h2m0s"
        );
    }

    #[test]
    fn test_countdown_label() {
        let phase = Phase::Pomodoro {
            session: 2,
            iteration: 3,
        };
        assert_eq!(phase.countdown_label(4), "pomodoro #3 out of 4 - ");
        assert_eq!(Phase::Rest { session: 1 }.countdown_label(4), "");
    }
}
