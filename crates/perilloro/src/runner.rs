//! Session runner
//!
//! Drives a plan from the 3-2-1 count-in, through every interval of the
//! schedule, to the completion notice. Each interval announces itself,
//! notifies, and counts down in one-second ticks on the runner's clock.

use anyhow::Result;
use perilloro_core::{hms, Console};
use perilloro_notify::Notifier;
use std::io::Write;

use crate::clock::Clock;
use crate::countdown::{Countdown, TICK};
use crate::schedule::{Interval, Phase, Schedule};
use crate::session::SessionPlan;

/// Seconds counted down before the first interval
pub const START_COUNTDOWN: u32 = 3;

/// Message sent to the notifier once every interval has run
pub const DONE_MESSAGE: &str = "all sessions done";

/// What a finished run went through
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub pomodoros: u32,
    pub breaks: u32,
    pub rests: u32,
    /// One-second interval ticks, excluding the count-in
    pub ticks: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stage {
    /// Count-in showing this number next
    Starting(u32),
    Running,
    Done,
}

pub struct Runner<C: Clock, W: Write> {
    notifier: Notifier,
    clock: C,
    console: Console<W>,
}

impl<C: Clock, W: Write> Runner<C, W> {
    pub fn new(notifier: Notifier, clock: C, console: Console<W>) -> Self {
        Self {
            notifier,
            clock,
            console,
        }
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn into_console(self) -> Console<W> {
        self.console
    }

    /// Run every interval of `plan`, blocking until the last one ends
    pub fn run(&mut self, plan: &SessionPlan) -> Result<RunSummary> {
        tracing::debug!(
            sessions = plan.sessions(),
            iterations = plan.iterations(),
            notifier = self.notifier.is_enabled(),
            "starting run"
        );

        let mut schedule = Schedule::new(plan);
        let mut summary = RunSummary::default();
        let mut stage = Stage::Starting(START_COUNTDOWN);

        self.console.message_inline("starting sessions in ")?;
        loop {
            stage = match stage {
                Stage::Starting(n) if n > 0 => {
                    self.console.write(&format!("{}, ", n))?;
                    self.clock.sleep(TICK);
                    Stage::Starting(n - 1)
                }
                Stage::Starting(_) => {
                    self.console.write("go!\n")?;
                    self.console.newline()?;
                    Stage::Running
                }
                Stage::Running => match schedule.next() {
                    Some(interval) => {
                        summary.ticks += self.run_interval(&interval, plan.iterations())?;
                        match interval.phase {
                            Phase::Pomodoro { .. } => summary.pomodoros += 1,
                            Phase::Break { .. } => summary.breaks += 1,
                            Phase::Rest { .. } => summary.rests += 1,
                        }
                        Stage::Running
                    }
                    None => Stage::Done,
                },
                Stage::Done => break,
            };
        }

        self.console.message("fini")?;
        self.notifier.notify(DONE_MESSAGE, &mut self.console)?;
        tracing::debug!(?summary, "run finished");

        Ok(summary)
    }

    fn run_interval(&mut self, interval: &Interval, iterations: u32) -> Result<u64> {
        let Interval {
            phase,
            seconds,
            clamped,
        } = *interval;

        match phase {
            Phase::Pomodoro {
                session,
                iteration: 1,
            } => self.console.message(&format!("on session #{}", session))?,
            Phase::Rest { .. } => {
                self.console.newline()?;
                self.console.message("time to rest for next session")?;
            }
            _ => {}
        }

        if clamped {
            self.console.warn(&format!(
                "{} duration fell below zero, using {}",
                phase.as_str(),
                hms(seconds)
            ))?;
        }

        self.notifier
            .notify(&phase.notification(seconds), &mut self.console)?;

        let label = phase.countdown_label(iterations);
        let console = &mut self.console;
        let ticks = Countdown::new(seconds).run(&mut self.clock, |remaining| {
            console.status(&format!("{}remaining time: {}", label, hms(remaining)))
        })?;

        self.console.newline()?;
        if let Phase::Rest { .. } = phase {
            self.console.newline()?;
        }

        Ok(ticks)
    }
}
