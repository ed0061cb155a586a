//! Countdown state machine
//!
//! A countdown of `s` seconds advances in one-second ticks. It yields the
//! remaining time before each tick (`s`, `s - 1`, ...) and is finished
//! after `floor(s)` ticks; a fractional remainder is not waited out.

use std::time::Duration;

use crate::clock::Clock;

/// Length of one tick
pub const TICK: Duration = Duration::from_secs(1);

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CountdownState {
    /// `elapsed` ticks done, more to go
    Running { elapsed: u64 },
    Finished,
}

#[derive(Debug, Clone)]
pub struct Countdown {
    seconds: f64,
    ticks: u64,
    state: CountdownState,
}

impl Countdown {
    pub fn new(seconds: f64) -> Self {
        let ticks = if seconds.is_finite() && seconds >= 1.0 {
            seconds.floor() as u64
        } else {
            0
        };
        let state = if ticks == 0 {
            CountdownState::Finished
        } else {
            CountdownState::Running { elapsed: 0 }
        };

        Self {
            seconds,
            ticks,
            state,
        }
    }

    /// Number of one-second ticks in the countdown
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn state(&self) -> CountdownState {
        self.state
    }

    pub fn is_finished(&self) -> bool {
        self.state == CountdownState::Finished
    }

    /// Advance one tick, returning the remaining seconds to display for it
    pub fn tick(&mut self) -> Option<f64> {
        let CountdownState::Running { elapsed } = self.state else {
            return None;
        };

        let next = elapsed + 1;
        self.state = if next >= self.ticks {
            CountdownState::Finished
        } else {
            CountdownState::Running { elapsed: next }
        };

        Some(self.seconds - elapsed as f64)
    }

    /// Run to completion on `clock`, calling `render` with the remaining
    /// time before each tick's sleep
    pub fn run<C, F, E>(mut self, clock: &mut C, mut render: F) -> Result<u64, E>
    where
        C: Clock,
        F: FnMut(f64) -> Result<(), E>,
    {
        let mut ticks = 0;
        while let Some(remaining) = self.tick() {
            render(remaining)?;
            clock.sleep(TICK);
            ticks += 1;
        }
        Ok(ticks)
    }
}

impl Iterator for Countdown {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        self.tick()
    }
}
