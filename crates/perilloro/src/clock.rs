//! Clocks the countdown sleeps on

use std::time::Duration;

/// Something that can block for a duration
pub trait Clock {
    fn sleep(&mut self, duration: Duration);
}

/// Real time, via [`std::thread::sleep`]
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn sleep(&mut self, duration: Duration) {
        std::thread::sleep(duration);
    }
}

/// Clock that returns immediately and records every requested sleep
#[derive(Debug, Clone, Default)]
pub struct VirtualClock {
    sleeps: Vec<Duration>,
}

impl VirtualClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sleeps(&self) -> &[Duration] {
        &self.sleeps
    }

    /// Sum of all requested sleeps
    pub fn elapsed(&self) -> Duration {
        self.sleeps.iter().sum()
    }
}

impl Clock for VirtualClock {
    fn sleep(&mut self, duration: Duration) {
        self.sleeps.push(duration);
    }
}

impl<C: Clock + ?Sized> Clock for &mut C {
    fn sleep(&mut self, duration: Duration) {
        (**self).sleep(duration);
    }
}
