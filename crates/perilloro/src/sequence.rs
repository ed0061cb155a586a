//! Interval sequences
//!
//! An interval sequence is the infinite run of durations for one interval
//! category: `initial + n * increment` seconds for the n-th draw. The
//! closed form lives on [`IntervalSpec`]; the position within a run lives
//! on an [`IntervalCursor`]. Cursors built from the same spec are
//! independent.

use serde::{Deserialize, Serialize};

/// Start value and per-step increment of an interval sequence, in seconds
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct IntervalSpec {
    /// Duration of the first interval
    pub initial: f64,
    /// Added to the duration for each subsequent interval
    pub increment: f64,
}

impl IntervalSpec {
    pub fn new(initial: f64, increment: f64) -> Self {
        Self { initial, increment }
    }

    /// A sequence that repeats `initial` forever
    pub fn constant(initial: f64) -> Self {
        Self::new(initial, 0.0)
    }

    /// Build a spec from values given in minutes
    pub fn from_minutes(initial: f64, increment: f64) -> Self {
        Self::new(
            perilloro_core::min_to_sec(initial),
            perilloro_core::min_to_sec(increment),
        )
    }

    /// The n-th value of the sequence, which may be negative
    pub fn raw(&self, n: usize) -> f64 {
        self.initial + n as f64 * self.increment
    }

    /// The n-th duration, clamped to zero
    pub fn duration(&self, n: usize) -> f64 {
        self.raw(n).max(0.0)
    }

    /// Whether the n-th value had to be clamped
    pub fn is_clamped(&self, n: usize) -> bool {
        self.raw(n) < 0.0
    }

    /// A fresh cursor positioned at the first interval
    pub fn cursor(&self) -> IntervalCursor {
        IntervalCursor::new(*self)
    }
}

/// One value pulled from a cursor
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Draw {
    /// 0-based position in the sequence
    pub index: usize,
    /// Duration in seconds, never negative
    pub seconds: f64,
    /// The closed form was negative and got clamped
    pub clamped: bool,
}

/// Forward-only position within an interval sequence
#[derive(Debug, Clone)]
pub struct IntervalCursor {
    spec: IntervalSpec,
    drawn: usize,
    warned: bool,
}

impl IntervalCursor {
    pub fn new(spec: IntervalSpec) -> Self {
        Self {
            spec,
            drawn: 0,
            warned: false,
        }
    }

    /// How many values have been pulled so far
    pub fn drawn(&self) -> usize {
        self.drawn
    }

    /// Pull the next duration
    pub fn draw(&mut self) -> Draw {
        let index = self.drawn;
        self.drawn += 1;

        let clamped = self.spec.is_clamped(index);
        if clamped && !self.warned {
            self.warned = true;
            tracing::warn!(
                index,
                value = self.spec.raw(index),
                "interval duration below zero, clamping to zero"
            );
        }

        Draw {
            index,
            seconds: self.spec.duration(index),
            clamped,
        }
    }
}

impl Iterator for IntervalCursor {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        Some(self.draw().seconds)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closed_form_matches_accumulation() {
        let cases = [
            (1500.0, 0.0),
            (300.0, 300.0),
            (60.0, 0.5),
            (1200.0, 90.0),
            (0.0, 7.25),
        ];

        for (initial, increment) in cases {
            let mut cursor = IntervalSpec::new(initial, increment).cursor();
            let mut expected = initial;
            for n in 0..50 {
                let value = cursor.next().unwrap();
                assert!(
                    (value - expected).abs() < 1e-6,
                    "draw {} of ({}, {}): {} != {}",
                    n,
                    initial,
                    increment,
                    value,
                    expected
                );
                assert_eq!(value, IntervalSpec::new(initial, increment).duration(n));
                expected += increment;
            }
        }
    }

    #[test]
    fn test_cursors_are_independent() {
        let spec = IntervalSpec::new(300.0, 300.0);
        let mut a = spec.cursor();
        let mut b = spec.cursor();

        assert_eq!(a.next(), Some(300.0));
        assert_eq!(a.next(), Some(600.0));
        assert_eq!(b.next(), Some(300.0));
        assert_eq!(a.drawn(), 2);
        assert_eq!(b.drawn(), 1);
    }

    #[test]
    fn test_shared_cursor_advances() {
        let mut cursor = IntervalSpec::new(10.0, 1.0).cursor();
        let first: f64 = (&mut cursor).take(2).sum();
        let second: f64 = (&mut cursor).take(2).sum();
        assert_eq!(first, 21.0);
        assert_eq!(second, 25.0);
    }

    #[test]
    fn test_negative_values_clamp() {
        let spec = IntervalSpec::new(120.0, -100.0);
        let mut cursor = spec.cursor();

        let draws: Vec<Draw> = (0..3).map(|_| cursor.draw()).collect();
        assert_eq!(draws[0].seconds, 120.0);
        assert!(!draws[0].clamped);
        assert_eq!(draws[1].seconds, 20.0);
        assert_eq!(draws[2].seconds, 0.0);
        assert!(draws[2].clamped);
        assert_eq!(spec.raw(2), -80.0);
    }

    #[test]
    fn test_from_minutes() {
        let spec = IntervalSpec::from_minutes(25.0, 0.5);
        assert_eq!(spec.initial, 1500.0);
        assert_eq!(spec.increment, 30.0);
        assert_eq!(IntervalSpec::constant(60.0).duration(1000), 60.0);
    }
}
