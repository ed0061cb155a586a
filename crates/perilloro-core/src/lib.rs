//! perilloro core - Shared functionality for the perilloro crates
//!
//! Time formatting and the prefixed console writer used for every line the
//! timer prints.

pub mod console;
pub mod format;

pub use console::{Console, PREFIX};
pub use format::{format_time, hms, min_to_sec};
