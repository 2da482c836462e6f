//! Platform-agnostic building blocks: trackers, timers, formatting and DOM glue.

pub mod counter;
pub mod dom;
pub mod format;
pub mod platform;
pub mod timing;
pub mod tracker;
