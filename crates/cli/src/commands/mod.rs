//! Command implementations.

mod diagnose;

pub use diagnose::run_diagnose;
