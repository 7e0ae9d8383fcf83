//! Test utilities for PIM bus mocks.
//!
//! Provides an in-process peer-to-peer bus pair and a signal collector so
//! tests run without a bus daemon. Import from dev-dependencies only.

pub mod peer;
pub mod signals;
