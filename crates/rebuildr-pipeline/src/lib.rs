//! The rebuild decision runner.
//!
//! # Pipeline
//!
//! ```text
//! rebuildr run [OVERRIDE]
//!   1. Decide  ── OVERRIDE, or `git remote show` staleness probe
//!   2. Sync    ── git pull
//!   3. Build   ── docker build -f <dockerfile> -t <image> <context>
//!   4. Publish ── docker push <image>
//!   5. Banner  ── confirmation naming the image and a run command
//! ```
//!
//! The decision is computed exactly once per invocation. Steps run
//! strictly in order, each to completion before the next; the first
//! failure aborts the remainder. No retries.

pub mod doctor;
pub mod runner;

pub use doctor::{CheckResult, DoctorReport};
pub use runner::{banner, Outcome, RunError, Runner};
