//! Core sequence logic for fibseq.
//!
//! This crate provides the two components of a run:
//! - [`FibonacciGenerator`]: Owned recurrence state producing one term per call
//! - [`Driver`]: Fixed-count loop emitting each term as a digit byte
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────┐
//! │     FibonacciGenerator       │
//! │  (previous, previous + 1)    │
//! └──────────────────────────────┘
//!                │ next_value()
//!                ▼
//! ┌──────────────────────────────┐
//! │           Driver             │
//! │  value + 48 -> output byte   │
//! │  trailing newline            │
//! └──────────────────────────────┘
//!                │
//!                ▼
//!            RunReport
//! ```

pub mod driver;
pub mod generator;

pub use driver::{Driver, RunReport, digit_byte};
pub use fibseq_common::DEFAULT_ITERATIONS;
pub use generator::FibonacciGenerator;
