//! Configuration structures for fibseq.
//!
//! This module defines configuration options for the two components:
//! - [`RunConfig`]: Top-level configuration containing all settings
//! - [`SequenceConfig`]: Seed pair for the Fibonacci generator
//! - [`DriverConfig`]: Iteration count for the driver loop

use serde::{Deserialize, Serialize};

/// Generator calls per run when nothing overrides it.
pub const DEFAULT_ITERATIONS: u32 = 7;

/// Top-level run configuration.
///
/// Every field falls back to the defaults that reproduce the canonical
/// seven-term run, so an empty configuration is always valid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct RunConfig {
    /// Generator seed configuration.
    #[serde(default)]
    pub sequence: SequenceConfig,

    /// Driver loop configuration.
    #[serde(default)]
    pub driver: DriverConfig,
}

/// Seed pair for the generator's retained state.
///
/// The default pair `(1, 0)` yields 1, 1, 2, 3, 5, 8, 13, ... from the first
/// call. The pair `(-1, 1)` yields the same sequence with a leading 0.
/// After `k` calls from the default seed the pair holds `(F(k-1), F(k))`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct SequenceConfig {
    /// Value held as "previous" before the first call.
    #[serde(default = "defaults::seed_previous")]
    pub seed_previous: i32,

    /// Value held as "previous + 1" before the first call.
    #[serde(default = "defaults::seed_next")]
    pub seed_next: i32,
}

impl Default for SequenceConfig {
    fn default() -> Self {
        Self {
            seed_previous: defaults::seed_previous(),
            seed_next: defaults::seed_next(),
        }
    }
}

impl SequenceConfig {
    /// Get the seed as a `(previous, previous_plus_one)` pair.
    pub fn seed(&self) -> (i32, i32) {
        (self.seed_previous, self.seed_next)
    }
}

/// Driver loop configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct DriverConfig {
    /// Number of generator calls per run.
    ///
    /// Only the first six default terms are single digits; the seventh (13)
    /// is emitted as byte 61 (`'='`).
    #[serde(default = "defaults::iterations")]
    pub iterations: u32,
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            iterations: defaults::iterations(),
        }
    }
}

/// Default value functions for serde.
mod defaults {
    pub const fn seed_previous() -> i32 {
        1
    }

    pub const fn seed_next() -> i32 {
        0
    }

    pub const fn iterations() -> u32 {
        super::DEFAULT_ITERATIONS
    }
}
