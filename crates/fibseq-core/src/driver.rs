//! Fixed-count driver loop.
//!
//! [`Driver::run`] calls the generator a set number of times, writes each term
//! as a single byte, and finishes with a newline. The conversion is the raw
//! `value + 48` mapping with no range check, so terms above 9 produce
//! non-digit bytes (13 becomes `'='`).

use std::io::Write;

use serde::Serialize;
use tracing::{debug, info, instrument};

use fibseq_common::{DEFAULT_ITERATIONS, DriverConfig, SequenceError};

use crate::FibonacciGenerator;

const NEWLINE: u8 = b'\n';

/// Map a term to its output byte: `value + 48`, truncated to eight bits.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn digit_byte(value: i32) -> u8 {
    value.wrapping_add(i32::from(b'0')) as u8
}

/// Outcome of a single driver run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunReport {
    /// Terms produced, in call order.
    pub terms: Vec<i32>,

    /// Bytes written, including the trailing newline.
    pub bytes: Vec<u8>,

    /// Last term produced, or 0 if the loop never ran.
    pub last_value: i32,
}

impl RunReport {
    /// Process exit status for this run: the last term modulo 256.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn exit_code(&self) -> u8 {
        self.last_value.rem_euclid(256) as u8
    }
}

/// Runs the generator a fixed number of times against an output stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Driver {
    iterations: u32,
}

impl Driver {
    /// Create a driver making `iterations` generator calls per run.
    pub fn new(iterations: u32) -> Self {
        Self { iterations }
    }

    /// Create a driver from a [`DriverConfig`].
    pub fn with_config(config: &DriverConfig) -> Self {
        Self::new(config.iterations)
    }

    /// Number of generator calls per run.
    pub fn iterations(&self) -> u32 {
        self.iterations
    }

    /// Drive `generator` and write the resulting bytes to `out`.
    ///
    /// The generator is only borrowed; a second run continues where the
    /// first stopped.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The generator overflows before the loop completes
    /// - Writing or flushing `out` fails
    #[instrument(skip(self, generator, out), fields(iterations = self.iterations))]
    pub fn run<W: Write>(
        &self,
        generator: &mut FibonacciGenerator,
        out: &mut W,
    ) -> Result<RunReport, SequenceError> {
        // Not presized: the requested count may exceed what the generator
        // can produce before overflowing.
        let mut terms = Vec::new();
        let mut bytes = Vec::new();
        let mut last_value = 0;

        for iteration in 0..self.iterations {
            let value = generator
                .next_value()
                .ok_or_else(|| SequenceError::overflow(iteration))?;
            let byte = digit_byte(value);

            out.write_all(&[byte])?;
            debug!(iteration, value, byte, "Emitted term");

            terms.push(value);
            bytes.push(byte);
            last_value = value;
        }

        out.write_all(&[NEWLINE])?;
        out.flush()?;
        bytes.push(NEWLINE);

        info!(last_value, emitted = bytes.len(), "Run complete");

        Ok(RunReport {
            terms,
            bytes,
            last_value,
        })
    }
}

impl Default for Driver {
    fn default() -> Self {
        Self::new(DEFAULT_ITERATIONS)
    }
}
