//! Error types for fibseq.
//!
//! [`SequenceError`] covers the two ways a run can fail: the generator running
//! past the integer width, or the output stream rejecting a write.

use std::io;

use thiserror::Error;

/// Errors raised while driving the generator.
#[derive(Error, Debug)]
pub enum SequenceError {
    /// The next term does not fit in the generator's integer width.
    #[error("Sequence overflow at iteration {iteration}")]
    Overflow {
        /// Zero-based index of the call that would have overflowed.
        iteration: u32,
    },

    /// Writing to the output stream failed.
    #[error("Output error: {0}")]
    Output(#[from] io::Error),
}

impl SequenceError {
    /// Create a new `Overflow` error.
    pub fn overflow(iteration: u32) -> Self {
        Self::Overflow { iteration }
    }

    /// Returns `true` if this error came from integer overflow.
    pub fn is_overflow(&self) -> bool {
        matches!(self, Self::Overflow { .. })
    }
}
