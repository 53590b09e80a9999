//! Error types for the edges of an otherwise-total core: every scalar has
//! a default class and every pair a default verdict, so failures only
//! arise at construction and I/O boundaries. This module is `std`-only.

use thiserror::Error;

/// Failure modes surfaced at the edges of an otherwise-total core.
#[derive(Error, Debug)]
pub enum Error {
    /// Input bytes did not decode to valid Unicode scalars.
    #[error("invalid UTF-8 encoding at byte offset {offset}")]
    InvalidEncoding {
        /// Byte offset of the first invalid sequence.
        offset: usize,
    },
    /// A tailoring operation referenced a rule index outside the
    /// tailorable segment.
    #[error("invalid tailoring: index {index} is out of range for {len} tailorable rules")]
    InvalidTailoring {
        /// The offending index.
        index: usize,
        /// Number of tailorable rules at the time of the request.
        len: usize,
    },
    /// A property table file could not be parsed.
    #[error("failed to load table from {path}:{line}: {message}")]
    DataLoad {
        /// Source file path.
        path: String,
        /// 1-based line number within the file.
        line: usize,
        /// Description of what went wrong.
        message: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_mention_the_offending_value() {
        let err = Error::InvalidTailoring { index: 99, len: 22 };
        assert!(err.to_string().contains("99"));
    }
}
