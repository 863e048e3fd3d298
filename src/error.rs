//! Error types for the log decoder and rate lookup.

use thiserror::Error;

/// Result type alias for decoder operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while decoding a log or looking up rates.
///
/// Every variant is fatal to the operation that produced it. Nothing in this
/// crate retries or skips past a bad frame.
#[derive(Error, Debug)]
pub enum Error {
    /// The source ended before a field was complete
    #[error("Truncated input at byte {offset}: needed {needed} bytes, got {available}")]
    TruncatedInput {
        offset: u64,
        needed: usize,
        available: usize,
    },

    /// Header magic did not match `MPS7`
    #[error("Bad magic: expected \"MPS7\", found {0:?}")]
    BadMagic([u8; 4]),

    /// Record tag outside the known set
    #[error("Unknown record type: 0x{0:02x}")]
    UnknownRecordType(u8),

    /// Failed to open or read an input file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV parsing error
    #[error("CSV parsing error: {0}")]
    Csv(#[from] csv::Error),

    /// A reference data row could not be used
    #[error("Invalid row {row}: {message}")]
    InvalidRow { row: usize, message: String },

    /// Missing input file argument
    #[error("Missing input file argument. Usage: {0}")]
    MissingArgument(&'static str),

    /// Wrong number of command-line arguments
    #[error("Expected {expected} arguments, got {got}. Usage: {usage}")]
    ArgumentCount {
        expected: &'static str,
        got: usize,
        usage: &'static str,
    },

    /// Command-line argument that could not be parsed
    #[error("Invalid {name} argument: {value}")]
    InvalidArgument { name: &'static str, value: String },
}
