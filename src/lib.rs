//! # MPS7
//!
//! A streaming decoder for the MPS7 binary transaction log. A log is a
//! 9-byte header followed by back-to-back records; each record is a debit,
//! credit, or an autopay start/end for one user. Decoding folds every record
//! into a [`Summary`] without holding the record sequence in memory.
//!
//! The crate also carries the companion SLCSP lookup, which finds the second
//! lowest cost Silver plan rate for a zipcode from CSV reference data.
//!
//! ## Design Principles
//!
//! - **Single pass**: every field is read once, front to back
//! - **Strict framing**: bad magic, unknown record tags and short reads are fatal
//! - **No partial results**: a failed decode never returns a `Summary`
//!
//! ## Example
//!
//! ```no_run
//! use mps7::{decode_log, DEFAULT_USER_ID};
//! use std::fs::File;
//! use std::io::BufReader;
//!
//! let file = File::open("txnlog.dat").unwrap();
//! let summary = decode_log(BufReader::new(file), DEFAULT_USER_ID).unwrap();
//! summary.write_report(std::io::stdout()).unwrap();
//! ```

pub mod decoder;
pub mod error;
pub mod frame;
pub mod rate;
pub mod record;
pub mod slcsp;
pub mod summary;

pub use decoder::{decode_log, LogDecoder};
pub use error::{Error, Result};
pub use frame::FrameReader;
pub use rate::Rate;
pub use record::{Header, Record, RecordKind, RecordTag, MAGIC};
pub use slcsp::{load_plans, load_zips, Plan, SlcspFinder, Zip};
pub use summary::Summary;

/// Account reported on by the `mps7` binary when none is given.
pub const DEFAULT_USER_ID: u64 = 2_456_938_384_156_277_127;
