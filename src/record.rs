//! Header and record frames of the MPS7 wire format.
//!
//! ```text
//! Header:  "MPS7" | version: u8 | record_count: u32
//! Record:  tag: u8 | timestamp: u32 | user_id: u64 | [amount: f64]
//! ```
//!
//! All multi-byte fields are big-endian. The amount is present only for
//! debit and credit records, so a record's length is known from its tag alone.

use crate::error::{Error, Result};
use crate::frame::FrameReader;
use std::io::Read;

/// Magic bytes opening every log.
pub const MAGIC: [u8; 4] = *b"MPS7";

/// Decoded log header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Header {
    /// Always `MAGIC` once decoded.
    pub magic: [u8; 4],

    /// Format version. Carried but not checked.
    pub version: u8,

    /// Number of records that follow the header.
    pub record_count: u32,
}

impl Header {
    /// Encoded size in bytes.
    pub const LEN: usize = 9;

    /// Reads and validates a header.
    ///
    /// Fails with `BadMagic` if the first four bytes are not exactly `MPS7`.
    pub fn decode<R: Read>(reader: &mut FrameReader<R>) -> Result<Self> {
        let magic = reader.read_fixed_bytes::<4>()?;
        if magic != MAGIC {
            return Err(Error::BadMagic(magic));
        }

        let version = reader.read_u8()?;
        let record_count = reader.read_u32_be()?;

        Ok(Header {
            magic,
            version,
            record_count,
        })
    }
}

/// Leading byte of a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum RecordTag {
    Debit = 0x00,
    Credit = 0x01,
    StartAutopay = 0x02,
    EndAutopay = 0x03,
}

impl RecordTag {
    /// Converts from the raw tag byte. Returns `None` for unrecognized values.
    pub const fn from_byte(b: u8) -> Option<Self> {
        match b {
            0x00 => Some(Self::Debit),
            0x01 => Some(Self::Credit),
            0x02 => Some(Self::StartAutopay),
            0x03 => Some(Self::EndAutopay),
            _ => None,
        }
    }
}

/// A single decoded record.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Record {
    /// Opaque timestamp, carried as read.
    pub timestamp: u32,

    /// Account the record applies to.
    pub user_id: u64,

    /// Record variant with its payload.
    pub kind: RecordKind,
}

/// Record variants with their type-specific payload.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RecordKind {
    /// Money leaving the account. The amount is a positive magnitude.
    Debit(f64),

    /// Money entering the account.
    Credit(f64),

    StartAutopay,

    EndAutopay,
}

impl RecordKind {
    pub fn tag(&self) -> RecordTag {
        match self {
            RecordKind::Debit(_) => RecordTag::Debit,
            RecordKind::Credit(_) => RecordTag::Credit,
            RecordKind::StartAutopay => RecordTag::StartAutopay,
            RecordKind::EndAutopay => RecordTag::EndAutopay,
        }
    }
}

impl Record {
    /// Size of tag, timestamp and user id.
    pub const COMMON_LEN: usize = 13;

    /// Reads one record, dispatching on its tag.
    ///
    /// Unknown tags fail with `UnknownRecordType` before any further bytes
    /// are consumed past the common fields.
    pub fn decode<R: Read>(reader: &mut FrameReader<R>) -> Result<Self> {
        let raw_tag = reader.read_u8()?;
        let timestamp = reader.read_u32_be()?;
        let user_id = reader.read_u64_be()?;

        let tag = RecordTag::from_byte(raw_tag).ok_or(Error::UnknownRecordType(raw_tag))?;

        let kind = match tag {
            RecordTag::Debit => RecordKind::Debit(reader.read_f64_be()?),
            RecordTag::Credit => RecordKind::Credit(reader.read_f64_be()?),
            RecordTag::StartAutopay => RecordKind::StartAutopay,
            RecordTag::EndAutopay => RecordKind::EndAutopay,
        };

        Ok(Record {
            timestamp,
            user_id,
            kind,
        })
    }

    pub fn tag(&self) -> RecordTag {
        self.kind.tag()
    }

    /// Amount carried by debit and credit records.
    pub fn amount(&self) -> Option<f64> {
        match self.kind {
            RecordKind::Debit(amount) | RecordKind::Credit(amount) => Some(amount),
            RecordKind::StartAutopay | RecordKind::EndAutopay => None,
        }
    }
}
