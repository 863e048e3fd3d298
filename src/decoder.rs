//! Streaming log decoder.
//!
//! Reads the header once, then yields exactly `record_count` records, one
//! frame at a time. Nothing beyond the last declared record is read, and the
//! first failure ends the walk.

use crate::error::Result;
use crate::frame::FrameReader;
use crate::record::{Header, Record};
use crate::summary::Summary;
use log::debug;
use std::io::Read;

/// Decoder over a single MPS7 log.
///
/// Iterating yields `Result<Record>`. After an error the iterator is fused
/// and returns `None`; there is no resuming from a bad frame.
pub struct LogDecoder<R> {
    reader: FrameReader<R>,
    header: Header,
    decoded: u32,
    failed: bool,
}

impl<R: Read> LogDecoder<R> {
    /// Reads and validates the header.
    pub fn new(reader: R) -> Result<Self> {
        let mut reader = FrameReader::new(reader);
        let header = Header::decode(&mut reader)?;

        debug!(
            "Header: version {}, {} records",
            header.version, header.record_count
        );

        Ok(LogDecoder {
            reader,
            header,
            decoded: 0,
            failed: false,
        })
    }

    pub fn header(&self) -> &Header {
        &self.header
    }

    /// Records still expected according to the header.
    pub fn remaining(&self) -> u32 {
        if self.failed {
            0
        } else {
            self.header.record_count - self.decoded
        }
    }

    /// Bytes consumed from the source so far.
    pub fn position(&self) -> u64 {
        self.reader.position()
    }

    /// Returns the source, positioned after the last frame read.
    pub fn into_inner(self) -> R {
        self.reader.into_inner()
    }
}

impl<R: Read> Iterator for LogDecoder<R> {
    type Item = Result<Record>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining() == 0 {
            return None;
        }

        let offset = self.reader.position();
        match Record::decode(&mut self.reader) {
            Ok(record) => {
                self.decoded += 1;
                debug!(
                    "Record {} at byte {}: {:?} for user {}",
                    self.decoded,
                    offset,
                    record.tag(),
                    record.user_id
                );
                Some(Ok(record))
            }
            Err(e) => {
                self.failed = true;
                debug!("Record {} at byte {}: {}", self.decoded + 1, offset, e);
                Some(Err(e))
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.remaining() as usize))
    }
}

/// Decodes a whole log into a `Summary` for the given account.
///
/// Any error aborts the decode and the partial totals are dropped.
pub fn decode_log<R: Read>(reader: R, distinguished_user_id: u64) -> Result<Summary> {
    let decoder = LogDecoder::new(reader)?;
    let mut summary = Summary::new(distinguished_user_id);

    for record in decoder {
        summary.fold(&record?);
    }

    Ok(summary)
}
