//! Running totals over a decoded log.

use crate::record::{Record, RecordKind};
use std::fmt;
use std::io::Write;

/// Aggregate statistics folded from every record of one log.
///
/// # Sign convention
///
/// `total_debits` is stored as a positive magnitude. Only the distinguished
/// balance applies the sign: credits add to it and debits subtract from it.
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    /// Sum of all credit amounts.
    pub total_credits: f64,

    /// Sum of all debit amounts.
    pub total_debits: f64,

    pub autopay_starts: i64,

    pub autopay_ends: i64,

    /// Account whose net balance is tracked separately.
    pub distinguished_user_id: u64,

    /// Net of credits minus debits for `distinguished_user_id`.
    pub distinguished_balance: f64,
}

impl Summary {
    /// Creates an empty summary tracking the given account.
    pub fn new(distinguished_user_id: u64) -> Self {
        Summary {
            total_credits: 0.0,
            total_debits: 0.0,
            autopay_starts: 0,
            autopay_ends: 0,
            distinguished_user_id,
            distinguished_balance: 0.0,
        }
    }

    /// Merges one record into the totals.
    pub fn fold(&mut self, record: &Record) {
        let tracked = record.user_id == self.distinguished_user_id;

        match record.kind {
            RecordKind::Credit(amount) => {
                self.total_credits += amount;
                if tracked {
                    self.distinguished_balance += amount;
                }
            }
            RecordKind::Debit(amount) => {
                self.total_debits += amount;
                if tracked {
                    self.distinguished_balance -= amount;
                }
            }
            RecordKind::StartAutopay => self.autopay_starts += 1,
            RecordKind::EndAutopay => self.autopay_ends += 1,
        }
    }

    /// Writes the text report.
    pub fn write_report<W: Write>(&self, mut writer: W) -> std::io::Result<()> {
        write!(writer, "{}", self)?;
        writer.flush()
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "total credit amount={:.2}", self.total_credits)?;
        writeln!(f, "total debit amount={:.2}", self.total_debits)?;
        writeln!(f, "autopays started={}", self.autopay_starts)?;
        writeln!(f, "autopays ended={}", self.autopay_ends)?;
        writeln!(
            f,
            "balance for user {}={:.2}",
            self.distinguished_user_id, self.distinguished_balance
        )
    }
}
