//! Exact plan rate, written with 2 decimal places.
//!
//! Uses `rust_decimal` so that rates read from CSV compare exactly. Two plans
//! priced `245.2` and `245.20` are the same rate; `245.821` and `245.824` are
//! not, even though both print as `245.82`.

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// A monthly premium.
///
/// Comparison uses the full value as read. Only `Display` and `Serialize`
/// round to 2 decimal places.
///
/// # Examples
///
/// ```
/// use std::str::FromStr;
/// use mps7::Rate;
///
/// let rate = Rate::from_str("245.2").unwrap();
/// assert_eq!(rate.to_string(), "245.20");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Rate(Decimal);

impl Rate {
    /// Decimal places used when writing a rate.
    pub const SCALE: u32 = 2;

    /// Creates a rate from a `Decimal`, dropping trailing zeros.
    pub fn new(value: Decimal) -> Self {
        Rate(value.normalize())
    }
}

impl FromStr for Rate {
    type Err = rust_decimal::Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Rate::new(Decimal::from_str(s.trim())?))
    }
}

impl fmt::Display for Rate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.*}", Self::SCALE as usize, self.0)
    }
}

impl Serialize for Rate {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Rate {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Rate::from_str(&s).map_err(serde::de::Error::custom)
    }
}
