//! Second lowest cost silver plan lookup.
//!
//! Zips map to a rate area, a rate area has many plans, and the answer for a
//! zip is the second lowest distinct Silver rate in its area. A zip that spans
//! more than one rate area has no answer.

use crate::error::{Error, Result};
use crate::rate::Rate;
use csv::{ReaderBuilder, Trim};
use log::{debug, warn};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::collections::BTreeSet;
use std::io::{Read, Write};

/// Metal level the lookup is restricted to.
pub const SILVER: &str = "Silver";

/// A row of `zips.csv`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Zip {
    pub zipcode: String,
    pub state: String,
    pub county_code: String,
    pub name: String,
    pub rate_area: String,
}

/// A row of `plans.csv`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Plan {
    pub plan_id: String,
    pub state: String,
    pub metal_level: String,
    pub rate: Rate,
    pub rate_area: String,
}

/// A row of the request file. Only the zipcode column is read.
#[derive(Debug, Deserialize)]
struct RateRequest {
    zipcode: String,
}

/// A row of the output file.
#[derive(Debug, Serialize)]
struct RateRow<'a> {
    zipcode: &'a str,
    rate: Option<Rate>,
}

/// Loads zips from a CSV reader with a header row.
pub fn load_zips<R: Read>(reader: R) -> Result<Vec<Zip>> {
    load_rows(reader, "zip")
}

/// Loads plans from a CSV reader with a header row.
pub fn load_plans<R: Read>(reader: R) -> Result<Vec<Plan>> {
    load_rows(reader, "plan")
}

/// Deserializes every row. Reference data must be clean, so the first bad
/// row fails the whole load.
fn load_rows<T: DeserializeOwned, R: Read>(reader: R, what: &str) -> Result<Vec<T>> {
    let mut csv_reader = ReaderBuilder::new().trim(Trim::All).from_reader(reader);
    let mut rows = Vec::new();

    for (row_idx, result) in csv_reader.deserialize::<T>().enumerate() {
        let row_num = row_idx + 2; // 1-indexed, accounting for header row
        let row = result.map_err(|e| Error::InvalidRow {
            row: row_num,
            message: format!("{} expected: {}", what, e),
        })?;
        rows.push(row);
    }

    debug!("Loaded {} {} rows", rows.len(), what);
    Ok(rows)
}

/// Rate lookup over loaded zips and plans.
pub struct SlcspFinder {
    zips: Vec<Zip>,
    plans: Vec<Plan>,
}

impl SlcspFinder {
    pub fn new(zips: Vec<Zip>, plans: Vec<Plan>) -> Self {
        SlcspFinder { zips, plans }
    }

    /// Returns the second lowest Silver rate for a zipcode.
    ///
    /// `None` when the zip is unknown, spans several rate areas, or its area
    /// has fewer than two distinct Silver rates.
    pub fn find_rate(&self, zipcode: &str) -> Option<Rate> {
        let zip = self.rate_area_of(zipcode)?;
        let rates = self.silver_rates(&zip.state, &zip.rate_area);
        let rate = rates.into_iter().nth(1);

        if rate.is_none() {
            debug!(
                "Zip {}: fewer than two silver rates in {} {}",
                zipcode, zip.state, zip.rate_area
            );
        }

        rate
    }

    /// Finds the single rate area a zipcode belongs to.
    fn rate_area_of(&self, zipcode: &str) -> Option<&Zip> {
        let mut matches = self.zips.iter().filter(|z| z.zipcode == zipcode);
        let first = match matches.next() {
            Some(zip) => zip,
            None => {
                debug!("Zip {}: not found", zipcode);
                return None;
            }
        };

        let ambiguous = matches.any(|z| z.state != first.state || z.rate_area != first.rate_area);
        if ambiguous {
            warn!("Zip {}: spans more than one rate area, no rate", zipcode);
            return None;
        }

        Some(first)
    }

    /// Distinct Silver rates for an area, lowest first.
    fn silver_rates(&self, state: &str, rate_area: &str) -> BTreeSet<Rate> {
        self.plans
            .iter()
            .filter(|p| p.state == state && p.rate_area == rate_area && p.metal_level == SILVER)
            .map(|p| p.rate)
            .collect()
    }

    /// Answers every request in `requests`, writing `zipcode,rate` rows in
    /// input order. Undeterminable rates are written as an empty field.
    pub fn write_rates<R: Read, W: Write>(&self, requests: R, writer: W) -> Result<()> {
        let mut csv_reader = ReaderBuilder::new().trim(Trim::All).from_reader(requests);
        let mut csv_writer = csv::Writer::from_writer(writer);

        for result in csv_reader.deserialize::<RateRequest>() {
            let request = result?;
            let rate = self.find_rate(&request.zipcode);
            csv_writer.serialize(RateRow {
                zipcode: &request.zipcode,
                rate,
            })?;
        }

        csv_writer.flush()?;
        Ok(())
    }
}
