//! SLCSP lookup CLI
//!
//! Reads zip and plan reference data, then answers each zipcode in the
//! request file with its second lowest cost Silver plan rate.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin slcsp -- data/zips.csv data/plans.csv data/slcsp.csv
//! ```
//!
//! With no arguments the three files are read from `data/`.

use mps7::{load_plans, load_zips, Error, Result, SlcspFinder};
use std::env;
use std::fs::File;
use std::io::{self, BufReader};
use std::process;

const DEFAULT_ZIPS: &str = "data/zips.csv";
const DEFAULT_PLANS: &str = "data/plans.csv";
const DEFAULT_REQUESTS: &str = "data/slcsp.csv";

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let args: Vec<String> = env::args().skip(1).collect();
    let (zips_path, plans_path, requests_path) = match args.as_slice() {
        [] => (DEFAULT_ZIPS, DEFAULT_PLANS, DEFAULT_REQUESTS),
        [zips, plans, requests] => (zips.as_str(), plans.as_str(), requests.as_str()),
        _ => {
            return Err(Error::ArgumentCount {
                expected: "0 or 3",
                got: args.len(),
                usage: "slcsp [zips.csv plans.csv slcsp.csv]",
            })
        }
    };

    let zips = load_zips(BufReader::new(File::open(zips_path)?))?;
    let plans = load_plans(BufReader::new(File::open(plans_path)?))?;
    let finder = SlcspFinder::new(zips, plans);

    let requests = BufReader::new(File::open(requests_path)?);
    let stdout = io::stdout();
    finder.write_rates(requests, stdout.lock())?;

    Ok(())
}
