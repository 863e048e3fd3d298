//! MPS7 log summarizer CLI
//!
//! Decodes a binary transaction log and prints credit/debit totals, autopay
//! counts and the balance of one account.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- txnlog.dat [user-id]
//! ```
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: Set to `debug` to trace each decoded record

use mps7::{decode_log, Error, Result, DEFAULT_USER_ID};
use std::env;
use std::fs::File;
use std::io::{self, BufReader};
use std::process;

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let args: Vec<String> = env::args().collect();
    let input_path = args
        .get(1)
        .ok_or(Error::MissingArgument("mps7 <txnlog.dat> [user-id]"))?;

    let user_id = match args.get(2) {
        Some(value) => value.parse().map_err(|_| Error::InvalidArgument {
            name: "user-id",
            value: value.clone(),
        })?,
        None => DEFAULT_USER_ID,
    };

    let file = File::open(input_path)?;
    let summary = decode_log(BufReader::new(file), user_id)?;

    let stdout = io::stdout();
    summary.write_report(stdout.lock())?;

    Ok(())
}
