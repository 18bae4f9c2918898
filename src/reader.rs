use rtfd::input::InputTransaction;
use rtfd::Result;

use std::{fs::File, path::PathBuf};

use csv::{Reader, ReaderBuilder, Trim};

pub fn build_csv_reader(filepath: PathBuf) -> Result<Reader<File>> {
    let reader = ReaderBuilder::new()
        .trim(Trim::All)
        .from_path(filepath)?;

    return Ok(reader);
}

/// Reads every row, keeping malformed ones as errors so the caller can skip them
pub fn read_transactions(filepath: PathBuf) -> Result<Vec<Result<InputTransaction>>> {
    let mut rdr = build_csv_reader(filepath)?;

    let rows = rdr
        .deserialize::<InputTransaction>()
        .map(|record| record.map_err(anyhow::Error::from))
        .collect();

    return Ok(rows);
}
