use rtfd::history_report::build_report;
use rtfd::{History, Result};

use csv::Writer;

pub fn build_csv_writer() -> Writer<Vec<u8>> {
    return Writer::from_writer(vec![]);
}

pub fn write_to_string(writer: Writer<Vec<u8>>) -> Result<String> {
    let utf8 = writer.into_inner()?;
    let string = String::from_utf8(utf8)?;
    return Ok(string);
}

/// Renders the whole history as a CSV table
pub fn write_history(history: &History) -> Result<String> {
    let mut wtr = build_csv_writer();

    for row in build_report(history) {
        log::debug!("Serializing history row: {row:?}");
        wtr.serialize(row)?;
    }

    return write_to_string(wtr);
}
