use crate::error::{Result, ScrapeError};
use crate::results::ElectionRecord;
use std::io::Write;
use std::path::Path;

pub const DELIMITER: u8 = b';';

/// Column names taken from the first record, in its field order
pub fn header(records: &[ElectionRecord]) -> Result<Vec<String>> {
    let first = records.first().ok_or(ScrapeError::EmptyRecords)?;
    Ok(first.keys().map(str::to_string).collect())
}

/// Values of `record` laid out under `header`; missing columns become empty strings
fn row<'a>(record: &'a ElectionRecord, header: &[String], index: usize) -> Result<Vec<&'a str>> {
    if let Some(column) = record.keys().find(|key| !header.iter().any(|h| h == key)) {
        return Err(ScrapeError::UnexpectedColumn {
            column: column.to_string(),
            record: index,
        });
    }
    Ok(header
        .iter()
        .map(|column| record.get(column).unwrap_or(""))
        .collect())
}

/// Write `records` as semicolon-separated rows with CRLF line endings, header first.
///
/// Every row is checked against the header before anything is written.
pub fn write_records<W: Write>(writer: W, records: &[ElectionRecord]) -> Result<()> {
    let header = header(records)?;
    let rows = records
        .iter()
        .enumerate()
        .map(|(i, record)| row(record, &header, i))
        .collect::<Result<Vec<_>>>()?;

    let mut csv_writer = csv::WriterBuilder::new()
        .delimiter(DELIMITER)
        .terminator(csv::Terminator::CRLF)
        .quote_style(csv::QuoteStyle::Necessary)
        .from_writer(writer);

    csv_writer.write_record(&header)?;
    for row in rows {
        csv_writer.write_record(row)?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// Write `records` to the file at `path`.
///
/// The file is only created once the records have been checked, so an empty
/// list or a record that does not fit the header leaves no file behind.
pub fn save_to_file<P: AsRef<Path>>(path: P, records: &[ElectionRecord]) -> Result<()> {
    let path = path.as_ref();
    let mut buf = Vec::new();
    write_records(&mut buf, records)?;

    std::fs::write(path, buf)?;
    ::log::info!("Wrote {} records to {}", records.len(), path.display());
    Ok(())
}
