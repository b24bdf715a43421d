//! CSV output writer.

use std::fs::File;
use std::io::Write;

use crate::error::Result;
use crate::extract::PermitRecord;

/// Writes records to CSV with semicolon delimiter.
///
/// # Format
/// - Delimiter: `;`
/// - Columns: one per record field, camelCase headers
///   (`sender`, `text`, `date`, `time`, `permitType`, `permitNumber`,
///   `stationNumber`, `issuedBy`, `issuedTo`, `remark`)
/// - Encoding: UTF-8
pub fn write_csv(records: &[PermitRecord], output_path: &str) -> Result<()> {
    let file = File::create(output_path)?;
    let mut writer = csv::WriterBuilder::new()
        .delimiter(b';')
        .from_writer(file);

    write_records(&mut writer, records)?;
    writer.flush()?;
    Ok(())
}

/// Converts records to a CSV string.
pub fn to_csv(records: &[PermitRecord]) -> Result<String> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(b';')
        .from_writer(Vec::new());

    write_records(&mut writer, records)?;
    let bytes = writer
        .into_inner()
        .map_err(|e| std::io::Error::other(e.to_string()))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

fn write_records<W: Write>(writer: &mut csv::Writer<W>, records: &[PermitRecord]) -> Result<()> {
    writer.write_record(PermitRecord::field_names())?;
    for record in records {
        writer.write_record(record.field_values())?;
    }
    Ok(())
}
