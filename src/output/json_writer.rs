//! JSON output writer.

use std::fs::File;
use std::io::BufWriter;

use crate::error::Result;
use crate::extract::PermitRecord;

/// Writes records to a JSON array file.
///
/// # Format
/// - Pretty-printed JSON array
/// - camelCase field names (`permitType`, `permitNumber`, ...)
/// - Encoding: UTF-8
pub fn write_json(records: &[PermitRecord], output_path: &str) -> Result<()> {
    let file = File::create(output_path)?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, records)?;
    Ok(())
}

/// Converts records to a JSON array string.
pub fn to_json(records: &[PermitRecord]) -> Result<String> {
    Ok(serde_json::to_string_pretty(records)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Read;
    use tempfile::NamedTempFile;

    fn sample() -> PermitRecord {
        PermitRecord {
            sender: "Alice".into(),
            text: "LOA#12 SS 7".into(),
            date: "2024-06-15".into(),
            time: "10:30:00".into(),
            permit_type: "LOA".into(),
            permit_number: "12".into(),
            station_number: "7".into(),
            issued_by: String::new(),
            issued_to: String::new(),
            remark: String::new(),
        }
    }

    #[test]
    fn test_write_json() {
        let temp_file = NamedTempFile::new().unwrap();
        let path = temp_file.path().to_str().unwrap();

        write_json(&[sample()], path).unwrap();

        let mut content = String::new();
        std::fs::File::open(path)
            .unwrap()
            .read_to_string(&mut content)
            .unwrap();

        assert!(content.trim_start().starts_with('['));
        assert!(content.contains("\"permitType\": \"LOA\""));
        assert!(content.contains("\"stationNumber\": \"7\""));
    }

    #[test]
    fn test_to_json_roundtrip() {
        let json = to_json(&[sample()]).unwrap();
        let parsed: Vec<PermitRecord> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, vec![sample()]);
    }

    #[test]
    fn test_to_json_empty() {
        assert_eq!(to_json(&[]).unwrap(), "[]");
    }
}
