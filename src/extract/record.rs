//! Structured permit record produced by the extractor.

use serde::{Deserialize, Serialize};

/// One extracted work-permit record.
///
/// A record exists only for messages whose sanitized text matched a permit
/// keyword; `permit_type` is therefore never empty on an emitted record.
/// Every other extracted field is representable as absent (empty string) so
/// no extraction step can fail. Records are immutable once constructed and
/// keep the tokenizer's original ordering.
///
/// Field names serialize in camelCase (`permitType`, `permitNumber`, ...) so
/// JSON output and CSV headers line up with the consuming spreadsheet
/// tooling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PermitRecord {
    /// Message author.
    pub sender: String,

    /// Sanitized message text.
    pub text: String,

    /// Calendar date of the message in `YYYY-MM-DD` (UTC), empty if the
    /// message had no parseable timestamp.
    pub date: String,

    /// Time of day in `HH:MM:SS` (UTC), empty if no parseable timestamp.
    pub time: String,

    /// Matched permit keyword, uppercased (e.g. "PTW").
    pub permit_type: String,

    /// Digit run following the permit keyword, or empty.
    pub permit_number: String,

    /// Digit run following a station marker, or empty.
    pub station_number: String,

    /// Captured "issued by" text, possibly defaulted to the sender, or empty.
    pub issued_by: String,

    /// Captured "issued to" text, possibly defaulted to the sender, or empty.
    pub issued_to: String,

    /// Digit run following a remark/note label, or empty. Populated only
    /// when the extraction policy enables remarks.
    pub remark: String,
}

impl PermitRecord {
    /// Field names in serialization order, as used for CSV headers.
    pub fn field_names() -> &'static [&'static str] {
        &[
            "sender",
            "text",
            "date",
            "time",
            "permitType",
            "permitNumber",
            "stationNumber",
            "issuedBy",
            "issuedTo",
            "remark",
        ]
    }

    /// Field values in serialization order, as used for CSV rows.
    pub fn field_values(&self) -> [&str; 10] {
        [
            &self.sender,
            &self.text,
            &self.date,
            &self.time,
            &self.permit_type,
            &self.permit_number,
            &self.station_number,
            &self.issued_by,
            &self.issued_to,
            &self.remark,
        ]
    }
}
