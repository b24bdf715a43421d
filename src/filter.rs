//! Filter extracted records by a cutoff date.
//!
//! This module provides [`DateFilter`] for defining the cutoff and
//! [`apply_cutoff`] for filtering record collections.
//!
//! # Behavior Notes
//!
//! - Comparison is on date granularity only; the time-of-day field is
//!   ignored.
//! - With no cutoff, all records pass through unchanged.
//! - Records with an empty or unparseable `date` are **excluded** when a
//!   cutoff is active.
//! - An invalid cutoff string is a validation error at the boundary
//!   ([`PermitScanError::InvalidDate`]), never silent corruption.
//!
//! # Example
//!
//! ```
//! use permitscan::filter::DateFilter;
//!
//! # fn main() -> permitscan::error::Result<()> {
//! let filter = DateFilter::new().with_cutoff("2024-06-01")?;
//! assert!(filter.is_active());
//! # Ok(())
//! # }
//! ```

use chrono::NaiveDate;

use crate::error::PermitScanError;
use crate::extract::PermitRecord;

/// Configuration for cutoff-date filtering.
#[derive(Debug, Clone, Copy, Default)]
pub struct DateFilter {
    /// Retain only records dated on or after this day.
    pub cutoff: Option<NaiveDate>,
}

impl DateFilter {
    /// Creates an empty filter; all records pass through.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the cutoff date (inclusive) from a `YYYY-MM-DD` string.
    ///
    /// # Errors
    ///
    /// Returns [`PermitScanError::InvalidDate`] if the format is invalid.
    pub fn with_cutoff(mut self, date_str: &str) -> Result<Self, PermitScanError> {
        let date = NaiveDate::parse_from_str(date_str, "%Y-%m-%d")
            .map_err(|_| PermitScanError::invalid_date(date_str))?;
        self.cutoff = Some(date);
        Ok(self)
    }

    /// Sets the cutoff directly from a parsed date.
    #[must_use]
    pub fn with_cutoff_date(mut self, date: NaiveDate) -> Self {
        self.cutoff = Some(date);
        self
    }

    /// Returns `true` if a cutoff is set.
    pub fn is_active(&self) -> bool {
        self.cutoff.is_some()
    }

    /// Returns `true` if the record survives the cutoff.
    pub fn retains(&self, record: &PermitRecord) -> bool {
        let Some(cutoff) = self.cutoff else {
            return true;
        };
        match NaiveDate::parse_from_str(&record.date, "%Y-%m-%d") {
            Ok(date) => date >= cutoff,
            // No usable date - exclude from date-filtered results
            Err(_) => false,
        }
    }
}

/// Filters a collection of records by the cutoff date.
///
/// Returns a new vector containing only records dated on or after the
/// cutoff, preserving order. If no cutoff is set, returns the records
/// unchanged.
///
/// # Example
///
/// ```
/// use permitscan::filter::{DateFilter, apply_cutoff};
/// use permitscan::extract::PermitRecord;
///
/// # fn main() -> permitscan::error::Result<()> {
/// # let mut record = PermitRecord {
/// #     sender: "Alice".into(), text: "PTW 1".into(),
/// #     date: "2024-06-02".into(), time: "10:00:00".into(),
/// #     permit_type: "PTW".into(), permit_number: "1".into(),
/// #     station_number: String::new(), issued_by: String::new(),
/// #     issued_to: String::new(), remark: String::new(),
/// # };
/// let filter = DateFilter::new().with_cutoff("2024-06-01")?;
/// let kept = apply_cutoff(vec![record], &filter);
/// assert_eq!(kept.len(), 1);
/// # Ok(())
/// # }
/// ```
pub fn apply_cutoff(records: Vec<PermitRecord>, filter: &DateFilter) -> Vec<PermitRecord> {
    if !filter.is_active() {
        return records;
    }

    records.into_iter().filter(|r| filter.retains(r)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_record(date: &str) -> PermitRecord {
        PermitRecord {
            sender: "Alice".into(),
            text: "PTW 1".into(),
            date: date.into(),
            time: "12:00:00".into(),
            permit_type: "PTW".into(),
            permit_number: "1".into(),
            station_number: String::new(),
            issued_by: String::new(),
            issued_to: String::new(),
            remark: String::new(),
        }
    }

    #[test]
    fn test_cutoff_keeps_on_or_after() {
        let records = vec![
            make_record("2024-05-30"),
            make_record("2024-06-01"),
            make_record("2024-06-02"),
        ];
        let filter = DateFilter::new().with_cutoff("2024-06-01").unwrap();
        let kept = apply_cutoff(records, &filter);
        assert_eq!(kept.len(), 2);
        assert_eq!(kept[0].date, "2024-06-01");
        assert_eq!(kept[1].date, "2024-06-02");
    }

    #[test]
    fn test_cutoff_boundary() {
        let records = vec![make_record("2024-05-30"), make_record("2024-06-02")];
        let filter = DateFilter::new().with_cutoff("2024-06-01").unwrap();
        let kept = apply_cutoff(records, &filter);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].date, "2024-06-02");
    }

    #[test]
    fn test_no_cutoff_passes_everything() {
        let records = vec![make_record("2024-05-30"), make_record("")];
        let kept = apply_cutoff(records, &DateFilter::new());
        assert_eq!(kept.len(), 2);
    }

    #[test]
    fn test_empty_date_excluded_when_cutoff_active() {
        let records = vec![make_record("2024-06-02"), make_record("")];
        let filter = DateFilter::new().with_cutoff("2024-01-01").unwrap();
        let kept = apply_cutoff(records, &filter);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].date, "2024-06-02");
    }

    #[test]
    fn test_unparseable_date_excluded_when_cutoff_active() {
        let records = vec![make_record("not-a-date")];
        let filter = DateFilter::new().with_cutoff("2024-01-01").unwrap();
        assert!(apply_cutoff(records, &filter).is_empty());
    }

    #[test]
    fn test_invalid_cutoff_format() {
        let result = DateFilter::new().with_cutoff("01-06-2024");
        assert!(matches!(result, Err(PermitScanError::InvalidDate { .. })));
    }

    #[test]
    fn test_order_preserved() {
        let records = vec![
            make_record("2024-06-03"),
            make_record("2024-06-01"),
            make_record("2024-06-02"),
        ];
        let filter = DateFilter::new().with_cutoff("2024-06-01").unwrap();
        let kept = apply_cutoff(records, &filter);
        let dates: Vec<&str> = kept.iter().map(|r| r.date.as_str()).collect();
        assert_eq!(dates, vec!["2024-06-03", "2024-06-01", "2024-06-02"]);
    }
}
