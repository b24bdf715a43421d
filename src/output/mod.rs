//! Output format writers.
//!
//! This module provides writers for the supported output formats:
//! - [`write_csv`] / [`to_csv`] - semicolon-delimited CSV, one column per
//!   record field - requires `csv-output` feature
//! - [`write_json`] / [`to_json`] - JSON array of records - requires
//!   `json-output` feature
//!
//! # Example
//!
//! ```rust,no_run
//! # #[cfg(all(feature = "csv-output", feature = "json-output"))]
//! # fn main() -> permitscan::error::Result<()> {
//! use permitscan::output::{write_csv, write_json, to_csv};
//!
//! let records = vec![];
//! write_csv(&records, "permits.csv")?;
//! write_json(&records, "permits.json")?;
//! let csv_string = to_csv(&records)?;
//! # Ok(())
//! # }
//! # #[cfg(not(all(feature = "csv-output", feature = "json-output")))]
//! # fn main() {}
//! ```

#[cfg(feature = "csv-output")]
mod csv_writer;
#[cfg(feature = "json-output")]
mod json_writer;

#[cfg(feature = "csv-output")]
pub use csv_writer::{to_csv, write_csv};
#[cfg(feature = "json-output")]
pub use json_writer::{to_json, write_json};
