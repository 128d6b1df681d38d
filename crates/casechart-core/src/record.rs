// File: crates/casechart-core/src/record.rs
// Summary: Case record model plus opt-in date-label validation helpers.

use chrono::NaiveDate;
use thiserror::Error;

/// One dated observation: a reported count and its corrected count.
/// Records are immutable once loaded and ordered by date ascending;
/// the position in the slice defines the x-axis index.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CaseRecord {
    /// Short date label shown on the x-axis, e.g. "5/21".
    pub date_text: String,
    /// Reported case count for the day.
    pub number: u64,
    /// Corrected (backfilled) case count for the day.
    pub correct_number: u64,
}

impl CaseRecord {
    pub fn new(date_text: impl Into<String>, number: u64, correct_number: u64) -> Self {
        Self { date_text: date_text.into(), number, correct_number }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RecordError {
    #[error("invalid date label '{0}': expected M/D")]
    InvalidDateLabel(String),
    #[error("records out of order at index {index}: '{label}' is not after '{previous}'")]
    OutOfOrder { index: usize, label: String, previous: String },
}

/// Parse a "M/D" date label against a calendar year.
pub fn parse_date_label(date_text: &str, year: i32) -> Result<NaiveDate, RecordError> {
    let invalid = || RecordError::InvalidDateLabel(date_text.to_string());
    let (m, d) = date_text.split_once('/').ok_or_else(invalid)?;
    let month: u32 = m.trim().parse().map_err(|_| invalid())?;
    let day: u32 = d.trim().parse().map_err(|_| invalid())?;
    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(invalid)
}

/// Verify the documented precondition that records are sorted by date
/// ascending, with no duplicate days. Opt-in: callers that trust their
/// source can skip this entirely.
pub fn check_ascending(records: &[CaseRecord], year: i32) -> Result<(), RecordError> {
    let mut prev: Option<(NaiveDate, &str)> = None;
    for (index, r) in records.iter().enumerate() {
        let date = parse_date_label(&r.date_text, year)?;
        if let Some((prev_date, prev_label)) = prev {
            if date <= prev_date {
                return Err(RecordError::OutOfOrder {
                    index,
                    label: r.date_text.clone(),
                    previous: prev_label.to_string(),
                });
            }
        }
        prev = Some((date, &r.date_text));
    }
    Ok(())
}
