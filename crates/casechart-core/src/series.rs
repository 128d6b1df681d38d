// File: crates/casechart-core/src/series.rs
// Summary: Series model and the pure record-to-series builder.

use crate::record::CaseRecord;

/// Which count of a record feeds the series values.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ValueField {
    Reported,
    Corrected,
}

impl ValueField {
    #[inline]
    pub fn value_of(self, record: &CaseRecord) -> f64 {
        match self {
            ValueField::Reported => record.number as f64,
            ValueField::Corrected => record.correct_number as f64,
        }
    }
}

/// A labeled, ordered sequence of (index, value) points for charting.
/// Contract: points carry contiguous indices 0..len, matching record order.
#[derive(Clone, Debug, PartialEq)]
pub struct Series {
    pub label: String,
    pub points: Vec<(usize, f64)>,
}

impl Series {
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Map records into a labeled series, one point per record, value taken
/// from `field`, index = record position. Pure; empty input yields an
/// empty series.
pub fn build_series(records: &[CaseRecord], field: ValueField, label: impl Into<String>) -> Series {
    let points = records
        .iter()
        .enumerate()
        .map(|(index, r)| (index, field.value_of(r)))
        .collect();
    Series { label: label.into(), points }
}
