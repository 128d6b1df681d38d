// File: crates/casechart-core/src/labels.rs
// Summary: Axis-label lookup keyed by point index.

use crate::record::CaseRecord;

/// Maps a point index back to its record's date label, for x-axis
/// formatting by the presentation layer. The core never produces an
/// index outside [0, len); out-of-range lookups answer `None`.
#[derive(Clone, Copy, Debug)]
pub struct AxisLabels<'a> {
    records: &'a [CaseRecord],
}

impl<'a> AxisLabels<'a> {
    pub fn new(records: &'a [CaseRecord]) -> Self {
        Self { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn label(&self, index: usize) -> Option<&'a str> {
        self.records.get(index).map(|r| r.date_text.as_str())
    }
}
