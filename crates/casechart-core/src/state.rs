// File: crates/casechart-core/src/state.rs
// Summary: Display-mode state machine and derivation of the active series set.

use crate::record::CaseRecord;
use crate::series::{build_series, Series, ValueField};

/// Legend label of the reported-count series.
pub const REPORTED_LABEL: &str = "reported count";
/// Legend label of the corrected-count series.
pub const CORRECTED_LABEL: &str = "corrected count";

/// How many series the chart displays.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DisplayMode {
    #[default]
    Single,
    Grouped,
}

impl DisplayMode {
    #[inline]
    pub fn flipped(self) -> Self {
        match self {
            DisplayMode::Single => DisplayMode::Grouped,
            DisplayMode::Grouped => DisplayMode::Single,
        }
    }
}

/// Chart display state. Lives for the view's lifetime, starts in `Single`,
/// and is only ever mutated by `toggle`. Not persisted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ChartState {
    mode: DisplayMode,
}

impl ChartState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> DisplayMode {
        self.mode
    }

    /// Flip Single <-> Grouped in place and return the new mode.
    pub fn toggle(&mut self) -> DisplayMode {
        self.mode = self.mode.flipped();
        self.mode
    }

    /// Derive the series set for the current mode. Grouped mode orders
    /// reported before corrected; the presentation layer relies on this
    /// for stable legend and coloring order.
    pub fn active_series(&self, records: &[CaseRecord]) -> Vec<Series> {
        let reported = build_series(records, ValueField::Reported, REPORTED_LABEL);
        match self.mode {
            DisplayMode::Single => vec![reported],
            DisplayMode::Grouped => vec![
                reported,
                build_series(records, ValueField::Corrected, CORRECTED_LABEL),
            ],
        }
    }
}
