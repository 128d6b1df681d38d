// File: crates/casechart-core/src/lib.rs
// Summary: Core library entry point; exports the data-binding API for case-count bar charts.

pub mod record;
pub mod series;
pub mod state;
pub mod labels;
pub mod layout;
pub mod presenter;

pub use record::{CaseRecord, RecordError};
pub use series::{build_series, Series, ValueField};
pub use state::{ChartState, DisplayMode, CORRECTED_LABEL, REPORTED_LABEL};
pub use labels::AxisLabels;
pub use layout::BarLayout;
pub use presenter::{ChartFrame, ChartPresenter, ChartSurface};
