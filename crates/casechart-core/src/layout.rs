// File: crates/casechart-core/src/layout.rs
// Summary: Mode-dependent bar layout parameters handed to the chart surface.

use crate::state::DisplayMode;

/// Numeric layout parameters for the bar surface. The surface's own
/// grouping math is opaque to the core; these are only its inputs.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BarLayout {
    /// Width of one bar in x-axis units.
    pub bar_width: f64,
    /// Gap between bar groups, in x-axis units. Grouped mode only.
    pub group_space: Option<f64>,
    /// Gap between bars inside a group, in x-axis units. Grouped mode only.
    pub bar_space: Option<f64>,
    /// X coordinate where group layout starts. Grouped mode only.
    pub group_from_x: Option<f64>,
}

impl BarLayout {
    pub fn for_mode(mode: DisplayMode) -> Self {
        match mode {
            DisplayMode::Single => Self {
                bar_width: 0.5,
                group_space: None,
                bar_space: None,
                group_from_x: None,
            },
            DisplayMode::Grouped => Self {
                bar_width: 0.3,
                group_space: Some(0.3),
                bar_space: Some(0.05),
                group_from_x: Some(-0.5),
            },
        }
    }

    pub fn is_grouped(&self) -> bool {
        self.group_space.is_some()
    }
}

/// X-axis bounds placing the first and last bars half a unit inside the
/// plot margins. Empty input gets a unit span around zero.
pub fn x_axis_bounds(record_count: usize) -> (f64, f64) {
    if record_count == 0 {
        return (-0.5, 0.5);
    }
    (-0.5, (record_count - 1) as f64 + 0.5)
}
