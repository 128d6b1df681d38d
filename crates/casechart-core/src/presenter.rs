// File: crates/casechart-core/src/presenter.rs
// Summary: Renderable-surface seam and the toggle-driven presenter flow.

use crate::labels::AxisLabels;
use crate::layout::{x_axis_bounds, BarLayout};
use crate::record::CaseRecord;
use crate::series::Series;
use crate::state::{ChartState, DisplayMode};

/// Everything a surface needs to draw one chart: the derived series, the
/// layout for the current mode, x-axis bounds, and the label lookup.
pub struct ChartFrame<'a> {
    pub series: Vec<Series>,
    pub layout: BarLayout,
    pub x_bounds: (f64, f64),
    pub labels: AxisLabels<'a>,
}

/// A renderable chart surface. Implementations own all visual concerns
/// (drawing, legends, the "no data" placeholder shown after `clear`).
pub trait ChartSurface {
    fn display(&mut self, frame: &ChartFrame<'_>);
    fn clear(&mut self);
}

/// Drives a surface from injected records: `show` pushes the current
/// frame, `toggle` flips the mode and pushes the new one. Mirrors a
/// single-screen view with one toggle button.
pub struct ChartPresenter<S: ChartSurface> {
    records: Vec<CaseRecord>,
    state: ChartState,
    surface: S,
}

impl<S: ChartSurface> ChartPresenter<S> {
    pub fn new(records: Vec<CaseRecord>, surface: S) -> Self {
        Self { records, state: ChartState::new(), surface }
    }

    pub fn mode(&self) -> DisplayMode {
        self.state.mode()
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Push the frame for the current mode; an empty record set clears
    /// the surface instead.
    pub fn show(&mut self) {
        if self.records.is_empty() {
            self.surface.clear();
            return;
        }
        let frame = ChartFrame {
            series: self.state.active_series(&self.records),
            layout: BarLayout::for_mode(self.state.mode()),
            x_bounds: x_axis_bounds(self.records.len()),
            labels: AxisLabels::new(&self.records),
        };
        self.surface.display(&frame);
    }

    /// The toggle-button handler: flip the mode, then re-present.
    pub fn toggle(&mut self) -> DisplayMode {
        let mode = self.state.toggle();
        self.show();
        mode
    }
}
