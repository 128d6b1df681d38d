// File: crates/casechart-core/tests/presenter.rs
// Purpose: Validate the presenter flow against a recording fake surface.

use casechart_core::{
    CaseRecord, ChartFrame, ChartPresenter, ChartSurface, DisplayMode, CORRECTED_LABEL,
    REPORTED_LABEL,
};

/// Captures what each display call handed over, without drawing anything.
#[derive(Default)]
struct RecordingSurface {
    frames: Vec<(Vec<String>, f64, (f64, f64))>,
    clears: usize,
}

impl ChartSurface for RecordingSurface {
    fn display(&mut self, frame: &ChartFrame<'_>) {
        let labels = frame.series.iter().map(|s| s.label.clone()).collect();
        self.frames.push((labels, frame.layout.bar_width, frame.x_bounds));
    }

    fn clear(&mut self) {
        self.clears += 1;
    }
}

fn sample() -> Vec<CaseRecord> {
    vec![CaseRecord::new("5/1", 10, 12), CaseRecord::new("5/2", 20, 18)]
}

#[test]
fn show_presents_single_frame_then_toggle_presents_grouped() {
    let mut presenter = ChartPresenter::new(sample(), RecordingSurface::default());

    presenter.show();
    assert_eq!(presenter.mode(), DisplayMode::Single);

    let mode = presenter.toggle();
    assert_eq!(mode, DisplayMode::Grouped);

    let frames = &presenter.surface().frames;
    assert_eq!(frames.len(), 2);

    let (labels, width, bounds) = &frames[0];
    assert_eq!(labels, &vec![REPORTED_LABEL.to_string()]);
    assert_eq!(*width, 0.5);
    assert_eq!(*bounds, (-0.5, 1.5));

    let (labels, width, _) = &frames[1];
    assert_eq!(
        labels,
        &vec![REPORTED_LABEL.to_string(), CORRECTED_LABEL.to_string()]
    );
    assert_eq!(*width, 0.3);
}

#[test]
fn toggling_twice_returns_to_single() {
    let mut presenter = ChartPresenter::new(sample(), RecordingSurface::default());
    presenter.toggle();
    assert_eq!(presenter.toggle(), DisplayMode::Single);
    assert_eq!(presenter.surface().frames.last().unwrap().1, 0.5);
}

#[test]
fn empty_records_clear_the_surface() {
    let mut presenter = ChartPresenter::new(Vec::new(), RecordingSurface::default());
    presenter.show();
    presenter.toggle();
    assert_eq!(presenter.surface().frames.len(), 0);
    assert_eq!(presenter.surface().clears, 2);
}
