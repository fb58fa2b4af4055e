//! Command dispatch for a plotting front end
//!
//! A [`Session`] owns the dataset plus the view state a toolbar manipulates
//! (axis visibility, selected time window). Front ends translate button
//! presses into [`Command`]s and redraw from the session's trace accessors.

use std::ops::Range;
use std::path::PathBuf;

use crate::dataset::{Axis, AxisSeries, Dataset};
use crate::error::Result;
use crate::spectrum::{FftEngine, SpectrumResult};

/// User-triggerable verbs
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Load a three-column file with a new sampling period
    Import { path: PathBuf, period: f64 },

    /// Show or hide both traces of one axis
    ToggleAxis(Axis),

    /// Restrict spectra to the window `[start, end)` in seconds
    SelectRange { start: f64, end: f64 },

    /// Go back to spectra over the whole record
    ClearSelection,
}

/// What a dispatched command changed
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// New data is loaded; every trace needs a redraw
    Reloaded { samples: usize },

    VisibilityChanged { axis: Axis, visible: bool },

    /// Spectra now cover these sample indices
    SelectionChanged { indices: Range<usize> },

    /// Nothing to redraw (empty or reversed selection)
    Ignored,
}

/// Convert a time window to sample indices on `time_base`
///
/// Both bounds are located by binary search (first timestamp not below the
/// bound). Returns `None` when the window covers no samples.
pub fn time_window_to_indices(time_base: &[f64], start: f64, end: f64) -> Option<Range<usize>> {
    let lo = time_base.partition_point(|&t| t < start);
    let hi = time_base.partition_point(|&t| t < end).min(time_base.len());

    (hi > lo).then_some(lo..hi)
}

/// Dataset plus view state, driven by [`Command`]s
pub struct Session {
    dataset: Dataset,
    visible: AxisSeries<bool>,
    selection: Range<usize>,
    engine: FftEngine,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(Dataset::default())
    }
}

impl Session {
    pub fn new(dataset: Dataset) -> Self {
        let selection = 0..dataset.len();
        Self {
            dataset,
            visible: AxisSeries::new(true, true, true),
            selection,
            engine: FftEngine::new(),
        }
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    /// Sample indices the spectra are computed over
    pub fn selection(&self) -> Range<usize> {
        self.selection.clone()
    }

    pub fn is_visible(&self, axis: Axis) -> bool {
        self.visible[axis]
    }

    /// Run one command; errors leave the session unchanged
    pub fn dispatch(&mut self, command: Command) -> Result<Outcome> {
        match command {
            Command::Import { path, period } => {
                self.dataset.ingest(&path, period)?;
                self.selection = 0..self.dataset.len();
                Ok(Outcome::Reloaded {
                    samples: self.dataset.len(),
                })
            }
            Command::ToggleAxis(axis) => {
                let visible = !self.visible[axis];
                self.visible[axis] = visible;
                Ok(Outcome::VisibilityChanged { axis, visible })
            }
            Command::SelectRange { start, end } => {
                let time_base = self.dataset.time_base();
                match time_window_to_indices(&time_base, start, end) {
                    Some(indices) => {
                        self.selection = indices.clone();
                        Ok(Outcome::SelectionChanged { indices })
                    }
                    None => {
                        log::debug!("ignoring empty selection [{start}, {end})");
                        Ok(Outcome::Ignored)
                    }
                }
            }
            Command::ClearSelection => {
                self.selection = 0..self.dataset.len();
                Ok(Outcome::SelectionChanged {
                    indices: self.selection.clone(),
                })
            }
        }
    }

    /// `(time, value)` pairs of one axis for the raw-data plot
    pub fn raw_trace(&self, axis: Axis) -> (Vec<f64>, &[f64]) {
        (self.dataset.time_base(), self.dataset.raw_series(axis))
    }

    /// Spectrum of one axis over the current selection
    pub fn spectrum_trace(&mut self, axis: Axis) -> Result<SpectrumResult> {
        self.dataset
            .spectrum_with(&mut self.engine, axis, self.selection.clone())
    }

    /// Spectra of every visible axis over the current selection
    pub fn visible_spectra(&mut self) -> Result<Vec<(Axis, SpectrumResult)>> {
        let axes: Vec<Axis> = Axis::ALL
            .into_iter()
            .filter(|&axis| self.visible[axis])
            .collect();

        axes.into_iter()
            .map(|axis| Ok((axis, self.spectrum_trace(axis)?)))
            .collect()
    }
}
