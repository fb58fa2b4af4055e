//! Three-axis measurement dataset
//!
//! Single owner of the loaded X/Y/Z series and their sampling period. Read
//! queries never mutate; `ingest` and `replace` swap period and all three
//! series together or not at all.

pub mod axis;
pub mod ingest;
pub mod synthetic;

use std::ops::{Bound, RangeBounds};
use std::path::Path;

pub use axis::{Axis, AxisSeries};
pub use ingest::{IngestOptions, parse_three_axis, read_three_axis};

use crate::error::{validate_period, Result, SpectralError};
use crate::spectrum::analysis::time_base;
use crate::spectrum::{compute_resultant, compute_rms, FftEngine, SpectrumResult};

/// Dataset construction configuration
#[derive(Debug, Clone)]
pub struct DatasetConfig {
    /// Sampling period in seconds
    pub sampling_period: f64,

    /// Length of the synthetic placeholder record in seconds
    pub duration: f64,

    /// Standard deviation of the Gaussian noise added to each tone
    pub noise_amplitude: f64,

    /// Noise seed; `None` draws from OS entropy
    pub seed: Option<u64>,
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            sampling_period: 0.001,
            duration: 5.0,
            noise_amplitude: 0.5,
            seed: None,
        }
    }
}

/// Loaded three-axis measurement
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    sampling_period: f64,
    series: AxisSeries<Vec<f64>>,
}

impl Default for Dataset {
    fn default() -> Self {
        let config = DatasetConfig::default();
        let n = synthetic::sample_count(config.duration, config.sampling_period).unwrap_or(0);
        Self {
            sampling_period: config.sampling_period,
            series: synthetic::generate(&config, n),
        }
    }
}

impl Dataset {
    /// Create a dataset filled with synthetic placeholder signals
    pub fn new(config: DatasetConfig) -> Result<Self> {
        validate_period(config.sampling_period)?;
        if !config.duration.is_finite() || config.duration < 0.0 {
            return Err(SpectralError::InvalidInput(format!(
                "duration must be a finite, non-negative number of seconds, got {}",
                config.duration
            )));
        }
        if !config.noise_amplitude.is_finite() {
            return Err(SpectralError::InvalidInput(format!(
                "noise amplitude must be finite, got {}",
                config.noise_amplitude
            )));
        }

        let n = synthetic::sample_count(config.duration, config.sampling_period).ok_or_else(|| {
            SpectralError::InvalidInput(format!(
                "{} s at {} s per sample exceeds {} placeholder samples",
                config.duration,
                config.sampling_period,
                synthetic::MAX_SAMPLES
            ))
        })?;

        Ok(Self {
            sampling_period: config.sampling_period,
            series: synthetic::generate(&config, n),
        })
    }

    /// Synthetic dataset at the given sampling period, other settings default
    pub fn with_period(sampling_period: f64) -> Result<Self> {
        Self::new(DatasetConfig {
            sampling_period,
            ..DatasetConfig::default()
        })
    }

    /// Dataset with zero samples on every axis
    pub fn empty(sampling_period: f64) -> Result<Self> {
        validate_period(sampling_period)?;
        Ok(Self {
            sampling_period,
            series: AxisSeries::default(),
        })
    }

    /// Load a dataset straight from a three-column file
    pub fn from_file(path: impl AsRef<Path>, sampling_period: f64) -> Result<Self> {
        let mut dataset = Self::empty(sampling_period)?;
        dataset.ingest(path, sampling_period)?;
        Ok(dataset)
    }

    /// Sampling period in seconds
    pub fn sampling_period(&self) -> f64 {
        self.sampling_period
    }

    /// Samples per axis
    pub fn len(&self) -> usize {
        self.series.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Record length in seconds (`len * period`)
    pub fn duration(&self) -> f64 {
        self.len() as f64 * self.sampling_period
    }

    /// Timestamps `i * period`, one per sample
    pub fn time_base(&self) -> Vec<f64> {
        time_base(self.len(), self.sampling_period)
    }

    /// Stored samples of one axis
    pub fn raw_series(&self, axis: Axis) -> &[f64] {
        &self.series[axis]
    }

    /// All three axes
    pub fn series(&self) -> &AxisSeries<Vec<f64>> {
        &self.series
    }

    /// Amplitude spectrum of `axis` over the sample range `range`
    ///
    /// Bounds past the end are clamped and a reversed range is empty, as with
    /// Python slices. An empty selection fails with `InvalidInput`.
    pub fn spectrum<R: RangeBounds<usize>>(&self, axis: Axis, range: R) -> Result<SpectrumResult> {
        self.spectrum_with(&mut FftEngine::new(), axis, range)
    }

    /// Like [`Dataset::spectrum`], reusing the caller's FFT plans
    pub fn spectrum_with<R: RangeBounds<usize>>(
        &self,
        engine: &mut FftEngine,
        axis: Axis,
        range: R,
    ) -> Result<SpectrumResult> {
        let (start, end) = clamp_range(self.len(), &range);
        log::debug!("spectrum of axis {axis} over samples [{start}, {end})");

        engine.spectrum(&self.raw_series(axis)[start..end], self.sampling_period)
    }

    /// Root mean square of one axis
    pub fn rms(&self, axis: Axis) -> Result<f64> {
        compute_rms(self.raw_series(axis))
    }

    /// Vector magnitude `sqrt(x² + y² + z²)` per sample
    pub fn resultant(&self) -> Result<Vec<f64>> {
        compute_resultant(&self.series.x, &self.series.y, &self.series.z)
    }

    /// Replace all data with the three columns of a delimited file
    ///
    /// Columns have their DC offset removed. On any error the dataset is left
    /// exactly as it was.
    pub fn ingest(&mut self, path: impl AsRef<Path>, sampling_period: f64) -> Result<()> {
        self.ingest_with(path, sampling_period, &IngestOptions::default())
    }

    /// [`Dataset::ingest`] with explicit parsing options
    pub fn ingest_with(
        &mut self,
        path: impl AsRef<Path>,
        sampling_period: f64,
        options: &IngestOptions,
    ) -> Result<()> {
        let path = path.as_ref();

        let result = validate_period(sampling_period)
            .and_then(|()| read_three_axis(path, options))
            .and_then(|series| self.replace(series, sampling_period));

        match &result {
            Ok(()) => log::info!(
                "loaded {} samples per axis from {} at {} s",
                self.len(),
                path.display(),
                self.sampling_period
            ),
            Err(e) => log::warn!("rejected {}: {e}", path.display()),
        }

        result
    }

    /// Swap in already parsed series and a new sampling period
    ///
    /// Fails with `DimensionMismatch` on unequal axis lengths and
    /// `InvalidInput` on a bad period, leaving the dataset untouched.
    pub fn replace(&mut self, series: AxisSeries<Vec<f64>>, sampling_period: f64) -> Result<()> {
        validate_period(sampling_period)?;

        let (x, y, z) = (series.x.len(), series.y.len(), series.z.len());
        if x != y || x != z {
            return Err(SpectralError::DimensionMismatch { x, y, z });
        }

        self.sampling_period = sampling_period;
        self.series = series;
        Ok(())
    }
}

/// Resolve `range` to `[start, end)` within `0..len`
fn clamp_range<R: RangeBounds<usize>>(len: usize, range: &R) -> (usize, usize) {
    let start = match range.start_bound() {
        Bound::Included(&s) => s,
        Bound::Excluded(&s) => s.saturating_add(1),
        Bound::Unbounded => 0,
    };
    let end = match range.end_bound() {
        Bound::Included(&e) => e.saturating_add(1),
        Bound::Excluded(&e) => e,
        Bound::Unbounded => len,
    };

    let end = end.min(len);
    (start.min(end), end)
}
