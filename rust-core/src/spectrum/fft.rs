//! FFT engine using realfft for real-valued signals
//!
//! Produces the one-sided amplitude spectrum of a rectangular (untapered) window

use num_complex::Complex;
use realfft::RealFftPlanner;
use serde::Serialize;

use crate::error::{validate_period, Result, SpectralError};

/// One-sided amplitude spectrum
///
/// Both vectors hold `floor(n / 2)` bins for an FFT over `n` samples.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SpectrumResult {
    /// Bin frequencies in Hz, `k / (n * period)`
    pub frequency: Vec<f64>,

    /// Bin amplitudes, `(2 / n) * |X[k]|`
    pub magnitude: Vec<f64>,
}

impl SpectrumResult {
    /// Number of frequency bins
    pub fn len(&self) -> usize {
        self.frequency.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frequency.is_empty()
    }

    /// Frequency resolution in Hz (spacing between adjacent bins)
    pub fn resolution(&self) -> Option<f64> {
        self.frequency.get(1).map(|&f| f - self.frequency[0])
    }

    /// `(frequency, magnitude)` of the strongest bin
    pub fn peak(&self) -> Option<(f64, f64)> {
        self.magnitude
            .iter()
            .enumerate()
            .fold(None, |best: Option<(usize, f64)>, (idx, &mag)| match best {
                Some((_, best_mag)) if best_mag >= mag => best,
                _ => Some((idx, mag)),
            })
            .map(|(idx, mag)| (self.frequency[idx], mag))
    }
}

/// FFT engine for real-valued signals
///
/// Caches plans by length, so repeated queries over selections of the same
/// size only pay for planning once.
pub struct FftEngine {
    planner: RealFftPlanner<f64>,
}

impl Default for FftEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl FftEngine {
    pub fn new() -> Self {
        Self {
            planner: RealFftPlanner::<f64>::new(),
        }
    }

    /// Compute the one-sided amplitude spectrum of `signal`
    ///
    /// # Arguments
    /// * `signal` - Samples, taken whole (no windowing, no zero-padding)
    /// * `period` - Sampling period in seconds
    ///
    /// # Returns
    /// `floor(n/2)` bins; the Nyquist bin and, for odd `n`, the last unpaired
    /// bin are dropped. A single sample yields an empty result.
    pub fn spectrum(&mut self, signal: &[f64], period: f64) -> Result<SpectrumResult> {
        validate_period(period)?;

        let n = signal.len();
        if n == 0 {
            return Err(SpectralError::InvalidInput(
                "cannot compute a spectrum over zero samples".into(),
            ));
        }

        let num_bins = n / 2;
        if num_bins == 0 {
            return Ok(SpectrumResult::default());
        }

        let r2c = self.planner.plan_fft_forward(n);

        // realfft uses the input as scratch space
        let mut input_buffer = r2c.make_input_vec();
        input_buffer.copy_from_slice(signal);
        let mut output_buffer: Vec<Complex<f64>> = r2c.make_output_vec();

        r2c.process(&mut input_buffer, &mut output_buffer)
            .map_err(|e| SpectralError::InvalidInput(format!("FFT processing failed: {e}")))?;

        let n_f = n as f64;
        let scale = 2.0 / n_f;
        let frequency = (0..num_bins).map(|k| k as f64 / (n_f * period)).collect();
        let magnitude = output_buffer[..num_bins]
            .iter()
            .map(|c| scale * c.norm())
            .collect();

        log::debug!("computed {num_bins} spectrum bins over {n} samples at {period} s");

        Ok(SpectrumResult { frequency, magnitude })
    }
}

/// Compute the one-sided amplitude spectrum of `series` sampled every `period` seconds
pub fn compute_spectrum(series: &[f64], period: f64) -> Result<SpectrumResult> {
    FftEngine::new().spectrum(series, period)
}
