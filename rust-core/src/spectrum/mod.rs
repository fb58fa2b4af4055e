//! Spectral analysis with FFT

pub mod fft;
pub mod analysis;

pub use fft::{FftEngine, SpectrumResult, compute_spectrum};
pub use analysis::{compute_resultant, compute_rms, generate_time_base, remove_dc_offset};
