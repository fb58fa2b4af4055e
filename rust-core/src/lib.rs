//! Tri-axial spectrum inspection core
//!
//! Owns X/Y/Z sensor recordings, derives their time base and computes the
//! amplitude spectrum of any selected window. Optional Python bindings feed a
//! plotting front end.

// Suppress PyO3 non-local impl warnings (harmless macro-generated code)
#![cfg_attr(feature = "python", allow(non_local_definitions))]

pub mod commands;
pub mod dataset;
pub mod error;
pub mod spectrum;
#[cfg(feature = "python")]
pub mod python_bindings;

pub use commands::{Command, Outcome, Session};
pub use dataset::{Axis, AxisSeries, Dataset, DatasetConfig, IngestOptions};
pub use error::{Result, SpectralError};
pub use spectrum::{FftEngine, SpectrumResult};
