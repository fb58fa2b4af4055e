//! Python bindings for the three-axis dataset

use std::path::PathBuf;

use numpy::PyArray1;
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::dataset::{Axis, Dataset, DatasetConfig, IngestOptions};
use crate::spectrum::FftEngine;

/// Three-axis dataset exposed to Python
///
/// Axes are named "x", "y" or "z".
#[pyclass(name = "Dataset", unsendable)]
pub struct PyDataset {
    dataset: Dataset,
    engine: FftEngine,
}

impl PyDataset {
    fn wrap(dataset: Dataset) -> Self {
        Self {
            dataset,
            engine: FftEngine::new(),
        }
    }
}

#[pymethods]
impl PyDataset {
    /// Create a dataset filled with synthetic placeholder signals
    ///
    /// Args:
    ///     sampling_period: Seconds between samples
    ///     duration: Length of the placeholder record in seconds
    ///     seed: Noise seed (None for a random one)
    #[new]
    #[pyo3(signature = (sampling_period=0.001, duration=5.0, seed=None))]
    fn new(sampling_period: f64, duration: f64, seed: Option<u64>) -> PyResult<Self> {
        let config = DatasetConfig {
            sampling_period,
            duration,
            seed,
            ..DatasetConfig::default()
        };
        Ok(Self::wrap(Dataset::new(config)?))
    }

    /// Create a dataset with no samples
    #[staticmethod]
    fn empty(sampling_period: f64) -> PyResult<Self> {
        Ok(Self::wrap(Dataset::empty(sampling_period)?))
    }

    /// Load a dataset from a three-column file
    #[staticmethod]
    fn from_file(path: PathBuf, sampling_period: f64) -> PyResult<Self> {
        Ok(Self::wrap(Dataset::from_file(path, sampling_period)?))
    }

    #[getter]
    fn sampling_period(&self) -> f64 {
        self.dataset.sampling_period()
    }

    fn __len__(&self) -> usize {
        self.dataset.len()
    }

    /// Timestamps in seconds, one per sample
    fn time_base<'py>(&self, py: Python<'py>) -> &'py PyArray1<f64> {
        PyArray1::from_vec(py, self.dataset.time_base())
    }

    /// Stored samples of one axis
    fn raw_series<'py>(&self, py: Python<'py>, axis: &str) -> PyResult<&'py PyArray1<f64>> {
        let axis: Axis = axis.parse()?;
        Ok(PyArray1::from_slice(py, self.dataset.raw_series(axis)))
    }

    /// Amplitude spectrum over samples [index_min, index_max)
    ///
    /// Args:
    ///     axis: "x", "y" or "z"
    ///     index_min: First sample
    ///     index_max: End sample (exclusive); None or negative for the end
    ///
    /// Returns:
    ///     Tuple of (frequency, magnitude) numpy arrays
    #[pyo3(signature = (axis, index_min=0, index_max=None))]
    fn spectrum<'py>(
        &mut self,
        py: Python<'py>,
        axis: &str,
        index_min: usize,
        index_max: Option<isize>,
    ) -> PyResult<(&'py PyArray1<f64>, &'py PyArray1<f64>)> {
        let axis: Axis = axis.parse()?;
        let result = match index_max {
            Some(end) if end >= 0 => {
                self.dataset
                    .spectrum_with(&mut self.engine, axis, index_min..end as usize)?
            }
            _ => self.dataset.spectrum_with(&mut self.engine, axis, index_min..)?,
        };

        Ok((
            PyArray1::from_vec(py, result.frequency),
            PyArray1::from_vec(py, result.magnitude),
        ))
    }

    /// Replace all data with the columns of a delimited file
    ///
    /// Args:
    ///     path: File with three numeric columns, no header
    ///     sampling_period: New sampling period in seconds
    ///     delimiter: Single-character column separator
    ///     remove_dc: Subtract each column's mean
    #[pyo3(signature = (path, sampling_period, delimiter=",", remove_dc=true))]
    fn ingest(
        &mut self,
        path: PathBuf,
        sampling_period: f64,
        delimiter: &str,
        remove_dc: bool,
    ) -> PyResult<()> {
        let delimiter = match delimiter.as_bytes() {
            [byte] => *byte,
            _ => {
                return Err(PyValueError::new_err(format!(
                    "delimiter must be a single byte, got {delimiter:?}"
                )))
            }
        };

        let options = IngestOptions { delimiter, remove_dc };
        self.dataset.ingest_with(path, sampling_period, &options)?;
        Ok(())
    }

    /// Root mean square of one axis
    fn rms(&self, axis: &str) -> PyResult<f64> {
        let axis: Axis = axis.parse()?;
        Ok(self.dataset.rms(axis)?)
    }

    /// Vector magnitude per sample
    fn resultant<'py>(&self, py: Python<'py>) -> PyResult<&'py PyArray1<f64>> {
        Ok(PyArray1::from_vec(py, self.dataset.resultant()?))
    }
}
