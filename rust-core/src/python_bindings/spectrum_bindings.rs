//! Python bindings for the stateless spectrum tools

use numpy::{PyArray1, PyReadonlyArray1};
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::spectrum;

pub(super) fn contiguous<'a>(array: &'a PyReadonlyArray1<f64>) -> PyResult<&'a [f64]> {
    array
        .as_slice()
        .map_err(|e| PyValueError::new_err(e.to_string()))
}

/// Subtract the mean from every sample
///
/// Args:
///     series: Samples as numpy array
///
/// Returns:
///     Zero-mean copy as numpy array
#[pyfunction]
pub fn remove_dc_offset<'py>(
    py: Python<'py>,
    series: PyReadonlyArray1<f64>,
) -> PyResult<&'py PyArray1<f64>> {
    let centered = spectrum::remove_dc_offset(contiguous(&series)?)?;
    Ok(PyArray1::from_vec(py, centered))
}

/// Timestamps 0, period, 2*period, ... for `length` samples
#[pyfunction]
pub fn generate_time_base<'py>(
    py: Python<'py>,
    length: usize,
    period: f64,
) -> PyResult<&'py PyArray1<f64>> {
    let time = spectrum::generate_time_base(length, period)?;
    Ok(PyArray1::from_vec(py, time))
}

/// One-sided amplitude spectrum
///
/// Args:
///     series: Samples as numpy array
///     period: Sampling period in seconds
///
/// Returns:
///     Tuple of (frequency, magnitude) numpy arrays, n // 2 bins each
#[pyfunction]
pub fn compute_spectrum<'py>(
    py: Python<'py>,
    series: PyReadonlyArray1<f64>,
    period: f64,
) -> PyResult<(&'py PyArray1<f64>, &'py PyArray1<f64>)> {
    let result = spectrum::compute_spectrum(contiguous(&series)?, period)?;
    Ok((
        PyArray1::from_vec(py, result.frequency),
        PyArray1::from_vec(py, result.magnitude),
    ))
}

/// Root mean square of a series
#[pyfunction]
pub fn compute_rms(series: PyReadonlyArray1<f64>) -> PyResult<f64> {
    Ok(spectrum::compute_rms(contiguous(&series)?)?)
}

/// Elementwise vector magnitude of three equally long series
#[pyfunction]
pub fn compute_resultant<'py>(
    py: Python<'py>,
    x: PyReadonlyArray1<f64>,
    y: PyReadonlyArray1<f64>,
    z: PyReadonlyArray1<f64>,
) -> PyResult<&'py PyArray1<f64>> {
    let resultant =
        spectrum::compute_resultant(contiguous(&x)?, contiguous(&y)?, contiguous(&z)?)?;
    Ok(PyArray1::from_vec(py, resultant))
}
