//! PyO3 bindings for Python integration

use pyo3::exceptions::{PyIOError, PyKeyError, PyValueError};
use pyo3::prelude::*;

use crate::error::SpectralError;

mod dataset_bindings;
mod spectrum_bindings;

impl From<SpectralError> for PyErr {
    fn from(err: SpectralError) -> Self {
        match err {
            SpectralError::UnknownAxis(_) => PyKeyError::new_err(err.to_string()),
            SpectralError::Io(_) => PyIOError::new_err(err.to_string()),
            SpectralError::InvalidInput(_)
            | SpectralError::DimensionMismatch { .. }
            | SpectralError::MalformedInput(_) => PyValueError::new_err(err.to_string()),
        }
    }
}

/// Python module definition
#[pymodule]
fn triax_spectrum(_py: Python, m: &PyModule) -> PyResult<()> {
    m.add_class::<dataset_bindings::PyDataset>()?;

    m.add_function(wrap_pyfunction!(spectrum_bindings::remove_dc_offset, m)?)?;
    m.add_function(wrap_pyfunction!(spectrum_bindings::generate_time_base, m)?)?;
    m.add_function(wrap_pyfunction!(spectrum_bindings::compute_spectrum, m)?)?;
    m.add_function(wrap_pyfunction!(spectrum_bindings::compute_rms, m)?)?;
    m.add_function(wrap_pyfunction!(spectrum_bindings::compute_resultant, m)?)?;

    Ok(())
}
