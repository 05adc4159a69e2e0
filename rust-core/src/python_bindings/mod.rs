//! PyO3 bindings for Python integration

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::error::FftError;

mod spectrum_bindings;
mod transform_bindings;

impl From<FftError> for PyErr {
    fn from(err: FftError) -> Self {
        PyValueError::new_err(err.to_string())
    }
}

/// Python module definition
#[pymodule]
fn fourier_engine(_py: Python, m: &PyModule) -> PyResult<()> {
    m.add_class::<transform_bindings::PyTransform>()?;
    m.add_class::<spectrum_bindings::PySpectrumAnalyzer>()?;
    m.add_class::<spectrum_bindings::PyWindowType>()?;

    Ok(())
}
