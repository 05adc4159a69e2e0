//! Python bindings for in-place transforms

use numpy::{Complex64, PyReadwriteArray1};
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::engine::{Backend, FourierTransform, Transform, TransformConfig};

fn parse_backend(name: &str) -> PyResult<Backend> {
    match name {
        "native" => Ok(Backend::Native),
        "vendor" => Ok(Backend::Vendor),
        other => Err(PyValueError::new_err(format!(
            "Unknown backend '{}' (expected 'native' or 'vendor')",
            other
        ))),
    }
}

/// Transform exposed to Python
#[pyclass(name = "Transform")]
#[derive(Clone)]
pub struct PyTransform {
    transform: Transform,
}

impl PyTransform {
    fn buffer_of<'a>(
        &self,
        buffer: &'a mut PyReadwriteArray1<'_, Complex64>,
    ) -> PyResult<&'a mut [Complex64]> {
        let size = self.transform.size();
        let slice = buffer
            .as_slice_mut()
            .map_err(|e| PyValueError::new_err(e.to_string()))?;
        if slice.len() != size {
            return Err(PyValueError::new_err(format!(
                "Buffer length {} does not match transform size {}",
                slice.len(),
                size
            )));
        }
        Ok(slice)
    }
}

#[pymethods]
impl PyTransform {
    /// Create a new transform
    ///
    /// Args:
    ///     size: Number of samples
    ///     forward_scale: Factor applied after forward() (default: 1/size)
    ///     inverse_scale: Factor applied after inverse() (default: 1)
    ///     backend: "native" or "vendor"
    #[new]
    #[pyo3(signature = (size, forward_scale=None, inverse_scale=None, backend="native"))]
    fn new(
        size: usize,
        forward_scale: Option<f64>,
        inverse_scale: Option<f64>,
        backend: &str,
    ) -> PyResult<Self> {
        let config = TransformConfig {
            backend: parse_backend(backend)?,
            forward_scale,
            inverse_scale,
        };

        Ok(Self {
            transform: Transform::with_config(size, &config)?,
        })
    }

    /// Forward transform of a contiguous complex128 array, in place
    fn forward(&self, mut buffer: PyReadwriteArray1<Complex64>) -> PyResult<()> {
        let slice = self.buffer_of(&mut buffer)?;
        self.transform.forward(slice);
        Ok(())
    }

    /// Inverse transform of a contiguous complex128 array, in place
    fn inverse(&self, mut buffer: PyReadwriteArray1<Complex64>) -> PyResult<()> {
        let slice = self.buffer_of(&mut buffer)?;
        self.transform.inverse(slice);
        Ok(())
    }

    #[getter]
    fn size(&self) -> usize {
        self.transform.size()
    }

    #[getter]
    fn forward_scale(&self) -> f64 {
        self.transform.forward_scale()
    }

    #[getter]
    fn inverse_scale(&self) -> f64 {
        self.transform.inverse_scale()
    }

    #[getter]
    fn backend(&self) -> &'static str {
        match self.transform.backend() {
            Backend::Native => "native",
            Backend::Vendor => "vendor",
        }
    }
}
