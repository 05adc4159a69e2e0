//! Python bindings for spectrum analysis

use numpy::{PyArray1, PyReadonlyArray1};
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::spectrum::{AnalyzerConfig, SpectrumAnalyzer, WindowType};

/// Window type enum exposed to Python
#[pyclass(name = "WindowType")]
#[derive(Clone)]
pub enum PyWindowType {
    Hann,
    Hamming,
    Blackman,
    Rectangular,
}

impl From<PyWindowType> for WindowType {
    fn from(py_win: PyWindowType) -> Self {
        match py_win {
            PyWindowType::Hann => WindowType::Hann,
            PyWindowType::Hamming => WindowType::Hamming,
            PyWindowType::Blackman => WindowType::Blackman,
            PyWindowType::Rectangular => WindowType::Rectangular,
        }
    }
}

fn signal_slice<'a>(signal: &'a PyReadonlyArray1<'_, f64>) -> PyResult<&'a [f64]> {
    signal
        .as_slice()
        .map_err(|e| PyValueError::new_err(e.to_string()))
}

/// Spectrum analyzer exposed to Python
#[pyclass(name = "SpectrumAnalyzer")]
pub struct PySpectrumAnalyzer {
    analyzer: SpectrumAnalyzer,
}

#[pymethods]
impl PySpectrumAnalyzer {
    /// Create a new spectrum analyzer
    ///
    /// Args:
    ///     fft_size: FFT size (number of samples)
    ///     window_type: Window type for analysis
    ///     sample_rate: Sample rate in Hz
    ///     apply_correction: Whether to apply amplitude correction for windowing
    #[new]
    #[pyo3(signature = (fft_size=2048, window_type=PyWindowType::Hamming, sample_rate=48000.0, apply_correction=true))]
    fn new(
        fft_size: usize,
        window_type: PyWindowType,
        sample_rate: f64,
        apply_correction: bool,
    ) -> PyResult<Self> {
        let config = AnalyzerConfig {
            fft_size,
            window_type: window_type.into(),
            sample_rate,
            apply_correction,
            ..AnalyzerConfig::default()
        };

        Ok(Self {
            analyzer: SpectrumAnalyzer::new(config)?,
        })
    }

    /// Analyze signal and return magnitude spectrum
    fn analyze<'py>(
        &mut self,
        py: Python<'py>,
        signal: PyReadonlyArray1<f64>,
    ) -> PyResult<&'py PyArray1<f64>> {
        let spectrum = self.analyzer.analyze(signal_slice(&signal)?);
        Ok(PyArray1::from_vec(py, spectrum))
    }

    /// Analyze signal and return magnitude in dB
    #[pyo3(signature = (signal, reference=1.0))]
    fn analyze_db<'py>(
        &mut self,
        py: Python<'py>,
        signal: PyReadonlyArray1<f64>,
        reference: f64,
    ) -> PyResult<&'py PyArray1<f64>> {
        let spectrum = self.analyzer.analyze_db(signal_slice(&signal)?, reference);
        Ok(PyArray1::from_vec(py, spectrum))
    }

    /// Get frequency bins in Hz
    fn frequency_bins_hz<'py>(&self, py: Python<'py>) -> &'py PyArray1<f64> {
        PyArray1::from_vec(py, self.analyzer.frequency_bins_hz())
    }

    /// Get frequency bins in normalized units (0 to 1, where 1 = Nyquist)
    fn frequency_bins_normalized<'py>(&self, py: Python<'py>) -> &'py PyArray1<f64> {
        PyArray1::from_vec(py, self.analyzer.frequency_bins_normalized())
    }

    fn num_bins(&self) -> usize {
        self.analyzer.num_bins()
    }

    /// Update configuration; omitted arguments keep their current value
    #[pyo3(signature = (fft_size=None, window_type=None, sample_rate=None, apply_correction=None))]
    fn update_config(
        &mut self,
        fft_size: Option<usize>,
        window_type: Option<PyWindowType>,
        sample_rate: Option<f64>,
        apply_correction: Option<bool>,
    ) -> PyResult<()> {
        let mut config = self.analyzer.config().clone();

        if let Some(size) = fft_size {
            config.fft_size = size;
        }
        if let Some(win) = window_type {
            config.window_type = win.into();
        }
        if let Some(sr) = sample_rate {
            config.sample_rate = sr;
        }
        if let Some(corr) = apply_correction {
            config.apply_correction = corr;
        }

        self.analyzer.update_config(config)?;
        Ok(())
    }

    fn get_sample_rate(&self) -> f64 {
        self.analyzer.config().sample_rate
    }

    fn get_fft_size(&self) -> usize {
        self.analyzer.config().fft_size
    }
}
