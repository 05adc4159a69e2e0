//! Magnitude spectra of real signals on top of the transform engine

use num_complex::Complex;

use crate::engine::{Backend, FourierTransform, Transform, TransformConfig};
use crate::error::{try_vec, Result};

/// Computes one-sided magnitude spectra of real-valued signals
#[derive(Debug, Clone)]
pub struct SpectrumEngine {
    /// Unscaled forward transform of `fft_size` points
    transform: Transform,

    /// Reusable complex work buffer
    buffer: Vec<Complex<f64>>,
}

impl SpectrumEngine {
    /// Create new spectrum engine
    ///
    /// # Arguments
    /// * `fft_size` - FFT size (number of samples)
    /// * `backend` - Transform backend to run on
    pub fn new(fft_size: usize, backend: Backend) -> Result<Self> {
        let config = TransformConfig::default()
            .with_backend(backend)
            .with_scales(1.0, 1.0);
        let transform = Transform::with_config(fft_size, &config)?;
        let buffer = try_vec![Complex::new(0.0, 0.0); fft_size];

        Ok(Self { transform, buffer })
    }

    /// Compute magnitude spectrum
    ///
    /// # Arguments
    /// * `signal` - Input signal (zero-padded or truncated to fft_size)
    ///
    /// # Returns
    /// Magnitude |X[k]| for k = 0..fft_size/2 (positive frequencies only)
    pub fn compute_magnitude(&mut self, signal: &[f64]) -> Vec<f64> {
        let copy_len = signal.len().min(self.buffer.len());
        for (slot, &sample) in self.buffer.iter_mut().zip(&signal[..copy_len]) {
            *slot = Complex::new(sample, 0.0);
        }
        self.buffer[copy_len..].fill(Complex::new(0.0, 0.0));

        self.transform.forward(&mut self.buffer);

        self.buffer[..self.num_bins()].iter().map(|c| c.norm()).collect()
    }

    /// Compute magnitude spectrum in dB: 20*log10(|X[k]|/reference)
    pub fn compute_magnitude_db(&mut self, signal: &[f64], reference: f64) -> Vec<f64> {
        self.compute_magnitude(signal)
            .into_iter()
            .map(|mag| magnitude_to_db(mag, reference))
            .collect()
    }

    /// Compute power spectrum (magnitude squared)
    pub fn compute_power(&mut self, signal: &[f64]) -> Vec<f64> {
        self.compute_magnitude(signal)
            .into_iter()
            .map(|mag| mag * mag)
            .collect()
    }

    pub fn fft_size(&self) -> usize {
        self.buffer.len()
    }

    /// Number of one-sided bins (fft_size/2 + 1)
    pub fn num_bins(&self) -> usize {
        self.fft_size() / 2 + 1
    }

    pub fn backend(&self) -> Backend {
        self.transform.backend()
    }

    /// Convert bin index to normalized frequency (units of π rad/sample)
    pub fn bin_to_frequency(&self, bin: usize) -> f64 {
        2.0 * bin as f64 / self.fft_size() as f64
    }

    /// Frequency axis in normalized units (0 to 1, where 1 = π rad/sample)
    pub fn frequency_axis(&self) -> Vec<f64> {
        (0..self.num_bins())
            .map(|bin| self.bin_to_frequency(bin))
            .collect()
    }

    /// Convert normalized frequency to Hz
    pub fn normalized_to_hz(normalized_freq: f64, sample_rate: f64) -> f64 {
        normalized_freq * sample_rate / 2.0
    }
}

/// 20*log10(mag/reference) with magnitudes clamped away from zero
pub fn magnitude_to_db(mag: f64, reference: f64) -> f64 {
    20.0 * (mag.max(1e-10) / reference).log10()
}
