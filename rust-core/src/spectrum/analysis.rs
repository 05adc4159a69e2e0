//! High-level spectrum analyzer
//!
//! Combines the spectrum engine with windowing

use super::engine::{magnitude_to_db, SpectrumEngine};
use super::windowing::{apply_window, window_correction_factor};
use super::windows::WindowType;
use crate::engine::Backend;
use crate::error::Result;

/// Spectrum analyzer configuration
#[derive(Debug, Clone, PartialEq)]
pub struct AnalyzerConfig {
    /// FFT size (any size; powers of two take the fast path)
    pub fft_size: usize,

    /// Window type for spectral analysis
    pub window_type: WindowType,

    /// Sample rate in Hz
    pub sample_rate: f64,

    /// Apply amplitude correction for windowing
    pub apply_correction: bool,

    /// Transform backend
    pub backend: Backend,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            fft_size: 2048,
            window_type: WindowType::Hamming,
            sample_rate: 48000.0,
            apply_correction: true,
            backend: Backend::Native,
        }
    }
}

/// Spectrum analyzer for real-valued signals
#[derive(Debug, Clone)]
pub struct SpectrumAnalyzer {
    config: AnalyzerConfig,
    engine: SpectrumEngine,
    correction_factor: f64,
}

impl SpectrumAnalyzer {
    pub fn new(config: AnalyzerConfig) -> Result<Self> {
        let engine = SpectrumEngine::new(config.fft_size, config.backend)?;
        let correction_factor = correction_for(&config);

        Ok(Self {
            config,
            engine,
            correction_factor,
        })
    }

    /// Analyze signal and return magnitude spectrum
    ///
    /// # Arguments
    /// * `signal` - Input signal (truncated to fft_size, windowed, then zero-padded)
    ///
    /// # Returns
    /// Magnitude spectrum |X[k]| for positive frequencies
    pub fn analyze(&mut self, signal: &[f64]) -> Vec<f64> {
        let frame = &signal[..signal.len().min(self.config.fft_size)];
        let windowed = apply_window(frame, self.config.window_type);
        let mut spectrum = self.engine.compute_magnitude(&windowed);

        if self.config.apply_correction {
            // Short frames carry a shorter window than the cached factor assumes
            let correction = if frame.len() == self.config.fft_size {
                self.correction_factor
            } else {
                window_correction_factor(self.config.window_type, frame.len())
            };
            for s in spectrum.iter_mut() {
                *s *= correction;
            }
        }

        spectrum
    }

    /// Analyze and return magnitude in dB relative to `reference`
    pub fn analyze_db(&mut self, signal: &[f64], reference: f64) -> Vec<f64> {
        self.analyze(signal)
            .into_iter()
            .map(|mag| magnitude_to_db(mag, reference))
            .collect()
    }

    /// Get frequency bins in Hz
    pub fn frequency_bins_hz(&self) -> Vec<f64> {
        self.engine
            .frequency_axis()
            .iter()
            .map(|&f_norm| SpectrumEngine::normalized_to_hz(f_norm, self.config.sample_rate))
            .collect()
    }

    /// Get frequency bins in normalized units (0 to 1, where 1 = Nyquist)
    pub fn frequency_bins_normalized(&self) -> Vec<f64> {
        self.engine.frequency_axis()
    }

    /// Update configuration
    ///
    /// The transform is only rebuilt when the size or backend changes.
    pub fn update_config(&mut self, config: AnalyzerConfig) -> Result<()> {
        if config.fft_size != self.config.fft_size || config.backend != self.config.backend {
            self.engine = SpectrumEngine::new(config.fft_size, config.backend)?;
        }

        self.correction_factor = correction_for(&config);
        self.config = config;
        Ok(())
    }

    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    pub fn num_bins(&self) -> usize {
        self.engine.num_bins()
    }
}

fn correction_for(config: &AnalyzerConfig) -> f64 {
    if config.apply_correction {
        window_correction_factor(config.window_type, config.fft_size)
    } else {
        1.0
    }
}
