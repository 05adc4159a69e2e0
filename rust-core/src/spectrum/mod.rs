//! Spectral analysis of real signals

pub mod analysis;
pub mod engine;
pub mod windowing;
pub mod windows;

pub use analysis::{AnalyzerConfig, SpectrumAnalyzer};
pub use engine::SpectrumEngine;
pub use windowing::apply_window;
pub use windows::{generate_window, WindowType};
