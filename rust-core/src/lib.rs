//! Fourier Engine - DFT/FFT execution core
//!
//! In-place forward/inverse transforms over shared, reference-counted
//! twiddle tables, with a radix-2 fast path for power-of-two sizes and a
//! direct DFT for everything else.

// Suppress PyO3 non-local impl warnings (harmless macro-generated code)
#![cfg_attr(feature = "python", allow(non_local_definitions))]

pub mod engine;
pub mod error;
pub mod spectrum;
#[cfg(feature = "python")]
pub mod python_bindings;

pub use engine::{
    Backend, FftDirection, FourierTransform, NativeTransform, TableHandle, TableRegistry,
    Transform, TransformConfig, TwiddleTable,
};
#[cfg(feature = "vendor")]
pub use engine::VendorTransform;
pub use error::{FftError, Result};
pub use spectrum::{AnalyzerConfig, SpectrumAnalyzer, WindowType};
