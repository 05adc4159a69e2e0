//! DFT/FFT execution engine
//!
//! Twiddle tables are cached per size in a [`TableRegistry`] and shared by
//! every [`NativeTransform`] of that size. The [`Transform`] enum hides the
//! backend choice behind the [`FourierTransform`] contract.

pub mod config;
pub mod dft;
pub mod native;
pub mod radix2;
pub mod registry;
pub mod twiddle;
#[cfg(feature = "vendor")]
pub mod vendor;

use num_complex::Complex;

use crate::error::Result;

pub use config::{Backend, TransformConfig};
pub use native::NativeTransform;
pub use registry::{TableHandle, TableRegistry};
pub use twiddle::TwiddleTable;
#[cfg(feature = "vendor")]
pub use vendor::VendorTransform;

/// Transform direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FftDirection {
    /// Kernel exp(-i·2πkn/N)
    Forward,
    /// Kernel exp(+i·2πkn/N)
    Inverse,
}

impl FftDirection {
    /// Orient a table factor exp(+iθ) for this direction
    #[inline]
    pub fn orient(self, twiddle: Complex<f64>) -> Complex<f64> {
        match self {
            FftDirection::Forward => twiddle.conj(),
            FftDirection::Inverse => twiddle,
        }
    }
}

/// Contract shared by every transform backend
///
/// Both operations work in place on exactly `size()` samples. A buffer of
/// any other length is a programming error and panics.
pub trait FourierTransform: Send + Sync {
    fn size(&self) -> usize;

    /// Factor applied after every forward transform
    fn forward_scale(&self) -> f64;

    /// Factor applied after every inverse transform
    fn inverse_scale(&self) -> f64;

    fn backend(&self) -> Backend;

    fn forward(&self, buffer: &mut [Complex<f64>]);

    fn inverse(&self, buffer: &mut [Complex<f64>]);
}

/// Transform with a backend selected at configuration time
#[derive(Debug, Clone)]
pub enum Transform {
    Native(NativeTransform),
    #[cfg(feature = "vendor")]
    Vendor(VendorTransform),
}

impl Transform {
    /// Native transform with default scales (`1/N` forward, `1` inverse)
    pub fn new(size: usize) -> Result<Self> {
        Self::with_config(size, &TransformConfig::default())
    }

    /// Native transform with explicit scales
    pub fn with_scales(size: usize, forward_scale: f64, inverse_scale: f64) -> Result<Self> {
        Self::with_config(
            size,
            &TransformConfig::default().with_scales(forward_scale, inverse_scale),
        )
    }

    /// Transform on the backend named by `config`, native tables from the global registry
    pub fn with_config(size: usize, config: &TransformConfig) -> Result<Self> {
        Self::with_registry(TableRegistry::global(), size, config)
    }

    /// Transform whose native tables come from `registry`
    ///
    /// # Errors
    /// * `ZeroSize` - `size` is zero
    /// * `InvalidScale` - a configured scale is not finite
    /// * `BackendUnavailable` - the vendor backend was compiled out
    pub fn with_registry(
        registry: &TableRegistry,
        size: usize,
        config: &TransformConfig,
    ) -> Result<Self> {
        match config.backend {
            Backend::Native => Ok(Transform::Native(NativeTransform::with_registry(
                registry, size, config,
            )?)),
            #[cfg(feature = "vendor")]
            Backend::Vendor => Ok(Transform::Vendor(VendorTransform::with_config(size, config)?)),
            #[cfg(not(feature = "vendor"))]
            Backend::Vendor => Err(crate::error::FftError::BackendUnavailable(Backend::Vendor)),
        }
    }

    pub fn swap(&mut self, other: &mut Self) {
        std::mem::swap(self, other);
    }

    fn inner(&self) -> &dyn FourierTransform {
        match self {
            Transform::Native(t) => t,
            #[cfg(feature = "vendor")]
            Transform::Vendor(t) => t,
        }
    }
}

impl FourierTransform for Transform {
    fn size(&self) -> usize {
        self.inner().size()
    }

    fn forward_scale(&self) -> f64 {
        self.inner().forward_scale()
    }

    fn inverse_scale(&self) -> f64 {
        self.inner().inverse_scale()
    }

    fn backend(&self) -> Backend {
        self.inner().backend()
    }

    fn forward(&self, buffer: &mut [Complex<f64>]) {
        self.inner().forward(buffer)
    }

    fn inverse(&self, buffer: &mut [Complex<f64>]) {
        self.inner().inverse(buffer)
    }
}

pub(crate) fn check_len(expected: usize, buffer: &[Complex<f64>]) {
    assert_eq!(
        buffer.len(),
        expected,
        "buffer length {} does not match transform size {}",
        buffer.len(),
        expected
    );
}

/// Multiply every sample by `scale`, skipped when it is exactly 1
pub(crate) fn apply_scale(buffer: &mut [Complex<f64>], scale: f64) {
    if scale != 1.0 {
        for sample in buffer.iter_mut() {
            *sample *= scale;
        }
    }
}
