//! Transform backed by `rustfft`
//!
//! Same contract as the native engine: in-place, forward kernel exp(-i·2πkn/N),
//! scales applied after the unnormalized vendor transform.

use num_complex::Complex;
use rustfft::{Fft, FftPlanner};
use std::fmt;
use std::sync::Arc;
use tracing::trace;

use super::config::{Backend, TransformConfig};
use super::{apply_scale, check_len, FourierTransform};
use crate::error::Result;

/// Vendor FFT bound to one size
#[derive(Clone)]
pub struct VendorTransform {
    size: usize,
    forward_scale: f64,
    inverse_scale: f64,

    /// Forward plan (shared between clones)
    fft: Arc<dyn Fft<f64>>,

    /// Inverse plan (shared between clones)
    ifft: Arc<dyn Fft<f64>>,
}

impl VendorTransform {
    /// Transform with default scales (`1/N` forward, `1` inverse)
    pub fn new(size: usize) -> Result<Self> {
        Self::with_config(size, &TransformConfig::default())
    }

    pub fn with_scales(size: usize, forward_scale: f64, inverse_scale: f64) -> Result<Self> {
        Self::with_config(
            size,
            &TransformConfig::default().with_scales(forward_scale, inverse_scale),
        )
    }

    /// Plan a transform of `size`; the backend field of `config` is ignored
    pub fn with_config(size: usize, config: &TransformConfig) -> Result<Self> {
        let (forward_scale, inverse_scale) = config.resolve_scales(size)?;

        let mut planner = FftPlanner::<f64>::new();
        let fft = planner.plan_fft_forward(size);
        let ifft = planner.plan_fft_inverse(size);

        trace!(size, "vendor transform planned");

        Ok(Self {
            size,
            forward_scale,
            inverse_scale,
            fft,
            ifft,
        })
    }

    pub fn swap(&mut self, other: &mut Self) {
        std::mem::swap(self, other);
    }
}

impl FourierTransform for VendorTransform {
    fn size(&self) -> usize {
        self.size
    }

    fn forward_scale(&self) -> f64 {
        self.forward_scale
    }

    fn inverse_scale(&self) -> f64 {
        self.inverse_scale
    }

    fn backend(&self) -> Backend {
        Backend::Vendor
    }

    fn forward(&self, buffer: &mut [Complex<f64>]) {
        check_len(self.size, buffer);
        self.fft.process(buffer);
        apply_scale(buffer, self.forward_scale);
    }

    fn inverse(&self, buffer: &mut [Complex<f64>]) {
        check_len(self.size, buffer);
        self.ifft.process(buffer);
        apply_scale(buffer, self.inverse_scale);
    }
}

impl fmt::Debug for VendorTransform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VendorTransform")
            .field("size", &self.size)
            .field("forward_scale", &self.forward_scale)
            .field("inverse_scale", &self.inverse_scale)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::NativeTransform;
    use crate::error::FftError;

    fn signal(n: usize) -> Vec<Complex<f64>> {
        (0..n)
            .map(|i| Complex::new((i as f64 * 0.37).cos(), (i as f64 * 0.11).sin()))
            .collect()
    }

    #[test]
    fn test_matches_native_backend() {
        for size in [1usize, 4, 6, 16, 30, 128] {
            let vendor = VendorTransform::new(size).unwrap();
            let native = NativeTransform::new(size).unwrap();

            let mut a = signal(size);
            let mut b = a.clone();
            vendor.forward(&mut a);
            native.forward(&mut b);
            for (x, y) in a.iter().zip(&b) {
                assert!((*x - *y).norm() < 1e-9, "size {}: {} vs {}", size, x, y);
            }

            vendor.inverse(&mut a);
            native.inverse(&mut b);
            for (x, y) in a.iter().zip(&b) {
                assert!((*x - *y).norm() < 1e-9);
            }
        }
    }

    #[test]
    fn test_round_trip() {
        let vendor = VendorTransform::new(24).unwrap();
        let original = signal(24);
        let mut buffer = original.clone();
        vendor.forward(&mut buffer);
        vendor.inverse(&mut buffer);
        for (x, y) in buffer.iter().zip(&original) {
            assert!((*x - *y).norm() < 1e-9);
        }
    }

    #[test]
    fn test_zero_size_rejected() {
        assert_eq!(VendorTransform::new(0).unwrap_err(), FftError::ZeroSize);
    }

    #[test]
    #[should_panic(expected = "buffer length")]
    fn test_length_mismatch_panics() {
        let vendor = VendorTransform::new(8).unwrap();
        let mut buffer = vec![Complex::new(0.0, 0.0); 9];
        vendor.forward(&mut buffer);
    }
}
