//! Transform configuration: backend choice and scale factors

use crate::error::{FftError, Result};

/// Execution backend behind the transform contract
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Backend {
    /// Built-in radix-2 / direct DFT engine with cached twiddle tables
    #[default]
    Native,

    /// Planner-based third-party FFT (`rustfft`), requires the `vendor` feature
    Vendor,
}

impl Backend {
    /// Whether this backend was compiled into the current build
    pub fn is_available(&self) -> bool {
        match self {
            Backend::Native => true,
            Backend::Vendor => cfg!(feature = "vendor"),
        }
    }
}

/// Transform configuration
///
/// Unset scales fall back to the defaults: `1/N` forward, `1` inverse.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TransformConfig {
    pub backend: Backend,
    pub forward_scale: Option<f64>,
    pub inverse_scale: Option<f64>,
}

impl TransformConfig {
    pub fn with_backend(mut self, backend: Backend) -> Self {
        self.backend = backend;
        self
    }

    pub fn with_scales(mut self, forward_scale: f64, inverse_scale: f64) -> Self {
        self.forward_scale = Some(forward_scale);
        self.inverse_scale = Some(inverse_scale);
        self
    }

    /// Resolve the (forward, inverse) scale pair for a transform of `size`
    pub fn resolve_scales(&self, size: usize) -> Result<(f64, f64)> {
        if size == 0 {
            return Err(FftError::ZeroSize);
        }

        let forward = self.forward_scale.unwrap_or(1.0 / size as f64);
        let inverse = self.inverse_scale.unwrap_or(1.0);

        if !forward.is_finite() {
            return Err(FftError::InvalidScale {
                name: "forward_scale",
                value: forward,
            });
        }
        if !inverse.is_finite() {
            return Err(FftError::InvalidScale {
                name: "inverse_scale",
                value: inverse,
            });
        }

        Ok((forward, inverse))
    }
}
