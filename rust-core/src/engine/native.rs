//! Native transform backed by the shared twiddle-table cache

use num_complex::Complex;
use tracing::trace;

use super::config::{Backend, TransformConfig};
use super::registry::{TableHandle, TableRegistry};
use super::{apply_scale, check_len, dft, radix2, FftDirection, FourierTransform};
use crate::error::Result;

/// In-place transform bound to one size
///
/// Power-of-two sizes run the radix-2 FFT, every other size the direct DFT.
/// Cloning takes a new reference on the same cached table.
#[derive(Debug, Clone)]
pub struct NativeTransform {
    size: usize,

    /// Number of radix-2 stages, `None` when size is not a power of two
    log2n: Option<u32>,

    forward_scale: f64,
    inverse_scale: f64,

    table: TableHandle,
}

impl NativeTransform {
    /// Transform with default scales (`1/N` forward, `1` inverse) on the global registry
    pub fn new(size: usize) -> Result<Self> {
        Self::with_registry(TableRegistry::global(), size, &TransformConfig::default())
    }

    /// Transform with explicit scales on the global registry
    pub fn with_scales(size: usize, forward_scale: f64, inverse_scale: f64) -> Result<Self> {
        let config = TransformConfig::default().with_scales(forward_scale, inverse_scale);
        Self::with_registry(TableRegistry::global(), size, &config)
    }

    /// Transform drawing its twiddle table from `registry`
    ///
    /// The backend field of `config` is ignored.
    pub fn with_registry(
        registry: &TableRegistry,
        size: usize,
        config: &TransformConfig,
    ) -> Result<Self> {
        let (forward_scale, inverse_scale) = config.resolve_scales(size)?;
        let table = registry.get(size)?;
        let log2n = size.is_power_of_two().then(|| size.trailing_zeros());

        trace!(size, fast_path = log2n.is_some(), "native transform bound");

        Ok(Self {
            size,
            log2n,
            forward_scale,
            inverse_scale,
            table,
        })
    }

    /// Number of radix-2 stages if the fast path applies
    pub fn log2_size(&self) -> Option<u32> {
        self.log2n
    }

    pub fn has_fast_path(&self) -> bool {
        self.log2n.is_some()
    }

    /// Registry holding this transform's table
    pub fn registry(&self) -> TableRegistry {
        self.table.registry()
    }

    /// Exchange state with `other`, each keeping its own table reference
    pub fn swap(&mut self, other: &mut Self) {
        std::mem::swap(self, other);
    }

    fn execute(&self, buffer: &mut [Complex<f64>], direction: FftDirection, scale: f64) {
        check_len(self.size, buffer);

        match self.log2n {
            Some(log2n) => radix2::process(buffer, &self.table, log2n, direction),
            None => dft::process(buffer, &self.table, direction),
        }

        apply_scale(buffer, scale);
    }
}

impl FourierTransform for NativeTransform {
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
        Backend::Native
    }

    fn forward(&self, buffer: &mut [Complex<f64>]) {
        self.execute(buffer, FftDirection::Forward, self.forward_scale);
    }

    fn inverse(&self, buffer: &mut [Complex<f64>]) {
        self.execute(buffer, FftDirection::Inverse, self.inverse_scale);
    }
}
