//! Twiddle-factor tables
//!
//! A table of size N holds the N complex roots of unity exp(i·2πk/N).
//! Tables are immutable once built and shared between every transform
//! bound to the same size.

use num_complex::Complex;
use std::f64::consts::PI;
use std::ops::Index;

use crate::error::{try_vec, FftError, Result};

/// Immutable table of the N-th roots of unity
#[derive(Debug, Clone, PartialEq)]
pub struct TwiddleTable {
    factors: Box<[Complex<f64>]>,
}

impl TwiddleTable {
    /// Build the table for `size`
    ///
    /// # Arguments
    /// * `size` - Transform size N (must be at least 1)
    ///
    /// # Returns
    /// Table with `table[k] = exp(i·2πk/N)` for k = 0..N-1
    pub fn new(size: usize) -> Result<Self> {
        if size == 0 {
            return Err(FftError::ZeroSize);
        }

        let mut factors = try_vec![Complex::new(0.0, 0.0); size];
        let step = 2.0 * PI / size as f64;
        for (k, w) in factors.iter_mut().enumerate() {
            *w = Complex::from_polar(1.0, step * k as f64);
        }

        Ok(Self {
            factors: factors.into_boxed_slice(),
        })
    }

    /// Number of factors (the transform size N)
    pub fn size(&self) -> usize {
        self.factors.len()
    }

    pub fn as_slice(&self) -> &[Complex<f64>] {
        &self.factors
    }
}

impl Index<usize> for TwiddleTable {
    type Output = Complex<f64>;

    fn index(&self, k: usize) -> &Complex<f64> {
        assert!(
            k < self.factors.len(),
            "twiddle index {} out of range for table of size {}",
            k,
            self.factors.len()
        );
        &self.factors[k]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_size_rejected() {
        assert_eq!(TwiddleTable::new(0), Err(FftError::ZeroSize));
    }

    #[test]
    fn test_roots_of_unity() {
        for &n in &[1usize, 2, 3, 4, 7, 8, 12, 64] {
            let table = TwiddleTable::new(n).unwrap();
            assert_eq!(table.size(), n);
            for k in 0..n {
                let angle = 2.0 * PI * k as f64 / n as f64;
                let expected = Complex::new(angle.cos(), angle.sin());
                assert!((table[k] - expected).norm() < 1e-12);
                // Every entry lies on the unit circle
                assert!((table[k].norm() - 1.0).abs() < 1e-12);
            }
        }
    }

    #[test]
    fn test_quarter_turns() {
        let table = TwiddleTable::new(4).unwrap();
        assert!((table[0] - Complex::new(1.0, 0.0)).norm() < 1e-12);
        assert!((table[1] - Complex::new(0.0, 1.0)).norm() < 1e-12);
        assert!((table[2] - Complex::new(-1.0, 0.0)).norm() < 1e-12);
        assert!((table[3] - Complex::new(0.0, -1.0)).norm() < 1e-12);
    }

    #[test]
    fn test_deterministic() {
        assert_eq!(TwiddleTable::new(48).unwrap(), TwiddleTable::new(48).unwrap());
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_index_out_of_range_panics() {
        let table = TwiddleTable::new(8).unwrap();
        let _ = table[8];
    }
}
