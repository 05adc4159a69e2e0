//! Iterative radix-2 FFT for power-of-two sizes
//!
//! Decimation in time: the buffer is first put into bit-reversed order,
//! then combined over log2(N) butterfly stages.

use num_complex::Complex;

use super::twiddle::TwiddleTable;
use super::FftDirection;

/// Reorder `buffer` so element i moves to the bit-reversal of i
///
/// `buffer.len()` must be a power of two.
pub fn bit_reverse_permute(buffer: &mut [Complex<f64>]) {
    let n = buffer.len();
    let mut reversed = 0usize;

    for i in 0..n.saturating_sub(1) {
        if i < reversed {
            buffer.swap(i, reversed);
        }

        // Increment `reversed` as a bit-reversed counter
        let mut bit = n / 2;
        while bit <= reversed {
            reversed -= bit;
            bit /= 2;
        }
        reversed += bit;
    }
}

/// Run every butterfly stage over a bit-reversed buffer
///
/// # Arguments
/// * `buffer` - Samples in bit-reversed order, length 2^`log2n`
/// * `table` - Twiddle table of the same size
/// * `log2n` - Number of stages
/// * `direction` - Forward uses conjugated twiddles
pub fn butterflies(
    buffer: &mut [Complex<f64>],
    table: &TwiddleTable,
    log2n: u32,
    direction: FftDirection,
) {
    let n = buffer.len();
    debug_assert_eq!(n, 1usize << log2n);
    debug_assert_eq!(n, table.size());

    // Number of butterfly groups and their half-width
    let mut groups = n / 2;
    let mut half = 1usize;

    for _ in 0..log2n {
        for group in 0..groups {
            let base = 2 * group * half;
            for r in 0..half {
                let twiddle = direction.orient(table[(r * groups) % n]);
                let p = base + r;
                let q = p + half;

                let tmp = twiddle * buffer[q];
                buffer[q] = buffer[p] - tmp;
                buffer[p] += tmp;
            }
        }
        groups /= 2;
        half *= 2;
    }
}

/// Unscaled in-place radix-2 transform
pub fn process(
    buffer: &mut [Complex<f64>],
    table: &TwiddleTable,
    log2n: u32,
    direction: FftDirection,
) {
    bit_reverse_permute(buffer);
    butterflies(buffer, table, log2n, direction);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ramp(n: usize) -> Vec<Complex<f64>> {
        (0..n).map(|i| Complex::new(i as f64, 0.0)).collect()
    }

    fn reverse_bits(mut i: usize, bits: u32) -> usize {
        let mut out = 0;
        for _ in 0..bits {
            out = (out << 1) | (i & 1);
            i >>= 1;
        }
        out
    }

    #[test]
    fn test_bit_reverse_n8() {
        let mut buffer = ramp(8);
        bit_reverse_permute(&mut buffer);
        let order: Vec<f64> = buffer.iter().map(|c| c.re).collect();
        assert_eq!(order, vec![0.0, 4.0, 2.0, 6.0, 1.0, 5.0, 3.0, 7.0]);
    }

    #[test]
    fn test_bit_reverse_matches_reference() {
        for bits in 0..10u32 {
            let n = 1usize << bits;
            let mut buffer = ramp(n);
            bit_reverse_permute(&mut buffer);
            for (i, c) in buffer.iter().enumerate() {
                assert_eq!(c.re as usize, reverse_bits(i, bits));
            }
        }
    }

    #[test]
    fn test_bit_reverse_is_involution() {
        let original = ramp(64);
        let mut buffer = original.clone();
        bit_reverse_permute(&mut buffer);
        bit_reverse_permute(&mut buffer);
        assert_eq!(buffer, original);
    }

    #[test]
    fn test_two_point_butterfly() {
        let table = TwiddleTable::new(2).unwrap();
        let mut buffer = vec![Complex::new(3.0, 0.0), Complex::new(1.0, 0.0)];
        process(&mut buffer, &table, 1, FftDirection::Forward);
        assert!((buffer[0] - Complex::new(4.0, 0.0)).norm() < 1e-12);
        assert!((buffer[1] - Complex::new(2.0, 0.0)).norm() < 1e-12);
    }

    #[test]
    fn test_forward_single_tone() {
        // exp(i·2π·k0·t/N) lands entirely in bin k0
        let n = 16;
        let k0 = 3;
        let table = TwiddleTable::new(n).unwrap();
        let mut buffer: Vec<Complex<f64>> = (0..n)
            .map(|t| table[(k0 * t) % n])
            .collect();
        process(&mut buffer, &table, 4, FftDirection::Forward);
        for (k, c) in buffer.iter().enumerate() {
            let expected = if k == k0 { n as f64 } else { 0.0 };
            assert!((*c - Complex::new(expected, 0.0)).norm() < 1e-9, "bin {}", k);
        }
    }
}
