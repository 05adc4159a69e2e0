//! Direct O(N²) DFT for sizes without a fast path

use num_complex::Complex;

use super::twiddle::TwiddleTable;
use super::FftDirection;

/// Unscaled in-place direct transform
///
/// Allocates one copy of the input; the result is written back into `buffer`.
pub fn process(
    buffer: &mut [Complex<f64>],
    table: &TwiddleTable,
    direction: FftDirection,
) {
    let n = buffer.len();
    debug_assert_eq!(n, table.size());

    let input = buffer.to_vec();

    for (i, out) in buffer.iter_mut().enumerate() {
        let mut sum = Complex::new(0.0, 0.0);
        // Track (i·k) mod N incrementally so large N cannot overflow
        let mut index = 0usize;
        for &x in input.iter() {
            sum += x * direction.orient(table[index]);
            index += i;
            if index >= n {
                index -= n;
            }
        }
        *out = sum;
    }
}
