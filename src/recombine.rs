//! Radix-2 butterfly merge of two half-size transforms.

use crate::float::{add, mul, sub, FftFloat};
use crate::probe::WriteProbe;
use crate::twiddle::Twiddles;
use num_complex::Complex;

/// Merges two `size`-point transforms into one `2 * size`-point transform, in place.
///
/// The block `output[k * size .. k * size + 2 * size]` must hold the transform of the
/// even-indexed samples in its first half and of the odd-indexed samples in its second
/// half.  For each `j < size` the butterfly
///
/// ```text
/// t = w(2 * size, j) * odd[j]
/// output[k * size + j]        = even[j] + t
/// output[k * size + j + size] = even[j] - t
/// ```
///
/// is applied, where `w` is read from `twiddles`.  The butterflies are independent, so
/// the index range is bisected into concurrent tasks until at most `cutoff` butterflies
/// remain.
///
/// # Panics
/// Panics if the block does not fit in `output`, or if `2 * size` does not divide the
/// twiddle table size.
pub fn recombine<T: FftFloat>(
    output: &mut [Complex<T>],
    twiddles: &Twiddles<T>,
    k: usize,
    size: usize,
    cutoff: usize,
) {
    recombine_probed(output, 0, twiddles, k, size, cutoff, &());
}

/// Like [`recombine`], reporting writes to `probe` at indices offset by `offset`.
pub(crate) fn recombine_probed<T, P>(
    output: &mut [Complex<T>],
    offset: usize,
    twiddles: &Twiddles<T>,
    k: usize,
    size: usize,
    cutoff: usize,
    probe: &P,
) where
    T: FftFloat,
    P: WriteProbe,
{
    if size == 0 {
        return;
    }
    let modulus = 2 * size;
    assert!(
        twiddles.size() % modulus == 0,
        "butterfly modulus {} does not divide twiddle table size {}",
        modulus,
        twiddles.size()
    );
    let block = &mut output[k * size..k * size + modulus];
    let (even, odd) = block.split_at_mut(size);
    Butterflies {
        twiddles,
        modulus,
        cutoff: cutoff.max(1),
        base: offset + k * size,
        level: modulus.trailing_zeros(),
        probe,
    }
    .apply(even, odd, 0);
}

struct Butterflies<'a, T, P> {
    twiddles: &'a Twiddles<T>,
    modulus: usize,
    cutoff: usize,
    base: usize,
    level: u32,
    probe: &'a P,
}

impl<'a, T, P> Butterflies<'a, T, P>
where
    T: FftFloat,
    P: WriteProbe,
{
    /// Applies butterflies `first .. first + even.len()` of the block.
    fn apply(&self, even: &mut [Complex<T>], odd: &mut [Complex<T>], first: usize) {
        let len = even.len();
        if len > self.cutoff {
            let mid = len / 2;
            let (even_lo, even_hi) = even.split_at_mut(mid);
            let (odd_lo, odd_hi) = odd.split_at_mut(mid);
            rayon::join(
                || self.apply(even_lo, odd_lo, first),
                || self.apply(even_hi, odd_hi, first + mid),
            );
        } else {
            for (j, (a, b)) in even.iter_mut().zip(odd.iter_mut()).enumerate() {
                let t = mul(self.twiddles.get(self.modulus, first + j), *b);
                let x = *a;
                *a = add(x, t);
                *b = sub(x, t);
            }
            let half = self.modulus / 2;
            self.probe.record(self.base + first, len, self.level);
            self.probe.record(self.base + half + first, len, self.level);
        }
    }
}
