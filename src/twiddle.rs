use crate::float::{root, FftFloat};
use num_complex::Complex;

/// Precomputed twiddle factors for every butterfly stage of a power-of-two FFT.
///
/// The table holds the first half of the `size`-th roots of unity; the factors of a
/// smaller stage with modulus `m` are every `size / m`-th entry.
pub struct Twiddles<T> {
    size: usize,
    forward: bool,
    table: Box<[Complex<T>]>,
}

impl<T> core::fmt::Debug for Twiddles<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> Result<(), core::fmt::Error> {
        f.debug_struct("Twiddles")
            .field("size", &self.size)
            .field("forward", &self.forward)
            .finish()
    }
}

impl<T: FftFloat> Twiddles<T> {
    /// Computes the twiddles of a forward (negative exponent) or inverse transform.
    pub fn new(size: usize, forward: bool) -> Self {
        assert!(size.is_power_of_two(), "twiddle table size must be a power of two");
        let sign = if forward { -1 } else { 1 };
        let table = (0..size / 2)
            .map(|j| root(size, sign * j as isize))
            .collect::<Vec<_>>()
            .into_boxed_slice();
        Self {
            size,
            forward,
            table,
        }
    }

    /// The largest modulus supported by this table.
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn is_forward(&self) -> bool {
        self.forward
    }

    /// Returns the twiddle `root(modulus, ∓j)` for a butterfly stage producing
    /// `modulus` outputs, where `j < modulus / 2`.
    #[inline(always)]
    pub fn get(&self, modulus: usize, j: usize) -> Complex<T> {
        debug_assert!(modulus != 0 && self.size % modulus == 0);
        self.table[j * (self.size / modulus)]
    }
}
