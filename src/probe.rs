//! Observation of kernel writes to the output buffer.

/// Receives every range of output indices the kernel writes.
///
/// `level` is the base-2 logarithm of the butterfly block that produced the write:
/// 0 for the size 1 transforms at the leaves of the recursion, `log2(2 * size)` for
/// a recombination of two `size`-point halves.
pub(crate) trait WriteProbe: Sync {
    fn record(&self, start: usize, len: usize, level: u32);
}

impl WriteProbe for () {
    #[inline(always)]
    fn record(&self, _start: usize, _len: usize, _level: u32) {}
}

#[cfg(test)]
pub(crate) use shadow::ShadowBitmap;
