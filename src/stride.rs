//! Zero-copy strided views.

use core::ops::Index;

/// A read-only view of every `stride`-th element of a buffer, beginning at `start`.
///
/// Views never own their buffer.  Sub-views alias their parent, which is how the
/// even and odd halves of a decimation-in-time step are selected without moving
/// any data.
#[derive(Debug)]
pub struct StrideView<'a, T> {
    data: &'a [T],
    start: usize,
    stride: usize,
}

// Derived impls would require `T: Copy`.
impl<'a, T> Clone for StrideView<'a, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, T> Copy for StrideView<'a, T> {}

impl<'a, T> StrideView<'a, T> {
    /// Wraps an entire buffer, with start 0 and stride 1.
    #[inline]
    pub fn from_raw(data: &'a [T]) -> Self {
        Self {
            data,
            start: 0,
            stride: 1,
        }
    }

    /// Creates a view relative to this one.
    ///
    /// Logical element `i` of the result is logical element `start + stride * i` of `self`.
    #[inline]
    pub fn subview(&self, start: usize, stride: usize) -> Self {
        debug_assert!(stride >= 1);
        Self {
            data: self.data,
            start: self.start + self.stride * start,
            stride: self.stride * stride,
        }
    }

    /// Splits into the even-indexed and odd-indexed elements.
    #[inline]
    pub fn split(&self) -> (Self, Self) {
        (self.subview(0, 2), self.subview(1, 2))
    }

    /// Returns the element at logical position `i`.
    ///
    /// # Panics
    /// Panics if the position lies outside the underlying buffer.
    #[inline(always)]
    pub fn index(&self, i: usize) -> &'a T {
        &self.data[self.start + self.stride * i]
    }

    /// The offset of logical element 0 in the underlying buffer.
    pub fn start(&self) -> usize {
        self.start
    }

    /// The distance between consecutive logical elements in the underlying buffer.
    pub fn stride(&self) -> usize {
        self.stride
    }

    /// The number of logical elements addressable through this view.
    pub fn capacity(&self) -> usize {
        if self.start >= self.data.len() {
            0
        } else {
            (self.data.len() - self.start - 1) / self.stride + 1
        }
    }

    /// Iterates over the first `n` logical elements.
    pub fn iter(&self, n: usize) -> impl Iterator<Item = &'a T> + 'a {
        let view = *self;
        (0..n).map(move |i| view.index(i))
    }
}

impl<'a, T> Index<usize> for StrideView<'a, T> {
    type Output = T;

    #[inline(always)]
    fn index(&self, i: usize) -> &T {
        StrideView::index(self, i)
    }
}
