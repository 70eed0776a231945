/// Copies `src` into the front of `dest`, splitting the copy into concurrent halves
/// until at most `cutoff` elements remain per task.
///
/// # Panics
/// Panics if `dest` is shorter than `src`.
pub fn copy<T: Copy + Send + Sync>(dest: &mut [T], src: &[T], cutoff: usize) {
    assert!(
        dest.len() >= src.len(),
        "destination holds {} elements but {} were copied",
        dest.len(),
        src.len()
    );
    copy_exact(&mut dest[..src.len()], src, cutoff.max(1));
}

fn copy_exact<T: Copy + Send + Sync>(dest: &mut [T], src: &[T], cutoff: usize) {
    if src.len() > cutoff {
        let mid = src.len() / 2;
        let (dest_lo, dest_hi) = dest.split_at_mut(mid);
        let (src_lo, src_hi) = src.split_at(mid);
        rayon::join(
            || copy_exact(dest_lo, src_lo, cutoff),
            || copy_exact(dest_hi, src_hi, cutoff),
        );
    } else {
        dest.copy_from_slice(src);
    }
}
