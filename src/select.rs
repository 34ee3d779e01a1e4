//! Repeated-selection scan shared by every filter flavour

/// Number of selection rounds needed for a window of `len` samples
///
/// This picks the `(len / 2 + 1)`-th smallest sample, which is the true median for odd windows
/// and the upper of the two middle samples for even ones.
#[inline]
pub(crate) const fn rounds(len: usize) -> usize {
    len / 2 + 1
}

/// Finds the index of the median sample in `scratch`, masking selected entries with `sentinel`
///
/// Each round scans the whole buffer for the smallest remaining value and overwrites it with
/// `sentinel` so it is never picked again. The holder index is carried over from the previous
/// round rather than reset, and only a strictly smaller value displaces it, so ties resolve to
/// the lowest index still unmasked.
///
/// `scratch` must not be empty.
pub(crate) fn median_index<T: Copy + PartialOrd>(scratch: &mut [T], sentinel: T) -> usize {
    let mut holder = 0;

    for _ in 0..rounds(scratch.len()) {
        for j in 0..scratch.len() {
            if scratch[j] < scratch[holder] {
                holder = j;
            }
        }
        scratch[holder] = sentinel;
    }

    holder
}

/// Copies `window` into `scratch` and returns the median sample of `window`
///
/// Both slices must have the same, non-zero length.
#[inline]
pub(crate) fn median_of<T: Copy + PartialOrd>(window: &[T], scratch: &mut [T], sentinel: T) -> T {
    debug_assert_eq!(window.len(), scratch.len());
    debug_assert!(!window.is_empty());

    scratch.copy_from_slice(window);
    window[median_index(scratch, sentinel)]
}
