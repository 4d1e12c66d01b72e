//! Pixel ↔ index conversions shared by both axes.
//!
//! All inputs reaching these helpers are sanitized first: sizes and extents are finite and
//! non-negative, so a saturating `as` cast is a valid floor.
use core::cmp;

use crate::VirtualRange;

/// Whether `size` is usable as a measured size (finite and non-negative).
pub(crate) fn is_valid_size(size: f64) -> bool {
    size.is_finite() && size >= 0.0
}

/// Maps non-finite and negative values to zero.
pub(crate) fn sanitize(value: f64) -> f64 {
    if is_valid_size(value) { value } else { 0.0 }
}

pub(crate) fn floor_count(x: f64) -> usize {
    if x > 0.0 { x as usize } else { 0 }
}

pub(crate) fn ceil_count(x: f64) -> usize {
    if !(x > 0.0) {
        return 0;
    }
    let t = x as usize;
    if (t as f64) < x { t.saturating_add(1) } else { t }
}

/// How many items of `estimate` size are needed to cover `extent`.
///
/// A zero estimate means every item fits.
pub(crate) fn span_count(extent: f64, estimate: f64) -> usize {
    if estimate > 0.0 {
        ceil_count(extent / estimate)
    } else if extent > 0.0 {
        usize::MAX
    } else {
        0
    }
}

/// Estimated index of the item at `offset`.
pub(crate) fn offset_count(offset: f64, estimate: f64) -> usize {
    if estimate > 0.0 {
        floor_count(offset / estimate)
    } else {
        0
    }
}

/// Update suppression: a window only counts as moved once either edge shifts by at least half
/// the visible count (and at least one index).
pub(crate) fn moved_past_threshold(
    prev: (usize, usize),
    next: (usize, usize),
    visible_count: usize,
) -> bool {
    let threshold = cmp::max(1, visible_count / 2);
    prev.0.abs_diff(next.0) >= threshold || prev.1.abs_diff(next.1) >= threshold
}

/// `items[range]`, with the range clamped to the slice.
pub(crate) fn clamp_slice<T>(items: &[T], range: VirtualRange) -> &[T] {
    let end = range.end_index.min(items.len());
    let start = range.start_index.min(end);
    &items[start..end]
}
