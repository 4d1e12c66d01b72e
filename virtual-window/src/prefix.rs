use alloc::vec::Vec;

/// Leading offsets of a run of items, accumulated strictly in index order.
///
/// `starts[i]` is `sizes[0] + ... + sizes[i - 1]` added left to right, so every offset and the
/// total are bit-identical to a linear scan. A point change only re-accumulates the suffix
/// after it.
#[derive(Clone, Debug)]
pub(crate) struct PrefixSums {
    starts: Vec<f64>, // len + 1 entries, starts[0] == 0
}

impl PrefixSums {
    pub(crate) fn new() -> Self {
        Self {
            starts: alloc::vec![0.0],
        }
    }

    pub(crate) fn from_sizes(sizes: &[f64]) -> Self {
        let mut sums = Self {
            starts: Vec::with_capacity(sizes.len() + 1),
        };
        sums.starts.push(0.0);
        sums.refresh_from(sizes, 0);
        sums
    }

    pub(crate) fn len(&self) -> usize {
        self.starts.len() - 1
    }

    /// Re-accumulates offsets after `sizes[from..]` changed. `sizes` must have `len()` entries
    /// (or more, when growing).
    pub(crate) fn refresh_from(&mut self, sizes: &[f64], from: usize) {
        let from = from.min(sizes.len());
        self.starts.truncate(from + 1);
        let mut acc = self.starts[from];
        for &size in &sizes[from..] {
            acc += size;
            self.starts.push(acc);
        }
        debug_assert_eq!(self.starts.len(), sizes.len() + 1);
    }

    /// Sum of the first `count` sizes (clamped to the length).
    pub(crate) fn start(&self, count: usize) -> f64 {
        self.starts[count.min(self.len())]
    }

    pub(crate) fn total(&self) -> f64 {
        self.starts[self.len()]
    }

    /// Number of items that end at or before `offset`.
    ///
    /// Sizes are non-negative, so the offsets are sorted.
    pub(crate) fn items_before(&self, offset: f64) -> usize {
        self.starts[1..].partition_point(|&end| end <= offset)
    }
}
