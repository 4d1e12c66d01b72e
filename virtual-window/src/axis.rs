use alloc::vec::Vec;

use crate::Item;
use crate::cache::SizeCache;
use crate::geometry::{is_valid_size, moved_past_threshold, offset_count, sanitize, span_count};
use crate::key::{KeyCacheKey, KeyIndexMap};
use crate::prefix::PrefixSums;

/// One axis worth of window math: a list of resolved sizes and the window around a scroll
/// offset.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub(crate) struct AxisWindow {
    pub(crate) start: usize,
    pub(crate) end: usize,
    /// Offset of `start` from the beginning of the scrollable body.
    pub(crate) offset: f64,
    pub(crate) total: f64,
    pub(crate) visible_count: usize,
}

impl AxisWindow {
    pub(crate) fn moved_from(&self, prev: &AxisWindow) -> bool {
        moved_past_threshold(
            (prev.start, prev.end),
            (self.start, self.end),
            self.visible_count,
        )
    }
}

/// Size bookkeeping for one axis.
///
/// `sizes[i]` is the resolved size of the i-th item (measured > own size > default) and
/// `sums` holds their prefix sums. Both must be rebuilt whenever the item sequence changes.
#[derive(Clone, Debug)]
pub(crate) struct Axis<K> {
    default_size: f64,
    sizes: Vec<f64>,
    sums: PrefixSums,
    positions: KeyIndexMap<K>,
    duplicate_ids: bool,
    cache: SizeCache<K>,
}

impl<K: KeyCacheKey> Axis<K> {
    pub(crate) fn new(default_size: f64) -> Self {
        Self {
            default_size: sanitize(default_size),
            sizes: Vec::new(),
            sums: PrefixSums::new(),
            positions: KeyIndexMap::<K>::new(),
            duplicate_ids: false,
            cache: SizeCache::new(),
        }
    }

    pub(crate) fn rebuild<T>(&mut self, items: &[Item<T, K>]) {
        vdebug!(
            count = items.len(),
            cached = self.cache.len(),
            "rebuild_sizes"
        );
        self.sizes.clear();
        self.sizes.reserve_exact(items.len());
        self.positions.clear();
        self.duplicate_ids = false;

        for (i, item) in items.iter().enumerate() {
            self.sizes.push(self.resolve(item));
            if self.positions.contains_key(&item.id) {
                self.duplicate_ids = true;
            } else {
                self.positions.insert(item.id.clone(), i);
            }
        }
        self.sums = PrefixSums::from_sizes(&self.sizes);
    }

    fn resolve<T>(&self, item: &Item<T, K>) -> f64 {
        self.cache
            .get(&item.id)
            .or_else(|| item.size.filter(|&s| is_valid_size(s)))
            .unwrap_or(self.default_size)
    }

    pub(crate) fn set_default_size<T>(&mut self, items: &[Item<T, K>], size: f64) {
        let size = sanitize(size);
        if self.default_size == size {
            return;
        }
        self.default_size = size;
        self.rebuild(items);
    }

    /// Records a measured size for `id`. Returns `false` when the size is rejected.
    pub(crate) fn record<T>(&mut self, items: &[Item<T, K>], id: K, size: f64) -> bool {
        self.record_many(items, core::iter::once((id, size)))
    }

    /// Records several measurements and re-accumulates offsets once, from the first changed
    /// index. Returns whether any size was accepted.
    pub(crate) fn record_many<T>(
        &mut self,
        items: &[Item<T, K>],
        entries: impl IntoIterator<Item = (K, f64)>,
    ) -> bool {
        let mut accepted = false;
        let mut dirty_from: Option<usize> = None;
        for (id, size) in entries {
            if !is_valid_size(size) {
                vwarn!(size, "ignoring invalid measured size");
                continue;
            }
            accepted = true;
            let index = self.positions.get(&id).copied();
            self.cache.insert(id, size);
            if self.duplicate_ids {
                continue;
            }
            if let Some(i) = index {
                if self.sizes[i] != size {
                    self.sizes[i] = size;
                    dirty_from = Some(dirty_from.map_or(i, |d| d.min(i)));
                }
            }
        }

        if accepted && self.duplicate_ids {
            // Several indexes may share an id; only a rebuild reaches all of them.
            self.rebuild(items);
        } else if let Some(from) = dirty_from {
            self.sums.refresh_from(&self.sizes, from);
        }
        accepted
    }

    pub(crate) fn clear_cache<T>(&mut self, items: &[Item<T, K>]) {
        self.cache.clear();
        self.rebuild(items);
    }

    /// Replaces the cache with `entries`, skipping invalid sizes.
    pub(crate) fn import_cache<T>(
        &mut self,
        items: &[Item<T, K>],
        entries: impl IntoIterator<Item = (K, f64)>,
    ) {
        self.cache.clear();
        for (id, size) in entries {
            if !is_valid_size(size) {
                vwarn!(size, "import_size_cache: skipping invalid size");
                continue;
            }
            self.cache.insert(id, size);
        }
        vdebug!(entries = self.cache.len(), "import_size_cache");
        self.rebuild(items);
    }

    pub(crate) fn cache(&self) -> &SizeCache<K> {
        &self.cache
    }

    /// The running mean of measured sizes, or the configured default before any measurement.
    pub(crate) fn estimate(&self) -> f64 {
        self.cache.average().unwrap_or(self.default_size)
    }

    pub(crate) fn len(&self) -> usize {
        self.sizes.len()
    }

    pub(crate) fn size_at(&self, index: usize) -> Option<f64> {
        self.sizes.get(index).copied()
    }

    pub(crate) fn start_of(&self, index: usize) -> f64 {
        self.sums.start(index)
    }

    pub(crate) fn total(&self) -> f64 {
        self.sums.total()
    }

    pub(crate) fn position_of(&self, id: &K) -> Option<usize> {
        self.positions.get(id).copied()
    }

    pub(crate) fn index_at_offset(&self, offset: f64) -> Option<usize> {
        let count = self.len();
        if count == 0 {
            return None;
        }
        let consumed = self.sums.items_before(sanitize(offset));
        Some(consumed.min(count - 1))
    }

    /// Index bounds of the scrollable body once `leading`/`trailing` fixed items are sliced off.
    ///
    /// Oversized counts are clamped so the two fixed regions never overlap.
    pub(crate) fn body(&self, leading: usize, trailing: usize) -> (usize, usize) {
        let len = self.len();
        let leading = leading.min(len);
        let trailing = trailing.min(len - leading);
        (leading, len - trailing)
    }

    /// Computes the window around `scroll` for a container of size `extent`.
    ///
    /// The window is located with the estimated size and padded by `padding` indexes on both
    /// sides; offsets and totals use the exact resolved sizes.
    pub(crate) fn window(
        &self,
        scroll: f64,
        extent: f64,
        leading: usize,
        trailing: usize,
        padding: usize,
    ) -> AxisWindow {
        if self.len() == 0 {
            return AxisWindow::default();
        }

        let (body_start, body_end) = self.body(leading, trailing);
        let body_offset = self.start_of(body_start);
        let total = self.total();
        let fixed_extent = body_offset + (total - self.start_of(body_end));
        let available = (sanitize(extent) - fixed_extent).max(0.0);

        let estimate = self.estimate();
        let visible_count = span_count(available, estimate);
        let raw_start = body_start.saturating_add(offset_count(sanitize(scroll), estimate));

        let end = body_end.min(
            raw_start
                .saturating_add(visible_count)
                .saturating_add(padding),
        );
        let start = raw_start.saturating_sub(padding).max(body_start).min(end);
        debug_assert!(body_start <= start && start <= end && end <= body_end);

        AxisWindow {
            start,
            end,
            offset: self.start_of(start) - body_offset,
            total,
            visible_count,
        }
    }

    /// Scroll offset that brings `index` to the leading edge of the body.
    ///
    /// `index` is clamped into the valid domain; fixed leading items map to zero.
    pub(crate) fn scroll_offset_of(&self, index: usize, leading: usize) -> f64 {
        let len = self.len();
        if len == 0 {
            return 0.0;
        }
        let index = index.min(len - 1);
        let (body_start, _) = self.body(leading, 0);
        if index <= body_start {
            return 0.0;
        }
        self.start_of(index) - self.start_of(body_start)
    }
}
