use alloc::vec::Vec;

use crate::axis::{Axis, AxisWindow};
use crate::geometry::{clamp_slice, sanitize};
use crate::key::KeyCacheKey;
use crate::{
    Item, ItemKey, ItemPosition, ScrollUpdate, WindowConfig, WindowConfigPatch, WindowRange,
};

/// A headless 1D virtualization window.
///
/// This type is intentionally UI-agnostic:
/// - It does not hold any UI objects.
/// - Your adapter drives it by pushing scroll offsets and measured sizes.
/// - It answers which slice of the items has to be rendered and where that slice starts.
///
/// Items are located with the estimated item size (a running mean of measured sizes), then
/// padded by `buffer_size + overscan` on both sides. Offsets and totals use exact per-item
/// sizes.
///
/// Measured sizes are cached by item id and survive [`Self::set_items`]. Reusing an id for a
/// different item makes it inherit the stale measurement.
#[derive(Clone, Debug)]
pub struct WindowCore<T, K = ItemKey> {
    config: WindowConfig,
    items: Vec<Item<T, K>>,
    axis: Axis<K>,
    scroll_top: f64,
    last_range: Option<WindowRange>,
    stale: bool,
}

impl<T, K: KeyCacheKey> WindowCore<T, K> {
    pub fn new(config: WindowConfig) -> Self {
        vdebug!(
            item_height = config.item_height,
            container_height = config.container_height,
            buffer_size = config.buffer_size,
            overscan = config.overscan,
            "WindowCore::new"
        );
        Self {
            axis: Axis::new(config.item_height),
            config,
            items: Vec::new(),
            scroll_top: 0.0,
            last_range: None,
            stale: false,
        }
    }

    /// Creates a core and immediately installs `items`.
    pub fn with_items(config: WindowConfig, items: Vec<Item<T, K>>) -> Self {
        let mut core = Self::new(config);
        core.set_items(items);
        core
    }

    pub fn config(&self) -> &WindowConfig {
        &self.config
    }

    pub fn items(&self) -> &[Item<T, K>] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Replaces the item sequence.
    ///
    /// The size cache is kept: measurements for ids still present keep applying.
    pub fn set_items(&mut self, items: Vec<Item<T, K>>) {
        self.items = items;
        self.axis.rebuild(&self.items);
        self.invalidate();
    }

    /// Merges `patch` into the configuration.
    pub fn update_config(&mut self, patch: WindowConfigPatch) {
        self.update_config_with(|config| config.apply(&patch));
    }

    /// Applies `f` to the configuration.
    pub fn update_config_with(&mut self, f: impl FnOnce(&mut WindowConfig)) {
        f(&mut self.config);
        vtrace!(
            item_height = self.config.item_height,
            container_height = self.config.container_height,
            buffer_size = self.config.buffer_size,
            overscan = self.config.overscan,
            "WindowCore::update_config"
        );
        self.axis
            .set_default_size(&self.items, self.config.item_height);
        self.invalidate();
    }

    /// Applies a new scroll offset and computes the window for it.
    ///
    /// The returned range is always freshly computed. It only replaces the stored range (see
    /// [`Self::get_current_range`]) when `needs_update` is true.
    pub fn update_scroll_position(&mut self, scroll_top: f64) -> ScrollUpdate {
        self.scroll_top = sanitize(scroll_top);
        let window = self.compute_window();
        let range = to_range(&window);

        let needs_update = match self.last_range {
            Some(prev) if !self.stale => window.moved_from(&to_window(&prev)),
            _ => true,
        };
        vtrace!(
            scroll_top = self.scroll_top,
            start_index = range.start_index,
            end_index = range.end_index,
            needs_update,
            "WindowCore::update_scroll_position"
        );
        if needs_update {
            self.last_range = Some(range);
            self.stale = false;
        }

        ScrollUpdate {
            range,
            scroll_top: self.scroll_top,
            total_height: range.total_height,
            needs_update,
        }
    }

    /// Records a measured size for the item with `id`.
    ///
    /// Negative and non-finite sizes are ignored.
    pub fn set_item_size(&mut self, id: K, size: f64) {
        if self.axis.record(&self.items, id, size) {
            self.invalidate();
        }
    }

    /// Records many measurements at once.
    pub fn set_item_sizes(&mut self, sizes: impl IntoIterator<Item = (K, f64)>) {
        if self.axis.record_many(&self.items, sizes) {
            self.invalidate();
        }
    }

    /// Items of the last accepted range; empty before the first scroll update.
    pub fn get_visible_items(&self) -> &[Item<T, K>] {
        let Some(range) = self.last_range else {
            return &[];
        };
        clamp_slice(&self.items, range.indexes())
    }

    /// Leading offset of `index`, clamped into `[0, len - 1]`. Does not scroll.
    pub fn scroll_to_index(&self, index: usize) -> f64 {
        self.axis.scroll_offset_of(index, 0)
    }

    pub fn get_item_position(&self, index: usize) -> Option<ItemPosition> {
        let height = self.axis.size_at(index)?;
        Some(ItemPosition {
            top: self.axis.start_of(index),
            height,
        })
    }

    /// The last range reported with `needs_update = true`.
    pub fn get_current_range(&self) -> Option<WindowRange> {
        self.last_range
    }

    /// Clears the scroll position, the stored range and the size cache.
    pub fn reset(&mut self) {
        vdebug!(cached = self.axis.cache().len(), "WindowCore::reset");
        self.scroll_top = 0.0;
        self.last_range = None;
        self.stale = false;
        self.axis.clear_cache(&self.items);
    }

    pub fn scroll_top(&self) -> f64 {
        self.scroll_top
    }

    pub fn total_height(&self) -> f64 {
        self.axis.total()
    }

    /// Size used to locate unmeasured items.
    pub fn estimated_item_height(&self) -> f64 {
        self.axis.estimate()
    }

    /// Resolved size of the item at `index`.
    pub fn item_height(&self, index: usize) -> Option<f64> {
        self.axis.size_at(index)
    }

    pub fn is_measured(&self, id: &K) -> bool {
        self.axis.cache().contains(id)
    }

    /// First index carrying `id`.
    pub fn position_of(&self, id: &K) -> Option<usize> {
        self.axis.position_of(id)
    }

    /// Index of the item covering `offset` (clamped to the last item).
    pub fn index_at_offset(&self, offset: f64) -> Option<usize> {
        self.axis.index_at_offset(offset)
    }

    /// Returns the number of cached measured sizes (id → size).
    pub fn size_cache_len(&self) -> usize {
        self.axis.cache().len()
    }

    /// Iterates over the cached measured sizes (id → size) without allocations.
    pub fn for_each_cached_size(&self, mut f: impl FnMut(&K, f64)) {
        for (id, size) in self.axis.cache().iter() {
            f(id, size);
        }
    }

    /// Exports the cached measured sizes as a `Vec` (useful for persistence).
    pub fn export_size_cache(&self) -> Vec<(K, f64)> {
        let mut out = Vec::with_capacity(self.axis.cache().len());
        self.for_each_cached_size(|id, size| out.push((id.clone(), size)));
        out
    }

    /// Replaces the cached measured sizes (useful when restoring state).
    pub fn import_size_cache(&mut self, entries: impl IntoIterator<Item = (K, f64)>) {
        self.axis.import_cache(&self.items, entries);
        self.invalidate();
    }

    fn compute_window(&self) -> AxisWindow {
        self.axis.window(
            self.scroll_top,
            self.config.container_height,
            0,
            0,
            self.config.padding(),
        )
    }

    fn invalidate(&mut self) {
        self.stale = true;
    }
}

fn to_range(w: &AxisWindow) -> WindowRange {
    WindowRange {
        start_index: w.start,
        end_index: w.end,
        offset_top: w.offset,
        total_height: w.total,
        visible_count: w.visible_count,
    }
}

fn to_window(r: &WindowRange) -> AxisWindow {
    AxisWindow {
        start: r.start_index,
        end: r.end_index,
        offset: r.offset_top,
        total: r.total_height,
        visible_count: r.visible_count,
    }
}
