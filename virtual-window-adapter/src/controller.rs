use virtual_window::{
    GridConfig, GridConfigPatch, GridCore, GridScrollUpdate, Item, ItemKey, ScrollUpdate,
    WindowConfig, WindowConfigPatch, WindowCore,
};

use crate::{
    MeasurementKey, MeasurementQueue, MeasurementSender, ScrollAnchor, apply_anchor,
    capture_anchor_at_offset, capture_first_visible_anchor,
};

/// A framework-neutral controller that wraps a [`WindowCore`] and its measurement queue.
///
/// This type does not hold any UI objects. Adapters drive it by calling:
/// - `on_container_size` when the viewport is resized
/// - `on_scroll` for every scroll event, re-rendering when `needs_update` is set
///
/// Layout code on other threads reports sizes through [`Self::sender`]; those are applied at
/// the start of the next `on_scroll`.
#[derive(Debug)]
pub struct Controller<T, K = ItemKey> {
    core: WindowCore<T, K>,
    queue: MeasurementQueue<K>,
}

impl<T, K: MeasurementKey> Controller<T, K> {
    pub fn new(config: WindowConfig) -> Self {
        Self::from_core(WindowCore::new(config))
    }

    pub fn from_core(core: WindowCore<T, K>) -> Self {
        Self {
            core,
            queue: MeasurementQueue::new(),
        }
    }

    pub fn core(&self) -> &WindowCore<T, K> {
        &self.core
    }

    pub fn core_mut(&mut self) -> &mut WindowCore<T, K> {
        &mut self.core
    }

    pub fn into_core(self) -> WindowCore<T, K> {
        self.core
    }

    pub fn sender(&self) -> MeasurementSender<K> {
        self.queue.sender()
    }

    /// Drains queued measurements without scrolling.
    pub fn flush_measurements(&mut self) -> usize {
        self.queue.drain_into_window(&mut self.core)
    }

    pub fn set_items(&mut self, items: Vec<Item<T, K>>) {
        self.core.set_items(items);
    }

    pub fn on_container_size(&mut self, container_height: f64) {
        self.core
            .update_config(WindowConfigPatch::default().container_height(container_height));
    }

    /// Call this when the UI reports a scroll offset change.
    pub fn on_scroll(&mut self, scroll_top: f64) -> ScrollUpdate {
        self.flush_measurements();
        self.core.update_scroll_position(scroll_top)
    }

    /// Scrolls so `index` sits at the top of the container.
    pub fn scroll_to_index(&mut self, index: usize) -> ScrollUpdate {
        self.flush_measurements();
        let target = self.core.scroll_to_index(index);
        self.core.update_scroll_position(target)
    }

    pub fn capture_first_visible_anchor(&self) -> Option<ScrollAnchor<K>> {
        capture_first_visible_anchor(&self.core)
    }

    pub fn capture_anchor_at_offset(&self, offset_in_viewport: f64) -> Option<ScrollAnchor<K>> {
        capture_anchor_at_offset(&self.core, offset_in_viewport)
    }

    /// Replaces the items while keeping the anchored item in place.
    ///
    /// The anchor is captured before the replacement. Returns `None` when the sequence was
    /// empty or the anchored item is not part of `items`.
    pub fn set_items_anchored(&mut self, items: Vec<Item<T, K>>) -> Option<ScrollUpdate> {
        self.flush_measurements();
        let anchor = self.capture_first_visible_anchor();
        self.core.set_items(items);
        self.apply_anchor(&anchor?)
    }

    /// Applies a previously captured anchor by adjusting the scroll position.
    pub fn apply_anchor(&mut self, anchor: &ScrollAnchor<K>) -> Option<ScrollUpdate> {
        self.flush_measurements();
        apply_anchor(&mut self.core, anchor)
    }
}

/// The [`GridCore`] counterpart of [`Controller`].
#[derive(Debug)]
pub struct GridController<R, C, K = ItemKey> {
    core: GridCore<R, C, K>,
    queue: MeasurementQueue<K>,
}

impl<R, C, K: MeasurementKey> GridController<R, C, K> {
    pub fn new(config: GridConfig) -> Self {
        Self::from_core(GridCore::new(config))
    }

    pub fn from_core(core: GridCore<R, C, K>) -> Self {
        Self {
            core,
            queue: MeasurementQueue::new(),
        }
    }

    pub fn core(&self) -> &GridCore<R, C, K> {
        &self.core
    }

    pub fn core_mut(&mut self) -> &mut GridCore<R, C, K> {
        &mut self.core
    }

    pub fn into_core(self) -> GridCore<R, C, K> {
        self.core
    }

    pub fn sender(&self) -> MeasurementSender<K> {
        self.queue.sender()
    }

    pub fn flush_measurements(&mut self) -> usize {
        self.queue.drain_into_grid(&mut self.core)
    }

    pub fn on_container_size(&mut self, container_height: f64, container_width: f64) {
        self.core.update_config(
            GridConfigPatch::default()
                .container_height(container_height)
                .container_width(container_width),
        );
    }

    pub fn on_scroll(&mut self, scroll_top: f64, scroll_left: f64) -> GridScrollUpdate {
        self.flush_measurements();
        self.core.update_scroll_position(scroll_top, scroll_left)
    }

    /// Scrolls so the cell sits at the top-left corner of the grid body.
    pub fn scroll_to_cell(&mut self, row_index: usize, column_index: usize) -> GridScrollUpdate {
        self.flush_measurements();
        let target = self.core.scroll_to_cell(row_index, column_index);
        self.core
            .update_scroll_position(target.scroll_top, target.scroll_left)
    }
}
