use core::fmt;

use virtual_window::{KeyCacheKey, ScrollUpdate, WindowCore};

/// Where an item sat relative to the top of the container, identified by id.
///
/// Capture one before replacing the items and apply it afterwards to keep that item still on
/// screen, e.g. when older chat messages are loaded above the current ones.
#[derive(Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollAnchor<K> {
    pub id: K,
    /// Distance from the anchor item's top to the scroll position.
    pub offset_in_viewport: f64,
}

impl<K: fmt::Debug> fmt::Debug for ScrollAnchor<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScrollAnchor")
            .field("id", &self.id)
            .field("offset_in_viewport", &self.offset_in_viewport)
            .finish()
    }
}

/// Captures an anchor for the item at the top edge of the container.
///
/// Returns `None` for an empty sequence.
pub fn capture_first_visible_anchor<T, K: KeyCacheKey>(
    core: &WindowCore<T, K>,
) -> Option<ScrollAnchor<K>> {
    capture_anchor_at_offset(core, 0.0)
}

/// Captures an anchor for the item `offset_in_viewport` below the top edge of the container.
pub fn capture_anchor_at_offset<T, K: KeyCacheKey>(
    core: &WindowCore<T, K>,
    offset_in_viewport: f64,
) -> Option<ScrollAnchor<K>> {
    let scroll_top = core.scroll_top();
    let index = core.index_at_offset(scroll_top + offset_in_viewport.max(0.0))?;
    let top = core.get_item_position(index)?.top;
    let id = core.items().get(index)?.id.clone();
    Some(ScrollAnchor {
        id,
        offset_in_viewport: scroll_top - top,
    })
}

/// Scrolls `core` so the anchored item is back where it was captured.
///
/// Looks the id up in the current sequence, so call this after `set_items`. Returns `None`
/// when the item is gone.
pub fn apply_anchor<T, K: KeyCacheKey>(
    core: &mut WindowCore<T, K>,
    anchor: &ScrollAnchor<K>,
) -> Option<ScrollUpdate> {
    let index = core.position_of(&anchor.id)?;
    let top = core.get_item_position(index)?.top;
    let target = top + anchor.offset_in_viewport;
    adebug!(index, target, "apply_anchor");
    Some(core.update_scroll_position(target))
}
