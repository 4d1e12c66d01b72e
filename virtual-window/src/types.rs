/// Default id type for items, rows and columns.
pub type ItemKey = u64;

/// An entry of a virtualized sequence.
///
/// `data` is never inspected by the cores. `size` is an explicit size override in the scroll
/// axis; a measured size recorded through the size cache takes precedence over it.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Item<T, K = ItemKey> {
    pub id: K,
    pub data: T,
    pub size: Option<f64>,
}

impl<T, K> Item<T, K> {
    pub fn new(id: K, data: T) -> Self {
        Self {
            id,
            data,
            size: None,
        }
    }

    pub fn with_size(mut self, size: f64) -> Self {
        self.size = Some(size);
        self
    }
}

/// A grid row.
pub type Row<T, K = ItemKey> = Item<T, K>;
/// A grid column.
pub type Column<T, K = ItemKey> = Item<T, K>;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VirtualRange {
    pub start_index: usize,
    pub end_index: usize, // exclusive
}

impl VirtualRange {
    pub fn is_empty(&self) -> bool {
        self.start_index >= self.end_index
    }

    pub fn len(&self) -> usize {
        self.end_index.saturating_sub(self.start_index)
    }
}

/// The virtualized window of a [`crate::WindowCore`].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WindowRange {
    pub start_index: usize,
    pub end_index: usize, // exclusive, includes buffer and overscan
    /// Leading offset of `start_index`.
    pub offset_top: f64,
    pub total_height: f64,
    /// Number of items that fit in the container, before buffer/overscan.
    pub visible_count: usize,
}

impl WindowRange {
    pub fn indexes(&self) -> VirtualRange {
        VirtualRange {
            start_index: self.start_index,
            end_index: self.end_index,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.start_index >= self.end_index
    }
}

/// Index ranges of the fixed (never virtualized) regions of a grid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FixedRegions {
    pub rows_top: VirtualRange,
    pub rows_bottom: VirtualRange,
    pub columns_left: VirtualRange,
    pub columns_right: VirtualRange,
}

/// The virtualized window of a [`crate::GridCore`].
///
/// `offset_top`/`offset_left` are measured from the start of the scrollable body, i.e. after
/// the fixed leading rows/columns. Totals cover the whole axis, fixed items included.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridRange {
    pub start_row_index: usize,
    pub end_row_index: usize, // exclusive
    pub offset_top: f64,
    pub total_height: f64,
    pub visible_row_count: usize,

    pub start_column_index: usize,
    pub end_column_index: usize, // exclusive
    pub offset_left: f64,
    pub total_width: f64,
    pub visible_column_count: usize,

    pub fixed: FixedRegions,
}

impl GridRange {
    pub fn rows(&self) -> VirtualRange {
        VirtualRange {
            start_index: self.start_row_index,
            end_index: self.end_row_index,
        }
    }

    pub fn columns(&self) -> VirtualRange {
        VirtualRange {
            start_index: self.start_column_index,
            end_index: self.end_column_index,
        }
    }
}

/// Result of [`crate::WindowCore::update_scroll_position`].
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollUpdate {
    /// The freshly computed range, even when `needs_update` is false.
    pub range: WindowRange,
    /// The applied (clamped) scroll offset.
    pub scroll_top: f64,
    pub total_height: f64,
    /// Whether the range moved past the hysteresis threshold and should be re-rendered.
    pub needs_update: bool,
}

/// Result of [`crate::GridCore::update_scroll_position`].
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridScrollUpdate {
    pub range: GridRange,
    pub scroll_top: f64,
    pub scroll_left: f64,
    pub total_height: f64,
    pub total_width: f64,
    /// True when either axis moved past its hysteresis threshold.
    pub needs_update: bool,
}

/// Leading edge and extent of an item along its scroll axis.
///
/// For grid columns ([`crate::GridCore::get_column_position`]) `top` is the left edge and
/// `height` the width.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemPosition {
    pub top: f64,
    pub height: f64,
}

impl ItemPosition {
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }
}

/// Scroll offsets that bring a cell to the leading edge of the grid body.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CellOffset {
    pub scroll_top: f64,
    pub scroll_left: f64,
}
