use alloc::vec::Vec;

use crate::axis::{Axis, AxisWindow};
use crate::geometry::{clamp_slice, sanitize};
use crate::key::KeyCacheKey;
use crate::{
    CellOffset, Column, FixedRegions, GridConfig, GridConfigPatch, GridRange, GridScrollUpdate,
    ItemKey, ItemPosition, Row, VirtualRange,
};

/// The always-rendered rows and columns of a grid.
#[derive(Debug)]
pub struct FixedCells<'a, R, C, K = ItemKey> {
    pub rows_top: &'a [Row<R, K>],
    pub rows_bottom: &'a [Row<R, K>],
    pub columns_left: &'a [Column<C, K>],
    pub columns_right: &'a [Column<C, K>],
}

impl<R, C, K> Clone for FixedCells<'_, R, C, K> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R, C, K> Copy for FixedCells<'_, R, C, K> {}

/// A headless 2D virtualization window (rows × columns).
///
/// Each axis runs the same window math as [`crate::WindowCore`]. On top of that, the configured
/// numbers of leading/trailing rows and columns are sliced off as fixed regions: they are
/// always rendered, their size is taken out of the container extent before the visible count
/// is estimated, and they never fall inside the virtualized index bounds.
///
/// Scroll offsets are relative to the scrollable body, i.e. scroll `0` shows the first
/// non-fixed row/column right after the leading fixed region.
#[derive(Clone, Debug)]
pub struct GridCore<R, C, K = ItemKey> {
    config: GridConfig,
    rows: Vec<Row<R, K>>,
    columns: Vec<Column<C, K>>,
    row_axis: Axis<K>,
    column_axis: Axis<K>,
    scroll_top: f64,
    scroll_left: f64,
    last_range: Option<GridRange>,
    stale: bool,
}

impl<R, C, K: KeyCacheKey> GridCore<R, C, K> {
    pub fn new(config: GridConfig) -> Self {
        vdebug!(
            row_height = config.row_height,
            column_width = config.column_width,
            container_height = config.container_height,
            container_width = config.container_width,
            fixed_rows_top = config.fixed_rows_top,
            fixed_rows_bottom = config.fixed_rows_bottom,
            fixed_columns_left = config.fixed_columns_left,
            fixed_columns_right = config.fixed_columns_right,
            "GridCore::new"
        );
        Self {
            row_axis: Axis::new(config.row_height),
            column_axis: Axis::new(config.column_width),
            config,
            rows: Vec::new(),
            columns: Vec::new(),
            scroll_top: 0.0,
            scroll_left: 0.0,
            last_range: None,
            stale: false,
        }
    }

    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    pub fn rows(&self) -> &[Row<R, K>] {
        &self.rows
    }

    pub fn columns(&self) -> &[Column<C, K>] {
        &self.columns
    }

    pub fn set_rows(&mut self, rows: Vec<Row<R, K>>) {
        self.rows = rows;
        self.row_axis.rebuild(&self.rows);
        self.invalidate();
    }

    pub fn set_columns(&mut self, columns: Vec<Column<C, K>>) {
        self.columns = columns;
        self.column_axis.rebuild(&self.columns);
        self.invalidate();
    }

    pub fn update_config(&mut self, patch: GridConfigPatch) {
        self.update_config_with(|config| config.apply(&patch));
    }

    pub fn update_config_with(&mut self, f: impl FnOnce(&mut GridConfig)) {
        f(&mut self.config);
        vtrace!(
            row_height = self.config.row_height,
            column_width = self.config.column_width,
            container_height = self.config.container_height,
            container_width = self.config.container_width,
            "GridCore::update_config"
        );
        self.row_axis
            .set_default_size(&self.rows, self.config.row_height);
        self.column_axis
            .set_default_size(&self.columns, self.config.column_width);
        self.invalidate();
    }

    /// Applies new scroll offsets and computes the window for both axes.
    ///
    /// `needs_update` is true when either axis moved past its own hysteresis threshold. The
    /// stored range is only replaced in that case.
    pub fn update_scroll_position(
        &mut self,
        scroll_top: f64,
        scroll_left: f64,
    ) -> GridScrollUpdate {
        self.scroll_top = sanitize(scroll_top);
        self.scroll_left = sanitize(scroll_left);

        let rows = self.row_window();
        let columns = self.column_window();
        let range = GridRange {
            start_row_index: rows.start,
            end_row_index: rows.end,
            offset_top: rows.offset,
            total_height: rows.total,
            visible_row_count: rows.visible_count,
            start_column_index: columns.start,
            end_column_index: columns.end,
            offset_left: columns.offset,
            total_width: columns.total,
            visible_column_count: columns.visible_count,
            fixed: self.fixed_regions(),
        };

        let needs_update = match self.last_range {
            Some(prev) if !self.stale => {
                let (prev_rows, prev_columns) = split(&prev);
                rows.moved_from(&prev_rows) || columns.moved_from(&prev_columns)
            }
            _ => true,
        };
        vtrace!(
            scroll_top = self.scroll_top,
            scroll_left = self.scroll_left,
            start_row_index = range.start_row_index,
            end_row_index = range.end_row_index,
            start_column_index = range.start_column_index,
            end_column_index = range.end_column_index,
            needs_update,
            "GridCore::update_scroll_position"
        );
        if needs_update {
            self.last_range = Some(range);
            self.stale = false;
        }

        GridScrollUpdate {
            range,
            scroll_top: self.scroll_top,
            scroll_left: self.scroll_left,
            total_height: range.total_height,
            total_width: range.total_width,
            needs_update,
        }
    }

    /// Records a measured height for the row with `id`.
    pub fn set_row_height(&mut self, id: K, height: f64) {
        if self.row_axis.record(&self.rows, id, height) {
            self.invalidate();
        }
    }

    /// Records a measured width for the column with `id`.
    pub fn set_column_width(&mut self, id: K, width: f64) {
        if self.column_axis.record(&self.columns, id, width) {
            self.invalidate();
        }
    }

    /// Virtualized rows of the last accepted range (fixed rows excluded).
    pub fn get_visible_rows(&self) -> &[Row<R, K>] {
        let Some(range) = self.last_range else {
            return &[];
        };
        clamp_slice(&self.rows, range.rows())
    }

    /// Virtualized columns of the last accepted range (fixed columns excluded).
    pub fn get_visible_columns(&self) -> &[Column<C, K>] {
        let Some(range) = self.last_range else {
            return &[];
        };
        clamp_slice(&self.columns, range.columns())
    }

    /// The fixed rows and columns for the current sequences and configuration.
    pub fn fixed_cells(&self) -> FixedCells<'_, R, C, K> {
        let fixed = self.fixed_regions();
        FixedCells {
            rows_top: clamp_slice(&self.rows, fixed.rows_top),
            rows_bottom: clamp_slice(&self.rows, fixed.rows_bottom),
            columns_left: clamp_slice(&self.columns, fixed.columns_left),
            columns_right: clamp_slice(&self.columns, fixed.columns_right),
        }
    }

    /// Index ranges of the fixed regions. Counts larger than the sequence are clamped and the
    /// leading region wins when both would overlap.
    pub fn fixed_regions(&self) -> FixedRegions {
        let (body_top, body_bottom) = self
            .row_axis
            .body(self.config.fixed_rows_top, self.config.fixed_rows_bottom);
        let (body_left, body_right) = self
            .column_axis
            .body(self.config.fixed_columns_left, self.config.fixed_columns_right);
        FixedRegions {
            rows_top: VirtualRange {
                start_index: 0,
                end_index: body_top,
            },
            rows_bottom: VirtualRange {
                start_index: body_bottom,
                end_index: self.rows.len(),
            },
            columns_left: VirtualRange {
                start_index: 0,
                end_index: body_left,
            },
            columns_right: VirtualRange {
                start_index: body_right,
                end_index: self.columns.len(),
            },
        }
    }

    /// Body scroll offsets that bring the cell to the top-left of the body.
    ///
    /// Indexes are clamped per axis; cells in a fixed leading region map to offset zero.
    pub fn scroll_to_cell(&self, row_index: usize, column_index: usize) -> CellOffset {
        CellOffset {
            scroll_top: self
                .row_axis
                .scroll_offset_of(row_index, self.config.fixed_rows_top),
            scroll_left: self
                .column_axis
                .scroll_offset_of(column_index, self.config.fixed_columns_left),
        }
    }

    /// Position of a row from the top of the grid (fixed rows included).
    pub fn get_row_position(&self, index: usize) -> Option<ItemPosition> {
        let height = self.row_axis.size_at(index)?;
        Some(ItemPosition {
            top: self.row_axis.start_of(index),
            height,
        })
    }

    /// Position of a column from the left of the grid (fixed columns included).
    ///
    /// The returned `top` is the column's left edge and `height` its width.
    pub fn get_column_position(&self, index: usize) -> Option<ItemPosition> {
        let width = self.column_axis.size_at(index)?;
        Some(ItemPosition {
            top: self.column_axis.start_of(index),
            height: width,
        })
    }

    pub fn get_current_range(&self) -> Option<GridRange> {
        self.last_range
    }

    /// Clears both scroll offsets, the stored range and both size caches.
    pub fn reset(&mut self) {
        vdebug!(
            cached_rows = self.row_axis.cache().len(),
            cached_columns = self.column_axis.cache().len(),
            "GridCore::reset"
        );
        self.scroll_top = 0.0;
        self.scroll_left = 0.0;
        self.last_range = None;
        self.stale = false;
        self.row_axis.clear_cache(&self.rows);
        self.column_axis.clear_cache(&self.columns);
    }

    pub fn scroll_top(&self) -> f64 {
        self.scroll_top
    }

    pub fn scroll_left(&self) -> f64 {
        self.scroll_left
    }

    pub fn total_height(&self) -> f64 {
        self.row_axis.total()
    }

    pub fn total_width(&self) -> f64 {
        self.column_axis.total()
    }

    pub fn estimated_row_height(&self) -> f64 {
        self.row_axis.estimate()
    }

    pub fn estimated_column_width(&self) -> f64 {
        self.column_axis.estimate()
    }

    pub fn row_height(&self, index: usize) -> Option<f64> {
        self.row_axis.size_at(index)
    }

    pub fn column_width(&self, index: usize) -> Option<f64> {
        self.column_axis.size_at(index)
    }

    pub fn is_row_measured(&self, id: &K) -> bool {
        self.row_axis.cache().contains(id)
    }

    pub fn is_column_measured(&self, id: &K) -> bool {
        self.column_axis.cache().contains(id)
    }

    pub fn row_at_offset(&self, offset: f64) -> Option<usize> {
        self.row_axis.index_at_offset(offset)
    }

    pub fn column_at_offset(&self, offset: f64) -> Option<usize> {
        self.column_axis.index_at_offset(offset)
    }

    fn row_window(&self) -> AxisWindow {
        self.row_axis.window(
            self.scroll_top,
            self.config.container_height,
            self.config.fixed_rows_top,
            self.config.fixed_rows_bottom,
            self.config.padding(),
        )
    }

    fn column_window(&self) -> AxisWindow {
        self.column_axis.window(
            self.scroll_left,
            self.config.container_width,
            self.config.fixed_columns_left,
            self.config.fixed_columns_right,
            self.config.padding(),
        )
    }

    fn invalidate(&mut self) {
        self.stale = true;
    }
}

fn split(range: &GridRange) -> (AxisWindow, AxisWindow) {
    (
        AxisWindow {
            start: range.start_row_index,
            end: range.end_row_index,
            offset: range.offset_top,
            total: range.total_height,
            visible_count: range.visible_row_count,
        },
        AxisWindow {
            start: range.start_column_index,
            end: range.end_column_index,
            offset: range.offset_left,
            total: range.total_width,
            visible_count: range.visible_column_count,
        },
    )
}
