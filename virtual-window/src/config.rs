/// Configuration for [`crate::WindowCore`].
///
/// `buffer_size` and `overscan` are in index units and are applied on both sides of the
/// visible window.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WindowConfig {
    /// Default item size in the scroll axis, used for items that are neither measured nor carry
    /// their own size.
    pub item_height: f64,
    pub container_height: f64,
    pub buffer_size: usize,
    pub overscan: usize,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            item_height: 50.0,
            container_height: 0.0,
            buffer_size: 5,
            overscan: 2,
        }
    }
}

impl WindowConfig {
    pub fn new(item_height: f64, container_height: f64) -> Self {
        Self {
            item_height,
            container_height,
            ..Self::default()
        }
    }

    pub fn with_item_height(mut self, item_height: f64) -> Self {
        self.item_height = item_height;
        self
    }

    pub fn with_container_height(mut self, container_height: f64) -> Self {
        self.container_height = container_height;
        self
    }

    pub fn with_buffer_size(mut self, buffer_size: usize) -> Self {
        self.buffer_size = buffer_size;
        self
    }

    pub fn with_overscan(mut self, overscan: usize) -> Self {
        self.overscan = overscan;
        self
    }

    /// Merges the fields set in `patch`.
    pub fn apply(&mut self, patch: &WindowConfigPatch) {
        if let Some(v) = patch.item_height {
            self.item_height = v;
        }
        if let Some(v) = patch.container_height {
            self.container_height = v;
        }
        if let Some(v) = patch.buffer_size {
            self.buffer_size = v;
        }
        if let Some(v) = patch.overscan {
            self.overscan = v;
        }
    }

    pub(crate) fn padding(&self) -> usize {
        self.buffer_size.saturating_add(self.overscan)
    }
}

/// A partial [`WindowConfig`] update. Unset fields are left untouched.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WindowConfigPatch {
    pub item_height: Option<f64>,
    pub container_height: Option<f64>,
    pub buffer_size: Option<usize>,
    pub overscan: Option<usize>,
}

impl WindowConfigPatch {
    pub fn item_height(mut self, v: f64) -> Self {
        self.item_height = Some(v);
        self
    }

    pub fn container_height(mut self, v: f64) -> Self {
        self.container_height = Some(v);
        self
    }

    pub fn buffer_size(mut self, v: usize) -> Self {
        self.buffer_size = Some(v);
        self
    }

    pub fn overscan(mut self, v: usize) -> Self {
        self.overscan = Some(v);
        self
    }
}

/// Configuration for [`crate::GridCore`].
///
/// The fixed counts slice rows/columns off the front and back of each axis. Those slices are
/// always rendered and never take part in the window math.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridConfig {
    pub row_height: f64,
    pub column_width: f64,
    pub container_height: f64,
    pub container_width: f64,
    pub buffer_size: usize,
    pub overscan: usize,
    pub fixed_rows_top: usize,
    pub fixed_rows_bottom: usize,
    pub fixed_columns_left: usize,
    pub fixed_columns_right: usize,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            row_height: 50.0,
            column_width: 100.0,
            container_height: 0.0,
            container_width: 0.0,
            buffer_size: 5,
            overscan: 2,
            fixed_rows_top: 0,
            fixed_rows_bottom: 0,
            fixed_columns_left: 0,
            fixed_columns_right: 0,
        }
    }
}

impl GridConfig {
    pub fn new(
        row_height: f64,
        column_width: f64,
        container_height: f64,
        container_width: f64,
    ) -> Self {
        Self {
            row_height,
            column_width,
            container_height,
            container_width,
            ..Self::default()
        }
    }

    pub fn with_row_height(mut self, row_height: f64) -> Self {
        self.row_height = row_height;
        self
    }

    pub fn with_column_width(mut self, column_width: f64) -> Self {
        self.column_width = column_width;
        self
    }

    pub fn with_container_height(mut self, container_height: f64) -> Self {
        self.container_height = container_height;
        self
    }

    pub fn with_container_width(mut self, container_width: f64) -> Self {
        self.container_width = container_width;
        self
    }

    pub fn with_buffer_size(mut self, buffer_size: usize) -> Self {
        self.buffer_size = buffer_size;
        self
    }

    pub fn with_overscan(mut self, overscan: usize) -> Self {
        self.overscan = overscan;
        self
    }

    pub fn with_fixed_rows(mut self, top: usize, bottom: usize) -> Self {
        self.fixed_rows_top = top;
        self.fixed_rows_bottom = bottom;
        self
    }

    pub fn with_fixed_columns(mut self, left: usize, right: usize) -> Self {
        self.fixed_columns_left = left;
        self.fixed_columns_right = right;
        self
    }

    pub fn apply(&mut self, patch: &GridConfigPatch) {
        if let Some(v) = patch.row_height {
            self.row_height = v;
        }
        if let Some(v) = patch.column_width {
            self.column_width = v;
        }
        if let Some(v) = patch.container_height {
            self.container_height = v;
        }
        if let Some(v) = patch.container_width {
            self.container_width = v;
        }
        if let Some(v) = patch.buffer_size {
            self.buffer_size = v;
        }
        if let Some(v) = patch.overscan {
            self.overscan = v;
        }
        if let Some(v) = patch.fixed_rows_top {
            self.fixed_rows_top = v;
        }
        if let Some(v) = patch.fixed_rows_bottom {
            self.fixed_rows_bottom = v;
        }
        if let Some(v) = patch.fixed_columns_left {
            self.fixed_columns_left = v;
        }
        if let Some(v) = patch.fixed_columns_right {
            self.fixed_columns_right = v;
        }
    }

    pub(crate) fn padding(&self) -> usize {
        self.buffer_size.saturating_add(self.overscan)
    }
}

/// A partial [`GridConfig`] update. Unset fields are left untouched.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridConfigPatch {
    pub row_height: Option<f64>,
    pub column_width: Option<f64>,
    pub container_height: Option<f64>,
    pub container_width: Option<f64>,
    pub buffer_size: Option<usize>,
    pub overscan: Option<usize>,
    pub fixed_rows_top: Option<usize>,
    pub fixed_rows_bottom: Option<usize>,
    pub fixed_columns_left: Option<usize>,
    pub fixed_columns_right: Option<usize>,
}

impl GridConfigPatch {
    pub fn row_height(mut self, v: f64) -> Self {
        self.row_height = Some(v);
        self
    }

    pub fn column_width(mut self, v: f64) -> Self {
        self.column_width = Some(v);
        self
    }

    pub fn container_height(mut self, v: f64) -> Self {
        self.container_height = Some(v);
        self
    }

    pub fn container_width(mut self, v: f64) -> Self {
        self.container_width = Some(v);
        self
    }

    pub fn buffer_size(mut self, v: usize) -> Self {
        self.buffer_size = Some(v);
        self
    }

    pub fn overscan(mut self, v: usize) -> Self {
        self.overscan = Some(v);
        self
    }

    pub fn fixed_rows(mut self, top: usize, bottom: usize) -> Self {
        self.fixed_rows_top = Some(top);
        self.fixed_rows_bottom = Some(bottom);
        self
    }

    pub fn fixed_columns(mut self, left: usize, right: usize) -> Self {
        self.fixed_columns_left = Some(left);
        self.fixed_columns_right = Some(right);
        self
    }
}
