//! A headless virtualization window calculator for lists and grids.
//!
//! Given a scroll position and a large item collection, the cores in this crate decide which
//! items must be materialized for display:
//!
//! - [`WindowCore`] virtualizes a linear sequence (lists, feeds).
//! - [`GridCore`] virtualizes rows × columns, with fixed leading/trailing rows and columns that
//!   are always rendered (frozen headers, footers, first columns).
//!
//! Both are UI-agnostic and fully synchronous. A TUI/GUI layer is expected to:
//! - push the container size through the configuration
//! - call `update_scroll_position` on every scroll event
//! - re-render only when the returned `needs_update` flag is set
//! - optionally feed measured sizes back (`set_item_size`, `set_row_height`, ...)
//!
//! For a single-writer measurement queue and scroll anchoring, see the
//! `virtual-window-adapter` crate.
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod axis;
mod cache;
mod config;
mod geometry;
mod grid;
mod key;
mod prefix;
mod types;
mod window;


pub use config::{GridConfig, GridConfigPatch, WindowConfig, WindowConfigPatch};
pub use grid::{FixedCells, GridCore};
pub use types::{
    CellOffset, Column, FixedRegions, GridRange, GridScrollUpdate, Item, ItemKey, ItemPosition,
    Row, ScrollUpdate, VirtualRange, WindowRange,
};
pub use window::WindowCore;

#[doc(hidden)]
pub use key::KeyCacheKey;
