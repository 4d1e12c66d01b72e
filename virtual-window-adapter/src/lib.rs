//! Adapter utilities for the `virtual-window` crate.
//!
//! The cores in `virtual-window` are synchronous values owned by one thread. This crate adds
//! the framework-neutral pieces most adapters end up writing:
//!
//! - A single-writer measurement queue, so layout code running elsewhere can report sizes
//!   without touching the core.
//! - Controllers that own a core plus its queue and drain pending measurements before every
//!   scroll update.
//! - Scroll anchoring by item id (e.g. loading older messages above a chat without the
//!   viewport jumping).
//!
//! No UI toolkit bindings are provided.
#![forbid(unsafe_code)]

#[macro_use]
mod macros;

mod anchor;
mod controller;
mod key;
mod queue;


pub use anchor::{ScrollAnchor, apply_anchor, capture_anchor_at_offset, capture_first_visible_anchor};
pub use controller::{Controller, GridController};
pub use key::MeasurementKey;
pub use queue::{Measurement, MeasurementQueue, MeasurementSender};
