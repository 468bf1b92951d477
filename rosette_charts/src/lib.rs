// Copyright 2025 the Rosette Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Coxcomb and radar chart widgets for `rosette_core`.
//!
//! Both charts follow the same pipeline: an ordered collection of weighted
//! items is laid out into angular segments, converted into path geometry, and
//! painted as a list of stable-identity [`rosette_core::Mark`]s that any 2D
//! backend can consume.
//!
//! - [`CoxcombChart`] renders weighted items as concentric ring segments with
//!   index-driven ring growth, percentage labels, and pointer hit-testing
//!   with selection events.
//! - [`RadarPane`] renders one or more series as radar polygons (straight or
//!   Catmull-Rom smoothed), filled sectors, or donut rings, with a
//!   calibration-ring overlay.
//!
//! The charts are single-threaded and synchronous: every trigger (resize,
//! item mutation, pointer press) invalidates, and the host pulls a full mark
//! list via `marks()`. There is no incremental diffing inside the charts;
//! retained-mode renderers can feed the mark list through
//! [`rosette_core::Scene`].

#![no_std]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

mod coxcomb;
mod data;
mod error;
mod event;
mod radar;
mod style;
mod z_order;

pub use coxcomb::{CoxcombChart, SegmentGeometry};
pub use data::{ChartItem, SortOrder};
pub use error::ChartError;
pub use event::{SelectionEvent, SubscriptionId};
pub use radar::{RadarMode, RadarPane, RadarSeries, RadarValue};
pub use style::StrokeStyle;
pub use z_order::*;
