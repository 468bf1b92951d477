// Copyright 2025 the Rosette Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Retained mark model and polar-geometry utilities for `rosette_charts`.
//!
//! This crate is the small runtime layer underneath the chart builders:
//! - **Marks** are stable-identity drawing commands (paths and text) with an
//!   explicit z-index for render ordering.
//! - A **[`Scene`]** retains the previous mark set and turns each new mark
//!   list into enter/update/exit diffs for incremental renderers. Immediate
//!   renderers can ignore the diffs and just draw the sorted mark list.
//! - **Geometry helpers** cover the polar plumbing shared by the chart
//!   builders: point-on-circle placement, ring-segment containment for
//!   hit-testing, arc/wedge path construction, and Catmull-Rom subdivision
//!   for smoothed polygon outlines.
//!
//! Text shaping and layout are out of scope; text marks store unshaped
//! strings.

#![no_std]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

mod color;
#[cfg(not(feature = "std"))]
mod float;
mod geom;
mod mark;
mod scene;

pub use color::{contrasting_text_color, is_dark, luminance};
pub use geom::{
    normalize_deg, polar_point, ring_arc, ring_segment_contains, subdivide_points, wedge,
};
pub use mark::{Mark, MarkId, MarkKind, MarkPayload, PathMark, TextAnchor, TextBaseline, TextMark};
pub use scene::{MarkDiff, Scene};
