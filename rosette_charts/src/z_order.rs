// Copyright 2025 the Rosette Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Suggested z-order conventions for chart-generated marks.
//!
//! Marks carry an explicit `z_index` for render ordering. The chart layer
//! sets z-indexes consistently so callers don't have to hand-tune paint
//! order. Renderers should sort by `(z_index, MarkId)` for a deterministic
//! tie-break.

/// Pane background fill.
pub const CHART_BACKGROUND: i32 = -100;
/// Radar calibration rings drawn behind series.
pub const CALIBRATION_RINGS: i32 = -50;
/// Radar spoke lines drawn behind series.
pub const SPOKE_LINES: i32 = -40;

/// Filled/stroked series geometry (segments, polygons, wedges).
pub const SERIES_FILL: i32 = 0;
/// Boundary shadow arcs painted over segment edges.
pub const SEGMENT_SHADOWS: i32 = 10;

/// Percentage and value labels.
pub const VALUE_LABELS: i32 = 40;
