// Copyright 2025 the Rosette Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The radar pane and its series render modes.
//!
//! A pane holds any number of series over a shared polar scale. Each series
//! picks its own [`RadarMode`]: straight or smoothed value polygons, filled
//! sectors, or a donut ring. The calibration overlay (concentric rings and
//! spokes) is shared by all series and emitted once per frame.

extern crate alloc;

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use kurbo::{BezPath, Circle, Point, Shape};
use peniko::{Brush, Color, GradientKind, RadialGradientPosition};
use rosette_core::{Mark, MarkId, polar_point, ring_arc, subdivide_points, wedge};
use smallvec::SmallVec;

use crate::error::ChartError;
use crate::style::StrokeStyle;
use crate::z_order;

/// Default square drawing edge before the first `resize`.
const PREFERRED_SIZE: f64 = 250.0;

/// The chart proper occupies this fraction of the pane edge.
const CHART_FRACTION: f64 = 0.9;
/// Radial span of the value scale, as a fraction of the chart edge.
const RANGE_FRACTION: f64 = 0.357_14;
/// Radius of the minimum value, as a fraction of the chart edge.
const OFFSET_FRACTION: f64 = 0.142_86;
/// Radius of the fixed base vertex every polygon starts from.
const BASE_RADIUS_FRACTION: f64 = 0.137_61;

/// Outermost calibration ring radius, as a fraction of the pane edge.
const OVERLAY_RADIUS_FRACTION: f64 = 0.45;
const OVERLAY_RING_STEP: f64 = 0.05;
const OVERLAY_RING_COUNT: usize = 9;
const GRID_WIDTH: f64 = 1.0;
const GRID_COLOR: Color = Color::from_rgba8(120, 120, 120, 80);

/// Donut mode ring geometry, as fractions of the pane edge.
const DONUT_RING_FRACTION: f64 = 0.8;
const DONUT_BAR_FRACTION: f64 = 0.1;
const DONUT_LABEL_FRACTION: f64 = 0.4;

const LABEL_FONT_FRACTION: f64 = 0.03;

/// Number of line segments each polygon edge is split into when smoothing.
const SMOOTHING_FACTOR: usize = 8;

/// Curve flattening tolerance for generated paths.
const TOLERANCE: f64 = 0.1;

/// Mark id offsets relative to the pane's id base. Each series gets its own
/// block of `SERIES_MARKS` ids.
const BACKGROUND_MARK: u64 = 0x00;
const RING_MARKS: u64 = 0x10;
const SPOKE_MARKS: u64 = 0x40;
const SERIES_MARKS: u64 = 0x100;

/// Default translucent series fill.
const DEFAULT_SERIES_FILL: Color = Color::from_rgba8(0, 100, 200, 128);

/// How a [`RadarSeries`] is rendered.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RadarMode {
    /// Straight lines between value vertices.
    #[default]
    Polygon,
    /// Value vertices joined by a Catmull-Rom interpolated outline.
    SmoothPolygon,
    /// One filled circle sector per value.
    Sector,
    /// A ring of arcs whose sweeps are proportional value shares.
    Donut,
}

/// A single named value within a series.
///
/// The color is only consulted in [`RadarMode::Donut`], where each arc is
/// stroked in its value's color; the polygon modes draw with the series
/// fill and stroke instead.
#[derive(Clone, Debug, PartialEq)]
pub struct RadarValue {
    /// Value name, used for identity and tooling.
    pub name: String,
    /// The measured value, in `range_y` units.
    pub value: f64,
    /// Arc color in donut mode.
    pub color: Color,
}

impl RadarValue {
    /// Creates a new value.
    pub fn new(name: impl Into<String>, value: f64, color: Color) -> Self {
        Self {
            name: name.into(),
            value,
            color,
        }
    }
}

/// One data series of a [`RadarPane`].
#[derive(Clone, Debug)]
pub struct RadarSeries {
    /// Series name.
    pub name: String,
    /// Values in spoke order; spoke `k` sits at `k * 360 / len` degrees.
    pub values: Vec<RadarValue>,
    /// Fill brush for the polygon and sector modes.
    pub fill: Brush,
    /// Outline stroke for the polygon and sector modes.
    pub stroke: StrokeStyle,
    /// How this series is rendered.
    pub mode: RadarMode,
}

impl RadarSeries {
    /// Creates a series with the default fill, stroke, and mode.
    pub fn new(name: impl Into<String>, values: Vec<RadarValue>) -> Self {
        Self {
            name: name.into(),
            values,
            fill: Brush::Solid(DEFAULT_SERIES_FILL),
            stroke: StrokeStyle::default(),
            mode: RadarMode::default(),
        }
    }

    /// Builder-style fill brush. Radial gradients are recentered onto the
    /// pane when drawn.
    pub fn with_fill(mut self, fill: impl Into<Brush>) -> Self {
        self.fill = fill.into();
        self
    }

    /// Builder-style outline stroke.
    pub fn with_stroke(mut self, stroke: StrokeStyle) -> Self {
        self.stroke = stroke;
        self
    }

    /// Builder-style render mode.
    pub fn with_mode(mut self, mode: RadarMode) -> Self {
        self.mode = mode;
        self
    }

    /// Smallest value in the series, or `None` when it holds no values.
    pub fn min(&self) -> Option<f64> {
        self.values.iter().map(|v| v.value).reduce(f64::min)
    }
}

/// A pane that renders any number of radar series over a shared scale.
///
/// Values map to radii linearly: the pane-wide minimum sits at the scale
/// offset radius and `range_y` value units span the full scale. Values are
/// not clamped, so a value more than `range_y` above the minimum lands
/// outside the calibration rings.
#[derive(Clone, Debug)]
pub struct RadarPane {
    id_base: u64,
    size: f64,
    range_y: f64,
    background: Brush,
    series: Vec<RadarSeries>,
}

impl RadarPane {
    /// Creates an empty pane over the given background brush.
    pub fn new(background: impl Into<Brush>) -> Self {
        Self {
            id_base: 0,
            size: PREFERRED_SIZE,
            range_y: 100.0,
            background: background.into(),
            series: Vec::new(),
        }
    }

    /// Sets the base value for generated mark ids.
    pub fn with_id_base(mut self, id_base: u64) -> Self {
        self.id_base = id_base;
        self
    }

    /// Adds a series; a series without values is rejected.
    pub fn add_series(&mut self, series: RadarSeries) -> Result<(), ChartError> {
        if series.values.is_empty() {
            return Err(ChartError::EmptySeries);
        }
        self.series.push(series);
        Ok(())
    }

    /// Current series in insertion order.
    pub fn series(&self) -> &[RadarSeries] {
        &self.series
    }

    /// The number of value units spanned by the radial scale.
    pub fn range_y(&self) -> f64 {
        self.range_y
    }

    /// Sets the radial scale span; non-positive spans are ignored.
    pub fn set_range_y(&mut self, range_y: f64) {
        if range_y > 0.0 {
            self.range_y = range_y;
        }
    }

    /// Replaces the background brush.
    pub fn set_background(&mut self, background: impl Into<Brush>) {
        self.background = background.into();
    }

    /// Updates the drawing bounds. The pane draws in a centered square of
    /// edge `min(width, height)`; non-positive extents are ignored.
    pub fn resize(&mut self, width: f64, height: f64) {
        if width > 0.0 && height > 0.0 {
            self.size = width.min(height);
        }
    }

    /// The square drawing edge.
    pub fn size(&self) -> f64 {
        self.size
    }

    fn center(&self) -> Point {
        Point::new(self.size * 0.5, self.size * 0.5)
    }

    /// Pane-wide minimum value across all series.
    fn min_value(&self) -> f64 {
        self.series
            .iter()
            .filter_map(RadarSeries::min)
            .reduce(f64::min)
            .unwrap_or(0.0)
    }

    /// Maps a value to its radius on the shared scale.
    fn radius_of(&self, value: f64, min: f64) -> f64 {
        let chart = CHART_FRACTION * self.size;
        OFFSET_FRACTION * chart + (value - min) / self.range_y * RANGE_FRACTION * chart
    }

    /// Generates the full frame: background, the shared calibration
    /// overlay, and every series in its own render mode.
    pub fn marks(&self) -> Vec<Mark> {
        let spokes = self.series.iter().map(|s| s.values.len()).max().unwrap_or(0);
        if spokes == 0 {
            return Vec::new();
        }
        let center = self.center();
        let outer = OVERLAY_RADIUS_FRACTION * self.size;
        let min = self.min_value();

        let mut out = Vec::new();
        out.push(
            Mark::path(
                MarkId::from_raw(self.id_base + BACKGROUND_MARK),
                Circle::new(center, outer).to_path(TOLERANCE),
            )
            .with_fill(recenter_radial(&self.background, center, outer))
            .with_z_index(z_order::CHART_BACKGROUND),
        );
        self.overlay_marks(&mut out, spokes, center, outer);

        for (index, series) in self.series.iter().enumerate() {
            if series.values.is_empty() {
                continue;
            }
            let base = self.id_base + SERIES_MARKS * (index as u64 + 1);
            match series.mode {
                RadarMode::Polygon => self.polygon_marks(&mut out, series, base, min, false),
                RadarMode::SmoothPolygon => self.polygon_marks(&mut out, series, base, min, true),
                RadarMode::Sector => self.sector_marks(&mut out, series, base, min),
                RadarMode::Donut => self.donut_marks(&mut out, series, base),
            }
        }
        out
    }

    fn overlay_marks(&self, out: &mut Vec<Mark>, spokes: usize, center: Point, outer: f64) {
        let grid = Brush::Solid(GRID_COLOR);
        for i in 0..OVERLAY_RING_COUNT {
            let radius = outer - OVERLAY_RING_STEP * self.size * i as f64;
            if radius <= 0.0 {
                break;
            }
            out.push(
                Mark::path(
                    MarkId::from_raw(self.id_base + RING_MARKS + i as u64),
                    Circle::new(center, radius).to_path(TOLERANCE),
                )
                .with_stroke(grid.clone(), GRID_WIDTH)
                .with_z_index(z_order::CALIBRATION_RINGS),
            );
        }
        let step = 360.0 / spokes as f64;
        for k in 0..spokes {
            let mut path = BezPath::new();
            path.move_to(polar_point(center, k as f64 * step, outer));
            path.line_to(center);
            out.push(
                Mark::path(MarkId::from_raw(self.id_base + SPOKE_MARKS + k as u64), path)
                    .with_stroke(grid.clone(), GRID_WIDTH)
                    .with_z_index(z_order::SPOKE_LINES),
            );
        }
    }

    /// Vertex ring shared by the polygon modes: a fixed base vertex at 12
    /// o'clock, one vertex per value, and a closing vertex that repeats the
    /// last radius at a full turn.
    fn vertex_ring(&self, series: &RadarSeries, min: f64) -> SmallVec<[Point; 16]> {
        let center = self.center();
        let step = 360.0 / series.values.len() as f64;
        let mut pts = SmallVec::with_capacity(series.values.len() + 2);
        pts.push(polar_point(center, 0.0, BASE_RADIUS_FRACTION * self.size));
        for (k, v) in series.values.iter().enumerate() {
            pts.push(polar_point(center, k as f64 * step, self.radius_of(v.value, min)));
        }
        let last = series.values[series.values.len() - 1].value;
        pts.push(polar_point(center, 360.0, self.radius_of(last, min)));
        pts
    }

    fn polygon_marks(
        &self,
        out: &mut Vec<Mark>,
        series: &RadarSeries,
        base: u64,
        min: f64,
        smooth: bool,
    ) {
        let ring = self.vertex_ring(series, min);
        let pts: SmallVec<[Point; 16]> = if smooth {
            subdivide_points(&ring, SMOOTHING_FACTOR).into_iter().collect()
        } else {
            ring
        };
        let mut path = BezPath::new();
        path.move_to(pts[0]);
        for p in &pts[1..] {
            path.line_to(*p);
        }
        path.close_path();

        let outer = OVERLAY_RADIUS_FRACTION * self.size;
        out.push(
            Mark::path(MarkId::from_raw(base), path)
                .with_fill(recenter_radial(&series.fill, self.center(), outer))
                .with_stroke(series.stroke.brush.clone(), series.stroke.stroke_width)
                .with_z_index(z_order::SERIES_FILL),
        );
    }

    fn sector_marks(&self, out: &mut Vec<Mark>, series: &RadarSeries, base: u64, min: f64) {
        let center = self.center();
        let outer = OVERLAY_RADIUS_FRACTION * self.size;
        let fill = recenter_radial(&series.fill, center, outer);
        let step = 360.0 / series.values.len() as f64;
        for (k, v) in series.values.iter().enumerate() {
            let path = wedge(
                center,
                self.radius_of(v.value, min),
                k as f64 * step,
                step,
                TOLERANCE,
            );
            out.push(
                Mark::path(MarkId::from_raw(base + k as u64), path)
                    .with_fill(fill.clone())
                    .with_stroke(series.stroke.brush.clone(), series.stroke.stroke_width)
                    .with_z_index(z_order::SERIES_FILL),
            );
        }
    }

    /// One stroked arc per value, sweeping clockwise from 12 o'clock in
    /// proportion to the value's share of the series sum.
    fn donut_marks(&self, out: &mut Vec<Mark>, series: &RadarSeries, base: u64) {
        let sum: f64 = series.values.iter().map(|v| v.value).sum();
        if sum <= 0.0 {
            return;
        }
        let center = self.center();
        let ring_diameter = DONUT_RING_FRACTION * self.size;
        let bar_width = DONUT_BAR_FRACTION * self.size;
        let label_radius = DONUT_LABEL_FRACTION * self.size;
        let font_size = LABEL_FONT_FRACTION * self.size;

        let mut start = 0.0;
        for (j, v) in series.values.iter().enumerate() {
            let sweep = v.value * 360.0 / sum;
            let path = ring_arc(center, ring_diameter, start, sweep, TOLERANCE);
            out.push(
                Mark::path(MarkId::from_raw(base + 2 * j as u64), path)
                    .with_stroke(v.color, bar_width)
                    .with_z_index(z_order::SERIES_FILL),
            );
            let pos = polar_point(center, start + sweep * 0.5, label_radius);
            out.push(
                Mark::text(
                    MarkId::from_raw(base + 2 * j as u64 + 1),
                    pos,
                    format!("{:.0}", v.value),
                )
                .with_font_size(font_size)
                .with_fill(Color::WHITE)
                .with_z_index(z_order::VALUE_LABELS),
            );
            start += sweep;
        }
    }
}

/// Recenters a radial gradient brush onto the pane. Solid brushes, images,
/// and linear gradients pass through untouched.
#[expect(clippy::cast_possible_truncation, reason = "gradient radii are f32")]
fn recenter_radial(brush: &Brush, center: Point, radius: f64) -> Brush {
    match brush {
        Brush::Gradient(gradient) if matches!(gradient.kind, GradientKind::Radial { .. }) => {
            let mut gradient = gradient.clone();
            gradient.kind = GradientKind::Radial(RadialGradientPosition {
                start_center: center,
                start_radius: 0.0,
                end_center: center,
                end_radius: radius as f32,
            });
            Brush::Gradient(gradient)
        }
        other => other.clone(),
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use kurbo::PathEl;
    use peniko::Gradient;
    use peniko::color::palette::css;
    use rosette_core::MarkPayload;

    use super::*;

    fn values(raw: &[f64]) -> Vec<RadarValue> {
        raw.iter()
            .enumerate()
            .map(|(i, v)| RadarValue::new(format!("v{i}"), *v, css::TOMATO))
            .collect()
    }

    fn series_marks(pane: &RadarPane, index: u64) -> Vec<Mark> {
        let base = SERIES_MARKS * (index + 1);
        pane.marks()
            .into_iter()
            .filter(|m| m.id.0 >= base && m.id.0 < base + SERIES_MARKS)
            .collect()
    }

    #[test]
    fn empty_pane_draws_nothing() {
        let pane = RadarPane::new(Color::TRANSPARENT);
        assert!(pane.marks().is_empty());
    }

    #[test]
    fn empty_series_is_rejected() {
        let mut pane = RadarPane::new(Color::TRANSPARENT);
        assert_eq!(
            pane.add_series(RadarSeries::new("empty", Vec::new())),
            Err(ChartError::EmptySeries)
        );
    }

    #[test]
    fn polygon_has_one_line_per_vertex() {
        let mut pane = RadarPane::new(Color::TRANSPARENT);
        pane.add_series(RadarSeries::new("s", values(&[10.0, 40.0, 25.0, 60.0, 5.0])))
            .expect("series");

        let marks = series_marks(&pane, 0);
        assert_eq!(marks.len(), 1);
        let MarkPayload::Path(path) = &marks[0].payload else {
            panic!("polygon mark must be a path");
        };
        // Base vertex, five value vertices, closing vertex, close.
        assert_eq!(path.path.elements().len(), 8);
        assert!(matches!(path.path.elements()[0], PathEl::MoveTo(_)));
        assert!(matches!(path.path.elements()[7], PathEl::ClosePath));
    }

    #[test]
    fn smoothing_subdivides_every_edge() {
        let mut pane = RadarPane::new(Color::TRANSPARENT);
        let series = RadarSeries::new("s", values(&[10.0, 40.0, 25.0, 60.0, 5.0]))
            .with_mode(RadarMode::SmoothPolygon);
        pane.add_series(series).expect("series");

        let marks = series_marks(&pane, 0);
        let MarkPayload::Path(path) = &marks[0].payload else {
            panic!("smooth polygon mark must be a path");
        };
        // 7 vertices -> 6 edges of 8 segments each, plus move and close.
        assert_eq!(path.path.elements().len(), 6 * 8 + 2);
    }

    #[test]
    fn sector_mode_emits_one_wedge_per_value() {
        let mut pane = RadarPane::new(Color::TRANSPARENT);
        let series =
            RadarSeries::new("s", values(&[10.0, 40.0, 25.0])).with_mode(RadarMode::Sector);
        pane.add_series(series).expect("series");

        let marks = series_marks(&pane, 0);
        assert_eq!(marks.len(), 3);
        assert!(marks
            .iter()
            .all(|m| matches!(m.payload, MarkPayload::Path(_))));
    }

    #[test]
    fn donut_arcs_sweep_the_full_turn_with_white_labels() {
        let mut pane = RadarPane::new(Color::TRANSPARENT);
        let series =
            RadarSeries::new("s", values(&[10.0, 30.0, 60.0])).with_mode(RadarMode::Donut);
        pane.add_series(series).expect("series");

        let marks = series_marks(&pane, 0);
        let arcs = marks
            .iter()
            .filter(|m| matches!(m.payload, MarkPayload::Path(_)))
            .count();
        let labels: Vec<_> = marks
            .iter()
            .filter_map(|m| match &m.payload {
                MarkPayload::Text(t) => Some(t),
                MarkPayload::Path(_) => None,
            })
            .collect();
        assert_eq!(arcs, 3);
        assert_eq!(labels.len(), 3);
        assert!(labels.iter().all(|t| t.fill == Brush::Solid(Color::WHITE)));
        assert_eq!(labels[1].text, "30");
    }

    #[test]
    fn values_map_linearly_onto_the_radial_scale() {
        let mut pane = RadarPane::new(Color::TRANSPARENT);
        pane.resize(200.0, 200.0);
        pane.add_series(RadarSeries::new("s", values(&[0.0, 100.0, 50.0])))
            .expect("series");

        let size = pane.size();
        let chart = 0.9 * size;
        // Pane minimum sits at the offset radius; minimum plus the full
        // range spans out to the outermost calibration ring.
        let min = pane.min_value();
        assert!((pane.radius_of(0.0, min) - 0.142_86 * chart).abs() < 1e-9);
        assert!((pane.radius_of(100.0, min) - 0.45 * size).abs() < 1e-6);

        // Doubling the scale span halves the radial growth per unit.
        pane.set_range_y(200.0);
        assert!((pane.radius_of(100.0, min) - (0.142_86 + 0.357_14 / 2.0) * chart).abs() < 1e-6);
    }

    #[test]
    fn overlay_is_emitted_once_for_many_series() {
        let mut pane = RadarPane::new(Color::TRANSPARENT);
        pane.add_series(RadarSeries::new("a", values(&[1.0, 2.0, 3.0, 4.0])))
            .expect("series");
        pane.add_series(RadarSeries::new("b", values(&[4.0, 3.0, 2.0, 1.0])))
            .expect("series");

        let marks = pane.marks();
        let rings = marks
            .iter()
            .filter(|m| m.z_index == z_order::CALIBRATION_RINGS)
            .count();
        let spokes = marks
            .iter()
            .filter(|m| m.z_index == z_order::SPOKE_LINES)
            .count();
        assert_eq!(rings, 9);
        assert_eq!(spokes, 4);
    }

    #[test]
    fn radial_gradient_fill_is_recentered_on_the_pane() {
        let mut pane = RadarPane::new(Color::TRANSPARENT);
        pane.resize(200.0, 200.0);
        let gradient = Gradient::new_radial(Point::new(0.0, 0.0), 1.0)
            .with_stops([css::TOMATO, css::NAVY]);
        pane.add_series(RadarSeries::new("s", values(&[5.0, 6.0, 7.0])).with_fill(gradient))
            .expect("series");

        let marks = series_marks(&pane, 0);
        let MarkPayload::Path(path) = &marks[0].payload else {
            panic!("polygon mark must be a path");
        };
        let Brush::Gradient(gradient) = &path.fill else {
            panic!("fill must stay a gradient");
        };
        let GradientKind::Radial(RadialGradientPosition {
            start_center,
            end_center,
            end_radius,
            ..
        }) = gradient.kind
        else {
            panic!("fill must stay radial");
        };
        assert_eq!(start_center, Point::new(100.0, 100.0));
        assert_eq!(end_center, Point::new(100.0, 100.0));
        assert!((f64::from(end_radius) - 90.0).abs() < 1e-6);
    }
}
