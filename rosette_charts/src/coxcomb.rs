// Copyright 2025 the Rosette Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The coxcomb (polar rose) chart.
//!
//! Weighted items become ring segments whose sweep angle is their share of
//! the value sum. Ring diameter and band width grow linearly with the item
//! *index* (not the value): the first item gets the thinnest, innermost ring
//! and the last the thickest, outermost one, a deliberate spiral encoding of
//! display order. Segments wind counterclockwise from 12 o'clock.

extern crate alloc;

use alloc::boxed::Box;
use alloc::format;
use alloc::vec::Vec;

use kurbo::{Affine, Point};
use peniko::{Brush, Color};
use peniko::color::palette::css;
use rosette_core::{
    Mark, MarkId, contrasting_text_color, normalize_deg, polar_point, ring_arc,
    ring_segment_contains,
};

use crate::data::{ChartItem, SortOrder, sort_items};
use crate::error::ChartError;
use crate::event::{SelectionEvent, SelectionListeners, SubscriptionId};
use crate::z_order;

/// Default square drawing edge before the first `resize`.
const PREFERRED_SIZE: f64 = 250.0;

/// Ring diameter grows from `0.36 * size` to `0.64 * size` across indices.
const MIN_RING_FRACTION: f64 = 0.36;
const MAX_RING_FRACTION: f64 = 0.64;
/// Base band width before the per-index growth step.
const BASE_BAR_FRACTION: f64 = 0.04;

/// Labels are suppressed on segments narrower than this sweep.
const LABEL_MIN_SWEEP: f64 = 8.0;
const LABEL_FONT_FRACTION: f64 = 0.03;

/// Boundary shadows are suppressed on segments narrower than this sweep.
const SHADOW_MIN_SWEEP: f64 = 2.0;
/// Angular width of the boundary shadow arc.
const SHADOW_SWEEP: f64 = 2.0;
/// The shadow offset direction sits this far inside the casting segment.
const SHADOW_ANGLE_INSET: f64 = 5.0;
const SHADOW_SPREAD_FRACTION: f64 = 0.005;
const SHADOW_ALPHA: f32 = 0.25;

/// Curve flattening tolerance for generated paths.
const TOLERANCE: f64 = 0.1;

/// Mark id offsets relative to the chart's id base.
const SEGMENT_MARKS: u64 = 0x000;
const SHADOW_MARKS: u64 = 0x100;
const LABEL_MARKS: u64 = 0x200;

/// Per-item segment geometry derived by [`CoxcombChart::layout`].
///
/// Angles are in degrees, clockwise from 12 o'clock; lengths are in scene
/// coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SegmentGeometry {
    /// Angular start of the segment.
    pub start_angle: f64,
    /// Angular width of the segment, proportional to its value share.
    pub sweep_angle: f64,
    /// Diameter of the ring centerline the segment is stroked along.
    pub ring_diameter: f64,
    /// Stroke width of the ring band.
    pub bar_width: f64,
}

impl SegmentGeometry {
    /// Angular midpoint of the segment.
    pub fn mid_angle(&self) -> f64 {
        normalize_deg(self.start_angle + self.sweep_angle * 0.5)
    }

    /// Radius of the ring centerline, where labels are placed.
    pub fn label_radius(&self) -> f64 {
        self.ring_diameter * 0.5
    }
}

/// A coxcomb chart widget.
///
/// The chart owns its item collection and re-applies the configured
/// [`SortOrder`] on every mutation; the initial collection passed to
/// [`CoxcombChart::with_items`] is kept in the given order until the first
/// mutation. `marks()` regenerates the full frame; a degenerate layout
/// (empty collection or zero value sum) yields an empty frame instead of an
/// error.
#[derive(Debug)]
pub struct CoxcombChart {
    id_base: u64,
    width: f64,
    height: f64,
    size: f64,
    items: Vec<ChartItem>,
    order: SortOrder,
    text_color: Color,
    auto_text_color: bool,
    listeners: SelectionListeners,
}

impl Default for CoxcombChart {
    fn default() -> Self {
        Self::new()
    }
}

impl CoxcombChart {
    /// Creates an empty chart.
    pub fn new() -> Self {
        Self::with_items(Vec::new())
    }

    /// Creates a chart over `items`, preserving their order.
    pub fn with_items(items: Vec<ChartItem>) -> Self {
        Self {
            id_base: 0,
            width: PREFERRED_SIZE,
            height: PREFERRED_SIZE,
            size: PREFERRED_SIZE,
            items,
            order: SortOrder::default(),
            text_color: Color::WHITE,
            auto_text_color: true,
            listeners: SelectionListeners::default(),
        }
    }

    /// Sets the base value for generated mark ids.
    pub fn with_id_base(mut self, id_base: u64) -> Self {
        self.id_base = id_base;
        self
    }

    /// Current items in display order.
    pub fn items(&self) -> &[ChartItem] {
        &self.items
    }

    /// Replaces the item collection and re-applies the sort order.
    pub fn set_items(&mut self, items: Vec<ChartItem>) {
        self.items = items;
        self.reorder();
    }

    /// Adds an item unless one with the same name is already present, then
    /// re-applies the sort order.
    pub fn add_item(&mut self, item: ChartItem) {
        if !self.items.iter().any(|existing| existing.name == item.name) {
            self.items.push(item);
            self.reorder();
        }
    }

    /// Adds several items; duplicates by name are skipped.
    pub fn add_items(&mut self, items: impl IntoIterator<Item = ChartItem>) {
        for item in items {
            self.add_item(item);
        }
    }

    /// Removes the item with the given name, re-applying the sort order.
    pub fn remove_item(&mut self, name: &str) -> Option<ChartItem> {
        let index = self.items.iter().position(|item| item.name == name)?;
        let removed = self.items.remove(index);
        self.reorder();
        Some(removed)
    }

    /// Removes several items by name.
    pub fn remove_items<'a>(&mut self, names: impl IntoIterator<Item = &'a str>) {
        for name in names {
            self.remove_item(name);
        }
    }

    /// Sorts the collection ascending by value once, without changing the
    /// configured order.
    pub fn sort_ascending(&mut self) {
        sort_items(&mut self.items, SortOrder::Ascending);
    }

    /// Sorts the collection descending by value once, without changing the
    /// configured order.
    pub fn sort_descending(&mut self) {
        sort_items(&mut self.items, SortOrder::Descending);
    }

    /// The configured collection ordering.
    pub fn order(&self) -> SortOrder {
        self.order
    }

    /// Sets the collection ordering and re-sorts immediately.
    pub fn set_order(&mut self, order: SortOrder) {
        self.order = order;
        self.reorder();
    }

    /// The fixed label color used when auto text color is off.
    pub fn text_color(&self) -> Color {
        self.text_color
    }

    /// Sets the fixed label color.
    pub fn set_text_color(&mut self, color: Color) {
        self.text_color = color;
    }

    /// Whether label color is chosen from segment fill luminance.
    pub fn auto_text_color(&self) -> bool {
        self.auto_text_color
    }

    /// Enables or disables luminance-driven label color.
    pub fn set_auto_text_color(&mut self, auto: bool) {
        self.auto_text_color = auto;
    }

    /// Sum of all item values.
    pub fn sum_of_all_items(&self) -> f64 {
        self.items.iter().map(|item| item.value).sum()
    }

    /// Updates the drawing bounds. The chart draws in a centered square of
    /// edge `min(width, height)`; non-positive extents are ignored.
    pub fn resize(&mut self, width: f64, height: f64) {
        if width > 0.0 && height > 0.0 {
            self.width = width;
            self.height = height;
            self.size = width.min(height);
        }
    }

    /// The square drawing edge.
    pub fn size(&self) -> f64 {
        self.size
    }

    /// Last accepted bounds width.
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Last accepted bounds height.
    pub fn height(&self) -> f64 {
        self.height
    }

    fn center(&self) -> Point {
        Point::new(self.size * 0.5, self.size * 0.5)
    }

    fn reorder(&mut self) {
        sort_items(&mut self.items, self.order);
    }

    fn mark_id(&self, offset: u64, index: u64) -> MarkId {
        MarkId::from_raw(self.id_base + offset + index)
    }

    /// Computes per-item segment geometry for the current items and size.
    ///
    /// Sweep angles sum to 360° (up to floating-point rounding); ring
    /// diameter and band width grow strictly with index. Fails fast with
    /// [`ChartError::DegenerateLayout`] when the collection is empty or the
    /// values sum to zero.
    pub fn layout(&self) -> Result<Vec<SegmentGeometry>, ChartError> {
        if self.items.is_empty() {
            return Err(ChartError::DegenerateLayout);
        }
        let sum = self.sum_of_all_items();
        if sum <= 0.0 {
            return Err(ChartError::DegenerateLayout);
        }

        let step = 360.0 / sum;
        let wh_step = (MAX_RING_FRACTION - MIN_RING_FRACTION) * self.size / self.items.len() as f64;

        let mut segments = Vec::with_capacity(self.items.len());
        let mut cumulative = 0.0;
        let mut ring_diameter = MIN_RING_FRACTION * self.size;
        let mut bar_width = BASE_BAR_FRACTION * self.size;
        for item in &self.items {
            let sweep = item.value * step;
            cumulative += sweep;
            ring_diameter += wh_step;
            bar_width += wh_step;
            segments.push(SegmentGeometry {
                start_angle: normalize_deg(360.0 - cumulative),
                sweep_angle: sweep,
                ring_diameter,
                bar_width,
            });
        }
        Ok(segments)
    }

    /// Generates the full frame: ring segments, boundary shadows, and
    /// percentage labels. A degenerate layout yields an empty frame.
    pub fn marks(&self) -> Vec<Mark> {
        let Ok(segments) = self.layout() else {
            return Vec::new();
        };
        let sum = self.sum_of_all_items();
        let center = self.center();
        let font_size = self.size * LABEL_FONT_FRACTION;
        let spread = self.size * SHADOW_SPREAD_FRACTION;
        let shadow_brush = Brush::Solid(css::BLACK.with_alpha(SHADOW_ALPHA));
        let last = segments.len() - 1;

        let mut out = Vec::with_capacity(segments.len() * 3);
        for (i, (item, seg)) in self.items.iter().zip(&segments).enumerate() {
            let index = i as u64;
            let path = ring_arc(
                center,
                seg.ring_diameter,
                seg.start_angle,
                seg.sweep_angle,
                TOLERANCE,
            );
            out.push(
                Mark::path(self.mark_id(SEGMENT_MARKS, index), path)
                    .with_stroke(item.fill, seg.bar_width)
                    .with_z_index(z_order::SERIES_FILL),
            );

            // A narrow translucent arc over the neighbor's edge stands in for
            // the drop-shadow highlight at each internal segment boundary.
            if i != last && seg.sweep_angle > SHADOW_MIN_SWEEP {
                out.push(self.shadow_mark(
                    self.mark_id(SHADOW_MARKS, 2 * index),
                    seg,
                    seg.start_angle - SHADOW_SWEEP,
                    seg.start_angle + SHADOW_ANGLE_INSET,
                    spread,
                    &shadow_brush,
                ));
                if i == 0 {
                    // The first segment also shades its leading edge at the top.
                    out.push(self.shadow_mark(
                        self.mark_id(SHADOW_MARKS, 2 * index + 1),
                        seg,
                        0.0,
                        360.0 - SHADOW_ANGLE_INSET,
                        spread,
                        &shadow_brush,
                    ));
                }
            }

            if seg.sweep_angle > LABEL_MIN_SWEEP {
                let fill = if self.auto_text_color {
                    contrasting_text_color(item.fill)
                } else {
                    self.text_color
                };
                let pos = polar_point(center, seg.mid_angle(), seg.label_radius());
                let text = format!("{:.0}%", item.value / sum * 100.0);
                out.push(
                    Mark::text(self.mark_id(LABEL_MARKS, index), pos, text)
                        .with_font_size(font_size)
                        .with_fill(fill)
                        .with_z_index(z_order::VALUE_LABELS),
                );
            }
        }
        out
    }

    fn shadow_mark(
        &self,
        id: MarkId,
        seg: &SegmentGeometry,
        arc_start: f64,
        offset_angle: f64,
        spread: f64,
        brush: &Brush,
    ) -> Mark {
        let mut path = ring_arc(
            self.center(),
            seg.ring_diameter,
            arc_start,
            SHADOW_SWEEP,
            TOLERANCE,
        );
        path.apply_affine(Affine::translate(
            polar_point(Point::ZERO, offset_angle, spread).to_vec2(),
        ));
        Mark::path(id, path)
            .with_stroke(brush.clone(), seg.bar_width)
            .with_z_index(z_order::SEGMENT_SHADOWS)
    }

    /// Returns the index of the segment whose ring band contains `p`.
    ///
    /// Segments are checked in display order and the first match wins;
    /// points in the center hole, in a gap, or outside every ring yield
    /// `None`, as does a degenerate layout.
    pub fn hit_test(&self, p: Point) -> Option<usize> {
        let segments = self.layout().ok()?;
        let center = self.center();
        segments.iter().position(|seg| {
            ring_segment_contains(
                p,
                center,
                seg.ring_diameter,
                seg.bar_width,
                seg.start_angle,
                seg.sweep_angle,
            )
        })
    }

    /// Hit-tests a pointer press and fires the selection listeners on a hit.
    pub fn pointer_pressed(&mut self, p: Point) -> Option<usize> {
        let index = self.hit_test(p)?;
        let event = SelectionEvent {
            index,
            item: self.items[index].clone(),
        };
        self.listeners.emit(&event);
        Some(index)
    }

    /// Subscribes to selection events fired by [`Self::pointer_pressed`].
    pub fn on_select(
        &mut self,
        listener: impl FnMut(&SelectionEvent) + 'static,
    ) -> SubscriptionId {
        self.listeners.subscribe(Box::new(listener))
    }

    /// Removes one selection subscription; returns whether it existed.
    pub fn remove_on_select(&mut self, id: SubscriptionId) -> bool {
        self.listeners.unsubscribe(id)
    }

    /// Detaches all selection listeners.
    pub fn dispose(&mut self) {
        self.listeners.clear();
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::rc::Rc;
    use alloc::vec;
    use core::cell::Cell;

    use peniko::color::palette::css;
    use rosette_core::MarkPayload;

    use super::*;

    fn chart(values: &[f64]) -> CoxcombChart {
        let items = values
            .iter()
            .enumerate()
            .map(|(i, v)| ChartItem::new(format!("item-{i}"), *v, css::TOMATO))
            .collect();
        CoxcombChart::with_items(items)
    }

    #[test]
    fn sweep_angles_sum_to_360() {
        let chart = chart(&[5.0, 1.0, 7.0, 3.2]);
        let segments = chart.layout().expect("layout");
        let total: f64 = segments.iter().map(|s| s.sweep_angle).sum();
        assert!((total - 360.0).abs() < 1e-6, "sum was {total}");
    }

    #[test]
    fn ring_growth_is_monotonic_in_index() {
        let chart = chart(&[9.0, 1.0, 4.0]);
        let segments = chart.layout().expect("layout");
        for pair in segments.windows(2) {
            assert!(pair[0].ring_diameter < pair[1].ring_diameter);
            assert!(pair[0].bar_width < pair[1].bar_width);
        }
        // Index-driven, not value-driven: the largest value is first here,
        // yet it still gets the smallest ring.
        let size = chart.size();
        assert!((segments[0].ring_diameter - (0.36 + 0.28 / 3.0) * size).abs() < 1e-9);
        assert!((segments[2].ring_diameter - 0.64 * size).abs() < 1e-9);
    }

    #[test]
    fn two_item_example() {
        let chart = chart(&[10.0, 30.0]);
        let segments = chart.layout().expect("layout");
        assert!((segments[0].sweep_angle - 90.0).abs() < 1e-9);
        assert!((segments[1].sweep_angle - 270.0).abs() < 1e-9);
        // Segments wind counterclockwise from 12 o'clock.
        assert!((segments[0].start_angle - 270.0).abs() < 1e-9);
        assert!(segments[1].start_angle.abs() < 1e-9);
    }

    #[test]
    fn empty_collection_is_degenerate() {
        let chart = CoxcombChart::new();
        assert_eq!(chart.layout(), Err(ChartError::DegenerateLayout));
        assert!(chart.marks().is_empty(), "no draw calls for an empty chart");
    }

    #[test]
    fn zero_value_sum_is_degenerate() {
        let chart = chart(&[0.0, 0.0]);
        assert_eq!(chart.layout(), Err(ChartError::DegenerateLayout));
        assert!(chart.marks().is_empty());
    }

    #[test]
    fn hit_test_returns_the_segment_under_the_pointer() {
        let mut chart = chart(&[1.0, 1.0, 1.0, 1.0]);
        chart.resize(200.0, 200.0);
        let center = Point::new(100.0, 100.0);
        let segments = chart.layout().expect("layout");

        for (i, seg) in segments.iter().enumerate() {
            let p = polar_point(center, seg.mid_angle(), seg.label_radius());
            assert_eq!(chart.hit_test(p), Some(i), "segment {i}");
        }

        // Center hole and beyond the outermost ring.
        assert_eq!(chart.hit_test(center), None);
        assert_eq!(chart.hit_test(polar_point(center, 45.0, 98.0)), None);
    }

    #[test]
    fn mutations_reapply_the_sort_order() {
        let mut chart = CoxcombChart::new();
        chart.add_item(ChartItem::new("a", 1.0, css::TOMATO));
        chart.add_item(ChartItem::new("b", 5.0, css::GOLD));
        chart.add_item(ChartItem::new("c", 3.0, css::TEAL));

        // Default order is descending.
        let values: Vec<f64> = chart.items().iter().map(|i| i.value).collect();
        assert_eq!(values, vec![5.0, 3.0, 1.0]);

        chart.set_order(SortOrder::Ascending);
        let values: Vec<f64> = chart.items().iter().map(|i| i.value).collect();
        assert_eq!(values, vec![1.0, 3.0, 5.0]);

        // Duplicate names are refused.
        chart.add_item(ChartItem::new("b", 9.0, css::GOLD));
        assert_eq!(chart.items().len(), 3);

        assert!(chart.remove_item("b").is_some());
        assert_eq!(chart.items().len(), 2);
        assert!(chart.remove_item("b").is_none());
    }

    #[test]
    fn auto_text_color_follows_fill_luminance() {
        let mut chart = CoxcombChart::with_items(vec![ChartItem::new("n", 4.0, css::NAVY)]);

        let label_fill = |chart: &CoxcombChart| {
            chart
                .marks()
                .into_iter()
                .find_map(|m| match m.payload {
                    MarkPayload::Text(t) => Some(t.fill),
                    MarkPayload::Path(_) => None,
                })
                .expect("label mark")
        };
        assert_eq!(label_fill(&chart), Brush::Solid(Color::WHITE));

        chart.set_auto_text_color(false);
        chart.set_text_color(css::GOLD);
        assert_eq!(label_fill(&chart), Brush::Solid(css::GOLD));
    }

    #[test]
    fn narrow_segments_get_no_label() {
        // 2 of 100 -> 7.2 degrees, below the 8 degree label threshold.
        let chart = chart(&[98.0, 2.0]);
        let labels = chart
            .marks()
            .into_iter()
            .filter(|m| matches!(m.payload, MarkPayload::Text(_)))
            .count();
        assert_eq!(labels, 1);
    }

    #[test]
    fn pointer_press_fires_selection_until_dispose() {
        let mut chart = chart(&[1.0, 1.0]);
        chart.resize(200.0, 200.0);
        let segments = chart.layout().expect("layout");
        let center = Point::new(100.0, 100.0);
        let p = polar_point(center, segments[1].mid_angle(), segments[1].label_radius());

        let selected = Rc::new(Cell::new(None));
        let sink = Rc::clone(&selected);
        chart.on_select(move |event| sink.set(Some(event.index)));

        assert_eq!(chart.pointer_pressed(p), Some(1));
        assert_eq!(selected.get(), Some(1));

        selected.set(None);
        chart.dispose();
        assert_eq!(chart.pointer_pressed(p), Some(1));
        assert_eq!(selected.get(), None, "disposed listeners must not fire");
    }
}
