// Copyright 2025 the Rosette Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Polar geometry helpers shared by the chart builders.
//!
//! All angles are in degrees, measured clockwise from 12 o'clock, matching
//! the charts' segment layout convention. Scene coordinates are y-down.

extern crate alloc;

use alloc::vec::Vec;

use kurbo::{Arc, BezPath, Circle, Point, Shape, Vec2};

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

/// Normalizes an angle in degrees into `[0, 360)`.
pub fn normalize_deg(angle: f64) -> f64 {
    let a = angle % 360.0;
    if a < 0.0 { a + 360.0 } else { a }
}

/// Returns the point at `angle_deg` (clockwise from 12 o'clock) and `radius`
/// around `center`.
pub fn polar_point(center: Point, angle_deg: f64, radius: f64) -> Point {
    let rad = angle_deg.to_radians();
    Point::new(center.x + rad.sin() * radius, center.y - rad.cos() * radius)
}

/// Tests whether `p` lies on the angular ring band described by a ring
/// centerline diameter, a band (stroke) width, and an angular span.
///
/// The band covers radii `[diameter/2 - width/2, diameter/2 + width/2]`
/// around `center` and angles `[start_deg, start_deg + sweep_deg)` clockwise
/// from 12 o'clock. A sweep of 360 or more matches the full band.
pub fn ring_segment_contains(
    p: Point,
    center: Point,
    ring_diameter: f64,
    bar_width: f64,
    start_deg: f64,
    sweep_deg: f64,
) -> bool {
    let radius = ring_diameter * 0.5;
    let dx = p.x - center.x;
    let dy = p.y - center.y;
    let dist = dx.hypot(dy);
    if dist < radius - bar_width * 0.5 || dist > radius + bar_width * 0.5 {
        return false;
    }
    if sweep_deg >= 360.0 {
        return true;
    }
    // Clockwise-from-top angle of the query point.
    let theta = normalize_deg(dx.atan2(-dy).to_degrees());
    normalize_deg(theta - start_deg) < sweep_deg
}

/// Converts a clockwise-from-top angle into the screen-space radian
/// convention used by [`kurbo::Arc`] (measured from 3 o'clock, y-down).
fn arc_start_radians(angle_deg: f64) -> f64 {
    angle_deg.to_radians() - core::f64::consts::FRAC_PI_2
}

/// Builds an open arc path along the circle of the given centerline
/// `diameter`, spanning `sweep_deg` clockwise from `start_deg`.
///
/// The arc is meant to be stroked (a ring band when the stroke width equals
/// the band width); it carries no closing segments.
pub fn ring_arc(
    center: Point,
    diameter: f64,
    start_deg: f64,
    sweep_deg: f64,
    tolerance: f64,
) -> BezPath {
    let radius = diameter * 0.5;
    let arc = Arc::new(
        center,
        Vec2::new(radius, radius),
        arc_start_radians(start_deg),
        sweep_deg.to_radians(),
        0.0,
    );
    arc.path_elements(tolerance).collect()
}

/// Builds a closed pie wedge from `center` with the given outer `radius`,
/// spanning `sweep_deg` clockwise from `start_deg`.
pub fn wedge(
    center: Point,
    radius: f64,
    start_deg: f64,
    sweep_deg: f64,
    tolerance: f64,
) -> BezPath {
    let circle = Circle::new(center, radius);
    let segment = circle.segment(0.0, arc_start_radians(start_deg), sweep_deg.to_radians());
    segment.path_elements(tolerance).collect()
}

/// Subdivides a polyline with a uniform Catmull-Rom spline.
///
/// Each input segment is replaced by `factor` interpolated steps, so `n`
/// input points yield `(n - 1) * factor + 1` output points. The curve passes
/// through every input point, and endpoints are preserved exactly: a closed
/// input loop (first point equals last) stays closed after subdivision.
///
/// Inputs with fewer than two points, or a zero factor, are returned
/// unchanged.
pub fn subdivide_points(points: &[Point], factor: usize) -> Vec<Point> {
    let n = points.len();
    if n < 2 || factor == 0 {
        return points.to_vec();
    }

    let mut out = Vec::with_capacity((n - 1) * factor + 1);
    for i in 0..n - 1 {
        // Clamp the outer control points at the ends of the polyline.
        let p0 = points[i.saturating_sub(1)];
        let p1 = points[i];
        let p2 = points[i + 1];
        let p3 = points[(i + 2).min(n - 1)];
        for j in 0..factor {
            let t = j as f64 / factor as f64;
            out.push(catmull_rom(p0, p1, p2, p3, t));
        }
    }
    out.push(points[n - 1]);
    out
}

fn catmull_rom(p0: Point, p1: Point, p2: Point, p3: Point, t: f64) -> Point {
    let t2 = t * t;
    let t3 = t2 * t;
    let axis = |a: f64, b: f64, c: f64, d: f64| {
        0.5 * (2.0 * b
            + (c - a) * t
            + (2.0 * a - 5.0 * b + 4.0 * c - d) * t2
            + (3.0 * b - a - 3.0 * c + d) * t3)
    };
    Point::new(axis(p0.x, p1.x, p2.x, p3.x), axis(p0.y, p1.y, p2.y, p3.y))
}
