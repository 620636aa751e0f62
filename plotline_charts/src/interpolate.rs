// Copyright 2026 the Plotline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Cubic spline control point computation.
//!
//! For each interior data point, a pair of Bezier control points is derived
//! from the point's two neighbours and a tension coefficient. The control
//! points sit on a line through the current point parallel to the
//! `prev -> next` chord, at distances proportional to the two chord lengths.
//!
//! Control point y coordinates are clamped to the plot's vertical pixel
//! extent. Unclamped cubic overshoot would draw values outside the data's own
//! range, which is semantically wrong, not just ugly.

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

use kurbo::Point;

/// The control point pair associated with one interior data point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ControlPoints {
    /// Control point for the segment arriving from the previous point.
    pub prev: Point,
    /// Control point for the segment leaving toward the next point.
    pub next: Point,
}

/// Computes the control point pair for `current` given its neighbours.
///
/// `y_bounds` is the plot's `(top, bottom)` pixel extent; both control points
/// are clamped into it. Coincident neighbours degenerate to `current` itself.
pub fn control_points(
    prev: Point,
    current: Point,
    next: Point,
    tension: f64,
    y_bounds: (f64, f64),
) -> ControlPoints {
    let d01 = distance(prev, current);
    let d12 = distance(current, next);
    let total = d01 + d12;

    let (fa, fb) = if total == 0.0 {
        (0.0, 0.0)
    } else {
        let fa = tension * d01 / total;
        (fa, tension - fa)
    };

    let chord_x = next.x - prev.x;
    let chord_y = next.y - prev.y;
    let (top, bottom) = y_bounds;

    ControlPoints {
        prev: Point::new(
            current.x - fa * chord_x,
            (current.y - fa * chord_y).clamp(top, bottom),
        ),
        next: Point::new(
            current.x + fb * chord_x,
            (current.y + fb * chord_y).clamp(top, bottom),
        ),
    }
}

fn distance(a: Point, b: Point) -> f64 {
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    (dx * dx + dy * dy).sqrt()
}
