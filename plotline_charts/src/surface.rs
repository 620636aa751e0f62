// Copyright 2026 the Plotline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The drawing capability consumed by the renderer.
//!
//! The engine never touches a windowing system or DOM. Container discovery
//! and pixel-ratio setup happen outside; the caller hands the engine a
//! ready-to-use canvas size and an implementation of [`DrawSurface`].
//! Text measurement comes through the same object ([`TextMeasurer`] is a
//! supertrait) because layout needs metrics before any drawing happens.

extern crate alloc;

use kurbo::{BezPath, Point};
use peniko::Brush;
use peniko::Color;
use peniko::color::palette::css;
use plotline_text::{TextMeasurer, TextStyle};

/// A paint + width pair for stroked geometry (axes, gridlines, series).
#[derive(Clone, Debug, PartialEq)]
pub struct StrokeStyle {
    /// Stroke paint.
    pub brush: Brush,
    /// Stroke width in logical pixels.
    pub stroke_width: f64,
}

impl StrokeStyle {
    /// Convenience for a solid stroke.
    pub fn solid(brush: impl Into<Brush>, stroke_width: f64) -> Self {
        Self {
            brush: brush.into(),
            stroke_width,
        }
    }
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self::solid(css::BLACK, 1.0)
    }
}

/// Horizontal text anchoring relative to the given position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextAnchor {
    /// The position is the left edge of the text.
    Start,
    /// The position is the horizontal center of the text.
    Middle,
    /// The position is the right edge of the text.
    End,
}

/// Minimal contract a drawing backend must provide.
///
/// Coordinates are in logical pixels with y growing downward. Implementations
/// must not retain references into the arguments beyond the call.
pub trait DrawSurface: TextMeasurer {
    /// Strokes a straight line segment.
    fn stroke_line(&mut self, from: Point, to: Point, style: &StrokeStyle);

    /// Fills a circle.
    fn fill_circle(&mut self, center: Point, radius: f64, color: Color);

    /// Strokes a path (line or Bezier segments).
    fn stroke_path(&mut self, path: &BezPath, style: &StrokeStyle);

    /// Fills a closed path.
    fn fill_path(&mut self, path: &BezPath, color: Color);

    /// Draws a single line of text at a baseline position.
    fn draw_text(
        &mut self,
        text: &str,
        at: Point,
        style: TextStyle,
        color: Color,
        anchor: TextAnchor,
    );
}
