// Copyright 2026 the Plotline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Plot geometry computation.
//!
//! Layout is circular: the left padding depends on rendered label widths,
//! which depend on the computed tick labels, which depend on the scales —
//! and the usable plot length depends back on the padding. [`Geometry`]
//! resolves this with a fixed sequence of passes instead of re-entrant
//! recomputation:
//!
//! 1. measure the widest y tick label → left padding,
//! 2. font metrics and axis-label presence → bottom padding,
//! 3. title presence and the last x label's width → top/right padding,
//! 4. canvas minus paddings → plot extents,
//! 5. plot extents over tick segments → grid cell sizes,
//! 6. optional strict-grid equalisation,
//! 7. optional integer snapping of the x cell size, re-deriving the right
//!    padding so edge ticks land on pixel boundaries.
//!
//! The sequence is bounded by construction; tests assert it is stable when
//! re-run on its own output.

extern crate alloc;

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

use kurbo::Rect;
use plotline_text::{TextMeasurer, TextStyle};

use crate::config::ChartOptions;
use crate::coordinator::AxisCoordinator;
use crate::error::{ChartError, Result};

/// A width/height pair in logical pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Size {
    /// Width in logical pixels.
    pub width: f64,
    /// Height in logical pixels.
    pub height: f64,
}

impl Size {
    /// Creates a size.
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Per-side padding around the plot rectangle.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Padding {
    /// Space above the plot (title strip).
    pub top: f64,
    /// Space right of the plot (keeps the last x label unclipped).
    pub right: f64,
    /// Space below the plot (x tick labels, x-axis label).
    pub bottom: f64,
    /// Space left of the plot (y tick labels, y-axis label).
    pub left: f64,
    /// Gap between text and the geometry it annotates.
    pub text: f64,
}

/// Pixel distance between two adjacent ticks on each axis.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct GridCell {
    /// Horizontal distance between adjacent x ticks.
    pub x: f64,
    /// Vertical distance between adjacent y ticks.
    pub y: f64,
}

/// The finalized pixel geometry of one render.
///
/// Working state recomputed on every draw pass; never persisted across
/// renders.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Geometry {
    /// The canvas this geometry was computed for.
    pub canvas: Size,
    /// Resolved paddings.
    pub padding: Padding,
    /// The plot rectangle in canvas coordinates.
    pub plot: Rect,
    /// Grid cell sizes.
    pub grid_cell: GridCell,
    /// Pixel y of the x-axis crossing: the bottom of the plot for
    /// non-negative data, strictly inside it when negatives are present.
    pub origin_y: f64,
}

impl Geometry {
    /// Computes the pixel geometry for a canvas and a finished axis pair.
    ///
    /// Fails with [`ChartError::InvalidAxisConfiguration`] when an axis has
    /// zero tick segments (a grid cell would divide by zero) or the canvas
    /// cannot fit the paddings.
    pub fn compute(
        canvas: Size,
        axes: &AxisCoordinator,
        options: &ChartOptions,
        measurer: &dyn TextMeasurer,
    ) -> Result<Self> {
        let x_segments = axes.x().tick_count();
        let y_segments = axes.y().tick_count();
        if x_segments == 0 || y_segments == 0 {
            return Err(ChartError::InvalidAxisConfiguration(
                "grid cell size requires at least two ticks per axis",
            ));
        }

        let label_style = TextStyle::new(options.label_font_size);
        let text = options.text_padding.max(0.0);

        // Pass 1: widest y tick label drives the left padding.
        let mut widest_y_label = 0.0_f64;
        for label in axes.y().tick_labels() {
            let metrics = measurer.measure(&label, label_style.clone());
            widest_y_label = widest_y_label.max(metrics.advance_width);
        }
        let y_axis_label_strip = if options.y_label.is_some() {
            options.label_font_size + text
        } else {
            0.0
        };
        let left = text + widest_y_label + text + y_axis_label_strip;

        // Pass 2: bottom padding from the label font and x-axis label.
        let line_height = measurer.measure("0", label_style.clone()).line_height();
        let x_axis_label_strip = if options.x_label.is_some() {
            line_height + text
        } else {
            0.0
        };
        let bottom = text + line_height + text + x_axis_label_strip;

        // Pass 3: title strip on top; half the last x label on the right so
        // the final tick label is not clipped past the canvas edge.
        let top = if options.title.is_some() {
            text + measurer
                .measure(
                    options.title.as_deref().unwrap_or(""),
                    TextStyle::new(options.title_font_size),
                )
                .line_height()
                + text
        } else {
            text
        };
        let last_x_label_width = axes
            .x()
            .tick_labels()
            .last()
            .map(|label| measurer.measure(label, label_style).advance_width)
            .unwrap_or(0.0);
        let mut right = text.max(0.5 * last_x_label_width);

        // Pass 4: usable plot extents.
        let mut plot_width = canvas.width - left - right;
        let mut plot_height = canvas.height - top - bottom;
        if plot_width <= 0.0 || plot_height <= 0.0 {
            return Err(ChartError::InvalidAxisConfiguration(
                "canvas is too small for the configured labels and paddings",
            ));
        }

        // Pass 5: grid cell sizes.
        let mut cell = GridCell {
            x: plot_width / x_segments as f64,
            y: plot_height / y_segments as f64,
        };

        // Pass 6: strict grid forces square cells.
        if options.grid.strict {
            let side = cell.x.min(cell.y);
            cell.x = side;
            cell.y = side;
            plot_width = side * x_segments as f64;
            plot_height = side * y_segments as f64;
            right = canvas.width - left - plot_width;
        }

        // Pass 7: snap the x cell to integer pixels. Rounding up may not fit
        // in the remaining right padding; round down instead, then re-derive
        // the right padding from the chosen cell size.
        if options.grid.optimise_square_size && cell.x != cell.x.floor() {
            let mut snapped = cell.x.round();
            let grown = (snapped - cell.x) * x_segments as f64;
            if grown > right - text {
                snapped = cell.x.floor();
            }
            if snapped >= 1.0 {
                cell.x = snapped;
                plot_width = cell.x * x_segments as f64;
                right = canvas.width - left - plot_width;
                if options.grid.strict && cell.x < cell.y {
                    cell.y = cell.x;
                    plot_height = cell.y * y_segments as f64;
                }
            }
        }

        let plot = Rect::new(left, top, left + plot_width, top + plot_height);

        // The x axis crosses at the y tick closest to zero.
        let y = axes.y();
        let origin_offset = (y.closest_to_zero() - y.rounded_min()) / y.tick_step() * cell.y;
        let origin_y = plot.y1 - origin_offset;

        Ok(Self {
            canvas,
            padding: Padding {
                top,
                right,
                bottom: canvas.height - top - plot_height,
                left,
                text,
            },
            plot,
            grid_cell: cell,
            origin_y,
        })
    }
}
