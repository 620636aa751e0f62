// Copyright 2026 the Plotline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Chart orchestration and rendering.
//!
//! A full render is one synchronous call chain: build axis scales, compute
//! layout, map every data point, draw. Nothing suspends or blocks; the only
//! external dependency is text measurement through the drawing surface.
//!
//! Axis scales and geometry are value objects rebuilt per render and never
//! mutated afterwards, so overlapping renders on clones of a chart cannot
//! observe each other's working state.
//!
//! Out-of-bounds policy: a mapped coordinate outside the canvas is clamped to
//! the canvas extent and counted in [`RenderSummary::points_clamped`]. Minor
//! float overshoot at the edges is expected, so this degrades instead of
//! failing; callers that want strictness can assert on the summary.

extern crate alloc;

use alloc::vec::Vec;

use kurbo::{BezPath, Point};
use peniko::color::palette::css;
use plotline_text::{TextMeasurer, TextStyle};

use crate::config::ChartOptions;
use crate::coordinator::AxisCoordinator;
use crate::error::{ChartError, Result};
use crate::interpolate::control_points;
use crate::layout::{Geometry, Size};
use crate::point::PointMapper;
use crate::series::{Interpolation, SeriesSet};
use crate::surface::{DrawSurface, StrokeStyle, TextAnchor};

/// Counters describing what a draw call actually produced.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RenderSummary {
    /// Total data points mapped across all series.
    pub points_drawn: usize,
    /// Points whose pixel coordinates had to be clamped to the canvas.
    pub points_clamped: usize,
}

#[derive(Clone, Debug)]
struct RenderState {
    axes: AxisCoordinator,
    geometry: Geometry,
}

/// A line/area chart over a validated series set.
#[derive(Clone, Debug)]
pub struct Chart {
    series: SeriesSet,
    options: ChartOptions,
    state: Option<RenderState>,
}

impl Chart {
    /// Creates a chart. Layout is not computed until [`Chart::layout`] or
    /// [`Chart::draw`] runs.
    pub fn new(series: SeriesSet, options: ChartOptions) -> Self {
        Self {
            series,
            options,
            state: None,
        }
    }

    /// The chart's series.
    pub fn series(&self) -> &SeriesSet {
        &self.series
    }

    /// The chart's configuration.
    pub fn options(&self) -> &ChartOptions {
        &self.options
    }

    /// Builds axis scales and pixel geometry for the given canvas.
    ///
    /// Recomputed from scratch on every call; previous state is discarded.
    pub fn layout(&mut self, canvas: Size, measurer: &dyn TextMeasurer) -> Result<()> {
        let axes = AxisCoordinator::build(&self.series, &self.options)?;
        let geometry = Geometry::compute(canvas, &axes, &self.options, measurer)?;
        self.state = Some(RenderState { axes, geometry });
        Ok(())
    }

    /// The axis pair of the last layout.
    pub fn axes(&self) -> Result<&AxisCoordinator> {
        self.state
            .as_ref()
            .map(|s| &s.axes)
            .ok_or(ChartError::UninitializedGraph)
    }

    /// The geometry of the last layout.
    pub fn geometry(&self) -> Result<&Geometry> {
        self.state
            .as_ref()
            .map(|s| &s.geometry)
            .ok_or(ChartError::UninitializedGraph)
    }

    /// A point mapper over the last layout.
    ///
    /// Fails with [`ChartError::UninitializedGraph`] before layout has run.
    pub fn mapper(&self) -> Result<PointMapper<'_>> {
        let state = self.state.as_ref().ok_or(ChartError::UninitializedGraph)?;
        Ok(PointMapper::new(&state.axes, &state.geometry))
    }

    /// Runs the full render chain onto `surface`.
    pub fn draw(&mut self, canvas: Size, surface: &mut dyn DrawSurface) -> Result<RenderSummary> {
        self.layout(canvas, &*surface)?;
        let state = self.state.as_ref().ok_or(ChartError::UninitializedGraph)?;
        let axes = &state.axes;
        let geometry = &state.geometry;
        let mapper = PointMapper::new(axes, geometry);

        self.draw_grid(axes, geometry, surface);
        self.draw_axes(geometry, &mapper, surface);
        self.draw_labels(axes, geometry, surface);

        let mut summary = RenderSummary::default();
        for series in &self.series {
            let mut points = Vec::with_capacity(series.len());
            for (i, &v) in series.values().iter().enumerate() {
                let raw = mapper.map(i, v);
                let clamped = Point::new(
                    raw.x.clamp(0.0, canvas.width),
                    raw.y.clamp(0.0, canvas.height),
                );
                if clamped != raw {
                    summary.points_clamped += 1;
                }
                summary.points_drawn += 1;
                points.push(clamped);
            }

            let path = match series.interpolation() {
                Interpolation::Straight => straight_path(&points),
                Interpolation::Cubic => cubic_path(
                    &points,
                    self.options.tension,
                    (geometry.plot.y0, geometry.plot.y1),
                ),
            };

            if series.fill_area()
                && let (Some(first), Some(last)) = (points.first(), points.last())
            {
                let mut area = path.clone();
                let origin_y = mapper.origin_y();
                area.line_to((last.x, origin_y));
                area.line_to((first.x, origin_y));
                area.close_path();
                surface.fill_path(&area, series.color().with_alpha(0.25));
            }

            surface.stroke_path(
                &path,
                &StrokeStyle::solid(series.color(), series.stroke_width()),
            );

            if series.show_points() {
                for &p in &points {
                    surface.fill_circle(p, 3.0, series.color());
                }
            }
        }

        Ok(summary)
    }

    fn draw_grid(&self, axes: &AxisCoordinator, geometry: &Geometry, surface: &mut dyn DrawSurface) {
        let grid_style = StrokeStyle::solid(css::BLACK.with_alpha(40.0 / 255.0), 1.0);
        let plot = geometry.plot;
        for i in 0..=axes.x().tick_count() {
            let x = plot.x0 + geometry.grid_cell.x * i as f64;
            surface.stroke_line(Point::new(x, plot.y0), Point::new(x, plot.y1), &grid_style);
        }
        for i in 0..=axes.y().tick_count() {
            let y = plot.y1 - geometry.grid_cell.y * i as f64;
            surface.stroke_line(Point::new(plot.x0, y), Point::new(plot.x1, y), &grid_style);
        }
    }

    fn draw_axes(
        &self,
        geometry: &Geometry,
        mapper: &PointMapper<'_>,
        surface: &mut dyn DrawSurface,
    ) {
        let axis_style = StrokeStyle::default();
        let plot = geometry.plot;
        // The y axis sits on the plot's left edge; the x axis crosses at the
        // origin, which is above the bottom when negatives shifted it.
        surface.stroke_line(
            Point::new(plot.x0, plot.y0),
            Point::new(plot.x0, plot.y1),
            &axis_style,
        );
        let origin_y = mapper.origin_y();
        surface.stroke_line(
            Point::new(plot.x0, origin_y),
            Point::new(plot.x1, origin_y),
            &axis_style,
        );
    }

    fn draw_labels(
        &self,
        axes: &AxisCoordinator,
        geometry: &Geometry,
        surface: &mut dyn DrawSurface,
    ) {
        let style = TextStyle::new(self.options.label_font_size);
        let color = css::BLACK;
        let plot = geometry.plot;
        let text = geometry.padding.text;
        let skip_zero = axes.shared_zero();

        for (i, label) in axes.y().tick_labels().iter().enumerate() {
            if skip_zero && i == 0 {
                continue;
            }
            let y = plot.y1 - geometry.grid_cell.y * i as f64;
            surface.draw_text(
                label,
                Point::new(plot.x0 - text, y),
                style.clone(),
                color,
                TextAnchor::End,
            );
        }

        let x_label_y = plot.y1 + text + self.options.label_font_size;
        for (i, label) in axes.x().tick_labels().iter().enumerate() {
            if skip_zero && i == 0 {
                continue;
            }
            let x = plot.x0 + geometry.grid_cell.x * i as f64;
            surface.draw_text(
                label,
                Point::new(x, x_label_y),
                style.clone(),
                color,
                TextAnchor::Middle,
            );
        }

        if skip_zero {
            // One centered zero between the two axes instead of two
            // overlapping ones.
            surface.draw_text(
                "0",
                Point::new(plot.x0 - text, x_label_y),
                style.clone(),
                color,
                TextAnchor::End,
            );
        }

        if let Some(title) = &self.options.title {
            surface.draw_text(
                title,
                Point::new(0.5 * (plot.x0 + plot.x1), text + self.options.title_font_size),
                TextStyle::new(self.options.title_font_size),
                color,
                TextAnchor::Middle,
            );
        }
        if let Some(x_label) = &self.options.x_label {
            surface.draw_text(
                x_label,
                Point::new(
                    0.5 * (plot.x0 + plot.x1),
                    geometry.canvas.height - text,
                ),
                style.clone(),
                color,
                TextAnchor::Middle,
            );
        }
        if let Some(y_label) = &self.options.y_label {
            surface.draw_text(
                y_label,
                Point::new(text, plot.y0 - text),
                style,
                color,
                TextAnchor::Start,
            );
        }
    }
}

fn straight_path(points: &[Point]) -> BezPath {
    let mut path = BezPath::new();
    for (i, &p) in points.iter().enumerate() {
        if i == 0 {
            path.move_to(p);
        } else {
            path.line_to(p);
        }
    }
    path
}

/// Builds a smooth path: cubic segments between interior points, quadratic
/// end segments (the first and last points have no neighbour on one side).
fn cubic_path(points: &[Point], tension: f64, y_bounds: (f64, f64)) -> BezPath {
    let mut path = BezPath::new();
    let n = points.len();
    let Some(&first) = points.first() else {
        return path;
    };
    path.move_to(first);
    if n == 1 {
        return path;
    }
    if n == 2 {
        path.line_to(points[1]);
        return path;
    }

    // Control point pairs for interior points 1..n-1.
    let controls: Vec<_> = (1..n - 1)
        .map(|i| control_points(points[i - 1], points[i], points[i + 1], tension, y_bounds))
        .collect();

    path.quad_to(controls[0].prev, points[1]);
    for i in 1..n - 2 {
        path.curve_to(controls[i - 1].next, controls[i].prev, points[i + 1]);
    }
    path.quad_to(controls[n - 3].next, points[n - 1]);
    path
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn cubic_path_uses_quadratic_end_segments() {
        let points = alloc::vec![
            Point::new(0.0, 10.0),
            Point::new(10.0, 5.0),
            Point::new(20.0, 8.0),
            Point::new(30.0, 2.0),
        ];
        let path = cubic_path(&points, 0.45, (0.0, 20.0));
        let elements: Vec<_> = path.elements().to_vec();
        // MoveTo, QuadTo, CurveTo, QuadTo.
        assert_eq!(elements.len(), 4);
        assert!(matches!(elements[1], kurbo::PathEl::QuadTo(..)));
        assert!(matches!(elements[2], kurbo::PathEl::CurveTo(..)));
        assert!(matches!(elements[3], kurbo::PathEl::QuadTo(..)));
    }

    #[test]
    fn two_point_series_falls_back_to_a_line() {
        let points = alloc::vec![Point::new(0.0, 0.0), Point::new(10.0, 10.0)];
        let path = cubic_path(&points, 0.45, (0.0, 20.0));
        assert!(matches!(path.elements()[1], kurbo::PathEl::LineTo(..)));
    }
}
