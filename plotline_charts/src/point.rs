// Copyright 2026 the Plotline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Logical-to-pixel point mapping.
//!
//! A [`PointMapper`] borrows a finished axis pair and geometry and converts
//! `(index, value)` data pairs into canvas coordinates. The pixel y axis is
//! inverted relative to values, and offsets are measured from the x-axis
//! crossing, which sits above the plot bottom when negative values shifted it.
//!
//! Coordinates are rounded to the nearest pixel for crisp strokes. The
//! rounding is a deliberate visual choice and uses `round`, not truncation.

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

use kurbo::Point;

use crate::coordinator::AxisCoordinator;
use crate::layout::Geometry;

/// Maps data pairs into pixel coordinates for one render.
#[derive(Clone, Copy, Debug)]
pub struct PointMapper<'a> {
    axes: &'a AxisCoordinator,
    geometry: &'a Geometry,
    origin_value: f64,
}

impl<'a> PointMapper<'a> {
    /// Creates a mapper over a finished axis pair and geometry.
    pub fn new(axes: &'a AxisCoordinator, geometry: &'a Geometry) -> Self {
        Self {
            axes,
            geometry,
            origin_value: axes.y().closest_to_zero(),
        }
    }

    /// Maps a `(index, value)` pair to a pixel point.
    pub fn map(&self, index: usize, value: f64) -> Point {
        let x = self.geometry.plot.x0
            + (index as f64 / self.axes.x().tick_step()) * self.geometry.grid_cell.x;
        let offset = (value - self.origin_value) / self.axes.y().tick_step()
            * self.geometry.grid_cell.y;
        let y = self.geometry.origin_y - offset;
        Point::new(x.round(), y.round())
    }

    /// The pixel y of the x-axis crossing, rounded like mapped points.
    pub fn origin_y(&self) -> f64 {
        self.geometry.origin_y.round()
    }
}

#[cfg(test)]
mod tests {
    extern crate alloc;
    extern crate std;

    use plotline_text::HeuristicTextMeasurer;

    use super::*;
    use crate::config::ChartOptions;
    use crate::layout::Size;
    use crate::series::{DataSeries, SeriesSet};

    fn fixture(values: &[f64], options: &ChartOptions) -> (AxisCoordinator, Geometry) {
        let series = SeriesSet::new(alloc::vec![
            DataSeries::new("s", values.to_vec()).unwrap(),
        ])
        .unwrap();
        let axes = AxisCoordinator::build(&series, options).unwrap();
        let geometry =
            Geometry::compute(Size::new(640.0, 480.0), &axes, options, &HeuristicTextMeasurer)
                .unwrap();
        (axes, geometry)
    }

    #[test]
    fn pixel_round_trip_recovers_the_value() {
        let options = ChartOptions::new().with_start_at_zero(true);
        let values = [0.0, 1.0, 4.0, 9.0, 16.0];
        let (axes, geometry) = fixture(&values, &options);
        let mapper = PointMapper::new(&axes, &geometry);

        let per_value = geometry.grid_cell.y / axes.y().tick_step();
        for (i, &v) in values.iter().enumerate() {
            let p = mapper.map(i, v);
            let recovered = (geometry.origin_y - p.y) / per_value;
            // Rounding to whole pixels loses at most one pixel's worth.
            assert!(
                (recovered - v).abs() <= 1.0 / per_value,
                "value {v} recovered as {recovered}"
            );
        }
    }

    #[test]
    fn first_index_lands_on_the_plot_left_edge() {
        let options = ChartOptions::default();
        let (axes, geometry) = fixture(&[2.0, 5.0, 3.0], &options);
        let mapper = PointMapper::new(&axes, &geometry);
        let p = mapper.map(0, 2.0);
        assert!((p.x - geometry.plot.x0.round()).abs() <= 1.0);
    }

    #[test]
    fn negative_values_map_below_the_origin() {
        let options = ChartOptions::default();
        let (axes, geometry) = fixture(&[-8.0, 4.0, 12.0], &options);
        let mapper = PointMapper::new(&axes, &geometry);

        let below = mapper.map(0, -8.0);
        let above = mapper.map(2, 12.0);
        assert!(below.y > mapper.origin_y());
        assert!(above.y < mapper.origin_y());
    }

    #[test]
    fn shorter_series_map_within_the_plot() {
        // Two series of unequal length share axes built from the longer one;
        // the shorter series' points must still land inside the plot.
        let series = SeriesSet::new(alloc::vec![
            DataSeries::new("short", alloc::vec![1.0, 2.0, 3.0]).unwrap(),
            DataSeries::new("long", alloc::vec![1.0, 2.0, 3.0, 4.0, 5.0]).unwrap(),
        ])
        .unwrap();
        let options = ChartOptions::default();
        let axes = AxisCoordinator::build(&series, &options).unwrap();
        let geometry =
            Geometry::compute(Size::new(640.0, 480.0), &axes, &options, &HeuristicTextMeasurer)
                .unwrap();
        let mapper = PointMapper::new(&axes, &geometry);
        for (i, &v) in [1.0, 2.0, 3.0].iter().enumerate() {
            let p = mapper.map(i, v);
            assert!(p.x <= geometry.plot.x1 + 1.0);
            assert!(p.y >= geometry.plot.y0 - 1.0 && p.y <= geometry.plot.y1 + 1.0);
        }
    }
}
