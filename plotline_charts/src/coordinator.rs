// Copyright 2026 the Plotline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Axis pair construction from joined series data.
//!
//! The coordinator owns the x and y [`AxisScale`]s of one chart, plus the two
//! facts the renderer needs before any geometry exists: whether the joined
//! data contains negative values (the x axis then crosses mid-plot instead of
//! sitting at the bottom), and whether both axes share a zero tick label.
//!
//! Rebuilt from scratch on every draw; value object, never mutated in place.

extern crate alloc;

use crate::axis::{AxisOptions, AxisScale};
use crate::config::ChartOptions;
use crate::error::{ChartError, Result};
use crate::series::SeriesSet;

/// The computed x/y axis pair for one render.
#[derive(Clone, Debug, PartialEq)]
pub struct AxisCoordinator {
    x: AxisScale,
    y: AxisScale,
    negative_scale: bool,
    shared_zero: bool,
}

impl AxisCoordinator {
    /// Builds both axis scales from the joined data of all series.
    ///
    /// The x axis always spans `[0, max_len - 1]` with a step floor of 1
    /// (index-based axis). The y axis spans the joined value range, pulled
    /// down to zero under `start_at_zero`.
    pub fn build(series: &SeriesSet, options: &ChartOptions) -> Result<Self> {
        let max_len = series.max_len();
        if max_len < 2 {
            // A single sample leaves the x axis with one effective tick,
            // which would force a divide-by-zero grid cell downstream.
            return Err(ChartError::InvalidAxisConfiguration(
                "the x axis needs at least two samples",
            ));
        }

        let x = AxisScale::compute(
            0.0,
            (max_len - 1) as f64,
            AxisOptions {
                tick_count: options.scale.x_ticks,
                minimum_step: Some(1.0),
                labels: options.scale.x_labels.clone(),
                shorthand: false,
                optimise: false,
            },
        )?;

        let data_min = series.min_value();
        let data_max = series.max_value();
        let y_min = if options.scale.start_at_zero {
            data_min.min(0.0)
        } else {
            data_min
        };
        let y = AxisScale::compute(
            y_min,
            data_max,
            AxisOptions {
                tick_count: options.scale.y_ticks,
                minimum_step: None,
                labels: None,
                shorthand: options.scale.shorthand_numerics,
                optimise: options.scale.optimise_ticks,
            },
        )?;

        if x.tick_count() == 0 || y.tick_count() == 0 {
            return Err(ChartError::InvalidAxisConfiguration(
                "an axis resolved to zero tick segments",
            ));
        }

        let shared_zero = options.grid.shared_axis_zero
            && x.tick_labels().first().is_some_and(|l| l == "0")
            && y.tick_labels().first().is_some_and(|l| l == "0");

        Ok(Self {
            x,
            y,
            negative_scale: data_min < 0.0,
            shared_zero,
        })
    }

    /// The x-axis scale.
    pub fn x(&self) -> &AxisScale {
        &self.x
    }

    /// The y-axis scale.
    pub fn y(&self) -> &AxisScale {
        &self.y
    }

    /// Whether any joined value is negative.
    pub fn negative_scale(&self) -> bool {
        self.negative_scale
    }

    /// Whether both axes' first tick label is `"0"` and merging is enabled.
    pub fn shared_zero(&self) -> bool {
        self.shared_zero
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;
    use crate::series::DataSeries;

    fn set(values: &[&[f64]]) -> SeriesSet {
        let series = values
            .iter()
            .enumerate()
            .map(|(i, v)| DataSeries::new(alloc::format!("s{i}"), v.to_vec()).unwrap())
            .collect();
        SeriesSet::new(series).unwrap()
    }

    #[test]
    fn x_axis_spans_the_longest_series() {
        let series = set(&[&[1.0, 2.0, 3.0], &[1.0, 2.0, 3.0, 4.0, 5.0]]);
        let axes = AxisCoordinator::build(&series, &ChartOptions::default()).unwrap();
        assert_eq!(axes.x().rounded_min(), 0.0);
        let last = axes.x().rounded_min() + axes.x().tick_step() * axes.x().tick_count() as f64;
        assert!(last >= 4.0);
        assert!(axes.x().tick_step() >= 1.0);
    }

    #[test]
    fn negative_values_are_detected() {
        let series = set(&[&[-3.0, 2.0, 7.0]]);
        let axes = AxisCoordinator::build(&series, &ChartOptions::default()).unwrap();
        assert!(axes.negative_scale());

        let positive = set(&[&[3.0, 2.0, 7.0]]);
        let axes = AxisCoordinator::build(&positive, &ChartOptions::default()).unwrap();
        assert!(!axes.negative_scale());
    }

    #[test]
    fn start_at_zero_pulls_the_y_minimum_down() {
        let series = set(&[&[5.0, 9.0, 16.0]]);
        let options = ChartOptions::new().with_start_at_zero(true);
        let axes = AxisCoordinator::build(&series, &options).unwrap();
        assert_eq!(axes.y().rounded_min(), 0.0);
    }

    #[test]
    fn shared_zero_requires_both_axes_and_the_option() {
        let series = set(&[&[0.0, 4.0, 9.0, 16.0]]);
        let options = ChartOptions::new()
            .with_start_at_zero(true)
            .with_shared_axis_zero(true);
        let axes = AxisCoordinator::build(&series, &options).unwrap();
        assert!(axes.shared_zero());

        let without = AxisCoordinator::build(
            &series,
            &ChartOptions::new().with_start_at_zero(true),
        )
        .unwrap();
        assert!(!without.shared_zero());
    }

    #[test]
    fn single_sample_series_is_rejected() {
        let series = set(&[&[42.0]]);
        assert!(matches!(
            AxisCoordinator::build(&series, &ChartOptions::default()),
            Err(ChartError::InvalidAxisConfiguration(_))
        ));
    }
}
