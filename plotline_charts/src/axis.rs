// Copyright 2026 the Plotline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-axis scale wrapper.
//!
//! [`AxisScale`] wraps a [`NiceScale`] with the concerns that differ between
//! axes: a minimum step floor (index axes), custom label overrides, shorthand
//! numeric formatting, and the "closest tick to zero" query used to place a
//! crossing axis.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use crate::error::Result;
use crate::format::{format_tick, shorthand};
use crate::scale::NiceScale;

/// Options controlling one axis' scale and labeling.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AxisOptions {
    /// Desired number of tick marks. Defaults to 5 via [`AxisOptions::new`].
    pub tick_count: usize,
    /// Floor for the tick step. Index axes set this to `1` so ticks never
    /// fall between discrete samples.
    pub minimum_step: Option<f64>,
    /// Explicit tick labels. When supplied, labels cycle through this list
    /// (`labels[i % len]`) so every tick gets one even if the list is short.
    pub labels: Option<Vec<String>>,
    /// Render numeric labels with `k`/`m`/`b` suffixes.
    pub shorthand: bool,
    /// Trim trailing ticks the data never reaches.
    pub optimise: bool,
}

impl AxisOptions {
    /// Creates options with the default tick count of 5.
    pub fn new() -> Self {
        Self {
            tick_count: 5,
            ..Default::default()
        }
    }

    /// Sets the desired tick count.
    pub fn with_tick_count(mut self, tick_count: usize) -> Self {
        self.tick_count = tick_count;
        self
    }

    /// Sets a floor for the tick step.
    pub fn with_minimum_step(mut self, minimum_step: f64) -> Self {
        self.minimum_step = Some(minimum_step);
        self
    }

    /// Sets explicit tick labels, cycled across the generated ticks.
    pub fn with_labels(mut self, labels: Vec<String>) -> Self {
        self.labels = Some(labels);
        self
    }

    /// Enables or disables shorthand numeric labels.
    pub fn with_shorthand(mut self, shorthand: bool) -> Self {
        self.shorthand = shorthand;
        self
    }

    /// Enables or disables trailing-tick trimming.
    pub fn with_optimise(mut self, optimise: bool) -> Self {
        self.optimise = optimise;
        self
    }
}

/// A computed scale for a single axis.
///
/// Pure value object: computed once from constructor inputs, never mutated.
#[derive(Clone, Debug, PartialEq)]
pub struct AxisScale {
    scale: NiceScale,
    options: AxisOptions,
}

impl AxisScale {
    /// Computes the axis scale for the given data range.
    pub fn compute(min: f64, max: f64, options: AxisOptions) -> Result<Self> {
        let mut scale = NiceScale::compute(min, max, options.tick_count, options.optimise)?;
        if let Some(floor_step) = options.minimum_step
            && scale.tick_step() < floor_step
        {
            scale = NiceScale::with_step(min, max, floor_step)?;
        }
        Ok(Self { scale, options })
    }

    /// The tick step after any minimum-step clamping.
    pub fn tick_step(&self) -> f64 {
        self.scale.tick_step()
    }

    /// The number of tick segments.
    pub fn tick_count(&self) -> usize {
        self.scale.tick_count()
    }

    /// The lowest generated tick value.
    pub fn rounded_min(&self) -> f64 {
        self.scale.rounded_min()
    }

    /// The raw data minimum.
    pub fn min(&self) -> f64 {
        self.scale.min()
    }

    /// The raw data maximum.
    pub fn max(&self) -> f64 {
        self.scale.max()
    }

    /// Returns the generated tick values, lowest first.
    pub fn ticks(&self) -> Vec<f64> {
        self.scale.ticks()
    }

    /// Returns the tick value closest to zero.
    ///
    /// An exact zero tick always wins; otherwise the smallest magnitude tick
    /// (which is the rounded minimum for all-positive data) is returned. Used
    /// to decide where a crossing axis is drawn.
    pub fn closest_to_zero(&self) -> f64 {
        let mut best = self.scale.rounded_min();
        for tick in self.ticks() {
            if tick.abs() < best.abs() {
                best = tick;
            }
        }
        best
    }

    /// Returns one label per generated tick.
    pub fn tick_labels(&self) -> Vec<String> {
        let ticks = self.ticks();
        if let Some(labels) = &self.options.labels
            && !labels.is_empty()
        {
            return (0..ticks.len())
                .map(|i| labels[i % labels.len()].clone())
                .collect();
        }
        let step = self.tick_step();
        ticks
            .iter()
            .map(|&v| {
                if self.options.shorthand && v.abs() >= 1.0e3 {
                    shorthand(v)
                } else {
                    format_tick(v, step)
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::string::ToString;

    use super::*;

    #[test]
    fn minimum_step_floors_an_index_axis() {
        // Four samples: indices 0..=3 with at most 10 requested ticks would
        // produce a fractional step without the floor.
        let axis = AxisScale::compute(0.0, 3.0, AxisOptions::new().with_tick_count(10)).unwrap();
        assert!(axis.tick_step() < 1.0);

        let axis = AxisScale::compute(
            0.0,
            3.0,
            AxisOptions::new().with_tick_count(10).with_minimum_step(1.0),
        )
        .unwrap();
        assert_eq!(axis.tick_step(), 1.0);
        assert_eq!(axis.ticks(), alloc::vec![0.0, 1.0, 2.0, 3.0]);
    }

    #[test]
    fn closest_to_zero_prefers_exact_zero() {
        let axis = AxisScale::compute(-12.0, 8.0, AxisOptions::new()).unwrap();
        assert!(axis.ticks().contains(&0.0), "ticks: {:?}", axis.ticks());
        assert_eq!(axis.closest_to_zero(), 0.0);

        let positive = AxisScale::compute(3.0, 21.0, AxisOptions::new()).unwrap();
        assert_eq!(positive.closest_to_zero(), positive.rounded_min());
    }

    #[test]
    fn custom_labels_cycle_when_short() {
        let labels = alloc::vec!["Mon".to_string(), "Tue".to_string()];
        let axis = AxisScale::compute(
            0.0,
            4.0,
            AxisOptions::new()
                .with_tick_count(5)
                .with_minimum_step(1.0)
                .with_labels(labels),
        )
        .unwrap();
        let out = axis.tick_labels();
        assert_eq!(out.len(), axis.tick_count() + 1);
        assert_eq!(out[0], "Mon");
        assert_eq!(out[1], "Tue");
        assert_eq!(out[2], "Mon");
    }

    #[test]
    fn shorthand_labels_only_kick_in_above_a_thousand() {
        let axis = AxisScale::compute(
            0.0,
            6000.0,
            AxisOptions::new().with_tick_count(4).with_shorthand(true),
        )
        .unwrap();
        let labels = axis.tick_labels();
        assert_eq!(labels[0], "0");
        assert!(labels.last().unwrap().ends_with('k'), "labels: {labels:?}");
    }
}
