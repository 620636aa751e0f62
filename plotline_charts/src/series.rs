// Copyright 2026 the Plotline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Data series and the joined series collection.
//!
//! A [`DataSeries`] is an immutable-after-validation numeric sequence plus
//! presentation metadata. A [`SeriesSet`] owns every series of one chart and
//! answers the joined queries (global min/max, longest length) that axis
//! computation needs.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use hashbrown::HashSet;
use peniko::Color;
use peniko::color::palette::css;

use crate::error::{ChartError, Result};

/// How consecutive points of a series are joined.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Interpolation {
    /// Straight segments between points.
    #[default]
    Straight,
    /// Smooth cubic Bezier segments with computed control points.
    Cubic,
}

/// One named numeric series with its presentation settings.
///
/// Validated at construction: the label is kept unique per chart by
/// [`SeriesSet::new`], the sequence is non-empty, and every value is finite.
#[derive(Clone, Debug, PartialEq)]
pub struct DataSeries {
    label: String,
    values: Vec<f64>,
    color: Color,
    stroke_width: f64,
    fill_area: bool,
    interpolation: Interpolation,
    show_points: bool,
}

impl DataSeries {
    /// Creates a series from a label and its values.
    ///
    /// Fails with [`ChartError::EmptySeries`] for an empty sequence and
    /// [`ChartError::InvalidRange`] if any value is not finite.
    pub fn new(label: impl Into<String>, values: Vec<f64>) -> Result<Self> {
        let label = label.into();
        if values.is_empty() {
            return Err(ChartError::EmptySeries(label));
        }
        if let Some(&bad) = values.iter().find(|v| !v.is_finite()) {
            return Err(ChartError::InvalidRange { min: bad, max: bad });
        }
        Ok(Self {
            label,
            values,
            color: css::BLACK,
            stroke_width: 1.5,
            fill_area: false,
            interpolation: Interpolation::Straight,
            show_points: false,
        })
    }

    /// Sets the stroke/fill color.
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Sets the stroke width in pixels.
    pub fn with_stroke_width(mut self, stroke_width: f64) -> Self {
        self.stroke_width = stroke_width;
        self
    }

    /// Enables or disables filling the area under the line.
    pub fn with_fill_area(mut self, fill_area: bool) -> Self {
        self.fill_area = fill_area;
        self
    }

    /// Sets the interpolation mode.
    pub fn with_interpolation(mut self, interpolation: Interpolation) -> Self {
        self.interpolation = interpolation;
        self
    }

    /// Enables or disables per-point circle annotations.
    pub fn with_points(mut self, show_points: bool) -> Self {
        self.show_points = show_points;
        self
    }

    /// The series label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// The validated value sequence.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Number of samples in the series.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Always `false` after validation; kept for API completeness.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// The series color.
    pub fn color(&self) -> Color {
        self.color
    }

    /// The stroke width in pixels.
    pub fn stroke_width(&self) -> f64 {
        self.stroke_width
    }

    /// Whether the area under the line is filled.
    pub fn fill_area(&self) -> bool {
        self.fill_area
    }

    /// The interpolation mode.
    pub fn interpolation(&self) -> Interpolation {
        self.interpolation
    }

    /// Whether per-point circles are drawn.
    pub fn show_points(&self) -> bool {
        self.show_points
    }

    /// Smallest value in the series.
    pub fn min_value(&self) -> f64 {
        self.values.iter().copied().fold(f64::INFINITY, f64::min)
    }

    /// Largest value in the series.
    pub fn max_value(&self) -> f64 {
        self.values
            .iter()
            .copied()
            .fold(f64::NEG_INFINITY, f64::max)
    }
}

/// All series of one chart, validated as a group.
#[derive(Clone, Debug, PartialEq)]
pub struct SeriesSet {
    series: Vec<DataSeries>,
}

impl SeriesSet {
    /// Builds a set, rejecting duplicate labels and an empty collection.
    pub fn new(series: Vec<DataSeries>) -> Result<Self> {
        if series.is_empty() {
            return Err(ChartError::InvalidAxisConfiguration(
                "a chart needs at least one series",
            ));
        }
        let mut seen: HashSet<&str> = HashSet::with_capacity(series.len());
        for s in &series {
            if !seen.insert(s.label()) {
                return Err(ChartError::DuplicateLabel(s.label.clone()));
            }
        }
        drop(seen);
        Ok(Self { series })
    }

    /// Iterates the series in insertion order.
    pub fn iter(&self) -> core::slice::Iter<'_, DataSeries> {
        self.series.iter()
    }

    /// Number of series.
    pub fn len(&self) -> usize {
        self.series.len()
    }

    /// Always `false` after validation.
    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }

    /// Length of the longest series; drives the x-axis index range.
    pub fn max_len(&self) -> usize {
        self.series.iter().map(DataSeries::len).max().unwrap_or(0)
    }

    /// Smallest value across all series.
    pub fn min_value(&self) -> f64 {
        self.series
            .iter()
            .map(DataSeries::min_value)
            .fold(f64::INFINITY, f64::min)
    }

    /// Largest value across all series.
    pub fn max_value(&self) -> f64 {
        self.series
            .iter()
            .map(DataSeries::max_value)
            .fold(f64::NEG_INFINITY, f64::max)
    }
}

impl<'a> IntoIterator for &'a SeriesSet {
    type Item = &'a DataSeries;
    type IntoIter = core::slice::Iter<'a, DataSeries>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
