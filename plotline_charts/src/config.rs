// Copyright 2026 the Plotline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Chart configuration.
//!
//! All options are explicit typed fields with defaults; user code overlays
//! overrides through `with_*` builders instead of duck-typed option merging.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

/// Scale-related options.
#[derive(Clone, Debug, PartialEq)]
pub struct ScaleOptions {
    /// Desired number of x-axis ticks.
    pub x_ticks: usize,
    /// Desired number of y-axis ticks.
    pub y_ticks: usize,
    /// Force the y-axis minimum down to zero.
    pub start_at_zero: bool,
    /// Render numeric labels with `k`/`m`/`b` suffixes.
    pub shorthand_numerics: bool,
    /// Trim trailing y ticks the data never reaches.
    pub optimise_ticks: bool,
    /// Explicit x-axis tick labels, cycled across the generated ticks.
    pub x_labels: Option<Vec<String>>,
}

impl Default for ScaleOptions {
    fn default() -> Self {
        Self {
            x_ticks: 5,
            y_ticks: 5,
            start_at_zero: false,
            shorthand_numerics: false,
            optimise_ticks: false,
            x_labels: None,
        }
    }
}

/// Grid-related options.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GridOptions {
    /// Force equal x/y grid cell sizes (the smaller of the two).
    pub strict: bool,
    /// Snap the x grid cell size to integer pixels so right-edge ticks land
    /// exactly on pixel boundaries.
    pub optimise_square_size: bool,
    /// Draw a coincident x/y zero tick once, centered, instead of twice.
    pub shared_axis_zero: bool,
}

/// The full configuration surface consumed by the engine.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartOptions {
    /// Scale options.
    pub scale: ScaleOptions,
    /// Grid options.
    pub grid: GridOptions,
    /// Spline curvature coefficient for cubic interpolation.
    pub tension: f64,
    /// Optional chart title, drawn centered above the plot.
    pub title: Option<String>,
    /// Optional x-axis label, drawn below the tick labels.
    pub x_label: Option<String>,
    /// Optional y-axis label, drawn beside the y tick labels.
    pub y_label: Option<String>,
    /// Font size for tick and axis labels.
    pub label_font_size: f64,
    /// Font size for the chart title.
    pub title_font_size: f64,
    /// Gap between text and the geometry it annotates.
    pub text_padding: f64,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            scale: ScaleOptions::default(),
            grid: GridOptions::default(),
            tension: 0.45,
            title: None,
            x_label: None,
            y_label: None,
            label_font_size: 10.0,
            title_font_size: 14.0,
            text_padding: 6.0,
        }
    }
}

impl ChartOptions {
    /// Creates the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the desired x and y tick counts.
    pub fn with_ticks(mut self, x_ticks: usize, y_ticks: usize) -> Self {
        self.scale.x_ticks = x_ticks;
        self.scale.y_ticks = y_ticks;
        self
    }

    /// Forces the y axis to start at zero.
    pub fn with_start_at_zero(mut self, start_at_zero: bool) -> Self {
        self.scale.start_at_zero = start_at_zero;
        self
    }

    /// Enables shorthand (`k`/`m`/`b`) numeric labels.
    pub fn with_shorthand_numerics(mut self, shorthand: bool) -> Self {
        self.scale.shorthand_numerics = shorthand;
        self
    }

    /// Enables trailing-tick trimming on the y axis.
    pub fn with_optimise_ticks(mut self, optimise: bool) -> Self {
        self.scale.optimise_ticks = optimise;
        self
    }

    /// Sets explicit x-axis tick labels.
    pub fn with_x_labels(mut self, labels: Vec<String>) -> Self {
        self.scale.x_labels = Some(labels);
        self
    }

    /// Forces equal x/y grid cell sizes.
    pub fn with_strict_grid(mut self, strict: bool) -> Self {
        self.grid.strict = strict;
        self
    }

    /// Snaps the x grid cell size to integer pixels.
    pub fn with_optimise_square_size(mut self, optimise: bool) -> Self {
        self.grid.optimise_square_size = optimise;
        self
    }

    /// Merges a coincident x/y zero tick into a single label.
    pub fn with_shared_axis_zero(mut self, shared: bool) -> Self {
        self.grid.shared_axis_zero = shared;
        self
    }

    /// Sets the spline tension coefficient.
    pub fn with_tension(mut self, tension: f64) -> Self {
        self.tension = tension;
        self
    }

    /// Sets the chart title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the x-axis label.
    pub fn with_x_label(mut self, label: impl Into<String>) -> Self {
        self.x_label = Some(label.into());
        self
    }

    /// Sets the y-axis label.
    pub fn with_y_label(mut self, label: impl Into<String>) -> Self {
        self.y_label = Some(label.into());
        self
    }
}
