// Copyright 2026 the Plotline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Line/area chart engine.
//!
//! This crate turns named numeric data series plus a configuration into the
//! geometry a drawing backend needs:
//! - **Scales**: "nice" tick steps (`{1,2,5,10}·10^k`), tick counts, labels.
//! - **Layout**: paddings driven by measured label widths, plot extents, grid
//!   cell sizes, and the x-axis crossing position.
//! - **Mapping**: `(index, value)` pairs to pixel points, plus cubic spline
//!   control points for smooth lines.
//!
//! Drawing itself stays behind the [`DrawSurface`] trait; text measurement
//! comes from `plotline_text`. Container/DOM discovery, legends, and palette
//! utilities are out of scope.

#![no_std]

extern crate alloc;

mod axis;
mod chart;
mod config;
mod coordinator;
mod error;
#[cfg(not(feature = "std"))]
mod float;
mod format;
mod interpolate;
mod layout;
mod point;
mod scale;
mod series;
mod surface;

pub use axis::{AxisOptions, AxisScale};
pub use chart::{Chart, RenderSummary};
pub use config::{ChartOptions, GridOptions, ScaleOptions};
pub use coordinator::AxisCoordinator;
pub use error::{ChartError, Result};
pub use format::{format_tick, shorthand};
pub use interpolate::{ControlPoints, control_points};
pub use layout::{Geometry, GridCell, Padding, Size};
pub use point::PointMapper;
pub use scale::NiceScale;
pub use series::{DataSeries, Interpolation, SeriesSet};
pub use surface::{DrawSurface, StrokeStyle, TextAnchor};

pub use plotline_text::{HeuristicTextMeasurer, TextMeasurer, TextMetrics, TextStyle};
