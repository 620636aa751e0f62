// Copyright 2026 the Plotline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error types for chart construction and rendering.
//!
//! All validation is synchronous and fail-fast: a scale, series set, or
//! layout either constructs completely or returns an error. None of these
//! conditions are transient, so nothing here is retried.

extern crate alloc;

use alloc::string::String;

/// Convenience alias for results produced by this crate.
pub type Result<T> = core::result::Result<T, ChartError>;

/// Errors raised by scale computation, series validation, layout, and mapping.
#[derive(Clone, Debug, PartialEq)]
pub enum ChartError {
    /// A numeric range was invalid: `min > max`, or an endpoint was not finite.
    InvalidRange {
        /// Lower end of the offending range.
        min: f64,
        /// Upper end of the offending range.
        max: f64,
    },
    /// An axis resolved to an unusable configuration (zero ticks, empty
    /// series set, or a single effective tick that would force a
    /// divide-by-zero grid cell).
    InvalidAxisConfiguration(&'static str),
    /// Two data series in the same chart share a label.
    DuplicateLabel(String),
    /// A series was constructed from an empty value sequence.
    EmptySeries(String),
    /// Point mapping or drawing was invoked before layout completed.
    UninitializedGraph,
}

impl core::fmt::Display for ChartError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::InvalidRange { min, max } => {
                write!(f, "invalid scale range [{min}, {max}]")
            }
            Self::InvalidAxisConfiguration(reason) => {
                write!(f, "invalid axis configuration: {reason}")
            }
            Self::DuplicateLabel(label) => {
                write!(f, "duplicate series label {label:?}")
            }
            Self::EmptySeries(label) => {
                write!(f, "series {label:?} has no data")
            }
            Self::UninitializedGraph => {
                write!(f, "layout has not been computed yet")
            }
        }
    }
}

impl core::error::Error for ChartError {}
