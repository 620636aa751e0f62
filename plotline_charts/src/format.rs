// Copyright 2026 the Plotline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tick label formatting.
//!
//! Two formatters live here:
//! - [`format_tick`] renders a tick value with a decimal count derived from
//!   the tick step, so every label along one axis uses the same precision.
//! - [`shorthand`] renders large magnitudes with `k`/`m`/`b` suffixes
//!   (`6000` becomes `6k`).

extern crate alloc;

use alloc::string::String;

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

/// Formats a tick value given the tick step.
///
/// The number of decimal places is derived from the step magnitude: a step of
/// `0.05` yields two decimals, a step of `5` yields none. This keeps labels
/// along an axis visually consistent and avoids float noise like `0.30000004`.
pub fn format_tick(value: f64, step: f64) -> String {
    if !value.is_finite() {
        return alloc::format!("{value}");
    }
    let decimals = step_decimals(step);
    alloc::format!("{value:.decimals$}")
}

/// Returns the number of decimal places implied by a tick step.
pub(crate) fn step_decimals(step: f64) -> usize {
    if !step.is_finite() || step <= 0.0 || step >= 1.0 {
        return 0;
    }
    let places = -step.log10().floor();
    // Nice steps are {1,2,5,10}·10^k, so this stays tiny; the cap is only a
    // guard against denormal steps.
    #[allow(clippy::cast_possible_truncation, reason = "clamped to [0, 12]")]
    {
        places.clamp(0.0, 12.0) as usize
    }
}

/// Formats a value using `k`/`m`/`b` suffixes for large magnitudes.
///
/// Thresholds: `|v| >= 10^3` divides by `10^3` with suffix `k`, `>= 10^6`
/// by `10^6` with `m`, `>= 10^9` by `10^9` with `b`. Values below a thousand
/// are rendered plainly.
pub fn shorthand(value: f64) -> String {
    if !value.is_finite() {
        return alloc::format!("{value}");
    }
    let abs = value.abs();
    let (scaled, suffix) = if abs >= 1.0e9 {
        (value / 1.0e9, "b")
    } else if abs >= 1.0e6 {
        (value / 1.0e6, "m")
    } else if abs >= 1.0e3 {
        (value / 1.0e3, "k")
    } else {
        (value, "")
    };
    let mut out = plain(scaled);
    out.push_str(suffix);
    out
}

/// Renders a value without a forced decimal count, dropping a `.0` tail.
fn plain(value: f64) -> String {
    if (value - value.round()).abs() < 1.0e-9 {
        let n = value.round().clamp(i64::MIN as f64, i64::MAX as f64);
        #[allow(clippy::cast_possible_truncation, reason = "clamped to the i64 range")]
        {
            alloc::format!("{}", n as i64)
        }
    } else {
        alloc::format!("{value}")
    }
}
