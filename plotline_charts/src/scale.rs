// Copyright 2026 the Plotline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! "Nice" scale computation.
//!
//! Given a raw `[min, max]` data range and a desired tick count, [`NiceScale`]
//! picks a human-readable tick step restricted to `{1, 2, 5, 10} × 10^k` and a
//! tick count that spans the data without excessive unused trailing ticks.
//!
//! The approach follows the classic loose-labeling scheme: round the overall
//! range up to a nice number, derive a candidate step from it, then adjust the
//! tick count in a bounded loop. Degenerate ranges (all data identical) are
//! special-cased before any `log10` is taken.

extern crate alloc;

use alloc::vec::Vec;

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

use crate::error::{ChartError, Result};
use crate::format::step_decimals;

/// Hard cap on the tick adjustment loop. The loop is monotonic, so this only
/// guards against pathological float inputs.
const MAX_TICK_SEGMENTS: usize = 1000;

/// A computed nice scale for one axis.
///
/// The generated tick values are `rounded_min + i × tick_step` for
/// `i ∈ [0, tick_count]`, so a scale with `tick_count` segments renders
/// `tick_count + 1` graduation marks.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NiceScale {
    min: f64,
    max: f64,
    tick_step: f64,
    tick_count: usize,
    rounded_min: f64,
}

impl NiceScale {
    /// Computes a nice scale for `[min, max]` targeting `desired_ticks` marks.
    ///
    /// When `optimise` is set, trailing ticks that the data never reaches are
    /// trimmed; the comparison uses a precision derived from the tick step so
    /// float noise cannot flip the result between renders.
    ///
    /// Fails with [`ChartError::InvalidRange`] for non-finite endpoints or
    /// `min > max`, and [`ChartError::InvalidAxisConfiguration`] for a zero
    /// desired tick count.
    pub fn compute(min: f64, max: f64, desired_ticks: usize, optimise: bool) -> Result<Self> {
        if !min.is_finite() || !max.is_finite() || min > max {
            return Err(ChartError::InvalidRange { min, max });
        }
        if desired_ticks < 1 {
            return Err(ChartError::InvalidAxisConfiguration(
                "desired tick count must be at least 1",
            ));
        }

        // `log10(0)` is undefined; all-identical data still needs a usable
        // scale, so substitute a minimal positive range.
        let range = if max - min == 0.0 { 1.0 } else { max - min };

        let segments = desired_ticks.max(2) - 1;
        let nice_range = nice_num(range, false);
        let tick_step = nice_num(nice_range / segments as f64, true);
        let rounded_min = (min / tick_step).floor() * tick_step;

        // The step is fixed from here on; only the count moves. Recomputing
        // the step inside the loop can oscillate between neighbouring nice
        // values and never settle.
        let mut tick_count = segments;
        while tick_count > 1 && rounded_min + tick_step * (tick_count - 1) as f64 >= max {
            tick_count -= 1;
        }
        while rounded_min + tick_step * (tick_count as f64) < max {
            tick_count += 1;
            if tick_count > MAX_TICK_SEGMENTS {
                return Err(ChartError::InvalidAxisConfiguration(
                    "tick count failed to converge",
                ));
            }
        }

        if optimise {
            let factor = precision_factor(tick_step);
            while tick_count > 1 {
                let below_last = rounded_min + tick_step * (tick_count - 1) as f64;
                if (below_last * factor).round() / factor >= max {
                    tick_count -= 1;
                } else {
                    break;
                }
            }
        }

        Ok(Self {
            min,
            max,
            tick_step,
            tick_count,
            rounded_min,
        })
    }

    /// Rebuilds a scale around an explicitly chosen tick step.
    ///
    /// Used by axes that clamp the step to a floor (index axes, where a
    /// fractional step between discrete samples is meaningless). The step must
    /// be positive and finite.
    pub(crate) fn with_step(min: f64, max: f64, tick_step: f64) -> Result<Self> {
        if !min.is_finite() || !max.is_finite() || min > max {
            return Err(ChartError::InvalidRange { min, max });
        }
        if !tick_step.is_finite() || tick_step <= 0.0 {
            return Err(ChartError::InvalidAxisConfiguration(
                "tick step must be positive",
            ));
        }
        let rounded_min = (min / tick_step).floor() * tick_step;
        let count = ((max - rounded_min) / tick_step).ceil();
        #[allow(
            clippy::cast_possible_truncation,
            reason = "non-negative and bounded by the range/step ratio"
        )]
        let tick_count = (count.max(1.0).min(MAX_TICK_SEGMENTS as f64)) as usize;
        Ok(Self {
            min,
            max,
            tick_step,
            tick_count,
            rounded_min,
        })
    }

    /// The raw data minimum this scale was computed from.
    pub fn min(&self) -> f64 {
        self.min
    }

    /// The raw data maximum this scale was computed from.
    pub fn max(&self) -> f64 {
        self.max
    }

    /// The tick step, always of the form `{1, 2, 5, 10} × 10^k`.
    pub fn tick_step(&self) -> f64 {
        self.tick_step
    }

    /// The number of tick segments (one less than the number of marks).
    pub fn tick_count(&self) -> usize {
        self.tick_count
    }

    /// The data minimum rounded down to a tick step multiple.
    pub fn rounded_min(&self) -> f64 {
        self.rounded_min
    }

    /// Returns the generated tick values, lowest first.
    pub fn ticks(&self) -> Vec<f64> {
        (0..=self.tick_count)
            .map(|i| self.rounded_min + self.tick_step * i as f64)
            .collect()
    }
}

/// Rounds a range to a "nice" number of the form `{1, 2, 5, 10} × 10^k`.
///
/// With `round` set the fraction snaps to the *nearest* nice value
/// (thresholds 1.5/3/7, used for the tick step); without it the selection is
/// ceiling-style (thresholds 1/2/5, used for the overall range).
fn nice_num(range: f64, round: bool) -> f64 {
    let exp = range.log10().floor();
    let base = 10.0_f64.powf(exp);
    let frac = range / base;
    let nice = if round {
        if frac < 1.5 {
            1.0
        } else if frac < 3.0 {
            2.0
        } else if frac < 7.0 {
            5.0
        } else {
            10.0
        }
    } else if frac <= 1.0 {
        1.0
    } else if frac <= 2.0 {
        2.0
    } else if frac <= 5.0 {
        5.0
    } else {
        10.0
    };
    nice * base
}

/// Returns `10^d` where `d` is the decimal precision implied by the step.
fn precision_factor(tick_step: f64) -> f64 {
    let decimals = step_decimals(tick_step);
    #[allow(clippy::cast_possible_truncation, reason = "step_decimals is capped at 12")]
    {
        10.0_f64.powi(decimals as i32)
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    fn assert_nice_step(step: f64) {
        let exp = step.log10().floor();
        let frac = step / 10.0_f64.powf(exp);
        let ok = [1.0, 2.0, 5.0, 10.0]
            .iter()
            .any(|n| (frac - n).abs() < 1.0e-9);
        assert!(ok, "step {step} is not of the form {{1,2,5,10}}·10^k");
    }

    #[test]
    fn steps_are_always_nice_numbers() {
        let mins = [-120.0, -7.3, 0.0, 0.004, 3.0, 950.0];
        let maxes = [0.0071, 0.9, 5.0, 16.0, 123.0, 98_000.0];
        for &min in &mins {
            for &max in &maxes {
                if min >= max {
                    continue;
                }
                for ticks in 2..=10 {
                    let scale = NiceScale::compute(min, max, ticks, false).unwrap();
                    assert_nice_step(scale.tick_step());
                    // The tick set must span at least [min, max].
                    assert!(scale.rounded_min() <= min);
                    let last = scale.rounded_min() + scale.tick_step() * scale.tick_count() as f64;
                    assert!(last >= max, "ticks stop at {last} before max {max}");
                }
            }
        }
    }

    #[test]
    fn degenerate_range_yields_a_stable_positive_step() {
        for &v in &[0.0, 5.0, -3.0] {
            let scale = NiceScale::compute(v, v, 5, false).unwrap();
            assert!(scale.tick_step().is_finite());
            assert!(scale.tick_step() > 0.0);
            assert!(scale.tick_count() >= 1);
        }
    }

    #[test]
    fn square_series_scenario() {
        // Data [0, 1, 4, 9, 16] with startAtZero and 5 desired ticks.
        let scale = NiceScale::compute(0.0, 16.0, 5, false).unwrap();
        assert_eq!(scale.rounded_min(), 0.0);
        assert!(scale.tick_step() == 5.0 || scale.tick_step() == 10.0);
        let ticks = scale.ticks();
        assert!(ticks.len() >= 4 && ticks.len() <= 6, "got {ticks:?}");
        assert!(*ticks.last().unwrap() >= 16.0);
    }

    #[test]
    fn optimise_trims_a_float_noise_overshoot() {
        // 0.30000000000000004-style noise: the tick just below the last one
        // rounds to the data max, so the last segment carries no data.
        let max = 0.6000000000000001;
        let plain = NiceScale::compute(0.0, max, 4, false).unwrap();
        let opt = NiceScale::compute(0.0, max, 4, true).unwrap();
        assert!(opt.tick_count() <= plain.tick_count());
        // Optimisation never drops below one segment.
        assert!(opt.tick_count() >= 1);
    }

    #[test]
    fn invalid_inputs_are_rejected() {
        assert!(matches!(
            NiceScale::compute(3.0, 1.0, 5, false),
            Err(ChartError::InvalidRange { .. })
        ));
        assert!(matches!(
            NiceScale::compute(f64::NAN, 1.0, 5, false),
            Err(ChartError::InvalidRange { .. })
        ));
        assert!(matches!(
            NiceScale::compute(0.0, 1.0, 0, false),
            Err(ChartError::InvalidAxisConfiguration(_))
        ));
    }
}
