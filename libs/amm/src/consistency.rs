//! Batch/incremental cross-validation
//!
//! The central correctness law of the curve math: summing per-step amounts
//! over `[tick_lower, tick_upper)` at constant liquidity must equal the
//! single batch computation over the same span, within tolerance. This
//! module makes that an automated, reportable check.

use crate::interval_math::IntervalAmountCalculator;
use curve_types::{CurveError, PoolParameters, Result};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// Parameters for a consistency run.
///
/// `tolerance` is relative to the batch value (absolute when the batch
/// value is zero).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsistencyConfig {
    pub step_width: i32,
    pub tolerance: Decimal,
}

impl Default for ConsistencyConfig {
    fn default() -> Self {
        Self {
            step_width: 10,
            tolerance: dec!(0.000001),
        }
    }
}

/// Measured outcome of one consistency check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ConsistencyReport {
    pub amount0_stepped: Decimal,
    pub amount0_direct: Decimal,
    pub amount0_deviation: Decimal,
    pub amount1_stepped: Decimal,
    pub amount1_direct: Decimal,
    pub amount1_deviation: Decimal,
    pub step_count: u32,
    pub passed: bool,
}

/// Cross-validates stepped and batch reserve computations.
pub struct ConsistencyChecker;

impl ConsistencyChecker {
    /// Compute `[tick_lower, tick_upper)` at constant `liquidity` two ways
    /// and compare: (a) summed per-step amounts at `config.step_width`
    /// granularity, (b) one direct batch call over the whole span.
    pub fn check(
        tick_lower: i32,
        tick_upper: i32,
        liquidity: u128,
        params: &PoolParameters,
        config: &ConsistencyConfig,
    ) -> Result<ConsistencyReport> {
        if config.step_width <= 0 {
            return Err(CurveError::MalformedInput(format!(
                "step width must be positive, got {}",
                config.step_width
            )));
        }
        if tick_lower >= tick_upper {
            return Err(CurveError::MalformedInput(format!(
                "check span must satisfy tick_lower < tick_upper, got [{tick_lower}, {tick_upper})"
            )));
        }

        let mut stepped0 = Decimal::ZERO;
        let mut stepped1 = Decimal::ZERO;
        let mut step_count = 0u32;

        let mut step = tick_lower;
        while step < tick_upper {
            let step_end = step.saturating_add(config.step_width).min(tick_upper);
            let (a0, a1) = IntervalAmountCalculator::amounts(step, step_end, liquidity, params)?;
            stepped0 += a0;
            stepped1 += a1;
            step_count += 1;
            step = step_end;
        }

        let (direct0, direct1) =
            IntervalAmountCalculator::amounts(tick_lower, tick_upper, liquidity, params)?;

        let deviation0 = (stepped0 - direct0).abs();
        let deviation1 = (stepped1 - direct1).abs();
        let passed = within_tolerance(deviation0, direct0, config.tolerance)
            && within_tolerance(deviation1, direct1, config.tolerance);

        Ok(ConsistencyReport {
            amount0_stepped: stepped0,
            amount0_direct: direct0,
            amount0_deviation: deviation0,
            amount1_stepped: stepped1,
            amount1_direct: direct1,
            amount1_deviation: deviation1,
            step_count,
            passed,
        })
    }
}

fn within_tolerance(deviation: Decimal, reference: Decimal, tolerance: Decimal) -> bool {
    if reference == Decimal::ZERO {
        deviation <= tolerance
    } else {
        deviation <= reference.abs() * tolerance
    }
}
