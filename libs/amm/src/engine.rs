//! Range walk orchestration
//!
//! Drives the full pipeline: liquidity intervals from the prefix-sum
//! builder, then one reserve-amount sample per tick-spacing step. All entry
//! points are pure associated functions; identical inputs produce
//! bit-identical output sequences.

use crate::curve::LiquidityCurveBuilder;
use crate::interval_math::IntervalAmountCalculator;
use crate::sqrt_price::{MAX_TICK, MIN_TICK};
use curve_types::{
    AmountSample, CurveError, LiquidityInterval, PoolParameters, RangeCurve, Result, TickSeries,
};
use rust_decimal::Decimal;
use tracing::{debug, warn};

/// Stateless engine producing ordered reserve-amount curves.
pub struct RangeAmountEngine;

impl RangeAmountEngine {
    /// Compute the fine-grained reserve curve for a tick series.
    ///
    /// Each liquidity interval is subdivided into contiguous steps of
    /// `tick_spacing`; a final partial step uses the interval's true upper
    /// bound as its right edge rather than overshooting it. Samples are
    /// ordered ascending by `tick_lower` — that ordering is the x-axis for
    /// downstream plotting and is preserved exactly.
    ///
    /// Fewer than two records yield an empty curve, not an error. An
    /// imbalanced series (nonzero net liquidity) still produces the curve
    /// over the observed range; the imbalance is carried in the diagnostics
    /// and logged as a warning.
    pub fn compute_range(series: &TickSeries, params: &PoolParameters) -> Result<RangeCurve> {
        params.validate()?;
        let (intervals, diagnostics) = LiquidityCurveBuilder::build(series)?;

        if !diagnostics.is_balanced() {
            warn!(
                net_liquidity = diagnostics.net_liquidity,
                "liquidity deltas do not sum to zero; curve is open-ended past the last boundary"
            );
        }

        let mut samples = Vec::new();
        for interval in &intervals {
            Self::walk_interval(interval, params, &mut samples)?;
        }

        debug!(
            intervals = intervals.len(),
            samples = samples.len(),
            "computed reserve curve"
        );

        Ok(RangeCurve {
            samples,
            diagnostics,
        })
    }

    /// Single-interval mode: one sample per liquidity interval with no
    /// subdivision, for callers that need total reserves per liquidity
    /// regime rather than a fine-grained curve.
    pub fn compute_interval_totals(
        series: &TickSeries,
        params: &PoolParameters,
    ) -> Result<RangeCurve> {
        params.validate()?;
        let (intervals, diagnostics) = LiquidityCurveBuilder::build(series)?;

        if !diagnostics.is_balanced() {
            warn!(
                net_liquidity = diagnostics.net_liquidity,
                "liquidity deltas do not sum to zero; curve is open-ended past the last boundary"
            );
        }

        let mut samples = Vec::with_capacity(intervals.len());
        for interval in &intervals {
            let (amount0, amount1) = IntervalAmountCalculator::amounts(
                interval.tick_lower,
                interval.tick_upper,
                interval.liquidity,
                params,
            )?;
            samples.push(AmountSample {
                tick_lower: interval.tick_lower,
                amount0,
                amount1,
            });
        }

        Ok(RangeCurve {
            samples,
            diagnostics,
        })
    }

    /// Reserve amounts for the single spacing-aligned interval containing
    /// `tick`, for one fixed-width position rather than a curve.
    ///
    /// The interval lower bound is `tick` floored to a multiple of the
    /// spacing. Euclidean floor division keeps the invariant
    /// `lower <= tick < upper` for negative ticks as well. When the aligned
    /// interval would cross a domain edge it is clamped to
    /// `[MIN_TICK, MAX_TICK]`, so every accepted tick resolves to a valid
    /// interval containing it. `MAX_TICK` itself is rejected: no interval
    /// lies above it.
    pub fn position_amounts(
        tick: i32,
        liquidity: u128,
        params: &PoolParameters,
    ) -> Result<(Decimal, Decimal)> {
        params.validate()?;
        if !(MIN_TICK..MAX_TICK).contains(&tick) {
            return Err(CurveError::MalformedInput(format!(
                "tick {tick} outside supported position domain [{MIN_TICK}, {MAX_TICK})"
            )));
        }
        let lower = (tick.div_euclid(params.tick_spacing) * params.tick_spacing).max(MIN_TICK);
        let upper = lower.saturating_add(params.tick_spacing).min(MAX_TICK);
        IntervalAmountCalculator::amounts(lower, upper, liquidity, params)
    }

    fn walk_interval(
        interval: &LiquidityInterval,
        params: &PoolParameters,
        samples: &mut Vec<AmountSample>,
    ) -> Result<()> {
        let mut step_lower = interval.tick_lower;
        while step_lower < interval.tick_upper {
            let step_upper = step_lower
                .saturating_add(params.tick_spacing)
                .min(interval.tick_upper);

            let (amount0, amount1) = IntervalAmountCalculator::amounts(
                step_lower,
                step_upper,
                interval.liquidity,
                params,
            )?;
            samples.push(AmountSample {
                tick_lower: step_lower,
                amount0,
                amount1,
            });

            step_lower = step_upper;
        }
        Ok(())
    }
}
