//! Reserve amounts for a single tick interval
//!
//! Applies the square-root-price formula to one half-open interval
//! `[tick_a, tick_b)` at constant liquidity:
//!
//! ```text
//! amount0 = L * (sqrtB - sqrtA) / (sqrtB * sqrtA) / 10^token0_decimals
//! amount1 = L * (sqrtB - sqrtA)                   / 10^token1_decimals
//! ```
//!
//! The on-chain formulation carries Q96-scaled square-root prices; those
//! scale factors cancel in both expressions, so the math runs on the
//! unscaled ratios. Decimal rescaling happens exactly once per amount,
//! after all multiplication, to avoid compounding precision loss.

use crate::sqrt_price::sqrt_ratio_at_tick;
use curve_types::{CurveError, PoolParameters, Result};
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;

/// Per-interval reserve amount calculator.
pub struct IntervalAmountCalculator;

impl IntervalAmountCalculator {
    /// Token0/token1 reserve amounts for liquidity `liquidity` active over
    /// `[tick_a, tick_b)`, rescaled by the pool's token decimals.
    ///
    /// Requires `tick_a < tick_b`. Zero liquidity short-circuits to
    /// `(0, 0)` without touching the division path.
    pub fn amounts(
        tick_a: i32,
        tick_b: i32,
        liquidity: u128,
        params: &PoolParameters,
    ) -> Result<(Decimal, Decimal)> {
        params.validate()?;
        if tick_a >= tick_b {
            return Err(CurveError::MalformedInput(format!(
                "interval bounds must satisfy tick_a < tick_b, got [{tick_a}, {tick_b})"
            )));
        }
        if liquidity == 0 {
            return Ok((Decimal::ZERO, Decimal::ZERO));
        }

        let sqrt_a = sqrt_ratio_at_tick(tick_a)?;
        let sqrt_b = sqrt_ratio_at_tick(tick_b)?;
        let liquidity_dec = Decimal::from_u128(liquidity).ok_or_else(|| {
            CurveError::Overflow(format!("liquidity {liquidity} exceeds decimal range"))
        })?;

        let diff = sqrt_b - sqrt_a;

        let spread = liquidity_dec
            .checked_mul(diff)
            .ok_or_else(|| overflow(tick_a, tick_b, "liquidity * sqrt spread"))?;

        // Divide by each sqrt factor in turn rather than by their product:
        // near the tick domain edges the product sqrtB * sqrtA leaves the
        // representable range even though the quotient itself does not.
        let amount0_raw = spread
            .checked_div(sqrt_b)
            .and_then(|partial| partial.checked_div(sqrt_a))
            .ok_or_else(|| overflow(tick_a, tick_b, "amount0 division"))?;

        // Scale by 10^-decimals, once, last.
        let amount0 = amount0_raw
            .checked_mul(Decimal::new(1, params.token0_decimals))
            .ok_or_else(|| overflow(tick_a, tick_b, "amount0 rescale"))?;
        let amount1 = spread
            .checked_mul(Decimal::new(1, params.token1_decimals))
            .ok_or_else(|| overflow(tick_a, tick_b, "amount1 rescale"))?;

        if amount0 < Decimal::ZERO {
            return Err(CurveError::NegativeAmount {
                tick_lower: tick_a,
                tick_upper: tick_b,
                token: 0,
                value: amount0,
            });
        }
        if amount1 < Decimal::ZERO {
            return Err(CurveError::NegativeAmount {
                tick_lower: tick_a,
                tick_upper: tick_b,
                token: 1,
                value: amount1,
            });
        }

        Ok((amount0, amount1))
    }
}

fn overflow(tick_a: i32, tick_b: i32, step: &str) -> CurveError {
    CurveError::Overflow(format!("{step} for interval [{tick_a}, {tick_b})"))
}
