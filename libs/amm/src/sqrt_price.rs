//! Tick to square-root-price conversion
//!
//! Each tick represents a 0.01% (1.0001x) change in price, so the
//! square-root price ratio at a tick is `1.0001^(tick/2)`, equivalently
//! `sqrt(1.0001)^tick`. On-chain implementations carry this value as a Q96
//! fixed-point integer; here the exponentiation runs in `Decimal` arithmetic
//! where the Q96 factors of the reserve formula cancel algebraically, so the
//! unscaled ratio is used directly.

use curve_types::{CurveError, Result};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Q96 fixed-point scale used by on-chain square-root prices (2^96).
pub const Q96: u128 = 1u128 << 96;

/// Tick domain bounds of the concentrated-liquidity price grid.
pub const MIN_TICK: i32 = -887272;
pub const MAX_TICK: i32 = 887272;

/// sqrt(1.0001) at full 28-digit precision, the per-tick ratio of the
/// square-root price.
const SQRT_TICK_BASE: Decimal = dec!(1.0000499987500624960940234170);

/// Square-root price ratio `1.0001^(tick/2)` for a tick in
/// `[MIN_TICK, MAX_TICK]`.
pub fn sqrt_ratio_at_tick(tick: i32) -> Result<Decimal> {
    if !(MIN_TICK..=MAX_TICK).contains(&tick) {
        return Err(CurveError::MalformedInput(format!(
            "tick {} outside supported domain [{}, {}]",
            tick, MIN_TICK, MAX_TICK
        )));
    }

    let magnitude = pow_checked(SQRT_TICK_BASE, tick.unsigned_abs())?;

    if tick < 0 {
        // One terminal division keeps the negative-tick path as precise as
        // the positive one.
        Decimal::ONE
            .checked_div(magnitude)
            .ok_or_else(|| CurveError::Overflow(format!("inverting sqrt ratio at tick {tick}")))
    } else {
        Ok(magnitude)
    }
}

/// Binary exponentiation over `Decimal` with checked multiplication.
fn pow_checked(base: Decimal, mut exp: u32) -> Result<Decimal> {
    let mut acc = Decimal::ONE;
    let mut factor = base;

    while exp > 0 {
        if exp & 1 == 1 {
            acc = acc
                .checked_mul(factor)
                .ok_or_else(|| CurveError::Overflow("sqrt ratio exponentiation".to_string()))?;
        }
        exp >>= 1;
        if exp > 0 {
            factor = factor
                .checked_mul(factor)
                .ok_or_else(|| CurveError::Overflow("sqrt ratio exponentiation".to_string()))?;
        }
    }

    Ok(acc)
}
