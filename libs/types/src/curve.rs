//! Derived curve entities: liquidity intervals, amount samples, diagnostics

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Half-open tick range `[tick_lower, tick_upper)` over which a constant
/// liquidity value is in force.
///
/// Intervals are derived by prefix-summing liquidity deltas across a tick
/// series; the intervals for a series of N boundaries are exactly the N-1
/// contiguous gaps between consecutive boundaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LiquidityInterval {
    pub tick_lower: i32,
    pub tick_upper: i32,
    pub liquidity: u128,
}

impl LiquidityInterval {
    pub fn width(&self) -> i64 {
        self.tick_upper as i64 - self.tick_lower as i64
    }
}

/// One output row of the reserve curve: the token0/token1 reserve amounts
/// attributable to the liquidity active over the step starting at
/// `tick_lower`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AmountSample {
    pub tick_lower: i32,
    pub amount0: Decimal,
    pub amount1: Decimal,
}

/// Data-integrity observations gathered while building a curve.
///
/// A nonzero `net_liquidity` means the liquidity deltas do not balance:
/// some liquidity region extends past the last observed boundary. The curve
/// over the observed range is still usable, so this is reported alongside
/// the output rather than failing it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurveDiagnostics {
    pub record_count: usize,
    pub net_liquidity: i128,
}

impl CurveDiagnostics {
    pub fn is_balanced(&self) -> bool {
        self.net_liquidity == 0
    }
}

/// Full result of a range computation: ordered samples plus diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RangeCurve {
    pub samples: Vec<AmountSample>,
    pub diagnostics: CurveDiagnostics,
}
