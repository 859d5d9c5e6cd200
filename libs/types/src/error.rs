//! Error taxonomy for reserve curve computation
//!
//! All errors are detected synchronously at input validation or at the
//! failing arithmetic step; nothing is deferred and nothing is retried.

use rust_decimal::Decimal;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CurveError {
    /// Input data cannot produce a meaningful curve: duplicate tick indices,
    /// ticks outside the supported domain, non-positive tick spacing,
    /// unsupported decimal scale, or a running liquidity sum that went
    /// negative. Computation aborts with no partial output.
    #[error("Malformed input: {0}")]
    MalformedInput(String),

    /// An intermediate liquidity/price product exceeded the numeric range of
    /// the decimal representation. Surfaced instead of wrapping or
    /// saturating.
    #[error("Arithmetic overflow: {0}")]
    Overflow(String),

    /// The reserve formula produced a negative amount, which is impossible
    /// for non-negative liquidity over an ascending tick range. Indicates an
    /// input or arithmetic bug; never clamped silently.
    #[error("Negative amount{token} = {value} for interval [{tick_lower}, {tick_upper})")]
    NegativeAmount {
        tick_lower: i32,
        tick_upper: i32,
        token: u8,
        value: Decimal,
    },
}

pub type Result<T> = std::result::Result<T, CurveError>;
