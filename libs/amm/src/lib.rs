//! # Curve AMM Library - Concentrated-Liquidity Reserve Mathematics
//!
//! ## Purpose
//!
//! Computes the distribution of underlying token reserves (`amount0`,
//! `amount1`) across the full liquidity curve of a concentrated-liquidity
//! pool, given only the sparse tick boundaries at which liquidity changes.
//! Point-wise liquidity deltas are folded into per-interval liquidity values,
//! the square-root-price formula is applied per interval, and an automated
//! consistency check guarantees that walking the curve step-by-step produces
//! the same totals as a single batch computation.
//!
//! ## Integration Points
//!
//! - **Input Sources**: pool snapshots (current tick spacing plus
//!   tick/liquidity-delta records) from an external pool-state provider
//! - **Output Destinations**: chart renderers and reserve analyzers consuming
//!   ordered `(tick_lower, amount0, amount1)` sequences
//! - **Precision**: all amounts computed in `Decimal` arithmetic
//!   (no floating-point); 28 significant digits through exponentiation,
//!   division, and decimal rescaling
//! - **Purity**: every entry point is a pure function — identical inputs
//!   produce bit-identical outputs, no I/O, no shared mutable state
//!
//! ## Architecture Role
//!
//! ```text
//! Pool Snapshot → [LiquidityCurveBuilder] → Liquidity Intervals
//!                         ↓
//!                [RangeAmountEngine] → per-step walk
//!                         ↓
//!            [IntervalAmountCalculator] → (amount0, amount1)
//!                         ↓
//!                 Ordered AmountSamples → renderer / plotter
//! ```
//!
//! [`ConsistencyChecker`] cross-validates the stepped walk against the batch
//! formula, replacing manual print-and-eyeball verification with an
//! automated property.

pub mod consistency;
pub mod curve;
pub mod engine;
pub mod interval_math;
pub mod sqrt_price;

pub use consistency::{ConsistencyChecker, ConsistencyConfig, ConsistencyReport};
pub use curve::LiquidityCurveBuilder;
pub use engine::RangeAmountEngine;
pub use interval_math::IntervalAmountCalculator;
pub use sqrt_price::{sqrt_ratio_at_tick, MAX_TICK, MIN_TICK, Q96};

/// Common types for curve calculations
pub use curve_types::{
    AmountSample, CurveDiagnostics, CurveError, LiquidityInterval, PoolParameters, PoolSnapshot,
    RangeCurve, Result, TickRecord, TickSeries,
};
pub use rust_decimal::Decimal;
