//! # Curve Types Library
//!
//! Shared type definitions for concentrated-liquidity reserve curve
//! calculations.
//!
//! ## Design Philosophy
//!
//! - **No Precision Loss**: All reserve amounts are `rust_decimal::Decimal`;
//!   floating point never touches a financial value
//! - **Immutable Value Data**: every entity is create-once, read-many —
//!   nothing here is mutated after construction
//! - **Validated at the Boundary**: tick series and pool parameters are
//!   checked when built, so the math layer can assume well-formed input
//! - **Structured Errors**: all failure modes are explicit [`CurveError`]
//!   variants for the caller to render or ignore; this crate never logs
//!
//! ## Quick Start
//!
//! ```rust
//! use curve_types::{PoolParameters, TickRecord, TickSeries};
//!
//! let series = TickSeries::new(vec![
//!     TickRecord::new(1000, 500),
//!     TickRecord::new(1010, -500),
//! ])?;
//! let params = PoolParameters::new(10, 18, 18)?;
//! assert_eq!(series.net_liquidity(), 0);
//! # Ok::<(), curve_types::CurveError>(())
//! ```

pub mod curve;
pub mod error;
pub mod pool;
pub mod tick;

pub use curve::{AmountSample, CurveDiagnostics, LiquidityInterval, RangeCurve};
pub use error::{CurveError, Result};
pub use pool::{PoolParameters, PoolSnapshot};
pub use tick::{TickRecord, TickSeries};

/// Common numeric type for reserve amounts
pub use rust_decimal::Decimal;
