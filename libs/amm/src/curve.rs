//! Prefix-sum construction of liquidity intervals
//!
//! Turns point-wise liquidity deltas into the per-interval liquidity values
//! in force between consecutive tick boundaries. The fold is pure: it
//! returns a fresh interval sequence plus diagnostics instead of mutating
//! any external accumulator.

use curve_types::{CurveDiagnostics, CurveError, LiquidityInterval, Result, TickSeries};

/// Builds the ordered liquidity-interval sequence for a tick series.
pub struct LiquidityCurveBuilder;

impl LiquidityCurveBuilder {
    /// Convert a tick series into the N-1 contiguous intervals between its
    /// N boundaries.
    ///
    /// A running signed accumulator starts at 0; each record's
    /// `liquidity_net` is added in ascending tick order, and the post-add
    /// value is the liquidity in force up to the next boundary. The region
    /// past the last boundary has no known upper bound and is not emitted.
    ///
    /// Fewer than two records yield an empty interval list. Zero-liquidity
    /// intervals are emitted, never skipped, so consumers see a complete
    /// curve. A negative accumulator can never represent valid unsigned
    /// liquidity and aborts the build.
    pub fn build(series: &TickSeries) -> Result<(Vec<LiquidityInterval>, CurveDiagnostics)> {
        let records = series.records();
        let diagnostics = CurveDiagnostics {
            record_count: records.len(),
            net_liquidity: series.net_liquidity(),
        };

        if records.len() < 2 {
            return Ok((Vec::new(), diagnostics));
        }

        let mut intervals = Vec::with_capacity(records.len() - 1);
        let mut running: i128 = 0;

        for pair in records.windows(2) {
            running = running.checked_add(pair[0].liquidity_net).ok_or_else(|| {
                CurveError::Overflow(format!(
                    "liquidity accumulator at tick {}",
                    pair[0].tick
                ))
            })?;

            if running < 0 {
                return Err(CurveError::MalformedInput(format!(
                    "running liquidity went negative ({running}) at tick {}",
                    pair[0].tick
                )));
            }

            intervals.push(LiquidityInterval {
                tick_lower: pair[0].tick,
                tick_upper: pair[1].tick,
                liquidity: running as u128,
            });
        }

        Ok((intervals, diagnostics))
    }
}
