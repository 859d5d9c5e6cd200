//! Tick boundary records and validated tick series

use crate::error::{CurveError, Result};
use serde::{Deserialize, Serialize};

/// One observed tick boundary: the price tick at which active liquidity
/// changes, and the signed liquidity delta applied when crossing it upward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickRecord {
    pub tick: i32,
    pub liquidity_net: i128,
}

impl TickRecord {
    pub fn new(tick: i32, liquidity_net: i128) -> Self {
        Self { tick, liquidity_net }
    }
}

/// Ordered collection of [`TickRecord`], sorted ascending by tick.
///
/// Sorted order is a precondition for prefix summation, so the constructor
/// sorts defensively rather than trusting input order. Duplicate tick
/// indices are a data error and rejected outright.
///
/// Deliberately not deserializable: a series can only come into existence
/// through [`TickSeries::new`], so the sorted/unique invariants always hold.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TickSeries {
    records: Vec<TickRecord>,
}

impl TickSeries {
    /// Build a validated series from records in any order.
    pub fn new(mut records: Vec<TickRecord>) -> Result<Self> {
        records.sort_by_key(|r| r.tick);

        for pair in records.windows(2) {
            if pair[0].tick == pair[1].tick {
                return Err(CurveError::MalformedInput(format!(
                    "duplicate tick index {} in series",
                    pair[0].tick
                )));
            }
        }

        Ok(Self { records })
    }

    pub fn records(&self) -> &[TickRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Net sum of all liquidity deltas. Zero means the curve is "closed":
    /// no liquidity remains in force past the final boundary.
    pub fn net_liquidity(&self) -> i128 {
        self.records.iter().map(|r| r.liquidity_net).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_series_sorts_defensively() {
        let series = TickSeries::new(vec![
            TickRecord::new(1010, -500),
            TickRecord::new(1000, 500),
        ])
        .unwrap();

        let ticks: Vec<i32> = series.records().iter().map(|r| r.tick).collect();
        assert_eq!(ticks, vec![1000, 1010]);
    }

    #[test]
    fn test_duplicate_ticks_rejected() {
        let err = TickSeries::new(vec![
            TickRecord::new(1000, 500),
            TickRecord::new(1000, -500),
        ])
        .unwrap_err();

        assert!(matches!(err, CurveError::MalformedInput(_)));
    }

    #[test]
    fn test_net_liquidity_balanced() {
        let series = TickSeries::new(vec![
            TickRecord::new(0, 1_000_000),
            TickRecord::new(100, -400_000),
            TickRecord::new(200, -600_000),
        ])
        .unwrap();

        assert_eq!(series.net_liquidity(), 0);
    }

    #[test]
    fn test_net_liquidity_open_ended() {
        let series = TickSeries::new(vec![
            TickRecord::new(0, 1_000_000),
            TickRecord::new(100, -250_000),
        ])
        .unwrap();

        assert_eq!(series.net_liquidity(), 750_000);
    }

    #[test]
    fn test_empty_series_is_valid() {
        let series = TickSeries::new(vec![]).unwrap();
        assert!(series.is_empty());
        assert_eq!(series.net_liquidity(), 0);
    }
}
