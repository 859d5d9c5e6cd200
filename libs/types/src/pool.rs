//! Pool parameters and the external pool-snapshot input format

use crate::error::{CurveError, Result};
use crate::tick::{TickRecord, TickSeries};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Maximum supported token decimal scale. Bound by the 28-digit scale of
/// the underlying decimal representation.
pub const MAX_TOKEN_DECIMALS: u32 = 28;

/// Sampling and scaling parameters for one pool.
///
/// `tick_spacing` is the step at which amounts are sampled within a
/// liquidity interval; the token decimal counts rescale raw integer amounts
/// into human-readable units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoolParameters {
    pub tick_spacing: i32,
    pub token0_decimals: u32,
    pub token1_decimals: u32,
}

impl PoolParameters {
    /// Build validated parameters.
    pub fn new(tick_spacing: i32, token0_decimals: u32, token1_decimals: u32) -> Result<Self> {
        let params = Self {
            tick_spacing,
            token0_decimals,
            token1_decimals,
        };
        params.validate()?;
        Ok(params)
    }

    /// Validate all parameters, reporting the first violation found.
    pub fn validate(&self) -> Result<()> {
        if self.tick_spacing <= 0 {
            return Err(CurveError::MalformedInput(format!(
                "tick spacing must be positive, got {}",
                self.tick_spacing
            )));
        }
        if self.token0_decimals > MAX_TOKEN_DECIMALS {
            return Err(CurveError::MalformedInput(format!(
                "token0 decimals {} exceeds supported maximum {}",
                self.token0_decimals, MAX_TOKEN_DECIMALS
            )));
        }
        if self.token1_decimals > MAX_TOKEN_DECIMALS {
            return Err(CurveError::MalformedInput(format!(
                "token1 decimals {} exceeds supported maximum {}",
                self.token1_decimals, MAX_TOKEN_DECIMALS
            )));
        }
        Ok(())
    }
}

/// Pool snapshot as delivered by an external pool-state provider.
///
/// Wire format:
///
/// ```json
/// {
///   "State": { "tickSpacing": 10 },
///   "Ticks": [ { "Tick": 1000, "LiquidityNet": "500" }, ... ]
/// }
/// ```
///
/// `LiquidityNet` values can exceed the JSON-safe integer range, so both
/// plain numbers and decimal strings are accepted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PoolSnapshot {
    #[serde(rename = "State")]
    pub state: PoolStateInput,
    #[serde(rename = "Ticks")]
    pub ticks: Vec<TickRecordInput>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PoolStateInput {
    #[serde(rename = "tickSpacing")]
    pub tick_spacing: i32,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TickRecordInput {
    #[serde(rename = "Tick")]
    pub tick: i32,
    #[serde(rename = "LiquidityNet", deserialize_with = "de_i128")]
    pub liquidity_net: i128,
}

impl PoolSnapshot {
    /// Convert the wire snapshot into a validated tick series plus the
    /// pool's tick spacing.
    pub fn into_series(self) -> Result<(TickSeries, i32)> {
        let records = self
            .ticks
            .into_iter()
            .map(|t| TickRecord::new(t.tick, t.liquidity_net))
            .collect();
        let series = TickSeries::new(records)?;
        Ok((series, self.state.tick_spacing))
    }
}

fn de_i128<'de, D>(deserializer: D) -> std::result::Result<i128, D::Error>
where
    D: serde::Deserializer<'de>,
{
    struct I128Visitor;

    impl serde::de::Visitor<'_> for I128Visitor {
        type Value = i128;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("an integer or an integer string")
        }

        fn visit_i64<E: serde::de::Error>(self, v: i64) -> std::result::Result<i128, E> {
            Ok(v as i128)
        }

        fn visit_u64<E: serde::de::Error>(self, v: u64) -> std::result::Result<i128, E> {
            Ok(v as i128)
        }

        fn visit_i128<E: serde::de::Error>(self, v: i128) -> std::result::Result<i128, E> {
            Ok(v)
        }

        fn visit_str<E: serde::de::Error>(self, v: &str) -> std::result::Result<i128, E> {
            v.parse::<i128>().map_err(E::custom)
        }
    }

    deserializer.deserialize_any(I128Visitor)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parameter_validation() {
        assert!(PoolParameters::new(10, 18, 6).is_ok());
        assert!(PoolParameters::new(0, 18, 18).is_err());
        assert!(PoolParameters::new(-10, 18, 18).is_err());
        assert!(PoolParameters::new(10, 29, 18).is_err());
        assert!(PoolParameters::new(10, 18, 29).is_err());
    }

    #[test]
    fn test_snapshot_parsing_numbers_and_strings() {
        let json = r#"{
            "State": { "tickSpacing": 60 },
            "Ticks": [
                { "Tick": 190020, "LiquidityNet": 2127118770244 },
                { "Tick": 190200, "LiquidityNet": "-56750035488392889" },
                { "Tick": 190080, "LiquidityNet": "721001902721267" }
            ]
        }"#;

        let snapshot: PoolSnapshot = serde_json::from_str(json).unwrap();
        let (series, spacing) = snapshot.into_series().unwrap();

        assert_eq!(spacing, 60);
        assert_eq!(series.len(), 3);
        // Sorted ascending regardless of wire order
        assert_eq!(series.records()[1].tick, 190080);
        assert_eq!(series.records()[2].liquidity_net, -56_750_035_488_392_889);
    }

    #[test]
    fn test_snapshot_liquidity_beyond_u64() {
        let json = r#"{
            "State": { "tickSpacing": 1 },
            "Ticks": [
                { "Tick": 0, "LiquidityNet": "1527488668366266481406253" }
            ]
        }"#;

        let snapshot: PoolSnapshot = serde_json::from_str(json).unwrap();
        assert_eq!(
            snapshot.ticks[0].liquidity_net,
            1_527_488_668_366_266_481_406_253
        );
    }
}
