//! Dump a reserve curve for a pool snapshot
//!
//! Reads a pool snapshot JSON (path argument, or stdin when omitted) and
//! prints one `tick_lower amount0 amount1` row per sample. This binary is
//! the only I/O surface of the workspace; the libraries stay pure.

use anyhow::{Context, Result};
use clap::Parser;
use curve_amm::{PoolParameters, PoolSnapshot, RangeAmountEngine};
use std::io::Read;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "curve_dump", about = "Compute a concentrated-liquidity reserve curve")]
struct Args {
    /// Pool snapshot JSON file; reads stdin when omitted
    input: Option<PathBuf>,

    /// Decimals of token0
    #[arg(long, default_value_t = 18)]
    token0_decimals: u32,

    /// Decimals of token1
    #[arg(long, default_value_t = 18)]
    token1_decimals: u32,

    /// Emit one total per liquidity interval instead of per-step samples
    #[arg(long)]
    totals: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    let raw = match &args.input {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("reading snapshot from {}", path.display()))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("reading snapshot from stdin")?;
            buf
        }
    };

    let snapshot: PoolSnapshot = serde_json::from_str(&raw).context("parsing pool snapshot")?;
    let (series, tick_spacing) = snapshot.into_series()?;
    let params = PoolParameters::new(tick_spacing, args.token0_decimals, args.token1_decimals)?;

    let curve = if args.totals {
        RangeAmountEngine::compute_interval_totals(&series, &params)?
    } else {
        RangeAmountEngine::compute_range(&series, &params)?
    };

    for sample in &curve.samples {
        println!("{} {} {}", sample.tick_lower, sample.amount0, sample.amount1);
    }

    Ok(())
}
