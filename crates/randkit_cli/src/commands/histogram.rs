//! Histogram command implementation
//!
//! Prints the ten unit-width bins over [0, 10) as rows of stars, scaled so
//! that all draws together would make 100 stars.

use std::io::Write;

use randkit_distributions::Distribution;
use tracing::debug;

use super::DistributionKind;
use crate::config::CliConfig;
use crate::{CliError, Result};

const BINS: usize = 10;
const STARS: usize = 100;

/// Run the histogram command
pub fn run<W: Write>(
    config: &CliConfig,
    distribution: DistributionKind,
    p1: f64,
    p2: f64,
    draws: usize,
    out: &mut W,
) -> Result<()> {
    if draws == 0 {
        return Err(CliError::InvalidArgument(
            "histogram needs at least one draw".to_string(),
        ));
    }

    let engine = super::build_engine(config);
    let mut dist = distribution.build(engine, p1, p2)?;

    let mut bins = [0usize; BINS];
    let mut outside = 0usize;
    for _ in 0..draws {
        let value = dist.sample();
        if (0.0..BINS as f64).contains(&value) {
            bins[value as usize] += 1;
        } else {
            outside += 1;
        }
    }
    debug!(draws, outside, "Histogram binned");

    writeln!(out, "{} Distribution: p1={}, p2={}", dist.name(), p1, p2)?;
    for (i, count) in bins.iter().enumerate() {
        let stars = count * STARS / draws;
        writeln!(out, "{:2}-{:2}: {} ({})", i, i + 1, "*".repeat(stars), stars)?;
    }
    Ok(())
}
