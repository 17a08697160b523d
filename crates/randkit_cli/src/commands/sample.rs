//! Sample command implementation

use std::io::Write;

use randkit_distributions::Distribution;
use tracing::debug;

use super::DistributionKind;
use crate::config::CliConfig;
use crate::Result;

/// Run the sample command
pub fn run<W: Write>(
    config: &CliConfig,
    distribution: DistributionKind,
    p1: f64,
    p2: f64,
    out: &mut W,
) -> Result<()> {
    let engine = super::build_engine(config);
    let mut dist = distribution.build(engine, p1, p2)?;
    debug!(distribution = dist.name(), p1, p2, count = config.count, "Sampling");

    let mut values = vec![0.0; config.count];
    dist.fill(&mut values);
    for value in values {
        writeln!(out, "{}", value)?;
    }
    Ok(())
}
