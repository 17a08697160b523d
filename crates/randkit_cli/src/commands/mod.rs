//! Command implementations for the `randkit` binary.
//!
//! Every command writes its output to a caller-supplied writer so it can be
//! exercised without a terminal.

pub mod draw;
pub mod histogram;
pub mod sample;
pub mod state;

use clap::ValueEnum;
use randkit_distributions::{Cauchy, Distribution, DistributionError, LogNormal, Normal, Uniform};
use randkit_engines::Engine;
use tracing::info;

use crate::config::CliConfig;

/// Distribution families selectable from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DistributionKind {
    /// Uniform on [p1, p2)
    Uniform,
    /// Normal with mean p1 and standard deviation p2
    Normal,
    /// Cauchy with location p1 and scale p2
    Cauchy,
    /// Log-Normal with log-mean p1 and log-deviation p2
    Lognormal,
}

impl DistributionKind {
    /// Builds the distribution over `engine`.
    pub fn build<'a, R: Engine + 'a>(
        self,
        engine: R,
        p1: f64,
        p2: f64,
    ) -> Result<Box<dyn Distribution + 'a>, DistributionError> {
        Ok(match self {
            Self::Uniform => Box::new(Uniform::new(engine, p1, p2)?),
            Self::Normal => Box::new(Normal::new(engine, p1, p2)?),
            Self::Cauchy => Box::new(Cauchy::new(engine, p1, p2)?),
            Self::Lognormal => Box::new(LogNormal::new(engine, p1, p2)?),
        })
    }
}

/// Builds the configured engine and records the seed actually in use.
pub(crate) fn build_engine(config: &CliConfig) -> Box<dyn Engine> {
    let engine = config.engine.build(config.seed);
    info!(engine = %config.engine, seed = engine.seed(), "Engine initialised");
    engine
}
