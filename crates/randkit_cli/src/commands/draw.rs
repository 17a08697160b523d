//! Draw command implementation
//!
//! Prints raw engine output, one value per line.

use std::io::Write;

use clap::ValueEnum;
use randkit_engines::Engine;
use tracing::debug;

use crate::config::CliConfig;
use crate::Result;

/// Which engine draw function to print.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum DrawKind {
    /// 64-bit integers
    #[default]
    U64,
    /// Floats in [0, 1)
    F64,
    /// Floats in (0, 1)
    #[value(name = "f64oo")]
    F64Open,
}

/// Run the draw command
pub fn run<W: Write>(config: &CliConfig, kind: DrawKind, skip: u64, out: &mut W) -> Result<()> {
    let mut engine = super::build_engine(config);
    for _ in 0..skip {
        engine.next_u64();
    }
    debug!(skipped = skip, ?kind, count = config.count, "Drawing");

    for _ in 0..config.count {
        match kind {
            DrawKind::U64 => writeln!(out, "{}", engine.next_u64())?,
            DrawKind::F64 => writeln!(out, "{}", engine.next_f64())?,
            DrawKind::F64Open => writeln!(out, "{}", engine.next_f64_open())?,
        }
    }
    Ok(())
}
