//! State command implementation
//!
//! Saves an engine's serialized state to a file and resumes the sequence
//! from it later.

use std::fs;
use std::io::Write;
use std::path::Path;

use randkit_engines::{Engine, EngineKind};
use tracing::info;

use crate::config::CliConfig;
use crate::Result;

/// Writes the configured engine's state after `skip` draws to `path`.
pub fn save(config: &CliConfig, skip: u64, path: &Path) -> Result<()> {
    let mut engine = super::build_engine(config);
    for _ in 0..skip {
        engine.next_u64();
    }
    let bytes = engine.state();
    fs::write(path, &bytes)?;
    info!(path = %path.display(), bytes = bytes.len(), skipped = skip, "State saved");
    Ok(())
}

/// Restores an engine from `path` and prints the next `config.count` draws.
pub fn resume<W: Write>(config: &CliConfig, path: &Path, out: &mut W) -> Result<()> {
    let bytes = fs::read(path)?;
    let mut engine = EngineKind::restore(&bytes)?;
    info!(
        path = %path.display(),
        engine = ?EngineKind::detect(&bytes),
        seed = engine.seed(),
        "State restored"
    );

    for _ in 0..config.count {
        writeln!(out, "{}", engine.next_u64())?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CliError;
    use randkit_engines::StateDecodeError;
    use tempfile::tempdir;

    fn config(engine: EngineKind, count: usize) -> CliConfig {
        CliConfig {
            engine,
            seed: 20170611,
            count,
            ..CliConfig::default()
        }
    }

    #[test]
    fn test_save_then_resume_continues_sequence() {
        let dir = tempdir().unwrap();
        for kind in EngineKind::ALL {
            let path = dir.path().join(format!("{kind}.state"));
            save(&config(kind, 1), 7, &path).unwrap();
            assert_eq!(fs::read(&path).unwrap().len(), kind.state_len());

            let mut resumed = Vec::new();
            resume(&config(kind, 3), &path, &mut resumed).unwrap();

            let mut reference = kind.build(20170611);
            for _ in 0..7 {
                reference.next_u64();
            }
            let expected: String = (0..3)
                .map(|_| format!("{}\n", reference.next_u64()))
                .collect();
            assert_eq!(String::from_utf8(resumed).unwrap(), expected, "{kind}");
        }
    }

    #[test]
    fn test_resume_ignores_configured_engine() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("mt.state");
        save(&config(EngineKind::Mt19937, 1), 0, &path).unwrap();

        let mut out = Vec::new();
        resume(&config(EngineKind::SplitMix64, 1), &path, &mut out).unwrap();
        let mut reference = EngineKind::Mt19937.build(20170611);
        assert_eq!(
            String::from_utf8(out).unwrap(),
            format!("{}\n", reference.next_u64())
        );
    }

    #[test]
    fn test_resume_rejects_garbage() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("garbage.state");
        fs::write(&path, b"not an engine state").unwrap();

        let mut out = Vec::new();
        let err = resume(&config(EngineKind::SplitMix64, 1), &path, &mut out).unwrap_err();
        assert!(matches!(err, CliError::State(StateDecodeError::UnknownTag)));
    }

    #[test]
    fn test_resume_missing_file() {
        let dir = tempdir().unwrap();
        let mut out = Vec::new();
        let err = resume(
            &config(EngineKind::SplitMix64, 1),
            &dir.path().join("missing.state"),
            &mut out,
        )
        .unwrap_err();
        assert!(matches!(err, CliError::Io(_)));
    }
}
