//! Error types for engine state decoding.

use thiserror::Error;

/// Failure to restore an engine from serialised state.
///
/// Returned by [`Engine::set_state`](crate::Engine::set_state) and
/// [`EngineKind::restore`](crate::EngineKind::restore). Decoding is atomic:
/// when this error is returned the target engine keeps its previous state.
///
/// # Examples
/// ```
/// use randkit_engines::{Engine, SplitMix64, StateDecodeError};
///
/// let mut rng = SplitMix64::new(1);
/// let err = rng.set_state(b"mt19937").unwrap_err();
/// assert!(matches!(err, StateDecodeError::TagMismatch { .. }));
/// ```
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StateDecodeError {
    /// The leading bytes are not the expected family tag.
    #[error("expected state tag '{expected}', found '{found}'")]
    TagMismatch {
        /// Tag of the decoding family
        expected: &'static str,
        /// Leading bytes of the input (lossy UTF-8, tag length at most)
        found: String,
    },

    /// The input ended before a required field.
    #[error("truncated state: field '{field}' needs {needed} bytes, {available} available")]
    Truncated {
        /// Name of the field being decoded
        field: &'static str,
        /// Bytes required by the field
        needed: usize,
        /// Bytes remaining in the input
        available: usize,
    },

    /// A decoded cursor would address outside the state array.
    #[error("state cursor {index} out of range (limit {limit})")]
    CursorOutOfRange {
        /// Decoded cursor value
        index: u64,
        /// Largest permitted cursor value
        limit: usize,
    },

    /// No known engine family tag prefixes the input.
    #[error("unrecognised engine state tag")]
    UnknownTag,
}
