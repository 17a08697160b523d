//! Binary state codec shared by all engine families.
//!
//! Layout, with no length prefixes:
//!
//! ```text
//! [ASCII family tag][seed: u64 LE][index: u64 LE, cursor families only][state words: u64 LE ...]
//! ```
//!
//! [`StateWriter`] produces this layout and [`StateReader`] consumes it,
//! checking the tag first and the length of every field. Trailing bytes after
//! the last field are ignored.

use crate::error::StateDecodeError;

/// Size in bytes of one encoded word.
pub const WORD_BYTES: usize = 8;

/// Builder for a serialised engine state.
///
/// # Examples
///
/// ```rust
/// use randkit_engines::state::StateWriter;
///
/// let bytes = StateWriter::new("demo").word(1).word(2).finish();
/// assert_eq!(bytes.len(), 4 + 16);
/// assert_eq!(&bytes[..4], b"demo");
/// ```
#[derive(Debug)]
pub struct StateWriter {
    buf: Vec<u8>,
}

impl StateWriter {
    /// Starts a new state buffer with the family `tag`.
    pub fn new(tag: &str) -> Self {
        let mut buf = Vec::with_capacity(tag.len() + 4 * WORD_BYTES);
        buf.extend_from_slice(tag.as_bytes());
        Self { buf }
    }

    /// Appends one little-endian word.
    pub fn word(mut self, value: u64) -> Self {
        self.buf.extend_from_slice(&value.to_le_bytes());
        self
    }

    /// Appends every word of `values` in order.
    pub fn words(mut self, values: &[u64]) -> Self {
        self.buf.reserve(values.len() * WORD_BYTES);
        for value in values {
            self.buf.extend_from_slice(&value.to_le_bytes());
        }
        self
    }

    /// Returns the encoded bytes.
    pub fn finish(self) -> Vec<u8> {
        self.buf
    }
}

/// Cursor over a serialised engine state.
#[derive(Debug)]
pub struct StateReader<'a> {
    rest: &'a [u8],
}

impl<'a> StateReader<'a> {
    /// Validates the leading family `tag` and positions the reader after it.
    ///
    /// # Errors
    ///
    /// [`StateDecodeError::TagMismatch`] when `bytes` does not start with
    /// `tag`, including input shorter than the tag.
    pub fn open(bytes: &'a [u8], tag: &'static str) -> Result<Self, StateDecodeError> {
        match bytes.strip_prefix(tag.as_bytes()) {
            Some(rest) => Ok(Self { rest }),
            None => {
                let shown = &bytes[..bytes.len().min(tag.len())];
                let err = StateDecodeError::TagMismatch {
                    expected: tag,
                    found: String::from_utf8_lossy(shown).into_owned(),
                };
                tracing::debug!(error = %err, "rejected engine state");
                Err(err)
            }
        }
    }

    /// Reads one little-endian word.
    ///
    /// # Errors
    ///
    /// [`StateDecodeError::Truncated`] when fewer than eight bytes remain.
    pub fn word(&mut self, field: &'static str) -> Result<u64, StateDecodeError> {
        if self.rest.len() < WORD_BYTES {
            let err = StateDecodeError::Truncated {
                field,
                needed: WORD_BYTES,
                available: self.rest.len(),
            };
            tracing::debug!(error = %err, "rejected engine state");
            return Err(err);
        }
        let (head, tail) = self.rest.split_at(WORD_BYTES);
        self.rest = tail;
        let mut raw = [0u8; WORD_BYTES];
        raw.copy_from_slice(head);
        Ok(u64::from_le_bytes(raw))
    }

    /// Reads a cursor word and checks it does not exceed `limit`.
    ///
    /// # Errors
    ///
    /// [`StateDecodeError::Truncated`] or
    /// [`StateDecodeError::CursorOutOfRange`].
    pub fn cursor(&mut self, limit: usize) -> Result<usize, StateDecodeError> {
        let index = self.word("index")?;
        if index > limit as u64 {
            let err = StateDecodeError::CursorOutOfRange { index, limit };
            tracing::debug!(error = %err, "rejected engine state");
            return Err(err);
        }
        Ok(index as usize)
    }

    /// Fills `out` with consecutive words.
    ///
    /// # Errors
    ///
    /// [`StateDecodeError::Truncated`] when the input runs out part way.
    pub fn words(&mut self, out: &mut [u64]) -> Result<(), StateDecodeError> {
        for slot in out.iter_mut() {
            *slot = self.word("state")?;
        }
        Ok(())
    }

    /// Number of undecoded bytes left.
    pub fn remaining(&self) -> usize {
        self.rest.len()
    }
}
