//! Lexical errors.
//!
//! Any of these ends the `tokenize` call; there is no recovery.

/// Longest slice of remaining input quoted in error messages.
const PREVIEW_CHARS: usize = 16;

/// Failure to tokenize a source text.
#[derive(Clone, Debug, PartialEq, Eq, Hash, thiserror::Error)]
pub enum LexError {
    /// No definition matches at `offset`.
    #[error("no token definition matches at offset {offset}, near {:?}", preview(.remaining))]
    NoMatch { offset: usize, remaining: String },

    /// The winning definition matched empty text at `offset`.
    #[error("token definition `{tag}` matched empty text at offset {offset}")]
    ZeroWidthMatch { tag: &'static str, offset: usize },

    /// Source exceeds the `u32` span range.
    #[error("source of {len} bytes exceeds the 4 GiB limit")]
    SourceTooLarge { len: usize },
}

impl LexError {
    /// Byte offset the error points at.
    pub fn offset(&self) -> usize {
        match self {
            LexError::NoMatch { offset, .. } | LexError::ZeroWidthMatch { offset, .. } => *offset,
            LexError::SourceTooLarge { .. } => 0,
        }
    }
}

fn preview(remaining: &str) -> &str {
    match remaining.char_indices().nth(PREVIEW_CHARS) {
        Some((cut, _)) => &remaining[..cut],
        None => remaining,
    }
}
