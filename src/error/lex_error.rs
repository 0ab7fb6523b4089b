use thiserror::Error;

/// Represents all errors that can occur while scanning an expression.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    /// A run of digits and dots that is not a valid number, such as `1.2.3`
    /// or a lone `.`.
    #[error("invalid number: {text}")]
    InvalidNumber {
        /// The offending literal.
        text:   String,
        /// Byte offset of the literal in the source.
        offset: usize,
    },
    /// A character that starts no token.
    #[error("unsupported character: {character}")]
    UnsupportedCharacter {
        /// The offending character.
        character: char,
        /// Byte offset of the character in the source.
        offset:    usize,
    },
}

impl LexError {
    /// Byte offset into the source where scanning failed.
    #[must_use]
    pub const fn offset(&self) -> usize {
        match self {
            Self::InvalidNumber { offset, .. } | Self::UnsupportedCharacter { offset, .. } => *offset,
        }
    }
}

// logos reports unmatched input through the default error; the tokenizer
// fills in the real character and offset.
impl Default for LexError {
    fn default() -> Self {
        Self::UnsupportedCharacter { character: char::REPLACEMENT_CHARACTER,
                                     offset:    0, }
    }
}
