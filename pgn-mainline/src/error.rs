use thiserror::Error;

/// Malformed move-text detected while stripping comments and variations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    #[error("unmatched ')' at offset {offset}: {context}")]
    UnmatchedCloseParen { offset: usize, context: String },

    #[error("unmatched '}}' at offset {offset}: {context}")]
    UnmatchedCloseBrace { offset: usize, context: String },

    #[error("brace comment left open at end of game: {context}")]
    UnterminatedComment { context: String },

    #[error("variation left open at end of game ({open} unclosed): {context}")]
    UnterminatedVariation { open: usize, context: String },
}

#[derive(Debug, Error)]
pub enum ReadError {
    /// A game block whose move text could not be stripped. The ordinal is
    /// the 1-based position of the game in the file.
    #[error("game {ordinal}: {source}")]
    MalformedGame { ordinal: usize, source: FormatError },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
