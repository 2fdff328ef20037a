//! Error types for the style codec.

/// Result type alias for style codec operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while parsing CSS property values.
///
/// Malformed *input* is not an error at the codec surface: the `from_css`
/// entry points on model types return `None` or an empty instance instead.
/// `Error` is produced by the value AST layer for token streams that cannot
/// be represented at all (bad URLs, unterminated strings, stray blocks).
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The input could not be tokenized into a value node tree.
    #[error("CSS value parse error: {message}")]
    Parse { message: String },
}

impl Error {
    /// Create a parse error.
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse {
            message: message.into(),
        }
    }
}
