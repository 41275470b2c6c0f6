use thiserror::Error;

/// Reasons a line can be rejected by [`tokenize`](crate::tokenize).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TokenizeError {
    /// A quote appeared inside an unquoted word, e.g. `word"quoted"`.
    #[error("invalid argument(s)")]
    InvalidArgument,

    /// A backslash escaped the whitespace that would end an unquoted word.
    #[error("invalid syntax")]
    InvalidSyntax,

    /// The input ended inside a quoted section.
    #[error("unexpected end of input")]
    UnexpectedEndOfInput,
}
