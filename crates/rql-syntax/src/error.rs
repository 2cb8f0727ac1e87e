use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SyntaxError {
    #[error("Missing '{0}' clause")]
    MissingClause(&'static str),

    #[error("Empty {0} clause")]
    EmptyClause(&'static str),

    #[error("Unterminated string literal starting at offset {0}")]
    UnterminatedLiteral(usize),
}
