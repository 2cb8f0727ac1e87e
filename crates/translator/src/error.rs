use rql_syntax::SyntaxError;
use thiserror::Error;

/// Every way a compilation or mutation can fail. All variants are fatal
/// to the current call and no partial output is returned.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TranslateError {
    #[error("Unknown entity '{0}'")]
    UnknownEntity(String),

    #[error("Unknown alias '{0}'")]
    UnknownAlias(String),

    #[error("Entity '{entity}' has no property '{field}'")]
    UnknownField { entity: String, field: String },

    #[error("Entity '{0}' declares no identifier column")]
    MissingIdentifier(String),

    #[error("Entity '{0}' has no identifier configured")]
    MissingIdentifierConfig(String),

    #[error("Identifier of entity '{0}' is null or undefined")]
    MissingIdentifierValue(String),

    #[error("Property '{property}' of entity '{entity}' does not allow null")]
    NullNotAllowed { entity: String, property: String },

    #[error("Malformed query: {0}")]
    MalformedQuery(String),

    #[error("Malformed join condition: {0}")]
    MalformedJoin(String),
}

impl TranslateError {
    /// The stable report code of this error kind.
    pub fn code(&self) -> &'static str {
        match self {
            TranslateError::UnknownEntity(_) => "0010",
            TranslateError::UnknownAlias(_) => "0011",
            TranslateError::NullNotAllowed { .. } => "0021",
            TranslateError::UnknownField { .. } => "0022",
            TranslateError::MalformedQuery(_) => "0100",
            TranslateError::MalformedJoin(_) => "0101",
            TranslateError::MissingIdentifierValue(_) => "0102",
            TranslateError::MissingIdentifier(_) => "0103",
            TranslateError::MissingIdentifierConfig(_) => "0104",
        }
    }

    /// The arguments a reporter interpolates into the message for `code()`.
    pub fn args(&self) -> Vec<&str> {
        match self {
            TranslateError::UnknownEntity(name)
            | TranslateError::UnknownAlias(name)
            | TranslateError::MissingIdentifier(name)
            | TranslateError::MissingIdentifierConfig(name)
            | TranslateError::MissingIdentifierValue(name) => vec![name.as_str()],
            TranslateError::UnknownField { entity, field } => {
                vec![entity.as_str(), field.as_str()]
            }
            TranslateError::NullNotAllowed { entity, property } => {
                vec![entity.as_str(), property.as_str()]
            }
            TranslateError::MalformedQuery(_) | TranslateError::MalformedJoin(_) => vec![],
        }
    }
}

impl From<SyntaxError> for TranslateError {
    fn from(err: SyntaxError) -> Self {
        TranslateError::MalformedQuery(err.to_string())
    }
}
