use thiserror::Error;

/// Errors raised while building or loading entity metadata.
#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("Entity '{0}' is registered more than once")]
    DuplicateEntity(String),

    /// A relation must be backed by a foreign-key column.
    #[error("Relation '{entity}.{property}' has no foreign-key column with a ref_name")]
    RelationWithoutForeignKey { entity: String, property: String },

    #[error("Identifier '{entity}.{property}' does not name a column")]
    UnknownIdentifier { entity: String, property: String },

    #[error("Failed to read schema file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse schema JSON: {0}")]
    Json(#[from] serde_json::Error),
}
