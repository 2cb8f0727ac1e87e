use model::error::SchemaError;
use thiserror::Error;
use translator::TranslateError;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Failed to read input file: {0}")]
    FileRead(#[from] std::io::Error),

    #[error("Failed to load the entity schema: {0}")]
    Schema(#[from] SchemaError),

    #[error("Failed to deserialize the record file: {0}")]
    RecordDeserialize(#[from] serde_json::Error),

    #[error("Translation failed: {0}")]
    Translate(#[from] TranslateError),

    #[error("Failed to serialize data to JSON: {0}")]
    JsonSerialize(serde_json::Error),

    #[error("Unsupported dialect: {0}")]
    UnsupportedDialect(String),
}
