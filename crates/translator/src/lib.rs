pub mod compile;
pub mod error;
pub mod mutation;
pub mod query;
pub mod translator;

pub use compile::{
    CompiledQuery, compile,
    symbols::{AliasTarget, ResultAliasMap},
};
pub use error::TranslateError;
pub use mutation::{MutationKind, entity_to_sql};
pub use translator::Translator;
