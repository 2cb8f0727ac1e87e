use crate::{
    compile::{self, CompiledQuery},
    error::TranslateError,
    mutation::{self, MutationKind},
};
use model::entity::{Entity, EntityRegistry};

/// Translates RQL and entity instances into SQL against one registry.
///
/// Holds no state besides the registry borrow, so a single translator can
/// be shared across threads when the registry is.
#[derive(Debug)]
pub struct Translator<'r, R: EntityRegistry + ?Sized> {
    registry: &'r R,
}

impl<'r, R: EntityRegistry + ?Sized> Translator<'r, R> {
    pub fn new(registry: &'r R) -> Self {
        Translator { registry }
    }

    pub fn registry(&self) -> &'r R {
        self.registry
    }

    pub fn compile(&self, rql: &str) -> Result<CompiledQuery, TranslateError> {
        compile::compile(self.registry, rql)
    }

    pub fn entity_to_sql(
        &self,
        entity: &dyn Entity,
        kind: MutationKind,
    ) -> Result<String, TranslateError> {
        mutation::entity_to_sql(self.registry, entity, kind)
    }
}

impl<R: EntityRegistry + ?Sized> Clone for Translator<'_, R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R: EntityRegistry + ?Sized> Copy for Translator<'_, R> {}
