//! Dotted field path resolution across relations.

use crate::{
    compile::{Compilation, EntityTerminal},
    error::TranslateError,
    query::ast::expr::{Expr, Ident},
};
use model::entity::{EntityConfig, EntityRegistry};
use tracing::warn;

/// Where a field path ends.
pub(crate) enum Resolution<'r> {
    /// An ordinary column, e.g. `t1.area_name`.
    Scalar(Ident),
    /// Every segment after the head was a relation hop (or there were none).
    Entity {
        entity: &'r EntityConfig,
        alias: String,
        /// Foreign key of the last hop, qualified by the owner's alias.
        last_hop: Option<Ident>,
    },
}

impl<'r, R: EntityRegistry + ?Sized> Compilation<'r, R> {
    /// Walks `path` segment by segment. A foreign-key segment with a
    /// relation switches to the related entity, joining it if needed; an
    /// ordinary column ends the walk and must be the last segment.
    pub(crate) fn walk(&mut self, path: &str) -> Result<Resolution<'r>, TranslateError> {
        let segments: Vec<&str> = path.split('.').collect();
        let head = segments[0];

        let (entity_name, alias) = self
            .aliases
            .resolve_scope(head)
            .map(|(entity, alias)| (entity.to_string(), alias.to_string()))
            .ok_or_else(|| TranslateError::UnknownAlias(head.to_string()))?;
        let mut entity = self.entity(&entity_name)?;
        let mut alias = alias;
        let mut last_hop = None;

        for (i, segment) in segments.iter().enumerate().skip(1) {
            let column = entity
                .column(segment)
                .ok_or_else(|| TranslateError::UnknownField {
                    entity: entity.name.clone(),
                    field: segment.to_string(),
                })?;

            let relation = if column.is_foreign_key() {
                let relation = entity.relation(segment);
                if relation.is_none() {
                    warn!(
                        "Foreign key '{}.{}' has no relation, treating it as a column",
                        entity.name, segment
                    );
                }
                relation
            } else {
                None
            };

            match relation {
                Some(relation) => {
                    let target = self.entity(&relation.entity)?;
                    last_hop = Some(Ident::qualified(&alias, column.column_name()));
                    alias = self.aliases.join(entity, &alias, column, target);
                    entity = target;
                }
                None => {
                    if let Some(next) = segments.get(i + 1) {
                        return Err(TranslateError::UnknownField {
                            entity: entity.name.clone(),
                            field: format!("{}.{}", segment, next),
                        });
                    }
                    return Ok(Resolution::Scalar(Ident::qualified(
                        &alias,
                        column.column_name(),
                    )));
                }
            }
        }

        Ok(Resolution::Entity {
            entity,
            alias,
            last_hop,
        })
    }

    /// Resolves `path` to a single column expression.
    pub(crate) fn resolve_field(
        &mut self,
        path: &str,
        terminal: EntityTerminal,
    ) -> Result<Expr, TranslateError> {
        match self.walk(path)? {
            Resolution::Scalar(ident) => Ok(Expr::Column(ident)),
            Resolution::Entity {
                entity,
                alias,
                last_hop,
            } => match (terminal, last_hop) {
                (EntityTerminal::ReferencingKey, Some(hop)) => Ok(Expr::Column(hop)),
                _ => {
                    let id = entity
                        .id_column()
                        .ok_or_else(|| TranslateError::MissingIdentifierConfig(entity.name.clone()))?;
                    Ok(Expr::Column(Ident::qualified(&alias, id.column_name())))
                }
            },
        }
    }
}
