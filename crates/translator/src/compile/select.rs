//! Select list resolution and eager entity expansion.

use crate::{
    column_as,
    compile::{Compilation, EntityTerminal, resolve::Resolution},
    error::TranslateError,
    query::{
        ast::expr::{Expr, FunctionCall},
        raw,
        renderer::to_sql,
    },
};
use model::entity::{EntityConfig, EntityRegistry};
use rql_syntax::{lexer::is_path, split_select_list};
use tracing::warn;

impl<'r, R: EntityRegistry + ?Sized> Compilation<'r, R> {
    pub(crate) fn resolve_select(&mut self, text: &str) -> Result<Vec<Expr>, TranslateError> {
        let mut columns = Vec::new();

        for item in split_select_list(text)? {
            if let Some(open) = item.find('(') {
                let call = self.resolve_function(&item, open)?;
                self.push_unique(&mut columns, call);
                continue;
            }

            match self.walk(&item)? {
                Resolution::Scalar(ident) => self.push_unique(&mut columns, Expr::Column(ident)),
                Resolution::Entity { entity, alias, .. } => {
                    self.expand_entity(entity, &alias, &mut columns, &mut Vec::new())?
                }
            }
        }

        if columns.is_empty() {
            return Err(TranslateError::MalformedQuery(format!(
                "select list '{}' resolves to no columns",
                text
            )));
        }
        Ok(columns)
    }

    /// Resolves a single-level call such as `count(a.id)`. Field arguments
    /// resolve to a column, `*` and constants pass through.
    fn resolve_function(&mut self, item: &str, open: usize) -> Result<Expr, TranslateError> {
        let inner = item
            .strip_suffix(')')
            .map(|body| &body[open + 1..])
            .filter(|inner| !inner.contains(['(', ')']))
            .ok_or_else(|| {
                TranslateError::MalformedQuery(format!("unsupported select expression '{}'", item))
            })?;

        let mut args = Vec::new();
        for arg in inner.split(',').filter(|arg| !arg.is_empty()) {
            let expr = if is_path(arg) || self.aliases.resolve_scope(arg).is_some() {
                self.resolve_field(arg, EntityTerminal::Identifier)?
            } else {
                raw(arg)
            };
            args.push(expr);
        }

        Ok(Expr::FunctionCall(FunctionCall {
            name: item[..open].to_lowercase(),
            args,
        }))
    }

    /// Appends every column of `entity`, aliased `<alias>_<property>`, and
    /// recurses into eager relations. `visiting` holds the entities on the
    /// current expansion path so eager cycles stop.
    fn expand_entity(
        &mut self,
        entity: &'r EntityConfig,
        alias: &str,
        columns: &mut Vec<Expr>,
        visiting: &mut Vec<String>,
    ) -> Result<(), TranslateError> {
        visiting.push(entity.name.clone());

        for column in &entity.columns {
            if column.is_foreign_key() {
                match entity.relation(&column.property) {
                    Some(relation) if relation.eager => {
                        if visiting.contains(&relation.entity) {
                            continue;
                        }
                        let target = self.entity(&relation.entity)?;
                        let target_alias = self.aliases.join(entity, alias, column, target);
                        self.expand_entity(target, &target_alias, columns, visiting)?;
                        continue;
                    }
                    Some(_) => continue,
                    None => warn!(
                        "Foreign key '{}.{}' has no relation, treating it as a column",
                        entity.name, column.property
                    ),
                }
            }

            let field = column_as!(
                alias,
                column.column_name(),
                format!("{}_{}", alias, column.property)
            );
            self.push_unique(columns, field);
        }

        visiting.pop();
        Ok(())
    }

    fn push_unique(&mut self, columns: &mut Vec<Expr>, expr: Expr) {
        if self.selected.insert(to_sql(&expr)) {
            columns.push(expr);
        }
    }
}
