//! The RQL to SQL compilation pipeline.
//!
//! The table clause resolves first and populates the alias table; the
//! select, where and order-by passes then resolve field paths against it,
//! discovering further joins as relations are traversed.

use crate::{
    compile::symbols::{AliasTable, ResultAliasMap},
    error::TranslateError,
    query::{
        ast::{
            common::JoinKind,
            expr::{BinaryOp, BinaryOperator, Expr},
            select::{JoinClause, Select},
        },
        column,
        renderer::to_sql,
    },
    table_ref,
};
use model::entity::{EntityConfig, EntityRegistry};
use rql_syntax::{Punctuation, split_clauses};
use serde::Serialize;
use std::collections::HashSet;
use tracing::debug;

mod condition;
mod resolve;
mod select;
pub mod symbols;
mod table;

/// A compiled statement and the origin of each alias it uses.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompiledQuery {
    pub sql: String,
    pub aliases: ResultAliasMap,
}

/// What a field path resolves to when it ends on an entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum EntityTerminal {
    /// The entity's identifier column.
    Identifier,
    /// The foreign key of the hop just taken, else the identifier.
    ReferencingKey,
}

/// State for a single compilation. Dropped when the call returns.
pub(crate) struct Compilation<'r, R: EntityRegistry + ?Sized> {
    registry: &'r R,
    aliases: AliasTable,
    // rendered select fragments, for de-duplication
    selected: HashSet<String>,
}

/// Compiles an RQL statement against `registry`.
pub fn compile<R: EntityRegistry + ?Sized>(
    registry: &R,
    rql: &str,
) -> Result<CompiledQuery, TranslateError> {
    Compilation::new(registry).run(rql)
}

impl<'r, R: EntityRegistry + ?Sized> Compilation<'r, R> {
    pub(crate) fn new(registry: &'r R) -> Self {
        Compilation {
            registry,
            aliases: AliasTable::new(),
            selected: HashSet::new(),
        }
    }

    pub(crate) fn run(mut self, rql: &str) -> Result<CompiledQuery, TranslateError> {
        let clauses = split_clauses(rql)?;

        let (from, tail) = self.resolve_table(&clauses.table)?;
        let columns = self.resolve_select(&clauses.select)?;
        let where_clause = match &clauses.where_clause {
            Some(text) => {
                self.resolve_condition(text, Punctuation::WHERE, EntityTerminal::Identifier)?
            }
            None => Vec::new(),
        };
        let order_by = match &clauses.order_by {
            Some(text) => self.resolve_condition(
                text,
                Punctuation::ORDER_BY,
                EntityTerminal::ReferencingKey,
            )?,
            None => Vec::new(),
        };

        let select = Select {
            columns,
            from,
            joins: self.join_clauses(),
            tail,
            where_clause,
            order_by,
        };
        let sql = to_sql(&select);
        debug!("Compiled RQL '{}' into '{}'", rql, sql);

        Ok(CompiledQuery {
            sql,
            aliases: self.aliases.into_result(),
        })
    }

    fn entity(&self, name: &str) -> Result<&'r EntityConfig, TranslateError> {
        let registry: &'r R = self.registry;
        registry
            .lookup(name)
            .ok_or_else(|| TranslateError::UnknownEntity(name.to_string()))
    }

    fn join_clauses(&self) -> Vec<JoinClause> {
        self.aliases
            .joins()
            .iter()
            .map(|join| JoinClause {
                kind: JoinKind::Left,
                table: table_ref!(join.target_table),
                alias: join.target_alias.clone(),
                on: Expr::BinaryOp(Box::new(BinaryOp::new(
                    column(&join.owner_alias, &join.fk_column),
                    BinaryOperator::Eq,
                    column(&join.target_alias, &join.ref_column),
                ))),
            })
            .collect()
    }
}
