//! Defines the Abstract Syntax Tree (AST) for a compiled SELECT query.

use crate::query::ast::{
    common::{JoinKind, TableRef},
    expr::Expr,
};

#[derive(Debug, Clone, PartialEq)]
pub struct Select {
    /// Resolved select list, e.g. `t0.id`, `t1.name as t1_name`, `count(t0.id)`.
    pub columns: Vec<Expr>,

    /// The primary table, always aliased `t0`.
    pub from: FromClause,

    /// Joins synthesized from relation traversal and eager expansion.
    pub joins: Vec<JoinClause>,

    /// The rest of the RQL table clause: further tables, user-written
    /// joins and their conditions, in source order.
    pub tail: Vec<TableItem>,

    pub where_clause: Vec<Expr>,

    pub order_by: Vec<Expr>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FromClause {
    pub table: TableRef,
    pub alias: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct JoinClause {
    pub kind: JoinKind,
    pub table: TableRef,
    pub alias: String,
    /// The join condition, e.g. `t0.area_id = t1.area_id`.
    pub on: Expr,
}

#[derive(Debug, Clone, PartialEq)]
pub enum TableItem {
    Table { table: TableRef, alias: String },
    Token(Expr),
}
