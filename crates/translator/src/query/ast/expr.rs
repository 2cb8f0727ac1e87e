//! Defines the AST for SQL expressions.

#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A qualified or bare column, e.g. `t0.name`.
    Column(Ident),

    /// An aliased expression, e.g. `t0.name as t0_name`.
    Alias { expr: Box<Expr>, alias: String },

    /// A single-level function call, e.g. `count(t0.id)`.
    FunctionCall(FunctionCall),

    /// A binary operation, e.g. `t0.area_id = t1.area_id`.
    BinaryOp(Box<BinaryOp>),

    /// A literal already formatted for inlining, e.g. `'abc'`, `12` or `null`.
    Literal(String),

    /// An RQL token copied through unchanged: keywords, operators, literals.
    Raw(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ident {
    pub qualifier: Option<String>,
    pub name: String,
}

impl Ident {
    pub fn bare(name: &str) -> Self {
        Self {
            qualifier: None,
            name: name.to_string(),
        }
    }

    pub fn qualified(qualifier: &str, name: &str) -> Self {
        Self {
            qualifier: Some(qualifier.to_string()),
            name: name.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FunctionCall {
    pub name: String,
    pub args: Vec<Expr>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BinaryOp {
    pub left: Expr,
    pub op: BinaryOperator,
    pub right: Expr,
}

impl BinaryOp {
    pub fn new(left: Expr, op: BinaryOperator, right: Expr) -> Self {
        Self { left, op, right }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOperator {
    /// `a = b`, used in join and delete predicates.
    Eq,
    /// `a=b`, used in update assignments and predicates.
    Assign,
}
