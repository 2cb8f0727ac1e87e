use crate::query::ast::expr::{Expr, Ident};

pub mod ast;
pub mod dialect;
pub mod macros;
pub mod renderer;

pub fn column(qualifier: &str, name: &str) -> Expr {
    Expr::Column(Ident::qualified(qualifier, name))
}

pub fn raw(token: &str) -> Expr {
    Expr::Raw(token.to_string())
}
