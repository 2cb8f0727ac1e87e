//! Where and order-by clause resolution.

use crate::{
    compile::{Compilation, EntityTerminal},
    error::TranslateError,
    query::{ast::expr::Expr, raw},
};
use model::entity::EntityRegistry;
use rql_syntax::{Lexer, Punctuation, Token, TokenKind};

impl<'r, R: EntityRegistry + ?Sized> Compilation<'r, R> {
    /// Tokenizes a condition clause and resolves every field path in it.
    /// Everything else is copied through unchanged.
    pub(crate) fn resolve_condition(
        &mut self,
        text: &str,
        punctuation: Punctuation,
        terminal: EntityTerminal,
    ) -> Result<Vec<Expr>, TranslateError> {
        let tokens = Lexer::new(punctuation).tokenize(text)?;
        tokens
            .iter()
            .map(|token| self.resolve_token(token, terminal))
            .collect()
    }

    pub(crate) fn resolve_token(
        &mut self,
        token: &Token,
        terminal: EntityTerminal,
    ) -> Result<Expr, TranslateError> {
        match token.kind {
            TokenKind::Path => self.resolve_field(&token.lexeme, terminal),
            _ => Ok(raw(&token.lexeme)),
        }
    }
}
