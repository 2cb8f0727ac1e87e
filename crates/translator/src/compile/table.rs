//! Table clause resolution.

use crate::{
    compile::{Compilation, EntityTerminal},
    error::TranslateError,
    query::{
        ast::{
            expr::{BinaryOp, BinaryOperator, Expr},
            select::{FromClause, TableItem},
        },
        raw,
    },
    table_ref,
};
use model::entity::EntityRegistry;
use rql_syntax::{Lexer, Punctuation, Token, TokenKind};

/// Words that can follow an entity name without being its alias.
const ALIAS_STOP_WORDS: &[&str] = &["left", "right", "outer", "inner", "full", "cross", "join", "on"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Expecting {
    Entity,
    JoinField,
    Nothing,
}

impl<'r, R: EntityRegistry + ?Sized> Compilation<'r, R> {
    /// Resolves the table clause into the primary table and everything
    /// after it, binding each entity to a generated alias on the way.
    pub(crate) fn resolve_table(
        &mut self,
        text: &str,
    ) -> Result<(FromClause, Vec<TableItem>), TranslateError> {
        let tokens = Lexer::new(Punctuation::TABLE).tokenize(text)?;

        let mut from: Option<FromClause> = None;
        let mut tail = Vec::new();
        let mut state = Expecting::Entity;
        let mut i = 0;

        while i < tokens.len() {
            let token = &tokens[i];

            if token.is_punct(",") || token.is_keyword("join") {
                tail.push(TableItem::Token(raw(&token.lexeme)));
                state = Expecting::Entity;
                i += 1;
                continue;
            }
            if token.is_keyword("on") {
                tail.push(TableItem::Token(raw(&token.lexeme)));
                state = Expecting::JoinField;
                i += 1;
                continue;
            }

            match state {
                Expecting::Entity => {
                    let entity = self.entity(&token.lexeme)?;
                    let user_alias = tokens
                        .get(i + 1)
                        .filter(|next| is_alias(next))
                        .map(|next| next.lexeme.as_str());

                    let alias = self.aliases.bind_table_entity(&entity.name, user_alias);
                    let table = table_ref!(entity.table);
                    if from.is_none() {
                        from = Some(FromClause { table, alias });
                    } else {
                        tail.push(TableItem::Table { table, alias });
                    }

                    state = Expecting::Nothing;
                    i += if user_alias.is_some() { 2 } else { 1 };
                }
                Expecting::JoinField => {
                    let (left, right) = match (tokens.get(i + 1), tokens.get(i + 2)) {
                        (Some(eq), Some(right))
                            if eq.is_punct("=") && is_field(token) && is_field(right) =>
                        {
                            (token, right)
                        }
                        _ => {
                            return Err(TranslateError::MalformedJoin(format!(
                                "expected '<field> = <field>' after 'on' near '{}'",
                                token.lexeme
                            )));
                        }
                    };

                    let left = self.resolve_field(&left.lexeme, EntityTerminal::ReferencingKey)?;
                    let right = self.resolve_field(&right.lexeme, EntityTerminal::ReferencingKey)?;
                    tail.push(TableItem::Token(Expr::BinaryOp(Box::new(BinaryOp::new(
                        left,
                        BinaryOperator::Eq,
                        right,
                    )))));

                    state = Expecting::Nothing;
                    i += 3;
                }
                Expecting::Nothing => {
                    let expr = self.resolve_token(token, EntityTerminal::ReferencingKey)?;
                    tail.push(TableItem::Token(expr));
                    i += 1;
                }
            }
        }

        // The tokenizer never yields an empty stream for a non-empty clause,
        // and the first token is always read as an entity.
        let from = from.ok_or_else(|| TranslateError::MalformedQuery("empty table clause".into()))?;
        Ok((from, tail))
    }
}

fn is_alias(token: &Token) -> bool {
    token.kind == TokenKind::Word
        && !ALIAS_STOP_WORDS
            .iter()
            .any(|stop| token.lexeme.eq_ignore_ascii_case(stop))
}

fn is_field(token: &Token) -> bool {
    matches!(token.kind, TokenKind::Path | TokenKind::Word)
}
