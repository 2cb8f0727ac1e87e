//! Whitespace normalization and clause boundary detection for RQL.

use crate::error::SyntaxError;
use tracing::trace;

const SELECT: &str = "select ";
const FROM: &str = " from ";
const WHERE: &str = " where ";
const ORDER_BY: &str = " order by ";

/// The raw text of each clause of one RQL statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Clauses {
    pub select: String,
    pub table: String,
    pub where_clause: Option<String>,
    pub order_by: Option<String>,
}

/// Collapses whitespace runs outside quoted literals to one space and trims.
pub fn normalize(rql: &str) -> Result<String, SyntaxError> {
    let mut out = String::with_capacity(rql.len());
    let mut quote: Option<(char, usize)> = None;

    for (offset, ch) in rql.char_indices() {
        match quote {
            Some((q, _)) => {
                out.push(ch);
                if ch == q {
                    quote = None;
                }
            }
            None if ch == '\'' || ch == '"' => {
                quote = Some((ch, offset));
                out.push(ch);
            }
            None if ch.is_whitespace() => {
                if !out.is_empty() && !out.ends_with(' ') {
                    out.push(' ');
                }
            }
            None => out.push(ch),
        }
    }

    if let Some((_, start)) = quote {
        return Err(SyntaxError::UnterminatedLiteral(start));
    }

    let trimmed_len = out.trim_end().len();
    out.truncate(trimmed_len);
    Ok(out)
}

/// Splits a statement into its `select`, `from`, `where` and `order by` parts.
pub fn split_clauses(rql: &str) -> Result<Clauses, SyntaxError> {
    let text = normalize(rql)?;
    // Trailing space so a keyword ending the statement still matches.
    let lower = format!("{} ", text.to_ascii_lowercase());

    if !lower.starts_with(SELECT) {
        return Err(SyntaxError::MissingClause("select"));
    }
    let from = find_keyword(&lower, FROM, 0).ok_or(SyntaxError::MissingClause("from"))?;
    let where_pos = find_keyword(&lower, WHERE, from + 1);
    let order_pos = find_keyword(&lower, ORDER_BY, where_pos.unwrap_or(from) + 1);

    let select = slice(&text, SELECT.len(), from);
    if select.is_empty() {
        return Err(SyntaxError::EmptyClause("select"));
    }

    let table_end = where_pos.or(order_pos).unwrap_or(text.len());
    let table = slice(&text, from + FROM.len(), table_end);
    if table.is_empty() {
        return Err(SyntaxError::EmptyClause("from"));
    }

    let where_clause = where_pos
        .map(|pos| slice(&text, pos + WHERE.len(), order_pos.unwrap_or(text.len())));
    if where_clause.is_some_and(str::is_empty) {
        return Err(SyntaxError::EmptyClause("where"));
    }
    let order_by = order_pos.map(|pos| slice(&text, pos + ORDER_BY.len(), text.len()));
    if order_by.is_some_and(str::is_empty) {
        return Err(SyntaxError::EmptyClause("order by"));
    }

    let clauses = Clauses {
        select: select.to_string(),
        table: table.to_string(),
        where_clause: where_clause.map(str::to_string),
        order_by: order_by.map(str::to_string),
    };
    trace!("Split RQL into clauses: {:?}", clauses);
    Ok(clauses)
}

/// Splits the select list on top-level commas after dropping whitespace
/// outside literals. `count(a.id), a.name` yields `count(a.id)` and `a.name`.
pub fn split_select_list(text: &str) -> Result<Vec<String>, SyntaxError> {
    let mut items = Vec::new();
    let mut current = String::new();
    let mut depth = 0usize;
    let mut quote: Option<char> = None;

    for ch in text.chars() {
        if let Some(q) = quote {
            current.push(ch);
            if ch == q {
                quote = None;
            }
            continue;
        }
        match ch {
            '\'' | '"' => {
                quote = Some(ch);
                current.push(ch);
            }
            '(' => {
                depth += 1;
                current.push(ch);
            }
            ')' => {
                depth = depth.saturating_sub(1);
                current.push(ch);
            }
            ',' if depth == 0 => items.push(std::mem::take(&mut current)),
            c if c.is_whitespace() => {}
            c => current.push(c),
        }
    }
    items.push(current);

    if items.iter().any(String::is_empty) {
        return Err(SyntaxError::EmptyClause("select"));
    }
    Ok(items)
}

/// Finds `keyword` (lowercase, space delimited) at or after `from`,
/// ignoring matches inside quoted literals.
fn find_keyword(lower: &str, keyword: &str, from: usize) -> Option<usize> {
    let mut quote: Option<char> = None;
    for (offset, ch) in lower.char_indices() {
        if let Some(q) = quote {
            if ch == q {
                quote = None;
            }
            continue;
        }
        if ch == '\'' || ch == '"' {
            quote = Some(ch);
            continue;
        }
        if offset >= from && lower[offset..].starts_with(keyword) {
            return Some(offset);
        }
    }
    None
}

fn slice(text: &str, start: usize, end: usize) -> &str {
    if start >= end {
        return "";
    }
    text[start..end].trim()
}
