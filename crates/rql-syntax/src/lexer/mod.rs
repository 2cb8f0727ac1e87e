use crate::{
    error::SyntaxError,
    lexer::{
        punctuation::Punctuation,
        token::{Token, TokenKind},
    },
};

pub mod punctuation;
pub mod token;

/// Splits one clause into a typed token stream.
///
/// Whitespace separates tokens; any configured punctuation marker embedded
/// in a word is split out in place. Quoted literals are never split.
pub struct Lexer {
    punctuation: Punctuation,
    tokens: Vec<Token>,
}

impl Lexer {
    pub fn new(punctuation: Punctuation) -> Self {
        Lexer {
            punctuation,
            tokens: Vec::new(),
        }
    }

    pub fn tokenize(&mut self, input: &str) -> Result<Vec<Token>, SyntaxError> {
        self.tokens.clear();

        let mut word_start: Option<usize> = None;
        let mut pos = 0;

        while pos < input.len() {
            let rest = &input[pos..];
            let Some(ch) = rest.chars().next() else {
                break;
            };

            if ch.is_whitespace() {
                self.flush_word(input, &mut word_start, pos);
                pos += ch.len_utf8();
            } else if ch == '\'' || ch == '"' {
                self.flush_word(input, &mut word_start, pos);
                let end = scan_literal(input, pos, ch)?;
                self.add_token(TokenKind::Literal, &input[pos..end], pos, end);
                pos = end;
            } else if let Some(marker) = self.punctuation.match_at(rest) {
                self.flush_word(input, &mut word_start, pos);
                self.add_token(TokenKind::Punct, marker, pos, pos + marker.len());
                pos += marker.len();
            } else {
                word_start.get_or_insert(pos);
                pos += ch.len_utf8();
            }
        }
        self.flush_word(input, &mut word_start, input.len());

        Ok(self.tokens.clone())
    }

    fn flush_word(&mut self, input: &str, word_start: &mut Option<usize>, end: usize) {
        if let Some(start) = word_start.take() {
            let word = &input[start..end];
            self.add_token(classify(word), word, start, end);
        }
    }

    fn add_token(&mut self, kind: TokenKind, lexeme: &str, start: usize, end: usize) {
        self.tokens.push(Token {
            kind,
            lexeme: lexeme.to_string(),
            span: (start, end),
        });
    }
}

/// Returns the byte offset just past the closing quote. A doubled quote
/// inside the literal is an escaped quote.
fn scan_literal(input: &str, start: usize, quote: char) -> Result<usize, SyntaxError> {
    let mut chars = input[start..].char_indices().skip(1).peekable();
    while let Some((offset, ch)) = chars.next() {
        if ch != quote {
            continue;
        }
        if matches!(chars.peek(), Some((_, next)) if *next == quote) {
            chars.next();
            continue;
        }
        return Ok(start + offset + ch.len_utf8());
    }
    Err(SyntaxError::UnterminatedLiteral(start))
}

fn classify(word: &str) -> TokenKind {
    if word.starts_with(|c: char| c.is_ascii_digit()) {
        TokenKind::Number
    } else if is_path(word) {
        TokenKind::Path
    } else {
        TokenKind::Word
    }
}

/// An identifier followed by a dot, e.g. `a.name` or `a.area.areaId`.
pub fn is_path(word: &str) -> bool {
    let Some((head, _)) = word.split_once('.') else {
        return false;
    };
    let mut chars = head.chars();
    match chars.next() {
        Some(c) if c.is_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_alphanumeric() || c == '_')
}
