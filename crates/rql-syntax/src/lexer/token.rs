use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub lexeme: String,
    /// Byte offsets into the clause text.
    pub span: (usize, usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// Bare word: entity names, aliases, keywords, function names.
    Word,
    /// Dotted field reference, e.g. `a.area.areaName`.
    Path,
    Number,
    /// Quoted literal, kept verbatim including its quotes.
    Literal,
    /// One of the clause's punctuation markers.
    Punct,
}

impl Token {
    pub fn is_keyword(&self, keyword: &str) -> bool {
        self.kind == TokenKind::Word && self.lexeme.eq_ignore_ascii_case(keyword)
    }

    pub fn is_punct(&self, marker: &str) -> bool {
        self.kind == TokenKind::Punct && self.lexeme == marker
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Word => write!(f, "word"),
            TokenKind::Path => write!(f, "path"),
            TokenKind::Number => write!(f, "number"),
            TokenKind::Literal => write!(f, "literal"),
            TokenKind::Punct => write!(f, "punctuation"),
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.lexeme)
    }
}
