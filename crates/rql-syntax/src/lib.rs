pub mod clause;
pub mod error;
pub mod lexer;

pub use clause::{Clauses, split_clauses, split_select_list};
pub use error::SyntaxError;
pub use lexer::{
    Lexer,
    punctuation::Punctuation,
    token::{Token, TokenKind},
};
