//! Splits a single load file line into words, commas and whitespace.
//!
//! The lexer only knows enough about Redcode to find field boundaries.
//! Opcodes, modifiers and addressing modes all come out as plain [`Word`](TokenType::Word)s;
//! the [`line`](crate::line) module decides what each word means by its position.

use once_cell::sync::Lazy;
use regex::Regex;

/// Byte range `(start, end)` of a token within the line it came from.
pub type Span = (usize, usize);

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Token<'input> {
    pub src: &'input str,
    pub span: Span,
    pub ty: TokenType,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TokenType {
    // Insignificant, except for splitting words
    Whitespace,

    // Separates the A-field from everything after it
    Comma,

    // Chunk of non-whitespace, non-comma text.
    // Opcodes, labels, directives and operands are all words.
    Word,
}

use TokenType::*;

// The lexer tries to find these patterns in this order.
// Each pattern is anchored with ^ when registered, so don't use ^ here.
// Together they match any character, so the lexer never gets stuck.
const PATTERNS: [(&str, TokenType); 3] = [
    (r"\s+",     Whitespace),
    (r",",       Comma),
    (r"[^\s,]+", Word),
];

static REGISTERED: Lazy<Vec<(Regex, TokenType)>> = Lazy::new(|| {
    PATTERNS.iter()
        .map(|(pattern, token_type)| {
            assert!(!pattern.starts_with('^'));
            let regex = Regex::new(&format!("^{}", pattern)).expect("Invalid regex");
            (regex, *token_type)
        })
        .collect()
});

pub struct Lexer<'input> {
    src: &'input str,
    offset: usize,
    cur_pos: usize,
}

impl<'input> Lexer<'input> {
    pub fn new(src: &'input str) -> Lexer<'input> {
        Lexer::with_offset(src, 0)
    }

    /// Lex `src`, reporting spans shifted by `offset`.
    ///
    /// Used when `src` is a trimmed slice of a longer line,
    /// so that spans still point into the untrimmed line.
    pub fn with_offset(src: &'input str, offset: usize) -> Lexer<'input> {
        Lexer { src, offset, cur_pos: 0 }
    }

    fn tail(&self) -> &'input str {
        &self.src[self.cur_pos..]
    }
}

impl<'input> Iterator for Lexer<'input> {
    type Item = Token<'input>;

    fn next(&mut self) -> Option<Self::Item> {
        let start = self.cur_pos;
        if self.src.len() <= start {
            return None;
        }

        for (pattern, token_type) in REGISTERED.iter() {
            if let Some(found) = pattern.find(self.tail()) {
                self.cur_pos += found.end();
                return Some(Token {
                    src: found.as_str(),
                    span: (self.offset + start, self.offset + self.cur_pos),
                    ty: *token_type,
                });
            }
        }

        unreachable!("whitespace, comma and word patterns cover every character");
    }
}
