//! Field splitting for instruction lines.
//!
//! A line is split at its first comma. Words before the comma are the opcode and
//! A-operand (plus any `ORG` or `START` keyword); everything after it is the B-operand.
//! Extra commas after the first are dropped, so `DAT $1, #2, #3` has the B-operand `#2 #3`.

use itertools::Itertools;

use crate::lexer::{Lexer, Span, Token, TokenType};

/// The fields of one trimmed line.
#[derive(Debug, Clone, PartialEq)]
pub struct Fields<'input> {
    /// Words before the first comma.
    pub words: Vec<Token<'input>>,
    /// Everything after the first comma, commas removed and trimmed.
    pub trailing: Operand,
}

impl<'input> Fields<'input> {
    pub fn split(line: &'input str) -> Self {
        let trimmed = line.trim();
        let offset = line.len() - line.trim_start().len();

        let mut words = Vec::new();
        let mut after = Vec::new();
        let mut seen_comma = false;
        for token in Lexer::with_offset(trimmed, offset) {
            match (token.ty, seen_comma) {
                (TokenType::Comma, false) => { seen_comma = true; }
                (TokenType::Word, false) => { words.push(token); }
                (TokenType::Whitespace, false) => {}
                (TokenType::Comma, true) => {}
                (_, true) => { after.push(token); }
            }
        }

        Fields { words, trailing: Operand::from_trailing(&after) }
    }
}

/// An operand as it will be written out, with the span it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct Operand {
    pub text: String,
    pub span: Span,
}

impl Operand {
    fn joined(tokens: &[Token]) -> Self {
        let span = match (tokens.first(), tokens.last()) {
            (Some(first), Some(last)) => (first.span.0, last.span.1),
            _ => (0, 0),
        };
        Operand { text: tokens.iter().map(|token| token.src).join(""), span }
    }

    fn from_trailing(tokens: &[Token]) -> Self {
        let start = tokens.iter().position(|token| token.ty == TokenType::Word);
        let end = tokens.iter().rposition(|token| token.ty == TokenType::Word);
        match (start, end) {
            (Some(start), Some(end)) => Operand::joined(&tokens[start..=end]),
            _ => Operand { text: String::new(), span: (0, 0) },
        }
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Instruction<'input> {
    pub opcode: &'input str,
    pub a_operand: Operand,
    pub b_operand: Operand,
}

impl<'input> Instruction<'input> {
    /// Builds an instruction from the words left after any `START` label.
    ///
    /// Returns `None` if there are fewer than two words.
    /// A third word is glued onto the second, which rejoins a mode character
    /// written apart from its number (`$ 5`). Words past the third are ignored.
    pub fn new(words: &[Token<'input>], trailing: Operand) -> Option<Self> {
        let (opcode, a_operand) = match words {
            [opcode, a] => (opcode, Operand::joined(&[*a])),
            [opcode, mode, value, ..] => (opcode, Operand::joined(&[*mode, *value])),
            _ => return None,
        };

        Some(Instruction { opcode: opcode.src, a_operand, b_operand: trailing })
    }

    /// `OPCODE  A,      B` with the first two fields padded to `width`.
    pub fn format(&self, width: usize) -> String {
        let a_field = format!("{},", self.a_operand.text);
        let line = format!("{:<width$}{:<width$}{}", self.opcode, a_field, self.b_operand.text, width = width);
        line.trim_end().to_string()
    }
}
