//! Tokenizer: turns an expression string into a flat token sequence.
//!
//! The scan is a single left-to-right pass with one pending buffer, which is
//! either a numeral being accumulated or a `<marker>` being read. The buffer is
//! a byte range of the input, so tokenizing allocates nothing beyond the output
//! sequence, and that lives in the caller's arena.
//!
//! No validation happens here. Input the tokenizer cannot classify is carried
//! through as [`Token::Invalid`] or [`Token::UnknownFunction`] for the
//! evaluator to reject.

use bumpalo::Bump;
use bumpalo::collections::Vec as BumpVec;
use tracing::trace;

use crate::Real;
use crate::constants::{E, PI};
use crate::context::EvalContext;
use crate::types::{Function, Operator, Token, lexeme};

/// Glyph for pi.
pub const PI_GLYPH: char = 'π';
/// Glyph for Euler's number (U+212F SCRIPT SMALL E, distinct from the exponent `e`).
pub const EULER_GLYPH: char = 'ℯ';
/// Glyph for the previous answer.
pub const ANSWER_GLYPH: char = 'Ⓐ';
/// Glyph for the free variable.
pub const VARIABLE_GLYPH: char = 'x';

const MARKER_OPEN: char = '<';
const MARKER_CLOSE: char = '>';

/// What the pending buffer currently holds, as a start offset into the input.
#[derive(Clone, Copy, Debug, PartialEq)]
enum Pending {
    Empty,
    Number { start: usize },
    Marker { start: usize },
}

/// The tokenizer state for one expression.
pub struct Lexer<'a, 'bump> {
    input: &'a str,
    ctx: &'a EvalContext,
    pending: Pending,
    tokens: BumpVec<'bump, Token>,
}

impl<'a, 'bump> Lexer<'a, 'bump> {
    pub fn new(input: &'a str, ctx: &'a EvalContext, bump: &'bump Bump) -> Self {
        Self {
            input,
            ctx,
            pending: Pending::Empty,
            tokens: BumpVec::new_in(bump),
        }
    }

    /// Consumes the whole input and returns the token sequence.
    pub fn tokenize(mut self) -> BumpVec<'bump, Token> {
        let input = self.input;

        for (pos, c) in input.char_indices() {
            match self.pending {
                Pending::Marker { start } => {
                    if c == MARKER_CLOSE {
                        self.push_marker(&input[start + MARKER_OPEN.len_utf8()..pos]);
                        self.pending = Pending::Empty;
                    }
                    continue;
                }
                Pending::Number { start } => {
                    if continues_number(&input[start..pos], c) {
                        continue;
                    }
                    self.flush(pos);
                }
                Pending::Empty => {}
            }

            self.start_token(pos, c);
        }

        self.flush(input.len());
        trace!(expression = input, count = self.tokens.len(), "tokenized expression");
        self.tokens
    }

    /// Handles a character that arrives while the buffer is empty.
    fn start_token(&mut self, pos: usize, c: char) {
        match c {
            '0'..='9' | '.' => self.pending = Pending::Number { start: pos },
            '-' if self.minus_starts_number() => self.pending = Pending::Number { start: pos },
            MARKER_OPEN => self.pending = Pending::Marker { start: pos },
            PI_GLYPH => self.push_glyph(PI),
            EULER_GLYPH => self.push_glyph(E),
            ANSWER_GLYPH => self.push_glyph(self.ctx.answer),
            VARIABLE_GLYPH => self.push_glyph(self.ctx.x_value()),
            '(' => self.tokens.push(Token::OpenParen),
            ')' => self.tokens.push(Token::CloseParen),
            c if c.is_whitespace() => {}
            c => match Operator::from_char(c) {
                Some(op) => self.tokens.push(Token::Operator(op)),
                None => {
                    let mut buf = [0u8; 4];
                    self.tokens.push(Token::Invalid(lexeme(c.encode_utf8(&mut buf))));
                }
            },
        }
    }

    /// A `-` is glued to the numeral after it unless it follows a value.
    fn minus_starts_number(&self) -> bool {
        self.tokens.last().is_none_or(|prev| !prev.is_value())
    }

    /// Emits a glyph's value, inserting `*` when it directly follows a value.
    fn push_glyph(&mut self, value: Real) {
        let implicit_multiplication = match self.tokens.last() {
            None => false,
            Some(Token::Operator(_) | Token::OpenParen) => false,
            Some(prev) => !prev.is_function(),
        };
        if implicit_multiplication {
            self.tokens.push(Token::Operator(Operator::Multiply));
        }
        self.tokens.push(Token::Number(value));
    }

    fn push_marker(&mut self, name: &str) {
        let token = match Function::from_name(name) {
            Some(func) => Token::Function(func),
            None => Token::UnknownFunction(lexeme(name)),
        };
        self.tokens.push(token);
    }

    /// Turns the pending buffer, ending at byte `end`, into a token.
    fn flush(&mut self, end: usize) {
        let token = match self.pending {
            Pending::Empty => return,
            Pending::Number { start } => numeral_token(&self.input[start..end]),
            // input ended inside a marker
            Pending::Marker { start } => Token::Invalid(lexeme(&self.input[start..end])),
        };
        self.pending = Pending::Empty;
        self.tokens.push(token);
    }
}

/// Whether `c` extends the numeral `text` accumulated so far.
fn continues_number(text: &str, c: char) -> bool {
    match c {
        '0'..='9' | '.' => true,
        'e' | 'E' => {
            text.bytes().any(|b| b.is_ascii_digit()) && !text.contains(['e', 'E'])
        }
        '+' | '-' => text.ends_with(['e', 'E']),
        _ => false,
    }
}

fn numeral_token(text: &str) -> Token {
    if text == "-" {
        return Token::Operator(Operator::Subtract);
    }
    match text.parse::<Real>() {
        Ok(value) => Token::Number(value),
        Err(_) => Token::Invalid(lexeme(text)),
    }
}

/// Tokenizes `expression` into `bump`, reading `x` and the previous answer
/// from `ctx`.
///
/// # Examples
///
/// ```
/// use bumpalo::Bump;
/// use glyphcalc::context::EvalContext;
/// use glyphcalc::lexer::tokenize;
/// use glyphcalc::types::{Operator, Token};
///
/// let bump = Bump::new();
/// let tokens = tokenize("2π", &EvalContext::new(), &bump);
/// assert_eq!(
///     &tokens[..],
///     &[
///         Token::Number(2.0),
///         Token::Operator(Operator::Multiply),
///         Token::Number(core::f64::consts::PI),
///     ]
/// );
/// ```
pub fn tokenize<'bump>(
    expression: &str,
    ctx: &EvalContext,
    bump: &'bump Bump,
) -> BumpVec<'bump, Token> {
    Lexer::new(expression, ctx, bump).tokenize()
}
