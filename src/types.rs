//! Token model shared by the tokenizer and the evaluator.
//!
//! Tokens carry no source positions: every error the evaluator reports is
//! detected structurally while the token sequence is being reduced.

use core::fmt;

use serde::{Deserialize, Serialize};

use crate::Real;

/// Maximum number of characters kept for text the tokenizer could not classify.
pub const LEXEME_CAPACITY: usize = 32;

/// Bounded copy of unclassified input text (unknown markers, malformed numerals).
pub type Lexeme = heapless::String<LEXEME_CAPACITY>;

/// Copies `text` into a [`Lexeme`], truncating at [`LEXEME_CAPACITY`] characters.
pub fn lexeme(text: &str) -> Lexeme {
    let mut out = Lexeme::new();
    for c in text.chars() {
        if out.push(c).is_err() {
            break;
        }
    }
    out
}

/// The five binary operators.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
    Power,
}

impl Operator {
    pub fn from_char(c: char) -> Option<Operator> {
        Some(match c {
            '+' => Operator::Add,
            '-' => Operator::Subtract,
            '*' => Operator::Multiply,
            '/' => Operator::Divide,
            '^' => Operator::Power,
            _ => return None,
        })
    }

    pub fn symbol(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Subtract => '-',
            Operator::Multiply => '*',
            Operator::Divide => '/',
            Operator::Power => '^',
        }
    }
}

/// The closed vocabulary of elementary functions.
///
/// Each one is written as a bracketed marker in the expression string, e.g.
/// `<sqrt>`, so that multi-letter names survive tokenization as one unit.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum Function {
    Sqrt,
    Sin,
    Cos,
    Tan,
    /// Cosecant, `1 / sin`.
    Csc,
    /// Secant, `1 / cos`.
    Sec,
    /// Cotangent, `1 / tan`.
    Cot,
}

impl Function {
    pub const ALL: [Function; 7] = [
        Function::Sqrt,
        Function::Sin,
        Function::Cos,
        Function::Tan,
        Function::Csc,
        Function::Sec,
        Function::Cot,
    ];

    /// Looks up a function by the text between `<` and `>`.
    pub fn from_name(name: &str) -> Option<Function> {
        Function::ALL.into_iter().find(|f| f.name() == name)
    }

    pub fn name(self) -> &'static str {
        match self {
            Function::Sqrt => "sqrt",
            Function::Sin => "sin",
            Function::Cos => "cos",
            Function::Tan => "tan",
            Function::Csc => "csc",
            Function::Sec => "sec",
            Function::Cot => "cot",
        }
    }

    /// The marker as it appears in an expression string, e.g. `<sqrt>`.
    pub fn marker(self) -> &'static str {
        match self {
            Function::Sqrt => "<sqrt>",
            Function::Sin => "<sin>",
            Function::Cos => "<cos>",
            Function::Tan => "<tan>",
            Function::Csc => "<csc>",
            Function::Sec => "<sec>",
            Function::Cot => "<cot>",
        }
    }
}

/// A token produced by the tokenizer.
#[derive(Clone, Debug, PartialEq)]
pub enum Token {
    Number(Real),
    Operator(Operator),
    OpenParen,
    CloseParen,
    Function(Function),
    /// A well-formed `<marker>` whose name is outside the vocabulary.
    UnknownFunction(Lexeme),
    /// A malformed numeral, an unterminated marker or a stray character.
    Invalid(Lexeme),
}

impl Token {
    pub fn as_number(&self) -> Option<Real> {
        match self {
            Token::Number(value) => Some(*value),
            _ => None,
        }
    }

    /// Whether the token ends an operand: a number or a closing parenthesis.
    ///
    /// A `-` that follows a value is binary; any other `-` is unary.
    pub fn is_value(&self) -> bool {
        matches!(self, Token::Number(_) | Token::CloseParen)
    }

    pub fn is_operator(&self, op: Operator) -> bool {
        matches!(self, Token::Operator(o) if *o == op)
    }

    pub fn is_function(&self) -> bool {
        matches!(self, Token::Function(_) | Token::UnknownFunction(_))
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Number(value) => write!(f, "{}", value),
            Token::Operator(op) => write!(f, "{}", op.symbol()),
            Token::OpenParen => f.write_str("("),
            Token::CloseParen => f.write_str(")"),
            Token::Function(func) => f.write_str(func.marker()),
            Token::UnknownFunction(name) => write!(f, "<{}>", name),
            Token::Invalid(text) => f.write_str(text),
        }
    }
}
