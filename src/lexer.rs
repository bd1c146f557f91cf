//! Tokenization for rpnc
//!
//! A line reaches the evaluator in three steps: a character whitelist
//! ([`is_valid_input`]), a whitespace split ([`tokenize`]) and per-fragment
//! classification ([`classify`]). Classification is lazy so the evaluator
//! can stop at the first bad fragment while keeping what came before it.

use nom::{
    bytes::complete::{take_while, take_while1},
    character::complete::one_of,
    combinator::{all_consuming, map_opt},
    multi::many0,
    sequence::{preceded, terminated},
    IResult,
};
use std::fmt;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Add, // +
    Sub, // -
    Mul, // *
    Div, // /
}

impl Operator {
    /// Every operator symbol, in table order
    pub const SYMBOLS: &'static str = "+-*/";

    pub fn from_symbol(c: char) -> Option<Self> {
        match c {
            '+' => Some(Operator::Add),
            '-' => Some(Operator::Sub),
            '*' => Some(Operator::Mul),
            '/' => Some(Operator::Div),
            _ => None,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Sub => '-',
            Operator::Mul => '*',
            Operator::Div => '/',
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Token {
    /// A number to push
    Operand(f64),
    /// One of `+ - * /`
    Operator(Operator),
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum LexError {
    #[error("'{0}' is not a number")]
    MalformedNumber(String),
}

/// Characters a line may contain: digits, `.`, whitespace and the operators
pub fn is_allowed_char(c: char) -> bool {
    c.is_ascii_digit() || c == '.' || c.is_whitespace() || Operator::SYMBOLS.contains(c)
}

/// Coarse gate over the whole line.
///
/// Only the character classes are checked, so `"+ +"` or `"1.2.3"` pass
/// here and fail later.
pub fn is_valid_input(line: &str) -> bool {
    line.chars().all(is_allowed_char)
}

/// Parse one whitespace-delimited fragment, skipping leading whitespace
fn fragment(input: &str) -> IResult<&str, &str> {
    preceded(
        take_while(char::is_whitespace),
        take_while1(|c: char| !c.is_whitespace()),
    )(input)
}

/// Parse a lone operator symbol
fn operator(input: &str) -> IResult<&str, Operator> {
    map_opt(one_of(Operator::SYMBOLS), Operator::from_symbol)(input)
}

/// Split a line into its non-empty fragments, left to right.
///
/// Runs of whitespace collapse, so `"10   5 +"` yields three fragments.
pub fn tokenize(line: &str) -> Vec<&str> {
    terminated(many0(fragment), take_while(char::is_whitespace))(line)
        .map(|(_, fragments)| fragments)
        .unwrap_or_default()
}

/// Classify a fragment as operator or operand.
///
/// A fragment is an operator only if it is exactly one operator symbol;
/// `"-5"` is a negative operand and `"++"` is a malformed number.
pub fn classify(fragment: &str) -> Result<Token, LexError> {
    if let Ok((_, op)) = all_consuming(operator)(fragment) {
        return Ok(Token::Operator(op));
    }
    fragment
        .parse::<f64>()
        .map(Token::Operand)
        .map_err(|_| LexError::MalformedNumber(fragment.to_string()))
}
