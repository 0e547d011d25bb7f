use std::collections::HashMap;

use lazy_static::lazy_static;

use crate::{
    error::{CalcError, Result},
    token::Token,
};

lazy_static! {
    static ref TOKEN_MAP: HashMap<char, Token> = HashMap::from([
        ('+', Token::Plus),
        ('-', Token::Minus),
        ('*', Token::Multiply),
        ('/', Token::Divide),
        ('%', Token::Modulo),
        ('(', Token::OpeningBracket),
        (')', Token::ClosingBracket),
        ('s', Token::Sqr),
    ]);
}

/// Scans the whole input up front and returns the token sequence.
///
/// Characters outside the token map are dropped silently; `sqr(4)` and
/// `square(4)` produce the identical stream because everything after the
/// reserved `s` vanishes. Use [`tokenize_strict`] to reject them instead.
pub fn tokenize(input: &str) -> Result<Vec<Token>> {
    collect_tokens(Lexer::new(input))
}

/// Like [`tokenize`], but an unrecognized character is an error.
pub fn tokenize_strict(input: &str) -> Result<Vec<Token>> {
    collect_tokens(Lexer::strict(input))
}

fn collect_tokens(mut lexer: Lexer) -> Result<Vec<Token>> {
    let mut tokens = Vec::new();
    while let Some(token) = lexer.next_token() {
        tokens.push(token?);
    }
    Ok(tokens)
}

pub struct Lexer {
    chars: Vec<char>,
    position: usize,
    char: Option<char>,
    reject_unknown: bool,
}

impl Lexer {
    pub fn new(input: &str) -> Self {
        Self::with_strictness(input, false)
    }

    pub fn strict(input: &str) -> Self {
        Self::with_strictness(input, true)
    }

    fn with_strictness(input: &str, reject_unknown: bool) -> Self {
        let chars: Vec<char> = input.chars().collect();
        let char = chars.first().copied();
        Self {
            chars,
            position: 0,
            char,
            reject_unknown,
        }
    }

    pub fn next_token(&mut self) -> Option<Result<Token>> {
        loop {
            let char = self.char?;

            if char.is_whitespace() {
                self.read_char();
                continue;
            }

            if char.is_ascii_digit() {
                let literal = self.read_until(|char| !char.is_ascii_digit());
                // A digit run can only fail to parse by exceeding i64.
                return Some(
                    literal
                        .parse::<i64>()
                        .map(Token::Number)
                        .map_err(|_| CalcError::NumericOverflow),
                );
            }

            if let Some(token) = TOKEN_MAP.get(&char) {
                self.read_char();
                return Some(Ok(*token));
            }

            if self.reject_unknown {
                self.read_char();
                return Some(Err(CalcError::UnexpectedToken(format!(
                    "unrecognized character '{}'",
                    char
                ))));
            }

            // Not in the token map: skip it without emitting anything.
            self.read_char();
        }
    }

    fn read_char(&mut self) {
        self.position += 1;
        self.char = self.chars.get(self.position).copied();
    }

    fn read_until(&mut self, condition: impl Fn(char) -> bool) -> String {
        let mut literal = String::new();
        while let Some(char) = self.char {
            if condition(char) {
                break;
            }
            literal.push(char);
            self.read_char();
        }
        literal
    }
}
