use thiserror::Error;

pub type Result<T> = std::result::Result<T, CalcError>;

/// Everything that can go wrong between raw text and the final integer.
/// Lexing and parsing produce the first two kinds, evaluation the rest;
/// nothing is ever caught internally, every error aborts the whole call.
#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum CalcError {
    #[error("unexpected end of input")]
    UnexpectedEndOfInput,

    #[error("unexpected token: {0}")]
    UnexpectedToken(String),

    #[error("division by zero")]
    DivisionByZero,

    #[error("numeric overflow")]
    NumericOverflow,

    #[error("expression nested too deeply")]
    NestingTooDeep,
}
