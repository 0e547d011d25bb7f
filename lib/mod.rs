pub mod error;
pub mod evaluator;
pub mod lexer;
pub mod parser;

mod ast;
mod token;

pub use error::{CalcError, Result};

use parser::Parser;

/// Evaluates an integer arithmetic expression to its result.
///
/// Meaningful characters are digits, whitespace, `+ - * / % ( )` and the
/// reserved `s` that introduces the square operator; everything else is
/// ignored. All-or-nothing: any lex, parse, or arithmetic failure aborts
/// the call with a [`CalcError`].
pub fn calculate(input: &str) -> Result<i64> {
    let tokens = lexer::tokenize(input)?;
    let expression = Parser::new(tokens).parse()?;
    evaluator::eval(expression)
}

/// Like [`calculate`], but rejects characters the lenient lexer drops.
pub fn calculate_strict(input: &str) -> Result<i64> {
    let tokens = lexer::tokenize_strict(input)?;
    let expression = Parser::new(tokens).parse()?;
    evaluator::eval(expression)
}
