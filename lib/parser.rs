use crate::{
    ast::{BinaryOp, Expression},
    error::{CalcError, Result},
    token::Token,
};

// Factor-level recursion deeper than this aborts instead of risking the
// stack on input like "((((((...".
const MAX_NESTING_DEPTH: usize = 256;

pub struct Parser {
    tokens: Vec<Token>,
    position: usize,
}

impl Parser {
    pub fn new(tokens: Vec<Token>) -> Self {
        Self {
            tokens,
            position: 0,
        }
    }

    /// Parses the whole token sequence into one expression tree. Tokens
    /// left over after the top-level expression are an error.
    pub fn parse(mut self) -> Result<Expression> {
        let expression = self.parse_expression(0)?;
        match self.cur_token() {
            Some(token) => Err(CalcError::UnexpectedToken(format!(
                "trailing input starting at '{}'",
                token
            ))),
            None => Ok(expression),
        }
    }

    // Expression := Term { ('+' | '-') Term }
    fn parse_expression(&mut self, depth: usize) -> Result<Expression> {
        let mut expression = self.parse_term(depth)?;

        loop {
            let op = match self.cur_token() {
                Some(Token::Plus) => BinaryOp::Sum,
                Some(Token::Minus) => BinaryOp::Subtract,
                _ => break,
            };
            self.advance();
            let right = self.parse_term(depth)?;
            expression = Expression::binary(op, expression, right);
        }

        Ok(expression)
    }

    // Term := Factor { ('*' | '/' | '%') Factor }
    fn parse_term(&mut self, depth: usize) -> Result<Expression> {
        let mut expression = self.parse_factor(depth)?;

        loop {
            let op = match self.cur_token() {
                Some(Token::Multiply) => BinaryOp::Multiply,
                Some(Token::Divide) => BinaryOp::Divide,
                Some(Token::Modulo) => BinaryOp::Modulo,
                _ => break,
            };
            self.advance();
            let right = self.parse_factor(depth)?;
            expression = Expression::binary(op, expression, right);
        }

        Ok(expression)
    }

    fn parse_factor(&mut self, depth: usize) -> Result<Expression> {
        if depth > MAX_NESTING_DEPTH {
            return Err(CalcError::NestingTooDeep);
        }

        let token = *self.cur_token().ok_or(CalcError::UnexpectedEndOfInput)?;
        match token {
            Token::Number(value) => {
                self.advance();
                Ok(Expression::Constant(value))
            }
            Token::OpeningBracket => {
                self.advance();
                let expression = self.parse_expression(depth + 1)?;
                self.expect(Token::ClosingBracket, "expected ')' after expression")?;
                Ok(expression)
            }
            Token::Plus => {
                // Unary plus is a no-op.
                self.advance();
                self.parse_factor(depth + 1)
            }
            Token::Minus => {
                if let Some(Token::Number(value)) = self.peek_token().copied() {
                    self.advance();
                    self.advance();
                    Ok(Expression::binary(
                        BinaryOp::Subtract,
                        Expression::Constant(0),
                        Expression::Constant(value),
                    ))
                } else {
                    // Inherited oddity, kept for parity: when '-' is not
                    // directly followed by a number it subtracts the next
                    // term from the next factor, so "-(2) + 3" is 2 - 3.
                    self.advance();
                    let left = self.parse_factor(depth + 1)?;
                    let right = self.parse_term(depth + 1)?;
                    Ok(Expression::binary(BinaryOp::Subtract, left, right))
                }
            }
            Token::Sqr => {
                self.advance();
                self.expect(Token::OpeningBracket, "expected '(' after 'sqr'")?;
                let operand = self.parse_expression(depth + 1)?;
                self.expect(
                    Token::ClosingBracket,
                    "expected ')' after expression inside 'sqr'",
                )?;
                Ok(Expression::square(operand))
            }
            Token::Multiply | Token::Divide | Token::Modulo | Token::ClosingBracket => Err(
                CalcError::UnexpectedToken(format!("expected a factor, found '{}'", token)),
            ),
        }
    }

    fn cur_token(&self) -> Option<&Token> {
        self.tokens.get(self.position)
    }

    fn peek_token(&self) -> Option<&Token> {
        self.tokens.get(self.position + 1)
    }

    fn advance(&mut self) {
        self.position += 1;
    }

    fn expect(&mut self, expected: Token, context: &str) -> Result<()> {
        match self.cur_token() {
            Some(token) if *token == expected => {
                self.advance();
                Ok(())
            }
            Some(token) => Err(CalcError::UnexpectedToken(format!(
                "{}, found '{}'",
                context, token
            ))),
            None => Err(CalcError::UnexpectedEndOfInput),
        }
    }
}
