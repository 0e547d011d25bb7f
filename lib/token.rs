use std::fmt;

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Token {
    Number(i64),

    Plus,
    Minus,
    Multiply,
    Divide,
    Modulo,

    OpeningBracket,
    ClosingBracket,

    Sqr,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Token::Number(value) => write!(f, "{}", value),

            Token::Plus => write!(f, "+"),
            Token::Minus => write!(f, "-"),
            Token::Multiply => write!(f, "*"),
            Token::Divide => write!(f, "/"),
            Token::Modulo => write!(f, "%"),

            Token::OpeningBracket => write!(f, "("),
            Token::ClosingBracket => write!(f, ")"),

            Token::Sqr => write!(f, "s"),
        }
    }
}
