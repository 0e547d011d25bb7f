use std::fmt;

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum BinaryOp {
    Sum,
    Subtract,
    Multiply,
    Divide,
    Modulo,
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            BinaryOp::Sum => write!(f, "+"),
            BinaryOp::Subtract => write!(f, "-"),
            BinaryOp::Multiply => write!(f, "*"),
            BinaryOp::Divide => write!(f, "/"),
            BinaryOp::Modulo => write!(f, "%"),
        }
    }
}

/// The tree the parser builds and the evaluator consumes. Each node owns
/// its children exclusively, so dropping the root drops the whole tree.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum Expression {
    Constant(i64),
    Binary {
        op: BinaryOp,
        left: Box<Expression>,
        right: Box<Expression>,
    },
    Square(Box<Expression>),
}

impl Expression {
    pub fn binary(op: BinaryOp, left: Expression, right: Expression) -> Self {
        Expression::Binary {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn square(operand: Expression) -> Self {
        Expression::Square(Box::new(operand))
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Expression::Constant(value) => write!(f, "{}", value),
            Expression::Binary { op, left, right } => write!(f, "({} {} {})", left, op, right),
            Expression::Square(operand) => write!(f, "sqr({})", operand),
        }
    }
}
