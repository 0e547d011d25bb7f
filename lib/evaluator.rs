use crate::{
    ast::{BinaryOp, Expression},
    error::{CalcError, Result},
};

/// Reduces an expression tree to a single integer, post-order. All
/// arithmetic is checked; anything outside i64 is `NumericOverflow`.
pub fn eval(expression: Expression) -> Result<i64> {
    match expression {
        Expression::Constant(value) => Ok(value),
        Expression::Binary { op, left, right } => {
            let left = eval(*left)?;
            let right = eval(*right)?;
            eval_binary(op, left, right)
        }
        Expression::Square(operand) => {
            let value = eval(*operand)?;
            value.checked_mul(value).ok_or(CalcError::NumericOverflow)
        }
    }
}

fn eval_binary(op: BinaryOp, left: i64, right: i64) -> Result<i64> {
    match op {
        BinaryOp::Sum => left.checked_add(right).ok_or(CalcError::NumericOverflow),
        BinaryOp::Subtract => left.checked_sub(right).ok_or(CalcError::NumericOverflow),
        BinaryOp::Multiply => left.checked_mul(right).ok_or(CalcError::NumericOverflow),
        BinaryOp::Divide | BinaryOp::Modulo if right == 0 => Err(CalcError::DivisionByZero),
        // checked_div/checked_rem only fail here on i64::MIN / -1.
        BinaryOp::Divide => left.checked_div(right).ok_or(CalcError::NumericOverflow),
        BinaryOp::Modulo => left.checked_rem(right).ok_or(CalcError::NumericOverflow),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{lexer::tokenize, parser::Parser};

    fn eval_input(input: &str) -> Result<i64> {
        eval(Parser::new(tokenize(input).unwrap()).parse().unwrap())
    }

    #[test]
    fn integer_arithmetic() {
        let tests = vec![
            ("5", 5),
            ("2 + 3", 5),
            ("9 - 3 - 2", 4),
            ("2 + 3 * 4", 14),
            ("(2 + 3) * 4", 20),
            ("7 / 2", 3),
            ("-7 / 2", -3),
            ("7 % 3", 1),
            ("-7 % 3", -1),
            ("7 % -3", 1),
            ("sqr(4)", 16),
            ("sqr(-4)", 16),
            ("sqr(sqr(2))", 16),
            ("1 + 3 * (4 - 2) / (2 - 1) + sqr(4)", 23),
        ];

        for (input, expected) in tests {
            assert_eq!(eval_input(input), Ok(expected), "input: {}", input);
        }
    }

    #[test]
    fn division_and_modulo_by_zero() {
        let tests = vec!["5 / 0", "5 % 0", "1 / (3 - 3)"];

        for input in tests {
            assert_eq!(eval_input(input), Err(CalcError::DivisionByZero), "input: {}", input);
        }
    }

    #[test]
    fn arithmetic_overflow() {
        let tests = vec![
            "9223372036854775807 + 1",
            "0 - 9223372036854775807 - 2",
            "9223372036854775807 * 2",
            "sqr(9223372036854775807)",
            "sqr(3037000500)",
        ];

        for input in tests {
            assert_eq!(eval_input(input), Err(CalcError::NumericOverflow), "input: {}", input);
        }

        // i64::MIN is not spellable as a literal, so build the tree directly.
        let min = Expression::binary(
            BinaryOp::Subtract,
            Expression::Constant(-9223372036854775807),
            Expression::Constant(1),
        );
        let minus_one = Expression::Constant(-1);
        assert_eq!(
            eval(Expression::binary(BinaryOp::Divide, min.clone(), minus_one.clone())),
            Err(CalcError::NumericOverflow)
        );
        assert_eq!(
            eval(Expression::binary(BinaryOp::Modulo, min, minus_one)),
            Err(CalcError::NumericOverflow)
        );
    }

    #[test]
    fn square_just_below_overflow() {
        assert_eq!(eval_input("sqr(3037000499)"), Ok(3037000499 * 3037000499));
    }
}
