use crate::lexer::{BindingPower, TokenKind};

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
    Modulo,
    Power,
}

impl Operator {
    /// The infix operator a token stands for, if any.
    pub fn from_token(kind: TokenKind) -> Option<Self> {
        match kind {
            TokenKind::Plus => Some(Operator::Add),
            TokenKind::Minus => Some(Operator::Subtract),
            TokenKind::Star => Some(Operator::Multiply),
            TokenKind::Slash => Some(Operator::Divide),
            TokenKind::Percent => Some(Operator::Modulo),
            TokenKind::Caret => Some(Operator::Power),
            TokenKind::Comma
            | TokenKind::Number
            | TokenKind::Identifier
            | TokenKind::LeftParen
            | TokenKind::RightParen
            | TokenKind::EndOfExpression => None,
        }
    }

    /// Level the right-hand operand is parsed at.
    ///
    /// Left-associative operators use their own level, so an equal operator to
    /// the right ends the operand. `^` uses the level just below its own, so a
    /// chained `^` is absorbed and the chain groups right to left.
    pub fn right_binding_power(self) -> BindingPower {
        match self {
            Operator::Add | Operator::Subtract => BindingPower::Additive,
            Operator::Multiply | Operator::Divide | Operator::Modulo => {
                BindingPower::Multiplicative
            }
            Operator::Power => BindingPower::Exponential.below(),
        }
    }

    /// IEEE-754 arithmetic; division or remainder by zero gives inf/NaN.
    pub fn apply(self, left: f64, right: f64) -> f64 {
        match self {
            Operator::Add => left + right,
            Operator::Subtract => left - right,
            Operator::Multiply => left * right,
            Operator::Divide => left / right,
            Operator::Modulo => left % right,
            Operator::Power => left.powf(right),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_token() {
        assert_eq!(Operator::from_token(TokenKind::Caret), Some(Operator::Power));
        assert_eq!(Operator::from_token(TokenKind::Percent), Some(Operator::Modulo));
        assert_eq!(Operator::from_token(TokenKind::Number), None);
        assert_eq!(Operator::from_token(TokenKind::EndOfExpression), None);
    }

    #[test]
    fn test_power_operand_absorbs_power() {
        assert!(TokenKind::Caret.binding_power() > Operator::Power.right_binding_power());
        assert!(TokenKind::Minus.binding_power() <= Operator::Subtract.right_binding_power());
        assert_eq!(
            Operator::Power.right_binding_power(),
            BindingPower::Exponential.below()
        );
    }

    #[test]
    fn test_apply_follows_float_semantics() {
        assert_eq!(Operator::Divide.apply(2.0, 0.0), f64::INFINITY);
        assert_eq!(Operator::Divide.apply(-2.0, 0.0), f64::NEG_INFINITY);
        assert!(Operator::Modulo.apply(5.0, 0.0).is_nan());
        assert!(Operator::Power.apply(-8.0, 1.0 / 3.0).is_nan());
        assert_eq!(Operator::Modulo.apply(-7.0, 3.0), -1.0);
    }
}
