use crate::error::{EvaluationError, Result};
use crate::function::{ConstantTable, Function, FunctionTable};
use crate::lexer::{tokenize, BindingPower, Token, TokenKind};
use crate::parser::{EvaluatorConfig, Operator};
use log::{debug, trace};

/// Tokenizes and evaluates `expression` as the body of a call `depth` levels deep.
pub(crate) fn evaluate_at_depth(
    expression: &str,
    constants: &ConstantTable,
    functions: &FunctionTable,
    config: &EvaluatorConfig,
    depth: usize,
) -> Result<f64> {
    debug!("Evaluating expression: {} (depth {})", expression, depth);
    if expression.is_empty() {
        return Err(EvaluationError::EmptyExpression.into());
    }

    let stream = tokenize(expression)?;
    let mut parser = PrattParser {
        tokens: stream.tokens(),
        position: 0,
        constants,
        functions,
        config,
        depth,
    };

    let value = parser.parse_expression(BindingPower::Minimum)?;
    let next = parser.peek();
    if !next.is(TokenKind::EndOfExpression) {
        return Err(EvaluationError::TrailingInput(next.to_string()).into());
    }

    trace!("{} = {}", expression, value);
    Ok(value)
}

struct PrattParser<'a> {
    tokens: &'a [Token<'a>],
    position: usize,
    constants: &'a ConstantTable,
    functions: &'a FunctionTable,
    config: &'a EvaluatorConfig,
    depth: usize,
}

impl<'a> PrattParser<'a> {
    fn peek(&self) -> Token<'a> {
        self.tokens
            .get(self.position)
            .copied()
            .unwrap_or_else(Token::end)
    }

    /// Consumes the next token. The end marker is never consumed.
    fn advance(&mut self) -> Token<'a> {
        let token = self.peek();
        if !token.is(TokenKind::EndOfExpression) {
            self.position += 1;
        }
        token
    }

    fn expect(&mut self, kind: TokenKind, expected: &str) -> Result<()> {
        let token = self.advance();
        if token.is(kind) {
            Ok(())
        } else {
            Err(EvaluationError::UnexpectedToken {
                expected: expected.to_string(),
                found: token.to_string(),
            }
            .into())
        }
    }

    fn parse_expression(&mut self, min_power: BindingPower) -> Result<f64> {
        let token = self.advance();
        let mut left = self.prefix(token)?;

        while self.peek().kind.binding_power() > min_power {
            let token = self.advance();
            left = self.infix(left, token)?;
        }

        Ok(left)
    }

    fn prefix(&mut self, token: Token<'a>) -> Result<f64> {
        match token.kind {
            TokenKind::Number => token
                .text
                .parse::<f64>()
                .map_err(|_| EvaluationError::InvalidNumber(token.text.to_string()).into()),
            TokenKind::Identifier => self.identifier(token.text),
            TokenKind::Plus => self.signed_operand(),
            TokenKind::Minus => Ok(-self.signed_operand()?),
            TokenKind::LeftParen => {
                let value = self.parse_expression(BindingPower::Minimum)?;
                self.expect(TokenKind::RightParen, "')'")?;
                Ok(value)
            }
            TokenKind::Comma
            | TokenKind::Star
            | TokenKind::Slash
            | TokenKind::Percent
            | TokenKind::Caret
            | TokenKind::RightParen
            | TokenKind::EndOfExpression => {
                Err(EvaluationError::ExpectedValue(token.to_string()).into())
            }
        }
    }

    /// Operand of a prefix sign. It absorbs a following `^`, so the sign
    /// applies to the whole power while `*` and lower still end the operand.
    fn signed_operand(&mut self) -> Result<f64> {
        self.parse_expression(BindingPower::Exponential.below())
    }

    fn infix(&mut self, left: f64, token: Token<'a>) -> Result<f64> {
        let operator = Operator::from_token(token.kind).ok_or_else(|| {
            EvaluationError::UnexpectedToken {
                expected: "an operator".to_string(),
                found: token.to_string(),
            }
        })?;

        let right = self.parse_expression(operator.right_binding_power())?;
        Ok(operator.apply(left, right))
    }

    fn identifier(&mut self, name: &str) -> Result<f64> {
        if self.peek().is(TokenKind::LeftParen) {
            self.advance();
            return self.call(name);
        }

        self.constants
            .get(name)
            .copied()
            .ok_or_else(|| EvaluationError::UnknownConstant(name.to_string()).into())
    }

    fn call(&mut self, name: &str) -> Result<f64> {
        let functions = self.functions;
        let function = functions
            .get(name)
            .ok_or_else(|| EvaluationError::UnknownFunction(name.to_string()))?;

        let args = self.parse_arguments()?;
        match function {
            Function::User(function) => {
                let depth = self.depth + 1;
                if depth > self.config.max_call_depth {
                    return Err(EvaluationError::CallDepthExceeded(self.config.max_call_depth).into());
                }
                function.invoke(&args, functions, self.config, depth)
            }
            Function::Native(function) => {
                debug!("Calling native {}({:?})", name, args);
                function.call(name, &args)
            }
        }
    }

    /// Parses `a, b, ...)` after the opening parenthesis of a call.
    fn parse_arguments(&mut self) -> Result<Vec<f64>> {
        let mut args = Vec::new();
        if !self.peek().is(TokenKind::RightParen) {
            loop {
                args.push(self.parse_expression(BindingPower::Minimum)?);
                if !self.peek().is(TokenKind::Comma) {
                    break;
                }
                self.advance();
            }
        }

        self.expect(TokenKind::RightParen, "')'")?;
        Ok(args)
    }
}
