use crate::error::{FunctionDefinitionError, Result};
use crate::function::{ConstantTable, FunctionTable};
use crate::lexer::{tokenize, TokenKind};
use crate::parser::{self, EvaluatorConfig};
use log::debug;
use std::collections::HashSet;
use std::fmt;

/// A function defined by an expression over named parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserFunction {
    params: Vec<String>,
    body: String,
}

/// Shorthand for [`UserFunction::new`].
pub fn make_function<I, S>(
    params: I,
    body: impl Into<String>,
) -> std::result::Result<UserFunction, FunctionDefinitionError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    UserFunction::new(params, body)
}

fn is_single_identifier(name: &str) -> bool {
    match tokenize(name) {
        Ok(stream) => matches!(
            stream.tokens(),
            [token, _] if token.is(TokenKind::Identifier) && token.text == name
        ),
        Err(_) => false,
    }
}

impl UserFunction {
    /// Validates the parameter list against the body.
    ///
    /// The "used" check is a plain substring search of the body, so a
    /// parameter `x` counts as used by a body mentioning `max`.
    pub fn new<I, S>(
        params: I,
        body: impl Into<String>,
    ) -> std::result::Result<Self, FunctionDefinitionError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let params: Vec<String> = params.into_iter().map(Into::into).collect();
        let body = body.into();

        let mut seen = HashSet::new();
        for param in &params {
            if !seen.insert(param.as_str()) {
                return Err(FunctionDefinitionError::DuplicateParameter(param.clone()));
            }
            if !is_single_identifier(param) {
                return Err(FunctionDefinitionError::InvalidParameterName(param.clone()));
            }
            if !body.contains(param.as_str()) {
                return Err(FunctionDefinitionError::UnusedParameter(param.clone()));
            }
        }

        Ok(Self { params, body })
    }

    pub fn params(&self) -> &[String] {
        &self.params
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn arity(&self) -> usize {
        self.params.len()
    }

    /// Evaluates the body with `args` bound to the parameters.
    ///
    /// The body sees nothing but its own parameters: no constants and no
    /// functions from the caller.
    pub fn call(&self, args: &[f64]) -> Result<f64> {
        self.call_with(args, &FunctionTable::new())
    }

    /// Like [`call`](Self::call), but the body may call into `functions`.
    pub fn call_with(&self, args: &[f64], functions: &FunctionTable) -> Result<f64> {
        self.invoke(args, functions, &EvaluatorConfig::default(), 1)
    }

    pub(crate) fn invoke(
        &self,
        args: &[f64],
        functions: &FunctionTable,
        config: &EvaluatorConfig,
        depth: usize,
    ) -> Result<f64> {
        if args.len() != self.params.len() {
            return Err(FunctionDefinitionError::ArgumentCount {
                expected: self.params.len(),
                found: args.len(),
            }
            .into());
        }

        let constants: ConstantTable = self
            .params
            .iter()
            .cloned()
            .zip(args.iter().copied())
            .collect();
        debug!("Invoking {} with {:?} at depth {}", self, constants, depth);

        parser::evaluate_at_depth(&self.body, &constants, functions, config, depth)
    }
}

impl fmt::Display for UserFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}) -> {}", self.params.join(", "), self.body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{Error, EvaluationError};
    use crate::function::Function;

    #[test]
    fn test_call_binds_arguments_in_order() {
        let sub = make_function(["x", "y"], "x-y").unwrap();
        assert_eq!(sub.call(&[10.0, 4.0]), Ok(6.0));
        assert_eq!(sub.call(&[4.0, 10.0]), Ok(-6.0));
    }

    #[test]
    fn test_add_two() {
        let add = make_function(["x", "y"], "x+y").unwrap();
        assert_eq!(add.call(&[3.0, 4.0]), Ok(7.0));
        assert_eq!(add.arity(), 2);
    }

    #[test]
    fn test_zero_parameters() {
        let answer = make_function(Vec::<String>::new(), "6*7").unwrap();
        assert_eq!(answer.call(&[]), Ok(42.0));
    }

    #[test]
    fn test_duplicate_parameter() {
        assert_eq!(
            make_function(["x", "x"], "x+x"),
            Err(FunctionDefinitionError::DuplicateParameter("x".to_string()))
        );
    }

    #[test]
    fn test_unused_parameter() {
        assert_eq!(
            make_function(["x"], "1+1"),
            Err(FunctionDefinitionError::UnusedParameter("x".to_string()))
        );
    }

    #[test]
    fn test_invalid_parameter_names() {
        for name in ["1x", "x y", " x", "x+", "", "$"] {
            assert_eq!(
                make_function([name], format!("{name} + 1")),
                Err(FunctionDefinitionError::InvalidParameterName(
                    name.to_string()
                )),
                "'{}' should be rejected",
                name
            );
        }
    }

    #[test]
    fn test_used_check_is_textual() {
        // `x` appears inside `max`, which is enough to pass.
        let f = make_function(["x"], "max").unwrap();
        assert!(matches!(
            f.call(&[1.0]),
            Err(Error::Evaluation(EvaluationError::UnknownConstant(name))) if name == "max"
        ));
    }

    #[test]
    fn test_argument_count_mismatch() {
        let add = make_function(["x", "y"], "x+y").unwrap();
        assert_eq!(
            add.call(&[1.0]),
            Err(Error::FunctionDefinition(
                FunctionDefinitionError::ArgumentCount {
                    expected: 2,
                    found: 1,
                }
            ))
        );
    }

    #[test]
    fn test_body_has_no_ambient_functions() {
        let f = make_function(["x"], "double(x)").unwrap();
        assert_eq!(
            f.call(&[2.0]),
            Err(Error::Evaluation(EvaluationError::UnknownFunction(
                "double".to_string()
            )))
        );

        let mut functions = FunctionTable::new();
        functions.insert(
            "double".to_string(),
            Function::User(make_function(["n"], "n*2").unwrap()),
        );
        assert_eq!(f.call_with(&[2.0], &functions), Ok(4.0));
    }

    #[test]
    fn test_calls_are_independent() {
        let square = make_function(["v"], "v*v").unwrap();
        assert_eq!(square.call(&[3.0]), Ok(9.0));
        assert_eq!(square.call(&[5.0]), Ok(25.0));
        assert_eq!(square.call(&[3.0]), Ok(9.0));
    }

    #[test]
    fn test_display() {
        let add = make_function(["x", "y"], "x+y").unwrap();
        assert_eq!(add.to_string(), "(x, y) -> x+y");
    }
}
