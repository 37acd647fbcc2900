use crate::error::{FunctionDefinitionError, Result};
use crate::function::{ConstantTable, Function, FunctionTable, NativeFunction, UserFunction};
use crate::parser::{evaluate_with_config, EvaluatorConfig};
use log::debug;
use rayon::prelude::*;

/// A long-lived pair of constant and function tables.
///
/// Registration takes `&mut self`; evaluation only reads the tables, so one
/// evaluator can serve many evaluations, in parallel if needed.
#[derive(Debug, Clone, Default)]
pub struct Evaluator {
    constants: ConstantTable,
    functions: FunctionTable,
    config: EvaluatorConfig,
}

impl Evaluator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: EvaluatorConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn config(&self) -> &EvaluatorConfig {
        &self.config
    }

    pub fn constants(&self) -> &ConstantTable {
        &self.constants
    }

    pub fn functions(&self) -> &FunctionTable {
        &self.functions
    }

    /// Registers a constant, replacing any previous value under the same name.
    pub fn register_constant(&mut self, name: &str, value: f64) {
        debug!("Registering constant {} = {}", name, value);
        self.constants.insert(name.to_string(), value);
    }

    /// Registers a function, replacing any previous function under the same name.
    pub fn register_function(&mut self, name: &str, function: impl Into<Function>) {
        debug!("Registering function {}", name);
        self.functions.insert(name.to_string(), function.into());
    }

    /// Registers a Rust closure as a function.
    pub fn register_native<F>(&mut self, name: &str, function: F)
    where
        F: Fn(&[f64]) -> std::result::Result<f64, String> + Send + Sync + 'static,
    {
        self.register_function(name, NativeFunction::new(function));
    }

    /// Builds a [`UserFunction`] from `params` and `body` and registers it.
    pub fn define_function<I, S>(
        &mut self,
        name: &str,
        params: I,
        body: &str,
    ) -> std::result::Result<(), FunctionDefinitionError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let function = UserFunction::new(params, body)?;
        self.register_function(name, function);
        Ok(())
    }

    pub fn evaluate_expression(&self, expression: &str) -> Result<f64> {
        evaluate_with_config(expression, &self.constants, &self.functions, &self.config)
    }

    /// Evaluates every expression in parallel. Results keep the input order.
    pub fn evaluate_batch<S>(&self, expressions: &[S]) -> Vec<Result<f64>>
    where
        S: AsRef<str> + Sync,
    {
        expressions
            .par_iter()
            .map(|expression| self.evaluate_expression(expression.as_ref()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{Error, EvaluationError};

    fn setup_evaluator() -> Evaluator {
        let mut evaluator = Evaluator::new();
        evaluator.register_constant("price", 100.0);
        evaluator.register_constant("volume", 50.0);
        evaluator
            .define_function("avg", ["a", "b"], "(a + b) / 2")
            .unwrap();
        evaluator.register_native("double", |args| match args {
            [n] => Ok(n * 2.0),
            _ => Err("Expected a single number".to_string()),
        });
        evaluator
    }

    #[test]
    fn test_registered_tables() {
        let evaluator = setup_evaluator();
        assert_eq!(evaluator.evaluate_expression("price + volume"), Ok(150.0));
        assert_eq!(evaluator.evaluate_expression("avg(price, volume)"), Ok(75.0));
        assert_eq!(evaluator.evaluate_expression("double(avg(2, 4))"), Ok(6.0));
        assert_eq!(evaluator.constants().len(), 2);
        assert_eq!(evaluator.functions().len(), 2);
    }

    #[test]
    fn test_constants_and_functions_have_separate_names() {
        let mut evaluator = setup_evaluator();
        evaluator.register_constant("double", 10.0);
        assert_eq!(evaluator.evaluate_expression("double * 2"), Ok(20.0));
        assert_eq!(evaluator.evaluate_expression("double(2)"), Ok(4.0));
    }

    #[test]
    fn test_reregistering_replaces() {
        let mut evaluator = setup_evaluator();
        evaluator.register_constant("price", 1.0);
        assert_eq!(evaluator.evaluate_expression("price"), Ok(1.0));
    }

    #[test]
    fn test_define_function_rejects_bad_definitions() {
        let mut evaluator = Evaluator::new();
        assert_eq!(
            evaluator.define_function("bad", ["x", "x"], "x"),
            Err(FunctionDefinitionError::DuplicateParameter("x".to_string()))
        );
        assert!(evaluator.functions().is_empty());
    }

    #[test]
    fn test_native_wrong_arity() {
        let evaluator = setup_evaluator();
        assert_eq!(
            evaluator.evaluate_expression("double(1, 2)"),
            Err(Error::Evaluation(EvaluationError::NativeFunction {
                name: "double".to_string(),
                message: "Expected a single number".to_string(),
            }))
        );
    }

    #[test]
    fn test_configured_depth() {
        let mut evaluator = Evaluator::with_config(EvaluatorConfig::default().with_max_call_depth(3));
        evaluator.define_function("loop_", ["n"], "loop_(n)").unwrap();
        assert_eq!(
            evaluator.evaluate_expression("loop_(1)"),
            Err(Error::Evaluation(EvaluationError::CallDepthExceeded(3)))
        );
        assert_eq!(evaluator.config().max_call_depth, 3);
    }

    #[test]
    fn test_batch() {
        let evaluator = setup_evaluator();
        let results = evaluator.evaluate_batch(&["price / 4", "avg(1, 3)", "nope"]);
        assert_eq!(results[0], Ok(25.0));
        assert_eq!(results[1], Ok(2.0));
        assert!(results[2].is_err());
    }
}
