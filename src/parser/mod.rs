use crate::error::Result;
use crate::function::{ConstantTable, FunctionTable};
use rayon::prelude::*;

mod config;
mod evaluator;
mod operator;
mod pratt;

pub use config::{EvaluatorConfig, DEFAULT_MAX_CALL_DEPTH};
pub use evaluator::Evaluator;
pub use operator::Operator;
pub(crate) use pratt::evaluate_at_depth;

/// Evaluates `expression` against the given tables.
///
/// # Examples
///
/// ```
/// use numeval_rs::{evaluate, ConstantTable, FunctionTable};
///
/// let constants = ConstantTable::from([("r".to_string(), 2.0)]);
/// let area = evaluate("3 * r ^ 2", &constants, &FunctionTable::new()).unwrap();
/// assert_eq!(area, 12.0);
/// ```
pub fn evaluate(
    expression: &str,
    constants: &ConstantTable,
    functions: &FunctionTable,
) -> Result<f64> {
    evaluate_with_config(expression, constants, functions, &EvaluatorConfig::default())
}

pub fn evaluate_with_config(
    expression: &str,
    constants: &ConstantTable,
    functions: &FunctionTable,
    config: &EvaluatorConfig,
) -> Result<f64> {
    evaluate_at_depth(expression, constants, functions, config, 0)
}

/// Evaluates independent expressions in parallel. Results keep the input order.
pub fn evaluate_batch<S>(
    expressions: &[S],
    constants: &ConstantTable,
    functions: &FunctionTable,
) -> Vec<Result<f64>>
where
    S: AsRef<str> + Sync,
{
    expressions
        .par_iter()
        .map(|expression| evaluate(expression.as_ref(), constants, functions))
        .collect()
}
