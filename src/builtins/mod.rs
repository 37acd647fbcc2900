//! Constants and functions most callers want available out of the box.

use crate::error::FunctionDefinitionError;
use crate::function::ConstantTable;
use crate::parser::Evaluator;
use std::f64::consts;

pub mod math;

pub fn default_constants() -> ConstantTable {
    ConstantTable::from([
        ("pi".to_string(), consts::PI),
        ("e".to_string(), consts::E),
        ("tau".to_string(), consts::TAU),
    ])
}

/// Functions written in the expression language itself.
const DEFINED_FUNCTIONS: &[(&str, &[&str], &str)] = &[
    ("sq", &["x"], "x * x"),
    ("cube", &["x"], "x * x * x"),
    ("hypot", &["x", "y"], "(x^2 + y^2) ^ 0.5"),
    ("avg", &["a", "b"], "(a + b) / 2"),
];

/// Registers the default constants, the native math functions and the
/// expression-defined helpers.
pub fn register_builtins(evaluator: &mut Evaluator) -> Result<(), FunctionDefinitionError> {
    for (name, value) in default_constants() {
        evaluator.register_constant(&name, value);
    }

    math::register(evaluator);

    for (name, params, body) in DEFINED_FUNCTIONS {
        evaluator.define_function(name, params.iter().copied(), body)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup_evaluator() -> Evaluator {
        let mut evaluator = Evaluator::new();
        register_builtins(&mut evaluator).unwrap();
        evaluator
    }

    #[test]
    fn test_constants() {
        let evaluator = setup_evaluator();
        assert_eq!(evaluator.evaluate_expression("pi * 2"), Ok(consts::PI * 2.0));
        assert_eq!(evaluator.evaluate_expression("tau - 2 * pi"), Ok(0.0));
    }

    #[test]
    fn test_native_functions() {
        let evaluator = setup_evaluator();
        assert_eq!(evaluator.evaluate_expression("sqrt(16) + abs(-2)"), Ok(6.0));
        assert_eq!(evaluator.evaluate_expression("max(1, 9, 4) - min(3, 2)"), Ok(7.0));
        assert_eq!(evaluator.evaluate_expression("floor(2.7) + ceil(2.1)"), Ok(5.0));
        assert_eq!(evaluator.evaluate_expression("cos(0)"), Ok(1.0));
        assert!(evaluator.evaluate_expression("sqrt(1, 2)").is_err());
    }

    #[test]
    fn test_defined_functions() {
        let evaluator = setup_evaluator();
        assert_eq!(evaluator.evaluate_expression("hypot(3, 4)"), Ok(5.0));
        assert_eq!(evaluator.evaluate_expression("sq(cube(2))"), Ok(64.0));
        assert_eq!(evaluator.evaluate_expression("avg(sq(2), 6)"), Ok(5.0));
    }

    #[test]
    fn test_defined_functions_are_isolated_from_constants() {
        let mut evaluator = setup_evaluator();
        evaluator.define_function("circle", ["r"], "pi * r^2").unwrap();
        assert!(evaluator.evaluate_expression("circle(1)").is_err());
    }
}
