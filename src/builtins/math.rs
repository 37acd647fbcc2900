use crate::parser::Evaluator;
use numeval_macros::numeval_fn;

#[numeval_fn]
fn sqrt(x: f64) -> f64 {
    x.sqrt()
}

#[numeval_fn]
fn abs(x: f64) -> f64 {
    x.abs()
}

#[numeval_fn]
fn exp(x: f64) -> f64 {
    x.exp()
}

#[numeval_fn]
fn ln(x: f64) -> f64 {
    x.ln()
}

#[numeval_fn]
fn log10(x: f64) -> f64 {
    x.log10()
}

#[numeval_fn]
fn log2(x: f64) -> f64 {
    x.log2()
}

/// Logarithm of `x` in an arbitrary base.
#[numeval_fn]
fn log(x: f64, base: f64) -> f64 {
    x.log(base)
}

#[numeval_fn]
fn sin(x: f64) -> f64 {
    x.sin()
}

#[numeval_fn]
fn cos(x: f64) -> f64 {
    x.cos()
}

#[numeval_fn]
fn tan(x: f64) -> f64 {
    x.tan()
}

#[numeval_fn]
fn asin(x: f64) -> f64 {
    x.asin()
}

#[numeval_fn]
fn acos(x: f64) -> f64 {
    x.acos()
}

#[numeval_fn]
fn atan(x: f64) -> f64 {
    x.atan()
}

#[numeval_fn]
fn floor(x: f64) -> f64 {
    x.floor()
}

#[numeval_fn]
fn ceil(x: f64) -> f64 {
    x.ceil()
}

#[numeval_fn]
fn round(x: f64) -> f64 {
    x.round()
}

#[numeval_fn]
fn trunc(x: f64) -> f64 {
    x.trunc()
}

#[numeval_fn]
fn min(values: &[f64]) -> Result<f64, String> {
    values
        .iter()
        .copied()
        .reduce(f64::min)
        .ok_or_else(|| "min needs at least one argument".to_string())
}

#[numeval_fn]
fn max(values: &[f64]) -> Result<f64, String> {
    values
        .iter()
        .copied()
        .reduce(f64::max)
        .ok_or_else(|| "max needs at least one argument".to_string())
}

pub fn register(evaluator: &mut Evaluator) {
    evaluator.register_native("sqrt", sqrt);
    evaluator.register_native("abs", abs);
    evaluator.register_native("exp", exp);
    evaluator.register_native("ln", ln);
    evaluator.register_native("log10", log10);
    evaluator.register_native("log2", log2);
    evaluator.register_native("log", log);
    evaluator.register_native("sin", sin);
    evaluator.register_native("cos", cos);
    evaluator.register_native("tan", tan);
    evaluator.register_native("asin", asin);
    evaluator.register_native("acos", acos);
    evaluator.register_native("atan", atan);
    evaluator.register_native("floor", floor);
    evaluator.register_native("ceil", ceil);
    evaluator.register_native("round", round);
    evaluator.register_native("trunc", trunc);
    evaluator.register_native("min", min);
    evaluator.register_native("max", max);
}
