use crate::error::{EvaluationError, Result};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

mod user;

pub use user::{make_function, UserFunction};

/// Named numeric values visible to an expression.
pub type ConstantTable = HashMap<String, f64>;

/// Named functions callable from an expression.
pub type FunctionTable = HashMap<String, Function>;

pub type NativeFn = Arc<dyn Fn(&[f64]) -> std::result::Result<f64, String> + Send + Sync>;

/// A function implemented in Rust.
///
/// The closure checks its own arguments and reports problems as a message;
/// the evaluator attaches the function's name.
#[derive(Clone)]
pub struct NativeFunction {
    func: NativeFn,
}

impl NativeFunction {
    pub fn new<F>(func: F) -> Self
    where
        F: Fn(&[f64]) -> std::result::Result<f64, String> + Send + Sync + 'static,
    {
        Self {
            func: Arc::new(func),
        }
    }

    pub fn call(&self, name: &str, args: &[f64]) -> Result<f64> {
        (self.func)(args).map_err(|message| {
            EvaluationError::NativeFunction {
                name: name.to_string(),
                message,
            }
            .into()
        })
    }
}

impl fmt::Debug for NativeFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("NativeFunction")
    }
}

#[derive(Debug, Clone)]
pub enum Function {
    User(UserFunction),
    Native(NativeFunction),
}

impl From<UserFunction> for Function {
    fn from(value: UserFunction) -> Self {
        Function::User(value)
    }
}

impl From<NativeFunction> for Function {
    fn from(value: NativeFunction) -> Self {
        Function::Native(value)
    }
}
