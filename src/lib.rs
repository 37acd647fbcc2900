//! Text arithmetic with named constants and user-defined functions.
//!
//! Expressions are tokenized once and evaluated directly by a Pratt parser;
//! there is no intermediate tree.

pub mod builtins;
pub mod error;
pub mod function;
pub mod lexer;
pub mod parser;

pub use error::{Error, EvaluationError, FunctionDefinitionError, Result, TokenizerError};
pub use function::{
    make_function, ConstantTable, Function, FunctionTable, NativeFunction, UserFunction,
};
pub use lexer::{tokenize, BindingPower, Token, TokenKind, TokenStream};
pub use parser::{evaluate, evaluate_batch, evaluate_with_config, Evaluator, EvaluatorConfig};
