use thiserror::Error;

/// Raised when no lexical rule matches the start of the remaining input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenizerError {
    #[error("Unrecognized input at offset {offset}: '{remaining}'")]
    UnrecognizedInput { offset: usize, remaining: String },
}

/// Raised while building a user function, or when calling one with the wrong arity.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FunctionDefinitionError {
    #[error("Parameter '{0}' is declared more than once")]
    DuplicateParameter(String),

    #[error("Parameter '{0}' is not a valid identifier")]
    InvalidParameterName(String),

    #[error("Parameter '{0}' is never used in the function body")]
    UnusedParameter(String),

    #[error("Expected {expected} arguments, but got {found}")]
    ArgumentCount { expected: usize, found: usize },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvaluationError {
    #[error("Expression is empty")]
    EmptyExpression,

    #[error("Invalid number literal '{0}'")]
    InvalidNumber(String),

    #[error("Unexpected trailing input, found {0}")]
    TrailingInput(String),

    #[error("Expected value, found {0}")]
    ExpectedValue(String),

    #[error("Expected {expected}, found {found}")]
    UnexpectedToken { expected: String, found: String },

    #[error("Unknown constant '{0}'")]
    UnknownConstant(String),

    #[error("Unknown function '{0}'")]
    UnknownFunction(String),

    #[error("Function calls nested deeper than {0} levels")]
    CallDepthExceeded(usize),

    #[error("Function '{name}' failed: {message}")]
    NativeFunction { name: String, message: String },
}

/// Any failure an evaluation can end with.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error(transparent)]
    Tokenizer(#[from] TokenizerError),

    #[error(transparent)]
    FunctionDefinition(#[from] FunctionDefinitionError),

    #[error(transparent)]
    Evaluation(#[from] EvaluationError),
}

pub type Result<T> = std::result::Result<T, Error>;
