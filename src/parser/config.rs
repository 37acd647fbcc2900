/// How many user-function calls may be nested before evaluation gives up.
pub const DEFAULT_MAX_CALL_DEPTH: usize = 64;

/// Settings shared by an evaluation and every function call nested in it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EvaluatorConfig {
    /// Nested user-function invocations allowed below the top-level
    /// expression. Exceeding it fails the evaluation instead of overflowing
    /// the stack on self-recursive definitions.
    pub max_call_depth: usize,
}

impl EvaluatorConfig {
    pub fn with_max_call_depth(mut self, max_call_depth: usize) -> Self {
        self.max_call_depth = max_call_depth;
        self
    }
}

impl Default for EvaluatorConfig {
    fn default() -> Self {
        Self {
            max_call_depth: DEFAULT_MAX_CALL_DEPTH,
        }
    }
}
