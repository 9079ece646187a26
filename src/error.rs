use thiserror::Error;

/// Errors raised while compiling formula source text. Compilation is all
/// or nothing: on any of these, no `Formula` is produced.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CompileError {
    /// The source does not match the formula grammar. `position` is the
    /// byte offset at which recognition failed.
    #[error("syntax error (pos {position}): {message}")]
    Syntax { message: String, position: usize },

    /// A numeric literal was recognized by the grammar but could not be
    /// converted to a number, e.g. an integer literal beyond i64 range.
    #[error("malformed number '{literal}' (pos {position}): {reason}")]
    Literal {
        literal: String,
        position: usize,
        reason: String,
    },
}

/// Errors raised while evaluating a compiled formula. All of these are
/// scoped to a single `eval` call; the formula itself stays valid and may
/// be evaluated again.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EvalError {
    /// The formula references a variable that the caller did not bind and
    /// that is not a reserved constant.
    #[error("unknown variable '{name}' (pos {position})")]
    UnknownVariable { name: String, position: usize },

    /// The formula calls a function that is not in the registry.
    #[error("unknown function '{name}' (pos {position})")]
    UnknownFunction { name: String, position: usize },

    /// A call supplied fewer arguments than the function's registered
    /// minimum. The registered implementation is never invoked in this
    /// case.
    #[error("insufficient arguments for '{name}' (pos {position}): got {actual}, want at least {expected}")]
    InsufficientArguments {
        name: String,
        position: usize,
        actual: usize,
        expected: usize,
    },

    /// A registered function panicked. The panic is caught at the call
    /// boundary and surfaced here instead of unwinding through the
    /// evaluator; `origin` records the panic site when it could be
    /// captured.
    #[error("function '{name}' panicked (pos {position}): {reason}{site}", site = origin_suffix(.origin))]
    FunctionFault {
        name: String,
        position: usize,
        reason: String,
        origin: Option<FaultOrigin>,
    },
}

/// Best-effort source location of a panic inside a registered function.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FaultOrigin {
    pub file: String,
    pub line: u32,
}

fn origin_suffix(origin: &Option<FaultOrigin>) -> String {
    match origin {
        Some(origin) => format!(" [{}:{}]", origin.file, origin.line),
        None => String::new(),
    }
}

/// Either side of the compile-then-evaluate pipeline, as returned by the
/// one-shot `evaluate` entry point.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error(transparent)]
    Compile(#[from] CompileError),
    #[error(transparent)]
    Eval(#[from] EvalError),
}
