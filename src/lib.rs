//! Arithmetic formulas compiled once and evaluated many times.
//!
//! Formula source parses into an AST at compile time; evaluation walks
//! the tree with caller-supplied variable bindings and a per-formula
//! function registry preloaded with the usual math catalog. All
//! arithmetic is IEEE 754 double precision, so dividing by zero yields
//! an infinity or NaN rather than an error.
//!
//! ```
//! use formulix_rs::{var, Formula};
//!
//! let formula = Formula::compile("min(x, 10) * pi").unwrap();
//! let value = formula.eval(&[var("x", 4)]).unwrap();
//! assert_eq!(value, 4.0 * std::f64::consts::PI);
//! ```

pub mod ast;
pub mod functions;

mod cache;
mod error;
mod formula;
mod guard;
mod registry;
mod vars;

pub use cache::FormulaCache;
pub use error::{CompileError, Error, EvalError, FaultOrigin};
pub use formula::Formula;
pub use registry::{Function, FunctionRegistry, Registered};
pub use vars::{var, Numeric, Variable};

/// Compiles `source` against the built-in math catalog.
pub fn compile(source: &str) -> Result<Formula, CompileError> {
    Formula::compile(source)
}

/// Compiles and evaluates `source` in one step. For repeated evaluation
/// compile once and reuse the [`Formula`].
pub fn evaluate(source: &str, vars: &[Variable]) -> Result<f64, Error> {
    let formula = Formula::compile(source)?;
    Ok(formula.eval(vars)?)
}
