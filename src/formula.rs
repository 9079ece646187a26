use std::collections::HashMap;
use std::f64::consts::{E, PI};

use log::debug;
use rayon::prelude::*;

use crate::ast::{self, Node};
use crate::error::{CompileError, EvalError};
use crate::registry::FunctionRegistry;
use crate::vars::Variable;

// Golden ratio, absent from std's consts.
const PHI: f64 = 1.618033988749894848204586834365638118;

/// Bindings present in every evaluation unless the caller shadows them.
const CONSTANTS: [(&str, f64); 7] = [
    ("π", PI),
    ("pi", PI),
    ("Φ", PHI),
    ("phi", PHI),
    ("e", E),
    ("E", E),
    ("nan", f64::NAN),
];

/// A formula compiled once and evaluated many times.
///
/// Compilation parses the source into an AST and pins down the function
/// registry the formula will use; names are not resolved until each
/// [`eval`](Formula::eval) call. Every formula owns its registry, so
/// [`register`](Formula::register) on one instance never changes what
/// another instance's calls resolve to. Registration borrows the formula
/// mutably while evaluation borrows it shared, which keeps the two from
/// overlapping; a `Formula` can be evaluated from many threads at once.
#[derive(Debug, Clone)]
pub struct Formula {
    source: String,
    root: Node,
    registry: FunctionRegistry,
}

impl Formula {
    /// Compiles `source` against the built-in math catalog.
    pub fn compile(source: &str) -> Result<Formula, CompileError> {
        Formula::compile_with(source, FunctionRegistry::with_defaults())
    }

    /// Compiles `source` against a caller-supplied registry. The formula
    /// takes ownership; later changes go through
    /// [`register`](Formula::register).
    pub fn compile_with(source: &str, registry: FunctionRegistry) -> Result<Formula, CompileError> {
        debug!("compiling formula: {}", source);
        let root = ast::Parser::parse_source(source)?;
        Ok(Formula {
            source: source.to_string(),
            root,
            registry,
        })
    }

    /// Adds or replaces a function in this formula's registry.
    pub fn register<F>(&mut self, name: impl Into<String>, min_arity: usize, func: F)
    where
        F: Fn(&[f64]) -> f64 + Send + Sync + 'static,
    {
        self.registry.register(name, min_arity, func);
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn ast(&self) -> &Node {
        &self.root
    }

    pub fn registry(&self) -> &FunctionRegistry {
        &self.registry
    }

    /// Evaluates the formula with the given variable bindings.
    ///
    /// The environment starts from the reserved constants, then takes
    /// the caller's bindings in order, so a repeated name resolves to
    /// its last occurrence and caller bindings shadow constants. Nodes
    /// are evaluated left to right and the first error wins; for a call
    /// the order is function lookup, arity check, then arguments.
    pub fn eval(&self, vars: &[Variable]) -> Result<f64, EvalError> {
        debug!("evaluating '{}' with {} bindings", self.source, vars.len());
        let mut env: HashMap<&str, f64> = HashMap::with_capacity(CONSTANTS.len() + vars.len());
        for (name, value) in CONSTANTS {
            env.insert(name, value);
        }
        for v in vars {
            env.insert(v.name(), v.value());
        }
        self.eval_node(&self.root, &env)
    }

    /// Like [`eval`](Formula::eval) but panics on error. For call sites
    /// that have already validated their inputs.
    pub fn must_eval(&self, vars: &[Variable]) -> f64 {
        match self.eval(vars) {
            Ok(value) => value,
            Err(err) => panic!("{}", err),
        }
    }

    /// Evaluates the formula once per binding set in parallel. Results
    /// come back in input order, one per bindings entry.
    pub fn eval_batch(&self, bindings: &[Vec<Variable>]) -> Vec<Result<f64, EvalError>> {
        bindings.par_iter().map(|vars| self.eval(vars)).collect()
    }

    fn eval_node(&self, node: &Node, env: &HashMap<&str, f64>) -> Result<f64, EvalError> {
        match node {
            Node::Number(value) => Ok(*value),
            Node::Variable { name, pos } => {
                env.get(name.as_str())
                    .copied()
                    .ok_or_else(|| EvalError::UnknownVariable {
                        name: name.clone(),
                        position: *pos,
                    })
            }
            Node::Binary { op, lhs, rhs } => {
                let lhs = self.eval_node(lhs, env)?;
                let rhs = self.eval_node(rhs, env)?;
                Ok(op.apply(lhs, rhs))
            }
            Node::Call { name, pos, args } => {
                let registered =
                    self.registry
                        .resolve(name)
                        .ok_or_else(|| EvalError::UnknownFunction {
                            name: name.clone(),
                            position: *pos,
                        })?;
                if args.len() < registered.min_arity() {
                    return Err(EvalError::InsufficientArguments {
                        name: name.clone(),
                        position: *pos,
                        actual: args.len(),
                        expected: registered.min_arity(),
                    });
                }
                let mut values = Vec::with_capacity(args.len());
                for arg in args {
                    values.push(self.eval_node(arg, env)?);
                }
                registered
                    .call(&values)
                    .map_err(|caught| EvalError::FunctionFault {
                        name: name.clone(),
                        position: *pos,
                        reason: caught.reason,
                        origin: caught.origin,
                    })
            }
        }
    }
}
