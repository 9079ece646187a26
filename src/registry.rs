use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use log::debug;

use crate::functions;
use crate::guard::{self, Caught};

/// Implementation type for registered functions.
///
/// Arguments arrive as a slice; the registry only promises the slice is
/// at least as long as the registered minimum arity. Implementations
/// that read past it are caught by the fault barrier like any other
/// panic.
pub type Function = Arc<dyn Fn(&[f64]) -> f64 + Send + Sync>;

/// A function together with the smallest argument count it accepts.
#[derive(Clone)]
pub struct Registered {
    min_arity: usize,
    func: Function,
}

impl Registered {
    pub fn new(min_arity: usize, func: Function) -> Self {
        Registered { min_arity, func }
    }

    pub fn min_arity(&self) -> usize {
        self.min_arity
    }

    /// Invokes the function behind the fault barrier.
    pub(crate) fn call(&self, args: &[f64]) -> Result<f64, Caught> {
        guard::call_guarded(|| (self.func)(args))
    }
}

impl fmt::Debug for Registered {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registered")
            .field("min_arity", &self.min_arity)
            .finish_non_exhaustive()
    }
}

/// Name-to-function table consulted when a formula is evaluated.
///
/// Each `Formula` owns its registry, so registering on one formula never
/// changes what another formula's calls resolve to.
#[derive(Clone, Debug)]
pub struct FunctionRegistry {
    functions: HashMap<String, Registered>,
}

impl FunctionRegistry {
    /// An empty registry. Formulas compiled against it can only use
    /// functions the caller registers afterwards.
    pub fn new() -> Self {
        FunctionRegistry {
            functions: HashMap::new(),
        }
    }

    /// A registry preloaded with the built-in math catalog.
    pub fn with_defaults() -> Self {
        let mut registry = FunctionRegistry::new();
        functions::register_defaults(&mut registry);
        registry
    }

    /// Adds `func` under `name`, replacing any previous registration of
    /// the same name.
    pub fn register<F>(&mut self, name: impl Into<String>, min_arity: usize, func: F)
    where
        F: Fn(&[f64]) -> f64 + Send + Sync + 'static,
    {
        let name = name.into();
        debug!("registering function '{}' (min arity {})", name, min_arity);
        self.functions
            .insert(name, Registered::new(min_arity, Arc::new(func)));
    }

    pub fn resolve(&self, name: &str) -> Option<&Registered> {
        self.functions.get(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.functions.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.functions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }
}

impl Default for FunctionRegistry {
    fn default() -> Self {
        FunctionRegistry::with_defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_empty() {
        let registry = FunctionRegistry::new();
        assert!(registry.is_empty());
        assert!(registry.resolve("sin").is_none());
    }

    #[test]
    fn test_register_and_resolve() {
        let mut registry = FunctionRegistry::new();
        registry.register("double", 1, |args: &[f64]| args[0] * 2.0);

        let registered = registry.resolve("double").unwrap();
        assert_eq!(registered.min_arity(), 1);
        assert_eq!(registered.call(&[21.0]).unwrap(), 42.0);
    }

    #[test]
    fn test_reregister_overwrites() {
        let mut registry = FunctionRegistry::new();
        registry.register("f", 1, |args: &[f64]| args[0]);
        registry.register("f", 1, |args: &[f64]| -args[0]);

        assert_eq!(registry.len(), 1);
        let registered = registry.resolve("f").unwrap();
        assert_eq!(registered.call(&[3.0]).unwrap(), -3.0);
    }

    #[test]
    fn test_defaults_cover_the_catalog() {
        let registry = FunctionRegistry::with_defaults();
        assert_eq!(registry.len(), 51);

        assert_eq!(registry.resolve("sin").unwrap().min_arity(), 1);
        assert_eq!(registry.resolve("atan2").unwrap().min_arity(), 2);
        assert_eq!(registry.resolve("pow").unwrap().min_arity(), 2);
        assert_eq!(registry.resolve("fma").unwrap().min_arity(), 3);
        // Variadic reductions accept a single argument.
        assert_eq!(registry.resolve("min").unwrap().min_arity(), 1);
        assert_eq!(registry.resolve("max").unwrap().min_arity(), 1);
    }

    #[test]
    fn test_default_trait_matches_with_defaults() {
        let registry = FunctionRegistry::default();
        assert_eq!(registry.len(), FunctionRegistry::with_defaults().len());
    }
}
