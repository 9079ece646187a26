use std::num::NonZeroUsize;
use std::sync::Arc;

use log::debug;
use lru::LruCache;

use crate::error::CompileError;
use crate::formula::Formula;
use crate::registry::FunctionRegistry;

/// An LRU cache of compiled formulas keyed by source text.
///
/// Useful when formula strings arrive from outside (user input, stored
/// rules) and repeats are common. Cached formulas are handed out as
/// `Arc`s, so a hit costs a pointer clone instead of a recompile and
/// evaluation can proceed on other threads while the cache moves on.
pub struct FormulaCache {
    base: FunctionRegistry,
    cache: LruCache<String, Arc<Formula>>,
}

impl FormulaCache {
    /// A cache holding at most `capacity` formulas, compiled against the
    /// built-in math catalog.
    ///
    /// # Panics
    /// Panics if `capacity` is 0.
    pub fn new(capacity: usize) -> Self {
        FormulaCache::with_registry(capacity, FunctionRegistry::with_defaults())
    }

    /// A cache whose formulas compile against a copy of `base`.
    ///
    /// # Panics
    /// Panics if `capacity` is 0.
    pub fn with_registry(capacity: usize, base: FunctionRegistry) -> Self {
        let capacity = NonZeroUsize::new(capacity).expect("cache capacity must be greater than 0");
        FormulaCache {
            base,
            cache: LruCache::new(capacity),
        }
    }

    /// Returns the cached formula for `source`, compiling and inserting
    /// it on a miss. Compile errors are returned without touching the
    /// cache.
    pub fn get_or_compile(&mut self, source: &str) -> Result<Arc<Formula>, CompileError> {
        if let Some(formula) = self.cache.get(source) {
            debug!("formula cache hit: {}", source);
            return Ok(Arc::clone(formula));
        }
        debug!("formula cache miss: {}", source);
        let formula = Arc::new(Formula::compile_with(source, self.base.clone())?);
        self.cache.put(source.to_string(), Arc::clone(&formula));
        Ok(formula)
    }

    /// Adds or replaces a function in the base registry. Every cached
    /// formula is dropped because it was compiled against the old
    /// registry; outstanding `Arc`s keep evaluating with what they have.
    pub fn register<F>(&mut self, name: impl Into<String>, min_arity: usize, func: F)
    where
        F: Fn(&[f64]) -> f64 + Send + Sync + 'static,
    {
        self.base.register(name, min_arity, func);
        self.cache.clear();
    }

    pub fn len(&self) -> usize {
        self.cache.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }
}
