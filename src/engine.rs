//! Selector engine
//!
//! Owns the compile cache and orchestrates multi-selector evaluation: compile
//! each selector, walk the tree (serially for one selector, one scoped thread
//! per selector for several), concatenate per-selector results in declaration
//! order and optionally deduplicate.

use crate::ast::Selector;
use crate::coerce::FromValue;
use crate::matcher;
use crate::parser;
use crate::task;
use crate::value::Value;
use lru::LruCache;
use std::num::NonZeroUsize;
use std::sync::{Arc, Mutex};
use tracing::{debug, trace};

const DEFAULT_CACHE_SIZE: usize = 256;

/// Options for a single [`Engine::pick`] call.
#[derive(Clone, Copy, Debug, Default)]
pub struct PickOptions {
    /// Deduplicate the final result list by equality, preserving the position
    /// of each first occurrence.
    pub distinct: bool,
}

/// Selector engine with a compile cache.
///
/// Parsing is cheap but hot call sites tend to reuse the same handful of
/// selector strings, so compiled selectors are kept in a small LRU cache
/// keyed by source text.
pub struct Engine {
    cache: Mutex<LruCache<String, Arc<Selector>>>,
}

impl Engine {
    pub fn new() -> Self {
        Self::with_cache_size(NonZeroUsize::new(DEFAULT_CACHE_SIZE).unwrap())
    }

    /// Create an engine with a custom compile-cache capacity.
    pub fn with_cache_size(capacity: NonZeroUsize) -> Self {
        Self {
            cache: Mutex::new(LruCache::new(capacity)),
        }
    }

    /// Parse a selector, consulting the compile cache.
    pub fn compile(&self, selector: &str) -> Arc<Selector> {
        if let Ok(mut cache) = self.cache.lock() {
            if let Some(compiled) = cache.get(selector) {
                return Arc::clone(compiled);
            }
            debug!(selector, "compile cache miss");
            let compiled = Arc::new(parser::parse(selector));
            cache.put(selector.to_string(), Arc::clone(&compiled));
            compiled
        } else {
            // poisoned cache lock: fall back to a one-off parse
            Arc::new(parser::parse(selector))
        }
    }

    /// Evaluate one or more selectors against `root`.
    ///
    /// With zero selectors the result is empty. With one selector the walk
    /// runs synchronously in the calling thread. With several, each selector
    /// runs on its own scoped thread and writes its own slot; slots are
    /// concatenated in selector-declaration order, never completion order.
    ///
    /// Fail-fast: if any worker fails (including a recovered panic) the whole
    /// call returns empty and partial results are discarded. Callers that need
    /// partial results must issue selectors individually.
    pub fn pick<T>(&self, root: &Value, selectors: &[&str], options: PickOptions) -> Vec<T>
    where
        T: FromValue + PartialEq + Send,
    {
        if selectors.is_empty() {
            return Vec::new();
        }

        let results = if selectors.len() == 1 {
            matcher::collect(root, &self.compile(selectors[0]))
        } else {
            let compiled: Vec<Arc<Selector>> =
                selectors.iter().map(|s| self.compile(s)).collect();
            let jobs: Vec<_> = compiled
                .iter()
                .enumerate()
                .map(|(slot, selector)| {
                    let selector = Arc::clone(selector);
                    move || {
                        trace!(slot, "selector worker start");
                        matcher::collect::<T>(root, &selector)
                    }
                })
                .collect();

            match task::join_all(jobs) {
                Ok(slots) => slots.into_iter().flatten().collect(),
                Err(err) => {
                    debug!(error = %err, "selector worker failed, discarding all results");
                    return Vec::new();
                }
            }
        };

        if options.distinct {
            distinct(results)
        } else {
            results
        }
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

/// Stable first-occurrence deduplication by equality.
pub fn distinct<T: PartialEq>(items: Vec<T>) -> Vec<T> {
    let mut out: Vec<T> = Vec::with_capacity(items.len());
    for item in items {
        if !out.contains(&item) {
            out.push(item);
        }
    }
    out
}
