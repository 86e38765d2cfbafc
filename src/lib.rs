//! pickpath: selector engine for heterogeneous in-memory trees
//!
//! A small query DSL for pulling values out of arbitrary, deeply nested data
//! (maps, lists, records) without knowing its exact shape in advance, in the
//! spirit of CSS selectors or JSONPath but over generic in-memory trees.
//!
//! # Architecture Overview
//!
//! ```text
//! Selector String
//!      |
//!   Parser -> Steps (name tests + predicates)
//!      |
//!   Matcher -> raw matches (deterministic traversal order)
//!      |
//!   Coercion -> typed results
//!      |
//!   Orchestrator -> concatenated, optionally deduplicated list
//! ```
//!
//! # Example
//!
//! ```
//! use serde_json::json;
//!
//! let data = json!({
//!     "users": [
//!         { "id": 1, "profile": { "skills": [
//!             { "name": "rust", "level": 9 },
//!             { "name": "sql",  "level": 4 },
//!         ]}},
//!     ],
//! });
//!
//! let names: Vec<String> = pickpath::pick(&data, &["skills [level>5] name"]);
//! assert_eq!(names, vec!["rust"]);
//! ```

pub mod ast;
pub mod coerce;
pub mod engine;
pub mod error;
pub mod lexer;
pub mod matcher;
pub mod parser;
pub mod ser;
pub mod task;
pub mod value;

// Re-export main types
pub use coerce::FromValue;
pub use engine::{distinct, Engine, PickOptions};
pub use error::{Error, Result};
pub use ser::to_value;
pub use value::Value;

use serde::Serialize;
use std::sync::OnceLock;

/// The process-wide engine behind the crate-level convenience functions. The
/// core never touches this; [`Engine`] instances stay fully independent.
fn default_engine() -> &'static Engine {
    static ENGINE: OnceLock<Engine> = OnceLock::new();
    ENGINE.get_or_init(Engine::new)
}

/// Evaluate selectors against any serializable root with the process-wide
/// engine.
///
/// Returns every value reachable via a path matching one of the selectors,
/// coerced to `T`, in selector-declaration order. Empty when no selectors are
/// given or when any concurrent selector worker fails.
pub fn pick<T, V>(root: &V, selectors: &[&str]) -> Vec<T>
where
    T: FromValue + PartialEq + Send,
    V: Serialize + ?Sized,
{
    pick_with(root, selectors, PickOptions::default())
}

/// Like [`pick`], deduplicating the final list while preserving
/// first-occurrence order.
pub fn pick_distinct<T, V>(root: &V, selectors: &[&str]) -> Vec<T>
where
    T: FromValue + PartialEq + Send,
    V: Serialize + ?Sized,
{
    pick_with(root, selectors, PickOptions { distinct: true })
}

/// [`pick`] with explicit options.
pub fn pick_with<T, V>(root: &V, selectors: &[&str], options: PickOptions) -> Vec<T>
where
    T: FromValue + PartialEq + Send,
    V: Serialize + ?Sized,
{
    let root = match ser::to_value(root) {
        Ok(value) => value,
        Err(err) => {
            tracing::debug!(error = %err, "root value failed to serialize");
            return Vec::new();
        }
    };
    default_engine().pick(&root, selectors, options)
}
