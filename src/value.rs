//! Dynamically-typed value tree the matcher walks
//!
//! Any host data is adapted into [`Value`] before matching: scalars, lists,
//! map-like containers and record-like containers (fixed named fields, e.g. a
//! struct). Containers expose an ordered key→value [projection](Value::projection)
//! which is all the matcher ever sees, decoupling it from the source type
//! system. Input is assumed to be an acyclic tree; no cycle detection is
//! performed.

/// A dynamically-typed tree value.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
    List(Vec<Value>),
    /// Map-like container. Entry order is whatever the source produced; the
    /// matcher sorts keys when traversing.
    Map(Vec<(String, Value)>),
    /// Record-like container: a type name plus named fields in declaration
    /// order.
    Record {
        name: String,
        fields: Vec<(String, Value)>,
    },
}

impl Value {
    /// Build a record value from a type name and its fields.
    pub fn record<N, K>(name: N, fields: Vec<(K, Value)>) -> Self
    where
        N: Into<String>,
        K: Into<String>,
    {
        Value::Record {
            name: name.into(),
            fields: fields.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }

    pub fn is_container(&self) -> bool {
        matches!(
            self,
            Value::List(_) | Value::Map(_) | Value::Record { .. }
        )
    }

    /// Look up a direct child by key. List children are addressed by their
    /// decimal index.
    pub fn get(&self, key: &str) -> Option<&Value> {
        match self {
            Value::List(items) => key.parse::<usize>().ok().and_then(|i| items.get(i)),
            Value::Map(entries) | Value::Record { fields: entries, .. } => entries
                .iter()
                .find(|(k, _)| k == key)
                .map(|(_, v)| v),
            _ => None,
        }
    }

    /// The ordered key→value view predicates and the tree walk operate on.
    ///
    /// Lists project their elements keyed by decimal index, in original order
    /// (never reordered). Maps and records project every entry sorted
    /// lexicographically by key, a determinism guarantee, since the source
    /// container's native iteration order is unspecified. Scalars have no
    /// projection.
    pub fn projection(&self) -> Option<Vec<(String, &Value)>> {
        match self {
            Value::List(items) => Some(
                items
                    .iter()
                    .enumerate()
                    .map(|(i, v)| (i.to_string(), v))
                    .collect(),
            ),
            Value::Map(entries) | Value::Record { fields: entries, .. } => {
                let mut view: Vec<(String, &Value)> =
                    entries.iter().map(|(k, v)| (k.clone(), v)).collect();
                view.sort_by(|a, b| a.0.cmp(&b.0));
                Some(view)
            }
            _ => None,
        }
    }

    /// String rendering used by the textual predicate operators. Scalars
    /// render via `Display`; null and containers render empty.
    pub fn render(&self) -> String {
        match self {
            Value::Bool(b) => b.to_string(),
            Value::Int(i) => i.to_string(),
            Value::Float(f) => f.to_string(),
            Value::String(s) => s.clone(),
            _ => String::new(),
        }
    }

    /// Numeric coercion used by the comparison operators: the int/float
    /// family plus numeric strings. Everything else is not coercible.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Int(i) => Some(*i as f64),
            Value::Float(f) => Some(*f),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }

    /// Convert back into JSON. Records become objects (the type name is
    /// dropped); a non-finite float becomes `null`.
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            Value::Null => serde_json::Value::Null,
            Value::Bool(b) => serde_json::Value::Bool(*b),
            Value::Int(i) => serde_json::Value::Number((*i).into()),
            Value::Float(f) => serde_json::Number::from_f64(*f)
                .map(serde_json::Value::Number)
                .unwrap_or(serde_json::Value::Null),
            Value::String(s) => serde_json::Value::String(s.clone()),
            Value::List(items) => {
                serde_json::Value::Array(items.iter().map(Value::to_json).collect())
            }
            Value::Map(entries) | Value::Record { fields: entries, .. } => serde_json::Value::Object(
                entries
                    .iter()
                    .map(|(k, v)| (k.clone(), v.to_json()))
                    .collect(),
            ),
        }
    }
}

impl From<serde_json::Value> for Value {
    fn from(v: serde_json::Value) -> Self {
        match v {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Value::Int(i)
                } else {
                    n.as_f64().map(Value::Float).unwrap_or(Value::Null)
                }
            }
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(items) => {
                Value::List(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(entries) => {
                Value::Map(entries.into_iter().map(|(k, v)| (k, v.into())).collect())
            }
        }
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Int(v as i64)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::String(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::String(v)
    }
}

impl From<Vec<Value>> for Value {
    fn from(v: Vec<Value>) -> Self {
        Value::List(v)
    }
}
