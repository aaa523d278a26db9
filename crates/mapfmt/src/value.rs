//! The value model for bindings and rendered values.
//!
//! Rather than open-ended runtime reflection, the formatter works over a
//! closed tagged [`Value`] type. Callers (or the [`serde_json::Value`]
//! adapter) convert native data into this sum type once; the renderer is
//! then a pure match over a known set of shapes.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// A zero-argument callable binding. Invoked at render time; its results are
/// rendered as if they were the binding itself.
pub type CallableFn = Arc<dyn Fn() -> Vec<Value> + Send + Sync>;

/// A dynamic value that can be bound to a directive key.
///
/// `Map` and `Record` double as binding sources: a `Map` provides its
/// text-keyed entries, a `Record` its named fields. As directive *values*
/// both are unsupported and render as empty text (or raise in strict mode).
#[derive(Clone)]
pub enum Value {
    /// The absence of a value.
    Null,
    /// A text value, rendered as-is.
    Text(String),
    /// A signed integer.
    Int(i64),
    /// An unsigned integer.
    Uint(u64),
    /// A floating point number.
    Float(f64),
    /// A boolean, rendered as `true` / `false`.
    Bool(bool),
    /// A single code point, rendered as its numeric value (`'A'` → `65`).
    CodePoint(char),
    /// A pointer: dereferenced transparently, `None` behaves as null.
    Pointer(Option<Box<Value>>),
    /// An ordered sequence of values.
    Seq(Vec<Value>),
    /// A mapping with arbitrarily-typed keys. Only text keys can provide
    /// bindings; anything else invalidates the mapping as a source.
    Map(Vec<(Value, Value)>),
    /// A record with named fields, one level deep as a binding source.
    Record(Vec<(String, Value)>),
    /// A zero-argument callable.
    Callable(CallableFn),
}

impl Value {
    /// Builds a mapping value from key/value pairs, preserving order.
    pub fn map<K, V, I>(entries: I) -> Self
    where
        K: Into<Value>,
        V: Into<Value>,
        I: IntoIterator<Item = (K, V)>,
    {
        Self::Map(
            entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    /// Builds a record value from named fields, preserving order.
    pub fn record<K, V, I>(fields: I) -> Self
    where
        K: Into<String>,
        V: Into<Value>,
        I: IntoIterator<Item = (K, V)>,
    {
        Self::Record(
            fields
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    /// Builds a sequence value.
    pub fn seq<V, I>(items: I) -> Self
    where
        V: Into<Value>,
        I: IntoIterator<Item = V>,
    {
        Self::Seq(items.into_iter().map(Into::into).collect())
    }

    /// Wraps a zero-argument function as a callable value.
    pub fn callable<F>(f: F) -> Self
    where
        F: Fn() -> Vec<Value> + Send + Sync + 'static,
    {
        Self::Callable(Arc::new(f))
    }

    /// Builds a pointer to the given value.
    pub fn pointer(value: impl Into<Value>) -> Self {
        Self::Pointer(Some(Box::new(value.into())))
    }

    /// Builds a nil pointer. As a binding source it provides no keys; as a
    /// value it renders as empty text.
    pub fn null_pointer() -> Self {
        Self::Pointer(None)
    }

    /// A short name for this value's kind, used in diagnostics.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Text(_) => "text",
            Self::Int(_) => "integer",
            Self::Uint(_) => "unsigned",
            Self::Float(_) => "float",
            Self::Bool(_) => "boolean",
            Self::CodePoint(_) => "code point",
            Self::Pointer(_) => "pointer",
            Self::Seq(_) => "sequence",
            Self::Map(_) => "mapping",
            Self::Record(_) => "record",
            Self::Callable(_) => "callable",
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => write!(f, "Null"),
            Self::Text(s) => f.debug_tuple("Text").field(s).finish(),
            Self::Int(i) => f.debug_tuple("Int").field(i).finish(),
            Self::Uint(u) => f.debug_tuple("Uint").field(u).finish(),
            Self::Float(x) => f.debug_tuple("Float").field(x).finish(),
            Self::Bool(b) => f.debug_tuple("Bool").field(b).finish(),
            Self::CodePoint(c) => f.debug_tuple("CodePoint").field(c).finish(),
            Self::Pointer(p) => f.debug_tuple("Pointer").field(p).finish(),
            Self::Seq(items) => f.debug_tuple("Seq").field(items).finish(),
            Self::Map(entries) => f.debug_tuple("Map").field(entries).finish(),
            Self::Record(fields) => f.debug_tuple("Record").field(fields).finish(),
            Self::Callable(_) => write!(f, "Callable(..)"),
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Null, Self::Null) => true,
            (Self::Text(a), Self::Text(b)) => a == b,
            (Self::Int(a), Self::Int(b)) => a == b,
            (Self::Uint(a), Self::Uint(b)) => a == b,
            (Self::Float(a), Self::Float(b)) => a == b,
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::CodePoint(a), Self::CodePoint(b)) => a == b,
            (Self::Pointer(a), Self::Pointer(b)) => a == b,
            (Self::Seq(a), Self::Seq(b)) => a == b,
            (Self::Map(a), Self::Map(b)) => a == b,
            (Self::Record(a), Self::Record(b)) => a == b,
            (Self::Callable(a), Self::Callable(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

// -- From implementations --

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Self::Int(i64::from(i))
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Self::Int(i)
    }
}

impl From<u32> for Value {
    fn from(u: u32) -> Self {
        Self::Uint(u64::from(u))
    }
}

impl From<u64> for Value {
    fn from(u: u64) -> Self {
        Self::Uint(u)
    }
}

impl From<usize> for Value {
    fn from(u: usize) -> Self {
        Self::Uint(u as u64)
    }
}

impl From<f32> for Value {
    fn from(x: f32) -> Self {
        Self::Float(f64::from(x))
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Self::Float(x)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<char> for Value {
    fn from(c: char) -> Self {
        Self::CodePoint(c)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(v: Vec<T>) -> Self {
        Self::Seq(v.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(o: Option<T>) -> Self {
        match o {
            Some(v) => v.into(),
            None => Self::Null,
        }
    }
}

impl<T: Into<Value>> From<HashMap<String, T>> for Value {
    fn from(m: HashMap<String, T>) -> Self {
        Self::Map(
            m.into_iter()
                .map(|(k, v)| (Self::Text(k), v.into()))
                .collect(),
        )
    }
}

impl From<serde_json::Value> for Value {
    fn from(v: serde_json::Value) -> Self {
        match v {
            serde_json::Value::Null => Self::Null,
            serde_json::Value::Bool(b) => Self::Bool(b),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Self::Int(i)
                } else if let Some(u) = n.as_u64() {
                    Self::Uint(u)
                } else if let Some(x) = n.as_f64() {
                    Self::Float(x)
                } else {
                    Self::Null
                }
            }
            serde_json::Value::String(s) => Self::Text(s),
            serde_json::Value::Array(arr) => {
                Self::Seq(arr.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(map) => Self::Map(
                map.into_iter()
                    .map(|(k, v)| (Self::Text(k), Value::from(v)))
                    .collect(),
            ),
        }
    }
}
