//! Property values and type tags

use crate::error::{ConfError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Declared type of a property
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PropertyKind {
    /// Signed integer
    Int,
    /// Boolean flag
    Bool,
    /// String
    Str,
    /// Homogeneous list (e.g. file collections)
    List,
}

impl PropertyKind {
    /// Tag as printed next to each declared default
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Int => "int",
            Self::Bool => "bool",
            Self::Str => "str",
            Self::List => "list",
        }
    }
}

impl fmt::Display for PropertyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A property value
///
/// Serializes untagged, so JSON documents carry plain numbers, booleans,
/// strings and arrays.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PropertyValue {
    /// Boolean value
    Bool(bool),
    /// Integer value
    Int(i64),
    /// String value
    Str(String),
    /// List value
    List(Vec<PropertyValue>),
}

impl PropertyValue {
    /// Get the type tag of this value
    pub fn kind(&self) -> PropertyKind {
        match self {
            Self::Int(_) => PropertyKind::Int,
            Self::Bool(_) => PropertyKind::Bool,
            Self::Str(_) => PropertyKind::Str,
            Self::List(_) => PropertyKind::List,
        }
    }

    /// Empty list
    pub fn empty_list() -> Self {
        Self::List(Vec::new())
    }

    /// Convert a JSON value, rejecting floats, nulls and objects
    pub fn from_json(value: &serde_json::Value) -> Result<Self> {
        use serde_json::Value;

        match value {
            Value::Bool(b) => Ok(Self::Bool(*b)),
            Value::Number(n) => n
                .as_i64()
                .map(Self::Int)
                .ok_or_else(|| ConfError::InvalidValue(format!("non-integer number {}", n))),
            Value::String(s) => Ok(Self::Str(s.clone())),
            Value::Array(items) => items
                .iter()
                .map(Self::from_json)
                .collect::<Result<Vec<_>>>()
                .map(Self::List),
            Value::Null => Err(ConfError::InvalidValue("null".to_string())),
            Value::Object(_) => Err(ConfError::InvalidValue("object".to_string())),
        }
    }

    /// Integer payload, if any
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(v) => Some(*v),
            _ => None,
        }
    }

    /// List payload, if any
    pub fn as_list(&self) -> Option<&[PropertyValue]> {
        match self {
            Self::List(v) => Some(v),
            _ => None,
        }
    }
}

impl fmt::Display for PropertyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(v) => write!(f, "{}", v),
            Self::Bool(true) => f.write_str("True"),
            Self::Bool(false) => f.write_str("False"),
            Self::Str(s) => write!(f, "'{}'", s),
            Self::List(items) if items.is_empty() => f.write_str("[  ]"),
            Self::List(items) => {
                f.write_str("[ ")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                f.write_str(" ]")
            }
        }
    }
}

impl From<i64> for PropertyValue {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<i32> for PropertyValue {
    fn from(v: i32) -> Self {
        Self::Int(v as i64)
    }
}

impl From<bool> for PropertyValue {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<&str> for PropertyValue {
    fn from(v: &str) -> Self {
        Self::Str(v.to_string())
    }
}

impl From<String> for PropertyValue {
    fn from(v: String) -> Self {
        Self::Str(v)
    }
}

impl<T: Into<PropertyValue>> From<Vec<T>> for PropertyValue {
    fn from(items: Vec<T>) -> Self {
        Self::List(items.into_iter().map(Into::into).collect())
    }
}
