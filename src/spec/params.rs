//! Path and query parameter collection.

use super::error::{BuildError, ParamKind};
use crate::domain::UserId;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Everything except the RFC 3986 unreserved characters gets encoded.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Separator used to join multi-value parameters, both in paths and queries.
pub const LIST_SEPARATOR: char = ',';

/// Value of a path or query parameter.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum ParamValue {
    Single(String),
    /// Ordered values, joined with [`LIST_SEPARATOR`] on the wire.
    List(Vec<String>),
}

impl ParamValue {
    /// True for an empty string, an empty list, or a list holding an empty string.
    pub fn is_blank(&self) -> bool {
        match self {
            ParamValue::Single(v) => v.is_empty(),
            ParamValue::List(v) => v.is_empty() || v.iter().any(String::is_empty),
        }
    }

    /// Percent encode every value and join them with [`LIST_SEPARATOR`], preserving order.
    pub fn encode(&self) -> String {
        match self {
            ParamValue::Single(v) => encode_component(v),
            ParamValue::List(values) => {
                let mut out = String::new();
                for (i, v) in values.iter().enumerate() {
                    if i > 0 {
                        out.push(LIST_SEPARATOR);
                    }
                    out.push_str(&encode_component(v));
                }
                out
            }
        }
    }
}

fn encode_component(value: &str) -> String {
    utf8_percent_encode(value, COMPONENT).to_string()
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        ParamValue::Single(value)
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        ParamValue::Single(value.to_string())
    }
}

impl From<&String> for ParamValue {
    fn from(value: &String) -> Self {
        ParamValue::Single(value.clone())
    }
}

impl From<&UserId> for ParamValue {
    fn from(value: &UserId) -> Self {
        ParamValue::Single(value.0.clone())
    }
}

impl From<Vec<String>> for ParamValue {
    fn from(value: Vec<String>) -> Self {
        ParamValue::List(value)
    }
}

impl<T: AsRef<str>> From<&[T]> for ParamValue {
    fn from(value: &[T]) -> Self {
        ParamValue::List(value.iter().map(|v| v.as_ref().to_string()).collect())
    }
}

impl<T: AsRef<str>, const N: usize> From<[T; N]> for ParamValue {
    fn from(value: [T; N]) -> Self {
        ParamValue::List(value.iter().map(|v| v.as_ref().to_string()).collect())
    }
}

impl From<Vec<&str>> for ParamValue {
    fn from(value: Vec<&str>) -> Self {
        ParamValue::List(value.into_iter().map(str::to_string).collect())
    }
}

macro_rules! impl_param_value_display {
    ($($t:ty),*) => {
        $(
            impl From<$t> for ParamValue {
                fn from(value: $t) -> Self {
                    ParamValue::Single(value.to_string())
                }
            }
        )*
    };
}

impl_param_value_display!(bool, u16, u32, u64, usize, i32, i64);

/// Ordered collection of named parameters of a single kind.
#[derive(Debug, Clone)]
pub struct Params {
    kind: ParamKind,
    entries: Vec<(String, ParamValue)>,
}

impl Params {
    pub fn new(kind: ParamKind) -> Self {
        Self {
            kind,
            entries: Vec::new(),
        }
    }

    /// Register `name`. Registering the same name twice is an error.
    pub fn insert(&mut self, name: &str, value: ParamValue) -> Result<(), BuildError> {
        if self.get(name).is_some() {
            return Err(BuildError::DuplicateParameter {
                kind: self.kind,
                name: name.to_string(),
            });
        }

        self.entries.push((name.to_string(), value));
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&ParamValue> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ParamValue)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v))
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Render as `name=value&...` in registration order.
    pub fn to_query_string(&self) -> String {
        let mut out = String::new();
        for (i, (name, value)) in self.entries.iter().enumerate() {
            if i > 0 {
                out.push('&');
            }
            out.push_str(&encode_component(name));
            out.push('=');
            out.push_str(&value.encode());
        }
        out
    }
}
