//! Response extractors.
//!
//! An [`Extractor`] is a pure function from a parsed json document to a typed value. Extractors
//! are built from a handful of primitives which descend a path of object keys:
//!
//! * [`single`] decodes the value at the end of the path.
//! * [`first`] decodes the first element of the list at the end of the path.
//! * [`list`] maps every element of the list at the end of the path through another extractor.
//!
//! ```
//! use xing_api_rs::domain::XingUser;
//! use xing_api_rs::spec::extract::{list, single, Extractor};
//!
//! let users = list(single::<XingUser>(&["user"]), &["results", "items"]);
//! let document = serde_json::json!({"results": {"items": [{"user": {"id": "1_a"}}, null]}});
//! let users = users.extract(&document).unwrap();
//! assert_eq!(users.len(), 2);
//! assert!(users[1].is_none());
//! ```

use super::error::ExtractionError;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;
use std::fmt::{Display, Formatter};
use std::marker::PhantomData;
use std::sync::Arc;

/// Decodes a typed value out of a json document.
pub trait Extractor: Send + Sync {
    type Output;

    fn extract(&self, document: &Value) -> Result<Self::Output, ExtractionError>;
}

impl<X: Extractor + ?Sized> Extractor for Arc<X> {
    type Output = X::Output;

    fn extract(&self, document: &Value) -> Result<Self::Output, ExtractionError> {
        (**self).extract(document)
    }
}

impl<X: Extractor + ?Sized> Extractor for Box<X> {
    type Output = X::Output;

    fn extract(&self, document: &Value) -> Result<Self::Output, ExtractionError> {
        (**self).extract(document)
    }
}

/// Ordered sequence of object keys.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct FieldPath(Vec<String>);

impl FieldPath {
    pub fn new(segments: &[&str]) -> Self {
        Self(segments.iter().map(|s| s.to_string()).collect())
    }

    /// Walk the path from `document`. A missing key, or a `null` on the way, is reported as
    /// [`ExtractionError::FieldNotFound`].
    pub fn descend<'v>(&self, document: &'v Value) -> Result<&'v Value, ExtractionError> {
        let mut node = document;
        for (depth, segment) in self.0.iter().enumerate() {
            node = match node {
                Value::Object(map) => map.get(segment).ok_or_else(|| {
                    ExtractionError::FieldNotFound {
                        path: self.to_string(),
                    }
                })?,
                Value::Null => {
                    return Err(ExtractionError::FieldNotFound {
                        path: self.to_string(),
                    })
                }
                _ => {
                    return Err(ExtractionError::NotAnObject {
                        path: display_segments(&self.0[..depth]),
                    })
                }
            };
        }

        Ok(node)
    }
}

impl Display for FieldPath {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        display_segments(&self.0).fmt(f)
    }
}

fn display_segments(segments: &[String]) -> String {
    if segments.is_empty() {
        "$".to_string()
    } else {
        segments.join(".")
    }
}

fn decode<T: DeserializeOwned>(node: &Value, path: &FieldPath) -> Result<T, ExtractionError> {
    T::deserialize(node).map_err(|source| {
        if node.is_null() {
            ExtractionError::NullValue {
                path: path.to_string(),
            }
        } else {
            ExtractionError::TypeMismatch {
                path: path.to_string(),
                source,
            }
        }
    })
}

/// See [`single`].
#[derive(Debug)]
pub struct Single<T> {
    path: FieldPath,
    _marker: PhantomData<fn() -> T>,
}

impl<T: DeserializeOwned> Extractor for Single<T> {
    type Output = T;

    fn extract(&self, document: &Value) -> Result<T, ExtractionError> {
        let node = self.path.descend(document)?;
        decode(node, &self.path)
    }
}

/// Decode the value found at `path`. An empty path decodes the whole document.
pub fn single<T: DeserializeOwned>(path: &[&str]) -> Single<T> {
    Single {
        path: FieldPath::new(path),
        _marker: PhantomData,
    }
}

/// Decode the whole document.
pub fn body<T: DeserializeOwned>() -> Single<T> {
    single(&[])
}

/// See [`first`].
#[derive(Debug)]
pub struct First<T> {
    path: FieldPath,
    _marker: PhantomData<fn() -> T>,
}

impl<T: DeserializeOwned> Extractor for First<T> {
    type Output = T;

    fn extract(&self, document: &Value) -> Result<T, ExtractionError> {
        let node = self.path.descend(document)?;
        let Value::Array(items) = node else {
            return Err(ExtractionError::NotAList {
                path: self.path.to_string(),
            });
        };

        match items.first() {
            Some(item) => decode(item, &self.path),
            None => Err(ExtractionError::EmptyResult {
                path: self.path.to_string(),
            }),
        }
    }
}

/// Decode the first element of the list found at `path`. An empty list is an error.
pub fn first<T: DeserializeOwned>(path: &[&str]) -> First<T> {
    First {
        path: FieldPath::new(path),
        _marker: PhantomData,
    }
}

/// See [`list`].
#[derive(Debug)]
pub struct List<X> {
    inner: X,
    path: FieldPath,
}

impl<X: Extractor> Extractor for List<X> {
    type Output = Vec<Option<X::Output>>;

    fn extract(&self, document: &Value) -> Result<Self::Output, ExtractionError> {
        let items = match self.path.descend(document) {
            Ok(Value::Array(items)) => items,
            Ok(Value::Null) => return Ok(Vec::new()),
            Ok(_) => {
                return Err(ExtractionError::NotAList {
                    path: self.path.to_string(),
                })
            }
            Err(e) if e.is_absent() => return Ok(Vec::new()),
            Err(e) => return Err(e),
        };

        items
            .iter()
            .map(|item| match self.inner.extract(item) {
                Ok(v) => Ok(Some(v)),
                Err(e) if e.is_absent() => Ok(None),
                Err(e) => Err(e),
            })
            .collect()
    }
}

/// Map every element of the list at `path` through `inner`, preserving order and length.
///
/// Elements for which `inner` reports an absent value (`null`, missing field) become `None`.
/// An absent list yields an empty output.
pub fn list<X: Extractor>(inner: X, path: &[&str]) -> List<X> {
    List {
        inner,
        path: FieldPath::new(path),
    }
}

/// Shorthand for `list(body::<T>(), path)`.
pub fn list_of<T: DeserializeOwned>(path: &[&str]) -> List<Single<T>> {
    list(body(), path)
}

/// See [`optional`].
#[derive(Debug)]
pub struct Optional<X> {
    inner: X,
}

impl<X: Extractor> Extractor for Optional<X> {
    type Output = Option<X::Output>;

    fn extract(&self, document: &Value) -> Result<Self::Output, ExtractionError> {
        match self.inner.extract(document) {
            Ok(v) => Ok(Some(v)),
            Err(e) if e.is_absent() => Ok(None),
            Err(e) => Err(e),
        }
    }
}

/// Turn an absent value into `None` instead of an error.
pub fn optional<X: Extractor>(inner: X) -> Optional<X> {
    Optional { inner }
}

/// Extractor for calls which have no interesting response body.
#[derive(Debug, Copy, Clone, Default)]
pub struct Discard;

impl Extractor for Discard {
    type Output = ();

    fn extract(&self, _: &Value) -> Result<(), ExtractionError> {
        Ok(())
    }
}

/// Decoded through [`single`] so the raw value can be kept around.
#[derive(Debug, Clone, Deserialize)]
#[serde(transparent)]
pub struct Raw(pub Value);
