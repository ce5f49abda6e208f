// Copyright (c) Chris Gunn.
// Licensed under the MIT license.

// The parsed configuration tree.


use std::fmt;

use hashlink::LinkedHashMap;

use crate::emitter::emit_document;

/// Ordered key/value record. Insertion order is kept for faithful output.
pub type Mapping = LinkedHashMap<String, Document>;

#[derive(Clone, PartialEq, Eq, Debug)]
pub enum Document {
    Mapping(Mapping),
    Sequence(Vec<Document>),
    String(String),
    Integer(i64),
    Boolean(bool),
    Null,
}

/// A leaf value, as produced by the scalar classifier.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum Scalar {
    String(String),
    Integer(i64),
    Boolean(bool),
    Null,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum DocumentKind {
    Mapping,
    Sequence,
    String,
    Integer,
    Boolean,
    Null,
}

impl Document {
    pub fn empty_mapping() -> Document {
        Document::Mapping(Mapping::new())
    }

    pub fn kind(&self) -> DocumentKind {
        match self {
            Document::Mapping(_) => DocumentKind::Mapping,
            Document::Sequence(_) => DocumentKind::Sequence,
            Document::String(_) => DocumentKind::String,
            Document::Integer(_) => DocumentKind::Integer,
            Document::Boolean(_) => DocumentKind::Boolean,
            Document::Null => DocumentKind::Null,
        }
    }

    pub fn is_container(&self) -> bool {
        matches!(self, Document::Mapping(_) | Document::Sequence(_))
    }

    /// Looks up `key` if this is a mapping. Absent keys and non-mapping values both give `None`.
    pub fn get(&self, key: &str) -> Option<&Document> {
        match self {
            Document::Mapping(map) => map.get(key),
            _ => None,
        }
    }

    /// Walks a dotted path such as `items.0.name`. Numeric segments index into sequences.
    pub fn get_path(&self, path: &str) -> Option<&Document> {
        if path.is_empty() {
            return Some(self);
        }

        let mut node = self;
        for segment in path.split('.') {
            node = match node {
                Document::Mapping(map) => map.get(segment)?,
                Document::Sequence(items) => {
                    let index = segment.parse::<usize>().ok()?;
                    items.get(index)?
                }
                _ => return None,
            };
        }
        Some(node)
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Document::String(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Document::Integer(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Document::Boolean(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_mapping(&self) -> Option<&Mapping> {
        match self {
            Document::Mapping(map) => Some(map),
            _ => None,
        }
    }

    pub fn as_sequence(&self) -> Option<&[Document]> {
        match self {
            Document::Sequence(items) => Some(items),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Document::Null)
    }
}

impl Default for Document {
    fn default() -> Self {
        Document::empty_mapping()
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&emit_document(self))
    }
}

impl From<Scalar> for Document {
    fn from(scalar: Scalar) -> Self {
        match scalar {
            Scalar::String(value) => Document::String(value),
            Scalar::Integer(value) => Document::Integer(value),
            Scalar::Boolean(value) => Document::Boolean(value),
            Scalar::Null => Document::Null,
        }
    }
}

impl From<&str> for Document {
    fn from(value: &str) -> Self {
        Document::String(value.to_string())
    }
}

impl From<String> for Document {
    fn from(value: String) -> Self {
        Document::String(value)
    }
}

impl From<i64> for Document {
    fn from(value: i64) -> Self {
        Document::Integer(value)
    }
}

impl From<bool> for Document {
    fn from(value: bool) -> Self {
        Document::Boolean(value)
    }
}

impl From<Vec<Document>> for Document {
    fn from(items: Vec<Document>) -> Self {
        Document::Sequence(items)
    }
}

impl From<Mapping> for Document {
    fn from(map: Mapping) -> Self {
        Document::Mapping(map)
    }
}

impl<K: Into<String>, V: Into<Document>> FromIterator<(K, V)> for Document {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let map = iter.into_iter().map(|(key, value)| (key.into(), value.into())).collect();
        Document::Mapping(map)
    }
}
