//! Framix Record
//!
//! A record is any caller-supplied row-like value the frame builder can read. It exposes its
//! fields through `FieldAccessor::shape`, either as a struct (named fields) or as a map
//! (keyed entries). Records are only borrowed, and only during construction.
//!
//! Structs get `FieldAccessor` from `#[derive(Record)]`, maps and pointers get it from the
//! blanket impls below.

use std::collections::{BTreeMap, HashMap};
use std::rc::Rc;
use std::sync::Arc;

use crate::{NamedRow, ToValue, Value};

// ================================================================================================
// RecordShape
// ================================================================================================

/// Key of a map-like record. Only text keys can name a column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MapKey {
    String(String),
    // the payload names the key type, e.g. "i64"
    Other(String),
}

impl MapKey {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            MapKey::String(k) => Some(k.as_str()),
            MapKey::Other(_) => None,
        }
    }
}

/// What a record looks like once its fields are read
#[derive(Debug, Clone, PartialEq)]
pub enum RecordShape {
    Struct(Vec<(String, Value)>),
    Map(Vec<(MapKey, Value)>),
    // a map whose key type is not text, rejected even when empty; the payload names the key type
    NonTextKeyMap(String),
    // the payload names the record kind
    Unsupported(String),
}

impl RecordShape {
    /// kind name used in logs and error messages
    pub fn kind(&self) -> &str {
        match self {
            RecordShape::Struct(_) => "struct",
            RecordShape::Map(_) => "map",
            RecordShape::NonTextKeyMap(_) => "map",
            RecordShape::Unsupported(k) => k.as_str(),
        }
    }
}

// ================================================================================================
// FieldAccessor
// ================================================================================================

/// Read access to the fields of a record
pub trait FieldAccessor {
    fn shape(&self) -> RecordShape;
}

impl<T: FieldAccessor + ?Sized> FieldAccessor for &T {
    fn shape(&self) -> RecordShape {
        (**self).shape()
    }
}

impl<T: FieldAccessor + ?Sized> FieldAccessor for Box<T> {
    fn shape(&self) -> RecordShape {
        (**self).shape()
    }
}

impl<T: FieldAccessor + ?Sized> FieldAccessor for Arc<T> {
    fn shape(&self) -> RecordShape {
        (**self).shape()
    }
}

impl<T: FieldAccessor + ?Sized> FieldAccessor for Rc<T> {
    fn shape(&self) -> RecordShape {
        (**self).shape()
    }
}

impl<T: FieldAccessor> FieldAccessor for Option<T> {
    fn shape(&self) -> RecordShape {
        match self {
            Some(r) => r.shape(),
            None => RecordShape::Unsupported("None".to_owned()),
        }
    }
}

impl<V: ToValue> FieldAccessor for BTreeMap<String, V> {
    fn shape(&self) -> RecordShape {
        RecordShape::Map(
            self.iter()
                .map(|(k, v)| (MapKey::String(k.clone()), v.to_value()))
                .collect(),
        )
    }
}

impl<V: ToValue, S> FieldAccessor for HashMap<String, V, S> {
    fn shape(&self) -> RecordShape {
        RecordShape::Map(
            self.iter()
                .map(|(k, v)| (MapKey::String(k.clone()), v.to_value()))
                .collect(),
        )
    }
}

impl<V> FieldAccessor for BTreeMap<i64, V> {
    fn shape(&self) -> RecordShape {
        RecordShape::NonTextKeyMap("i64".to_owned())
    }
}

impl<V, S> FieldAccessor for HashMap<i64, V, S> {
    fn shape(&self) -> RecordShape {
        RecordShape::NonTextKeyMap("i64".to_owned())
    }
}

impl FieldAccessor for NamedRow {
    fn shape(&self) -> RecordShape {
        RecordShape::Map(
            self.data()
                .iter()
                .map(|(k, v)| (MapKey::String(k.clone()), v.clone()))
                .collect(),
        )
    }
}
