//! Framix Index
//!
//! A bidirectional mapping between a text key (row key or column name) and a dense position.
//! An `Index` is built once through `IndexBuilder` and never mutated afterwards, so it can be
//! shared (`Arc<Index>`) by a Frame and all of its Series.
//!
//! Methods:
//! 1. from_parts
//! 1. lookup
//! 1. lookup_str
//! 1. reverse_lookup
//! 1. contains
//! 1. keys
//! 1. len

use std::collections::HashMap;

use itertools::Itertools;

use super::{iip_err, inf_err, oor_err, wkt_err};
use crate::{CoreResult, LookupResult, Value};

// ================================================================================================
// Index
// ================================================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Index {
    index: HashMap<String, usize>,
    rindex: Vec<String>,
}

impl Index {
    /// Index constructor from a forward mapping and its reverse sequence.
    ///
    /// Both parts must describe the same keys: `index[rindex[i]] == i` for every position.
    pub fn from_parts(index: HashMap<String, usize>, rindex: Vec<String>) -> CoreResult<Self> {
        if index.len() != rindex.len() {
            return Err(iip_err(format!(
                "index has {} keys but reverse index has {}",
                index.len(),
                rindex.len()
            )));
        }
        if let Some((i, k)) = rindex
            .iter()
            .enumerate()
            .find(|(i, k)| index.get(k.as_str()) != Some(i))
        {
            return Err(iip_err(format!("key {:?} is not mapped to position {}", k, i)));
        }

        Ok(Index { index, rindex })
    }

    /// Index constructor from unique keys, positions follow the iteration order.
    pub fn from_keys<I, S>(keys: I) -> CoreResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut builder = IndexBuilder::default();
        for k in keys {
            let k = k.into();
            if !builder.insert(&k).1 {
                return Err(iip_err(format!("duplicated key {:?}", k)));
            }
        }
        Ok(builder.build())
    }

    /// position of a key, the key must be text
    pub fn lookup(&self, key: &Value) -> LookupResult<usize> {
        match key {
            Value::String(k) => self.lookup_str(k),
            v => Err(wkt_err(&format!("{} ({})", v, v.type_name()))),
        }
    }

    /// position of a text key
    pub fn lookup_str(&self, key: &str) -> LookupResult<usize> {
        self.index.get(key).copied().ok_or_else(|| inf_err(key))
    }

    /// key stored at a position
    pub fn reverse_lookup(&self, position: usize) -> LookupResult<&str> {
        self.rindex
            .get(position)
            .map(String::as_str)
            .ok_or_else(|| oor_err(position, self.len()))
    }

    pub fn contains(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    /// keys in position order
    pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.rindex.iter().map(String::as_str)
    }

    /// number of unique keys
    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }
}

impl std::fmt::Display for Index {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.keys().join(", "))
    }
}

// ================================================================================================
// IndexBuilder
// ================================================================================================

/// Accumulates keys with a first-wins policy: a repeated key keeps its first position.
#[derive(Debug, Default)]
pub struct IndexBuilder {
    index: HashMap<String, usize>,
    rindex: Vec<String>,
}

impl IndexBuilder {
    pub fn with_capacity(capacity: usize) -> Self {
        IndexBuilder {
            index: HashMap::with_capacity(capacity),
            rindex: Vec::with_capacity(capacity),
        }
    }

    /// insert a key, returns its position and whether it was newly inserted
    pub fn insert(&mut self, key: &str) -> (usize, bool) {
        if let Some(&i) = self.index.get(key) {
            return (i, false);
        }
        let i = self.rindex.len();
        self.index.insert(key.to_owned(), i);
        self.rindex.push(key.to_owned());
        (i, true)
    }

    pub fn position(&self, key: &str) -> Option<usize> {
        self.index.get(key).copied()
    }

    pub fn len(&self) -> usize {
        self.rindex.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rindex.is_empty()
    }

    pub fn build(self) -> Index {
        Index {
            index: self.index,
            rindex: self.rindex,
        }
    }
}

#[cfg(test)]
mod test_index {

    use super::*;
    use crate::{value, LookupError};

    fn abc() -> Index {
        Index::from_keys(["a", "b", "c"]).unwrap()
    }

    #[test]
    fn lookup_success() {
        let idx = abc();

        assert_eq!(idx.len(), 3);
        assert_eq!(idx.lookup(&value!("b")), Ok(1));
        assert_eq!(idx.lookup_str("c"), Ok(2));
        assert_eq!(idx.reverse_lookup(0), Ok("a"));
        assert_eq!(idx.keys().collect::<Vec<_>>(), vec!["a", "b", "c"]);
        assert_eq!(idx.to_string(), "[a, b, c]");

        for i in 0..idx.len() {
            let k = idx.reverse_lookup(i).unwrap();
            assert_eq!(idx.lookup_str(k), Ok(i));
        }
    }

    #[test]
    fn lookup_failure() {
        let idx = abc();

        assert_eq!(
            idx.lookup(&value!("z")),
            Err(LookupError::KeyNotFound("z".to_owned()))
        );
        assert!(matches!(
            idx.lookup(&value!(1i64)),
            Err(LookupError::WrongKeyType(_))
        ));
        assert_eq!(
            idx.reverse_lookup(3),
            Err(LookupError::PositionOutOfRange(3, 3))
        );
    }

    #[test]
    fn builder_first_wins() {
        let mut b = IndexBuilder::with_capacity(4);
        assert_eq!(b.insert("a"), (0, true));
        assert_eq!(b.insert("b"), (1, true));
        assert_eq!(b.insert("a"), (0, false));
        assert_eq!(b.insert("c"), (2, true));

        let idx = b.build();
        assert_eq!(idx.len(), 3);
        assert_eq!(idx.lookup_str("c"), Ok(2));
    }

    #[test]
    fn from_parts_validation() {
        let index = HashMap::from([("a".to_owned(), 0), ("b".to_owned(), 1)]);
        let ok = Index::from_parts(index.clone(), vec!["a".to_owned(), "b".to_owned()]);
        assert!(ok.is_ok());

        let swapped = Index::from_parts(index.clone(), vec!["b".to_owned(), "a".to_owned()]);
        assert!(swapped.is_err());

        let short = Index::from_parts(index, vec!["a".to_owned()]);
        assert!(short.is_err());

        assert!(Index::from_keys(["a", "a"]).is_err());
    }
}
