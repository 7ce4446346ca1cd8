//! Framix FrameBuilder
//!
//! Builds a Frame from a slice of records, in two passes:
//! 1. schema discovery: the union of supported fields (column name and type, in first encounter
//!    order) and the row keys (first occurrence wins);
//! 1. population: every row is filled from the record which established it, a column the record
//!    does not provide receives the placeholder of its type.
//!
//! Any failure aborts the construction, no partial Frame is returned.

use std::sync::Arc;

use super::{iip_err, urk_err};
use crate::{
    CoreError, CoreResult, FieldAccessor, Frame, IndexBuilder, MapKey, RecordShape, Series, Value,
    ValueType,
};

// ================================================================================================
// FrameBuilder
// ================================================================================================

/// Frame construction options
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuilder {
    key_field: String,
    capacity: Option<usize>,
    strict_keys: bool,
}

impl FrameBuilder {
    /// `key_field` names the record field holding the row key
    pub fn new<S: Into<String>>(key_field: S) -> Self {
        FrameBuilder {
            key_field: key_field.into(),
            capacity: None,
            strict_keys: false,
        }
    }

    /// minimum capacity reserved by each column, the record count is used if larger
    pub fn capacity(mut self, capacity: usize) -> Self {
        self.capacity = Some(capacity);
        self
    }

    /// when set, a record without a text key fails the construction instead of being keyed by
    /// an empty string
    pub fn strict_keys(mut self, strict_keys: bool) -> Self {
        self.strict_keys = strict_keys;
        self
    }

    pub fn key_field(&self) -> &str {
        &self.key_field
    }

    pub fn build<R: FieldAccessor>(&self, records: &[R]) -> CoreResult<Frame> {
        if self.key_field.is_empty() {
            return Err(iip_err("key field must not be empty"));
        }

        // pass 1
        let mut columns = IndexBuilder::default();
        let mut dtypes = Vec::<ValueType>::new();
        let mut rows = IndexBuilder::with_capacity(records.len());
        let mut sources = Vec::<Vec<(String, Value)>>::with_capacity(records.len());

        for (n, record) in records.iter().enumerate() {
            let fields = record_fields(record.shape())?;
            let mut key = None;

            for (name, value) in fields.iter() {
                if name == &self.key_field && key.is_none() {
                    key = self.read_key(value)?;
                }

                let dtype = match value.value_type() {
                    Some(t) => t,
                    None => {
                        log::trace!(
                            "record {}: field {} of type {} skipped",
                            n,
                            name,
                            value.type_name()
                        );
                        continue;
                    }
                };

                let (pos, inserted) = columns.insert(name);
                if inserted {
                    dtypes.push(dtype);
                } else if dtypes[pos] != dtype {
                    return Err(CoreError::new_type_conflict_error(
                        name.as_str(),
                        dtypes[pos],
                        dtype,
                    ));
                }
            }

            let key = match key {
                Some(k) => k,
                None if self.strict_keys => {
                    return Err(iip_err(format!(
                        "record {} has no text field {:?}",
                        n, self.key_field
                    )));
                }
                None => String::new(),
            };

            if rows.insert(&key).1 {
                sources.push(fields);
            } else {
                log::trace!("record {}: duplicated row key {:?} ignored", n, key);
            }
        }

        // allocation
        let capacity = records.len().max(self.capacity.unwrap_or_default());
        let row_index = Arc::new(rows.build());
        let column_index = columns.build();
        let mut series = column_index
            .keys()
            .zip(dtypes)
            .map(|(name, dtype)| Series::new_empty(dtype, name, row_index.clone(), capacity))
            .collect::<Vec<_>>();

        // pass 2
        for fields in sources {
            let mut filled = vec![false; series.len()];

            for (name, value) in fields {
                if value.is_unsupported() {
                    continue;
                }
                let pos = column_index.lookup_str(&name)?;
                if !filled[pos] {
                    series[pos].append(value)?;
                    filled[pos] = true;
                }
            }

            for (s, _) in series.iter_mut().zip(filled).filter(|(_, f)| !f) {
                s.append_empty();
            }
        }

        log::debug!(
            "frame built from {} records: {} rows, {} columns",
            records.len(),
            row_index.len(),
            column_index.len()
        );

        Ok(Frame::new(column_index, row_index, series)?.with_key_field(self.key_field.as_str()))
    }

    /// row key carried by the key field: text only, an unsupported value counts as absent
    fn read_key(&self, value: &Value) -> CoreResult<Option<String>> {
        match value {
            Value::String(k) => Ok(Some(k.clone())),
            Value::Unsupported(_) => Ok(None),
            v => Err(iip_err(format!(
                "key field {:?} holds a {} value, text expected",
                self.key_field,
                v.type_name()
            ))),
        }
    }
}

/// fields of a record as `(name, value)` pairs, only text map keys are accepted
fn record_fields(shape: RecordShape) -> CoreResult<Vec<(String, Value)>> {
    match shape {
        RecordShape::Struct(fields) => Ok(fields),
        RecordShape::Map(entries) => entries
            .into_iter()
            .map(|(k, v)| match k {
                MapKey::String(k) => Ok((k, v)),
                MapKey::Other(t) => Err(iip_err(format!("map key of type {} is not text", t))),
            })
            .collect(),
        RecordShape::NonTextKeyMap(t) => {
            Err(iip_err(format!("map key of type {} is not text", t)))
        }
        RecordShape::Unsupported(kind) => Err(urk_err(kind)),
    }
}

impl Frame {
    /// Build a Frame from records, rows are keyed by the text field `key_field`.
    ///
    /// `capacity` is a lower bound for the columns' reserved space.
    pub fn from_records<R: FieldAccessor>(
        records: &[R],
        key_field: &str,
        capacity: Option<usize>,
    ) -> CoreResult<Frame> {
        let builder = FrameBuilder {
            capacity,
            ..FrameBuilder::new(key_field)
        };
        builder.build(records)
    }
}
