//! Framix Frame
//!
//! This module contains the Frame struct, which stores a collection of Series sharing one row
//! index. A Frame is built in one batch (see `builder.rs`), afterwards only existing cells can be
//! overwritten.
//!
//! Methods:
//! 1. new
//! 1. append
//! 1. column_index
//! 1. row_index
//! 1. columns
//! 1. key_field
//! 1. column
//! 1. get_column_names
//! 1. dtypes
//! 1. fields
//! 1. schema
//! 1. shape
//! 1. width
//! 1. height
//! 1. get
//! 1. set

use std::sync::Arc;

use super::{ims_err, lnm_err};
use crate::{CoreResult, FieldAccessor, FieldInfo, Index, Schema, Series, Value, ValueType};

// ================================================================================================
// Frame
// ================================================================================================

/// Frame
///
/// Columns are ordered as in `column_index`, and every column holds the very same row index
/// instance as the frame.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    column_index: Index,
    row_index: Arc<Index>,
    series: Vec<Series>,
    key_field: Option<String>,
}

impl Frame {
    /// Frame constructor, checks that the parts are consistent:
    /// 1. one series per column, named as its column key
    /// 1. every series shares `row_index` and has one value per row
    pub fn new(column_index: Index, row_index: Arc<Index>, series: Vec<Series>) -> CoreResult<Self> {
        if column_index.len() != series.len() {
            return Err(lnm_err(column_index.len(), series.len()));
        }

        for (i, s) in series.iter().enumerate() {
            let name = column_index.reverse_lookup(i)?;
            if s.name() != name {
                return Err(ims_err(format!(
                    "series {:?} found at the position of column {:?}",
                    s.name(),
                    name
                )));
            }
            if !Arc::ptr_eq(s.index(), &row_index) {
                return Err(ims_err(format!(
                    "series {:?} does not share the frame row index",
                    s.name()
                )));
            }
            if s.len() != row_index.len() {
                return Err(lnm_err(row_index.len(), s.len()));
            }
        }

        Ok(Frame {
            column_index,
            row_index,
            series,
            key_field: None,
        })
    }

    /// set the name of the field the row keys were read from
    pub fn with_key_field<S: Into<String>>(mut self, key_field: S) -> Self {
        self.key_field = Some(key_field.into());
        self
    }

    /// Appending to a built frame is not supported: the call leaves the frame unchanged.
    pub fn append<R: FieldAccessor>(&mut self, records: &[R]) -> CoreResult<()> {
        log::trace!("append of {} records ignored", records.len());
        Ok(())
    }

    pub fn column_index(&self) -> &Index {
        &self.column_index
    }

    /// the row index shared by all columns
    pub fn row_index(&self) -> &Arc<Index> {
        &self.row_index
    }

    pub fn columns(&self) -> &[Series] {
        &self.series
    }

    pub fn key_field(&self) -> Option<&str> {
        self.key_field.as_deref()
    }

    /// position of the key field among the columns, if it is a column
    pub fn key_column_loc(&self) -> Option<usize> {
        self.key_field
            .as_deref()
            .and_then(|k| self.column_index.lookup_str(k).ok())
    }

    /// get a column
    pub fn column(&self, name: &str) -> Option<&Series> {
        let i = self.column_index.lookup_str(name).ok()?;
        self.series.get(i)
    }

    /// get column names
    pub fn get_column_names(&self) -> Vec<&str> {
        self.column_index.keys().collect()
    }

    /// frame dtypes
    pub fn dtypes(&self) -> Vec<ValueType> {
        self.series.iter().map(Series::dtype).collect()
    }

    /// get frame fields info
    pub fn fields(&self) -> Vec<FieldInfo> {
        self.series.iter().map(Series::field).collect()
    }

    pub fn schema(&self) -> Schema {
        Schema::from_field_infos(self.fields())
    }

    /// get shape: (height, width)
    pub fn shape(&self) -> (usize, usize) {
        (self.height(), self.width())
    }

    /// get width
    pub fn width(&self) -> usize {
        self.series.len()
    }

    /// get height
    pub fn height(&self) -> usize {
        self.row_index.len()
    }

    /// get a cell by row key and column name
    pub fn get(&self, row_key: &str, column: &str) -> CoreResult<Value> {
        let i = self.column_index.lookup_str(column)?;
        let s = self
            .series
            .get(i)
            .ok_or_else(|| ims_err(format!("column {:?} has no series", column)))?;
        Ok(s.get_by_key(row_key)?)
    }

    /// overwrite a cell by row key and column name, nothing changes on failure
    pub fn set(&mut self, row_key: &str, column: &str, value: Value) -> CoreResult<()> {
        let i = self.column_index.lookup_str(column)?;
        let s = self
            .series
            .get_mut(i)
            .ok_or_else(|| ims_err(format!("column {:?} has no series", column)))?;
        s.set(row_key, value)
    }
}
