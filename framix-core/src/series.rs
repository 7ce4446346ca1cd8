//! Framix Series
//!
//! This module contains the Series enum, a named column of same-typed values which shares its
//! row index with the other columns of a Frame.
//!
//! A Series never owns its row index exclusively and never mutates it: after construction, a
//! write can only overwrite the slot of an existing key.
//!
//! Methods:
//! 1. new_empty
//! 1. from_values
//! 1. name
//! 1. index
//! 1. dtype
//! 1. field
//! 1. len
//! 1. is_empty
//! 1. get
//! 1. get_by_key
//! 1. append
//! 1. append_empty
//! 1. set
//! 1. as_typed
//! 1. as_typed_mut
//! 1. iter

use std::fmt::Debug;
use std::sync::Arc;

use super::{impl_series_element, lnm_err, oor_err, s_dispatch, tms_err, Stepper};
use crate::{CoreResult, FieldInfo, Index, LookupResult, Value, ValueType};

// ================================================================================================
// SeriesElement
// ================================================================================================

/// A Rust scalar which can be stored in a Series.
pub trait SeriesElement: Clone + Debug + PartialEq + Send + Sync + 'static {
    /// the Series variant holding this element
    const DTYPE: ValueType;

    /// placeholder for a record which does not provide the field
    fn empty() -> Self;

    /// unwrap a `Value` of the matching variant, hands the value back otherwise
    fn from_value(value: Value) -> Result<Self, Value>;

    fn as_value(&self) -> Value;

    fn into_series(s: TypedSeries<Self>) -> Series;

    fn try_series_ref(s: &Series) -> Option<&TypedSeries<Self>>;

    fn try_series_mut(s: &mut Series) -> Option<&mut TypedSeries<Self>>;
}

impl_series_element!(String, String, String::new());
impl_series_element!(i64, I64, 0);
impl_series_element!(f64, F64, f64::NAN);

// ================================================================================================
// TypedSeries
// ================================================================================================

/// A named buffer of `T`, positioned by a shared row index.
#[derive(Clone, PartialEq)]
pub struct TypedSeries<T> {
    name: String,
    index: Arc<Index>,
    data: Vec<T>,
}

pub type SeriesS = TypedSeries<String>;
pub type SeriesI = TypedSeries<i64>;
pub type SeriesF = TypedSeries<f64>;

impl<T: SeriesElement> TypedSeries<T> {
    /// empty series
    pub fn new<S: Into<String>>(name: S, index: Arc<Index>) -> Self {
        Self::with_capacity(name, index, 0)
    }

    /// empty series with a reserved buffer
    pub fn with_capacity<S: Into<String>>(name: S, index: Arc<Index>, capacity: usize) -> Self {
        TypedSeries {
            name: name.into(),
            index,
            data: Vec::with_capacity(capacity),
        }
    }

    /// series from a complete buffer, whose length must match the row index
    pub fn from_vec<S: Into<String>>(name: S, index: Arc<Index>, data: Vec<T>) -> CoreResult<Self> {
        if data.len() != index.len() {
            return Err(lnm_err(index.len(), data.len()));
        }
        Ok(TypedSeries {
            name: name.into(),
            index,
            data,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// the shared row index
    pub fn index(&self) -> &Arc<Index> {
        &self.index
    }

    pub fn data(&self) -> &[T] {
        &self.data
    }

    pub fn dtype(&self) -> ValueType {
        T::DTYPE
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.data.capacity()
    }

    pub fn get(&self, position: usize) -> Option<&T> {
        self.data.get(position)
    }

    pub fn get_by_key(&self, key: &str) -> LookupResult<&T> {
        let i = self.index.lookup_str(key)?;
        self.data.get(i).ok_or_else(|| oor_err(i, self.data.len()))
    }

    pub fn push(&mut self, value: T) {
        self.data.push(value);
    }

    pub fn append_empty(&mut self) {
        self.data.push(T::empty());
    }

    /// Set updates the value associated with a given key. If the key does not exist it returns
    /// an error, and the call has no effect: a write never creates a row.
    pub fn set(&mut self, key: &str, value: T) -> LookupResult<()> {
        let i = self.index.lookup_str(key)?;
        let len = self.data.len();
        let slot = self.data.get_mut(i).ok_or_else(|| oor_err(i, len))?;
        *slot = value;
        Ok(())
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }
}

impl<T: Debug> Debug for TypedSeries<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Series")
            .field("name", &self.name)
            .field("rows", &self.index.len())
            .field("data", &self.data)
            .finish()
    }
}

// ================================================================================================
// Series
// ================================================================================================

/// Series is a column of a Frame, one variant per storable scalar kind.
#[derive(Debug, Clone, PartialEq)]
pub enum Series {
    String(SeriesS),
    I64(SeriesI),
    F64(SeriesF),
}

impl Series {
    /// new empty Series of a given type, with a reserved buffer
    pub fn new_empty<S>(dtype: ValueType, name: S, index: Arc<Index>, capacity: usize) -> Self
    where
        S: Into<String>,
    {
        match dtype {
            ValueType::String => Series::String(TypedSeries::with_capacity(name, index, capacity)),
            ValueType::I64 => Series::I64(TypedSeries::with_capacity(name, index, capacity)),
            ValueType::F64 => Series::F64(TypedSeries::with_capacity(name, index, capacity)),
        }
    }

    /// new Series from a complete buffer, its length must match the row index
    pub fn from_values<S, T>(name: S, index: Arc<Index>, values: Vec<T>) -> CoreResult<Self>
    where
        S: Into<String>,
        T: SeriesElement,
    {
        Ok(T::into_series(TypedSeries::from_vec(name, index, values)?))
    }

    pub fn name(&self) -> &str {
        s_dispatch!(self, s => s.name())
    }

    /// the shared row index
    pub fn index(&self) -> &Arc<Index> {
        s_dispatch!(self, s => s.index())
    }

    pub fn dtype(&self) -> ValueType {
        s_dispatch!(self, s => s.dtype())
    }

    pub fn field(&self) -> FieldInfo {
        FieldInfo::new(self.name(), self.dtype())
    }

    pub fn len(&self) -> usize {
        s_dispatch!(self, s => s.len())
    }

    pub fn is_empty(&self) -> bool {
        s_dispatch!(self, s => s.is_empty())
    }

    /// get a cloned value by position
    pub fn get(&self, position: usize) -> LookupResult<Value> {
        let value = s_dispatch!(self, s => s.get(position).map(SeriesElement::as_value));
        value.ok_or_else(|| oor_err(position, self.len()))
    }

    /// get a cloned value by row key
    pub fn get_by_key(&self, key: &str) -> LookupResult<Value> {
        s_dispatch!(self, s => s.get_by_key(key).map(SeriesElement::as_value))
    }

    /// push a value at the end of the series, the value must match the series type
    pub fn append(&mut self, value: Value) -> CoreResult<()> {
        let dtype = self.dtype();
        match (self, value) {
            (Series::String(s), Value::String(v)) => s.push(v),
            (Series::I64(s), Value::I64(v)) => s.push(v),
            (Series::F64(s), Value::F64(v)) => s.push(v),
            (_, v) => return Err(tms_err(dtype, v.type_name())),
        }
        Ok(())
    }

    /// push the type's placeholder: `NaN`, `0` or an empty string
    pub fn append_empty(&mut self) {
        s_dispatch!(self, s => s.append_empty())
    }

    /// overwrite the value of an existing row, nothing changes on failure
    pub fn set(&mut self, key: &str, value: Value) -> CoreResult<()> {
        let dtype = self.dtype();
        match (self, value) {
            (Series::String(s), Value::String(v)) => s.set(key, v)?,
            (Series::I64(s), Value::I64(v)) => s.set(key, v)?,
            (Series::F64(s), Value::F64(v)) => s.set(key, v)?,
            (_, v) => return Err(tms_err(dtype, v.type_name())),
        }
        Ok(())
    }

    /// typed view, `None` if `T` is not the series type
    pub fn as_typed<T: SeriesElement>(&self) -> Option<&TypedSeries<T>> {
        T::try_series_ref(self)
    }

    pub fn as_typed_mut<T: SeriesElement>(&mut self) -> Option<&mut TypedSeries<T>> {
        T::try_series_mut(self)
    }

    pub fn iter(&self) -> SeriesIterator<'_> {
        self.into_iter()
    }
}

impl<T: SeriesElement> From<TypedSeries<T>> for Series {
    fn from(s: TypedSeries<T>) -> Self {
        T::into_series(s)
    }
}

// ================================================================================================
// IntoIterator impls
// ================================================================================================

pub struct SeriesIterator<'a> {
    series: &'a Series,
    stepper: Stepper,
}

impl<'a> Iterator for SeriesIterator<'a> {
    type Item = Value;

    fn next(&mut self) -> Option<Self::Item> {
        if self.stepper.exhausted() {
            None
        } else {
            let res = self.series.get(self.stepper.step).ok();
            self.stepper.forward();
            res
        }
    }
}

impl<'a> IntoIterator for &'a Series {
    type Item = Value;
    type IntoIter = SeriesIterator<'a>;

    fn into_iter(self) -> Self::IntoIter {
        SeriesIterator {
            series: self,
            stepper: Stepper::new(self.len()),
        }
    }
}

#[cfg(test)]
mod test_series {

    use super::*;
    use crate::{series, value, CoreError, LookupError};

    fn row_index() -> Arc<Index> {
        Arc::new(Index::from_keys(["a", "b", "c"]).unwrap())
    }

    #[test]
    fn series_new_success() {
        let idx = row_index();

        let s = series!(idx.clone(); "ValF" => vec![1.0, 2.0, 3.0]).unwrap();
        assert_eq!(s.dtype(), ValueType::F64);
        assert_eq!(s.name(), "ValF");
        assert_eq!(s.len(), 3);
        assert!(Arc::ptr_eq(s.index(), &idx));

        let s = series!(idx.clone(); vec![1i64, 2]);
        assert_eq!(s, Err(CoreError::LengthMismatch(3, 2)));

        let s = Series::new_empty(ValueType::String, "Name", idx, 8);
        assert!(s.is_empty());
        assert!(s.as_typed::<String>().unwrap().capacity() >= 8);
    }

    #[test]
    fn series_append_success() {
        let idx = row_index();
        let mut s = Series::new_empty(ValueType::I64, "ValI", idx, 3);

        s.append(value!(42i64)).unwrap();
        s.append_empty();
        assert_eq!(s.len(), 2);
        assert_eq!(s.get(1), Ok(value!(0i64)));

        let res = s.append(value!("42"));
        assert_eq!(
            res,
            Err(CoreError::TypeMismatch {
                expected: ValueType::I64,
                found: "String".to_owned()
            })
        );
        assert_eq!(s.len(), 2);
    }

    #[test]
    fn series_empty_placeholders() {
        let idx = row_index();
        let mut f = Series::new_empty(ValueType::F64, "f", idx.clone(), 1);
        let mut i = Series::new_empty(ValueType::I64, "i", idx.clone(), 1);
        let mut s = Series::new_empty(ValueType::String, "s", idx, 1);
        f.append_empty();
        i.append_empty();
        s.append_empty();

        assert!(f.as_typed::<f64>().unwrap().data()[0].is_nan());
        assert_eq!(i.as_typed::<i64>().unwrap().data(), &[0]);
        assert_eq!(s.as_typed::<String>().unwrap().data(), &[String::new()]);
    }

    #[test]
    fn series_set_success() {
        let idx = row_index();
        let mut s = series!(idx; "ValI" => vec![1i64, 2, 3]).unwrap();

        s.set("b", value!(20i64)).unwrap();
        assert_eq!(s.get_by_key("b"), Ok(value!(20i64)));

        let typed = s.as_typed_mut::<i64>().unwrap();
        typed.set("c", 30).unwrap();
        assert_eq!(typed.data(), &[1, 20, 30]);
    }

    #[test]
    fn series_set_failure_leaves_data_unchanged() {
        let idx = row_index();
        let mut s = series!(idx; "ValF" => vec![1.0, 2.0, 3.0]).unwrap();
        let before = s.clone();

        let res = s.set("z", value!(9.0));
        assert_eq!(
            res,
            Err(CoreError::Lookup(LookupError::KeyNotFound("z".to_owned())))
        );
        assert_eq!(s, before);

        let res = s.set("a", value!(9i64));
        assert!(matches!(res, Err(CoreError::TypeMismatch { .. })));
        assert_eq!(s, before);
        assert_eq!(s.len(), 3);
    }

    #[test]
    fn series_iteration_success() {
        let idx = row_index();
        let s = series!(idx; "Name" => vec!["x".to_owned(), "y".to_owned(), "z".to_owned()])
            .unwrap();
        let mut iter = s.iter();

        assert_eq!(iter.next(), Some(value!("x")));
        assert_eq!(iter.next(), Some(value!("y")));
        assert_eq!(iter.next(), Some(value!("z")));
        assert!(iter.next().is_none());

        assert!(s.as_typed::<i64>().is_none());
    }
}
