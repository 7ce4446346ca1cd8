//! Framix core macros
//!
//! This module contains macros used by the Framix core:
//! 1. impl_value_from
//! 1. impl_try_from_value
//! 1. impl_unsupported_value
//! 1. impl_series_element
//!
//! and the exported helpers `value!`, `date!`, `time!`, `datetime!`, `series!` and `records!`.

/// Type conversion: standard type into Value. Used in `value.rs`.
///
/// Equivalent to:
///
/// ```rust,ignore
/// impl From<i64> for Value {
///     fn from(v: i64) -> Self {
///         Value::I64(v)
///     }
/// }
/// ```
macro_rules! impl_value_from {
    ($ftype:ty, $val_var:ident) => {
        impl From<$ftype> for $crate::Value {
            fn from(v: $ftype) -> Self {
                $crate::Value::$val_var(v)
            }
        }
    };
}

pub(crate) use impl_value_from;

/// Type conversion: Value try_into standard type. Used in `value.rs`.
///
/// Equivalent to:
///
/// ```rust,ignore
/// impl TryFrom<Value> for i64 {
///     type Error = CoreError;
///     fn try_from(value: Value) -> Result<Self, Self::Error> {
///         match value {
///             Value::I64(v) => Ok(v),
///             _ => Err(tms_err(ValueType::I64, value.type_name())),
///         }
///     }
/// }
/// ```
macro_rules! impl_try_from_value {
    ($val_var:ident, $ftype:ty) => {
        impl TryFrom<$crate::Value> for $ftype {
            type Error = $crate::CoreError;

            fn try_from(value: $crate::Value) -> Result<Self, Self::Error> {
                match value {
                    $crate::Value::$val_var(v) => Ok(v),
                    _ => Err($crate::util::tms_err(
                        $crate::ValueType::$val_var,
                        value.type_name(),
                    )),
                }
            }
        }
    };
}

pub(crate) use impl_try_from_value;

/// Record field types without a column representation. Used in `value.rs`.
///
/// Equivalent to:
///
/// ```rust,ignore
/// impl ToValue for bool {
///     fn to_value(&self) -> Value {
///         Value::Unsupported("bool".to_owned())
///     }
/// }
/// ```
macro_rules! impl_unsupported_value {
    ($ftype:ty, $name:expr) => {
        impl $crate::ToValue for $ftype {
            fn to_value(&self) -> $crate::Value {
                $crate::Value::Unsupported($name.to_owned())
            }
        }
    };
}

pub(crate) use impl_unsupported_value;

/// Bind a Rust scalar to its Series variant. Used in `series.rs`.
///
/// Equivalent to:
///
/// ```rust,ignore
/// impl SeriesElement for f64 {
///     const DTYPE: ValueType = ValueType::F64;
///     fn empty() -> Self { f64::NAN }
///     fn from_value(value: Value) -> Result<Self, Value> { ... }
///     fn as_value(&self) -> Value { Value::F64(*self) }
///     fn into_series(s: TypedSeries<Self>) -> Series { Series::F64(s) }
///     fn try_series_ref(s: &Series) -> Option<&TypedSeries<Self>> { ... }
///     fn try_series_mut(s: &mut Series) -> Option<&mut TypedSeries<Self>> { ... }
/// }
/// ```
macro_rules! impl_series_element {
    ($ftype:ty, $val_var:ident, $empty:expr) => {
        impl $crate::SeriesElement for $ftype {
            const DTYPE: $crate::ValueType = $crate::ValueType::$val_var;

            fn empty() -> Self {
                $empty
            }

            fn from_value(value: $crate::Value) -> Result<Self, $crate::Value> {
                match value {
                    $crate::Value::$val_var(v) => Ok(v),
                    v => Err(v),
                }
            }

            fn as_value(&self) -> $crate::Value {
                $crate::Value::$val_var(self.clone())
            }

            fn into_series(s: $crate::TypedSeries<Self>) -> $crate::Series {
                $crate::Series::$val_var(s)
            }

            fn try_series_ref(s: &$crate::Series) -> Option<&$crate::TypedSeries<Self>> {
                match s {
                    $crate::Series::$val_var(s) => Some(s),
                    _ => None,
                }
            }

            fn try_series_mut(s: &mut $crate::Series) -> Option<&mut $crate::TypedSeries<Self>> {
                match s {
                    $crate::Series::$val_var(s) => Some(s),
                    _ => None,
                }
            }
        }
    };
}

pub(crate) use impl_series_element;

/// Dispatch an expression over the three Series variants
///
/// for instance:
/// ```rust,ignore
/// match self {
///     Series::String(s) => s.len(),
///     Series::I64(s) => s.len(),
///     Series::F64(s) => s.len(),
/// }
/// ```
macro_rules! s_dispatch {
    ($series:expr, $s:ident => $e:expr) => {
        match $series {
            $crate::Series::String($s) => $e,
            $crate::Series::I64($s) => $e,
            $crate::Series::F64($s) => $e,
        }
    };
}

pub(crate) use s_dispatch;

/// value creation macro
#[macro_export]
macro_rules! value {
    ($val:expr) => {{
        $crate::Value::from($val)
    }};
}

/// date creation macro
#[macro_export]
macro_rules! date {
    ($year:expr, $month:expr, $day:expr) => {
        $crate::chrono::NaiveDate::from_ymd_opt($year, $month, $day).unwrap_or_default()
    };
}

/// time creation macro
#[macro_export]
macro_rules! time {
    ($hour:expr, $minute:expr, $second:expr) => {
        $crate::chrono::NaiveTime::from_hms_opt($hour, $minute, $second).unwrap_or_default()
    };
}

/// datetime creation macro
#[macro_export]
macro_rules! datetime {
    ($year:expr, $month:expr, $day:expr, $hour:expr, $minute:expr, $second:expr) => {
        $crate::chrono::NaiveDateTime::new(
            $crate::date!($year, $month, $day),
            $crate::time!($hour, $minute, $second),
        )
    };
}

/// series creation macro, the row index is shared and its length must match the values
/// Supporting:
/// 1. series with default name
/// 1. series with given name
#[macro_export]
macro_rules! series {
    ($index:expr; $vec:expr) => {{
        $crate::Series::from_values($crate::IDX, $index, $vec)
    }};
    ($index:expr; $name:expr => $vec:expr) => {{
        $crate::Series::from_values($name, $index, $vec)
    }};
}

/// map-like records creation macro, each record becomes a `NamedRow`
///
/// ```rust,ignore
/// let records = records![
///     {"Name" => "a", "ValI" => 42i64},
///     {"Name" => "b", "ValF" => 2.0},
/// ];
/// ```
#[macro_export]
macro_rules! records {
    ($({$($key:expr => $val:expr),* $(,)*}),* $(,)*) => {{
        let mut buf: Vec<$crate::NamedRow> = Vec::new();
        $({
            let mut row: Vec<(String, $crate::Value)> = Vec::new();
            $(
                row.push(($key.to_string(), $crate::ToValue::to_value(&$val)));
            )*
            buf.push($crate::NamedRow::from_values(row));
        })*

        buf
    }};
}
