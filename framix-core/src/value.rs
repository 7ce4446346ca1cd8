//! framix value
//!
//! This module contains the value type, which is the atomic unit of data exchanged between
//! records and a Frame.
//!
//! Only three scalar kinds end up in a Frame: `String`, `I64` and `F64`. Anything else a record
//! exposes is carried as `Value::Unsupported`, naming the kind, and is dropped by the builder.

use std::fmt::Display;

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, TimeZone};
use serde::de::{self, IgnoredAny, MapAccess, SeqAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::{impl_try_from_value, impl_unsupported_value, impl_value_from};
use crate::CoreError;

// ================================================================================================
// Value & ValueType
// ================================================================================================

/// Value is the fundamental element exposed by a record field.
#[derive(PartialEq, Clone, Debug)]
pub enum Value {
    String(String),
    I64(i64),
    F64(f64),
    // the payload names the kind which cannot be stored, e.g. "NaiveDateTime"
    Unsupported(String),
}

impl Value {
    /// scalar kind of the value, `None` if unsupported
    pub fn value_type(&self) -> Option<ValueType> {
        match self {
            Value::String(_) => Some(ValueType::String),
            Value::I64(_) => Some(ValueType::I64),
            Value::F64(_) => Some(ValueType::F64),
            Value::Unsupported(_) => None,
        }
    }

    pub fn is_unsupported(&self) -> bool {
        matches!(self, Value::Unsupported(_))
    }

    /// type name used in error messages
    pub fn type_name(&self) -> &str {
        match self {
            Value::String(_) => "String",
            Value::I64(_) => "I64",
            Value::F64(_) => "F64",
            Value::Unsupported(k) => k.as_str(),
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s.as_str()),
            _ => None,
        }
    }

    pub fn unsupported<T: Into<String>>(kind: T) -> Self {
        Value::Unsupported(kind.into())
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::String(v) => f.write_str(v),
            Value::I64(v) => write!(f, "{:?}", v),
            Value::F64(v) => write!(f, "{:?}", v),
            Value::Unsupported(k) => write!(f, "<{}>", k),
        }
    }
}

/// Scalar kind of a Series
#[derive(PartialEq, Clone, Copy, Debug, Deserialize, Serialize, Eq, Hash)]
pub enum ValueType {
    String,
    I64,
    F64,
}

impl Display for ValueType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl TryFrom<&Value> for ValueType {
    type Error = CoreError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        value
            .value_type()
            .ok_or_else(|| CoreError::new_invalid_input_error(value.type_name()))
    }
}

// ================================================================================================
// serde
// ================================================================================================

impl Serialize for Value {
    fn serialize<S>(&self, s: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Value::String(v) => s.serialize_str(v),
            Value::I64(v) => s.serialize_i64(*v),
            Value::F64(v) => s.serialize_f64(*v),
            Value::Unsupported(_) => s.serialize_none(),
        }
    }
}

/// Deserializing never fails on a well-formed input: booleans, nulls, arrays and objects become
/// `Value::Unsupported`, so that a map-like record read from JSON keeps its scalar fields.
impl<'de> Deserialize<'de> for Value {
    fn deserialize<D>(d: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct ValueVisitor;

        impl<'de> Visitor<'de> for ValueVisitor {
            type Value = Value;

            fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
                formatter.write_str("a string, an integer or a float")
            }

            fn visit_bool<E: de::Error>(self, _: bool) -> Result<Self::Value, E> {
                Ok(Value::unsupported("bool"))
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
                Ok(Value::I64(v))
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
                // integers past i64::MAX widen to f64
                Ok(i64::try_from(v)
                    .map(Value::I64)
                    .unwrap_or_else(|_| Value::F64(v as f64)))
            }

            fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
                Ok(Value::F64(v))
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
                Ok(Value::String(v.to_owned()))
            }

            fn visit_string<E: de::Error>(self, v: String) -> Result<Self::Value, E> {
                Ok(Value::String(v))
            }

            fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
                Ok(Value::unsupported("null"))
            }

            fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
                Ok(Value::unsupported("null"))
            }

            fn visit_some<D>(self, d: D) -> Result<Self::Value, D::Error>
            where
                D: Deserializer<'de>,
            {
                d.deserialize_any(ValueVisitor)
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
            where
                A: SeqAccess<'de>,
            {
                while seq.next_element::<IgnoredAny>()?.is_some() {}
                Ok(Value::unsupported("seq"))
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                while map.next_entry::<IgnoredAny, IgnoredAny>()?.is_some() {}
                Ok(Value::unsupported("map"))
            }
        }

        d.deserialize_any(ValueVisitor)
    }
}

// ================================================================================================
// From X to `Value`
// ================================================================================================

impl_value_from!(String, String);
impl_value_from!(i64, I64);
impl_value_from!(f64, F64);

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::String(v.to_owned())
    }
}

// ================================================================================================
// TryFrom `Value` to X
// ================================================================================================

impl_try_from_value!(String, String);
impl_try_from_value!(I64, i64);
impl_try_from_value!(F64, f64);

// ================================================================================================
// ToValue: record field -> `Value`
// ================================================================================================

/// Conversion of a record field into a `Value`, borrowing the field.
///
/// Implemented for the three storable scalars and for common Rust types a record may carry
/// which have no column representation (they map to `Value::Unsupported`).
pub trait ToValue {
    fn to_value(&self) -> Value;
}

impl ToValue for String {
    fn to_value(&self) -> Value {
        Value::String(self.clone())
    }
}

impl ToValue for str {
    fn to_value(&self) -> Value {
        Value::String(self.to_owned())
    }
}

impl ToValue for i64 {
    fn to_value(&self) -> Value {
        Value::I64(*self)
    }
}

impl ToValue for f64 {
    fn to_value(&self) -> Value {
        Value::F64(*self)
    }
}

impl ToValue for Value {
    fn to_value(&self) -> Value {
        self.clone()
    }
}

impl<T: ToValue + ?Sized> ToValue for &T {
    fn to_value(&self) -> Value {
        (**self).to_value()
    }
}

impl<T: ToValue + ?Sized> ToValue for Box<T> {
    fn to_value(&self) -> Value {
        (**self).to_value()
    }
}

/// `None` behaves like an absent field
impl<T: ToValue> ToValue for Option<T> {
    fn to_value(&self) -> Value {
        match self {
            Some(v) => v.to_value(),
            None => Value::unsupported("None"),
        }
    }
}

impl<T> ToValue for Vec<T> {
    fn to_value(&self) -> Value {
        Value::unsupported("Vec")
    }
}

impl_unsupported_value!(bool, "bool");
impl_unsupported_value!(char, "char");
impl_unsupported_value!(i8, "i8");
impl_unsupported_value!(i16, "i16");
impl_unsupported_value!(i32, "i32");
impl_unsupported_value!(i128, "i128");
impl_unsupported_value!(u8, "u8");
impl_unsupported_value!(u16, "u16");
impl_unsupported_value!(u32, "u32");
impl_unsupported_value!(u64, "u64");
impl_unsupported_value!(usize, "usize");
impl_unsupported_value!(f32, "f32");
impl_unsupported_value!(NaiveDate, "NaiveDate");
impl_unsupported_value!(NaiveTime, "NaiveTime");
impl_unsupported_value!(NaiveDateTime, "NaiveDateTime");

impl<Tz: TimeZone> ToValue for DateTime<Tz> {
    fn to_value(&self) -> Value {
        Value::unsupported("DateTime")
    }
}
