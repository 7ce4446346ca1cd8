//! Json records
//!
//! A Json object is a map-like record: every entry is a field, scalars become values and the
//! rest is carried as unsupported (dropped by the frame builder).

use framix_core::{FieldAccessor, MapKey, RecordShape, Value};
use serde_json::Value as SerdeJsonValue;

/// Borrowed Json value used as a record
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JsonRecord<'a>(pub &'a SerdeJsonValue);

impl<'a> FieldAccessor for JsonRecord<'a> {
    fn shape(&self) -> RecordShape {
        match self.0 {
            SerdeJsonValue::Object(m) => RecordShape::Map(
                m.iter()
                    .map(|(k, v)| (MapKey::String(k.clone()), json_to_value(v)))
                    .collect(),
            ),
            v => RecordShape::Unsupported(json_kind(v).to_owned()),
        }
    }
}

impl<'a> From<&'a SerdeJsonValue> for JsonRecord<'a> {
    fn from(v: &'a SerdeJsonValue) -> Self {
        JsonRecord(v)
    }
}

/// Json value -> `Value`, a number is an `I64` if it fits, an `F64` otherwise
pub fn json_to_value(v: &SerdeJsonValue) -> Value {
    match v {
        SerdeJsonValue::String(s) => Value::String(s.clone()),
        SerdeJsonValue::Number(n) => match (n.as_i64(), n.as_f64()) {
            (Some(i), _) => Value::I64(i),
            (None, Some(f)) => Value::F64(f),
            (None, None) => Value::unsupported("number"),
        },
        v => Value::unsupported(json_kind(v)),
    }
}

/// Json type name used in logs and errors
pub(crate) fn json_kind(v: &SerdeJsonValue) -> &'static str {
    match v {
        SerdeJsonValue::Null => "null",
        SerdeJsonValue::Bool(_) => "bool",
        SerdeJsonValue::Number(_) => "number",
        SerdeJsonValue::String(_) => "string",
        SerdeJsonValue::Array(_) => "array",
        SerdeJsonValue::Object(_) => "object",
    }
}

#[cfg(test)]
mod test_json_record {

    use super::*;
    use serde_json::json;

    #[test]
    fn json_values() {
        assert_eq!(json_to_value(&json!("a")), Value::String("a".to_owned()));
        assert_eq!(json_to_value(&json!(42)), Value::I64(42));
        assert_eq!(json_to_value(&json!(2.5)), Value::F64(2.5));
        assert_eq!(json_to_value(&json!(u64::MAX)), Value::F64(u64::MAX as f64));
        assert!(json_to_value(&json!(true)).is_unsupported());
        assert!(json_to_value(&json!(null)).is_unsupported());
        assert!(json_to_value(&json!([1, 2])).is_unsupported());
        assert!(json_to_value(&json!({"k": 1})).is_unsupported());
    }

    #[test]
    fn json_record_shape() {
        let v = json!({"Name": "a", "ValI": 1, "Tags": ["x"]});
        match JsonRecord(&v).shape() {
            RecordShape::Map(entries) => {
                assert_eq!(entries.len(), 3);
                assert_eq!(entries[0].0, MapKey::String("Name".to_owned()));
                assert!(entries[2].1.is_unsupported());
            }
            _ => panic!("objects are map-like"),
        }

        let v = json!([1, 2]);
        assert_eq!(
            JsonRecord(&v).shape(),
            RecordShape::Unsupported("array".to_owned())
        );
    }
}
