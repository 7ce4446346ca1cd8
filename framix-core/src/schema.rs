//! Schema
//!
//! Frame Schema: the inferred `(column name, value type)` pairs in column order.

use serde::{Deserialize, Serialize};

use crate::ValueType;

/// field info: column name & column type
#[derive(Debug, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct FieldInfo {
    pub name: String,
    pub dtype: ValueType,
}

impl FieldInfo {
    pub fn new<T>(name: T, dtype: ValueType) -> Self
    where
        T: Into<String>,
    {
        let name = name.into();
        FieldInfo { name, dtype }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn dtype(&self) -> &ValueType {
        &self.dtype
    }
}

impl std::fmt::Display for FieldInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.name, self.dtype)
    }
}

/// Schema
///
/// Schema is the ordered FieldInfos collection of a Frame, names are unique.
#[derive(PartialEq, Eq, Clone, Default, Debug, Serialize, Deserialize)]
pub struct Schema(Vec<FieldInfo>);

impl Schema {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self(Vec::with_capacity(capacity))
    }

    pub fn from_field_infos<I: IntoIterator<Item = FieldInfo>>(field_infos: I) -> Self {
        let mut schema = Self::new();
        for fi in field_infos {
            schema.append(fi);
        }
        schema
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// append a field, or replace the type of an existing field of the same name
    pub fn append(&mut self, field_info: FieldInfo) {
        match self.0.iter_mut().find(|f| f.name == field_info.name) {
            Some(f) => f.dtype = field_info.dtype,
            None => self.0.push(field_info),
        }
    }

    pub fn get(&self, index: usize) -> Option<&FieldInfo> {
        self.0.get(index)
    }

    pub fn get_by_name(&self, name: &str) -> Option<&FieldInfo> {
        self.0.iter().find(|f| f.name == name)
    }

    pub fn position(&self, name: &str) -> Option<usize> {
        self.0.iter().position(|f| f.name == name)
    }

    pub fn names(&self) -> Vec<&str> {
        self.0.iter().map(FieldInfo::name).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldInfo> + '_ {
        self.0.iter()
    }
}

impl AsRef<[FieldInfo]> for Schema {
    fn as_ref(&self) -> &[FieldInfo] {
        &self.0
    }
}

impl From<Schema> for Vec<FieldInfo> {
    fn from(schema: Schema) -> Self {
        schema.0
    }
}

impl FromIterator<FieldInfo> for Schema {
    fn from_iter<I: IntoIterator<Item = FieldInfo>>(iter: I) -> Self {
        Self::from_field_infos(iter)
    }
}

#[cfg(test)]
mod test_schema {

    use super::*;

    #[test]
    fn schema_append_keeps_order() {
        let mut schema = Schema::with_capacity(3);
        schema.append(FieldInfo::new("Name", ValueType::String));
        schema.append(FieldInfo::new("ValF", ValueType::F64));
        schema.append(FieldInfo::new("Name", ValueType::String));

        assert_eq!(schema.len(), 2);
        assert_eq!(schema.names(), vec!["Name", "ValF"]);
        assert_eq!(schema.position("ValF"), Some(1));
        assert_eq!(
            schema.get_by_name("ValF").map(FieldInfo::dtype),
            Some(&ValueType::F64)
        );
        assert_eq!(schema.get(0).unwrap().to_string(), "Name: String");
    }
}
