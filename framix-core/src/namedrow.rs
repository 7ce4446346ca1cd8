//! Framix NamedRow
//!
//! A row as an ordered list of `(column name, value)` pairs. A NamedRow is both what a Frame
//! yields when iterated row-wise, and a map-like record accepted by the frame builder.
//!
//! Methods provided to Frame:
//! 1. get_row_by_idx
//! 1. get_row
//! 1. iter_rows

use serde::{de::Visitor, ser::SerializeMap, Deserialize, Serialize};

use crate::{
    util::Stepper, CoreResult, Frame, LookupResult, Series, SeriesIterator, Value, ValueType,
};

#[derive(Debug, Clone, PartialEq)]
pub struct NamedRow {
    pub index: Option<usize>,
    pub data: Vec<(String, Value)>,
}

impl Serialize for NamedRow {
    fn serialize<S>(&self, s: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut m = s.serialize_map(Some(self.len()))?;

        for (key, value) in self.data() {
            m.serialize_entry(key, value)?;
        }

        m.end()
    }
}

impl<'de> Deserialize<'de> for NamedRow {
    fn deserialize<D>(d: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct NamedRowVisitor;

        impl<'de> Visitor<'de> for NamedRowVisitor {
            type Value = NamedRow;

            fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
                formatter.write_str("{name: Value}")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: serde::de::MapAccess<'de>,
            {
                let mut data = Vec::<(String, Value)>::new();

                while let Some(kv) = map.next_entry()? {
                    data.push(kv);
                }

                Ok(NamedRow::new(None, data))
            }
        }

        d.deserialize_map(NamedRowVisitor)
    }
}

impl NamedRow {
    /// NamedRow constructor, `index` is the position of the row key in `data`
    pub fn new(index: Option<usize>, data: Vec<(String, Value)>) -> Self {
        let index = index.and_then(|i| if i >= data.len() { None } else { Some(i) });
        NamedRow { index, data }
    }

    /// NamedRow constructor, no index
    pub fn from_values(data: Vec<(String, Value)>) -> Self {
        NamedRow { index: None, data }
    }

    /// get data
    pub fn data(&self) -> &[(String, Value)] {
        &self.data
    }

    /// get the row key
    pub fn index(&self) -> Option<&Value> {
        self.index.and_then(|i| self.data.get(i).map(|t| &t.1))
    }

    /// get index type
    pub fn index_dtype(&self) -> Option<ValueType> {
        self.index().and_then(Value::value_type)
    }

    /// get a value by column name
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.data.iter().find(|(n, _)| n == name).map(|(_, v)| v)
    }

    /// check if the row is empty
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// row length
    pub fn len(&self) -> usize {
        self.data.len()
    }
}

impl Frame {
    /// get a row by its position in the row index
    pub fn get_row_by_idx(&self, idx: usize) -> CoreResult<NamedRow> {
        let data = self
            .columns()
            .iter()
            .map(|s| s.get(idx).map(|v| (s.name().to_owned(), v)))
            .collect::<LookupResult<Vec<_>>>()?;

        Ok(NamedRow::new(self.key_column_loc(), data))
    }

    /// get a row by its row key
    pub fn get_row(&self, key: &str) -> CoreResult<NamedRow> {
        let idx = self.row_index().lookup_str(key)?;
        self.get_row_by_idx(idx)
    }

    /// iterate over rows in row index order
    pub fn iter_rows(&self) -> IntoIteratorNamedRow<'_> {
        FrameIterToNamedRow(self).into_iter()
    }
}

pub struct FrameIterToNamedRow<'a>(&'a Frame);

pub struct IntoIteratorNamedRow<'a> {
    index: Option<usize>,
    data_iters: Vec<(&'a str, SeriesIterator<'a>)>,
    stepper: Stepper,
}

impl<'a> Iterator for IntoIteratorNamedRow<'a> {
    type Item = NamedRow;

    fn next(&mut self) -> Option<Self::Item> {
        if self.stepper.exhausted() {
            None
        } else {
            let data = self
                .data_iters
                .iter_mut()
                .filter_map(|(n, s)| s.next().map(|v| (n.to_string(), v)))
                .collect::<Vec<_>>();

            self.stepper.forward();
            Some(NamedRow::new(self.index, data))
        }
    }
}

impl<'a> IntoIterator for FrameIterToNamedRow<'a> {
    type Item = NamedRow;
    type IntoIter = IntoIteratorNamedRow<'a>;

    fn into_iter(self) -> Self::IntoIter {
        let data_iters = self
            .0
            .columns()
            .iter()
            .map(|s: &'a Series| (s.name(), s.iter()))
            .collect();

        IntoIteratorNamedRow {
            index: self.0.key_column_loc(),
            data_iters,
            stepper: Stepper::new(self.0.height()),
        }
    }
}

#[cfg(test)]
mod test_named_row {

    use crate::{records, value, Frame, NamedRow};

    #[test]
    fn named_row_se_and_de() {
        let row = NamedRow::new(
            Some(0),
            vec![
                ("Name".to_owned(), value!("a")),
                ("ValI".to_owned(), value!(42i64)),
            ],
        );
        assert_eq!(row.index(), Some(&value!("a")));
        assert_eq!(row.get("ValI"), Some(&value!(42i64)));

        let se = serde_json::to_string(&row).unwrap();
        assert_eq!(se, r#"{"Name":"a","ValI":42}"#);

        let de: NamedRow = serde_json::from_str(&se).unwrap();
        assert_eq!(de.data(), row.data());
        assert_eq!(de.index(), None);
    }

    #[test]
    fn frame_rows_success() {
        let records = records![
            {"Name" => "a", "ValI" => 1i64},
            {"Name" => "b", "ValI" => 2i64},
        ];
        let fx = Frame::from_records(&records, "Name", None).unwrap();

        let row = fx.get_row("b").unwrap();
        assert_eq!(row.index(), Some(&value!("b")));
        assert_eq!(row.get("ValI"), Some(&value!(2i64)));
        assert!(fx.get_row("z").is_err());

        let rows = fx.iter_rows().collect::<Vec<_>>();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].get("Name"), Some(&value!("a")));

        // rows are records too
        let rebuilt = Frame::from_records(&rows, "Name", None).unwrap();
        assert_eq!(rebuilt.shape(), fx.shape());
        assert_eq!(rebuilt.get_column_names(), fx.get_column_names());
    }
}
