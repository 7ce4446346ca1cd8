//! Framix Json Executor
//!
//! Json -> Frame:
//! 1. dynamic: a Json array of objects, read through `JsonRecord`
//! 1. typed: a Json array deserialized into records first (`serde` + `FieldAccessor`)

use framix_core::{CoreError, FieldAccessor, Frame, FrameBuilder};
use serde::de::DeserializeOwned;
use serde_json::Value as SerdeJsonValue;

use crate::rc::json_kind;
use crate::{JsonError, JsonRecord, JsonResult};

pub struct JsonExecutor {
    builder: FrameBuilder,
    pub(crate) data: Option<Frame>,
}

impl JsonExecutor {
    /// rows are keyed by the text field `key_field`
    pub fn new(key_field: &str) -> Self {
        Self::new_with_builder(FrameBuilder::new(key_field))
    }

    pub fn new_with_builder(builder: FrameBuilder) -> Self {
        Self {
            builder,
            data: None,
        }
    }

    pub fn data(&self) -> Option<&Frame> {
        self.data.as_ref()
    }

    /// take the built Frame out of the executor
    pub fn take_data(&mut self) -> JsonResult<Frame> {
        self.data.take().ok_or(JsonError::SourceNotFound)
    }

    pub fn from_json(&mut self, json: &SerdeJsonValue) -> JsonResult<&mut Self> {
        let items = match json {
            SerdeJsonValue::Array(items) => items,
            v => {
                return Err(CoreError::new_invalid_input_error(format!(
                    "a json array of records is expected, found {}",
                    json_kind(v)
                ))
                .into())
            }
        };

        let records = items.iter().map(JsonRecord).collect::<Vec<_>>();
        log::debug!("json: {} records read", records.len());
        self.data = Some(self.builder.build(&records)?);

        Ok(self)
    }

    pub fn from_str(&mut self, s: &str) -> JsonResult<&mut Self> {
        let json: SerdeJsonValue = serde_json::from_str(s)?;
        self.from_json(&json)
    }

    /// deserialize `s` into records of type `T` before building
    pub fn from_str_typed<T>(&mut self, s: &str) -> JsonResult<&mut Self>
    where
        T: DeserializeOwned + FieldAccessor,
    {
        let records: Vec<T> = serde_json::from_str(s)?;
        log::debug!("json: {} typed records read", records.len());
        self.data = Some(self.builder.build(&records)?);

        Ok(self)
    }
}

fn builder(key_field: &str, capacity: Option<usize>) -> FrameBuilder {
    let builder = FrameBuilder::new(key_field);
    match capacity {
        Some(c) => builder.capacity(c),
        None => builder,
    }
}

/// Build a Frame from a Json array of objects
pub fn frame_from_json(
    json: &SerdeJsonValue,
    key_field: &str,
    capacity: Option<usize>,
) -> JsonResult<Frame> {
    JsonExecutor::new_with_builder(builder(key_field, capacity))
        .from_json(json)?
        .take_data()
}

/// Build a Frame from a Json string holding an array of objects
pub fn frame_from_json_str(s: &str, key_field: &str, capacity: Option<usize>) -> JsonResult<Frame> {
    JsonExecutor::new_with_builder(builder(key_field, capacity))
        .from_str(s)?
        .take_data()
}
