//! Core Error
//!
//! Two layers: `LookupError` raised by `Index` operations, and `CoreError` raised by everything
//! else (a `LookupError` converts into `CoreError::Lookup`).

use thiserror::Error;

use crate::ValueType;

pub type CoreResult<T> = Result<T, CoreError>;

pub type LookupResult<T> = Result<T, LookupError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    #[error("wrong lookup type for key: {0}")]
    WrongKeyType(String),

    #[error("lookup failed for: {0}")]
    KeyNotFound(String),

    #[error("reverse lookup offset {0} out of range, length: {1}")]
    PositionOutOfRange(usize, usize),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("unsupported record type {0}")]
    UnsupportedRecordKind(String),

    #[error("field {column} has different types {first} vs {second}")]
    TypeConflict {
        column: String,
        first: ValueType,
        second: ValueType,
    },

    #[error(transparent)]
    Lookup(#[from] LookupError),

    #[error("type mismatch, expected: {expected}, found: {found}")]
    TypeMismatch { expected: ValueType, found: String },

    #[error("length does not match: {0} vs {1}")]
    LengthMismatch(usize, usize),

    #[error("index mismatch: {0}")]
    IndexMismatch(String),
}

impl CoreError {
    pub fn new_invalid_input_error<T>(msg: T) -> Self
    where
        T: Into<String>,
    {
        CoreError::InvalidInput(msg.into())
    }

    pub fn new_type_conflict_error<T>(column: T, first: ValueType, second: ValueType) -> Self
    where
        T: Into<String>,
    {
        CoreError::TypeConflict {
            column: column.into(),
            first,
            second,
        }
    }

    /// whether the error comes from an index lookup
    pub fn is_lookup_error(&self) -> bool {
        matches!(self, CoreError::Lookup(_))
    }
}
