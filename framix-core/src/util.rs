//! Framix util
//!
//! utilities

use crate::{CoreError, LookupError, ValueType};

/// a general naming for a default series name
pub const IDX: &str = "index";

/// Used for counting iteration and determining when to stop yielding
pub struct Stepper {
    pub(crate) len: usize,
    pub(crate) step: usize,
}

impl Stepper {
    pub fn new(len: usize) -> Self {
        Stepper { len, step: 0 }
    }

    pub fn exhausted(&self) -> bool {
        self.len == self.step
    }

    pub fn forward(&mut self) {
        self.step += 1;
    }
}

/// key not found error
pub(crate) fn inf_err(key: &str) -> LookupError {
    LookupError::KeyNotFound(key.to_owned())
}

/// wrong key type error
pub(crate) fn wkt_err(type_name: &str) -> LookupError {
    LookupError::WrongKeyType(type_name.to_owned())
}

/// out of range error
pub(crate) fn oor_err(position: usize, len: usize) -> LookupError {
    LookupError::PositionOutOfRange(position, len)
}

/// type mismatch error
pub(crate) fn tms_err<T: ToString>(expected: ValueType, found: T) -> CoreError {
    CoreError::TypeMismatch {
        expected,
        found: found.to_string(),
    }
}

/// length does not match error
pub(crate) fn lnm_err(len1: usize, len2: usize) -> CoreError {
    CoreError::LengthMismatch(len1, len2)
}

/// index mismatch error
pub(crate) fn ims_err<T: Into<String>>(msg: T) -> CoreError {
    CoreError::IndexMismatch(msg.into())
}

/// invalid input error
pub(crate) fn iip_err<T: Into<String>>(msg: T) -> CoreError {
    CoreError::InvalidInput(msg.into())
}

/// unsupported record kind error
pub(crate) fn urk_err<T: Into<String>>(kind: T) -> CoreError {
    CoreError::UnsupportedRecordKind(kind.into())
}
