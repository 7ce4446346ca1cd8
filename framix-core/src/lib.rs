//! Framix core
//!
//! Typed columnar frames built from heterogeneous row-like records.

extern crate self as framix_core;

pub mod builder;
pub mod error;
pub mod frame;
pub mod index;
pub(crate) mod macros;
pub mod namedrow;
pub mod record;
pub mod schema;
pub mod series;
pub mod util;
pub mod value;

pub use builder::*;
pub use error::*;
pub use frame::*;
pub use index::*;
pub use namedrow::*;
pub use record::*;
pub use schema::*;
pub use series::*;
pub use value::*;

pub use chrono;
#[cfg(feature = "derive")]
pub use framix_derive::Record;
pub(crate) use macros::*;
pub use util::IDX;
pub(crate) use util::*;
