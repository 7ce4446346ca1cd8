//! Json
//!
//! Json -> Frame: a Json array of objects is read as a collection of map-like records.

pub mod ec;
pub mod error;
pub mod rc;

pub use ec::*;
pub use error::*;
pub use rc::*;
