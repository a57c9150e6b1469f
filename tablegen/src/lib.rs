//! Precomputed lookup tables for embedded targets.
//!
//! A [`TableSpec`] picks a [`Family`], a [`DataType`] and a length. Running it
//! generates normalized samples, quantizes them to fixed-point integers and
//! writes an include-guarded C header holding one `PROGMEM` array.

mod dtype;
mod error;
pub mod emitter;
pub mod generator;
pub mod quantizer;
pub mod report;
mod table;

pub use dtype::DataType;
pub use emitter::Header;
pub use error::{Error, Result};
pub use generator::{CoeffMethod, Family};
pub use table::{GeneratedTable, TableSpec};
