//! Compiled program data model: the document handed to the execution
//! engine and to submission storage.

pub mod types;

pub use types::*;
