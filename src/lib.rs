pub mod compile;
pub mod error;
pub mod normalize;
pub mod parse;
pub mod program;
pub mod validate;
pub mod wasm;
