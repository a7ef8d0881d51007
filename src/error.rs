//! Hard-failure error type for the compiler.
//!
//! Compilation is total over arbitrary user-authored graphs: unknown block
//! types, empty sockets, and unparsable literals all degrade to safe
//! defaults rather than failing. The only hard failures are a workspace
//! that cannot be decoded at all and a link graph that loops back on
//! itself, which the recursive normalizer could not terminate on.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CompileError {
    #[error("workspace is required: {0}")]
    Parse(String),

    #[error("block graph contains a cycle through block '{0}'")]
    CyclicGraph(String),
}
