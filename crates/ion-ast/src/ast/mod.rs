//! Abstract Syntax Tree (AST) for the Ion programming language
//!
//! This module defines the nodes an Ion parser builds: typespecs (syntactic
//! types) and expressions. Nodes are plain owned trees. Every child is held
//! in a `Box` or `Vec`, nothing is shared, and a node never changes after
//! its constructor returns. Dropping the root frees the whole tree.
//!
//! Trees may nest far deeper than the thread stack allows for plain
//! recursion. Printing, dropping and reading trees from JSON all grow the
//! stack on demand.
//!
//! No semantic checks happen here. Any combination of well-typed fields is
//! accepted and left for later stages to judge.

use serde::de::DeserializeOwned;

use crate::error::Result;

mod expr;
mod ops;
mod pretty;
mod types;

pub use expr::*;
pub use ops::*;
pub use pretty::{print_expr, print_typespec, Printer};
pub use types::*;

/// Remaining stack below which a recursive walk allocates a new segment
pub(crate) const RED_ZONE: usize = 32 * 1024;

/// Size of each extra stack segment
pub(crate) const STACK_SEGMENT: usize = 1024 * 1024;

/// Read a tree from JSON without serde_json's nesting limit, growing the
/// stack as the tree gets deeper.
pub(crate) fn from_json<T: DeserializeOwned>(source: &str) -> Result<T> {
    let mut de = serde_json::Deserializer::from_str(source);
    de.disable_recursion_limit();
    let value = T::deserialize(serde_stacker::Deserializer::new(&mut de))?;
    de.end()?;
    Ok(value)
}
