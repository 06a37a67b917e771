//! Error types for the Ion AST crate
//!
//! Construction and printing of well-formed trees cannot fail. Errors only
//! arise where data enters or leaves the crate: lexer codes that name no
//! operator, raw kind tags, serialized trees and output sinks.

use thiserror::Error;

use crate::config::ConfigError;

/// Result alias used by the crate's boundary operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised at the edges of the AST layer
#[derive(Error, Debug)]
pub enum Error {
    #[error("token code '{0}' is not an operator")]
    UnknownOperatorCode(char),

    #[error("unknown operator '{0}'")]
    UnknownOperator(String),

    #[error("unknown {node} kind tag {tag}")]
    UnknownKindTag { node: &'static str, tag: u8 },

    #[error("malformed syntax tree: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("failed to write to output sink: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Config(#[from] ConfigError),
}
