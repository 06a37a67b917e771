//! Ion AST - Syntax tree layer for the Ion compiler front end
//!
//! This crate provides:
//! - AST: Node definitions for typespecs and expressions, with one
//!   constructor per variant
//! - Operators: Closed unary/binary operator sets and lexer code conversion
//! - Printer: Canonical S-expression rendering used for debugging and as a
//!   test oracle
//! - Config: Printer configuration loaded from TOML

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Abstract Syntax Tree - typespec and expression nodes plus the printer
pub mod ast;

/// Printer configuration
pub mod config;

/// Error types shared by the crate's boundary operations
pub mod error;

/// Test utilities - sample trees for tests and benchmarks
pub mod testutil;

/// Convenience re-export of the node model
pub use ast::{BinaryOp, Expr, ExprKind, Typespec, TypespecKind, UnaryOp};

/// Convenience re-export of the printer
pub use ast::{print_expr, print_typespec, Printer};

/// Convenience re-export of configuration
pub use config::{ConfigError, PrintConfig};

/// Convenience re-export of errors
pub use error::{Error, Result};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_exists() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn nodes_are_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Expr>();
        assert_send_sync::<Typespec>();
    }

    #[test]
    fn concurrent_printing_is_consistent() {
        let expr = testutil::sample_exprs().swap_remove(5);
        let expected = expr.to_string();

        std::thread::scope(|scope| {
            let handles: Vec<_> = (0..4)
                .map(|_| scope.spawn(|| expr.to_string()))
                .collect();
            for handle in handles {
                assert_eq!(handle.join().unwrap(), expected);
            }
        });
    }
}
