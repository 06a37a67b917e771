//! Test utilities for Ion ASTs
//!
//! Sample trees shared by unit tests, integration tests and benchmarks,
//! each paired with its canonical printed form.

use crate::ast::{BinaryOp, Expr, Typespec, UnaryOp};

/// The sample expressions, in the same order as [`SAMPLE_EXPR_TEXT`]
#[must_use]
pub fn sample_exprs() -> Vec<Expr> {
    vec![
        Expr::binary(BinaryOp::Add, Expr::int(1), Expr::int(2)),
        Expr::unary(UnaryOp::Neg, Expr::float(3.14)),
        Expr::ternary(Expr::name("flag"), Expr::str("true"), Expr::str("false")),
        Expr::field(Expr::name("person"), "name"),
        Expr::call(Expr::name("fact"), vec![Expr::int(42)]),
        Expr::index(Expr::field(Expr::name("person"), "siblings"), Expr::int(3)),
        Expr::cast(Typespec::ptr(Typespec::name("int")), Expr::name("void_ptr")),
    ]
}

/// Canonical text of each tree returned by [`sample_exprs`]
pub const SAMPLE_EXPR_TEXT: [&str; 7] = [
    "(+ 1 2)",
    "(- 3.140000)",
    "(if flag \"true\" \"false\")",
    "(field person name)",
    "(fact 42)",
    "(index (field person siblings) 3)",
    "(cast (ptr int) void_ptr)",
];

/// Sample typespecs covering every typespec kind
#[must_use]
pub fn sample_typespecs() -> Vec<Typespec> {
    vec![
        Typespec::name("int"),
        Typespec::ptr(Typespec::ptr(Typespec::name("char"))),
        Typespec::array(
            Typespec::name("float"),
            Expr::binary(BinaryOp::Mul, Expr::name("N"), Expr::int(4)),
        ),
        Typespec::func(
            vec![Typespec::name("int"), Typespec::ptr(Typespec::name("void"))],
            Typespec::name("bool"),
        ),
    ]
}

/// Canonical text of each tree returned by [`sample_typespecs`]
pub const SAMPLE_TYPESPEC_TEXT: [&str; 4] = [
    "int",
    "(ptr (ptr char))",
    "(arr float (* N 4))",
    "(func (int (ptr void)) bool)",
];

/// Wrap `leaf` in `depth` unary negations
#[must_use]
pub fn nested_unary(depth: usize, leaf: Expr) -> Expr {
    (0..depth).fold(leaf, |expr, _| Expr::unary(UnaryOp::Neg, expr))
}

/// Canonical text of [`nested_unary`] around an already printed leaf
#[must_use]
pub fn nested_unary_text(depth: usize, leaf: &str) -> String {
    format!("{}{leaf}{}", "(- ".repeat(depth), ")".repeat(depth))
}
