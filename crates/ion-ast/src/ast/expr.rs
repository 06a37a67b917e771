//! Expression AST nodes for the Ion programming language

use std::mem;

use serde::{Deserialize, Serialize};

use super::{BinaryOp, Typespec, UnaryOp, RED_ZONE, STACK_SEGMENT};
use crate::error::{Error, Result};

/// A syntactic expression
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Expr {
    /// Integer literal (42)
    Int(u64),

    /// Floating-point literal (3.14)
    Float(#[serde(with = "float_repr")] f64),

    /// String literal, stored raw without unescaping
    Str(String),

    /// Name reference
    Name(String),

    /// Cast (cast(T, expr))
    Cast { ty: Box<Typespec>, expr: Box<Expr> },

    /// Function call (callee(args...))
    Call { callee: Box<Expr>, args: Vec<Expr> },

    /// Index access (expr[index])
    Index { expr: Box<Expr>, index: Box<Expr> },

    /// Field access (expr.name)
    Field { expr: Box<Expr>, name: String },

    /// Unary operation (-x, !flag)
    Unary { op: UnaryOp, expr: Box<Expr> },

    /// Binary operation (a + b)
    Binary {
        op: BinaryOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },

    /// Conditional (cond ? then_expr : else_expr)
    Ternary {
        cond: Box<Expr>,
        then_expr: Box<Expr>,
        else_expr: Box<Expr>,
    },

    /// Compound literal.
    ///
    /// Unsupported: the kind is reserved but carries no element type or
    /// initializers yet, and prints as a fixed placeholder.
    Compound,
}

impl Expr {
    /// Create an integer literal
    #[must_use]
    pub const fn int(value: u64) -> Self {
        Expr::Int(value)
    }

    /// Create a float literal
    #[must_use]
    pub const fn float(value: f64) -> Self {
        Expr::Float(value)
    }

    /// Create a string literal
    #[must_use]
    pub fn str(value: impl Into<String>) -> Self {
        Expr::Str(value.into())
    }

    /// Create a name reference
    #[must_use]
    pub fn name(name: impl Into<String>) -> Self {
        Expr::Name(name.into())
    }

    /// Create a cast
    #[must_use]
    pub fn cast(ty: Typespec, expr: Expr) -> Self {
        Expr::Cast {
            ty: Box::new(ty),
            expr: Box::new(expr),
        }
    }

    /// Create a call
    #[must_use]
    pub fn call(callee: Expr, args: Vec<Expr>) -> Self {
        Expr::Call {
            callee: Box::new(callee),
            args,
        }
    }

    /// Create an index access
    #[must_use]
    pub fn index(expr: Expr, index: Expr) -> Self {
        Expr::Index {
            expr: Box::new(expr),
            index: Box::new(index),
        }
    }

    /// Create a field access
    #[must_use]
    pub fn field(expr: Expr, name: impl Into<String>) -> Self {
        Expr::Field {
            expr: Box::new(expr),
            name: name.into(),
        }
    }

    /// Create a unary operation
    #[must_use]
    pub fn unary(op: UnaryOp, expr: Expr) -> Self {
        Expr::Unary {
            op,
            expr: Box::new(expr),
        }
    }

    /// Create a binary operation
    #[must_use]
    pub fn binary(op: BinaryOp, left: Expr, right: Expr) -> Self {
        Expr::Binary {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    /// Create a conditional
    #[must_use]
    pub fn ternary(cond: Expr, then_expr: Expr, else_expr: Expr) -> Self {
        Expr::Ternary {
            cond: Box::new(cond),
            then_expr: Box::new(then_expr),
            else_expr: Box::new(else_expr),
        }
    }

    /// Create the compound literal placeholder
    #[must_use]
    pub const fn compound() -> Self {
        Expr::Compound
    }

    /// Returns the kind discriminator of this node
    #[must_use]
    pub const fn kind(&self) -> ExprKind {
        match self {
            Expr::Int(_) => ExprKind::Int,
            Expr::Float(_) => ExprKind::Float,
            Expr::Str(_) => ExprKind::Str,
            Expr::Name(_) => ExprKind::Name,
            Expr::Cast { .. } => ExprKind::Cast,
            Expr::Call { .. } => ExprKind::Call,
            Expr::Index { .. } => ExprKind::Index,
            Expr::Field { .. } => ExprKind::Field,
            Expr::Unary { .. } => ExprKind::Unary,
            Expr::Binary { .. } => ExprKind::Binary,
            Expr::Ternary { .. } => ExprKind::Ternary,
            Expr::Compound => ExprKind::Compound,
        }
    }

    /// Read an expression from its JSON form, rejecting unknown node kinds
    pub fn from_json(source: &str) -> Result<Self> {
        super::from_json(source)
    }

    /// Serialize this expression to JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

impl Drop for Expr {
    fn drop(&mut self) {
        // Children are moved out and dropped here, one stack check per level.
        stacker::maybe_grow(RED_ZONE, STACK_SEGMENT, || match self {
            Expr::Int(_) | Expr::Float(_) | Expr::Str(_) | Expr::Name(_) | Expr::Compound => {}
            Expr::Cast { ty, expr } => {
                drop(Typespec::take(ty));
                drop(Expr::take(expr));
            }
            Expr::Call { callee, args } => {
                drop(Expr::take(callee));
                drop(mem::take(args));
            }
            Expr::Index { expr, index } => {
                drop(Expr::take(expr));
                drop(Expr::take(index));
            }
            Expr::Field { expr, .. } | Expr::Unary { expr, .. } => drop(Expr::take(expr)),
            Expr::Binary { left, right, .. } => {
                drop(Expr::take(left));
                drop(Expr::take(right));
            }
            Expr::Ternary {
                cond,
                then_expr,
                else_expr,
            } => {
                drop(Expr::take(cond));
                drop(Expr::take(then_expr));
                drop(Expr::take(else_expr));
            }
        });
    }
}

impl Expr {
    /// Move a boxed child out, leaving a childless node behind
    pub(crate) fn take(slot: &mut Box<Expr>) -> Expr {
        mem::replace(&mut **slot, Expr::Compound)
    }
}

/// JSON has no spelling for non-finite numbers, so those travel as the
/// strings the printer uses for them.
mod float_repr {
    use serde::de::{Error, Unexpected};
    use serde::{Deserialize, Deserializer, Serializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Repr {
        Number(f64),
        Text(String),
    }

    #[allow(clippy::trivially_copy_pass_by_ref)]
    pub fn serialize<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
        if value.is_nan() {
            serializer.serialize_str("nan")
        } else if value.is_infinite() {
            serializer.serialize_str(if *value > 0.0 { "inf" } else { "-inf" })
        } else {
            serializer.serialize_f64(*value)
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
        match Repr::deserialize(deserializer)? {
            Repr::Number(value) => Ok(value),
            Repr::Text(text) => match text.as_str() {
                "nan" => Ok(f64::NAN),
                "inf" => Ok(f64::INFINITY),
                "-inf" => Ok(f64::NEG_INFINITY),
                other => Err(D::Error::invalid_value(
                    Unexpected::Str(other),
                    &"a number, \"nan\", \"inf\" or \"-inf\"",
                )),
            },
        }
    }
}

/// The kind of an [`Expr`], without its payload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExprKind {
    Int,
    Float,
    Str,
    Name,
    Cast,
    Call,
    Index,
    Field,
    Unary,
    Binary,
    Ternary,
    Compound,
}

impl ExprKind {
    /// Every expression kind, ordered by tag
    pub const ALL: [ExprKind; 12] = [
        ExprKind::Int,
        ExprKind::Float,
        ExprKind::Str,
        ExprKind::Name,
        ExprKind::Cast,
        ExprKind::Call,
        ExprKind::Index,
        ExprKind::Field,
        ExprKind::Unary,
        ExprKind::Binary,
        ExprKind::Ternary,
        ExprKind::Compound,
    ];

    /// Returns the raw discriminator value
    #[must_use]
    pub const fn tag(self) -> u8 {
        self as u8
    }

    /// Human-readable name of the kind
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            ExprKind::Int => "int",
            ExprKind::Float => "float",
            ExprKind::Str => "str",
            ExprKind::Name => "name",
            ExprKind::Cast => "cast",
            ExprKind::Call => "call",
            ExprKind::Index => "index",
            ExprKind::Field => "field",
            ExprKind::Unary => "unary",
            ExprKind::Binary => "binary",
            ExprKind::Ternary => "ternary",
            ExprKind::Compound => "compound",
        }
    }
}

impl TryFrom<u8> for ExprKind {
    type Error = Error;

    fn try_from(tag: u8) -> Result<Self> {
        Self::ALL
            .get(usize::from(tag))
            .copied()
            .ok_or(Error::UnknownKindTag { node: "expr", tag })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_stamp_kind() {
        let cases = [
            (Expr::int(1), ExprKind::Int),
            (Expr::float(1.5), ExprKind::Float),
            (Expr::str("s"), ExprKind::Str),
            (Expr::name("x"), ExprKind::Name),
            (Expr::cast(Typespec::name("int"), Expr::name("x")), ExprKind::Cast),
            (Expr::call(Expr::name("f"), Vec::new()), ExprKind::Call),
            (Expr::index(Expr::name("a"), Expr::int(0)), ExprKind::Index),
            (Expr::field(Expr::name("p"), "x"), ExprKind::Field),
            (Expr::unary(UnaryOp::Neg, Expr::int(1)), ExprKind::Unary),
            (
                Expr::binary(BinaryOp::Add, Expr::int(1), Expr::int(2)),
                ExprKind::Binary,
            ),
            (
                Expr::ternary(Expr::name("c"), Expr::int(1), Expr::int(2)),
                ExprKind::Ternary,
            ),
            (Expr::compound(), ExprKind::Compound),
        ];
        for (expr, kind) in cases {
            assert_eq!(expr.kind(), kind);
        }
    }

    #[test]
    fn call_args_keep_order() {
        let call = Expr::call(
            Expr::name("f"),
            vec![Expr::int(1), Expr::int(2), Expr::int(3)],
        );
        let Expr::Call { args, .. } = &call else {
            panic!("expected call");
        };
        assert_eq!(*args, [Expr::int(1), Expr::int(2), Expr::int(3)]);
    }

    #[test]
    fn binary_keeps_operand_order() {
        let expr = Expr::binary(BinaryOp::Sub, Expr::name("a"), Expr::name("b"));
        let Expr::Binary { op, left, right } = &expr else {
            panic!("expected binary");
        };
        assert_eq!(*op, BinaryOp::Sub);
        assert_eq!(**left, Expr::name("a"));
        assert_eq!(**right, Expr::name("b"));
    }

    #[test]
    fn take_leaves_childless_node() {
        let mut slot = Box::new(Expr::field(Expr::name("p"), "x"));
        let taken = Expr::take(&mut slot);
        assert_eq!(taken, Expr::field(Expr::name("p"), "x"));
        assert_eq!(*slot, Expr::Compound);
    }

    #[test]
    fn non_finite_floats_survive_json() {
        assert_eq!(Expr::float(f64::NAN).to_json().unwrap(), r#"{"Float":"nan"}"#);
        assert_eq!(Expr::float(f64::INFINITY).to_json().unwrap(), r#"{"Float":"inf"}"#);
        assert_eq!(
            Expr::float(f64::NEG_INFINITY).to_json().unwrap(),
            r#"{"Float":"-inf"}"#
        );

        let nan = Expr::from_json(r#"{"Float":"nan"}"#).unwrap();
        assert!(matches!(nan, Expr::Float(v) if v.is_nan()));
        assert_eq!(
            Expr::from_json(r#"{"Float":"inf"}"#).unwrap(),
            Expr::float(f64::INFINITY)
        );
        assert_eq!(
            Expr::from_json(r#"{"Float":"-inf"}"#).unwrap(),
            Expr::float(f64::NEG_INFINITY)
        );
    }

    #[test]
    fn finite_floats_stay_numbers() {
        let json = Expr::float(2.5).to_json().unwrap();
        assert_eq!(json, r#"{"Float":2.5}"#);
        assert_eq!(Expr::from_json(&json).unwrap(), Expr::float(2.5));
    }

    #[test]
    fn json_rejects_unknown_float_spelling() {
        let err = Expr::from_json(r#"{"Float":"infinity"}"#).unwrap_err();
        assert!(matches!(err, Error::Malformed(_)));
        let err = Expr::from_json(r#"{"Float":null}"#).unwrap_err();
        assert!(matches!(err, Error::Malformed(_)));
    }

    #[test]
    fn json_accepts_deep_trees() {
        let mut expr = Expr::int(1);
        for _ in 0..500 {
            expr = Expr::unary(UnaryOp::Not, expr);
        }
        let restored = Expr::from_json(&expr.to_json().unwrap()).unwrap();
        assert_eq!(restored.to_string(), expr.to_string());
    }

    #[test]
    fn json_rejects_trailing_input() {
        let err = Expr::from_json(r#"{"Int":1} {"Int":2}"#).unwrap_err();
        assert!(matches!(err, Error::Malformed(_)));
    }

    #[test]
    fn kind_tags_round_trip() {
        for kind in ExprKind::ALL {
            assert_eq!(ExprKind::try_from(kind.tag()).unwrap(), kind);
        }
    }

    #[test]
    fn out_of_range_tag_is_rejected() {
        assert!(matches!(
            ExprKind::try_from(12),
            Err(Error::UnknownKindTag { node: "expr", tag: 12 })
        ));
        assert!(ExprKind::try_from(u8::MAX).is_err());
    }

    #[test]
    fn json_preserves_tree() {
        let expr = Expr::cast(
            Typespec::array(Typespec::name("char"), Expr::int(16)),
            Expr::call(Expr::name("alloc"), vec![Expr::str("buf")]),
        );
        let json = expr.to_json().unwrap();
        assert_eq!(Expr::from_json(&json).unwrap(), expr);
    }

    #[test]
    fn json_rejects_unknown_kind() {
        let err = Expr::from_json(r#"{"Lambda":{"body":{"Int":1}}}"#).unwrap_err();
        assert!(matches!(err, Error::Malformed(_)));
    }

    #[test]
    fn json_rejects_unknown_operator() {
        let err = Expr::from_json(r#"{"Unary":{"op":"Sqrt","expr":{"Int":4}}}"#).unwrap_err();
        assert!(matches!(err, Error::Malformed(_)));
    }
}
