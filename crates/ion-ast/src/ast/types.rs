//! Typespec AST nodes for the Ion programming language

use std::mem;

use serde::{Deserialize, Serialize};

use super::{Expr, RED_ZONE, STACK_SEGMENT};
use crate::error::{Error, Result};

/// A syntactic type expression
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Typespec {
    /// A named type (int, Vector)
    Name(String),

    /// A pointer type (*T)
    Pointer { elem: Box<Typespec> },

    /// An array type ([N]T). The size is kept as written; whether it is a
    /// constant is decided by later stages.
    Array { elem: Box<Typespec>, size: Box<Expr> },

    /// A function type (func(A, B): C)
    Function {
        /// Parameter types, in source order
        args: Vec<Typespec>,
        /// Return type
        ret: Box<Typespec>,
    },
}

impl Typespec {
    /// Create a named type
    #[must_use]
    pub fn name(name: impl Into<String>) -> Self {
        Typespec::Name(name.into())
    }

    /// Create a pointer type
    #[must_use]
    pub fn ptr(elem: Typespec) -> Self {
        Typespec::Pointer {
            elem: Box::new(elem),
        }
    }

    /// Create an array type
    #[must_use]
    pub fn array(elem: Typespec, size: Expr) -> Self {
        Typespec::Array {
            elem: Box::new(elem),
            size: Box::new(size),
        }
    }

    /// Create a function type
    #[must_use]
    pub fn func(args: Vec<Typespec>, ret: Typespec) -> Self {
        Typespec::Function {
            args,
            ret: Box::new(ret),
        }
    }

    /// Returns the kind discriminator of this node
    #[must_use]
    pub const fn kind(&self) -> TypespecKind {
        match self {
            Typespec::Name(_) => TypespecKind::Name,
            Typespec::Pointer { .. } => TypespecKind::Pointer,
            Typespec::Array { .. } => TypespecKind::Array,
            Typespec::Function { .. } => TypespecKind::Function,
        }
    }

    /// Read a typespec from its JSON form, rejecting unknown node kinds
    pub fn from_json(source: &str) -> Result<Self> {
        super::from_json(source)
    }

    /// Serialize this typespec to JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

impl Drop for Typespec {
    fn drop(&mut self) {
        stacker::maybe_grow(RED_ZONE, STACK_SEGMENT, || match self {
            Typespec::Name(_) => {}
            Typespec::Pointer { elem } => drop(Typespec::take(elem)),
            Typespec::Array { elem, size } => {
                drop(Typespec::take(elem));
                drop(Expr::take(size));
            }
            Typespec::Function { args, ret } => {
                drop(mem::take(args));
                drop(Typespec::take(ret));
            }
        });
    }
}

impl Typespec {
    /// Move a boxed child out, leaving a childless node behind
    pub(crate) fn take(slot: &mut Box<Typespec>) -> Typespec {
        mem::replace(&mut **slot, Typespec::Name(String::new()))
    }
}

/// The kind of a [`Typespec`], without its payload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypespecKind {
    Name,
    Pointer,
    Array,
    Function,
}

impl TypespecKind {
    /// Returns the raw discriminator value
    #[must_use]
    pub const fn tag(self) -> u8 {
        self as u8
    }

    /// Human-readable name of the kind
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            TypespecKind::Name => "name",
            TypespecKind::Pointer => "pointer",
            TypespecKind::Array => "array",
            TypespecKind::Function => "function",
        }
    }
}

impl TryFrom<u8> for TypespecKind {
    type Error = Error;

    fn try_from(tag: u8) -> Result<Self> {
        match tag {
            0 => Ok(TypespecKind::Name),
            1 => Ok(TypespecKind::Pointer),
            2 => Ok(TypespecKind::Array),
            3 => Ok(TypespecKind::Function),
            _ => Err(Error::UnknownKindTag {
                node: "typespec",
                tag,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_stamp_kind() {
        assert_eq!(Typespec::name("int").kind(), TypespecKind::Name);
        assert_eq!(Typespec::ptr(Typespec::name("int")).kind(), TypespecKind::Pointer);
        assert_eq!(
            Typespec::array(Typespec::name("int"), Expr::int(4)).kind(),
            TypespecKind::Array
        );
        assert_eq!(
            Typespec::func(Vec::new(), Typespec::name("void")).kind(),
            TypespecKind::Function
        );
    }

    #[test]
    fn function_args_keep_order() {
        let ty = Typespec::func(
            vec![Typespec::name("a"), Typespec::name("b"), Typespec::name("c")],
            Typespec::name("r"),
        );
        let Typespec::Function { args, ret } = &ty else {
            panic!("expected function type");
        };
        let names: Vec<_> = args
            .iter()
            .map(|arg| match arg {
                Typespec::Name(name) => name.as_str(),
                _ => unreachable!(),
            })
            .collect();
        assert_eq!(names, ["a", "b", "c"]);
        assert_eq!(**ret, Typespec::name("r"));
    }

    #[test]
    fn kind_tags_round_trip() {
        for kind in [
            TypespecKind::Name,
            TypespecKind::Pointer,
            TypespecKind::Array,
            TypespecKind::Function,
        ] {
            assert_eq!(TypespecKind::try_from(kind.tag()).unwrap(), kind);
        }
    }

    #[test]
    fn out_of_range_tag_is_rejected() {
        assert!(matches!(
            TypespecKind::try_from(4),
            Err(Error::UnknownKindTag { node: "typespec", tag: 4 })
        ));
    }

    #[test]
    fn json_accepts_deep_trees() {
        let mut ty = Typespec::name("int");
        for _ in 0..500 {
            ty = Typespec::ptr(ty);
        }
        let restored = Typespec::from_json(&ty.to_json().unwrap()).unwrap();
        assert_eq!(restored, ty);
    }

    #[test]
    fn json_rejects_unknown_kind() {
        let err = Typespec::from_json(r#"{"Slice":{"elem":{"Name":"int"}}}"#).unwrap_err();
        assert!(matches!(err, Error::Malformed(_)));
    }
}
