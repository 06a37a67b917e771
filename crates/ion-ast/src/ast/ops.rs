//! Operator AST nodes for the Ion programming language
//!
//! The lexer hands operators over as raw token codes. They are decoded once
//! into closed enums here, so the printer works from the enum and never from
//! the code itself.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Unary operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UnaryOp {
    /// Negation (-)
    Neg,
    /// Unary plus (+)
    Pos,
    /// Logical NOT (!)
    Not,
    /// Bitwise complement (~)
    BitNot,
    /// Pointer dereference (*)
    Deref,
    /// Address-of (&)
    AddrOf,
}

impl UnaryOp {
    /// Every unary operator, in declaration order
    pub const ALL: [UnaryOp; 6] = [
        UnaryOp::Neg,
        UnaryOp::Pos,
        UnaryOp::Not,
        UnaryOp::BitNot,
        UnaryOp::Deref,
        UnaryOp::AddrOf,
    ];

    /// Returns the symbol representation of the operator
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            UnaryOp::Neg => "-",
            UnaryOp::Pos => "+",
            UnaryOp::Not => "!",
            UnaryOp::BitNot => "~",
            UnaryOp::Deref => "*",
            UnaryOp::AddrOf => "&",
        }
    }

    /// Decode a single-character token code from the lexer
    #[must_use]
    pub const fn from_token_code(code: char) -> Option<Self> {
        match code {
            '-' => Some(UnaryOp::Neg),
            '+' => Some(UnaryOp::Pos),
            '!' => Some(UnaryOp::Not),
            '~' => Some(UnaryOp::BitNot),
            '*' => Some(UnaryOp::Deref),
            '&' => Some(UnaryOp::AddrOf),
            _ => None,
        }
    }

    /// Look up an operator by its spelling
    #[must_use]
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|op| op.as_str() == symbol)
    }
}

impl TryFrom<char> for UnaryOp {
    type Error = Error;

    fn try_from(code: char) -> Result<Self, Self::Error> {
        Self::from_token_code(code).ok_or(Error::UnknownOperatorCode(code))
    }
}

impl FromStr for UnaryOp {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_symbol(s).ok_or_else(|| Error::UnknownOperator(s.to_string()))
    }
}

/// Binary operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BinaryOp {
    // Multiplicative
    /// Multiplication (*)
    Mul,
    /// Division (/)
    Div,
    /// Modulo (%)
    Mod,
    /// Bitwise AND (&)
    BitAnd,
    /// Left shift (<<)
    Shl,
    /// Right shift (>>)
    Shr,

    // Additive
    /// Addition (+)
    Add,
    /// Subtraction (-)
    Sub,
    /// Bitwise OR (|)
    BitOr,
    /// Bitwise XOR (^)
    BitXor,

    // Comparison
    /// Equal (==)
    Eq,
    /// Not equal (!=)
    NotEq,
    /// Less than (<)
    Lt,
    /// Less than or equal (<=)
    LtEq,
    /// Greater than (>)
    Gt,
    /// Greater than or equal (>=)
    GtEq,

    // Logical
    /// Logical AND (&&)
    And,
    /// Logical OR (||)
    Or,
}

impl BinaryOp {
    /// Every binary operator, in declaration order
    pub const ALL: [BinaryOp; 18] = [
        BinaryOp::Mul,
        BinaryOp::Div,
        BinaryOp::Mod,
        BinaryOp::BitAnd,
        BinaryOp::Shl,
        BinaryOp::Shr,
        BinaryOp::Add,
        BinaryOp::Sub,
        BinaryOp::BitOr,
        BinaryOp::BitXor,
        BinaryOp::Eq,
        BinaryOp::NotEq,
        BinaryOp::Lt,
        BinaryOp::LtEq,
        BinaryOp::Gt,
        BinaryOp::GtEq,
        BinaryOp::And,
        BinaryOp::Or,
    ];

    /// Returns the precedence of the operator (higher = binds tighter)
    #[must_use]
    pub const fn precedence(self) -> u8 {
        match self {
            BinaryOp::Or => 0,
            BinaryOp::And => 1,
            BinaryOp::Eq
            | BinaryOp::NotEq
            | BinaryOp::Lt
            | BinaryOp::LtEq
            | BinaryOp::Gt
            | BinaryOp::GtEq => 2,
            BinaryOp::Add | BinaryOp::Sub | BinaryOp::BitOr | BinaryOp::BitXor => 3,
            BinaryOp::Mul
            | BinaryOp::Div
            | BinaryOp::Mod
            | BinaryOp::BitAnd
            | BinaryOp::Shl
            | BinaryOp::Shr => 4,
        }
    }

    /// Returns the symbol representation of the operator
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            BinaryOp::Mul => "*",
            BinaryOp::Div => "/",
            BinaryOp::Mod => "%",
            BinaryOp::BitAnd => "&",
            BinaryOp::Shl => "<<",
            BinaryOp::Shr => ">>",
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::BitOr => "|",
            BinaryOp::BitXor => "^",
            BinaryOp::Eq => "==",
            BinaryOp::NotEq => "!=",
            BinaryOp::Lt => "<",
            BinaryOp::LtEq => "<=",
            BinaryOp::Gt => ">",
            BinaryOp::GtEq => ">=",
            BinaryOp::And => "&&",
            BinaryOp::Or => "||",
        }
    }

    /// Decode a single-character token code from the lexer.
    ///
    /// Multi-character operators have no single-character code; use
    /// [`BinaryOp::from_symbol`] for those.
    #[must_use]
    pub const fn from_token_code(code: char) -> Option<Self> {
        match code {
            '*' => Some(BinaryOp::Mul),
            '/' => Some(BinaryOp::Div),
            '%' => Some(BinaryOp::Mod),
            '&' => Some(BinaryOp::BitAnd),
            '+' => Some(BinaryOp::Add),
            '-' => Some(BinaryOp::Sub),
            '|' => Some(BinaryOp::BitOr),
            '^' => Some(BinaryOp::BitXor),
            '<' => Some(BinaryOp::Lt),
            '>' => Some(BinaryOp::Gt),
            _ => None,
        }
    }

    /// Look up an operator by its spelling
    #[must_use]
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|op| op.as_str() == symbol)
    }
}

impl TryFrom<char> for BinaryOp {
    type Error = Error;

    fn try_from(code: char) -> Result<Self, Self::Error> {
        Self::from_token_code(code).ok_or(Error::UnknownOperatorCode(code))
    }
}

impl FromStr for BinaryOp {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_symbol(s).ok_or_else(|| Error::UnknownOperator(s.to_string()))
    }
}
