//! S-expression printing for AST nodes
//!
//! Every node prints in fully parenthesized prefix form: `(+ 1 2)`,
//! `(cast (ptr int) p)`. Leaves print bare. The output is the canonical
//! text used by debugging dumps and as the oracle in tests; it is not meant
//! to be parsed back.

use std::fmt::{self, Display, Formatter, Write};
use std::io;

use super::{BinaryOp, Expr, ExprKind, Typespec, TypespecKind, UnaryOp, RED_ZONE, STACK_SEGMENT};
use crate::config::PrintConfig;
use crate::error::Result;

// ============================================================================
// Printer
// ============================================================================

/// Renders typespecs and expressions as canonical S-expressions.
///
/// The printer holds only its configuration, so one instance can print any
/// number of trees, from any number of threads.
#[derive(Debug, Clone, Default)]
pub struct Printer {
    config: PrintConfig,
}

impl Printer {
    /// Create a printer with the given configuration
    #[must_use]
    pub const fn new(config: PrintConfig) -> Self {
        Self { config }
    }

    /// Render a typespec into a new string
    #[must_use]
    pub fn typespec_to_string(&self, ty: &Typespec) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail.
        let _ = self.write_typespec(&mut out, ty);
        out
    }

    /// Render an expression into a new string
    #[must_use]
    pub fn expr_to_string(&self, expr: &Expr) -> String {
        let mut out = String::new();
        let _ = self.write_expr(&mut out, expr);
        out
    }

    /// Write a typespec to any formatting sink
    pub fn write_typespec<W: Write + ?Sized>(&self, out: &mut W, ty: &Typespec) -> fmt::Result {
        let mut out = Adapter(out);
        self.typespec(&mut out, ty)
    }

    /// Write an expression to any formatting sink
    pub fn write_expr<W: Write + ?Sized>(&self, out: &mut W, expr: &Expr) -> fmt::Result {
        let mut out = Adapter(out);
        self.expr(&mut out, expr)
    }

    /// Print a typespec to a byte sink such as stdout or a file
    #[tracing::instrument(skip_all, fields(kind = ty.kind().name()))]
    pub fn print_typespec<W: io::Write + ?Sized>(&self, sink: &mut W, ty: &Typespec) -> Result<()> {
        let text = self.typespec_to_string(ty);
        sink.write_all(text.as_bytes())?;
        tracing::trace!(bytes = text.len(), "printed typespec");
        Ok(())
    }

    /// Print an expression to a byte sink such as stdout or a file
    #[tracing::instrument(skip_all, fields(kind = expr.kind().name()))]
    pub fn print_expr<W: io::Write + ?Sized>(&self, sink: &mut W, expr: &Expr) -> Result<()> {
        let text = self.expr_to_string(expr);
        sink.write_all(text.as_bytes())?;
        tracing::trace!(bytes = text.len(), "printed expression");
        Ok(())
    }

    fn typespec(&self, out: &mut dyn Write, ty: &Typespec) -> fmt::Result {
        stacker::maybe_grow(RED_ZONE, STACK_SEGMENT, || match ty {
            Typespec::Name(name) => out.write_str(name),
            Typespec::Pointer { elem } => {
                out.write_str("(ptr ")?;
                self.typespec(out, elem)?;
                out.write_char(')')
            }
            Typespec::Array { elem, size } => {
                out.write_str("(arr ")?;
                self.typespec(out, elem)?;
                out.write_char(' ')?;
                self.expr(out, size)?;
                out.write_char(')')
            }
            Typespec::Function { args, ret } => {
                out.write_str("(func (")?;
                write_space_separated(out, args, |out, arg| self.typespec(out, arg))?;
                out.write_str(") ")?;
                self.typespec(out, ret)?;
                out.write_char(')')
            }
        })
    }

    fn expr(&self, out: &mut dyn Write, expr: &Expr) -> fmt::Result {
        stacker::maybe_grow(RED_ZONE, STACK_SEGMENT, || match expr {
            Expr::Int(value) => write!(out, "{value}"),
            Expr::Float(value) => self.float(out, *value),
            Expr::Str(value) => write!(out, "\"{value}\""),
            Expr::Name(name) => out.write_str(name),
            Expr::Cast { ty, expr } => {
                out.write_str("(cast ")?;
                self.typespec(out, ty)?;
                out.write_char(' ')?;
                self.expr(out, expr)?;
                out.write_char(')')
            }
            Expr::Call { callee, args } => {
                out.write_char('(')?;
                self.expr(out, callee)?;
                for arg in args {
                    out.write_char(' ')?;
                    self.expr(out, arg)?;
                }
                out.write_char(')')
            }
            Expr::Index { expr, index } => {
                out.write_str("(index ")?;
                self.expr(out, expr)?;
                out.write_char(' ')?;
                self.expr(out, index)?;
                out.write_char(')')
            }
            Expr::Field { expr, name } => {
                out.write_str("(field ")?;
                self.expr(out, expr)?;
                write!(out, " {name})")
            }
            Expr::Unary { op, expr } => {
                write!(out, "({op} ")?;
                self.expr(out, expr)?;
                out.write_char(')')
            }
            Expr::Binary { op, left, right } => {
                write!(out, "({op} ")?;
                self.expr(out, left)?;
                out.write_char(' ')?;
                self.expr(out, right)?;
                out.write_char(')')
            }
            Expr::Ternary {
                cond,
                then_expr,
                else_expr,
            } => {
                out.write_str("(if ")?;
                self.expr(out, cond)?;
                out.write_char(' ')?;
                self.expr(out, then_expr)?;
                out.write_char(' ')?;
                self.expr(out, else_expr)?;
                out.write_char(')')
            }
            Expr::Compound => out.write_str("(compound ...)"),
        })
    }

    /// Fixed-point notation, spelled like C's `%f` for non-finite values
    fn float(&self, out: &mut dyn Write, value: f64) -> fmt::Result {
        if value.is_nan() {
            out.write_str("nan")
        } else if value.is_infinite() {
            out.write_str(if value > 0.0 { "inf" } else { "-inf" })
        } else {
            write!(out, "{:.*}", self.config.float_precision, value)
        }
    }
}

// ============================================================================
// Free entry points
// ============================================================================

/// Print a typespec to a byte sink with the default configuration
pub fn print_typespec<W: io::Write + ?Sized>(sink: &mut W, ty: &Typespec) -> Result<()> {
    Printer::default().print_typespec(sink, ty)
}

/// Print an expression to a byte sink with the default configuration
pub fn print_expr<W: io::Write + ?Sized>(sink: &mut W, expr: &Expr) -> Result<()> {
    Printer::default().print_expr(sink, expr)
}

// ============================================================================
// Helpers
// ============================================================================

/// Lets the recursive printer take `&mut dyn Write` for any caller sink,
/// including unsized ones.
struct Adapter<'a, W: Write + ?Sized>(&'a mut W);

impl<W: Write + ?Sized> Write for Adapter<'_, W> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.0.write_str(s)
    }
}

fn write_space_separated<T>(
    out: &mut dyn Write,
    items: &[T],
    mut write_item: impl FnMut(&mut dyn Write, &T) -> fmt::Result,
) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            out.write_char(' ')?;
        }
        write_item(out, item)?;
    }
    Ok(())
}

// ============================================================================
// Display
// ============================================================================

impl Display for UnaryOp {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Display for BinaryOp {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Display for TypespecKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Display for ExprKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Display for Typespec {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Printer::default().write_typespec(f, self)
    }
}

impl Display for Expr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Printer::default().write_expr(f, self)
    }
}

// ============================================================================
// Tests
// ============================================================================
