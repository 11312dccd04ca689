//! Expressions carried by statements.
//!
//! Only the shapes statements need to hold; typing expressions is the type
//! checker's job.

use std::fmt;

use pfront_types::Type;

use crate::location::SourceLocation;

#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct Expr {
    pub kind: ExprKind,
    pub location: SourceLocation,
}

#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub enum ExprKind {
    /// Variable, state, or event name.
    Var(String),
    Int(i64),
    Bool(bool),
    Str(String),
    Null,
    /// Reference to the executing machine.
    This,
    /// `default(T)`
    Default(Type),
    Call { function: String, args: Vec<Expr> },
}

impl Expr {
    pub fn new(kind: ExprKind, location: SourceLocation) -> Self {
        Self { kind, location }
    }

    pub fn var(name: impl Into<String>, location: SourceLocation) -> Self {
        Self::new(ExprKind::Var(name.into()), location)
    }

    pub fn int(value: i64, location: SourceLocation) -> Self {
        Self::new(ExprKind::Int(value), location)
    }

    pub fn bool(value: bool, location: SourceLocation) -> Self {
        Self::new(ExprKind::Bool(value), location)
    }

    /// Direct sub-expressions, in source order.
    pub fn children(&self) -> &[Expr] {
        match &self.kind {
            ExprKind::Call { args, .. } => args,
            _ => &[],
        }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ExprKind::Var(name) => f.write_str(name),
            ExprKind::Int(value) => write!(f, "{value}"),
            ExprKind::Bool(value) => write!(f, "{value}"),
            ExprKind::Str(value) => write!(f, "{value:?}"),
            ExprKind::Null => f.write_str("null"),
            ExprKind::This => f.write_str("this"),
            ExprKind::Default(ty) => write!(f, "default({ty})"),
            ExprKind::Call { function, args } => {
                write!(f, "{function}(")?;
                for (i, arg) in args.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{arg}")?;
                }
                f.write_str(")")
            }
        }
    }
}
