//! Statement AST for the P modeling language front end.
//!
//! This crate provides:
//! - `Statement` - closed set of statement nodes, each carrying a `SourceLocation`
//! - `CompoundStmt` - a block, flattened and stripped of no-ops when built
//! - `Visitor` - traversal for downstream passes
//! - `StatementPrinter` - indented dumps for debugging
//!
//! # Example
//!
//! ```
//! use pfront_ast::{CompoundStmt, SourceId, SourceLocation, Statement};
//!
//! let loc = SourceLocation::at(SourceId(0), 0, 10);
//! let inner = CompoundStmt::new(loc, [Statement::Break { location: loc }]);
//! let block = CompoundStmt::new(loc, [Statement::no_op(loc), inner.into()]);
//!
//! assert_eq!(block.len(), 1);
//! assert!(!block.statements()[0].is_compound());
//! ```

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

mod expr;
mod location;
mod printer;
mod stmt;
mod visitor;

#[cfg(test)]
mod test_utils;

#[cfg(test)]
mod visitor_tests;

pub use expr::{Expr, ExprKind};
pub use location::{SourceId, SourceLocation, TextRange, TextSize};
pub use printer::StatementPrinter;
pub use stmt::{CompoundStmt, Statement};
pub use visitor::{
    Visitor, walk_compound, walk_expr, walk_if, walk_leaf, walk_statement, walk_while,
};
