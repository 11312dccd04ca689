//! Statement visitor.
//!
//! # Usage
//!
//! Implement `Visitor` for your struct. Override `visit_*` methods to add logic.
//! Call `walk_*` within your override to continue recursion (or omit it to stop).
//!
//! ```
//! use pfront_ast::{CompoundStmt, Statement, Visitor, walk_while};
//! use pfront_ast::{Expr, SourceLocation, SourceId};
//!
//! #[derive(Default)]
//! struct LoopDepth { current: usize, max: usize }
//!
//! impl Visitor for LoopDepth {
//!     fn visit_while(&mut self, condition: &Expr, body: &CompoundStmt) {
//!         self.current += 1;
//!         self.max = self.max.max(self.current);
//!         walk_while(self, condition, body);
//!         self.current -= 1;
//!     }
//! }
//!
//! let loc = SourceLocation::at(SourceId(0), 0, 1);
//! let brk = Statement::Break { location: loc };
//! let inner = Statement::while_loop(loc, Expr::bool(true, loc), brk);
//! let outer = Statement::while_loop(loc, Expr::bool(true, loc), inner);
//!
//! let mut depth = LoopDepth::default();
//! depth.visit_statement(&outer);
//! assert_eq!(depth.max, 2);
//! ```

use crate::expr::Expr;
use crate::stmt::{CompoundStmt, Statement};

pub trait Visitor: Sized {
    fn visit_statement(&mut self, stmt: &Statement) {
        walk_statement(self, stmt);
    }

    fn visit_compound(&mut self, compound: &CompoundStmt) {
        walk_compound(self, compound);
    }

    fn visit_if(
        &mut self,
        condition: &Expr,
        then_branch: &CompoundStmt,
        else_branch: &CompoundStmt,
    ) {
        walk_if(self, condition, then_branch, else_branch);
    }

    fn visit_while(&mut self, condition: &Expr, body: &CompoundStmt) {
        walk_while(self, condition, body);
    }

    /// Any statement without nested statements.
    fn visit_leaf(&mut self, stmt: &Statement) {
        walk_leaf(self, stmt);
    }

    fn visit_expr(&mut self, expr: &Expr) {
        walk_expr(self, expr);
    }
}

pub fn walk_statement<V: Visitor>(visitor: &mut V, stmt: &Statement) {
    match stmt {
        Statement::Compound(compound) => visitor.visit_compound(compound),
        Statement::If {
            condition,
            then_branch,
            else_branch,
            ..
        } => visitor.visit_if(condition, then_branch, else_branch),
        Statement::While {
            condition, body, ..
        } => visitor.visit_while(condition, body),
        _ => visitor.visit_leaf(stmt),
    }
}

pub fn walk_compound<V: Visitor>(visitor: &mut V, compound: &CompoundStmt) {
    for stmt in compound {
        visitor.visit_statement(stmt);
    }
}

pub fn walk_if<V: Visitor>(
    visitor: &mut V,
    condition: &Expr,
    then_branch: &CompoundStmt,
    else_branch: &CompoundStmt,
) {
    visitor.visit_expr(condition);
    visitor.visit_compound(then_branch);
    visitor.visit_compound(else_branch);
}

pub fn walk_while<V: Visitor>(visitor: &mut V, condition: &Expr, body: &CompoundStmt) {
    visitor.visit_expr(condition);
    visitor.visit_compound(body);
}

pub fn walk_leaf<V: Visitor>(visitor: &mut V, stmt: &Statement) {
    match stmt {
        Statement::Assign { target, value, .. } => {
            visitor.visit_expr(target);
            visitor.visit_expr(value);
        }
        Statement::Return { value, .. } => {
            if let Some(value) = value {
                visitor.visit_expr(value);
            }
        }
        Statement::Assert { condition, .. } => visitor.visit_expr(condition),
        Statement::Print { message, .. } => visitor.visit_expr(message),
        Statement::Raise { event, payload, .. } => {
            visitor.visit_expr(event);
            if let Some(payload) = payload {
                visitor.visit_expr(payload);
            }
        }
        Statement::Send {
            machine,
            event,
            payload,
            ..
        } => {
            visitor.visit_expr(machine);
            visitor.visit_expr(event);
            if let Some(payload) = payload {
                visitor.visit_expr(payload);
            }
        }
        Statement::Goto { payload, .. } => {
            if let Some(payload) = payload {
                visitor.visit_expr(payload);
            }
        }
        Statement::Call { args, .. } => {
            for arg in args {
                visitor.visit_expr(arg);
            }
        }
        // Nested statements are dispatched by walk_statement
        Statement::NoOp { .. }
        | Statement::Break { .. }
        | Statement::Continue { .. }
        | Statement::Compound(_)
        | Statement::If { .. }
        | Statement::While { .. } => {}
    }
}

pub fn walk_expr<V: Visitor>(visitor: &mut V, expr: &Expr) {
    for child in expr.children() {
        visitor.visit_expr(child);
    }
}
