//! Statement nodes.
//!
//! `CompoundStmt` is the single shape for "a sequence of statements". It is
//! normalized when built and immutable afterwards:
//! - it never contains another `CompoundStmt` (nested blocks are spliced in place)
//! - it never contains a `NoOp`
//!
//! Passes that consume statement lists rely on both without re-checking.

use crate::expr::Expr;
use crate::location::SourceLocation;

#[derive(Clone, PartialEq, Eq, Debug)]
pub enum Statement {
    /// Placeholder with no effect (e.g. a lone `;`).
    NoOp {
        location: SourceLocation,
    },
    Compound(CompoundStmt),
    Assign {
        location: SourceLocation,
        target: Expr,
        value: Expr,
    },
    If {
        location: SourceLocation,
        condition: Expr,
        then_branch: CompoundStmt,
        else_branch: CompoundStmt,
    },
    While {
        location: SourceLocation,
        condition: Expr,
        body: CompoundStmt,
    },
    Return {
        location: SourceLocation,
        value: Option<Expr>,
    },
    Break {
        location: SourceLocation,
    },
    Continue {
        location: SourceLocation,
    },
    Assert {
        location: SourceLocation,
        condition: Expr,
        message: String,
    },
    Print {
        location: SourceLocation,
        message: Expr,
    },
    /// Raise an event on the executing machine.
    Raise {
        location: SourceLocation,
        event: Expr,
        payload: Option<Expr>,
    },
    Send {
        location: SourceLocation,
        machine: Expr,
        event: Expr,
        payload: Option<Expr>,
    },
    Goto {
        location: SourceLocation,
        state: String,
        payload: Option<Expr>,
    },
    Call {
        location: SourceLocation,
        function: String,
        args: Vec<Expr>,
    },
}

impl Statement {
    pub fn no_op(location: SourceLocation) -> Self {
        Self::NoOp { location }
    }

    /// `if (condition) then_branch else else_branch`
    ///
    /// Branches are wrapped with [`CompoundStmt::from_statement`]; a missing
    /// else branch becomes an empty compound at the `if` location.
    pub fn if_else(
        location: SourceLocation,
        condition: Expr,
        then_branch: Statement,
        else_branch: Option<Statement>,
    ) -> Self {
        let else_branch = match else_branch {
            Some(stmt) => CompoundStmt::from_statement(stmt),
            None => CompoundStmt::empty(location),
        };
        Self::If {
            location,
            condition,
            then_branch: CompoundStmt::from_statement(then_branch),
            else_branch,
        }
    }

    /// `while (condition) body`
    pub fn while_loop(location: SourceLocation, condition: Expr, body: Statement) -> Self {
        Self::While {
            location,
            condition,
            body: CompoundStmt::from_statement(body),
        }
    }

    pub fn location(&self) -> &SourceLocation {
        match self {
            Self::Compound(compound) => compound.location(),
            Self::NoOp { location }
            | Self::Assign { location, .. }
            | Self::If { location, .. }
            | Self::While { location, .. }
            | Self::Return { location, .. }
            | Self::Break { location }
            | Self::Continue { location }
            | Self::Assert { location, .. }
            | Self::Print { location, .. }
            | Self::Raise { location, .. }
            | Self::Send { location, .. }
            | Self::Goto { location, .. }
            | Self::Call { location, .. } => location,
        }
    }

    pub fn is_no_op(&self) -> bool {
        matches!(self, Self::NoOp { .. })
    }

    pub fn is_compound(&self) -> bool {
        matches!(self, Self::Compound(_))
    }

    /// Node name used in dumps.
    pub fn name(&self) -> &'static str {
        match self {
            Self::NoOp { .. } => "NoOp",
            Self::Compound(_) => "Compound",
            Self::Assign { .. } => "Assign",
            Self::If { .. } => "If",
            Self::While { .. } => "While",
            Self::Return { .. } => "Return",
            Self::Break { .. } => "Break",
            Self::Continue { .. } => "Continue",
            Self::Assert { .. } => "Assert",
            Self::Print { .. } => "Print",
            Self::Raise { .. } => "Raise",
            Self::Send { .. } => "Send",
            Self::Goto { .. } => "Goto",
            Self::Call { .. } => "Call",
        }
    }
}

impl From<CompoundStmt> for Statement {
    fn from(compound: CompoundStmt) -> Self {
        Self::Compound(compound)
    }
}

/// Flat, no-op-free block of statements in execution order.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct CompoundStmt {
    location: SourceLocation,
    statements: Vec<Statement>,
}

impl CompoundStmt {
    /// Build a compound from any statements, normalizing as it goes.
    ///
    /// Nested compounds contribute their children in place and no-ops are
    /// dropped. Relative order of the remaining statements is preserved.
    /// Nested compounds are already flat, so one level of splicing flattens
    /// any depth.
    pub fn new(location: SourceLocation, statements: impl IntoIterator<Item = Statement>) -> Self {
        let mut flat = Vec::new();
        let mut spliced = 0usize;
        let mut elided = 0usize;

        for statement in statements {
            match statement {
                Statement::Compound(compound) => {
                    spliced += 1;
                    flat.extend(compound.statements);
                }
                Statement::NoOp { .. } => elided += 1,
                other => flat.push(other),
            }
        }

        if spliced > 0 || elided > 0 {
            tracing::trace!(
                %location,
                spliced,
                elided,
                len = flat.len(),
                "normalized compound statement"
            );
        }

        Self {
            location,
            statements: flat,
        }
    }

    pub fn empty(location: SourceLocation) -> Self {
        Self {
            location,
            statements: Vec::new(),
        }
    }

    /// View any statement as a compound.
    ///
    /// A compound is returned unchanged, without re-wrapping. A no-op
    /// becomes an empty compound; any other statement becomes a compound
    /// holding just that statement. Both take the statement's location.
    pub fn from_statement(statement: Statement) -> Self {
        match statement {
            Statement::Compound(compound) => compound,
            other => {
                let location = *other.location();
                Self::new(location, [other])
            }
        }
    }

    pub fn location(&self) -> &SourceLocation {
        &self.location
    }

    pub fn statements(&self) -> &[Statement] {
        &self.statements
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Statement> {
        self.statements.iter()
    }

    pub fn len(&self) -> usize {
        self.statements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }

    pub fn into_statements(self) -> Vec<Statement> {
        self.statements
    }
}

impl<'a> IntoIterator for &'a CompoundStmt {
    type Item = &'a Statement;
    type IntoIter = std::slice::Iter<'a, Statement>;

    fn into_iter(self) -> Self::IntoIter {
        self.statements.iter()
    }
}
