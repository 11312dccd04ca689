//! Indented text dump of statement trees.

use std::fmt::Write;

use crate::stmt::{CompoundStmt, Statement};

pub struct StatementPrinter<'a> {
    root: &'a Statement,
    spans: bool,
}

impl<'a> StatementPrinter<'a> {
    pub fn new(root: &'a Statement) -> Self {
        Self { root, spans: false }
    }

    /// Append each node's source location.
    pub fn with_spans(mut self, value: bool) -> Self {
        self.spans = value;
        self
    }

    pub fn dump(&self) -> String {
        let mut out = String::new();
        self.format(&mut out).expect("String write never fails");
        out
    }

    pub fn format(&self, w: &mut impl Write) -> std::fmt::Result {
        self.format_statement(self.root, 0, w)
    }

    fn format_statement(
        &self,
        stmt: &Statement,
        indent: usize,
        w: &mut impl Write,
    ) -> std::fmt::Result {
        let prefix = "  ".repeat(indent);
        write!(w, "{prefix}{}", stmt.name())?;

        match stmt {
            Statement::Assign { target, value, .. } => write!(w, " {target} = {value}")?,
            Statement::If { condition, .. } | Statement::While { condition, .. } => {
                write!(w, " {condition}")?
            }
            Statement::Return {
                value: Some(value), ..
            } => write!(w, " {value}")?,
            Statement::Assert {
                condition, message, ..
            } => write!(w, " {condition}, {message:?}")?,
            Statement::Print { message, .. } => write!(w, " {message}")?,
            Statement::Raise { event, payload, .. } => {
                write!(w, " {event}")?;
                if let Some(payload) = payload {
                    write!(w, ", {payload}")?;
                }
            }
            Statement::Send {
                machine,
                event,
                payload,
                ..
            } => {
                write!(w, " {machine}, {event}")?;
                if let Some(payload) = payload {
                    write!(w, ", {payload}")?;
                }
            }
            Statement::Goto { state, payload, .. } => {
                write!(w, " {state}")?;
                if let Some(payload) = payload {
                    write!(w, ", {payload}")?;
                }
            }
            Statement::Call { function, args, .. } => {
                write!(w, " {function}(")?;
                for (i, arg) in args.iter().enumerate() {
                    if i > 0 {
                        w.write_str(", ")?;
                    }
                    write!(w, "{arg}")?;
                }
                w.write_str(")")?;
            }
            _ => {}
        }

        if self.spans {
            write!(w, " {}", stmt.location())?;
        }
        writeln!(w)?;

        match stmt {
            Statement::Compound(compound) => self.format_children(compound, indent + 1, w),
            Statement::While { body, .. } => self.format_children(body, indent + 1, w),
            Statement::If {
                then_branch,
                else_branch,
                ..
            } => {
                writeln!(w, "{prefix}  Then")?;
                self.format_children(then_branch, indent + 2, w)?;
                if !else_branch.is_empty() {
                    writeln!(w, "{prefix}  Else")?;
                    self.format_children(else_branch, indent + 2, w)?;
                }
                Ok(())
            }
            _ => Ok(()),
        }
    }

    fn format_children(
        &self,
        compound: &CompoundStmt,
        indent: usize,
        w: &mut impl Write,
    ) -> std::fmt::Result {
        for child in compound {
            self.format_statement(child, indent, w)?;
        }
        Ok(())
    }
}

impl Statement {
    /// Dump this statement tree without locations.
    pub fn dump(&self) -> String {
        StatementPrinter::new(self).dump()
    }
}

impl CompoundStmt {
    /// Dump this block's statements without locations.
    pub fn dump(&self) -> String {
        let mut out = String::new();
        for stmt in self {
            out.push_str(&stmt.dump());
        }
        out
    }
}
