//! Test utilities: terse statement builders.

use crate::{Expr, SourceId, SourceLocation, Statement};

pub fn loc(start: u32, end: u32) -> SourceLocation {
    SourceLocation::at(SourceId(0), start, end)
}

/// `function();` at the given offset.
pub fn call(function: &str, at: u32) -> Statement {
    Statement::Call {
        location: loc(at, at + 1),
        function: function.to_owned(),
        args: Vec::new(),
    }
}

/// `target = value;` at the given offset.
pub fn assign(target: &str, value: i64, at: u32) -> Statement {
    let location = loc(at, at + 1);
    Statement::Assign {
        location,
        target: Expr::var(target, location),
        value: Expr::int(value, location),
    }
}

pub fn no_op(at: u32) -> Statement {
    Statement::no_op(loc(at, at + 1))
}

/// Assert that a dump equals the expected text, ignoring common indentation.
#[macro_export]
macro_rules! assert_dump {
    ($actual:expr, $expected:literal) => {{
        let expected = indoc::indoc!($expected);
        assert_eq!($actual, expected);
    }};
}
