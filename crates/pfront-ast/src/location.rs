//! Source locations attached to AST nodes.
//!
//! Locations are produced by the parser and only ever formatted into
//! diagnostics; nothing in this crate branches on them.

use std::fmt;

pub use rowan::{TextRange, TextSize};

/// Identifies a source file within a compilation.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, PartialOrd, Ord)]
pub struct SourceId(pub u32);

/// Span of source text that produced a node.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct SourceLocation {
    source: SourceId,
    range: TextRange,
}

impl SourceLocation {
    pub fn new(source: SourceId, range: TextRange) -> Self {
        Self { source, range }
    }

    /// Location from raw byte offsets.
    pub fn at(source: SourceId, start: u32, end: u32) -> Self {
        Self::new(source, TextRange::new(start.into(), end.into()))
    }

    pub fn source(&self) -> SourceId {
        self.source
    }

    pub fn range(&self) -> TextRange {
        self.range
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "#{}@{}..{}",
            self.source.0,
            u32::from(self.range.start()),
            u32::from(self.range.end())
        )
    }
}
