//! Configuration for type resolution.

/// Default nesting limit for type expressions.
pub const DEFAULT_RECURSION_FUEL: u32 = 256;

/// Configuration for [`TypeResolver`](crate::TypeResolver).
#[derive(Clone, Debug)]
pub struct ResolverConfig {
    /// Maximum nesting depth of a type expression, typedef expansion
    /// included. `None` = unlimited.
    pub(crate) recursion_fuel: Option<u32>,
    /// Whether events named in permission types must be declared
    pub(crate) check_events: bool,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            recursion_fuel: Some(DEFAULT_RECURSION_FUEL),
            check_events: true,
        }
    }
}

impl ResolverConfig {
    /// Create a new ResolverConfig with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set recursion fuel limit. None = infinite.
    ///
    /// Recursion fuel restores when exiting a nested type expression. It
    /// protects against deeply nested input.
    pub fn recursion_fuel(mut self, limit: Option<u32>) -> Self {
        self.recursion_fuel = limit;
        self
    }

    /// Set whether undeclared events in `any<...>` are rejected.
    pub fn check_events(mut self, value: bool) -> Self {
        self.check_events = value;
        self
    }
}
