//! Structural type model for the P modeling language front end.
//!
//! This crate provides:
//! - `Type` - immutable type trees with original and canonical representations
//! - assignability (`Type::is_assignable_from`) and canonicalization
//! - `TypeResolver` - turns parsed `TypeExpr` syntax into `Type` trees
//! - `TypeTable` - interning of types by canonical form
//!
//! # Example
//!
//! ```
//! use pfront_types::Type;
//!
//! let ints = Type::seq(Type::INT);
//! let alias = Type::seq(Type::typedef("Count", Type::INT));
//!
//! assert!(ints.is_assignable_from(&alias));
//! assert_eq!(alias.original_representation(), "seq[Count]");
//! assert_eq!(alias.canonical_representation(), "seq[int]");
//! ```

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

mod assign;
mod canonical;
mod config;
mod kind;
mod primitives;
mod resolve;
mod table;
mod types;

#[cfg(test)]
mod resolve_tests;

pub use assign::{TypeMismatch, check_assignable};
pub use config::{DEFAULT_RECURSION_FUEL, ResolverConfig};
pub use kind::TypeKind;
pub use primitives::PrimitiveType;
pub use resolve::{TypeExpr, TypeResolver, TypeScope};
pub use table::{
    TYPE_ANY, TYPE_BOOL, TYPE_DATA, TYPE_EVENT, TYPE_FLOAT, TYPE_INT, TYPE_MACHINE, TYPE_NULL,
    TYPE_STRING, TypeId, TypeTable,
};
pub use types::{
    EnumDecl, EnumElement, ForeignDecl, NamedField, PermissionType, Type, TypeDefDecl,
};

/// Errors that can occur during type resolution.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Name is neither a primitive keyword nor a declared type.
    #[error("unknown type `{0}`")]
    UnknownType(String),

    /// Permission type names an event that was never declared.
    #[error("unknown event `{0}`")]
    UnknownEvent(String),

    /// Typedef expands to itself. The path starts and ends with the same name.
    #[error("cyclic typedef: {}", .0.join(" -> "))]
    CyclicTypeDef(Vec<String>),

    #[error("`{0}` is declared more than once")]
    DuplicateDeclaration(String),

    /// Declaration reuses a primitive keyword.
    #[error("`{0}` is a reserved type name")]
    ReservedName(String),

    /// Tuple or named tuple written without any element.
    #[error("tuple type must have at least one element")]
    EmptyTuple,

    /// Recursion fuel exhausted (type nested too deeply).
    #[error("recursion limit exceeded")]
    RecursionLimitExceeded,
}

/// Result type for type resolution.
pub type Result<T> = std::result::Result<T, Error>;
